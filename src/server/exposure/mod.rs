//! API exposure modules
//!
//! Each exposure consumes a `ServerHost` and produces a Router.

pub mod rest;

pub use rest::RestExposure;
