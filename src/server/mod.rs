//! Server module for building the HTTP server
//!
//! This module provides a `ServerBuilder` that registers:
//! - list / add / update / delete routes for every entity
//! - the login check route
//! - health routes

pub mod builder;
pub mod descriptor;
pub mod entity_registry;
pub mod exposure;
pub mod handlers;
pub mod host;

pub use builder::ServerBuilder;
pub use descriptor::CrudDescriptor;
pub use entity_registry::{EntityDescriptor, EntityRegistry};
pub use exposure::RestExposure;
pub use host::ServerHost;
