//! Core module containing the store abstraction, the generic entity service
//! and the credential resolver

pub mod auth;
pub mod entity;
pub mod envelope;
pub mod error;
pub mod extractors;
pub mod query;
pub mod service;
pub mod store;

pub use auth::{CredentialResolver, LoginOutcome, Profile};
pub use entity::Entity;
pub use envelope::{ApiResponse, Envelope};
pub use error::{EntityError, RegistrarError, RegistrarResult, StorageError, ValidationError};
pub use query::{ListParams, ListQuery};
pub use service::EntityService;
pub use store::{Document, DocumentQuery, DocumentStore, Fields};
