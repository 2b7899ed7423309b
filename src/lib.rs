//! # registrar
//!
//! A document-store backed REST backend for academic records: accounts,
//! students, teachers, faculties and majors.
//!
//! ## Features
//!
//! - **Generic CRUD**: one `EntityService<E>` drives list / add / update /
//!   soft-delete for every record type
//! - **Uniform envelope**: every response is `{status, message, response, totalRecord}`
//! - **Soft delete**: records are flagged `IsDelete` and never removed
//! - **Login check**: credential lookup joined with the student or teacher
//!   profile
//! - **Pluggable storage**: in-memory store, MongoDB behind `mongodb_backend`
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use registrar::prelude::*;
//!
//! let app = ServerBuilder::new()
//!     .with_store(InMemoryDocumentStore::new())
//!     .with_cors_origin("http://localhost:3000")
//!     .build()?;
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:3004").await?;
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod core;
pub mod entities;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        auth::{CredentialResolver, LoginOutcome, Profile},
        entity::Entity,
        envelope::{ApiResponse, Envelope},
        error::{EntityError, RegistrarError, RegistrarResult, StorageError, ValidationError},
        query::{ListParams, ListQuery},
        service::EntityService,
        store::{Document, DocumentQuery, DocumentStore, Fields},
    };

    // === Macros ===
    pub use crate::impl_entity;

    // === Entities ===
    pub use crate::entities::{
        Faculty, FacultyFields, Major, MajorFields, Student, StudentFields, Teacher,
        TeacherFields, User, UserFields,
    };

    // === Storage ===
    #[cfg(feature = "in-memory")]
    pub use crate::storage::InMemoryDocumentStore;
    #[cfg(feature = "mongodb_backend")]
    pub use crate::storage::MongoDocumentStore;

    // === Config ===
    pub use crate::config::{AppConfig, StorageBackend};

    // === Server ===
    pub use crate::server::{EntityDescriptor, EntityRegistry, ServerBuilder, ServerHost};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use serde::{Deserialize, Serialize};
}
