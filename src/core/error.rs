//! Typed error handling
//!
//! Every failure a handler can produce is a [`RegistrarError`]. The error
//! knows its HTTP status code and its envelope status, and renders itself as
//! the uniform response envelope.
//!
//! # Error Categories
//!
//! - [`EntityError`]: domain outcomes of entity operations (duplicate key,
//!   unknown id, empty list)
//! - [`ValidationError`]: malformed client input
//! - [`StorageError`]: failures of the document store
//!
//! Internal failures never leak their detail to the client: the response
//! carries a generic message and the detail goes to the log.

use crate::core::envelope::{ApiResponse, Envelope, STATUS_ERROR, STATUS_REJECTED};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Generic message sent to clients for internal failures
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

/// The main error type of the crate
#[derive(Debug, Error)]
pub enum RegistrarError {
    /// Domain outcomes of entity operations
    #[error(transparent)]
    Entity(#[from] EntityError),

    /// Malformed client input
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Document store failures
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Anything else that should not happen in normal operation
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RegistrarError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            RegistrarError::Entity(e) => e.status_code(),
            RegistrarError::Validation(_) => StatusCode::BAD_REQUEST,
            RegistrarError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            RegistrarError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the envelope `status` value for this error
    pub fn envelope_status(&self) -> i8 {
        match self {
            RegistrarError::Entity(e) => e.envelope_status(),
            _ => STATUS_ERROR,
        }
    }

    /// Whether this error is an unexpected failure rather than a domain outcome
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            RegistrarError::Storage(_) | RegistrarError::Internal(_)
        )
    }

    /// Message sent to the client
    pub fn client_message(&self) -> String {
        if self.is_internal() {
            INTERNAL_ERROR_MESSAGE.to_string()
        } else {
            self.to_string()
        }
    }

    /// Convert to the response envelope
    pub fn to_envelope(&self) -> Envelope<()> {
        Envelope::empty(self.envelope_status(), self.client_message())
    }
}

impl IntoResponse for RegistrarError {
    fn into_response(self) -> Response {
        if self.is_internal() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(reason = %self, "request rejected");
        }

        ApiResponse::new(self.status_code(), self.to_envelope()).into_response()
    }
}

// =============================================================================
// Entity Errors
// =============================================================================

/// Domain outcomes of entity operations
#[derive(Debug, Error)]
pub enum EntityError {
    /// An active record already uses the unique key
    #[error("{field} already exists")]
    AlreadyExists { entity_type: String, field: String },

    /// No document with this id
    #[error("Document not found")]
    NotFound { entity_type: String, id: String },

    /// A list query matched nothing
    #[error("No documents found")]
    NoDocuments { entity_type: String },
}

impl EntityError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            EntityError::AlreadyExists { .. } => StatusCode::OK,
            EntityError::NotFound { .. } => StatusCode::NOT_FOUND,
            EntityError::NoDocuments { .. } => StatusCode::NOT_FOUND,
        }
    }

    pub fn envelope_status(&self) -> i8 {
        match self {
            EntityError::AlreadyExists { .. } => STATUS_REJECTED,
            EntityError::NotFound { .. } => STATUS_REJECTED,
            // Empty lists share the error status with internal failures
            EntityError::NoDocuments { .. } => STATUS_ERROR,
        }
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Malformed client input
#[derive(Debug, Error)]
pub enum ValidationError {
    /// `pageNumber` / `perPage` not a positive integer
    #[error("Invalid page parameters")]
    InvalidPageParameters,

    /// A required field is absent from the request
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// Request body could not be parsed
    #[error("Invalid request body: {message}")]
    InvalidBody { message: String },

    /// Query string could not be parsed
    #[error("Invalid query string: {message}")]
    InvalidQuery { message: String },
}

// =============================================================================
// Storage Errors
// =============================================================================

/// Document store failures
#[derive(Debug, Error)]
pub enum StorageError {
    /// A store operation failed
    #[error("{operation} on '{collection}' failed: {message}")]
    OperationFailed {
        operation: String,
        collection: String,
        message: String,
    },
}

impl StorageError {
    /// Wrap a backend error with the operation and collection it came from
    pub fn operation(operation: &str, collection: &str, err: anyhow::Error) -> Self {
        StorageError::OperationFailed {
            operation: operation.to_string(),
            collection: collection.to_string(),
            message: format!("{err:#}"),
        }
    }
}

/// Convert from anyhow::Error raised outside a known store call
impl From<anyhow::Error> for RegistrarError {
    fn from(err: anyhow::Error) -> Self {
        RegistrarError::Internal(format!("{err:#}"))
    }
}

/// A specialized Result type for registrar operations
pub type RegistrarResult<T> = Result<T, RegistrarError>;
