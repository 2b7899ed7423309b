//! Uniform response envelope
//!
//! Every endpoint answers with `{status, message, response, totalRecord}`.
//! The HTTP status code and the envelope `status` travel together: a domain
//! rejection (duplicate key, invalid credentials) is an HTTP 200 whose
//! envelope status is 0, so clients must look at both.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

/// Envelope status: operation succeeded
pub const STATUS_SUCCESS: i8 = 1;

/// Envelope status: domain-level rejection (conflict, not found, bad credentials)
pub const STATUS_REJECTED: i8 = 0;

/// Envelope status: error (including "no documents found" on list)
pub const STATUS_ERROR: i8 = -1;

/// The response body shared by all endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub status: i8,
    pub message: String,
    pub response: Option<T>,
    #[serde(rename = "totalRecord")]
    pub total_record: usize,
}

impl<T> Envelope<T> {
    pub fn new(status: i8, message: impl Into<String>, response: Option<T>, total: usize) -> Self {
        Self {
            status,
            message: message.into(),
            response,
            total_record: total,
        }
    }

    /// Successful outcome carrying a payload
    pub fn success(message: impl Into<String>, response: T, total: usize) -> Self {
        Self::new(STATUS_SUCCESS, message, Some(response), total)
    }
}

impl Envelope<()> {
    /// Outcome without a payload (`response: null`, `totalRecord: 0`)
    pub fn empty(status: i8, message: impl Into<String>) -> Self {
        Self::new(status, message, None, 0)
    }
}

/// An envelope paired with the HTTP status code it is sent with
#[derive(Debug)]
pub struct ApiResponse<T> {
    pub status_code: StatusCode,
    pub envelope: Envelope<T>,
}

impl<T> ApiResponse<T> {
    pub fn new(status_code: StatusCode, envelope: Envelope<T>) -> Self {
        Self {
            status_code,
            envelope,
        }
    }

    pub fn ok(envelope: Envelope<T>) -> Self {
        Self::new(StatusCode::OK, envelope)
    }

    pub fn created(envelope: Envelope<T>) -> Self {
        Self::new(StatusCode::CREATED, envelope)
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (self.status_code, Json(self.envelope)).into_response()
    }
}
