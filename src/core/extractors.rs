//! Axum extractors that report rejections with the response envelope
//!
//! The stock `Json` and `Query` extractors answer malformed input with a
//! plain-text body. These wrappers turn the rejection into a
//! [`ValidationError`] so clients always receive the envelope.

use crate::core::error::{RegistrarError, ValidationError};
use axum::Json;
use axum::extract::{FromRequest, FromRequestParts, Query, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

/// JSON body extractor with envelope rejections
///
/// # Usage
///
/// ```rust,ignore
/// async fn add(EnvelopeJson(fields): EnvelopeJson<FacultyFields>) -> ... {
///     // fields is the deserialized body
/// }
/// ```
#[derive(Debug, Clone)]
pub struct EnvelopeJson<T>(pub T);

impl<S, T> FromRequest<S> for EnvelopeJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = RegistrarError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(ValidationError::InvalidBody {
                message: rejection.body_text(),
            }
            .into()),
        }
    }
}

/// Query string extractor with envelope rejections
#[derive(Debug, Clone)]
pub struct EnvelopeQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for EnvelopeQuery<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = RegistrarError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(Query(value)) => Ok(Self(value)),
            Err(rejection) => Err(ValidationError::InvalidQuery {
                message: rejection.body_text(),
            }
            .into()),
        }
    }
}
