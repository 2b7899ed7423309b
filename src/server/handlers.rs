//! HTTP handlers for the generic entity routes and the login check

use crate::core::auth::{CredentialResolver, Profile};
use crate::core::entity::Entity;
use crate::core::envelope::{ApiResponse, Envelope, STATUS_SUCCESS};
use crate::core::error::{RegistrarResult, ValidationError};
use crate::core::extractors::{EnvelopeJson, EnvelopeQuery};
use crate::core::query::{ListParams, ListQuery};
use crate::core::service::EntityService;
use crate::core::store::Document;
use axum::extract::State;
use serde::Deserialize;

pub const LIST_MESSAGE: &str = "success";
pub const ADDED_MESSAGE: &str = "added successfully";
pub const UPDATED_MESSAGE: &str = "updated successfully";
pub const DELETED_MESSAGE: &str = "information delete successfully";

/// Body of an update request: the target `Id` next to the entity fields
#[derive(Debug, Deserialize)]
pub struct UpdateRequest<F> {
    #[serde(rename = "Id", default)]
    pub id: Option<String>,

    #[serde(flatten)]
    pub fields: F,
}

/// Body of a delete request
#[derive(Debug, Deserialize)]
pub struct DeleteRequest {
    #[serde(rename = "Id", default)]
    pub id: Option<String>,
}

/// Query string of the login check
#[derive(Debug, Deserialize)]
pub struct CheckUserQuery {
    #[serde(rename = "UserName")]
    pub user_name: Option<String>,

    #[serde(rename = "PassWord")]
    pub pass_word: Option<String>,
}

fn required(value: Option<String>, field: &str) -> Result<String, ValidationError> {
    value.ok_or_else(|| ValidationError::MissingField {
        field: field.to_string(),
    })
}

/// GET /api/{entity}/getlist
pub async fn list<E: Entity>(
    State(service): State<EntityService<E>>,
    EnvelopeQuery(query): EnvelopeQuery<ListQuery>,
) -> RegistrarResult<ApiResponse<Vec<Document>>> {
    let params = ListParams::try_from(query)?;
    let documents = service.list(&params).await?;
    let total = documents.len();

    Ok(ApiResponse::ok(Envelope::success(LIST_MESSAGE, documents, total)))
}

/// POST /api/{entity}/add-{entity}
pub async fn add<E: Entity>(
    State(service): State<EntityService<E>>,
    EnvelopeJson(fields): EnvelopeJson<E::Fields>,
) -> RegistrarResult<ApiResponse<String>> {
    let id = service.add(fields).await?;

    Ok(ApiResponse::created(Envelope::success(
        ADDED_MESSAGE,
        format!("added with ID: {id}"),
        1,
    )))
}

/// POST /api/{entity}/update-{entity}
pub async fn update<E: Entity>(
    State(service): State<EntityService<E>>,
    EnvelopeJson(request): EnvelopeJson<UpdateRequest<E::Fields>>,
) -> RegistrarResult<ApiResponse<()>> {
    let id = required(request.id, "Id")?;
    service.update(&id, request.fields).await?;

    Ok(ApiResponse::ok(Envelope::empty(STATUS_SUCCESS, UPDATED_MESSAGE)))
}

/// POST /api/{entity}/delete-{entity}
pub async fn delete<E: Entity>(
    State(service): State<EntityService<E>>,
    EnvelopeJson(request): EnvelopeJson<DeleteRequest>,
) -> RegistrarResult<ApiResponse<()>> {
    let id = required(request.id, "Id")?;
    service.delete(&id).await?;

    Ok(ApiResponse::ok(Envelope::empty(STATUS_SUCCESS, DELETED_MESSAGE)))
}

/// GET /api/user/checkuser
///
/// Invalid credentials are an HTTP 200 with envelope status 0.
pub async fn check_user(
    State(resolver): State<CredentialResolver>,
    EnvelopeQuery(query): EnvelopeQuery<CheckUserQuery>,
) -> RegistrarResult<ApiResponse<Profile>> {
    let user_name = required(query.user_name, "UserName")?;
    let pass_word = required(query.pass_word, "PassWord")?;

    let outcome = resolver.check_user(&user_name, &pass_word).await?;
    Ok(ApiResponse::ok(outcome.into_envelope()))
}
