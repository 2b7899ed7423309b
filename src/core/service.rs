//! Generic list / add / update / soft-delete service shared by all entities

use crate::core::entity::{self, Entity, IS_DELETE};
use crate::core::error::{EntityError, RegistrarResult, StorageError, ValidationError};
use crate::core::query::ListParams;
use crate::core::store::{Document, DocumentQuery, DocumentStore, Fields};
use serde_json::Value;
use std::marker::PhantomData;
use std::sync::Arc;

/// CRUD service for one entity type
///
/// The service is stateless apart from the injected store handle; every call
/// re-reads from the store. Operations made of several store calls (check
/// then insert, fetch then update) are not atomic.
pub struct EntityService<E> {
    store: Arc<dyn DocumentStore>,
    _marker: PhantomData<E>,
}

impl<E> Clone for EntityService<E> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            _marker: PhantomData,
        }
    }
}

impl<E: Entity> EntityService<E> {
    /// Create a new service over the given store
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            _marker: PhantomData,
        }
    }

    /// Get the underlying store
    pub fn store(&self) -> &Arc<dyn DocumentStore> {
        &self.store
    }

    /// List one page of active documents
    ///
    /// Returns `EntityError::NoDocuments` when the page is empty.
    pub async fn list(&self, params: &ListParams) -> RegistrarResult<Vec<Document>> {
        let mut query = DocumentQuery::new();
        if let Some(keyword) = &params.keyword {
            query = query.where_eq(E::keyword_field(), keyword.as_str());
        }
        let query = query
            .where_ne(IS_DELETE, true)
            .offset(params.offset())
            .limit(params.limit());

        let documents = self.query(&query, "list").await?;

        if documents.is_empty() {
            return Err(EntityError::NoDocuments {
                entity_type: E::resource_name().to_string(),
            }
            .into());
        }

        Ok(documents)
    }

    /// Insert a new document unless an active one already uses its key
    ///
    /// Returns the identifier assigned by the store.
    pub async fn add(&self, fields: E::Fields) -> RegistrarResult<String> {
        let mut document = entity::to_field_map::<E>(&fields)?;
        let key = entity::key_value::<E>(&document)?;

        if self.key_in_use(&key).await? {
            return Err(EntityError::AlreadyExists {
                entity_type: E::resource_name().to_string(),
                field: E::conflict_field().to_string(),
            }
            .into());
        }

        E::derive_fields(&fields, &mut document);
        document.insert(IS_DELETE.to_string(), Value::Bool(false));

        let id = self
            .store
            .insert(E::collection(), document)
            .await
            .map_err(|e| StorageError::operation("insert", E::collection(), e))?;

        tracing::info!(entity = E::resource_name(), %id, "document added");
        Ok(id)
    }

    /// Overwrite the supplied fields of an existing document
    ///
    /// Fields absent from the payload, the soft-delete flag and derived
    /// fields are left untouched.
    pub async fn update(&self, id: &str, fields: E::Fields) -> RegistrarResult<()> {
        self.require(id).await?;

        let mut document = entity::to_field_map::<E>(&fields)?;
        document.remove(IS_DELETE);

        self.write(id, document, "update").await?;

        tracing::info!(entity = E::resource_name(), %id, "document updated");
        Ok(())
    }

    /// Mark a document as deleted
    ///
    /// Deleting an already-deleted document succeeds again.
    pub async fn delete(&self, id: &str) -> RegistrarResult<()> {
        self.require(id).await?;

        let mut document = Fields::new();
        document.insert(IS_DELETE.to_string(), Value::Bool(true));

        self.write(id, document, "delete").await?;

        tracing::info!(entity = E::resource_name(), %id, "document soft-deleted");
        Ok(())
    }

    async fn key_in_use(&self, key: &Value) -> RegistrarResult<bool> {
        let query = DocumentQuery::new()
            .where_eq(E::key_field(), key.clone())
            .where_ne(IS_DELETE, true)
            .limit(1);

        Ok(!self.query(&query, "uniqueness check").await?.is_empty())
    }

    async fn require(&self, id: &str) -> RegistrarResult<Document> {
        if id.is_empty() {
            return Err(ValidationError::MissingField {
                field: "Id".to_string(),
            }
            .into());
        }

        self.store
            .get(E::collection(), id)
            .await
            .map_err(|e| StorageError::operation("get", E::collection(), e))?
            .ok_or_else(|| {
                EntityError::NotFound {
                    entity_type: E::resource_name().to_string(),
                    id: id.to_string(),
                }
                .into()
            })
    }

    async fn query(&self, query: &DocumentQuery, operation: &str) -> RegistrarResult<Vec<Document>> {
        Ok(self
            .store
            .query(E::collection(), query)
            .await
            .map_err(|e| StorageError::operation(operation, E::collection(), e))?)
    }

    async fn write(&self, id: &str, document: Fields, operation: &str) -> RegistrarResult<()> {
        Ok(self
            .store
            .update(E::collection(), id, document)
            .await
            .map_err(|e| StorageError::operation(operation, E::collection(), e))?)
    }
}
