//! In-memory implementation of DocumentStore for testing and development

use crate::core::store::{Document, DocumentQuery, DocumentStore, Fields};
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

type Collection = IndexMap<String, Fields>;

/// In-memory document store
///
/// Collections keep insertion order, which is the order queries return.
/// Identifiers are random UUID strings. Uses RwLock for thread-safe access.
#[derive(Clone, Default)]
pub struct InMemoryDocumentStore {
    collections: Arc<RwLock<HashMap<String, Collection>>>,
}

impl InMemoryDocumentStore {
    /// Create a new, empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a document under a caller-chosen identifier
    ///
    /// Used to seed fixtures whose ids other documents refer to.
    pub fn insert_with_id(&self, collection: &str, id: &str, fields: Fields) -> Result<()> {
        let mut collections = self
            .collections
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        collections
            .entry(collection.to_string())
            .or_default()
            .insert(id.to_string(), fields);

        Ok(())
    }

    /// Number of documents in a collection, deleted ones included
    pub fn count(&self, collection: &str) -> usize {
        self.collections
            .read()
            .map(|collections| collections.get(collection).map_or(0, IndexMap::len))
            .unwrap_or(0)
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn query(&self, collection: &str, query: &DocumentQuery) -> Result<Vec<Document>> {
        let collections = self
            .collections
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        let Some(documents) = collections.get(collection) else {
            return Ok(Vec::new());
        };

        Ok(documents
            .iter()
            .filter(|(_, data)| query.matches(data))
            .skip(query.offset.unwrap_or(0))
            .take(query.limit.unwrap_or(usize::MAX))
            .map(|(id, data)| Document::new(id.clone(), data.clone()))
            .collect())
    }

    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>> {
        let collections = self
            .collections
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(collections
            .get(collection)
            .and_then(|documents| documents.get(id))
            .map(|data| Document::new(id, data.clone())))
    }

    async fn insert(&self, collection: &str, fields: Fields) -> Result<String> {
        let id = Uuid::new_v4().simple().to_string();
        self.insert_with_id(collection, &id, fields)?;
        Ok(id)
    }

    async fn update(&self, collection: &str, id: &str, fields: Fields) -> Result<()> {
        let mut collections = self
            .collections
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        let document = collections
            .get_mut(collection)
            .and_then(|documents| documents.get_mut(id))
            .ok_or_else(|| anyhow!("Document not found: {}/{}", collection, id))?;

        document.extend(fields);

        Ok(())
    }
}
