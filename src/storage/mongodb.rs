//! MongoDB storage backend using the official MongoDB async driver.
//!
//! Provides `MongoDocumentStore`, a `DocumentStore` backed by a MongoDB
//! database via `mongodb::Database`.
//!
//! # Feature flag
//!
//! This module is gated behind the `mongodb_backend` feature flag:
//! ```toml
//! [dependencies]
//! registrar-rs = { version = "0.1", features = ["mongodb_backend"] }
//! ```
//!
//! # Storage model
//!
//! Each store collection maps to the MongoDB collection of the same name
//! (`tbl_User`, `tbl_Student`, ...). Identifiers are MongoDB `ObjectId`s,
//! exposed as their 24-character hex form. Queries return documents in `_id`
//! order, which follows insertion order.
//!
//! # Serialization strategy
//!
//! Field maps travel as `serde_json` objects and are converted to BSON
//! documents on the way in. On the way out the `_id` is stripped from the
//! field map and returned as the document identifier.

use crate::core::store::{Document as StoredDocument, DocumentQuery, DocumentStore, Fields};
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{Bson, Document, doc};
use mongodb::options::IndexOptions;
use mongodb::{Database, IndexModel};
use serde_json::Value;

// ---------------------------------------------------------------------------
// Conversion helpers
// ---------------------------------------------------------------------------

/// Convert a field map into a BSON document.
fn fields_to_document(fields: &Fields) -> Result<Document> {
    mongodb::bson::to_document(fields).map_err(|e| anyhow!("Failed to convert fields to BSON: {}", e))
}

/// Convert a JSON value into BSON for use inside a filter.
fn value_to_bson(value: &Value) -> Result<Bson> {
    mongodb::bson::to_bson(value).map_err(|e| anyhow!("Failed to convert value to BSON: {}", e))
}

/// Split a BSON document into its identifier and field map.
fn document_to_stored(mut doc: Document) -> Result<StoredDocument> {
    let id = match doc.remove("_id") {
        Some(Bson::ObjectId(oid)) => oid.to_hex(),
        Some(Bson::String(s)) => s,
        Some(other) => return Err(anyhow!("Unsupported _id type: {}", other)),
        None => return Err(anyhow!("Document has no _id")),
    };

    match Bson::Document(doc).into_relaxed_extjson() {
        Value::Object(data) => Ok(StoredDocument::new(id, data)),
        _ => Err(anyhow!("Expected BSON document, got non-object")),
    }
}

/// Build the MongoDB filter for a query.
///
/// The not-equal predicate also requires the field to exist, so documents
/// lacking the field never match it.
fn query_filter(query: &DocumentQuery) -> Result<Document> {
    let mut clauses: Vec<Document> = Vec::with_capacity(query.equals.len() + 1);

    for (field, value) in &query.equals {
        clauses.push(doc! { field.as_str(): value_to_bson(value)? });
    }

    if let Some((field, value)) = &query.not_equal {
        clauses.push(doc! {
            field.as_str(): { "$exists": true, "$ne": value_to_bson(value)? }
        });
    }

    Ok(match clauses.len() {
        0 => doc! {},
        1 => clauses.remove(0),
        _ => doc! { "$and": clauses },
    })
}

/// Build the `_id` filter for an identifier, `None` if it cannot exist.
fn id_filter(id: &str) -> Option<Document> {
    ObjectId::parse_str(id).ok().map(|oid| doc! { "_id": oid })
}

// ---------------------------------------------------------------------------
// MongoDocumentStore
// ---------------------------------------------------------------------------

/// Document store backed by MongoDB.
///
/// # Example
///
/// ```rust,ignore
/// use mongodb::Client;
/// use registrar::storage::MongoDocumentStore;
///
/// let client = Client::with_uri_str("mongodb://localhost:27017").await?;
/// let store = MongoDocumentStore::new(client.database("registrar"));
/// store.ensure_indexes(&registrar::entities::unique_keys()).await?;
/// ```
#[derive(Clone, Debug)]
pub struct MongoDocumentStore {
    database: Database,
}

impl MongoDocumentStore {
    /// Create a new `MongoDocumentStore` with the given database handle.
    pub fn new(database: Database) -> Self {
        Self { database }
    }

    /// Get a reference to the underlying database.
    pub fn database(&self) -> &Database {
        &self.database
    }

    fn collection(&self, name: &str) -> mongodb::Collection<Document> {
        self.database.collection(name)
    }

    /// Create partial unique indexes on key fields.
    ///
    /// Each `(collection, field)` pair gets a unique index restricted to
    /// documents with `IsDelete: false`, so two active records can never share
    /// a key even when concurrent adds both pass the service-level check.
    ///
    /// Idempotent; called on every startup.
    pub async fn ensure_indexes(&self, keys: &[(&str, &str)]) -> Result<()> {
        for (collection, field) in keys {
            let options = IndexOptions::builder()
                .unique(true)
                .partial_filter_expression(doc! { "IsDelete": false })
                .build();
            let index = IndexModel::builder()
                .keys(doc! { *field: 1 })
                .options(options)
                .build();

            self.collection(collection)
                .create_index(index)
                .await
                .map_err(|e| {
                    anyhow!(
                        "Failed to create unique index on {}.{}: {}",
                        collection,
                        field,
                        e
                    )
                })?;

            tracing::debug!(collection, field, "unique key index ensured");
        }

        Ok(())
    }
}

/// Clamp an offset to what the driver can send
///
/// The server takes `skip` as a signed 64-bit integer; any larger offset
/// already skips every document.
fn skip_count(offset: usize) -> u64 {
    u64::try_from(offset).unwrap_or(u64::MAX).min(i64::MAX as u64)
}

#[async_trait]
impl DocumentStore for MongoDocumentStore {
    async fn query(&self, collection: &str, query: &DocumentQuery) -> Result<Vec<StoredDocument>> {
        let coll = self.collection(collection);
        let mut find = coll
            .find(query_filter(query)?)
            .sort(doc! { "_id": 1 });

        if let Some(offset) = query.offset {
            find = find.skip(skip_count(offset));
        }
        if let Some(limit) = query.limit {
            find = find.limit(i64::try_from(limit).unwrap_or(i64::MAX));
        }

        let cursor = find
            .await
            .map_err(|e| anyhow!("Failed to query {}: {}", collection, e))?;

        let docs: Vec<Document> = cursor
            .try_collect()
            .await
            .map_err(|e| anyhow!("Failed to collect {} documents: {}", collection, e))?;

        docs.into_iter().map(document_to_stored).collect()
    }

    /// Returns `Ok(None)` for ids that are not valid ObjectIds.
    async fn get(&self, collection: &str, id: &str) -> Result<Option<StoredDocument>> {
        let Some(filter) = id_filter(id) else {
            return Ok(None);
        };

        let doc = self
            .collection(collection)
            .find_one(filter)
            .await
            .map_err(|e| anyhow!("Failed to get document from {}: {}", collection, e))?;

        doc.map(document_to_stored).transpose()
    }

    async fn insert(&self, collection: &str, fields: Fields) -> Result<String> {
        let doc = fields_to_document(&fields)?;

        let result = self
            .collection(collection)
            .insert_one(doc)
            .await
            .map_err(|e| anyhow!("Failed to insert into {}: {}", collection, e))?;

        match result.inserted_id {
            Bson::ObjectId(oid) => Ok(oid.to_hex()),
            other => Err(anyhow!("Unexpected inserted id: {}", other)),
        }
    }

    /// Returns `Err` if no document matched.
    async fn update(&self, collection: &str, id: &str, fields: Fields) -> Result<()> {
        let filter = id_filter(id).ok_or_else(|| anyhow!("Document not found: {}/{}", collection, id))?;
        let changes = fields_to_document(&fields)?;

        let result = self
            .collection(collection)
            .update_one(filter, doc! { "$set": changes })
            .await
            .map_err(|e| anyhow!("Failed to update document in {}: {}", collection, e))?;

        if result.matched_count == 0 {
            return Err(anyhow!("Document not found: {}/{}", collection, id));
        }

        Ok(())
    }
}
