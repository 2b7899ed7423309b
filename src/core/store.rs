//! Document store abstraction consumed by the entity services
//!
//! The store is organised in named collections. Each document has an opaque,
//! store-assigned string identifier and a free-form field map.

use anyhow::Result;
use async_trait::async_trait;
use serde::Serialize;
use serde_json::{Map, Value};

/// Field map of a stored document
pub type Fields = Map<String, Value>;

/// A document read back from the store
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    /// Store-assigned identifier
    pub id: String,

    /// Document fields (the identifier is not part of the map)
    pub data: Fields,
}

impl Document {
    pub fn new(id: impl Into<String>, data: Fields) -> Self {
        Self {
            id: id.into(),
            data,
        }
    }

    /// Get a field value, `None` when the field is absent
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.data.get(name)
    }

    /// Get a field value, `Value::Null` when the field is absent
    pub fn field_or_null(&self, name: &str) -> Value {
        self.data.get(name).cloned().unwrap_or(Value::Null)
    }
}

/// Query against a single collection
///
/// All equality predicates must hold. The optional not-equal predicate only
/// matches documents where the field exists and differs from the value.
/// Offset is applied before limit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentQuery {
    pub equals: Vec<(String, Value)>,
    pub not_equal: Option<(String, Value)>,
    pub offset: Option<usize>,
    pub limit: Option<usize>,
}

impl DocumentQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an equality predicate
    pub fn where_eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.equals.push((field.into(), value.into()));
        self
    }

    /// Set the not-equal predicate (replaces any previous one)
    pub fn where_ne(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.not_equal = Some((field.into(), value.into()));
        self
    }

    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Evaluate the predicates against a field map
    ///
    /// Backends that filter in process (the in-memory store) use this;
    /// database backends translate the query into their own filter language.
    pub fn matches(&self, data: &Fields) -> bool {
        let equals_ok = self
            .equals
            .iter()
            .all(|(field, value)| data.get(field) == Some(value));

        let not_equal_ok = match &self.not_equal {
            Some((field, value)) => data.get(field).is_some_and(|v| v != value),
            None => true,
        };

        equals_ok && not_equal_ok
    }
}

/// Collection-scoped document storage
///
/// Implementations are shared across requests behind an `Arc`, so they must
/// be `Send + Sync`. Every call is an independent round-trip; callers never
/// hold locks across calls.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Run a query and return the matching documents in store order
    async fn query(&self, collection: &str, query: &DocumentQuery) -> Result<Vec<Document>>;

    /// Fetch a single document by identifier
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>>;

    /// Insert a new document and return its store-assigned identifier
    async fn insert(&self, collection: &str, fields: Fields) -> Result<String>;

    /// Merge the given fields into an existing document
    ///
    /// Fields not present in `fields` are left untouched. Returns `Err` if the
    /// document does not exist.
    async fn update(&self, collection: &str, id: &str, fields: Fields) -> Result<()>;
}
