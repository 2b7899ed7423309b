//! Shared test harness for document store backends
//!
//! Provides helpers for building field maps and reading envelopes, plus two
//! macro-generated suites:
//! - `document_store_tests!`: the `DocumentStore` contract
//! - `rest_integration_tests!`: full HTTP round-trips through the server
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//! use storage_harness::*;
//!
//! document_store_tests!(InMemoryDocumentStore::new());
//! rest_integration_tests!(InMemoryDocumentStore::new());
//! ```

#![allow(dead_code)]

#[macro_use]
pub mod document_store_tests;
#[macro_use]
pub mod rest_tests;

use registrar::core::store::Fields;
use serde_json::Value;

/// An identifier that no backend ever assigns to a real document
///
/// Valid ObjectId syntax, so backends that parse ids still run the lookup.
pub const UNKNOWN_ID: &str = "ffffffffffffffffffffffff";

/// Build a field map from a JSON object literal
pub fn fields(value: Value) -> Fields {
    match value {
        Value::Object(map) => map,
        other => panic!("expected a JSON object, got {other}"),
    }
}

/// Extract the id from an add response envelope (`"added with ID: <id>"`)
pub fn added_id(body: &Value) -> String {
    body["response"]
        .as_str()
        .and_then(|s| s.strip_prefix("added with ID: "))
        .unwrap_or_else(|| panic!("not an add response: {body}"))
        .to_string()
}
