//! Entity trait defining how one record type maps onto the document store

use crate::core::error::{RegistrarError, ValidationError};
use crate::core::store::Fields;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt::Debug;

/// Soft-delete flag carried by every document
pub const IS_DELETE: &str = "IsDelete";

/// Parametrization of the generic CRUD component for one record type.
///
/// An entity is a zero-sized marker type. It names:
/// - the resource used in routes (`/api/{resource}/...`)
/// - the collection its documents live in
/// - the key field that must be unique among active records
/// - the keyword field matched by list queries
/// - the payload accepted by add and update
///
/// Entities are normally declared with [`impl_entity!`](crate::impl_entity).
pub trait Entity: Send + Sync + 'static {
    /// Payload accepted by add and update.
    ///
    /// Absent fields must serialize to nothing (not `null`) so that update
    /// leaves them untouched.
    type Fields: Serialize + DeserializeOwned + Debug + Clone + Default + Send + Sync + 'static;

    /// Singular resource name used in routes (e.g., "faculty")
    fn resource_name() -> &'static str;

    /// Collection holding the documents (e.g., "tbl_Faculty")
    fn collection() -> &'static str;

    /// Field that must be unique among non-deleted documents
    fn key_field() -> &'static str;

    /// Field compared against the list keyword
    fn keyword_field() -> &'static str;

    /// Field named in the "already exists" rejection
    ///
    /// Major, student and teacher report `UserName` whatever their key is.
    fn conflict_field() -> &'static str {
        Self::key_field()
    }

    /// Compute fields derived from the payload at creation time
    ///
    /// Called once by add. Update never calls it, so derived values go stale
    /// when their sources change.
    fn derive_fields(_fields: &Self::Fields, _document: &mut Fields) {}
}

/// Serialize a payload into a document field map
pub fn to_field_map<E: Entity>(fields: &E::Fields) -> Result<Fields, RegistrarError> {
    match serde_json::to_value(fields) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(RegistrarError::Internal(format!(
            "{} payload serialized to a non-object: {}",
            E::resource_name(),
            other
        ))),
        Err(e) => Err(ValidationError::InvalidBody {
            message: e.to_string(),
        }
        .into()),
    }
}

/// Get the key value from a field map, rejecting absent or null keys
pub fn key_value<E: Entity>(document: &Fields) -> Result<Value, ValidationError> {
    match document.get(E::key_field()) {
        Some(Value::Null) | None => Err(ValidationError::MissingField {
            field: E::key_field().to_string(),
        }),
        Some(value) => Ok(value.clone()),
    }
}

/// Declare a marker type implementing [`Entity`](crate::core::entity::Entity)
///
/// # Example
/// ```rust,ignore
/// impl_entity!(
///     Faculty,
///     FacultyFields,
///     resource: "faculty",
///     collection: "tbl_Faculty",
///     key: "FacultyName",
///     keyword: "FacultyName",
/// );
///
/// // With a derived-field hook
/// impl_entity!(
///     Student,
///     StudentFields,
///     resource: "student",
///     collection: "tbl_Student",
///     key: "StudentId",
///     keyword: "FullName",
///     derive: derive_full_name,
///     conflict: "UserName",
/// );
/// ```
#[macro_export]
macro_rules! impl_entity {
    (
        $type:ident,
        $fields:ty,
        resource: $resource:expr,
        collection: $collection:expr,
        key: $key:expr,
        keyword: $keyword:expr
        $(, derive: $derive:path)?
        $(, conflict: $conflict:expr)?
        $(,)?
    ) => {
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $type;

        impl $crate::core::entity::Entity for $type {
            type Fields = $fields;

            fn resource_name() -> &'static str {
                $resource
            }

            fn collection() -> &'static str {
                $collection
            }

            fn key_field() -> &'static str {
                $key
            }

            fn keyword_field() -> &'static str {
                $keyword
            }

            $(
                fn derive_fields(
                    fields: &Self::Fields,
                    document: &mut $crate::core::store::Fields,
                ) {
                    $derive(fields, document)
                }
            )?

            $(
                fn conflict_field() -> &'static str {
                    $conflict
                }
            )?
        }
    };
}
