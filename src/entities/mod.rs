//! The five record types of the registrar
//!
//! Each module declares a field payload and a marker type via
//! [`impl_entity!`](crate::impl_entity).

pub mod faculty;
pub mod major;
pub mod student;
pub mod teacher;
pub mod user;

pub use faculty::{Faculty, FacultyFields};
pub use major::{Major, MajorFields};
pub use student::{Student, StudentFields};
pub use teacher::{Teacher, TeacherFields};
pub use user::{User, UserFields};

use crate::core::entity::Entity;
use crate::core::store::Fields;
use serde_json::Value;

/// Field holding the derived "LastName FirstName" display name
pub const FULL_NAME: &str = "FullName";

/// `(collection, key field)` for every entity
///
/// Backends that can enforce uniqueness themselves use this to build indexes.
pub fn unique_keys() -> Vec<(&'static str, &'static str)> {
    vec![
        (User::collection(), User::key_field()),
        (Student::collection(), Student::key_field()),
        (Teacher::collection(), Teacher::key_field()),
        (Major::collection(), Major::key_field()),
        (Faculty::collection(), Faculty::key_field()),
    ]
}

/// Store `FullName` as last name, a space, then first name
///
/// Missing parts are treated as empty.
pub(crate) fn insert_full_name(
    last_name: Option<&str>,
    first_name: Option<&str>,
    document: &mut Fields,
) {
    let full_name = format!(
        "{} {}",
        last_name.unwrap_or_default(),
        first_name.unwrap_or_default()
    );
    document.insert(FULL_NAME.to_string(), Value::String(full_name));
}
