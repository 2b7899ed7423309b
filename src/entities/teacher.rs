use crate::core::store::Fields;
use serde::{Deserialize, Serialize};

/// Teacher payload
///
/// Mirrors [`StudentFields`](super::StudentFields) with a faculty in place
/// of a major.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TeacherFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teacher_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faculty_id: Option<String>,
}

fn derive_full_name(fields: &TeacherFields, document: &mut Fields) {
    super::insert_full_name(
        fields.last_name.as_deref(),
        fields.first_name.as_deref(),
        document,
    );
}

crate::impl_entity!(
    Teacher,
    TeacherFields,
    resource: "teacher",
    collection: "tbl_Teacher",
    key: "TeacherId",
    keyword: "FullName",
    derive: derive_full_name,
    conflict: "UserName",
);
