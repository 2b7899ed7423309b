use serde::{Deserialize, Serialize};

/// Faculty payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FacultyFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faculty_name: Option<String>,
}

crate::impl_entity!(
    Faculty,
    FacultyFields,
    resource: "faculty",
    collection: "tbl_Faculty",
    key: "FacultyName",
    keyword: "FacultyName",
);
