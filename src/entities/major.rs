use serde::{Deserialize, Serialize};

/// Major payload
///
/// `FacultyId` is a loose reference to a faculty document; it is never
/// checked on write.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MajorFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faculty_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub major_name: Option<String>,
}

crate::impl_entity!(
    Major,
    MajorFields,
    resource: "major",
    collection: "tbl_Major",
    key: "MajorName",
    keyword: "MajorName",
    conflict: "UserName",
);
