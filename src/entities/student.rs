use crate::core::store::Fields;
use serde::{Deserialize, Serialize};

/// Student payload
///
/// `FullName` is not accepted from clients; it is derived once on add.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StudentFields {
    /// Id of the owning account in `tbl_User`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub major_id: Option<String>,
}

fn derive_full_name(fields: &StudentFields, document: &mut Fields) {
    super::insert_full_name(
        fields.last_name.as_deref(),
        fields.first_name.as_deref(),
        document,
    );
}

crate::impl_entity!(
    Student,
    StudentFields,
    resource: "student",
    collection: "tbl_Student",
    key: "StudentId",
    keyword: "FullName",
    derive: derive_full_name,
    conflict: "UserName",
);
