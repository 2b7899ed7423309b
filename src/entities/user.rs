use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Account type of a student
pub const TYPE_STUDENT: i64 = 0;
/// Account type of a teacher
pub const TYPE_TEACHER: i64 = 1;

/// Account payload
///
/// The password is stored and compared as plaintext. `Type` is stored as
/// sent (number or numeric string) and interpreted by the credential
/// resolver.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pass_word: Option<String>,

    #[serde(rename = "Type", default, skip_serializing_if = "Option::is_none")]
    pub account_type: Option<Value>,
}

crate::impl_entity!(
    User,
    UserFields,
    resource: "user",
    collection: "tbl_User",
    key: "UserName",
    keyword: "UserName",
);
