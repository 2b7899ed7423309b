//! Credential resolution for the login check
//!
//! `check_user` authenticates a username/password pair against `tbl_User`
//! and, depending on the account type, joins the matching student or
//! teacher record with its major or faculty.
//!
//! Passwords are compared as stored plaintext. There is no hashing, no
//! rate limiting and no token issuance.

use crate::core::entity::Entity;
use crate::core::envelope::{Envelope, STATUS_REJECTED, STATUS_SUCCESS};
use crate::core::error::{RegistrarResult, StorageError};
use crate::core::store::{Document, DocumentQuery, DocumentStore};
use crate::entities::user::{TYPE_STUDENT, TYPE_TEACHER};
use crate::entities::{Faculty, Major, Student, Teacher, User};
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

/// Message for an unknown username/password pair
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Tài khoản không tồn tại trong hệ thống!";

/// Message for a successful check
pub const AUTHENTICATED_MESSAGE: &str = "Tài khoản chính xác!";

/// Personal fields shared by student and teacher profiles
///
/// Fields missing from the stored record are left out of the JSON.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersonDetails {
    pub last_name: Option<Value>,
    pub first_name: Option<Value>,
    pub full_name: Option<Value>,
    pub date_of_birth: Option<Value>,
}

impl PersonDetails {
    fn from_document(document: &Document) -> Self {
        Self {
            last_name: document.field("LastName").cloned(),
            first_name: document.field("FirstName").cloned(),
            full_name: document.field("FullName").cloned(),
            date_of_birth: document.field("DateOfBirth").cloned(),
        }
    }
}

/// Profile returned with a successful login check
///
/// The variants serialize to the flat PascalCase objects the frontend reads.
/// A student whose major cannot be resolved reports `MajorId: null` and
/// `FacultyName: null`; a teacher whose faculty cannot be resolved reports
/// `FacultyId: null` and `FacultyName: null`.
#[derive(Debug, Clone, PartialEq)]
pub enum Profile {
    Student {
        person: PersonDetails,
        student_id: Option<Value>,
        major_id: Value,
        major_name: Option<Value>,
    },
    StudentMissingMajor {
        person: PersonDetails,
        student_id: Option<Value>,
    },
    Teacher {
        person: PersonDetails,
        teacher_id: Option<Value>,
        faculty_id: Value,
        faculty_name: Option<Value>,
    },
    TeacherMissingFaculty {
        person: PersonDetails,
        teacher_id: Option<Value>,
    },
}

impl Profile {
    /// Account type the profile belongs to
    pub fn account_type(&self) -> i64 {
        match self {
            Profile::Student { .. } | Profile::StudentMissingMajor { .. } => TYPE_STUDENT,
            Profile::Teacher { .. } | Profile::TeacherMissingFaculty { .. } => TYPE_TEACHER,
        }
    }

    pub fn person(&self) -> &PersonDetails {
        match self {
            Profile::Student { person, .. }
            | Profile::StudentMissingMajor { person, .. }
            | Profile::Teacher { person, .. }
            | Profile::TeacherMissingFaculty { person, .. } => person,
        }
    }
}

fn serialize_present<M: SerializeMap>(
    map: &mut M,
    key: &str,
    value: &Option<Value>,
) -> Result<(), M::Error> {
    match value {
        Some(value) => map.serialize_entry(key, value),
        None => Ok(()),
    }
}

impl Serialize for Profile {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;

        let person = self.person();
        serialize_present(&mut map, "LastName", &person.last_name)?;
        serialize_present(&mut map, "FirstName", &person.first_name)?;
        serialize_present(&mut map, "FullName", &person.full_name)?;
        serialize_present(&mut map, "DateOfBirth", &person.date_of_birth)?;

        match self {
            Profile::Student {
                student_id,
                major_id,
                major_name,
                ..
            } => {
                serialize_present(&mut map, "StudentId", student_id)?;
                map.serialize_entry("MajorId", major_id)?;
                serialize_present(&mut map, "MajorName", major_name)?;
            }
            Profile::StudentMissingMajor { student_id, .. } => {
                serialize_present(&mut map, "StudentId", student_id)?;
                map.serialize_entry("MajorId", &Value::Null)?;
                map.serialize_entry("FacultyName", &Value::Null)?;
            }
            Profile::Teacher {
                teacher_id,
                faculty_id,
                faculty_name,
                ..
            } => {
                serialize_present(&mut map, "TeacherId", teacher_id)?;
                map.serialize_entry("FacultyId", faculty_id)?;
                serialize_present(&mut map, "FacultyName", faculty_name)?;
            }
            Profile::TeacherMissingFaculty { teacher_id, .. } => {
                serialize_present(&mut map, "TeacherId", teacher_id)?;
                map.serialize_entry("FacultyId", &Value::Null)?;
                map.serialize_entry("FacultyName", &Value::Null)?;
            }
        }

        map.serialize_entry("Type", &self.account_type())?;
        map.end()
    }
}

/// Result of a login check
#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    /// No account matches the username/password pair
    InvalidCredentials,

    /// The pair matched an account
    ///
    /// `profile` is `None` when the account type is unknown or no linked
    /// student/teacher record exists.
    Authenticated {
        account_id: String,
        profile: Option<Profile>,
    },
}

impl LoginOutcome {
    /// Convert to the response envelope (always sent with HTTP 200)
    pub fn into_envelope(self) -> Envelope<Profile> {
        match self {
            LoginOutcome::InvalidCredentials => {
                Envelope::new(STATUS_REJECTED, INVALID_CREDENTIALS_MESSAGE, None, 0)
            }
            LoginOutcome::Authenticated { profile, .. } => {
                let total = usize::from(profile.is_some());
                Envelope::new(STATUS_SUCCESS, AUTHENTICATED_MESSAGE, profile, total)
            }
        }
    }
}

/// Parse an account `Type` value as an integer
///
/// Numbers are truncated. Strings are read like a leading-integer parse:
/// optional whitespace and sign followed by at least one digit, trailing
/// characters ignored. Anything else has no type.
pub fn parse_account_type(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        Value::String(s) => parse_leading_integer(s),
        _ => None,
    }
}

fn parse_leading_integer(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let magnitude: i64 = rest[..digits_len].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Resolves login credentials to an account profile
#[derive(Clone)]
pub struct CredentialResolver {
    store: Arc<dyn DocumentStore>,
}

impl CredentialResolver {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Check a username/password pair and load the linked profile
    ///
    /// Soft-deleted accounts and records are not filtered out. Any store
    /// failure aborts the whole check.
    pub async fn check_user(&self, user_name: &str, pass_word: &str) -> RegistrarResult<LoginOutcome> {
        let query = DocumentQuery::new()
            .where_eq("UserName", user_name)
            .where_eq("PassWord", pass_word);

        let Some(account) = self.first(User::collection(), &query).await? else {
            tracing::debug!(user_name, "credential check failed");
            return Ok(LoginOutcome::InvalidCredentials);
        };

        let account_type = account.field("Type").and_then(parse_account_type);
        let profile = match account_type {
            Some(TYPE_STUDENT) => self.student_profile(&account.id).await?,
            Some(TYPE_TEACHER) => self.teacher_profile(&account.id).await?,
            _ => None,
        };

        tracing::debug!(
            account_id = %account.id,
            ?account_type,
            has_profile = profile.is_some(),
            "credential check passed"
        );

        Ok(LoginOutcome::Authenticated {
            account_id: account.id,
            profile,
        })
    }

    async fn student_profile(&self, account_id: &str) -> RegistrarResult<Option<Profile>> {
        let query = DocumentQuery::new().where_eq("UserId", account_id).limit(1);
        let Some(student) = self.first(Student::collection(), &query).await? else {
            return Ok(None);
        };

        let person = PersonDetails::from_document(&student);
        let student_id = student.field("StudentId").cloned();

        let major = self.reference(Major::collection(), student.field("MajorId")).await?;
        Ok(Some(match major {
            Some(major) => Profile::Student {
                person,
                student_id,
                major_name: major.field("MajorName").cloned(),
                major_id: Value::String(major.id),
            },
            None => Profile::StudentMissingMajor { person, student_id },
        }))
    }

    async fn teacher_profile(&self, account_id: &str) -> RegistrarResult<Option<Profile>> {
        let query = DocumentQuery::new().where_eq("UserId", account_id).limit(1);
        let Some(teacher) = self.first(Teacher::collection(), &query).await? else {
            return Ok(None);
        };

        let person = PersonDetails::from_document(&teacher);
        let teacher_id = teacher.field("TeacherId").cloned();

        let faculty = self.reference(Faculty::collection(), teacher.field("FacultyId")).await?;
        Ok(Some(match faculty {
            Some(faculty) => Profile::Teacher {
                person,
                teacher_id,
                faculty_name: faculty.field("FacultyName").cloned(),
                faculty_id: Value::String(faculty.id),
            },
            None => Profile::TeacherMissingFaculty { person, teacher_id },
        }))
    }

    /// Follow a reference field; non-string or empty ids resolve to nothing
    async fn reference(
        &self,
        collection: &str,
        id: Option<&Value>,
    ) -> RegistrarResult<Option<Document>> {
        match id.and_then(Value::as_str) {
            Some(id) if !id.is_empty() => Ok(self
                .store
                .get(collection, id)
                .await
                .map_err(|e| StorageError::operation("get", collection, e))?),
            _ => Ok(None),
        }
    }

    async fn first(&self, collection: &str, query: &DocumentQuery) -> RegistrarResult<Option<Document>> {
        let documents = self
            .store
            .query(collection, query)
            .await
            .map_err(|e| StorageError::operation("query", collection, e))?;

        Ok(documents.into_iter().next())
    }
}
