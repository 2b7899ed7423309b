//! List query parameters and pagination utilities

use crate::core::error::ValidationError;
use serde::Deserialize;
use validator::Validate;

/// Default page number (pages start at 1)
pub const DEFAULT_PAGE_NUMBER: u32 = 1;

/// Default number of records per page
pub const DEFAULT_PER_PAGE: u32 = 10;

/// Raw list parameters as they arrive in the query string
///
/// Numbers are kept as strings so that malformed input can be reported with
/// the response envelope instead of a bare extractor rejection.
///
/// # Example
/// ```text
/// GET /api/student/getlist?keyword=Nguyen%20An&pageNumber=2&perPage=10
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    /// Exact-match filter on the entity's keyword field
    pub keyword: Option<String>,

    #[serde(rename = "pageNumber")]
    pub page_number: Option<String>,

    #[serde(rename = "perPage")]
    pub per_page: Option<String>,
}

/// Validated list parameters
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct ListParams {
    pub keyword: Option<String>,

    #[validate(range(min = 1))]
    pub page_number: u32,

    #[validate(range(min = 1))]
    pub per_page: u32,
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            keyword: None,
            page_number: DEFAULT_PAGE_NUMBER,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl ListParams {
    /// Number of matching records to skip
    pub fn offset(&self) -> usize {
        (self.page_number as usize)
            .saturating_sub(1)
            .saturating_mul(self.per_page as usize)
    }

    /// Maximum number of records to return
    pub fn limit(&self) -> usize {
        self.per_page as usize
    }
}

impl TryFrom<ListQuery> for ListParams {
    type Error = ValidationError;

    fn try_from(query: ListQuery) -> Result<Self, Self::Error> {
        let params = Self {
            // An empty keyword means "no filter"
            keyword: query.keyword.filter(|k| !k.is_empty()),
            page_number: parse_number("pageNumber", query.page_number, DEFAULT_PAGE_NUMBER)?,
            per_page: parse_number("perPage", query.per_page, DEFAULT_PER_PAGE)?,
        };

        params
            .validate()
            .map_err(|_| ValidationError::InvalidPageParameters)?;

        Ok(params)
    }
}

fn parse_number(name: &str, raw: Option<String>, default: u32) -> Result<u32, ValidationError> {
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(default),
        Some(value) => value.parse::<u32>().map_err(|_| {
            tracing::debug!(parameter = name, value, "rejecting non-numeric page parameter");
            ValidationError::InvalidPageParameters
        }),
    }
}
