//! DTOs exposed by the member search API endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::search::MemberSearchCondition;
use crate::pagination::{PageRequest, PaginationError};

pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// Query parameters accepted by the `/api/v1/members` endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct MemberSearchParams {
    pub username: Option<String>,
    pub team_name: Option<String>,
    pub age_goe: Option<i32>,
    pub age_loe: Option<i32>,
    /// Zero-based page index, ignored by the unpaginated endpoint.
    pub page: Option<i64>,
    pub size: Option<i64>,
}

impl MemberSearchParams {
    pub fn condition(&self) -> MemberSearchCondition {
        MemberSearchCondition {
            username: self.username.clone(),
            team_name: self.team_name.clone(),
            age_goe: self.age_goe,
            age_loe: self.age_loe,
        }
    }

    pub fn page_request(&self) -> Result<PageRequest, PaginationError> {
        PageRequest::new(
            self.page.unwrap_or(0),
            self.size.unwrap_or(DEFAULT_PAGE_SIZE),
        )
    }
}

/// Body returned alongside 4xx/5xx responses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
