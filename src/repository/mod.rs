use crate::{
    db::{DbConnection, DbPool, get_connection},
    domain::{
        member::NewMember,
        member_team::MemberTeam,
        search::MemberFilter,
        team::{NewTeam, Team},
    },
    repository::errors::RepositoryResult,
};

pub mod errors;
pub mod member;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod team;

/// Diesel-backed storage shared by every reader and writer trait.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(get_connection(&self.pool)?)
    }
}

/// Offset/limit applied to a row fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowWindow {
    pub offset: usize,
    pub limit: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberTeamQuery {
    pub filters: Vec<MemberFilter>,
    pub window: Option<RowWindow>,
}

impl MemberTeamQuery {
    pub fn new(filters: Vec<MemberFilter>) -> Self {
        Self {
            filters,
            window: None,
        }
    }

    pub fn window(mut self, offset: usize, limit: usize) -> Self {
        self.window = Some(RowWindow { offset, limit });
        self
    }
}

/// Read side of the `members LEFT JOIN teams` projection.
///
/// Both methods must apply `filters` identically so that counts agree with the
/// rows returned.
pub trait MemberTeamReader {
    fn fetch_member_teams(&self, query: &MemberTeamQuery) -> RepositoryResult<Vec<MemberTeam>>;
    fn count_member_teams(&self, filters: &[MemberFilter]) -> RepositoryResult<usize>;
}

pub trait TeamWriter {
    fn create_team(&self, new_team: &NewTeam) -> RepositoryResult<Team>;
}

pub trait MemberWriter {
    fn create_members(&self, new_members: &[NewMember]) -> RepositoryResult<usize>;
}
