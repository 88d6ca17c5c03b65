//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::member::NewMember;
use crate::domain::member_team::MemberTeam;
use crate::domain::search::MemberFilter;
use crate::domain::team::{NewTeam, Team};
use crate::repository::errors::RepositoryResult;
use crate::repository::{MemberTeamQuery, MemberTeamReader, MemberWriter, TeamWriter};

mock! {
    pub Repository {}

    impl MemberTeamReader for Repository {
        fn fetch_member_teams(&self, query: &MemberTeamQuery) -> RepositoryResult<Vec<MemberTeam>>;
        fn count_member_teams(&self, filters: &[MemberFilter]) -> RepositoryResult<usize>;
    }

    impl TeamWriter for Repository {
        fn create_team(&self, new_team: &NewTeam) -> RepositoryResult<Team>;
    }

    impl MemberWriter for Repository {
        fn create_members(&self, new_members: &[NewMember]) -> RepositoryResult<usize>;
    }
}
