//! Read-only projection joining a member with its (optional) team.

use serde::Serialize;

use crate::domain::types::{MemberId, TeamId};

/// One row of the `members LEFT JOIN teams` projection.
///
/// Team fields are `None` for members that do not belong to a team.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct MemberTeam {
    pub member_id: MemberId,
    pub username: String,
    pub age: i32,
    pub team_id: Option<TeamId>,
    pub team_name: Option<String>,
}
