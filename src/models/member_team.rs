//! Diesel model for the member/team projection.

use diesel::prelude::*;

use crate::domain::member_team::MemberTeam as DomainMemberTeam;
use crate::domain::types::{MemberId, TeamId, TypeConstraintError};

#[derive(Debug, Clone, Queryable)]
/// Row loaded from `members LEFT JOIN teams`; team columns are nullable.
pub struct MemberTeam {
    pub member_id: i32,
    pub username: String,
    pub age: i32,
    pub team_id: Option<i32>,
    pub team_name: Option<String>,
}

impl TryFrom<MemberTeam> for DomainMemberTeam {
    type Error = TypeConstraintError;

    fn try_from(row: MemberTeam) -> Result<Self, Self::Error> {
        Ok(Self {
            member_id: MemberId::try_from(row.member_id)?,
            username: row.username,
            age: row.age,
            team_id: row.team_id.map(TeamId::try_from).transpose()?,
            team_name: row.team_name,
        })
    }
}
