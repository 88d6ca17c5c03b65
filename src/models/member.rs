//! Diesel models representing members.

use diesel::prelude::*;

use crate::domain::member::NewMember as DomainNewMember;
use crate::domain::types::TeamId;

#[derive(Insertable)]
#[diesel(table_name = crate::schema::members)]
/// Insertable `members` row.
pub struct NewMember<'a> {
    pub username: &'a str,
    pub age: i32,
    pub team_id: Option<i32>,
}

impl<'a> From<&'a DomainNewMember> for NewMember<'a> {
    fn from(member: &'a DomainNewMember) -> Self {
        Self {
            username: member.username.as_str(),
            age: member.age,
            team_id: member.team_id.map(TeamId::get),
        }
    }
}
