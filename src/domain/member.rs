use serde::Deserialize;

use crate::domain::types::{TeamId, TypeConstraintError, non_blank, non_negative_age};

/// Member to be inserted. Members are not required to belong to a team.
#[derive(Clone, Debug, Deserialize)]
pub struct NewMember {
    pub username: String,
    pub age: i32,
    pub team_id: Option<TeamId>,
}

impl NewMember {
    pub fn new(
        username: impl Into<String>,
        age: i32,
        team_id: Option<TeamId>,
    ) -> Result<Self, TypeConstraintError> {
        Ok(Self {
            username: non_blank(username)?,
            age: non_negative_age(age)?,
            team_id,
        })
    }
}
