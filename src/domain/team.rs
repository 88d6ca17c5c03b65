use serde::{Deserialize, Serialize};

use crate::domain::types::{TeamId, TypeConstraintError, non_blank};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewTeam {
    pub name: String,
}

impl NewTeam {
    pub fn new(name: impl Into<String>) -> Result<Self, TypeConstraintError> {
        Ok(Self {
            name: non_blank(name)?,
        })
    }
}
