//! Domain types exposed by the member search layer.

pub mod member;
pub mod member_team;
pub mod search;
pub mod team;
pub mod types;
