//! Diesel row models and their conversions into domain types.

#[cfg(feature = "server")]
pub mod config;
pub mod member;
pub mod member_team;
pub mod team;
