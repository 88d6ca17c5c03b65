//! Search conditions and the filter clauses derived from them.
//!
//! A [`MemberSearchCondition`] carries up to four optional constraints. Only
//! the constraints that are actually present turn into a [`MemberFilter`];
//! absent ones are omitted entirely so storage never evaluates a no-op
//! predicate. The resulting clauses are combined with logical AND.

use crate::domain::member_team::MemberTeam;

/// Loosely specified member search: every field is optional.
///
/// Blank strings are treated the same as `None`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemberSearchCondition {
    pub username: Option<String>,
    pub team_name: Option<String>,
    pub age_goe: Option<i32>,
    pub age_loe: Option<i32>,
}

/// A single AND-able predicate over one [`MemberTeam`] row.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum MemberFilter {
    /// `members.username = value`
    UsernameEq(String),
    /// `teams.name = value`; never matches members without a team.
    TeamNameEq(String),
    /// `members.age >= value`
    AgeGoe(i32),
    /// `members.age <= value`
    AgeLoe(i32),
}

/// Returns the text when it contains at least one non-whitespace character.
fn has_text(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}

impl MemberSearchCondition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn team_name(mut self, team_name: impl Into<String>) -> Self {
        self.team_name = Some(team_name.into());
        self
    }

    pub fn age_goe(mut self, age: i32) -> Self {
        self.age_goe = Some(age);
        self
    }

    pub fn age_loe(mut self, age: i32) -> Self {
        self.age_loe = Some(age);
        self
    }

    /// Builds one clause per present dimension.
    ///
    /// String operands are passed through untrimmed. An empty result means
    /// "match every row".
    pub fn filters(&self) -> Vec<MemberFilter> {
        let username = has_text(self.username.as_deref())
            .map(|username| MemberFilter::UsernameEq(username.to_string()));
        let team_name = has_text(self.team_name.as_deref())
            .map(|name| MemberFilter::TeamNameEq(name.to_string()));
        let age_goe = self.age_goe.map(MemberFilter::AgeGoe);
        let age_loe = self.age_loe.map(MemberFilter::AgeLoe);

        [username, team_name, age_goe, age_loe]
            .into_iter()
            .flatten()
            .collect()
    }
}

impl MemberFilter {
    /// Evaluates the clause against an already projected row.
    pub fn matches(&self, row: &MemberTeam) -> bool {
        match self {
            MemberFilter::UsernameEq(username) => row.username == *username,
            MemberFilter::TeamNameEq(name) => row.team_name.as_deref() == Some(name.as_str()),
            MemberFilter::AgeGoe(age) => row.age >= *age,
            MemberFilter::AgeLoe(age) => row.age <= *age,
        }
    }

    /// AND-combination of `filters`; an empty slice matches everything.
    pub fn matches_all(filters: &[MemberFilter], row: &MemberTeam) -> bool {
        filters.iter().all(|filter| filter.matches(row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{MemberId, TeamId};

    fn row(username: &str, age: i32, team: Option<(i32, &str)>) -> MemberTeam {
        MemberTeam {
            member_id: MemberId::new(1).unwrap(),
            username: username.to_string(),
            age,
            team_id: team.map(|(id, _)| TeamId::new(id).unwrap()),
            team_name: team.map(|(_, name)| name.to_string()),
        }
    }

    #[test]
    fn empty_condition_yields_no_filters() {
        assert!(MemberSearchCondition::new().filters().is_empty());
    }

    #[test]
    fn blank_strings_are_absent() {
        let condition = MemberSearchCondition::new().username("   ").team_name("");
        assert!(condition.filters().is_empty());
    }

    #[test]
    fn each_present_dimension_maps_to_one_filter() {
        let condition = MemberSearchCondition::new()
            .username("member1")
            .team_name("teamA")
            .age_goe(10)
            .age_loe(40);

        assert_eq!(
            condition.filters(),
            vec![
                MemberFilter::UsernameEq("member1".to_string()),
                MemberFilter::TeamNameEq("teamA".to_string()),
                MemberFilter::AgeGoe(10),
                MemberFilter::AgeLoe(40),
            ]
        );
    }

    #[test]
    fn numeric_zero_is_present() {
        let condition = MemberSearchCondition::new().age_goe(0);
        assert_eq!(condition.filters(), vec![MemberFilter::AgeGoe(0)]);
    }

    #[test]
    fn username_operand_is_not_trimmed() {
        let condition = MemberSearchCondition::new().username(" member1");
        assert_eq!(
            condition.filters(),
            vec![MemberFilter::UsernameEq(" member1".to_string())]
        );
    }

    #[test]
    fn age_bounds_are_inclusive() {
        let member = row("member1", 20, None);
        assert!(MemberFilter::AgeGoe(20).matches(&member));
        assert!(MemberFilter::AgeLoe(20).matches(&member));
        assert!(!MemberFilter::AgeGoe(21).matches(&member));
        assert!(!MemberFilter::AgeLoe(19).matches(&member));
    }

    #[test]
    fn team_name_never_matches_member_without_team() {
        let loner = row("member1", 20, None);
        let teamed = row("member2", 20, Some((1, "teamA")));
        let filter = MemberFilter::TeamNameEq("teamA".to_string());

        assert!(!filter.matches(&loner));
        assert!(filter.matches(&teamed));
    }

    #[test]
    fn matches_all_is_order_independent() {
        let member = row("member3", 30, Some((2, "teamB")));
        let filters = MemberSearchCondition::new()
            .team_name("teamB")
            .age_goe(25)
            .age_loe(35)
            .filters();
        let mut reversed = filters.clone();
        reversed.reverse();

        assert!(MemberFilter::matches_all(&filters, &member));
        assert!(MemberFilter::matches_all(&reversed, &member));
        assert!(MemberFilter::matches_all(&[], &member));
    }
}
