//! Repository implementation for members and the member/team projection.

use diesel::dsl::{IntoBoxed, LeftJoin};
use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::{
    domain::{member::NewMember, member_team::MemberTeam, search::MemberFilter},
    models::{member::NewMember as DbNewMember, member_team::MemberTeam as DbMemberTeam},
    repository::{
        DieselRepository, MemberTeamQuery, MemberTeamReader, MemberWriter,
        errors::{RepositoryError, RepositoryResult},
    },
    schema::{members, teams},
};

fn to_i64(value: usize) -> RepositoryResult<i64> {
    i64::try_from(value)
        .map_err(|_| RepositoryError::ValidationError(format!("{value} does not fit in i64")))
}

impl MemberTeamReader for DieselRepository {
    fn fetch_member_teams(&self, query: &MemberTeamQuery) -> RepositoryResult<Vec<MemberTeam>> {
        let mut conn = self.conn()?;

        let mut items = filtered_member_teams(&query.filters)
            .select((
                members::id,
                members::username,
                members::age,
                teams::id.nullable(),
                teams::name.nullable(),
            ))
            .order(members::id.asc());

        if let Some(window) = query.window {
            items = items
                .offset(to_i64(window.offset)?)
                .limit(to_i64(window.limit)?);
        }

        items
            .load::<DbMemberTeam>(&mut conn)?
            .into_iter()
            .map(|row| MemberTeam::try_from(row).map_err(RepositoryError::from))
            .collect()
    }

    fn count_member_teams(&self, filters: &[MemberFilter]) -> RepositoryResult<usize> {
        let mut conn = self.conn()?;

        let total = filtered_member_teams(filters)
            .count()
            .get_result::<i64>(&mut conn)?;

        usize::try_from(total)
            .map_err(|_| RepositoryError::Unexpected(format!("negative row count {total}")))
    }
}

/// Boxed `members LEFT JOIN teams` with every filter AND-ed in.
///
/// Shared by the row fetch and the count so both see the same predicate.
fn filtered_member_teams<'a>(
    filters: &'a [MemberFilter],
) -> IntoBoxed<'a, LeftJoin<members::table, teams::table>, Sqlite> {
    let mut items = members::table
        .left_join(teams::table)
        .into_boxed::<Sqlite>();

    for filter in filters {
        items = match filter {
            MemberFilter::UsernameEq(username) => items.filter(members::username.eq(username)),
            MemberFilter::TeamNameEq(name) => items.filter(teams::name.eq(name)),
            MemberFilter::AgeGoe(age) => items.filter(members::age.ge(*age)),
            MemberFilter::AgeLoe(age) => items.filter(members::age.le(*age)),
        };
    }
    items
}

impl MemberWriter for DieselRepository {
    fn create_members(&self, new_members: &[NewMember]) -> RepositoryResult<usize> {
        let mut conn = self.conn()?;
        let insertables: Vec<DbNewMember> = new_members.iter().map(Into::into).collect();

        let affected = diesel::insert_into(members::table)
            .values(&insertables)
            .execute(&mut conn)?;

        Ok(affected)
    }
}
