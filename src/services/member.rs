//! Member search services.
//!
//! Every function takes the storage handle as an argument; nothing here keeps
//! state between calls.

use crate::domain::member_team::MemberTeam;
use crate::domain::search::MemberSearchCondition;
use crate::pagination::{Page, PageRequest};
use crate::repository::{MemberTeamQuery, MemberTeamReader};
use crate::services::{ServiceError, ServiceResult};

/// Returns every member matching `condition`, ordered by member id.
pub fn search_members<R>(
    repo: &R,
    condition: &MemberSearchCondition,
) -> ServiceResult<Vec<MemberTeam>>
where
    R: MemberTeamReader + ?Sized,
{
    let query = MemberTeamQuery::new(condition.filters());
    repo.fetch_member_teams(&query).map_err(ServiceError::from)
}

/// Returns one page of matches, skipping the count query when the page
/// content already determines the total.
pub fn search_members_page<R>(
    repo: &R,
    condition: &MemberSearchCondition,
    request: PageRequest,
) -> ServiceResult<Page<MemberTeam>>
where
    R: MemberTeamReader + ?Sized,
{
    let query = MemberTeamQuery::new(condition.filters()).window(request.offset(), request.size());
    let content = repo.fetch_member_teams(&query)?;

    let total = match request.inferred_total(content.len()) {
        Some(total) => {
            log::debug!(
                "Skipping count query: page {} holds {} of {} rows",
                request.page(),
                content.len(),
                request.size()
            );
            total
        }
        None => repo.count_member_teams(&query.filters)?,
    };

    Ok(Page::new(content, request, total))
}

/// Returns one page of matches and always runs the count query.
pub fn search_members_page_exact<R>(
    repo: &R,
    condition: &MemberSearchCondition,
    request: PageRequest,
) -> ServiceResult<Page<MemberTeam>>
where
    R: MemberTeamReader + ?Sized,
{
    let query = MemberTeamQuery::new(condition.filters()).window(request.offset(), request.size());
    let content = repo.fetch_member_teams(&query)?;
    let total = repo.count_member_teams(&query.filters)?;

    Ok(Page::new(content, request, total))
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;

    use super::*;
    use crate::domain::search::MemberFilter;
    use crate::domain::types::{MemberId, TeamId};
    use crate::repository::RowWindow;
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;

    fn member_team(id: i32) -> MemberTeam {
        MemberTeam {
            member_id: MemberId::new(id).unwrap(),
            username: format!("member{id}"),
            age: id * 10,
            team_id: Some(TeamId::new(1).unwrap()),
            team_name: Some("teamA".to_string()),
        }
    }

    fn rows(ids: std::ops::RangeInclusive<i32>) -> Vec<MemberTeam> {
        ids.map(member_team).collect()
    }

    #[test]
    fn search_members_passes_present_filters_without_window() {
        let mut repo = MockRepository::new();
        repo.expect_fetch_member_teams()
            .withf(|query| {
                query.window.is_none()
                    && query.filters
                        == vec![
                            MemberFilter::TeamNameEq("teamA".to_string()),
                            MemberFilter::AgeGoe(20),
                        ]
            })
            .times(1)
            .returning(|_| Ok(vec![member_team(2)]));
        repo.expect_count_member_teams().times(0);

        let condition = MemberSearchCondition::new()
            .username("  ")
            .team_name("teamA")
            .age_goe(20);
        let result = search_members(&repo, &condition).unwrap();

        assert_eq!(result, vec![member_team(2)]);
    }

    #[test]
    fn short_page_skips_count() {
        let mut repo = MockRepository::new();
        repo.expect_fetch_member_teams()
            .withf(|query| {
                query.window
                    == Some(RowWindow {
                        offset: 3,
                        limit: 3,
                    })
            })
            .times(1)
            .returning(|_| Ok(rows(4..=5)));
        repo.expect_count_member_teams().times(0);

        let request = PageRequest::new(1, 3).unwrap();
        let page = search_members_page(&repo, &MemberSearchCondition::new(), request).unwrap();

        assert_eq!(page.content().len(), 2);
        assert_eq!(page.total_elements(), 5);
        assert_eq!(page.total_pages(), 2);
        assert!(page.is_last());
    }

    #[test]
    fn single_row_page_of_one_is_last() {
        let mut repo = MockRepository::new();
        repo.expect_fetch_member_teams()
            .times(1)
            .returning(|_| Ok(rows(1..=1)));
        // A full page cannot prove it is the last one on its own.
        repo.expect_count_member_teams()
            .times(1)
            .returning(|_| Ok(1));

        let request = PageRequest::new(0, 1).unwrap();
        let page = search_members_page(&repo, &MemberSearchCondition::new(), request).unwrap();

        assert_eq!(page.content().len(), 1);
        assert_eq!(page.total_elements(), 1);
        assert!(page.is_last());
    }

    #[test]
    fn full_page_issues_count_with_same_filters() {
        let mut repo = MockRepository::new();
        repo.expect_fetch_member_teams()
            .times(1)
            .returning(|_| Ok(rows(1..=2)));
        repo.expect_count_member_teams()
            .with(eq(vec![MemberFilter::AgeLoe(40)]))
            .times(1)
            .returning(|_| Ok(4));

        let condition = MemberSearchCondition::new().age_loe(40);
        let request = PageRequest::new(0, 2).unwrap();
        let page = search_members_page(&repo, &condition, request).unwrap();

        assert_eq!(page.total_elements(), 4);
        assert!(page.has_next());
    }

    #[test]
    fn empty_page_past_first_falls_back_to_count() {
        let mut repo = MockRepository::new();
        repo.expect_fetch_member_teams()
            .times(1)
            .returning(|_| Ok(Vec::new()));
        repo.expect_count_member_teams()
            .times(1)
            .returning(|_| Ok(4));

        let request = PageRequest::new(10, 2).unwrap();
        let page = search_members_page(&repo, &MemberSearchCondition::new(), request).unwrap();

        assert!(page.content().is_empty());
        assert_eq!(page.total_elements(), 4);
        assert_eq!(page.total_pages(), 2);
        assert!(page.is_last());
    }

    #[test]
    fn empty_first_page_reports_zero_without_count() {
        let mut repo = MockRepository::new();
        repo.expect_fetch_member_teams()
            .times(1)
            .returning(|_| Ok(Vec::new()));
        repo.expect_count_member_teams().times(0);

        let request = PageRequest::new(0, 5).unwrap();
        let page = search_members_page(&repo, &MemberSearchCondition::new(), request).unwrap();

        assert_eq!(page.total_elements(), 0);
        assert_eq!(page.total_pages(), 0);
        assert!(page.is_last());
    }

    #[test]
    fn exact_page_always_counts() {
        let mut repo = MockRepository::new();
        repo.expect_fetch_member_teams()
            .times(1)
            .returning(|_| Ok(rows(1..=1)));
        repo.expect_count_member_teams()
            .times(1)
            .returning(|_| Ok(1));

        let request = PageRequest::new(0, 10).unwrap();
        let page =
            search_members_page_exact(&repo, &MemberSearchCondition::new(), request).unwrap();

        assert_eq!(page.total_elements(), 1);
        assert!(page.is_last());
    }

    #[test]
    fn storage_failure_aborts_before_count() {
        let mut repo = MockRepository::new();
        repo.expect_fetch_member_teams()
            .times(1)
            .returning(|_| Err(RepositoryError::ConnectionError("down".to_string())));
        repo.expect_count_member_teams().times(0);

        let request = PageRequest::new(0, 10).unwrap();
        let err = search_members_page_exact(&repo, &MemberSearchCondition::new(), request)
            .unwrap_err();

        assert!(matches!(
            err,
            ServiceError::Storage(RepositoryError::ConnectionError(_))
        ));
    }

    #[test]
    fn unpaginated_search_propagates_storage_failure() {
        let mut repo = MockRepository::new();
        repo.expect_fetch_member_teams()
            .times(1)
            .returning(|_| Err(RepositoryError::DatabaseError("locked".to_string())));
        repo.expect_count_member_teams().times(0);

        let result = search_members(&repo, &MemberSearchCondition::new().age_goe(10));

        assert!(matches!(
            result,
            Err(ServiceError::Storage(RepositoryError::DatabaseError(_)))
        ));
    }

    #[test]
    fn count_failure_is_propagated() {
        let mut repo = MockRepository::new();
        repo.expect_fetch_member_teams()
            .times(1)
            .returning(|_| Ok(rows(1..=3)));
        repo.expect_count_member_teams()
            .times(1)
            .returning(|_| Err(RepositoryError::DatabaseError("locked".to_string())));

        let request = PageRequest::new(0, 3).unwrap();
        let result = search_members_page(&repo, &MemberSearchCondition::new(), request);

        assert!(matches!(
            result,
            Err(ServiceError::Storage(RepositoryError::DatabaseError(_)))
        ));
    }
}
