use crate::domain::insight::{InsightKind, InsightSummary, InsightTable};
use crate::repository::TrafficStopReader;
use crate::services::dashboard::insight_menu;
use crate::services::{ServiceError, ServiceResult};

/// Lists the insights available through `/api/v1/insights`.
pub fn list_insights() -> Vec<InsightSummary> {
    insight_menu()
}

/// Runs the insight identified by `slug`.
pub fn run_insight<R>(repo: &R, slug: &str) -> ServiceResult<InsightTable>
where
    R: TrafficStopReader + ?Sized,
{
    let kind = InsightKind::from_slug(slug).ok_or(ServiceError::NotFound)?;

    repo.run_insight(kind).map_err(|err| {
        log::error!("Failed to run insight {slug}: {err}");
        ServiceError::from(err)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::mock::MockRepository;

    #[test]
    fn unknown_slug_is_not_found() {
        let mut repo = MockRepository::new();
        repo.expect_run_insight().never();

        assert!(matches!(
            run_insight(&repo, "unknown"),
            Err(ServiceError::NotFound)
        ));
    }

    #[test]
    fn known_slug_runs_query() {
        let mut repo = MockRepository::new();
        repo.expect_run_insight()
            .times(1)
            .returning(|kind| Ok(InsightTable::new(kind, vec![vec!["Day".into(), "25.0".into()]])));

        let table = run_insight(&repo, "night-vs-day-arrests").unwrap();

        assert_eq!(table.kind, InsightKind::NightVersusDayArrests);
        assert_eq!(table.columns, vec!["time_period", "arrest_rate"]);
    }

    #[test]
    fn listing_matches_catalog_order() {
        let slugs: Vec<_> = list_insights().into_iter().map(|i| i.slug).collect();
        let expected: Vec<_> = InsightKind::ALL.iter().map(|k| k.slug()).collect();

        assert_eq!(slugs, expected);
    }
}
