use crate::domain::insight::{InsightKind, InsightSummary};
use crate::domain::traffic_stop::count_violations;
use crate::dto::dashboard::{DashboardPageData, DashboardQuery};
use crate::repository::TrafficStopReader;
use crate::services::ServiceResult;

/// Insight menu in display order.
pub fn insight_menu() -> Vec<InsightSummary> {
    InsightKind::ALL.into_iter().map(InsightSummary::from).collect()
}

/// Resolves the selector value, falling back to the first menu entry.
pub fn resolve_insight(slug: Option<&str>) -> InsightKind {
    match slug.map(str::trim).filter(|s| !s.is_empty()) {
        Some(slug) => InsightKind::from_slug(slug).unwrap_or_else(|| {
            log::warn!("Unknown insight `{slug}` requested, using the default");
            InsightKind::default()
        }),
        None => InsightKind::default(),
    }
}

/// Loads the preview, the violation chart and the selected insight.
pub fn load_dashboard<R>(repo: &R, query: DashboardQuery) -> ServiceResult<DashboardPageData>
where
    R: TrafficStopReader + ?Sized,
{
    let selected = resolve_insight(query.insight.as_deref());

    let preview = repo
        .preview_traffic_stops(query.preview_limit)
        .map_err(|err| {
            log::error!("Failed to load traffic stop preview: {err}");
            err
        })?;
    let violation_counts = count_violations(&preview);

    let table = repo.run_insight(selected).map_err(|err| {
        log::error!("Failed to run insight {}: {err}", selected.slug());
        err
    })?;

    Ok(DashboardPageData {
        preview,
        violation_counts,
        insights: insight_menu(),
        selected,
        table,
    })
}
