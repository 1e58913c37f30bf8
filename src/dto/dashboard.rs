//! DTOs shaped for the dashboard page.

use crate::domain::insight::{InsightKind, InsightSummary, InsightTable};
use crate::domain::traffic_stop::{TrafficStop, ViolationCount};

/// Query parameters accepted by the dashboard service.
#[derive(Debug, Default)]
pub struct DashboardQuery {
    /// Slug of the insight picked in the selector.
    pub insight: Option<String>,
    /// Number of rows to show in the data preview.
    pub preview_limit: u32,
}

/// Data required to render the dashboard template.
#[derive(Debug)]
pub struct DashboardPageData {
    /// First rows of the traffic-stop log.
    pub preview: Vec<TrafficStop>,
    /// Violation frequencies across the preview rows, for the bar chart.
    pub violation_counts: Vec<ViolationCount>,
    /// Insight menu in display order.
    pub insights: Vec<InsightSummary>,
    /// Insight currently selected.
    pub selected: InsightKind,
    /// Result set of the selected insight.
    pub table: InsightTable,
}
