//! Dashboard recompute: filter, aggregate and chart one date window.
use serde::Serialize;

use super::aggregate::{aggregate, ReportTotals};
use super::filter::derive_tickets;
use super::temporal::DateRange;
use crate::charts::{build_charts, DashboardCharts};
use crate::config::DashboardConfig;
use crate::parser::TicketTable;

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub range: DateRange,
    pub derived_rows: usize,
    pub totals: ReportTotals,
    pub charts: DashboardCharts,
}

/// Pure function of the loaded table and the requested window; every call
/// starts from scratch. An empty table skips the pipeline entirely.
pub fn build_dashboard(
    table: &TicketTable,
    range: DateRange,
    config: &DashboardConfig,
) -> DashboardView {
    if table.is_empty() {
        return DashboardView {
            range,
            derived_rows: 0,
            totals: ReportTotals {
                total_tickets: 0,
                total_closed: 0,
                percent_closed: 0,
                total_accounted_time: 0.0,
            },
            charts: DashboardCharts::placeholders(),
        };
    }

    let derived = derive_tickets(table, &range, config);
    let report = aggregate(&derived);
    tracing::debug!(
        start = %range.start,
        end = %range.end,
        days = range.days(),
        derived = derived.len(),
        sub_queues = report.by_sub_queue.len(),
        "dashboard recomputed"
    );

    DashboardView {
        range,
        derived_rows: derived.len(),
        charts: build_charts(&report),
        totals: report.totals,
    }
}
