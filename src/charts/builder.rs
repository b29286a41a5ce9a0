use serde::Serialize;

use super::figure::{Annotation, Axis, BarTrace, Figure, Marker, PieTrace, Title, Trace};
use crate::analyzer::aggregate::{QueueReport, QueueTotal};
use crate::analyzer::stats::format_quantity;

const BAR_COLOR: &str = "lightcoral";
const MAIN_PIE_COLOR: &str = "lightgreen";
const SUB_PIE_COLOR: &str = "skyblue";
const DONUT_HOLE: f64 = 0.3;

/// The three dashboard figures, one per display slot.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardCharts {
    pub bar_sub_queues: Figure,
    pub pie_main_queues: Figure,
    pub pie_sub_queues: Figure,
}

impl DashboardCharts {
    /// Blank figures, used when no tickets were loaded at all.
    pub fn placeholders() -> Self {
        DashboardCharts {
            bar_sub_queues: Figure::empty(),
            pie_main_queues: Figure::empty(),
            pie_sub_queues: Figure::empty(),
        }
    }
}

pub fn build_charts(report: &QueueReport) -> DashboardCharts {
    DashboardCharts {
        bar_sub_queues: bar_sub_queues(report),
        pie_main_queues: time_pie(&report.by_main_queue, MAIN_PIE_COLOR)
            .with_title("% time by main queues"),
        pie_sub_queues: time_pie(&report.by_sub_queue, SUB_PIE_COLOR)
            .with_title("% time by subqueue")
            .annotate(Annotation::paper(
                format!(
                    "Total time: {}",
                    format_quantity(report.totals.total_accounted_time)
                ),
                0.5,
                0.5,
            )),
    }
}

/// Accounted time per sub-queue, each bar labelled with its ticket count.
fn bar_sub_queues(report: &QueueReport) -> Figure {
    let totals = &report.totals;
    let trace = BarTrace {
        x: report.by_sub_queue.iter().map(|q| q.queue.clone()).collect(),
        y: report
            .by_sub_queue
            .iter()
            .map(|q| q.total_accounted_time)
            .collect(),
        text: report
            .by_sub_queue
            .iter()
            .map(|q| q.total_tickets.to_string())
            .collect(),
        textposition: "auto",
        marker: Marker {
            color: Some(BAR_COLOR.to_string()),
            colors: None,
        },
    };

    let mut figure = Figure {
        data: vec![Trace::Bar(trace)],
        ..Figure::default()
    }
    .with_title("Accounted time by subqueue");
    figure.layout.xaxis = Some(Axis {
        title: Title::new("Sub Queue"),
    });
    figure.layout.yaxis = Some(Axis {
        title: Title::new("Accounted time"),
    });

    figure
        .annotate(
            Annotation::paper(format!("Total tickets: {}", totals.total_tickets), 1.0, 1.0)
                .anchored("right"),
        )
        .annotate(
            Annotation::paper(format!("Closed tickets: {}", totals.total_closed), 1.0, 0.94)
                .anchored("right"),
        )
        .annotate(
            Annotation::paper(format!("{}% closed", totals.percent_closed), 1.0, 0.88)
                .anchored("right"),
        )
}

/// Donut of accounted time share per queue.
fn time_pie(groups: &[QueueTotal], color: &str) -> Figure {
    Figure {
        data: vec![Trace::Pie(PieTrace {
            labels: groups.iter().map(|q| q.queue.clone()).collect(),
            values: groups.iter().map(|q| q.total_accounted_time).collect(),
            textinfo: "label+percent",
            hole: DONUT_HOLE,
            marker: Marker {
                color: None,
                colors: Some(vec![color.to_string()]),
            },
        })],
        ..Figure::default()
    }
}
