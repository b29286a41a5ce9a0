use std::collections::BTreeMap;

use serde::Serialize;

use super::filter::DerivedTicket;
use super::stats::{percent_rounded, total};

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QueueTotal {
    pub queue: String,
    pub total_accounted_time: f64,
    pub total_tickets: usize,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReportTotals {
    pub total_tickets: usize,
    pub total_closed: usize,
    pub percent_closed: u32,
    pub total_accounted_time: f64,
}

/// Everything the charts need for one date window.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QueueReport {
    /// Sorted by queue name.
    pub by_sub_queue: Vec<QueueTotal>,
    /// Sorted by queue name.
    pub by_main_queue: Vec<QueueTotal>,
    pub totals: ReportTotals,
}

fn group_by<'a>(
    tickets: &'a [DerivedTicket],
    key: impl Fn(&'a DerivedTicket) -> &'a str,
) -> Vec<QueueTotal> {
    let mut groups: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
    for t in tickets {
        let entry = groups.entry(key(t)).or_insert((0.0, 0));
        entry.0 += t.accounted_time;
        entry.1 += 1;
    }
    groups
        .into_iter()
        .map(|(queue, (time, count))| QueueTotal {
            queue: queue.to_string(),
            total_accounted_time: time,
            total_tickets: count,
        })
        .collect()
}

pub fn aggregate(tickets: &[DerivedTicket]) -> QueueReport {
    let by_sub_queue = group_by(tickets, |t| t.sub_queue.as_str());
    let by_main_queue = group_by(tickets, |t| t.main_queue.as_str());

    let total_closed = tickets.iter().filter(|t| t.is_closed).count();
    let total_tickets: usize = by_sub_queue.iter().map(|q| q.total_tickets).sum();

    QueueReport {
        totals: ReportTotals {
            total_tickets,
            total_closed,
            percent_closed: percent_rounded(total_closed, total_tickets),
            total_accounted_time: total(tickets.iter().map(|t| t.accounted_time)),
        },
        by_sub_queue,
        by_main_queue,
    }
}
