use crate::analyzer::temporal::DateRange;
use crate::config::DashboardConfig;
use crate::parser::TicketTable;

/// A ticket kept for the report window, with its queue path split.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedTicket {
    pub main_queue: String,
    /// Never empty.
    pub sub_queue: String,
    pub is_closed: bool,
    /// Missing accounted time counts as zero.
    pub accounted_time: f64,
}

/// Split `"Main::Sub"` on the first delimiter. Parts are trimmed; a missing
/// or blank sub-queue is `None`.
pub fn split_queue(queue: &str, delimiter: &str) -> (String, Option<String>) {
    match queue.split_once(delimiter) {
        Some((main, sub)) => {
            let sub = sub.trim();
            (
                main.trim().to_string(),
                (!sub.is_empty()).then(|| sub.to_string()),
            )
        }
        None => (queue.trim().to_string(), None),
    }
}

/// A ticket is closed unless its state mentions `open_marker`, compared
/// case-insensitively. No state at all counts as closed.
pub fn is_closed(state: Option<&str>, open_marker: &str) -> bool {
    match state {
        Some(s) => !s.to_lowercase().contains(&open_marker.to_lowercase()),
        None => true,
    }
}

/// Restrict the raw table to `range` and normalize what is left.
/// Row order is preserved.
pub fn derive_tickets(
    table: &TicketTable,
    range: &DateRange,
    config: &DashboardConfig,
) -> Vec<DerivedTicket> {
    table
        .rows
        .iter()
        .filter_map(|row| {
            if !row.created.is_some_and(|c| range.contains(c)) {
                return None;
            }
            let (main_queue, sub_queue) =
                split_queue(row.queue.as_deref().unwrap_or(""), &config.queue_delimiter);
            let sub_queue = sub_queue?;
            if config.is_excluded(&main_queue) {
                return None;
            }
            Some(DerivedTicket {
                main_queue,
                sub_queue,
                is_closed: is_closed(row.state.as_deref(), &config.open_marker),
                accounted_time: row.accounted_time.unwrap_or(0.0),
            })
        })
        .collect()
}
