use std::path::PathBuf;

use chrono::NaiveDateTime;
use serde::Serialize;

/// One CSV record, reduced to the columns the report reads.
/// Empty cells are `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct TicketRow {
    /// 1-based line of the record in the source file.
    pub line: usize,
    /// Composite `"Main::Sub"` queue path.
    pub queue: Option<String>,
    pub created: Option<NaiveDateTime>,
    pub state: Option<String>,
    pub accounted_time: Option<f64>,
}

/// The raw ticket export, loaded once at startup and never mutated.
#[derive(Debug, Clone, Default)]
pub struct TicketTable {
    pub rows: Vec<TicketRow>,
    pub source: Option<PathBuf>,
    /// Every header found in the file, in order (passthrough columns included).
    pub columns: Vec<String>,
    pub missing_optional_columns: Vec<String>,
    /// Rows with an empty `Created` cell; they never fall inside a date range.
    pub undated_rows: usize,
    pub parse_duration_ms: u64,
}

impl TicketTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn summary(&self) -> TableSummary {
        let created = self.rows.iter().filter_map(|r| r.created);
        let (first, last) = created.fold((None, None), |(lo, hi), dt| {
            (
                Some(lo.map_or(dt, |l: NaiveDateTime| l.min(dt))),
                Some(hi.map_or(dt, |h: NaiveDateTime| h.max(dt))),
            )
        });
        TableSummary {
            total_rows: self.rows.len(),
            undated_rows: self.undated_rows,
            first_created: first.map(|dt| dt.format("%Y-%m-%d").to_string()),
            last_created: last.map(|dt| dt.format("%Y-%m-%d").to_string()),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TableSummary {
    pub total_rows: usize,
    pub undated_rows: usize,
    pub first_created: Option<String>,
    pub last_created: Option<String>,
}
