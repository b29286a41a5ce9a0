use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};
use serde::Serialize;

/// Inclusive calendar-date window applied to `Created`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        DateRange { start, end }
    }

    /// First through last day of the calendar month before `today`.
    pub fn previous_month(today: NaiveDate) -> Self {
        let first_of_current = today.with_day(1).unwrap_or(today);
        let end = first_of_current - Duration::days(1);
        let start = end.with_day(1).unwrap_or(end);
        DateRange { start, end }
    }

    /// Boundary days are included whatever the time of day.
    pub fn contains(&self, created: NaiveDateTime) -> bool {
        let day = created.date();
        self.start <= day && day <= self.end
    }

    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}
