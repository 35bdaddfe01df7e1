use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

/// Outcome of one elapsed (or currently open) period of a habit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeriodRecord {
    pub period_start: NaiveDate,              // ⇔ periods.period_start (TEXT "YYYY-MM-DD")
    pub completed: bool,                      // ⇔ periods.completed (0 | 1)
    pub completed_at: Option<DateTime<Utc>>,  // ⇔ periods.completed_at (TEXT RFC 3339 | NULL)
}

impl PeriodRecord {
    /// A period that closed without a check-off.
    pub fn missed(period_start: NaiveDate) -> Self {
        Self {
            period_start,
            completed: false,
            completed_at: None,
        }
    }

    pub fn completed(period_start: NaiveDate, at: DateTime<Utc>) -> Self {
        Self {
            period_start,
            completed: true,
            completed_at: Some(at),
        }
    }

    pub fn start_str(&self) -> String {
        self.period_start.format("%Y-%m-%d").to_string()
    }
}
