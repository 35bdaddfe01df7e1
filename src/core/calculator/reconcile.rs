//! Backfill of periods that closed without a check-off.

use crate::core::calculator::period::{
    current_period_start, next_period_start, period_starts_between, previous_period_start,
};
use crate::errors::AppResult;
use crate::models::habit::Habit;
use crate::models::period_record::PeriodRecord;
use crate::models::series::PeriodSeries;
use chrono::{DateTime, NaiveDate, Utc};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconcileOutcome {
    /// Demo habits keep their generated series.
    DemoSkipped,
    /// Every closed period already has an outcome.
    UpToDate,
    /// `count` missed periods were appended, from `first` to `last`.
    Backfilled {
        count: usize,
        first: NaiveDate,
        last: NaiveDate,
    },
}

impl ReconcileOutcome {
    pub fn backfilled(&self) -> usize {
        match self {
            ReconcileOutcome::Backfilled { count, .. } => *count,
            _ => 0,
        }
    }
}

impl fmt::Display for ReconcileOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReconcileOutcome::DemoSkipped => write!(f, "No auto-update for demo data"),
            ReconcileOutcome::UpToDate => write!(
                f,
                "No auto-update needed - already checked-off or check-off for the running period still possible"
            ),
            ReconcileOutcome::Backfilled { count, first, last } => write!(
                f,
                "Auto-update for {} - {} completed ({} missed period{})",
                first,
                last,
                count,
                if *count == 1 { "" } else { "s" }
            ),
        }
    }
}

/// Bring `series` up to date with `now`: every closed period after the last
/// recorded one is appended as missed. Running it twice with the same `now`
/// appends nothing the second time.
pub fn reconcile(
    habit: &Habit,
    series: &mut PeriodSeries,
    now: DateTime<Utc>,
) -> AppResult<ReconcileOutcome> {
    let periodicity = habit.periodicity;
    let anchor = habit.anchor();

    let last_recorded = series
        .last_start()
        .unwrap_or_else(|| previous_period_start(anchor, periodicity));

    if habit.is_demo() {
        return Ok(ReconcileOutcome::DemoSkipped);
    }

    let current = current_period_start(anchor, periodicity, now);
    if (current - last_recorded) <= periodicity.length() {
        return Ok(ReconcileOutcome::UpToDate);
    }

    let first = next_period_start(last_recorded, periodicity);
    let last = previous_period_start(current, periodicity);
    let missed = period_starts_between(first, last, periodicity)?;
    let count = missed.len();

    series.extend(missed.into_iter().map(PeriodRecord::missed))?;

    Ok(ReconcileOutcome::Backfilled { count, first, last })
}
