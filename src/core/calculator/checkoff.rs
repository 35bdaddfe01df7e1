//! Single completion event for the open period of a habit.

use crate::core::calculator::period::current_period_start;
use crate::errors::{AppError, AppResult};
use crate::models::habit::Habit;
use crate::models::period_record::PeriodRecord;
use crate::models::series::PeriodSeries;
use chrono::{DateTime, NaiveDate, Utc};

/// Mark the open period as completed at `now` and return the start of the
/// period that was recorded.
///
/// The new record always follows the last recorded one, so the series stays
/// gap-free even if reconciliation did not run first.
pub fn check_off(
    habit: &Habit,
    series: &mut PeriodSeries,
    now: DateTime<Utc>,
) -> AppResult<NaiveDate> {
    if habit.is_demo() {
        return Err(AppError::DemoImmutable(habit.name.clone()));
    }

    let current = current_period_start(habit.anchor(), habit.periodicity, now);

    // Daily: the last record is today. Weekly: it started at most 6 days ago.
    if let Some(last) = series.last_start()
        && last >= current
    {
        return Err(AppError::AlreadyCompleted(habit.name.clone()));
    }

    let start = series
        .expected_next_start()
        .unwrap_or_else(|| habit.anchor());

    series.push(PeriodRecord::completed(start, now))?;
    Ok(start)
}
