//! Date arithmetic for habit periods.
//!
//! Periods are anchored to the calendar date of the habit's creation (UTC):
//! period 0 starts on the anchor, period n starts `n * len` days later.

use crate::errors::{AppError, AppResult};
use crate::models::periodicity::Periodicity;
use chrono::{DateTime, Duration, NaiveDate, Utc};

/// Start of the period containing `date`.
pub fn period_start_of(anchor: NaiveDate, periodicity: Periodicity, date: NaiveDate) -> NaiveDate {
    let len = periodicity.days();
    let offset = (date - anchor).num_days().div_euclid(len) * len;
    anchor + Duration::days(offset)
}

/// Start of the open period, i.e. the one containing `now`.
pub fn current_period_start(
    anchor: NaiveDate,
    periodicity: Periodicity,
    now: DateTime<Utc>,
) -> NaiveDate {
    period_start_of(anchor, periodicity, now.date_naive())
}

pub fn next_period_start(start: NaiveDate, periodicity: Periodicity) -> NaiveDate {
    start + periodicity.length()
}

pub fn previous_period_start(start: NaiveDate, periodicity: Periodicity) -> NaiveDate {
    start - periodicity.length()
}

/// Last calendar day covered by the period starting at `start`.
pub fn period_end(start: NaiveDate, periodicity: Periodicity) -> NaiveDate {
    start + Duration::days(periodicity.days() - 1)
}

/// `2021-09-01` for daily periods, `2021-09-01 - 2021-09-07` for weekly ones.
pub fn period_label(start: NaiveDate, periodicity: Periodicity) -> String {
    match periodicity {
        Periodicity::Daily => start.format("%Y-%m-%d").to_string(),
        Periodicity::Weekly => format!(
            "{} - {}",
            start.format("%Y-%m-%d"),
            period_end(start, periodicity).format("%Y-%m-%d")
        ),
    }
}

/// Every period start from `start` to `end` (both inclusive), one period
/// apart. A trailing partial step past `end` is not included.
pub fn period_starts_between(
    start: NaiveDate,
    end: NaiveDate,
    periodicity: Periodicity,
) -> AppResult<Vec<NaiveDate>> {
    if end < start {
        return Err(AppError::InvalidDateRange { start, end });
    }

    let mut out = Vec::new();
    let mut d = start;
    while d <= end {
        out.push(d);
        d = next_period_start(d, periodicity);
    }
    Ok(out)
}
