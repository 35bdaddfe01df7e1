//! Streak statistics over a reconciled period series.

use crate::core::calculator::period::{period_end, period_label};
use crate::models::periodicity::Periodicity;
use crate::models::series::PeriodSeries;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use std::fmt;

/// Calendar range of a streak: start of its first period to the last day
/// of its final period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StreakRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl fmt::Display for StreakRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}",
            self.start.format("%Y-%m-%d"),
            self.end.format("%Y-%m-%d")
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StreakReport {
    pub period_count: usize,
    pub success_count: usize,
    pub success_percentage: String,
    pub longest_streak: usize,
    pub longest_streak_range: Option<StreakRange>,
}

impl StreakReport {
    /// `"-"` when there is no streak at all.
    pub fn range_label(&self) -> String {
        self.longest_streak_range
            .map(|r| r.to_string())
            .unwrap_or_else(|| "-".to_string())
    }
}

/// One row of the per-period listing handed to the reporting layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeriodRow {
    pub label: String,
    pub completed: bool,
    pub completed_at: Option<DateTime<Utc>>,
}

/// `round(success / total * 100, 2)` followed by `%`, ties to even
/// (`3.12%` for 1 of 32); always at least one decimal (`50.0%`, `71.43%`).
/// No periods at all gives `0%`.
pub fn format_percentage(success: usize, total: usize) -> String {
    if total == 0 {
        return "0%".to_string();
    }
    let pct = (success as f64 / total as f64 * 100.0 * 100.0).round_ties_even() / 100.0;
    // Debug keeps the trailing ".0" that Display drops.
    format!("{:?}%", pct)
}

/// Single linear scan: counts, percentage and the longest run of completed
/// periods. On equal length the first run wins.
pub fn analyze_series(series: &PeriodSeries) -> StreakReport {
    let periodicity = series.periodicity();
    let records = series.records();

    let mut cur = 0usize;
    let mut max = 0usize;
    let mut streak_start: Option<NaiveDate> = None;
    let mut best: Option<StreakRange> = None;

    let mut close = |cur: usize, start: Option<NaiveDate>, last_start: NaiveDate| {
        if cur > max
            && let Some(s) = start
        {
            max = cur;
            best = Some(StreakRange {
                start: s,
                end: period_end(last_start, periodicity),
            });
        }
    };

    for (i, r) in records.iter().enumerate() {
        if r.completed {
            cur += 1;
            if cur == 1 {
                streak_start = Some(r.period_start);
            }
        } else if cur > 0 {
            close(cur, streak_start, records[i - 1].period_start);
            cur = 0;
        }
    }

    if cur > 0
        && let Some(last) = records.last()
    {
        close(cur, streak_start, last.period_start);
    }

    let success_count = series.success_count();

    StreakReport {
        period_count: records.len(),
        success_count,
        success_percentage: format_percentage(success_count, records.len()),
        longest_streak: max,
        longest_streak_range: best,
    }
}

/// Chronological per-period listing.
pub fn period_rows(series: &PeriodSeries) -> Vec<PeriodRow> {
    let periodicity: Periodicity = series.periodicity();
    series
        .records()
        .iter()
        .map(|r| PeriodRow {
            label: period_label(r.period_start, periodicity),
            completed: r.completed,
            completed_at: r.completed_at,
        })
        .collect()
}
