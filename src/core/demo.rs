//! Random, read-only example habits to explore the analysis views without
//! weeks of real check-offs.

use crate::core::calculator::period::period_starts_between;
use crate::db::log::hlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::{habit_names, insert_habit_with_series};
use crate::errors::{AppError, AppResult};
use crate::models::habit::Habit;
use crate::models::period_record::PeriodRecord;
use crate::models::periodicity::Periodicity;
use crate::models::series::PeriodSeries;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use rand::distributions::uniform::SampleRange;
use rand::prelude::*;
use rand_pcg::Mcg128Xsl64;
use std::ops::{Range, RangeInclusive};

pub const DEMO_NAMES: &[&str] = &[
    "Rust Coding",
    "Studying Data Science",
    "Implement Testing",
    "Fight Trojan",
    "Ask tutor",
    "Solve datetime-issues",
    "Be grateful",
    "Learn Klingon",
    "Having clown-breakfast",
    "Write doc comments",
    "Stop non-smoking",
    "Crack code",
    "Automate stuff",
    "Feed Godzilla",
    "Fight sexism",
    "Fight racism",
    "Dream interstellar",
    "Follow Pippi-Longstocking",
];

const SECONDS_PER_DAY: i64 = 86_400;

/// The generated series starts in the first half of the window...
pub const START_FRACTION: Range<f64> = 0.0..0.5;
/// ...and ends in the second half, the window's last day included.
pub const END_FRACTION: RangeInclusive<f64> = 0.51..=1.0;

/// Calendar window the generated series must fall into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DemoWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> AppResult<Self> {
        if end < start {
            return Err(AppError::InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Instant at a random fraction, drawn from `fraction`, of the way
    /// through the window.
    fn at<R: Rng, F: SampleRange<f64>>(&self, rng: &mut R, fraction: F) -> DateTime<Utc> {
        let origin = self.start.and_time(chrono::NaiveTime::MIN).and_utc();
        let span = (self.end - self.start).num_seconds();
        let factor = rng.gen_range(fraction);
        origin + Duration::seconds((span as f64 * factor) as i64)
    }
}

pub struct DemoLogic;

impl DemoLogic {
    /// A demo name not used by any existing habit.
    pub fn pick_name<R: Rng>(rng: &mut R, existing: &[String]) -> AppResult<&'static str> {
        let available: Vec<&'static str> = DEMO_NAMES
            .iter()
            .copied()
            .filter(|n| !existing.iter().any(|e| e == n))
            .collect();

        available
            .choose(rng)
            .copied()
            .ok_or(AppError::NoDemoNameAvailable)
    }

    /// Build a demo habit and its series: a random sub-window starting in the
    /// first half of `window` and ending in the second half, each period
    /// checked-off with probability 1/2 at a random time of its first day.
    pub fn generate<R: Rng>(
        rng: &mut R,
        name: &str,
        periodicity: Periodicity,
        window: DemoWindow,
    ) -> AppResult<(Habit, PeriodSeries)> {
        let created_at = window.at(rng, START_FRACTION);
        let ends_at = window.at(rng, END_FRACTION);

        let habit = Habit::demo(name, periodicity, created_at);

        let starts = period_starts_between(habit.anchor(), ends_at.date_naive(), periodicity)?;
        let mut series = PeriodSeries::new(periodicity);

        for start in starts {
            let record = if rng.gen_bool(0.5) {
                let at = start.and_time(chrono::NaiveTime::MIN).and_utc()
                    + Duration::seconds(rng.gen_range(0..SECONDS_PER_DAY));
                PeriodRecord::completed(start, at)
            } else {
                PeriodRecord::missed(start)
            };
            series.push(record)?;
        }

        Ok((habit, series))
    }

    /// Generate and store a demo habit. `seed` makes the result reproducible.
    pub fn apply(
        pool: &mut DbPool,
        periodicity: Periodicity,
        window: DemoWindow,
        seed: Option<u64>,
    ) -> AppResult<(Habit, PeriodSeries)> {
        let mut rng = match seed {
            Some(seed) => Mcg128Xsl64::seed_from_u64(seed),
            None => Mcg128Xsl64::from_entropy(),
        };

        let existing = habit_names(pool)?;
        let name = Self::pick_name(&mut rng, &existing)?;

        let (mut habit, series) = Self::generate(&mut rng, name, periodicity, window)?;
        habit.id = insert_habit_with_series(pool, &habit, &series)?;

        hlog_quiet(
            &pool.conn,
            "demo",
            &habit.name,
            &format!(
                "Generated {} demo habit with {} period(s)",
                habit.periodicity,
                series.len()
            ),
        );

        Ok((habit, series))
    }
}
