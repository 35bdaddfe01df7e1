use crate::core::calculator::reconcile::{ReconcileOutcome, reconcile};
use crate::db::log::hlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::{load_habits, load_series, save_series};
use crate::errors::AppResult;
use crate::models::habit::Habit;
use crate::models::series::PeriodSeries;
use chrono::{DateTime, Utc};

/// Brings stored series up to date with the reference clock.
pub struct RefreshLogic;

impl RefreshLogic {
    /// Load, reconcile and persist the series of one habit. Returns the
    /// reconciled series together with what happened.
    pub fn refresh_habit(
        pool: &mut DbPool,
        habit: &Habit,
        now: DateTime<Utc>,
    ) -> AppResult<(PeriodSeries, ReconcileOutcome)> {
        let mut series = load_series(&pool.conn, habit)?;
        let stored = series.len();

        let outcome = reconcile(habit, &mut series, now)?;
        let saved = save_series(pool, habit, &series, stored)?;

        if saved > 0 {
            hlog_quiet(&pool.conn, "reconcile", &habit.name, &outcome.to_string());
        }

        Ok((series, outcome))
    }

    /// Reconcile every habit, in registry order.
    pub fn refresh_all(
        pool: &mut DbPool,
        now: DateTime<Utc>,
    ) -> AppResult<Vec<(Habit, PeriodSeries, ReconcileOutcome)>> {
        let habits = load_habits(pool)?;

        let mut out = Vec::with_capacity(habits.len());
        for habit in habits {
            let (series, outcome) = Self::refresh_habit(pool, &habit, now)?;
            out.push((habit, series, outcome));
        }
        Ok(out)
    }
}
