use crate::core::calculator::checkoff::check_off;
use crate::core::calculator::reconcile::ReconcileOutcome;
use crate::core::refresh::RefreshLogic;
use crate::db::log::hlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::{load_habit, save_series};
use crate::errors::AppResult;
use crate::models::habit::Habit;
use chrono::{DateTime, NaiveDate, Utc};

#[derive(Debug, Clone)]
pub struct CheckOutcome {
    pub habit: Habit,
    pub reconciled: ReconcileOutcome,
    pub period_start: NaiveDate,
}

/// High-level business logic for the `check` command.
pub struct CheckLogic;

impl CheckLogic {
    /// Reconcile the habit, then record a completion for its open period.
    pub fn apply(pool: &mut DbPool, name: &str, now: DateTime<Utc>) -> AppResult<CheckOutcome> {
        let habit = load_habit(pool, name)?;
        let (mut series, reconciled) = RefreshLogic::refresh_habit(pool, &habit, now)?;
        let stored = series.len();

        let period_start = check_off(&habit, &mut series, now)?;
        save_series(pool, &habit, &series, stored)?;

        hlog_quiet(
            &pool.conn,
            "check",
            &habit.name,
            &format!("Checked-off period starting {}", period_start),
        );

        Ok(CheckOutcome {
            habit,
            reconciled,
            period_start,
        })
    }
}
