use crate::db::log::hlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_habit, load_habit};
use crate::errors::AppResult;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Remove a habit and its full series. Returns the number of period
    /// rows deleted with it.
    pub fn apply(pool: &mut DbPool, name: &str) -> AppResult<usize> {
        let habit = load_habit(pool, name)?;
        let periods = delete_habit(pool, &habit)?;

        hlog_quiet(
            &pool.conn,
            "del",
            &habit.name,
            &format!("Deleted habit and {} recorded period(s)", periods),
        );

        Ok(periods)
    }
}
