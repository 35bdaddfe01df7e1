use crate::db::log::hlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::{find_habit, insert_habit};
use crate::errors::{AppError, AppResult};
use crate::models::habit::Habit;
use crate::models::periodicity::Periodicity;
use chrono::{DateTime, Utc};

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Validate a user supplied habit name.
    pub fn validate_name(name: &str) -> AppResult<&str> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(AppError::InvalidHabitName("name must not be empty".into()));
        }
        if trimmed.chars().any(char::is_control) {
            return Err(AppError::InvalidHabitName(format!(
                "'{}' contains control characters",
                trimmed.escape_debug()
            )));
        }
        Ok(trimmed)
    }

    /// Create a tracked habit. Its series starts empty; the creation instant
    /// anchors period 0.
    pub fn apply(
        pool: &mut DbPool,
        name: &str,
        specification: &str,
        periodicity: Periodicity,
        now: DateTime<Utc>,
    ) -> AppResult<Habit> {
        let name = Self::validate_name(name)?;

        if find_habit(pool, name)?.is_some() {
            return Err(AppError::HabitExists(name.to_string()));
        }

        let mut habit = Habit::new(name, specification, periodicity, now);
        habit.id = insert_habit(&pool.conn, &habit)?;

        hlog_quiet(
            &pool.conn,
            "add",
            &habit.name,
            &format!("Created {} habit", habit.periodicity),
        );

        Ok(habit)
    }
}
