//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use chrono::NaiveDate;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid periodicity: {0} (use 'daily' or 'weekly')")]
    InvalidPeriodicity(String),

    #[error("Invalid habit name: {0}")]
    InvalidHabitName(String),

    // ---------------------------
    // Habit registry
    // ---------------------------
    #[error("Habit '{0}' not found")]
    HabitNotFound(String),

    #[error("A habit named '{0}' already exists")]
    HabitExists(String),

    #[error("All demo habit names are already in use")]
    NoDemoNameAvailable,

    // ---------------------------
    // Period series
    // ---------------------------
    /// An append would leave a gap or a duplicate in a period series.
    #[error("Period series contiguity violated: expected {expected}, got {got}")]
    ContiguityViolation { expected: NaiveDate, got: NaiveDate },

    #[error("Can't check-off demo data '{0}'")]
    DemoImmutable(String),

    #[error("Habit '{0}' has already been checked-off for the running period")]
    AlreadyCompleted(String),

    #[error("Invalid date range: end {end} is before start {start}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    /// Expected, user-facing outcomes of a check-off rather than failures.
    pub fn is_check_off_refusal(&self) -> bool {
        matches!(
            self,
            AppError::DemoImmutable(_) | AppError::AlreadyCompleted(_)
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;
