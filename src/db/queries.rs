use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::habit::{Habit, HabitKind};
use crate::models::period_record::PeriodRecord;
use crate::models::periodicity::Periodicity;
use crate::models::series::PeriodSeries;
use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

fn conversion_error(col: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(col, rusqlite::types::Type::Text, Box::new(err))
}

fn parse_timestamp(col: usize, s: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| conversion_error(col, AppError::InvalidDate(s.to_string())))
}

/// Full precision (sub-second digits kept) so timestamps round-trip.
fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339()
}

pub fn map_habit(row: &Row) -> Result<Habit> {
    let periodicity_str: String = row.get("periodicity")?;
    let periodicity = Periodicity::from_db_str(&periodicity_str).ok_or_else(|| {
        conversion_error(3, AppError::InvalidPeriodicity(periodicity_str.clone()))
    })?;

    let kind_str: String = row.get("kind")?;
    let kind = HabitKind::from_db_str(&kind_str).ok_or_else(|| {
        conversion_error(4, AppError::Other(format!("Invalid habit kind: {}", kind_str)))
    })?;

    let created_str: String = row.get("created_at")?;
    let created_at = parse_timestamp(5, &created_str)?;

    Ok(Habit {
        id: row.get("id")?,
        name: row.get("name")?,
        specification: row.get("specification")?,
        periodicity,
        kind,
        created_at,
    })
}

pub fn map_period(row: &Row) -> Result<PeriodRecord> {
    let start_str: String = row.get("period_start")?;
    let period_start = NaiveDate::parse_from_str(&start_str, "%Y-%m-%d")
        .map_err(|_| conversion_error(0, AppError::InvalidDate(start_str.clone())))?;

    let completed: bool = row.get("completed")?;
    let completed_at = match row.get::<_, Option<String>>("completed_at")? {
        Some(s) => Some(parse_timestamp(2, &s)?),
        None => None,
    };

    Ok(PeriodRecord {
        period_start,
        completed,
        completed_at,
    })
}

// ---------------------------------------------------------------------------
// Habit registry
// ---------------------------------------------------------------------------

/// Insert a habit and return its new id.
pub fn insert_habit(conn: &Connection, habit: &Habit) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO habits (name, specification, periodicity, kind, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            habit.name,
            habit.specification,
            habit.periodicity.to_db_str(),
            habit.kind.to_db_str(),
            format_timestamp(&habit.created_at),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn load_habits(pool: &DbPool) -> AppResult<Vec<Habit>> {
    let mut stmt = pool.conn.prepare(
        "SELECT id, name, specification, periodicity, kind, created_at
         FROM habits
         ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([], map_habit)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn find_habit(pool: &DbPool, name: &str) -> AppResult<Option<Habit>> {
    let habit = pool
        .conn
        .query_row(
            "SELECT id, name, specification, periodicity, kind, created_at
             FROM habits
             WHERE name = ?1",
            [name.trim()],
            map_habit,
        )
        .optional()?;
    Ok(habit)
}

pub fn load_habit(pool: &DbPool, name: &str) -> AppResult<Habit> {
    find_habit(pool, name)?.ok_or_else(|| AppError::HabitNotFound(name.trim().to_string()))
}

pub fn habit_names(pool: &DbPool) -> AppResult<Vec<String>> {
    let mut stmt = pool.conn.prepare("SELECT name FROM habits ORDER BY id ASC")?;
    let names = stmt
        .query_map([], |row| row.get::<_, String>(0))?
        .collect::<Result<Vec<_>>>()?;
    Ok(names)
}

/// Remove a habit and its whole series in one transaction.
/// Returns the number of period rows removed.
pub fn delete_habit(pool: &mut DbPool, habit: &Habit) -> AppResult<usize> {
    pool.with_tx(|tx| {
        let periods = tx.execute("DELETE FROM periods WHERE habit_id = ?1", [habit.id])?;
        let habits = tx.execute("DELETE FROM habits WHERE id = ?1", [habit.id])?;
        if habits != 1 {
            return Err(AppError::HabitNotFound(habit.name.clone()));
        }
        Ok(periods)
    })
}

// ---------------------------------------------------------------------------
// Period series
// ---------------------------------------------------------------------------

pub fn load_series(conn: &Connection, habit: &Habit) -> AppResult<PeriodSeries> {
    let mut stmt = conn.prepare_cached(
        "SELECT period_start, completed, completed_at
         FROM periods
         WHERE habit_id = ?1
         ORDER BY period_start ASC",
    )?;

    let rows = stmt.query_map([habit.id], map_period)?;

    let mut records = Vec::new();
    for r in rows {
        records.push(r?);
    }

    PeriodSeries::from_records(habit.periodicity, records)
}

fn insert_periods(conn: &Connection, habit_id: i64, records: &[PeriodRecord]) -> AppResult<()> {
    let mut stmt = conn.prepare_cached(
        "INSERT INTO periods (habit_id, period_start, completed, completed_at)
         VALUES (?1, ?2, ?3, ?4)",
    )?;

    for r in records {
        stmt.execute(params![
            habit_id,
            r.start_str(),
            r.completed,
            r.completed_at.as_ref().map(format_timestamp),
        ])?;
    }
    Ok(())
}

/// Persist the records of `series` past the first `stored` ones (the series
/// is append-only, so earlier rows never change).
pub fn save_series(
    pool: &mut DbPool,
    habit: &Habit,
    series: &PeriodSeries,
    stored: usize,
) -> AppResult<usize> {
    let tail = series.tail_from(stored);
    if tail.is_empty() {
        return Ok(0);
    }

    pool.with_tx(|tx| insert_periods(tx, habit.id, tail))?;
    Ok(tail.len())
}

/// Insert a habit together with its initial series (used for demo data).
pub fn insert_habit_with_series(
    pool: &mut DbPool,
    habit: &Habit,
    series: &PeriodSeries,
) -> AppResult<i64> {
    pool.with_tx(|tx| {
        let id = insert_habit(tx, habit)?;
        insert_periods(tx, id, series.records())?;
        Ok(id)
    })
}
