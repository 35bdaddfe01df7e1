use crate::models::habit::DEMO_SPECIFICATION;
use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn column_exists(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{}')", table))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (strftime('%Y-%m-%dT%H:%M:%SZ', 'now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Create the `habits` table with the current schema.
fn create_habits_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS habits (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            name          TEXT NOT NULL UNIQUE,
            specification TEXT NOT NULL DEFAULT '',
            periodicity   TEXT NOT NULL CHECK(periodicity IN ('daily','weekly')),
            kind          TEXT NOT NULL DEFAULT 'tracked' CHECK(kind IN ('tracked','demo')),
            created_at    TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Create the `periods` table: one row per elapsed period of a habit.
fn create_periods_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS periods (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            habit_id     INTEGER NOT NULL REFERENCES habits(id) ON DELETE CASCADE,
            period_start TEXT NOT NULL,
            completed    INTEGER NOT NULL DEFAULT 0 CHECK(completed IN (0,1)),
            completed_at TEXT,
            UNIQUE(habit_id, period_start)
        );

        CREATE INDEX IF NOT EXISTS idx_periods_habit_start ON periods(habit_id, period_start);
        "#,
    )?;
    Ok(())
}

/// Older databases flagged demo habits only through their specification
/// text. Add the explicit `kind` column and flag those rows.
fn migrate_add_habit_kind(conn: &Connection) -> Result<()> {
    let version = "20250301_0002_add_habit_kind";

    if migration_applied(conn, version)? {
        return Ok(());
    }

    if !column_exists(conn, "habits", "kind")? {
        conn.execute_batch(
            "ALTER TABLE habits ADD COLUMN kind TEXT NOT NULL DEFAULT 'tracked'
                CHECK(kind IN ('tracked','demo'));",
        )?;
    }

    let flagged = conn.execute(
        "UPDATE habits SET kind = 'demo' WHERE specification = ?1",
        [DEMO_SPECIFICATION],
    )?;

    mark_applied(conn, version, "Added explicit kind flag to habits")?;

    if flagged > 0 {
        success(format!(
            "Migration applied: {} → {} demo habit(s) flagged",
            version, flagged
        ));
    }

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Core tables
    let fresh = !table_exists(conn, "habits")?;
    create_habits_table(conn)?;
    create_periods_table(conn)?;

    if fresh {
        success("Created habits and periods tables.");
    }

    // 3) Versioned migrations
    migrate_add_habit_kind(conn)?;

    Ok(())
}
