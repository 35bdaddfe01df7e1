use crate::errors::AppResult;
use crate::ui::messages::warning;
use chrono::Utc;
use rusqlite::Connection;
use rusqlite::params;

/// Write an internal log line into the `log` table.
pub fn hlog(conn: &Connection, operation: &str, target: &str, message: &str) -> AppResult<()> {
    let now = Utc::now().to_rfc3339();

    let mut stmt = conn.prepare_cached(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, ?2, ?3, ?4)",
    )?;

    stmt.execute(params![now, operation, target, message])?;

    Ok(())
}

/// Same as [`hlog`] but never fails the caller: the audit trail is
/// best-effort.
pub fn hlog_quiet(conn: &Connection, operation: &str, target: &str, message: &str) {
    if let Err(e) = hlog(conn, operation, target, message) {
        warning(format!("Failed to write internal log: {}", e));
    }
}
