use crate::errors::{AppError, AppResult};
use chrono::{DateTime, NaiveDate, Utc};

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Parse a reference instant: full RFC 3339 timestamp, or a bare
/// `YYYY-MM-DD` meaning noon UTC of that day.
pub fn parse_instant(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s.trim()) {
        return Some(dt.with_timezone(&Utc));
    }
    parse_date(s)
        .and_then(|d| d.and_hms_opt(12, 0, 0))
        .map(|ndt| ndt.and_utc())
}

/// The reference clock: the `--now` override if given, the wall clock otherwise.
pub fn resolve_now(override_now: Option<&str>) -> AppResult<DateTime<Utc>> {
    match override_now {
        Some(s) => parse_instant(s).ok_or_else(|| AppError::InvalidDate(s.to_string())),
        None => Ok(Utc::now()),
    }
}

pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S").to_string()
}
