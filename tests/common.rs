#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, NaiveDate, Utc};
use rhabits::models::period_record::PeriodRecord;
use rhabits::models::periodicity::Periodicity;
use rhabits::models::series::PeriodSeries;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rhb() -> Command {
    cargo_bin_cmd!("rhabits")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rhabits.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the DB (schema only, no config file written)
pub fn init_db(db_path: &str) {
    rhb()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Initialize the DB and create one daily and one weekly habit on 2021-09-01
pub fn init_db_with_habits(db_path: &str) {
    init_db(db_path);

    rhb()
        .args([
            "--db",
            db_path,
            "--now",
            "2021-09-01T08:00:00Z",
            "add",
            "Reading",
            "--spec",
            "Read 10 pages",
            "--period",
            "daily",
        ])
        .assert()
        .success();

    rhb()
        .args([
            "--db",
            db_path,
            "--now",
            "2021-09-01T08:00:00Z",
            "add",
            "Cleaning",
            "--spec",
            "Clean the flat",
            "--period",
            "weekly",
        ])
        .assert()
        .success();
}

pub fn ts(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .expect("valid RFC 3339 timestamp")
        .with_timezone(&Utc)
}

pub fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date")
}

/// Series from a `Y`/`N` pattern, one period per char, starting at `start`.
pub fn series_from_pattern(periodicity: Periodicity, start: &str, pattern: &str) -> PeriodSeries {
    let mut series = PeriodSeries::new(periodicity);
    let mut d = day(start);
    for c in pattern.chars() {
        let record = if c == 'Y' {
            PeriodRecord::completed(d, d.and_hms_opt(9, 0, 0).expect("time").and_utc())
        } else {
            PeriodRecord::missed(d)
        };
        series.push(record).expect("contiguous pattern");
        d += periodicity.length();
    }
    series
}
