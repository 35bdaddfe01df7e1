use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use rhabits::db::pool::DbPool;
use rhabits::db::queries::habit_names;

mod common;
use common::{init_db, init_db_with_habits, rhb, setup_test_db, temp_out};

fn check(db_path: &str, name: &str, now: &str) -> assert_cmd::assert::Assert {
    rhb()
        .args(["--db", db_path, "--now", now, "check", name])
        .assert()
}

#[test]
fn test_add_and_list() {
    let db_path = setup_test_db("cli_add_list");
    init_db_with_habits(&db_path);

    rhb()
        .args(["--db", &db_path, "--now", "2021-09-03T12:00:00Z", "list"])
        .assert()
        .success()
        .stdout(contains("Reading"))
        .stdout(contains("Cleaning"))
        .stdout(contains("Read 10 pages"))
        .stdout(contains("weekly"));
}

#[test]
fn test_add_duplicate_fails() {
    let db_path = setup_test_db("cli_add_duplicate");
    init_db_with_habits(&db_path);

    rhb()
        .args(["--db", &db_path, "add", "Reading", "--period", "weekly"])
        .assert()
        .failure()
        .stderr(contains("already exists"));
}

#[test]
fn test_add_invalid_period_is_rejected() {
    let db_path = setup_test_db("cli_add_invalid_period");
    init_db(&db_path);

    rhb()
        .args(["--db", &db_path, "add", "Running", "--period", "monthly"])
        .assert()
        .failure();
}

#[test]
fn test_add_short_period_alias() {
    let db_path = setup_test_db("cli_add_alias");
    init_db(&db_path);

    rhb()
        .args(["--db", &db_path, "add", "Running", "--period", "w"])
        .assert()
        .success()
        .stdout(contains("weekly habit 'Running'"));
}

#[test]
fn test_check_twice_in_same_period() {
    let db_path = setup_test_db("cli_check_twice");
    init_db_with_habits(&db_path);

    check(&db_path, "Reading", "2021-09-01T20:00:00Z")
        .success()
        .stdout(contains("Successfully checked-off 'Reading' for 2021-09-01"));

    check(&db_path, "Reading", "2021-09-01T21:00:00Z")
        .success()
        .stdout(contains("already been checked-off"));
}

#[test]
fn test_check_weekly_prints_period_range() {
    let db_path = setup_test_db("cli_check_weekly");
    init_db_with_habits(&db_path);

    check(&db_path, "Cleaning", "2021-09-10T10:00:00Z")
        .success()
        .stdout(contains("Auto-update for 2021-09-01 - 2021-09-01"))
        .stdout(contains("for 2021-09-08 - 2021-09-14"));
}

#[test]
fn test_check_unknown_habit_fails() {
    let db_path = setup_test_db("cli_check_unknown");
    init_db(&db_path);

    check(&db_path, "Nope", "2021-09-01T20:00:00Z")
        .failure()
        .stderr(contains("not found"));
}

#[test]
fn test_analyze_overview() {
    let db_path = setup_test_db("cli_analyze");
    init_db_with_habits(&db_path);

    check(&db_path, "Reading", "2021-09-01T20:00:00Z").success();
    check(&db_path, "Reading", "2021-09-02T20:00:00Z").success();

    rhb()
        .args(["--db", &db_path, "--now", "2021-09-05T12:00:00Z", "analyze"])
        .assert()
        .success()
        .stdout(contains("Reading"))
        .stdout(contains("50.0%"))
        .stdout(contains("2021-09-01 - 2021-09-02"))
        .stdout(contains("Number of analyzed habits: 2"));

    rhb()
        .args([
            "--db",
            &db_path,
            "--now",
            "2021-09-05T12:00:00Z",
            "analyze",
            "--period",
            "weekly",
            "--sort",
            "streak",
        ])
        .assert()
        .success()
        .stdout(contains("Cleaning"))
        .stdout(contains("Reading").not())
        .stdout(contains("Number of analyzed habits: 1"));
}

#[test]
fn test_analyze_without_habits() {
    let db_path = setup_test_db("cli_analyze_empty");
    init_db(&db_path);

    rhb()
        .args(["--db", &db_path, "analyze"])
        .assert()
        .success()
        .stdout(contains("There are no habits to be analyzed!"));
}

#[test]
fn test_details() {
    let db_path = setup_test_db("cli_details");
    init_db_with_habits(&db_path);

    check(&db_path, "Reading", "2021-09-01T20:00:00Z").success();

    rhb()
        .args([
            "--db",
            &db_path,
            "--now",
            "2021-09-03T12:00:00Z",
            "details",
            "Reading",
        ])
        .assert()
        .success()
        .stdout(contains("Read 10 pages"))
        .stdout(contains("Percentage checked-off periods"))
        .stdout(contains("50.0%"))
        .stdout(contains("2021-09-01 - 2021-09-01"))
        .stdout(contains("2021-09-01 20:00:00"))
        .stdout(contains("2021-09-02"));

    rhb()
        .args(["--db", &db_path, "details", "Writing"])
        .assert()
        .failure()
        .stderr(contains("not found"));
}

#[test]
fn test_delete_with_confirmation() {
    let db_path = setup_test_db("cli_delete");
    init_db_with_habits(&db_path);

    rhb()
        .args(["--db", &db_path, "del", "Reading"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled."));

    rhb()
        .args(["--db", &db_path, "del", "Reading"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("successfully deleted"));

    rhb()
        .args(["--db", &db_path, "--now", "2021-09-03T12:00:00Z", "list"])
        .assert()
        .success()
        .stdout(contains("Cleaning"))
        .stdout(contains("Reading").not());

    rhb()
        .args(["--db", &db_path, "del", "Reading", "-y"])
        .assert()
        .failure()
        .stderr(contains("not found"));
}

#[test]
fn test_demo_habit_is_read_only() {
    let db_path = setup_test_db("cli_demo");
    init_db(&db_path);

    rhb()
        .args(["--db", &db_path, "demo", "--period", "weekly", "--seed", "7"])
        .assert()
        .success()
        .stdout(contains("demo habit"));

    let pool = DbPool::new(&db_path).expect("open db");
    let names = habit_names(&pool).expect("habit names");
    assert_eq!(names.len(), 1);

    check(&db_path, &names[0], "2021-09-01T12:00:00Z")
        .success()
        .stdout(contains("Can't check-off demo data"));

    rhb()
        .args(["--db", &db_path, "details", &names[0]])
        .assert()
        .success()
        .stdout(contains("! DEMO ! DATA !"));
}

#[test]
fn test_log_and_db_info() {
    let db_path = setup_test_db("cli_log_info");
    init_db_with_habits(&db_path);
    check(&db_path, "Reading", "2021-09-01T20:00:00Z").success();

    rhb()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("migration_applied"))
        .stdout(contains("add"))
        .stdout(contains("check"));

    rhb()
        .args(["--db", &db_path, "db", "--info", "--check"])
        .assert()
        .success()
        .stdout(contains("Habits:"))
        .stdout(contains("Integrity check passed."));
}

#[test]
fn test_backup_plain_and_compressed() {
    let db_path = setup_test_db("cli_backup");
    init_db_with_habits(&db_path);

    let plain = temp_out("cli_backup_plain", "sqlite");
    rhb()
        .args(["--db", &db_path, "backup", "--file", &plain])
        .assert()
        .success()
        .stdout(contains("Backup created"));
    assert!(std::path::Path::new(&plain).exists());

    let zipped = temp_out("cli_backup_zip", "sqlite");
    let zip_path = temp_out("cli_backup_zip", "zip");
    rhb()
        .args(["--db", &db_path, "backup", "--file", &zipped, "--compress"])
        .assert()
        .success();
    assert!(std::path::Path::new(&zip_path).exists());
    assert!(!std::path::Path::new(&zipped).exists());
}
