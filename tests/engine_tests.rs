use rhabits::core::calculator::checkoff::check_off;
use rhabits::core::calculator::period::{
    current_period_start, period_end, period_label, period_start_of, period_starts_between,
};
use rhabits::core::calculator::reconcile::{ReconcileOutcome, reconcile};
use rhabits::core::calculator::streak::{analyze_series, format_percentage, period_rows};
use rhabits::errors::AppError;
use rhabits::models::habit::Habit;
use rhabits::models::period_record::PeriodRecord;
use rhabits::models::periodicity::Periodicity;
use rhabits::models::series::PeriodSeries;

mod common;
use common::{day, series_from_pattern, ts};

// ---------------------------------------------------------------------------
// Period arithmetic
// ---------------------------------------------------------------------------

#[test]
fn test_period_start_of_weekly_anchor() {
    let anchor = day("2021-09-01");

    assert_eq!(
        period_start_of(anchor, Periodicity::Weekly, day("2021-09-07")),
        day("2021-09-01")
    );
    assert_eq!(
        period_start_of(anchor, Periodicity::Weekly, day("2021-09-08")),
        day("2021-09-08")
    );
    // dates before the anchor fall into negative periods
    assert_eq!(
        period_start_of(anchor, Periodicity::Weekly, day("2021-08-31")),
        day("2021-08-25")
    );
}

#[test]
fn test_period_label_and_end() {
    assert_eq!(period_label(day("2021-09-01"), Periodicity::Daily), "2021-09-01");
    assert_eq!(
        period_label(day("2021-09-01"), Periodicity::Weekly),
        "2021-09-01 - 2021-09-07"
    );
    assert_eq!(period_end(day("2021-09-01"), Periodicity::Daily), day("2021-09-01"));
}

#[test]
fn test_period_starts_between() {
    let starts =
        period_starts_between(day("2021-09-01"), day("2021-09-20"), Periodicity::Weekly)
            .expect("valid range");
    assert_eq!(
        starts,
        vec![day("2021-09-01"), day("2021-09-08"), day("2021-09-15")]
    );

    let single = period_starts_between(day("2021-09-01"), day("2021-09-01"), Periodicity::Daily)
        .expect("valid range");
    assert_eq!(single, vec![day("2021-09-01")]);
}

#[test]
fn test_period_starts_between_rejects_inverted_range() {
    let err = period_starts_between(day("2021-09-10"), day("2021-09-01"), Periodicity::Daily)
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidDateRange { .. }));
}

// ---------------------------------------------------------------------------
// Series container
// ---------------------------------------------------------------------------

#[test]
fn test_series_push_rejects_gap_and_duplicate() {
    let mut series = series_from_pattern(Periodicity::Daily, "2021-09-01", "YN");

    let gap = series.push(PeriodRecord::missed(day("2021-09-04"))).unwrap_err();
    match gap {
        AppError::ContiguityViolation { expected, got } => {
            assert_eq!(expected, day("2021-09-03"));
            assert_eq!(got, day("2021-09-04"));
        }
        other => panic!("unexpected error: {other}"),
    }

    let dup = series.push(PeriodRecord::missed(day("2021-09-02"))).unwrap_err();
    assert!(matches!(dup, AppError::ContiguityViolation { .. }));
    assert_eq!(series.len(), 2);
}

#[test]
fn test_series_extend_is_all_or_nothing() {
    let mut series = series_from_pattern(Periodicity::Weekly, "2021-09-01", "Y");

    let res = series.extend(vec![
        PeriodRecord::missed(day("2021-09-08")),
        PeriodRecord::missed(day("2021-09-16")),
    ]);

    assert!(res.is_err());
    assert_eq!(series.len(), 1);
    assert_eq!(series.last_start(), Some(day("2021-09-01")));
}

#[test]
fn test_series_from_records_rejects_unordered_rows() {
    let res = PeriodSeries::from_records(
        Periodicity::Daily,
        vec![
            PeriodRecord::missed(day("2021-09-02")),
            PeriodRecord::missed(day("2021-09-01")),
        ],
    );
    assert!(res.is_err());
}

// ---------------------------------------------------------------------------
// Streak analysis
// ---------------------------------------------------------------------------

#[test]
fn test_streak_daily_with_trailing_streak() {
    let series = series_from_pattern(Periodicity::Daily, "2021-09-01", "YYYYNNY");
    let report = analyze_series(&series);

    assert_eq!(report.period_count, 7);
    assert_eq!(report.success_count, 5);
    assert_eq!(report.success_percentage, "71.43%");
    assert_eq!(report.longest_streak, 4);
    assert_eq!(report.range_label(), "2021-09-01 - 2021-09-04");
}

#[test]
fn test_streak_daily_longest_in_the_middle() {
    let series = series_from_pattern(Periodicity::Daily, "2021-09-01", "YNNYYYNNNY");
    let report = analyze_series(&series);

    assert_eq!(report.period_count, 10);
    assert_eq!(report.success_count, 5);
    assert_eq!(report.success_percentage, "50.0%");
    assert_eq!(report.longest_streak, 3);
    assert_eq!(report.range_label(), "2021-09-04 - 2021-09-06");
}

#[test]
fn test_streak_tie_keeps_first_streak() {
    let series = series_from_pattern(Periodicity::Weekly, "2021-09-01", "YNY");
    let report = analyze_series(&series);

    assert_eq!(report.longest_streak, 1);
    assert_eq!(report.range_label(), "2021-09-01 - 2021-09-07");
}

#[test]
fn test_streak_empty_series() {
    let report = analyze_series(&PeriodSeries::new(Periodicity::Daily));

    assert_eq!(report.period_count, 0);
    assert_eq!(report.success_count, 0);
    assert_eq!(report.success_percentage, "0%");
    assert_eq!(report.longest_streak, 0);
    assert_eq!(report.range_label(), "-");
}

#[test]
fn test_streak_weekly_range_ends_on_last_day_of_period() {
    let series = series_from_pattern(Periodicity::Weekly, "2021-09-01", "YYYNY");
    let report = analyze_series(&series);

    assert_eq!(report.success_count, 4);
    assert_eq!(report.success_percentage, "80.0%");
    assert_eq!(report.longest_streak, 3);
    assert_eq!(report.range_label(), "2021-09-01 - 2021-09-21");
}

#[test]
fn test_streak_all_missed() {
    let series = series_from_pattern(Periodicity::Daily, "2021-09-01", "NNN");
    let report = analyze_series(&series);

    assert_eq!(report.success_percentage, "0.0%");
    assert_eq!(report.longest_streak, 0);
    assert!(report.longest_streak_range.is_none());
}

#[test]
fn test_format_percentage() {
    assert_eq!(format_percentage(2, 3), "66.67%");
    assert_eq!(format_percentage(1, 1), "100.0%");
    assert_eq!(format_percentage(0, 0), "0%");
    // halfway cases round to even
    assert_eq!(format_percentage(1, 32), "3.12%");
    assert_eq!(format_percentage(5, 32), "15.62%");
    assert_eq!(format_percentage(3, 32), "9.38%");
}

#[test]
fn test_period_rows_are_chronological() {
    let series = series_from_pattern(Periodicity::Weekly, "2021-09-01", "NY");
    let rows = period_rows(&series);

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].label, "2021-09-01 - 2021-09-07");
    assert!(!rows[0].completed);
    assert!(rows[0].completed_at.is_none());
    assert_eq!(rows[1].label, "2021-09-08 - 2021-09-14");
    assert!(rows[1].completed);
}

// ---------------------------------------------------------------------------
// Reconciliation
// ---------------------------------------------------------------------------

#[test]
fn test_reconcile_fresh_habit_is_up_to_date() {
    let habit = Habit::new("Reading", "", Periodicity::Daily, ts("2021-09-01T08:00:00Z"));
    let mut series = PeriodSeries::new(Periodicity::Daily);

    let outcome = reconcile(&habit, &mut series, ts("2021-09-01T20:00:00Z")).expect("reconcile");

    assert_eq!(outcome, ReconcileOutcome::UpToDate);
    assert!(series.is_empty());
}

#[test]
fn test_reconcile_backfills_from_anchor() {
    let habit = Habit::new("Reading", "", Periodicity::Daily, ts("2021-09-01T08:00:00Z"));
    let mut series = PeriodSeries::new(Periodicity::Daily);

    let outcome = reconcile(&habit, &mut series, ts("2021-09-05T12:00:00Z")).expect("reconcile");

    assert_eq!(
        outcome,
        ReconcileOutcome::Backfilled {
            count: 4,
            first: day("2021-09-01"),
            last: day("2021-09-04"),
        }
    );
    assert_eq!(series.len(), 4);
    assert!(series.records().iter().all(|r| !r.completed && r.completed_at.is_none()));
}

#[test]
fn test_reconcile_is_idempotent() {
    let habit = Habit::new("Cleaning", "", Periodicity::Weekly, ts("2021-09-01T08:00:00Z"));
    let mut series = PeriodSeries::new(Periodicity::Weekly);
    let now = ts("2021-09-20T12:00:00Z");

    let first = reconcile(&habit, &mut series, now).expect("reconcile");
    assert_eq!(first.backfilled(), 2);
    assert_eq!(series.last_start(), Some(day("2021-09-08")));

    let second = reconcile(&habit, &mut series, now).expect("reconcile");
    assert_eq!(second, ReconcileOutcome::UpToDate);
    assert_eq!(series.len(), 2);
}

#[test]
fn test_reconcile_keeps_open_period_open() {
    let habit = Habit::new("Reading", "", Periodicity::Daily, ts("2021-09-01T08:00:00Z"));
    let mut series = series_from_pattern(Periodicity::Daily, "2021-09-01", "Y");

    let outcome = reconcile(&habit, &mut series, ts("2021-09-03T23:59:00Z")).expect("reconcile");

    // 09-02 closed without check-off, 09-03 is still running
    assert_eq!(outcome.backfilled(), 1);
    assert_eq!(series.last_start(), Some(day("2021-09-02")));
}

#[test]
fn test_reconcile_skips_demo_habits() {
    let habit = Habit::demo("Feed Godzilla", Periodicity::Daily, ts("2021-01-10T08:00:00Z"));
    let mut series = series_from_pattern(Periodicity::Daily, "2021-01-10", "YN");

    let outcome = reconcile(&habit, &mut series, ts("2021-09-01T12:00:00Z")).expect("reconcile");

    assert_eq!(outcome, ReconcileOutcome::DemoSkipped);
    assert_eq!(series.len(), 2);
}

// ---------------------------------------------------------------------------
// Check-off
// ---------------------------------------------------------------------------

#[test]
fn test_check_off_twice_is_refused() {
    let habit = Habit::new("Reading", "", Periodicity::Daily, ts("2021-09-01T08:00:00Z"));
    let mut series = PeriodSeries::new(Periodicity::Daily);
    let now = ts("2021-09-01T20:00:00Z");

    reconcile(&habit, &mut series, now).expect("reconcile");
    let start = check_off(&habit, &mut series, now).expect("first check-off");
    assert_eq!(start, day("2021-09-01"));
    assert_eq!(series.last().and_then(|r| r.completed_at), Some(now));

    let err = check_off(&habit, &mut series, ts("2021-09-01T21:00:00Z")).unwrap_err();
    assert!(matches!(err, AppError::AlreadyCompleted(_)));
    assert!(err.is_check_off_refusal());
    assert_eq!(series.len(), 1);
}

#[test]
fn test_check_off_demo_is_refused() {
    let habit = Habit::demo("Crack code", Periodicity::Weekly, ts("2021-01-10T08:00:00Z"));
    let mut series = PeriodSeries::new(Periodicity::Weekly);

    let err = check_off(&habit, &mut series, ts("2021-01-10T09:00:00Z")).unwrap_err();
    assert!(matches!(err, AppError::DemoImmutable(_)));
    assert!(series.is_empty());
}

#[test]
fn test_check_off_without_reconcile_stays_contiguous() {
    let habit = Habit::new("Reading", "", Periodicity::Daily, ts("2021-09-01T08:00:00Z"));
    let mut series = PeriodSeries::new(Periodicity::Daily);

    check_off(&habit, &mut series, ts("2021-09-01T20:00:00Z")).expect("first check-off");

    // four days later, no reconciliation in between
    let now = ts("2021-09-05T10:00:00Z");
    let start = check_off(&habit, &mut series, now).expect("second check-off");

    assert_eq!(start, day("2021-09-02"));
    assert_eq!(series.len(), 2);
    assert_eq!(series.last().and_then(|r| r.completed_at), Some(now));
    assert!(
        PeriodSeries::from_records(Periodicity::Daily, series.records().to_vec()).is_ok()
    );
}

#[test]
fn test_check_off_weekly_window() {
    let habit = Habit::new("Cleaning", "", Periodicity::Weekly, ts("2021-09-01T08:00:00Z"));
    let mut series = PeriodSeries::new(Periodicity::Weekly);

    check_off(&habit, &mut series, ts("2021-09-01T10:00:00Z")).expect("check-off");

    // same week, later day
    let err = check_off(&habit, &mut series, ts("2021-09-07T23:00:00Z")).unwrap_err();
    assert!(matches!(err, AppError::AlreadyCompleted(_)));

    // next week
    let now = ts("2021-09-08T10:00:00Z");
    assert_eq!(
        reconcile(&habit, &mut series, now).expect("reconcile"),
        ReconcileOutcome::UpToDate
    );
    let start = check_off(&habit, &mut series, now).expect("check-off");
    assert_eq!(start, day("2021-09-08"));
    assert_eq!(
        current_period_start(habit.anchor(), habit.periodicity, now),
        start
    );
}
