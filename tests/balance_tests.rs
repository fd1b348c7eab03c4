mod common;
use common::{absence, at, cfg, punch};
use timebank::core::calculator::balance::{absence_seconds, apply_tolerance};
use timebank::core::calculator::{
    IntervalExit, calculate_hour_balance, calculate_total_hours_worked, daily_balance,
    pair_intervals,
};
use timebank::models::{BalanceConfig, DayBalance, RecordType};

const DAY: &str = "10/03/2025";

#[test]
fn test_full_day_eight_to_five() {
    let now = at("20/03/2025", "12:00");
    let recs = vec![punch(1, DAY, 480), punch(2, DAY, 1020)];

    assert_eq!(calculate_total_hours_worked(&recs, now), "09:00:00");
    assert_eq!(calculate_hour_balance(&recs, &cfg(), now), "01:00:00");
}

#[test]
fn test_short_day_is_negative() {
    let now = at("20/03/2025", "12:00");
    let recs = vec![punch(1, DAY, 480), punch(2, DAY, 600)];

    assert_eq!(calculate_hour_balance(&recs, &cfg(), now), "-06:00:00");
}

#[test]
fn test_within_tolerance_renders_two_fields() {
    let now = at("20/03/2025", "12:00");
    let recs = vec![punch(1, DAY, 480), punch(2, DAY, 965)];

    let day = daily_balance(DAY, &recs, &cfg(), now);
    assert_eq!(day.balance, DayBalance::WithinTolerance);
    assert_eq!(day.balance.to_string(), "00:00");
    assert_eq!(day.balance_seconds, 0);
    assert_eq!(day.worked_seconds, 8 * 3600 + 300);
}

#[test]
fn test_full_day_absence_covers_target() {
    let now = at("20/03/2025", "12:00");
    let recs = vec![absence(1, RecordType::DayOff, DAY, 0, true)];

    assert_eq!(calculate_hour_balance(&recs, &cfg(), now), "00:00");
    assert_eq!(calculate_total_hours_worked(&recs, now), "00:00:00");
}

#[test]
fn test_tolerance_boundary_is_inclusive() {
    let c = cfg();
    assert_eq!(apply_tolerance(600, &c), DayBalance::WithinTolerance);
    assert_eq!(apply_tolerance(-600, &c), DayBalance::WithinTolerance);
    assert_eq!(apply_tolerance(601, &c), DayBalance::Offset(601));
    assert_eq!(apply_tolerance(-601, &c), DayBalance::Offset(-601));
    assert_eq!(apply_tolerance(-601, &c).to_string(), "-00:10:01");
}

#[test]
fn test_zero_tolerance_reports_exact_offset() {
    let now = at("20/03/2025", "12:00");
    let c = BalanceConfig::new(480, Some(0));
    let recs = vec![punch(1, DAY, 480), punch(2, DAY, 961)];

    assert_eq!(calculate_hour_balance(&recs, &c, now), "00:01:00");
}

#[test]
fn test_pairing_ignores_input_order() {
    let now = at("20/03/2025", "12:00");
    let ordered = vec![
        punch(1, DAY, 480),
        punch(2, DAY, 720),
        punch(3, DAY, 780),
        punch(4, DAY, 1020),
    ];
    let shuffled = vec![
        ordered[3].clone(),
        ordered[1].clone(),
        ordered[0].clone(),
        ordered[2].clone(),
    ];

    let a = pair_intervals(&ordered, now);
    let b = pair_intervals(&shuffled, now);
    assert_eq!(a.worked_seconds, 8 * 3600);
    assert_eq!(a.worked_seconds, b.worked_seconds);
    assert_eq!(a.intervals.len(), 2);
    assert_eq!(b.intervals[0].entry.id, 1);
    assert_eq!(b.intervals[1].entry.id, 3);
}

#[test]
fn test_same_minute_punches_keep_insertion_order() {
    let now = at("20/03/2025", "12:00");
    let recs = vec![
        punch(1, DAY, 480),
        punch(2, DAY, 720),
        punch(3, DAY, 720),
        punch(4, DAY, 1020),
    ];

    let worked = pair_intervals(&recs, now);
    assert_eq!(worked.intervals[0].entry.id, 1);
    match &worked.intervals[0].exit {
        IntervalExit::Punch(exit) => assert_eq!(exit.id, 2),
        other => panic!("unexpected exit: {other:?}"),
    }
    assert_eq!(worked.intervals[1].entry.id, 3);
    assert_eq!(worked.worked_seconds, 4 * 3600 + 5 * 3600);
}

#[test]
fn test_open_interval_today_runs_until_now() {
    let now = at(DAY, "10:30");
    let recs = vec![punch(1, DAY, 480)];

    let worked = pair_intervals(&recs, now);
    assert!(worked.is_open_interval);
    assert!(!worked.is_incomplete);
    assert_eq!(worked.intervals[0].exit, IntervalExit::Open);
    assert_eq!(worked.worked_seconds, 2 * 3600 + 30 * 60);
}

#[test]
fn test_unpaired_punch_on_past_day_counts_nothing() {
    let now = at("20/03/2025", "10:30");
    let recs = vec![punch(1, DAY, 480), punch(2, DAY, 720), punch(3, DAY, 780)];

    let worked = pair_intervals(&recs, now);
    assert!(worked.is_incomplete);
    assert!(!worked.is_open_interval);
    assert_eq!(worked.intervals[1].exit, IntervalExit::Unpaired);
    assert_eq!(worked.worked_seconds, 4 * 3600);
}

#[test]
fn test_duplicated_punch_yields_empty_interval() {
    let now = at("20/03/2025", "12:00");
    let recs = vec![punch(1, DAY, 600), punch(2, DAY, 600)];

    let worked = pair_intervals(&recs, now);
    assert_eq!(worked.worked_seconds, 0);

    let day = daily_balance(DAY, &recs, &cfg(), now);
    assert_eq!(day.balance.to_string(), "-08:00:00");
}

#[test]
fn test_absences_stack_and_skip_pairing() {
    let c = cfg();
    let recs = vec![
        absence(1, RecordType::MedicalLeave, DAY, 120, false),
        absence(2, RecordType::BalanceAdjustment, DAY, 60, false),
        punch(3, DAY, 480),
        punch(4, DAY, 780),
    ];

    assert_eq!(absence_seconds(&recs, &c), 3 * 3600);

    let now = at("20/03/2025", "12:00");
    let day = daily_balance(DAY, &recs, &c, now);
    assert_eq!(day.worked_seconds, 5 * 3600);
    assert_eq!(day.balance, DayBalance::WithinTolerance);
}

#[test]
fn test_unknown_record_type_counts_as_absence() {
    let c = cfg();
    let recs = vec![absence(1, RecordType::Other("training".into()), DAY, 240, false)];

    assert_eq!(absence_seconds(&recs, &c), 4 * 3600);
}

#[test]
fn test_minutes_view_truncates_toward_zero() {
    assert_eq!(DayBalance::Offset(3_659).minutes(), 60);
    assert_eq!(DayBalance::Offset(-3_659).minutes(), -60);
    assert_eq!(DayBalance::WithinTolerance.minutes(), 0);
}

#[test]
fn test_open_interval_before_entry_goes_negative() {
    let now = at(DAY, "09:00");
    let recs = vec![punch(1, DAY, 600)];

    let worked = pair_intervals(&recs, now);
    assert!(worked.is_open_interval);
    assert_eq!(worked.intervals[0].exit, IntervalExit::Open);
    assert_eq!(worked.intervals[0].duration_seconds, -3600);
    assert_eq!(worked.worked_seconds, -3600);
}

#[test]
fn test_huge_absence_saturates_instead_of_overflowing() {
    let now = at("20/03/2025", "12:00");
    let recs = vec![absence(1, RecordType::BalanceAdjustment, DAY, i64::MAX / 2, false)];

    assert_eq!(absence_seconds(&recs, &cfg()), i64::MAX);

    let day = daily_balance(DAY, &recs, &cfg(), now);
    assert_eq!(day.balance, DayBalance::Offset(i64::MAX - 8 * 3600));
    assert!(!day.balance.to_string().starts_with('-'));
}

#[test]
fn test_huge_negative_values_saturate() {
    let now = at("20/03/2025", "12:00");
    let recs = vec![absence(1, RecordType::BalanceAdjustment, DAY, i64::MIN / 2, false)];

    let day = daily_balance(DAY, &recs, &cfg(), now);
    assert_eq!(day.balance, DayBalance::Offset(i64::MIN));
    assert!(day.balance.to_string().starts_with('-'));
    assert_eq!(day.balance.minutes(), i64::MIN / 60);
}

#[test]
fn test_extreme_punch_minutes_saturate() {
    let now = at("20/03/2025", "12:00");
    let recs = vec![punch(1, DAY, i64::MAX), punch(2, DAY, i64::MIN)];

    let worked = pair_intervals(&recs, now);
    assert_eq!(worked.worked_seconds, i64::MAX);

    let huge = BalanceConfig::new(i64::MAX, Some(i64::MAX));
    assert_eq!(huge.target_seconds(), i64::MAX);
    assert_eq!(huge.tolerance_seconds(), i64::MAX);
    assert_eq!(daily_balance(DAY, &recs, &huge, now).balance, DayBalance::WithinTolerance);
}
