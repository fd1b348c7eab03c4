mod common;
use common::{absence, at, cfg, punch};
use timebank::core::calculator::{month_aggregate, month_daily_balances, time_bank};
use timebank::models::{Record, RecordType};

fn march() -> Vec<Record> {
    vec![
        // +60 min
        punch(1, "03/03/2025", 480),
        punch(2, "03/03/2025", 1020),
        // absence-only day, balance 0
        absence(3, RecordType::DayOff, "04/03/2025", 0, true),
    ]
}

#[test]
fn test_month_total_with_absence_only_day() {
    let now = at("20/03/2025", "12:00");
    let recs = march();

    let agg = month_aggregate(&recs, Some(&cfg()), 2025, 3, now).unwrap();
    assert_eq!(agg.month_total, 60);
    assert_eq!(agg.worked_dates.len(), 2);
    assert_eq!(agg.daily_balances.get("03/03/2025"), Some(&60));
    assert_eq!(agg.daily_balances.get("04/03/2025"), Some(&0));
    assert!(agg.has_entries("04/03/2025"));
    assert!(!agg.has_entries("05/03/2025"));
}

#[test]
fn test_previous_month_and_running_total() {
    let now = at("20/03/2025", "12:00");
    let mut recs = march();
    // February: 08:00 → 10:00, -360 min
    recs.push(punch(10, "12/02/2025", 480));
    recs.push(punch(11, "12/02/2025", 600));
    // January must not leak into March's previous total
    recs.push(punch(20, "15/01/2025", 480));
    recs.push(punch(21, "15/01/2025", 1200));

    let agg = month_aggregate(&recs, Some(&cfg()), 2025, 3, now).unwrap();
    assert_eq!(agg.month_total, 60);
    assert_eq!(agg.previous_month_total, -360);
    assert_eq!(agg.running_total, -300);
}

#[test]
fn test_january_looks_back_to_december() {
    let now = at("20/01/2025", "12:00");
    let recs = vec![punch(1, "31/12/2024", 480), punch(2, "31/12/2024", 1020)];

    let agg = month_aggregate(&recs, Some(&cfg()), 2025, 1, now).unwrap();
    assert_eq!(agg.month_total, 0);
    assert_eq!(agg.previous_month_total, 60);
    assert_eq!(agg.running_total, 60);
    assert!(agg.worked_dates.is_empty());
}

#[test]
fn test_missing_config_yields_empty_aggregate() {
    let now = at("20/03/2025", "12:00");
    let recs = march();

    let agg = month_aggregate(&recs, None, 2025, 3, now).unwrap();
    assert_eq!(agg.month_total, 0);
    assert_eq!(agg.previous_month_total, 0);
    assert_eq!(agg.running_total, 0);
    assert!(agg.daily_balances.is_empty());
    assert!(agg.worked_dates.is_empty());
}

#[test]
fn test_malformed_dates_are_skipped() {
    let now = at("20/03/2025", "12:00");
    let mut recs = march();
    recs.push(punch(30, "2025-03-05", 480));
    recs.push(punch(31, "not a date", 1020));

    let agg = month_aggregate(&recs, Some(&cfg()), 2025, 3, now).unwrap();
    assert_eq!(agg.worked_dates.len(), 2);
    assert_eq!(agg.month_total, 60);
}

#[test]
fn test_open_day_counts_in_minutes_view() {
    let now = at("05/03/2025", "17:30");
    let recs = vec![punch(1, "05/03/2025", 480)];

    let agg = month_aggregate(&recs, Some(&cfg()), 2025, 3, now).unwrap();
    // 9h30 worked against an 8h target
    assert_eq!(agg.month_total, 90);
}

#[test]
fn test_daily_balances_are_ordered_by_date() {
    let now = at("20/03/2025", "12:00");
    let recs = vec![
        punch(1, "17/03/2025", 480),
        punch(2, "17/03/2025", 600),
        punch(3, "03/03/2025", 480),
        punch(4, "03/03/2025", 1020),
    ];

    let days = month_daily_balances(&recs, &cfg(), 2025, 3, now).unwrap();
    let dates: Vec<&str> = days.iter().map(|d| d.date.as_str()).collect();
    assert_eq!(dates, vec!["03/03/2025", "17/03/2025"]);
    assert_eq!(days[0].balance_seconds, 3600);
    assert_eq!(days[1].balance.to_string(), "-06:00:00");
}

#[test]
fn test_time_bank_accumulates_months() {
    let now = at("20/03/2025", "12:00");
    let mut recs = march();
    recs.push(punch(10, "12/02/2025", 480));
    recs.push(punch(11, "12/02/2025", 600));

    let bank = time_bank(&recs, Some(&cfg()), (2025, 1), (2025, 3), now).unwrap();
    assert_eq!(bank.months.len(), 3);
    assert_eq!(bank.months[0].month_total, 0);
    assert_eq!(bank.months[1].month_total, -360);
    assert_eq!(bank.months[2].month_total, 60);
    assert_eq!(bank.total, -300);
}

#[test]
fn test_time_bank_crosses_year_boundary() {
    let now = at("20/01/2025", "12:00");
    let recs = vec![punch(1, "31/12/2024", 480), punch(2, "31/12/2024", 1020)];

    let bank = time_bank(&recs, Some(&cfg()), (2024, 11), (2025, 1), now).unwrap();
    let months: Vec<(i32, u32)> = bank.months.iter().map(|m| (m.year, m.month)).collect();
    assert_eq!(months, vec![(2024, 11), (2024, 12), (2025, 1)]);
    assert_eq!(bank.total, 60);
}

#[test]
fn test_huge_adjustment_does_not_abort_month() {
    let now = at("20/03/2025", "12:00");
    let recs = vec![
        absence(1, RecordType::BalanceAdjustment, "05/03/2025", i64::MAX / 2, false),
        absence(2, RecordType::BalanceAdjustment, "06/03/2025", i64::MAX / 2, false),
    ];

    let agg = month_aggregate(&recs, Some(&cfg()), 2025, 3, now).unwrap();
    assert_eq!(agg.daily_balances.get("05/03/2025"), Some(&((i64::MAX - 28_800) / 60)));
    assert_eq!(agg.month_total, (i64::MAX - 28_800) / 60 * 2);

    // April sees March as its previous month
    let april = month_aggregate(&recs, Some(&cfg()), 2025, 4, now).unwrap();
    assert_eq!(april.previous_month_total, agg.month_total);
}

#[test]
fn test_time_bank_chains_previous_month_totals() {
    let now = at("20/03/2025", "12:00");
    let mut recs = march();
    recs.push(punch(10, "12/02/2025", 480));
    recs.push(punch(11, "12/02/2025", 600));
    recs.push(punch(20, "20/12/2024", 480));
    recs.push(punch(21, "20/12/2024", 1020));

    let bank = time_bank(&recs, Some(&cfg()), (2025, 1), (2025, 3), now).unwrap();
    let previous: Vec<i64> = bank.months.iter().map(|m| m.previous_month_total).collect();
    let running: Vec<i64> = bank.months.iter().map(|m| m.running_total).collect();
    assert_eq!(previous, vec![60, 0, -360]);
    assert_eq!(running, vec![60, -360, -300]);

    // same values as the single-month view
    for m in &bank.months {
        let single = month_aggregate(&recs, Some(&cfg()), m.year, m.month, now).unwrap();
        assert_eq!(&single, m);
    }
}

#[test]
fn test_time_bank_without_config_is_empty() {
    let now = at("20/03/2025", "12:00");
    let bank = time_bank(&march(), None, (2025, 1), (2025, 3), now).unwrap();

    assert_eq!(bank.months.len(), 3);
    assert_eq!(bank.total, 0);
    assert!(bank.months.iter().all(|m| m.worked_dates.is_empty()));
}
