mod common;
use common::{at, cfg, setup_test_env};
use timebank::core::logic::Core;
use timebank::core::supplier::{DateRange, RecordSupplier};
use timebank::db::initialize::init_db;
use timebank::db::migrate::pending_migrations;
use timebank::db::pool::DbPool;
use timebank::db::queries::{
    delete_records_by_date, insert_record, load_record, load_records_by_date, update_record_time,
};
use timebank::models::{BalanceConfig, Record, RecordType};

fn open(name: &str) -> DbPool {
    let env = setup_test_env(name);
    let pool = DbPool::new(&env.db).expect("open db");
    init_db(&pool.conn).expect("init db");
    pool
}

fn store(pool: &DbPool, rec: Record) -> i64 {
    insert_record(&pool.conn, &rec).expect("insert")
}

#[test]
fn test_init_applies_every_migration() {
    let pool = open("db_migrations");
    assert!(pending_migrations(&pool.conn).unwrap().is_empty());
    assert_eq!(init_db(&pool.conn).unwrap(), 0);
}

#[test]
fn test_records_round_trip_through_sqlite() {
    let pool = open("db_round_trip");
    let mut punch = Record::work("10/03/2025", 480).with_description(Some("office".into()));
    punch.nsr = Some("000123".into());
    let id = store(&pool, punch);
    let leave_id = store(
        &pool,
        Record::new(RecordType::Other("training".into()), "10/03/2025", 90, false),
    );

    let back = load_record(&pool.conn, id).unwrap().expect("stored punch");
    assert_eq!(back.kind, RecordType::Work);
    assert_eq!(back.time_in_minutes, 480);
    assert_eq!(back.description.as_deref(), Some("office"));
    assert_eq!(back.nsr.as_deref(), Some("000123"));
    assert!(!back.is_full_day);

    let other = load_record(&pool.conn, leave_id).unwrap().expect("stored absence");
    assert_eq!(other.kind, RecordType::Other("training".into()));
}

#[test]
fn test_supplier_returns_only_requested_months() {
    let pool = open("db_supplier_range");
    store(&pool, Record::work("28/02/2025", 480));
    store(&pool, Record::work("03/03/2025", 480));
    store(&pool, Record::work("31/03/2025", 480));
    store(&pool, Record::work("01/04/2025", 480));

    let range = DateRange::month(2025, 3).unwrap();
    let dates: Vec<String> = pool
        .fetch_records(&range)
        .unwrap()
        .into_iter()
        .map(|r| r.date)
        .collect();
    assert_eq!(dates, vec!["03/03/2025", "31/03/2025"]);
}

#[test]
fn test_month_summary_reads_through_pool() {
    let pool = open("db_month_summary");
    store(&pool, Record::work("03/03/2025", 480));
    store(&pool, Record::work("03/03/2025", 1020));
    store(&pool, Record::new(RecordType::DayOff, "04/03/2025", 0, true));
    store(&pool, Record::work("12/02/2025", 480));
    store(&pool, Record::work("12/02/2025", 600));

    let now = at("20/03/2025", "12:00");
    let agg = Core::month_summary(&pool, &cfg(), 2025, 3, now).unwrap();
    assert_eq!(agg.month_total, 60);
    assert_eq!(agg.previous_month_total, -360);
    assert_eq!(agg.running_total, -300);
    assert_eq!(agg.worked_dates.len(), 2);

    // not configured yet
    let none: Option<BalanceConfig> = None;
    let empty = Core::month_summary(&pool, &none, 2025, 3, now).unwrap();
    assert_eq!(empty.month_total, 0);
    assert!(empty.worked_dates.is_empty());
}

#[test]
fn test_day_summary_sorts_and_balances() {
    let pool = open("db_day_summary");
    store(&pool, Record::work("10/03/2025", 1020));
    store(&pool, Record::new(RecordType::MedicalLeave, "10/03/2025", 60, false));
    store(&pool, Record::work("10/03/2025", 480));

    let now = at("20/03/2025", "12:00");
    let d = chrono::NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
    let summary = Core::day_summary(&pool, &cfg(), d, now).unwrap();

    let minutes: Vec<i64> = summary.records.iter().map(|r| r.time_in_minutes).collect();
    assert_eq!(minutes, vec![480, 1020, 60]);
    assert_eq!(summary.worked.worked_seconds, 9 * 3600);
    let balance = summary.balance.expect("configured");
    assert_eq!(balance.balance.to_string(), "02:00:00");
}

#[test]
fn test_update_and_delete_by_date() {
    let pool = open("db_update_delete");
    let id = store(&pool, Record::work("10/03/2025", 480));
    store(&pool, Record::work("10/03/2025", 1020));
    store(&pool, Record::work("11/03/2025", 480));

    update_record_time(&pool.conn, id, 510).unwrap();
    assert_eq!(load_record(&pool.conn, id).unwrap().unwrap().time_in_minutes, 510);

    assert_eq!(delete_records_by_date(&pool.conn, "10/03/2025").unwrap(), 2);
    assert!(load_records_by_date(&pool.conn, "10/03/2025").unwrap().is_empty());
    assert_eq!(load_records_by_date(&pool.conn, "11/03/2025").unwrap().len(), 1);
}

#[test]
fn test_legacy_unpadded_dates_are_supplied() {
    let pool = open("db_legacy_dates");
    store(&pool, Record::work("5/3/2025", 480));
    store(&pool, Record::work("5/3/2025", 1020));
    store(&pool, Record::work("5/12/2025", 480));

    let range = DateRange::month(2025, 3).unwrap();
    let march: Vec<String> = pool
        .fetch_records(&range)
        .unwrap()
        .into_iter()
        .filter(|r| range.contains_raw(&r.date))
        .map(|r| r.date)
        .collect();
    assert_eq!(march, vec!["5/3/2025", "5/3/2025"]);

    let now = at("20/03/2025", "12:00");
    let agg = Core::month_summary(&pool, &cfg(), 2025, 3, now).unwrap();
    assert_eq!(agg.month_total, 60);
    assert!(agg.worked_dates.contains("5/3/2025"));
    assert_eq!(agg.worked_dates.len(), 1);
}
