#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime};
use std::env;
use std::fs;
use std::path::PathBuf;
use timebank::models::{BalanceConfig, Record, RecordType};

/// Test environment: a private config dir plus a database path inside it.
pub struct TestEnv {
    pub home: String,
    pub db: String,
}

/// Create a unique config dir inside the system temp dir, wiping leftovers.
pub fn setup_test_env(name: &str) -> TestEnv {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_timebank_home", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create test home");

    let db = path.join("timebank.sqlite").to_string_lossy().to_string();
    TestEnv {
        home: path.to_string_lossy().to_string(),
        db,
    }
}

/// CLI command bound to the test env and a frozen "now".
pub fn tb(env: &TestEnv) -> Command {
    let mut cmd = cargo_bin_cmd!("timebank");
    cmd.env("TIMEBANK_HOME", &env.home)
        .env_remove("TIMEBANK_LOG")
        .args(["--db", &env.db, "--now", "20/03/2025 18:00"]);
    cmd
}

/// `init` with an 8h day and the default tolerance.
pub fn init_env(env: &TestEnv) {
    tb(env)
        .args(["init", "--work-hours", "480"])
        .assert()
        .success();
}

pub fn cfg() -> BalanceConfig {
    BalanceConfig::new(480, Some(10))
}

pub fn at(date: &str, hhmm: &str) -> NaiveDateTime {
    let d = NaiveDate::parse_from_str(date, "%d/%m/%Y").expect("valid date");
    let t = chrono::NaiveTime::parse_from_str(hhmm, "%H:%M").expect("valid time");
    d.and_time(t)
}

/// Work punch with a fixed id (ids give deterministic tie-breaking checks).
pub fn punch(id: i64, date: &str, minutes: i64) -> Record {
    Record::work(date, minutes).with_id(id)
}

pub fn absence(id: i64, kind: RecordType, date: &str, minutes: i64, full_day: bool) -> Record {
    Record::new(kind, date, minutes, full_day).with_id(id)
}
