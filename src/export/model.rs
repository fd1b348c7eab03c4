// src/export/model.rs

use crate::models::{DailyBalance, Record};
use crate::utils::time::seconds_to_clock;
use serde::Serialize;

/// Flat row for the month balance export.
#[derive(Serialize, Clone, Debug)]
pub struct DailyBalanceExport {
    pub date: String,
    pub worked: String,
    pub worked_seconds: i64,
    pub balance: String,
    pub balance_minutes: i64,
    pub open_interval: bool,
    pub incomplete: bool,
}

impl From<&DailyBalance> for DailyBalanceExport {
    fn from(d: &DailyBalance) -> Self {
        Self {
            date: d.date.clone(),
            worked: seconds_to_clock(d.worked_seconds),
            worked_seconds: d.worked_seconds,
            balance: d.balance.to_string(),
            balance_minutes: d.balance.minutes(),
            open_interval: d.is_open_interval,
            incomplete: d.is_incomplete,
        }
    }
}

/// Flat row for the raw record export.
#[derive(Serialize, Clone, Debug)]
pub struct RecordExport {
    pub id: i64,
    pub date: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub time_in_minutes: i64,
    pub is_full_day: bool,
    pub description: String,
    pub location: String,
    pub nsr: String,
}

impl From<&Record> for RecordExport {
    fn from(r: &Record) -> Self {
        Self {
            id: r.id,
            date: r.date.clone(),
            kind: r.kind.to_db_str().to_string(),
            time_in_minutes: r.time_in_minutes,
            is_full_day: r.is_full_day,
            description: r.description.clone().unwrap_or_default(),
            location: r.location.clone().unwrap_or_default(),
            nsr: r.nsr.clone().unwrap_or_default(),
        }
    }
}
