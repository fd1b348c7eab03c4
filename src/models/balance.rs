//! Derived, never-persisted balance values.

use crate::utils::time::seconds_to_clock;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Outcome of the tolerance gate for one day.
///
/// A day inside the band renders as a bare `"00:00"`, anything else as a
/// signed `"HH:MM:SS"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "seconds", rename_all = "camelCase")]
pub enum DayBalance {
    WithinTolerance,
    Offset(i64),
}

impl DayBalance {
    pub fn seconds(&self) -> i64 {
        match self {
            DayBalance::WithinTolerance => 0,
            DayBalance::Offset(s) => *s,
        }
    }

    /// Truncated toward zero, so it matches the `HH:MM` part of the
    /// seconds rendering.
    pub fn minutes(&self) -> i64 {
        self.seconds() / 60
    }
}

impl fmt::Display for DayBalance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayBalance::WithinTolerance => f.write_str("00:00"),
            DayBalance::Offset(s) => f.write_str(&seconds_to_clock(*s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyBalance {
    pub date: String,
    pub worked_seconds: i64,
    pub balance_seconds: i64,
    pub balance: DayBalance,
    /// An entry punch is still waiting for its exit (date is today).
    pub is_open_interval: bool,
    /// Odd punch count on a past day; the dangling entry counted as zero.
    pub is_incomplete: bool,
}

/// Month-level view, all values in minutes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyAggregate {
    pub year: i32,
    pub month: u32,
    pub daily_balances: BTreeMap<String, i64>,
    pub month_total: i64,
    pub previous_month_total: i64,
    pub running_total: i64,
    pub worked_dates: BTreeSet<String>,
}

impl MonthlyAggregate {
    /// All-zero aggregate, returned while no configuration is available.
    pub fn empty(year: i32, month: u32) -> Self {
        Self {
            year,
            month,
            ..Default::default()
        }
    }

    pub fn has_entries(&self, date: &str) -> bool {
        self.worked_dates.contains(date)
    }
}

/// Cumulative balance over an inclusive range of months.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeBank {
    pub months: Vec<MonthlyAggregate>,
    pub total: i64,
}
