//! Pairs a day's work punches into entry/exit intervals.

use crate::models::record::Record;
use crate::utils::time::{seconds_of_day, seconds_to_clock};
use chrono::NaiveDateTime;

/// How an interval ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntervalExit {
    /// Closed by an exit punch.
    Punch(Record),
    /// Still clocked in: the date is today, the span runs until "now".
    Open,
    /// Odd punch count on a day that is not today. Contributes nothing.
    Unpaired,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interval {
    pub entry: Record,
    pub exit: IntervalExit,
    /// Not clamped: an exit before its entry yields a negative value.
    pub duration_seconds: i64,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WorkedTime {
    pub intervals: Vec<Interval>,
    pub worked_seconds: i64,
    pub is_open_interval: bool,
    pub is_incomplete: bool,
}

/// Builds the intervals for one date's records.
///
/// Only `work` records take part. They are stable-sorted by minute so that
/// two punches on the same minute keep their insertion order and with it
/// the entry/exit parity.
pub fn pair_intervals(records: &[Record], now: NaiveDateTime) -> WorkedTime {
    let mut punches: Vec<&Record> = records.iter().filter(|r| r.is_work()).collect();
    if punches.is_empty() {
        return WorkedTime::default();
    }

    // -----------------------------
    // Sort (stable) by minute of day
    // -----------------------------
    punches.sort_by_key(|r| r.time_in_minutes);

    let mut intervals = Vec::with_capacity(punches.len().div_ceil(2));
    let mut total: i64 = 0;
    let mut is_open_interval = false;
    let mut is_incomplete = false;

    // -----------------------------
    // Complete (entry, exit) pairs
    // -----------------------------
    let pairs = punches.chunks_exact(2);
    let dangling = pairs.remainder().first().copied();

    for pair in pairs {
        let (entry, exit) = (pair[0], pair[1]);
        let duration = exit
            .time_in_minutes
            .saturating_sub(entry.time_in_minutes)
            .saturating_mul(60);
        total = total.saturating_add(duration);

        intervals.push(Interval {
            entry: entry.clone(),
            exit: IntervalExit::Punch(exit.clone()),
            duration_seconds: duration,
        });
    }

    // -----------------------------
    // Unmatched last entry
    // -----------------------------
    if let Some(entry) = dangling {
        let is_today = entry.parsed_date() == Some(now.date());

        let (exit, duration) = if is_today {
            is_open_interval = true;
            let since = seconds_of_day(now.time())
                .saturating_sub(entry.time_in_minutes.saturating_mul(60));
            (IntervalExit::Open, since)
        } else {
            is_incomplete = true;
            (IntervalExit::Unpaired, 0)
        };
        total = total.saturating_add(duration);

        intervals.push(Interval {
            entry: entry.clone(),
            exit,
            duration_seconds: duration,
        });
    }

    WorkedTime {
        intervals,
        worked_seconds: total,
        is_open_interval,
        is_incomplete,
    }
}

/// Worked time for one date as `HH:MM:SS`.
pub fn calculate_total_hours_worked(records: &[Record], now: NaiveDateTime) -> String {
    seconds_to_clock(pair_intervals(records, now).worked_seconds)
}
