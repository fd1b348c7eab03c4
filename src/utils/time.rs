//! Time utilities: minute-of-day and signed duration codecs.
//!
//! `minutes_to_clock`, `clock_to_minutes` and `seconds_to_clock` are total:
//! they never fail, malformed text is the caller's problem. The `parse_*`
//! helpers are the validating variants used before anything is stored.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, Timelike};

/// `480 → "08:00"`, `-360 → "-06:00"`.
pub fn minutes_to_clock(minutes: i64) -> String {
    let sign = if minutes < 0 { "-" } else { "" };
    let m = minutes.unsigned_abs();
    format!("{}{:02}:{:02}", sign, m / 60, m % 60)
}

/// Inverse of [`minutes_to_clock`]. A trailing `:SS` field is ignored.
pub fn clock_to_minutes(clock: &str) -> i64 {
    let (negative, body) = match clock.trim().strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, clock.trim()),
    };

    let mut fields = body.split(':').map(|f| f.trim().parse::<i64>().unwrap_or(0));
    let hours = fields.next().unwrap_or(0);
    let minutes = fields.next().unwrap_or(0);

    let total = hours.saturating_mul(60).saturating_add(minutes);
    if negative { total.saturating_neg() } else { total }
}

/// `3600 → "01:00:00"`, `-21600 → "-06:00:00"`.
pub fn seconds_to_clock(seconds: i64) -> String {
    let sign = if seconds < 0 { "-" } else { "" };
    let s = seconds.unsigned_abs();
    format!(
        "{}{:02}:{:02}:{:02}",
        sign,
        s / 3600,
        (s % 3600) / 60,
        s % 60
    )
}

pub fn parse_clock(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

/// Validating `HH:MM → minutes since midnight`.
pub fn parse_clock_minutes(t: &str) -> AppResult<i64> {
    let time = parse_clock(t).ok_or_else(|| AppError::InvalidTime(t.to_string()))?;
    Ok(i64::from(time.num_seconds_from_midnight() / 60))
}

/// Seconds elapsed since local midnight.
pub fn seconds_of_day(t: NaiveTime) -> i64 {
    i64::from(t.num_seconds_from_midnight())
}
