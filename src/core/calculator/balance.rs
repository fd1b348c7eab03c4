//! Signed balance of a single day against the contractual target.

use super::intervals::{WorkedTime, pair_intervals};
use crate::models::{BalanceConfig, DailyBalance, DayBalance, Record};
use chrono::NaiveDateTime;

/// Seconds credited by absence/adjustment records.
///
/// Full-day entries count as the whole contractual day, the rest by their
/// own minutes. Several entries on the same day stack. Arithmetic saturates,
/// so absurd stored durations clamp instead of overflowing.
pub fn absence_seconds(records: &[Record], cfg: &BalanceConfig) -> i64 {
    records
        .iter()
        .filter(|r| !r.is_work())
        .map(|r| {
            if r.is_full_day {
                cfg.target_seconds()
            } else {
                r.time_in_minutes.saturating_mul(60)
            }
        })
        .fold(0, i64::saturating_add)
}

/// Applies the tolerance band to a raw difference (seconds).
pub fn apply_tolerance(raw_diff: i64, cfg: &BalanceConfig) -> DayBalance {
    let band = u64::try_from(cfg.tolerance_seconds()).unwrap_or(0);
    if raw_diff.unsigned_abs() <= band {
        DayBalance::WithinTolerance
    } else {
        DayBalance::Offset(raw_diff)
    }
}

/// Worked time and balance for the records of one date.
pub fn daily_balance(
    date: &str,
    records: &[Record],
    cfg: &BalanceConfig,
    now: NaiveDateTime,
) -> DailyBalance {
    let worked: WorkedTime = pair_intervals(records, now);
    let raw_diff = worked
        .worked_seconds
        .saturating_add(absence_seconds(records, cfg))
        .saturating_sub(cfg.target_seconds());
    let balance = apply_tolerance(raw_diff, cfg);

    DailyBalance {
        date: date.to_string(),
        worked_seconds: worked.worked_seconds,
        balance_seconds: balance.seconds(),
        balance,
        is_open_interval: worked.is_open_interval,
        is_incomplete: worked.is_incomplete,
    }
}

/// `"00:00"` inside the tolerance band, signed `"HH:MM:SS"` otherwise.
pub fn calculate_hour_balance(records: &[Record], cfg: &BalanceConfig, now: NaiveDateTime) -> String {
    let date = records.first().map(|r| r.date.as_str()).unwrap_or_default();
    daily_balance(date, records, cfg, now).balance.to_string()
}
