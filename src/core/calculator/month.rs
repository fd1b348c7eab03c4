//! Month-level aggregation of daily balances.

use super::balance::daily_balance;
use crate::core::supplier::{DateRange, RecordSupplier};
use crate::errors::AppResult;
use crate::models::{BalanceConfig, DailyBalance, MonthlyAggregate, Record, TimeBank};
use crate::utils::date::{next_month, previous_month};
use chrono::NaiveDateTime;
use std::collections::BTreeMap;

/// Records of one month bucketed by their raw date string.
///
/// Grouping uses the stored text, not a re-formatted date, so legacy
/// spellings stay together exactly as they were written.
pub fn month_groups<S>(
    supplier: &S,
    year: i32,
    month: u32,
) -> AppResult<BTreeMap<String, Vec<Record>>>
where
    S: RecordSupplier + ?Sized,
{
    let Some(range) = DateRange::month(year, month) else {
        tracing::debug!(year, month, "invalid month, nothing to aggregate");
        return Ok(BTreeMap::new());
    };

    let mut groups: BTreeMap<String, Vec<Record>> = BTreeMap::new();
    for rec in supplier.fetch_records(&range)? {
        if !range.contains_raw(&rec.date) {
            tracing::debug!(id = rec.id, date = %rec.date, "record outside month or malformed date, skipped");
            continue;
        }
        groups.entry(rec.date.clone()).or_default().push(rec);
    }

    Ok(groups)
}

fn total_minutes(
    groups: &BTreeMap<String, Vec<Record>>,
    cfg: &BalanceConfig,
    now: NaiveDateTime,
) -> (BTreeMap<String, i64>, i64) {
    let daily: BTreeMap<String, i64> = groups
        .iter()
        .map(|(date, records)| {
            let day = daily_balance(date, records, cfg, now);
            (date.clone(), day.balance.minutes())
        })
        .collect();
    let total = daily.values().copied().fold(0, i64::saturating_add);
    (daily, total)
}

/// Aggregate of one month once the previous month's total is known.
fn aggregate_with_previous<S>(
    supplier: &S,
    cfg: &BalanceConfig,
    (year, month): (i32, u32),
    previous_month_total: i64,
    now: NaiveDateTime,
) -> AppResult<MonthlyAggregate>
where
    S: RecordSupplier + ?Sized,
{
    let groups = month_groups(supplier, year, month)?;
    let (daily_balances, month_total) = total_minutes(&groups, cfg, now);

    Ok(MonthlyAggregate {
        year,
        month,
        worked_dates: groups.into_keys().collect(),
        daily_balances,
        month_total,
        previous_month_total,
        running_total: previous_month_total.saturating_add(month_total),
    })
}

fn month_total<S>(
    supplier: &S,
    cfg: &BalanceConfig,
    (year, month): (i32, u32),
    now: NaiveDateTime,
) -> AppResult<i64>
where
    S: RecordSupplier + ?Sized,
{
    let groups = month_groups(supplier, year, month)?;
    Ok(total_minutes(&groups, cfg, now).1)
}

/// Calendar view of a month: per-day balances in minutes, month total,
/// previous month total and the running total of both.
///
/// Without configuration every value is zero; the calendar must still render.
pub fn month_aggregate<S>(
    supplier: &S,
    cfg: Option<&BalanceConfig>,
    year: i32,
    month: u32,
    now: NaiveDateTime,
) -> AppResult<MonthlyAggregate>
where
    S: RecordSupplier + ?Sized,
{
    let Some(cfg) = cfg else {
        tracing::debug!(year, month, "no configuration yet, returning empty aggregate");
        return Ok(MonthlyAggregate::empty(year, month));
    };

    let previous = month_total(supplier, cfg, previous_month(year, month), now)?;
    aggregate_with_previous(supplier, cfg, (year, month), previous, now)
}

/// List view of a month: one seconds-precision balance per date with
/// records, ordered by date. Malformed dates sort last.
pub fn month_daily_balances<S>(
    supplier: &S,
    cfg: &BalanceConfig,
    year: i32,
    month: u32,
    now: NaiveDateTime,
) -> AppResult<Vec<DailyBalance>>
where
    S: RecordSupplier + ?Sized,
{
    let groups = month_groups(supplier, year, month)?;

    let mut days: Vec<(Option<chrono::NaiveDate>, DailyBalance)> = groups
        .iter()
        .map(|(date, records)| {
            let parsed = records.first().and_then(Record::parsed_date);
            (parsed, daily_balance(date, records, cfg, now))
        })
        .collect();
    days.sort_by_key(|(parsed, _)| (parsed.is_none(), *parsed));

    Ok(days.into_iter().map(|(_, day)| day).collect())
}

/// Cumulative time bank over `from..=to` (both `(year, month)`).
///
/// Each month is loaded once; its total becomes the next month's
/// `previous_month_total`.
pub fn time_bank<S>(
    supplier: &S,
    cfg: Option<&BalanceConfig>,
    from: (i32, u32),
    to: (i32, u32),
    now: NaiveDateTime,
) -> AppResult<TimeBank>
where
    S: RecordSupplier + ?Sized,
{
    let mut bank = TimeBank::default();
    let mut cursor = from;

    let Some(cfg) = cfg else {
        while cursor <= to {
            bank.months.push(MonthlyAggregate::empty(cursor.0, cursor.1));
            cursor = next_month(cursor.0, cursor.1);
        }
        return Ok(bank);
    };

    let mut previous = month_total(supplier, cfg, previous_month(from.0, from.1), now)?;

    while cursor <= to {
        let agg = aggregate_with_previous(supplier, cfg, cursor, previous, now)?;
        previous = agg.month_total;
        bank.total = bank.total.saturating_add(agg.month_total);
        bank.months.push(agg);
        cursor = next_month(cursor.0, cursor.1);
    }

    Ok(bank)
}
