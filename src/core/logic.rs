use crate::core::calculator::{balance, intervals, month};
use crate::core::supplier::{ConfigProvider, DateRange, RecordSupplier};
use crate::errors::AppResult;
use crate::models::{DaySummary, MonthlyAggregate, Record, TimeBank};
use chrono::{NaiveDate, NaiveDateTime};

/// Entry points shared by the CLI commands and the exporters.
pub struct Core;

impl Core {
    pub fn build_day_summary<C>(
        date: &str,
        records: &[Record],
        cfg: &C,
        now: NaiveDateTime,
    ) -> DaySummary
    where
        C: ConfigProvider + ?Sized,
    {
        let worked = intervals::pair_intervals(records, now);
        let balance = cfg
            .balance_config()
            .map(|c| balance::daily_balance(date, records, &c, now));

        let mut sorted = records.to_vec();
        sorted.sort_by_key(|r| (!r.is_work(), if r.is_work() { r.time_in_minutes } else { 0 }));

        DaySummary {
            date: date.to_string(),
            records: sorted,
            worked,
            balance,
        }
    }

    /// Fetches one date through the supplier and summarises it.
    pub fn day_summary<S, C>(
        supplier: &S,
        cfg: &C,
        date: NaiveDate,
        now: NaiveDateTime,
    ) -> AppResult<DaySummary>
    where
        S: RecordSupplier + ?Sized,
        C: ConfigProvider + ?Sized,
    {
        let range = DateRange::day(date);
        let candidates = supplier.fetch_records(&range)?;

        // Same grouping rule as the month view: one raw date string per
        // day, preferring the canonical spelling.
        let canonical = crate::utils::date::format_date(date);
        let key = if candidates.iter().any(|r| r.date == canonical) {
            canonical
        } else {
            candidates
                .iter()
                .find(|r| range.contains_raw(&r.date))
                .map(|r| r.date.clone())
                .unwrap_or(canonical)
        };

        let records: Vec<Record> = candidates.into_iter().filter(|r| r.date == key).collect();

        Ok(Self::build_day_summary(&key, &records, cfg, now))
    }

    pub fn month_summary<S, C>(
        supplier: &S,
        cfg: &C,
        year: i32,
        month: u32,
        now: NaiveDateTime,
    ) -> AppResult<MonthlyAggregate>
    where
        S: RecordSupplier + ?Sized,
        C: ConfigProvider + ?Sized,
    {
        month::month_aggregate(supplier, cfg.balance_config().as_ref(), year, month, now)
    }

    pub fn time_bank<S, C>(
        supplier: &S,
        cfg: &C,
        from: (i32, u32),
        to: (i32, u32),
        now: NaiveDateTime,
    ) -> AppResult<TimeBank>
    where
        S: RecordSupplier + ?Sized,
        C: ConfigProvider + ?Sized,
    {
        month::time_bank(supplier, cfg.balance_config().as_ref(), from, to, now)
    }
}
