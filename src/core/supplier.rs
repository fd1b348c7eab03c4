//! Seams between the balance engine and the rest of the application.
//!
//! The engine reads records and configuration through these traits and
//! never fetches, caches or writes anything on its own.

use crate::errors::AppResult;
use crate::models::{BalanceConfig, Record};
use crate::utils::date;
use chrono::NaiveDate;

/// Inclusive range of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn day(d: NaiveDate) -> Self {
        Self { start: d, end: d }
    }

    pub fn month(year: i32, month: u32) -> Option<Self> {
        date::month_bounds(year, month).map(|(start, end)| Self { start, end })
    }

    pub fn contains(&self, d: NaiveDate) -> bool {
        self.start <= d && d <= self.end
    }

    /// Range predicate on a raw record date. Malformed strings never match.
    pub fn contains_raw(&self, raw: &str) -> bool {
        date::parse_date(raw).is_some_and(|d| self.contains(d))
    }
}

/// Source of stored records.
///
/// Implementations may return records in any order and may return more than
/// the requested range; the engine filters and sorts itself.
pub trait RecordSupplier {
    fn fetch_records(&self, range: &DateRange) -> AppResult<Vec<Record>>;
}

/// Source of the contractual schedule. `None` until the user configured it.
pub trait ConfigProvider {
    fn balance_config(&self) -> Option<BalanceConfig>;
}

impl RecordSupplier for [Record] {
    fn fetch_records(&self, range: &DateRange) -> AppResult<Vec<Record>> {
        Ok(self
            .iter()
            .filter(|r| range.contains_raw(&r.date))
            .cloned()
            .collect())
    }
}

impl RecordSupplier for Vec<Record> {
    fn fetch_records(&self, range: &DateRange) -> AppResult<Vec<Record>> {
        self.as_slice().fetch_records(range)
    }
}

impl ConfigProvider for BalanceConfig {
    fn balance_config(&self) -> Option<BalanceConfig> {
        Some(*self)
    }
}

impl ConfigProvider for Option<BalanceConfig> {
    fn balance_config(&self) -> Option<BalanceConfig> {
        *self
    }
}
