pub mod absence;
pub mod bank;
pub mod config;
pub mod day;
pub mod db;
pub mod del;
pub mod edit;
pub mod export;
pub mod init;
pub mod log;
pub mod month;
pub mod punch;

use crate::errors::{AppError, AppResult};
use crate::utils::date;
use chrono::{Datelike, NaiveDate, NaiveDateTime};

/// `DD/MM/YYYY` argument → date.
pub(crate) fn parse_date_arg(s: &str) -> AppResult<NaiveDate> {
    date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

/// `MM/YYYY` argument → `(year, month)`, defaulting to the month of `now`.
pub(crate) fn resolve_month(arg: Option<&str>, now: NaiveDateTime) -> AppResult<(i32, u32)> {
    match arg {
        Some(s) => date::parse_month(s).ok_or_else(|| AppError::InvalidMonth(s.to_string())),
        None => Ok((now.year(), now.month())),
    }
}
