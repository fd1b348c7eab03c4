//! Date utilities around the `DD/MM/YYYY` textual form used by stored records.

use chrono::{Datelike, NaiveDate, NaiveDateTime};

pub const DATE_FMT: &str = "%d/%m/%Y";

/// Wall-clock "now" in local time. Only the front-end calls this; the engine
/// always receives `now` as a parameter.
pub fn now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FMT).ok()
}

pub fn format_date(d: NaiveDate) -> String {
    d.format(DATE_FMT).to_string()
}

/// `DD/MM/YYYY HH:MM[:SS]`
pub fn parse_datetime(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    NaiveDateTime::parse_from_str(s, "%d/%m/%Y %H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%d/%m/%Y %H:%M"))
        .ok()
}

/// `MM/YYYY → (year, month)`
pub fn parse_month(s: &str) -> Option<(i32, u32)> {
    let d = NaiveDate::parse_from_str(&format!("01/{}", s.trim()), DATE_FMT).ok()?;
    Some((d.year(), d.month()))
}

pub fn format_month(year: i32, month: u32) -> String {
    format!("{:02}/{:04}", month, year)
}

/// First and last day of the month, both inclusive.
pub fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let (ny, nm) = next_month(year, month);
    let last = NaiveDate::from_ymd_opt(ny, nm, 1)?.pred_opt()?;
    Some((first, last))
}

pub fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month <= 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

pub fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month >= 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

pub fn all_days_of_month(year: i32, month: u32) -> Vec<NaiveDate> {
    let Some((first, last)) = month_bounds(year, month) else {
        return Vec::new();
    };

    first.iter_days().take_while(|d| *d <= last).collect()
}

/// Short weekday label used by the month view (`show_weekday` config).
pub fn weekday_str(d: NaiveDate, mode: &str) -> String {
    match mode.to_lowercase().as_str() {
        "short" => d.format("%a").to_string().chars().take(2).collect(),
        "medium" => d.format("%a").to_string(),
        "long" => d.format("%A").to_string(),
        _ => String::new(),
    }
}
