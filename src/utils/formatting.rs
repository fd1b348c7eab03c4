//! Text helpers shared by the terminal views.

use crate::models::record::Record;
use crate::models::record_type::RecordType;
use crate::utils::time::minutes_to_clock;

/// How a signed amount of minutes is spelled out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MinuteStyle {
    /// `+02:25`
    Clock,
    /// `+02h 25m`
    Words,
}

/// Signed minutes for balances: `+` above zero, `-` below, no sign at zero.
pub fn signed_minutes(mins: i64, style: MinuteStyle) -> String {
    let sign = match mins.signum() {
        1 => "+",
        -1 => "-",
        _ => "",
    };
    let (h, m) = (mins.unsigned_abs() / 60, mins.unsigned_abs() % 60);

    match style {
        MinuteStyle::Clock => format!("{sign}{h:02}:{m:02}"),
        MinuteStyle::Words => format!("{sign}{h:02}h {m:02}m"),
    }
}

/// The "time" column of a record: clock time for punches, a duration (or
/// "full day") for everything else.
pub fn describe_record_time(rec: &Record) -> String {
    match rec.kind {
        RecordType::Work => minutes_to_clock(rec.time_in_minutes),
        _ if rec.is_full_day => "full day".to_string(),
        _ => signed_minutes(rec.time_in_minutes, MinuteStyle::Words),
    }
}

pub fn print_separator(ch: &str, width: usize) {
    println!("{}", ch.repeat(width));
}
