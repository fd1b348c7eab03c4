pub mod colors;
pub mod date;
pub mod formatting;
pub mod path;
pub mod table;
pub mod time;

pub use formatting::{MinuteStyle, signed_minutes};
pub use time::{clock_to_minutes, minutes_to_clock, seconds_to_clock};
