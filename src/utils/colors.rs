//! ANSI escapes for the terminal views.

pub const RESET: &str = "\x1b[0m";
pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Surplus green, deficit red, an even balance uncoloured.
pub fn colorize_balance(text: &str, value: i64) -> String {
    let colour = match value.signum() {
        1 => GREEN,
        -1 => RED,
        _ => RESET,
    };
    format!("{colour}{text}{RESET}")
}
