use crate::cli::commands::resolve_month;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::core::supplier::ConfigProvider;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::MonthlyAggregate;
use crate::ui::messages::{header, warning};
use crate::utils::colors::{GREY, RESET, colorize_balance};
use crate::utils::date::{all_days_of_month, format_date, format_month, parse_date, weekday_str};
use crate::utils::formatting::{MinuteStyle, print_separator, signed_minutes};
use chrono::NaiveDateTime;

pub fn handle(cmd: &Commands, cfg: &Config, now: NaiveDateTime) -> AppResult<()> {
    if let Commands::Month { month } = cmd {
        let (year, m) = resolve_month(month.as_deref(), now)?;

        if cfg.balance_config().is_none() {
            warning("work_hours is not configured: all balances are shown as zero.");
        }

        let pool = DbPool::new(&cfg.database)?;
        let agg = Core::month_summary(&pool, cfg, year, m, now)?;

        print_month(&agg, cfg);
    }
    Ok(())
}

fn print_month(agg: &MonthlyAggregate, cfg: &Config) {
    header(format_month(agg.year, agg.month));

    for d in all_days_of_month(agg.year, agg.month) {
        let key = format_date(d);
        let weekday = weekday_str(d, &cfg.show_weekday);
        let marker = if agg.has_entries(&key) { "●" } else { " " };

        let balance = match agg.daily_balances.get(&key) {
            Some(mins) => colorize_balance(&signed_minutes(*mins, MinuteStyle::Clock), *mins),
            None => format!("{GREY}--:--{RESET}"),
        };

        println!("{} {:<3} {} {}", key, weekday, marker, balance);
    }

    // Dates with entries that are not spelled canonically
    for key in agg.worked_dates.iter().filter(|k| {
        parse_date(k).map(format_date).as_deref() != Some(k.as_str())
    }) {
        let mins = agg.daily_balances.get(key).copied().unwrap_or(0);
        println!(
            "{}     ● {}",
            key,
            colorize_balance(&signed_minutes(mins, MinuteStyle::Clock), mins)
        );
    }

    print_separator(&cfg.separator_char, 32);
    print_total("Month", agg.month_total);
    print_total("Previous month", agg.previous_month_total);
    print_total("Running", agg.running_total);
    println!("Days with entries: {}", agg.worked_dates.len());
}

fn print_total(label: &str, mins: i64) {
    println!(
        "{:<16} {}",
        format!("{label}:"),
        colorize_balance(&signed_minutes(mins, MinuteStyle::Words), mins)
    );
}
