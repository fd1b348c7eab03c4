use crate::cli::commands::resolve_month;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::core::supplier::ConfigProvider;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{header, warning};
use crate::utils::colors::colorize_balance;
use crate::utils::date::{format_month, parse_month};
use crate::utils::formatting::{MinuteStyle, print_separator, signed_minutes};
use crate::utils::table::{Column, Table};
use chrono::NaiveDateTime;

pub fn handle(cmd: &Commands, cfg: &Config, now: NaiveDateTime) -> AppResult<()> {
    if let Commands::Bank { from, to } = cmd {
        let from_ym = parse_month(from).ok_or_else(|| AppError::InvalidMonth(from.clone()))?;
        let to_ym = resolve_month(to.as_deref(), now)?;

        if from_ym > to_ym {
            return Err(AppError::InvalidMonth(format!(
                "{} is after {}",
                from,
                format_month(to_ym.0, to_ym.1)
            )));
        }

        if cfg.balance_config().is_none() {
            warning("work_hours is not configured: the time bank is zero.");
        }

        let pool = DbPool::new(&cfg.database)?;
        let bank = Core::time_bank(&pool, cfg, from_ym, to_ym, now)?;

        header(format!(
            "Time bank {} → {}",
            format_month(from_ym.0, from_ym.1),
            format_month(to_ym.0, to_ym.1)
        ));

        let mut table = Table::new(vec![
            Column::new("MONTH", 9),
            Column::new("DAYS", 5),
            Column::new("BALANCE", 12),
            Column::new("CUMULATIVE", 12),
        ]);

        let mut cumulative = 0;
        for m in &bank.months {
            cumulative += m.month_total;
            table.add_row(vec![
                format_month(m.year, m.month),
                m.worked_dates.len().to_string(),
                signed_minutes(m.month_total, MinuteStyle::Clock),
                signed_minutes(cumulative, MinuteStyle::Clock),
            ]);
        }
        print!("{}", table.render());

        print_separator(&cfg.separator_char, 42);
        println!(
            "Total: {}",
            colorize_balance(&signed_minutes(bank.total, MinuteStyle::Words), bank.total)
        );
    }
    Ok(())
}
