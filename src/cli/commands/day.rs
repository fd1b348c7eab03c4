use crate::cli::commands::parse_date_arg;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::intervals::IntervalExit;
use crate::core::logic::Core;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::DaySummary;
use crate::ui::messages::{header, info, warning};
use crate::utils::colors::{GREY, RESET, colorize_balance};
use crate::utils::formatting::describe_record_time;
use crate::utils::table::{Column, Table};
use crate::utils::time::{minutes_to_clock, seconds_to_clock};
use chrono::NaiveDateTime;

pub fn handle(cmd: &Commands, cfg: &Config, now: NaiveDateTime) -> AppResult<()> {
    if let Commands::Day { date } = cmd {
        let d = match date {
            Some(s) => parse_date_arg(s)?,
            None => now.date(),
        };

        let pool = DbPool::new(&cfg.database)?;
        let summary = Core::day_summary(&pool, cfg, d, now)?;

        if summary.records.is_empty() {
            info(format!("No records for {}", summary.date));
        } else {
            print_summary(&summary);
        }
    }
    Ok(())
}

fn print_summary(summary: &DaySummary) {
    header(&summary.date);

    let mut table = Table::new(vec![
        Column::new("ID", 6),
        Column::new("TYPE", 14),
        Column::new("TIME", 10),
        Column::new("DESCRIPTION", 30),
    ]);
    for r in &summary.records {
        table.add_row(vec![
            r.id.to_string(),
            r.kind.label().to_string(),
            describe_record_time(r),
            r.description.clone().unwrap_or_default(),
        ]);
    }
    print!("{}", table.render());

    if !summary.worked.intervals.is_empty() {
        println!("\nIntervals:");
        for (i, iv) in summary.worked.intervals.iter().enumerate() {
            let exit = match &iv.exit {
                IntervalExit::Punch(r) => minutes_to_clock(r.time_in_minutes),
                IntervalExit::Open => "(open)".to_string(),
                IntervalExit::Unpaired => format!("{GREY}--:--{RESET}"),
            };
            println!(
                "  {}) {} → {:<8} {}",
                i + 1,
                minutes_to_clock(iv.entry.time_in_minutes),
                exit,
                seconds_to_clock(iv.duration_seconds)
            );
        }
    }

    println!("\nWorked:  {}", seconds_to_clock(summary.worked.worked_seconds));

    match &summary.balance {
        Some(b) => println!(
            "Balance: {}",
            colorize_balance(&b.balance.to_string(), b.balance_seconds)
        ),
        None => println!("Balance: {GREY}n/a (work_hours not configured){RESET}"),
    }

    if summary.worked.is_open_interval {
        info("Currently clocked in.");
    }
    if summary.worked.is_incomplete {
        warning("Incomplete day: one entry punch has no matching exit.");
    }
}
