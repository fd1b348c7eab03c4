//! timebank library root.
//!
//! The attendance balance engine lives in [`core::calculator`] and only
//! depends on [`models`], [`utils`] and the seams in [`core::supplier`].
//! Everything else (SQLite storage, YAML config, CLI, exports) is the
//! application wrapped around it.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use chrono::NaiveDateTime;
use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::{AppError, AppResult};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the tracing filter (falls back to RUST_LOG).
pub const LOG_ENV: &str = "TIMEBANK_LOG";

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, now: NaiveDateTime) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Db { .. } => cli::commands::db::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Punch { .. } => cli::commands::punch::handle(&cli.command, cfg),
        Commands::Absence { .. } => cli::commands::absence::handle(&cli.command, cfg),
        Commands::Edit { .. } => cli::commands::edit::handle(&cli.command, cfg),
        Commands::Del { .. } => cli::commands::del::handle(&cli.command, cfg),
        Commands::Day { .. } => cli::commands::day::handle(&cli.command, cfg, now),
        Commands::Month { .. } => cli::commands::month::handle(&cli.command, cfg, now),
        Commands::Bank { .. } => cli::commands::bank::handle(&cli.command, cfg, now),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg, now),
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::from_default_env())
    };

    // try_init: a subscriber may already be installed (tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse the CLI
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // 2️⃣ load the config once
    let mut cfg = Config::load()?;

    // 3️⃣ --db overrides the configured database
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    // 4️⃣ the only wall-clock read
    let now = match &cli.now {
        Some(s) => utils::date::parse_datetime(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
        None => utils::date::now(),
    };
    tracing::debug!(%now, database = %cfg.database, "dispatching command");

    dispatch(&cli, &cfg, now)
}
