use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::log::audit;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use rusqlite::Connection;

/// `init [--work-hours N] [--tolerance N]`
///
/// Safe to run again: existing settings are kept unless overridden and
/// only pending migrations are applied.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let Commands::Init {
        work_hours,
        tolerance,
    } = &cli.command
    else {
        return Ok(());
    };

    let cfg = Config::init_all(cli.db.clone(), *work_hours, *tolerance)?;

    let conn = Connection::open(&cfg.database)?;
    let applied = init_db(&conn)?;

    if let Err(e) = audit(
        &conn,
        "init",
        &cfg.database,
        &format!("{} migration(s) applied", applied),
    ) {
        warning(format!("Failed to write internal log: {}", e));
    }

    match cfg.work_hours {
        Some(minutes) => success(format!(
            "timebank ready: {} min/day, tolerance {} min",
            minutes, cfg.tolerance
        )),
        None => warning(
            "work_hours is not set yet: use `timebank init --work-hours <minutes>` or `timebank config --edit`.",
        ),
    }

    Ok(())
}
