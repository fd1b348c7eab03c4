use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::utils::time::parse_clock_minutes;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit { id, time, minutes } = cmd {
        let new_minutes = match (time, minutes) {
            (Some(t), _) => parse_clock_minutes(t)?,
            (None, Some(m)) => *m,
            (None, None) => {
                return Err(AppError::InvalidDuration(
                    "nothing to edit: pass --time or --minutes".into(),
                ));
            }
        };

        let mut pool = DbPool::new(&cfg.database)?;
        AddLogic::edit_time(&mut pool, *id, new_minutes)?;
    }

    Ok(())
}
