use crate::cli::commands::parse_date_arg;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::{AddLogic, PunchMeta};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::time::parse_clock_minutes;

/// Record a work punch.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Punch {
        date,
        time,
        description,
        location,
        nsr,
        photo,
    } = cmd
    {
        //
        // 1. Validate input before touching the DB
        //
        let d = parse_date_arg(date)?;
        let minutes = parse_clock_minutes(time)?;

        //
        // 2. Store
        //
        let mut pool = DbPool::new(&cfg.database)?;
        AddLogic::punch(
            &mut pool,
            d,
            minutes,
            PunchMeta {
                description: description.clone(),
                location: location.clone(),
                nsr: nsr.clone(),
                photo: photo.clone(),
            },
        )?;
    }

    Ok(())
}
