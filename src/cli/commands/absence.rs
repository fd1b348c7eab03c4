use crate::cli::commands::parse_date_arg;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::record_type::RecordType;

/// Record an absence or a balance adjustment.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Absence {
        date,
        kind,
        minutes,
        full_day,
        description,
    } = cmd
    {
        let d = parse_date_arg(date)?;
        let kind = RecordType::from_cli(kind).ok_or_else(|| AppError::InvalidRecordType(kind.clone()))?;

        let mut pool = DbPool::new(&cfg.database)?;
        AddLogic::absence(&mut pool, d, kind, *minutes, *full_day, description.clone())?;
    }

    Ok(())
}
