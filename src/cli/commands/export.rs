use crate::cli::commands::resolve_month;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::ui::messages::info;
use chrono::NaiveDateTime;

pub fn handle(cmd: &Commands, cfg: &Config, now: NaiveDateTime) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        month,
        records,
        force,
    } = cmd
    {
        let ym = resolve_month(month.as_deref(), now)?;
        let pool = DbPool::new(&cfg.database)?;

        let n = ExportLogic::export(&pool, cfg, format.clone(), file, ym, *records, *force, now)?;
        if n > 0 {
            info(format!("{} row(s) written as {}", n, format.as_str()));
        }
    }
    Ok(())
}
