use crate::cli::commands::parse_date_arg;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{confirm, info, success};
use crate::utils::formatting::describe_record_time;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, date, yes } = cmd {
        let date = date.as_deref().map(parse_date_arg).transpose()?;

        //
        // Confirmation prompt
        //
        let prompt = match (id, &date) {
            (Some(id), _) => format!("Delete record #{}? This action is irreversible.", id),
            (None, Some(d)) => format!(
                "Delete ALL records for {}? This action is irreversible.",
                d.format("%d/%m/%Y")
            ),
            (None, None) => return Ok(()),
        };

        if !*yes && !confirm(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        //
        // Execute deletion
        //
        let mut pool = DbPool::new(&cfg.database)?;

        if let Some(id) = id {
            let rec = DeleteLogic::apply_id(&mut pool, *id)?;
            success(format!(
                "Record #{} ({} {}) has been deleted.",
                id,
                rec.kind.label(),
                describe_record_time(&rec)
            ));
        } else if let Some(d) = date {
            let n = DeleteLogic::apply_date(&mut pool, d)?;
            success(format!("{} record(s) for {} have been deleted.", n, d.format("%d/%m/%Y")));
        }
    }

    Ok(())
}
