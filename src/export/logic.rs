// src/export/logic.rs

use crate::config::Config;
use crate::core::calculator::month::{month_daily_balances, month_groups};
use crate::core::supplier::ConfigProvider;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::model::{DailyBalanceExport, RecordExport};
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;
use chrono::NaiveDateTime;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export one month, either as daily balances or (`records = true`) as
    /// the raw stored records.
    #[allow(clippy::too_many_arguments)]
    pub fn export(
        pool: &DbPool,
        cfg: &Config,
        format: ExportFormat,
        file: &str,
        (year, month): (i32, u32),
        records: bool,
        force: bool,
        now: NaiveDateTime,
    ) -> AppResult<usize> {
        let path_buf = expand_tilde(file);
        let path = path_buf.as_path();

        ensure_writable(path, force)?;

        if records {
            let rows: Vec<RecordExport> = month_groups(pool, year, month)?
                .values()
                .flatten()
                .map(RecordExport::from)
                .collect();

            if rows.is_empty() {
                warning("No records found for selected month.");
                return Ok(0);
            }
            format.write(&rows, path)?;
            return Ok(rows.len());
        }

        let bc = cfg.balance_config().ok_or_else(|| {
            AppError::Export("work_hours is not configured, nothing to balance against".into())
        })?;

        let rows: Vec<DailyBalanceExport> = month_daily_balances(pool, &bc, year, month, now)?
            .iter()
            .map(DailyBalanceExport::from)
            .collect();

        if rows.is_empty() {
            warning("No records found for selected month.");
            return Ok(0);
        }

        format.write(&rows, path)?;
        Ok(rows.len())
    }
}
