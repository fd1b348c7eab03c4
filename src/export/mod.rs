//! Month exports: daily balances or raw records, as CSV or JSON.

mod fs_utils;
pub mod logic;
mod model;

pub use logic::ExportLogic;
pub use model::{DailyBalanceExport, RecordExport};

use crate::errors::AppResult;
use crate::ui::messages::success;
use clap::ValueEnum;
use serde::Serialize;
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    /// Writes `rows` to `path`. CSV headers come from the serde field names.
    pub(crate) fn write<T: Serialize>(&self, rows: &[T], path: &Path) -> AppResult<()> {
        match self {
            ExportFormat::Csv => {
                let mut wtr = csv::Writer::from_path(path)?;
                for row in rows {
                    wtr.serialize(row)?;
                }
                wtr.flush()?;
            }
            ExportFormat::Json => {
                fs::write(path, serde_json::to_string_pretty(rows)?)?;
            }
        }

        tracing::debug!(format = self.as_str(), rows = rows.len(), path = %path.display(), "export written");
        success(format!(
            "{} export completed: {}",
            self.as_str().to_uppercase(),
            path.display()
        ));
        Ok(())
    }
}
