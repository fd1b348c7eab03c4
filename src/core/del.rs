use crate::db::log::{audit, audit_record};
use crate::db::pool::DbPool;
use crate::db::queries::{delete_record, delete_records_by_date, load_record};
use crate::errors::{AppError, AppResult};
use crate::models::record::Record;
use crate::ui::messages::warning;
use crate::utils::date::format_date;
use chrono::NaiveDate;

/// Removal of stored records. Balances are derived, so nothing else needs
/// to be touched after a delete.
pub struct DeleteLogic;

impl DeleteLogic {
    /// Returns the removed record.
    pub fn apply_id(pool: &mut DbPool, id: i64) -> AppResult<Record> {
        let rec = load_record(&pool.conn, id)?.ok_or(AppError::RecordNotFound(id))?;
        delete_record(&pool.conn, id)?;

        audit_record(&pool.conn, "del", &rec);
        Ok(rec)
    }

    /// Removes every record stored under the canonical spelling of `date`.
    pub fn apply_date(pool: &mut DbPool, date: NaiveDate) -> AppResult<usize> {
        let date_str = format_date(date);

        let n = delete_records_by_date(&pool.conn, &date_str)?;
        if n == 0 {
            return Err(AppError::NoRecordsForDate(date_str));
        }

        if let Err(e) = audit(&pool.conn, "del", &date_str, &format!("{n} record(s)")) {
            warning(format!("Failed to write internal log: {}", e));
        }
        Ok(n)
    }
}
