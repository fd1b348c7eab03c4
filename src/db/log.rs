//! Audit trail in the `log` table.
//!
//! Every write command leaves one row here; `timebank log --print` shows
//! them. Failing to write the audit row never fails the command itself.

use crate::errors::AppResult;
use crate::models::record::Record;
use crate::ui::messages::warning;
use crate::utils::formatting::describe_record_time;
use chrono::Local;
use rusqlite::{Connection, params};

pub fn audit(conn: &Connection, operation: &str, target: &str, message: &str) -> AppResult<()> {
    conn.prepare_cached(
        "INSERT INTO log (date, operation, target, message) VALUES (?1, ?2, ?3, ?4)",
    )?
    .execute(params![Local::now().to_rfc3339(), operation, target, message])?;

    tracing::trace!(operation, target, "audit row written");
    Ok(())
}

/// Non-blocking audit of a single record (`#id date`, `type time`).
pub fn audit_record(conn: &Connection, operation: &str, rec: &Record) {
    let target = format!("#{} {}", rec.id, rec.date);
    let message = format!("{} {}", rec.kind.label(), describe_record_time(rec));

    if let Err(e) = audit(conn, operation, &target, &message) {
        warning(format!("Failed to write internal log: {}", e));
    }
}
