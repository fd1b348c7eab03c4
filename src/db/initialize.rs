use crate::db::migrate::run_pending_migrations;
use crate::errors::AppResult;
use crate::ui::messages::success;
use rusqlite::Connection;

/// Brings a (possibly empty) database file up to the current schema.
///
/// Returns how many migrations ran; zero on an up-to-date database.
pub fn init_db(conn: &Connection) -> AppResult<usize> {
    let applied = run_pending_migrations(conn)?;

    for (version, description) in &applied {
        success(format!("Migration applied: {} → {}", version, description));
    }
    Ok(applied.len())
}
