//! SQLite connection wrapper (lightweight for CLI usage).
//!
//! `DbPool` is also the application's `RecordSupplier`: the balance engine
//! reads month snapshots through it without knowing about SQL.

use crate::core::supplier::{DateRange, RecordSupplier};
use crate::db::queries::load_records_in_range;
use crate::errors::AppResult;
use crate::models::record::Record;
use rusqlite::{Connection, Result};
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    pub fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(Path::new(path))?;
        Ok(Self { conn })
    }
}

impl RecordSupplier for DbPool {
    fn fetch_records(&self, range: &DateRange) -> AppResult<Vec<Record>> {
        load_records_in_range(&self.conn, range)
    }
}
