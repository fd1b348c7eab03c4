//! Error type shared by storage, configuration, export and the CLI.
//!
//! The balance engine never fails on bad record data (malformed dates are
//! skipped, odd punches are flagged); the only errors crossing its boundary
//! come from the record supplier.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // user input
    #[error("Invalid date format: {0} (expected DD/MM/YYYY)")]
    InvalidDate(String),

    #[error("Invalid time format: {0} (expected HH:MM)")]
    InvalidTime(String),

    #[error("Invalid month: {0} (expected MM/YYYY)")]
    InvalidMonth(String),

    #[error("Invalid record type: {0}")]
    InvalidRecordType(String),

    #[error("Invalid duration: {0}")]
    InvalidDuration(String),

    // lookups
    #[error("No records found for date {0}")]
    NoRecordsForDate(String),

    #[error("Record #{0} not found")]
    RecordNotFound(i64),

    // configuration file
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Cannot read the configuration file")]
    ConfigLoad,

    #[error("Invalid configuration YAML: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // export
    #[error("Export error: {0}")]
    Export(String),

    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON write failed: {0}")]
    Json(#[from] serde_json::Error),
}

pub type AppResult<T> = Result<T, AppError>;
