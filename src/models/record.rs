use super::record_type::RecordType;
use crate::utils::date;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: i64,                     // ⇔ records.id
    #[serde(rename = "type")]
    pub kind: RecordType,            // ⇔ records.type ('work' | 'dayOff' | ...)
    pub time_in_minutes: i64,        // ⇔ records.time_in_minutes (minute of day, or duration)
    pub date: String,                // ⇔ records.date (TEXT "DD/MM/YYYY", kept raw)
    pub is_full_day: bool,           // ⇔ records.is_full_day (INT 0/1)
    pub description: Option<String>, // ⇔ records.description
    pub location: Option<String>,    // ⇔ records.location
    pub photo: Option<String>,       // ⇔ records.photo
    pub nsr: Option<String>,         // ⇔ records.nsr
    pub created_at: String,          // ⇔ records.created_at (TEXT, ISO8601)
    pub updated_at: String,          // ⇔ records.updated_at (TEXT, ISO8601)
}

impl Record {
    /// Builds a record that has not been stored yet (`id = 0`, timestamps = now).
    pub fn new(kind: RecordType, date: &str, time_in_minutes: i64, is_full_day: bool) -> Self {
        let now = Local::now().to_rfc3339();
        Self {
            id: 0,
            kind,
            time_in_minutes,
            date: date.to_string(),
            is_full_day,
            description: None,
            location: None,
            photo: None,
            nsr: None,
            created_at: now.clone(),
            updated_at: now,
        }
    }

    pub fn work(date: &str, time_in_minutes: i64) -> Self {
        Self::new(RecordType::Work, date, time_in_minutes, false)
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Parsed form of the raw date string; `None` for malformed/legacy values.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        date::parse_date(&self.date)
    }

    pub fn is_work(&self) -> bool {
        self.kind.is_work()
    }
}
