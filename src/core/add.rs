use crate::db::log::audit_record;
use crate::db::pool::DbPool;
use crate::db::queries::{insert_record, load_record, load_records_by_date, update_record_time};
use crate::errors::{AppError, AppResult};
use crate::models::record::Record;
use crate::models::record_type::RecordType;
use crate::ui::messages::{success, warning};
use crate::utils::date::format_date;
use crate::utils::formatting::describe_record_time;
use chrono::NaiveDate;

/// Optional metadata attached to a punch. Stored as-is, never interpreted.
#[derive(Debug, Default, Clone)]
pub struct PunchMeta {
    pub description: Option<String>,
    pub location: Option<String>,
    pub nsr: Option<String>,
    pub photo: Option<String>,
}

/// Largest absence/adjustment duration accepted, either sign (one day).
pub const MAX_ABSENCE_MINUTES: i64 = 24 * 60;

fn check_absence_minutes(kind: &RecordType, minutes: i64) -> AppResult<()> {
    if minutes < 0 && *kind != RecordType::BalanceAdjustment {
        return Err(AppError::InvalidDuration(format!(
            "{} cannot be negative ({minutes})",
            kind.label()
        )));
    }
    if minutes.unsigned_abs() > MAX_ABSENCE_MINUTES.unsigned_abs() {
        return Err(AppError::InvalidDuration(format!(
            "{minutes} minutes is more than a day (max {MAX_ABSENCE_MINUTES})"
        )));
    }
    Ok(())
}

/// High-level business logic for the commands that write records.
pub struct AddLogic;

impl AddLogic {
    /// Stores a work punch. `minutes` is the minute of day (0–1439).
    pub fn punch(
        pool: &mut DbPool,
        date: NaiveDate,
        minutes: i64,
        meta: PunchMeta,
    ) -> AppResult<Record> {
        if !(0..24 * 60).contains(&minutes) {
            return Err(AppError::InvalidTime(format!("{minutes} minutes")));
        }

        let date_str = format_date(date);

        let same_minute = load_records_by_date(&pool.conn, &date_str)?
            .iter()
            .filter(|r| r.is_work() && r.time_in_minutes == minutes)
            .count();
        if same_minute > 0 {
            warning(format!(
                "{} already has a punch at this minute; keeping both in insertion order.",
                date_str
            ));
        }

        let mut rec = Record::work(&date_str, minutes).with_description(meta.description);
        rec.location = meta.location;
        rec.nsr = meta.nsr;
        rec.photo = meta.photo;

        rec.id = insert_record(&pool.conn, &rec)?;
        audit_record(&pool.conn, "add", &rec);

        success(format!(
            "Punch #{} stored for {} at {}",
            rec.id,
            rec.date,
            describe_record_time(&rec)
        ));
        Ok(rec)
    }

    /// Stores an absence or balance adjustment.
    ///
    /// Exactly one of `minutes` / `full_day` must be given. Adjustments may
    /// be negative; leaves may not.
    pub fn absence(
        pool: &mut DbPool,
        date: NaiveDate,
        kind: RecordType,
        minutes: Option<i64>,
        full_day: bool,
        description: Option<String>,
    ) -> AppResult<Record> {
        if kind.is_work() {
            return Err(AppError::InvalidRecordType(
                "use `punch` to record work time".into(),
            ));
        }

        let minutes = match (minutes, full_day) {
            (Some(_), true) => {
                return Err(AppError::InvalidDuration(
                    "--minutes and --full-day are mutually exclusive".into(),
                ));
            }
            (None, false) => {
                return Err(AppError::InvalidDuration(
                    "either --minutes or --full-day is required".into(),
                ));
            }
            (Some(m), false) => m,
            (None, true) => 0,
        };

        check_absence_minutes(&kind, minutes)?;

        let mut rec = Record::new(kind, &format_date(date), minutes, full_day)
            .with_description(description);
        rec.id = insert_record(&pool.conn, &rec)?;
        audit_record(&pool.conn, "add", &rec);

        success(format!(
            "{} #{} stored for {} ({})",
            rec.kind.label(),
            rec.id,
            rec.date,
            describe_record_time(&rec)
        ));
        Ok(rec)
    }

    /// Changes the time (punch) or duration (absence) of an existing record.
    pub fn edit_time(pool: &mut DbPool, id: i64, minutes: i64) -> AppResult<Record> {
        let mut rec = load_record(&pool.conn, id)?.ok_or(AppError::RecordNotFound(id))?;

        if rec.is_work() {
            if !(0..24 * 60).contains(&minutes) {
                return Err(AppError::InvalidTime(format!("{minutes} minutes")));
            }
        } else {
            check_absence_minutes(&rec.kind, minutes)?;
        }

        update_record_time(&pool.conn, id, minutes)?;
        rec.time_in_minutes = minutes;
        audit_record(&pool.conn, "edit", &rec);

        success(format!(
            "Record #{} updated ({})",
            rec.id,
            describe_record_time(&rec)
        ));
        Ok(rec)
    }
}
