use crate::core::supplier::DateRange;
use crate::errors::{AppError, AppResult};
use crate::models::record::Record;
use crate::models::record_type::RecordType;
use crate::utils::date::next_month;
use chrono::{Datelike, Local};
use rusqlite::{Connection, OptionalExtension, Params, Result, Row, params};

const SELECT_RECORDS: &str = "SELECT id, type, time_in_minutes, date, is_full_day, description,
        location, photo, nsr, created_at, updated_at
 FROM records";

pub fn map_row(row: &Row) -> Result<Record> {
    let kind: String = row.get("type")?;

    Ok(Record {
        id: row.get("id")?,
        kind: RecordType::from_db_str(&kind),
        time_in_minutes: row.get("time_in_minutes")?,
        date: row.get("date")?,
        is_full_day: row.get::<_, i32>("is_full_day")? == 1,
        description: row.get("description")?,
        location: row.get("location")?,
        photo: row.get("photo")?,
        nsr: row.get("nsr")?,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}

fn collect<P: Params>(conn: &Connection, sql: &str, params: P) -> AppResult<Vec<Record>> {
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map(params, map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Inserts a record and returns its new id.
pub fn insert_record(conn: &Connection, rec: &Record) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO records (type, time_in_minutes, date, is_full_day, description,
                              location, photo, nsr, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        params![
            rec.kind.to_db_str(),
            rec.time_in_minutes,
            rec.date,
            if rec.is_full_day { 1 } else { 0 },
            rec.description,
            rec.location,
            rec.photo,
            rec.nsr,
            rec.created_at,
            rec.updated_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// All records stored under the exact date string, in insertion order.
pub fn load_records_by_date(conn: &Connection, date: &str) -> AppResult<Vec<Record>> {
    let sql = format!("{SELECT_RECORDS} WHERE date = ?1 ORDER BY id ASC");
    collect(conn, &sql, [date])
}

/// Candidate records for every month touched by `range`.
///
/// Matching is textual on the month/year suffix, both zero-padded
/// (`%/03/2025`) and legacy unpadded (`%/3/2025`), and may over-select;
/// callers filter on the parsed date.
pub fn load_records_in_range(conn: &Connection, range: &DateRange) -> AppResult<Vec<Record>> {
    let sql = format!("{SELECT_RECORDS} WHERE date LIKE ?1 OR date LIKE ?2 ORDER BY id ASC");

    let mut out = Vec::new();
    let mut cursor = (range.start.year(), range.start.month());
    let last = (range.end.year(), range.end.month());

    while cursor <= last {
        let padded = format!("%/{:02}/{:04}", cursor.1, cursor.0);
        let unpadded = format!("%/{}/{:04}", cursor.1, cursor.0);
        out.extend(collect(conn, &sql, [padded.as_str(), unpadded.as_str()])?);
        cursor = next_month(cursor.0, cursor.1);
    }

    Ok(out)
}

pub fn load_record(conn: &Connection, id: i64) -> AppResult<Option<Record>> {
    let sql = format!("{SELECT_RECORDS} WHERE id = ?1");
    let rec = conn.query_row(&sql, [id], map_row).optional()?;
    Ok(rec)
}

pub fn delete_record(conn: &Connection, id: i64) -> AppResult<()> {
    let n = conn.execute("DELETE FROM records WHERE id = ?1", [id])?;
    if n == 0 {
        return Err(AppError::RecordNotFound(id));
    }
    Ok(())
}

pub fn delete_records_by_date(conn: &Connection, date: &str) -> AppResult<usize> {
    let n = conn.execute("DELETE FROM records WHERE date = ?1", [date])?;
    Ok(n)
}

/// Rewrites `time_in_minutes` (punch time or absence duration).
pub fn update_record_time(conn: &Connection, id: i64, minutes: i64) -> AppResult<()> {
    let n = conn.execute(
        "UPDATE records SET time_in_minutes = ?1, updated_at = ?2 WHERE id = ?3",
        params![minutes, Local::now().to_rfc3339(), id],
    )?;
    if n == 0 {
        return Err(AppError::RecordNotFound(id));
    }
    Ok(())
}
