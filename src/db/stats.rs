use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use crate::utils::date::{format_date, parse_date};
use std::fs;

pub fn print_db_info(pool: &DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) TOTAL RECORDS (per type)
    //
    let count: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM records", [], |row| row.get(0))?;
    println!(
        "{}• Total records:{} {}{}{}",
        CYAN, RESET, GREEN, count, RESET
    );

    let mut stmt = pool
        .conn
        .prepare("SELECT type, COUNT(*) FROM records GROUP BY type ORDER BY type")?;
    let per_type = stmt.query_map([], |row| {
        Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
    })?;
    for r in per_type {
        let (kind, n) = r?;
        println!("    {:<18} {}", kind, n);
    }

    //
    // 3) DATE RANGE
    //
    // Dates are stored as DD/MM/YYYY, so SQL ordering is useless here.
    let mut stmt = pool.conn.prepare("SELECT DISTINCT date FROM records")?;
    let raw_dates = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut dates = Vec::new();
    let mut malformed = 0;
    for r in raw_dates {
        match parse_date(&r?) {
            Some(d) => dates.push(d),
            None => malformed += 1,
        }
    }
    dates.sort();

    let fmt_first = dates
        .first()
        .map(|d| format_date(*d))
        .unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = dates
        .last()
        .map(|d| format_date(*d))
        .unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    if malformed > 0 {
        println!(
            "{}• Malformed dates:{} {}{}{}",
            CYAN, RESET, YELLOW, malformed, RESET
        );
    }

    //
    // 4) AVERAGE RECORDS/DAY
    //
    if let (Some(f), Some(l)) = (dates.first(), dates.last()) {
        let days = (*l - *f).num_days().max(1);
        let avg = count as f64 / days as f64;
        println!("{}• Average records/day:{} {:.2}", CYAN, RESET, avg);
    }

    println!();
    Ok(())
}
