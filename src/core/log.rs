//! Reader for the audit trail written by `db::log`.

use crate::db::pool::DbPool;
use crate::errors::AppResult;
use ansi_term::Colour;
use regex::Regex;
use std::sync::LazyLock;

const TARGET_WIDTH_MAX: usize = 48;

static ANSI_RE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").ok());

fn visible_len(s: &str) -> usize {
    match ANSI_RE.as_ref() {
        Some(re) => re.replace_all(s, "").chars().count(),
        None => s.chars().count(),
    }
}

fn operation_colour(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "edit" => Colour::Yellow,
        "del" => Colour::Red,
        "init" => Colour::Cyan,
        "migration_applied" => Colour::Purple,
        _ => Colour::White,
    }
}

#[derive(Debug)]
pub struct AuditEntry {
    pub id: i64,
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

impl AuditEntry {
    /// `add #3 10/03/2025`, operation word coloured, long targets shortened.
    fn label(&self) -> String {
        let op = operation_colour(&self.operation).paint(self.operation.as_str());
        if self.target.is_empty() {
            return op.to_string();
        }

        let target: String = if self.target.chars().count() > TARGET_WIDTH_MAX {
            let head: String = self.target.chars().take(TARGET_WIDTH_MAX - 1).collect();
            format!("{head}…")
        } else {
            self.target.clone()
        };
        format!("{} {}", op, target)
    }
}

pub struct LogLogic;

impl LogLogic {
    /// Audit rows, oldest first. `operation` filters on the exact name,
    /// `limit` keeps only the most recent rows.
    pub fn entries(
        pool: &DbPool,
        operation: Option<&str>,
        limit: Option<usize>,
    ) -> AppResult<Vec<AuditEntry>> {
        let mut stmt = pool.conn.prepare_cached(
            "SELECT id, date, operation, target, message FROM log
             WHERE ?1 IS NULL OR operation = ?1
             ORDER BY id ASC",
        )?;

        let rows = stmt.query_map([operation], |row| {
            let raw: String = row.get(1)?;
            let date = chrono::DateTime::parse_from_rfc3339(&raw)
                .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
                .unwrap_or(raw);

            Ok(AuditEntry {
                id: row.get(0)?,
                date,
                operation: row.get(2)?,
                target: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
                message: row.get(4)?,
            })
        })?;

        let mut entries = rows.collect::<Result<Vec<_>, _>>()?;
        if let Some(n) = limit
            && entries.len() > n
        {
            entries.drain(..entries.len() - n);
        }
        Ok(entries)
    }

    pub fn print_log(pool: &DbPool, operation: Option<&str>, limit: Option<usize>) -> AppResult<()> {
        let entries = Self::entries(pool, operation, limit)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let labels: Vec<String> = entries.iter().map(AuditEntry::label).collect();
        let label_w = labels.iter().map(|l| visible_len(l)).max().unwrap_or(0);
        let id_w = entries.iter().map(|e| e.id.to_string().len()).max().unwrap_or(1);

        println!("📜 Internal log:\n");
        for (e, label) in entries.iter().zip(&labels) {
            let pad = " ".repeat(label_w - visible_len(label));
            println!(
                "{:>id_w$}  {}  {}{}  {}",
                e.id,
                e.date,
                label,
                pad,
                e.message,
                id_w = id_w
            );
        }

        Ok(())
    }
}
