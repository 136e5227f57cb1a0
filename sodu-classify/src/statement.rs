//! Read statement CSV exports into transactions.
//!
//! Expected columns: date, description, amount[, kind]. A header row and
//! blank or unparseable rows are skipped rather than failing the whole file.

use anyhow::{Context, Result};
use sodu_core::{Transaction, TransactionKind, parse_timestamp};
use std::fs::File;
use std::io;
use std::path::Path;

/// Parse a statement CSV from a file path.
pub fn read_statement(path: impl AsRef<Path>) -> Result<Vec<Transaction>> {
    let file = File::open(path.as_ref())
        .with_context(|| format!("opening {}", path.as_ref().display()))?;
    parse_statement(file)
}

/// Parse a statement CSV from any reader.
pub fn parse_statement(reader: impl io::Read) -> Result<Vec<Transaction>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(false)
        .from_reader(reader);

    let mut txns = Vec::new();
    for result in rdr.records() {
        let record = result?;

        let date_raw = record.get(0).unwrap_or("").trim();
        if date_raw.is_empty() || date_raw.eq_ignore_ascii_case("date") {
            continue;
        }
        let Ok(date) = parse_timestamp(date_raw) else {
            continue;
        };

        let amount: f64 = match record.get(2).unwrap_or("").trim().parse() {
            Ok(a) => a,
            Err(_) => continue,
        };

        let kind = match record.get(3).map(str::trim) {
            Some(k) if k.eq_ignore_ascii_case("income") => TransactionKind::Income,
            _ => TransactionKind::Expense,
        };

        txns.push(
            Transaction::new(record.get(1).unwrap_or("").trim(), amount, date).with_kind(kind),
        );
    }

    Ok(txns)
}
