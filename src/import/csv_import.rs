use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::{parse_date, Record};

const AMOUNT_COLUMN: usize = 0;
const COMMENT_COLUMN: usize = 1;
const DATE_COLUMN: usize = 2;
const AMOUNT_HEADER: &str = "amount";

/// Largest accepted magnitude for a single amount: 10^15.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(2_764_472_320, 232_830, 0, false, 0);

/// Reads records from CSV. Rows without a date are stamped with `today`.
pub struct RecordReader {
    today: NaiveDate,
}

impl Default for RecordReader {
    fn default() -> Self {
        Self::new(Local::now().date_naive())
    }
}

impl RecordReader {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }

    pub fn read_path(&self, path: &Path) -> Result<Vec<Record>> {
        let file = std::fs::File::open(path)?;
        let records = self.read_from(file)?;
        debug!(path = %path.display(), count = records.len(), "loaded records");
        Ok(records)
    }

    /// Parse inline CSV text, e.g. `250,lunch,14.10.2026`.
    pub fn parse_str(&self, text: &str) -> Result<Vec<Record>> {
        self.read_from(text.as_bytes())
    }

    pub fn read_from<R: Read>(&self, reader: R) -> Result<Vec<Record>> {
        let mut rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .has_headers(false)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut rows: Vec<Vec<String>> = Vec::new();
        for result in rdr.records() {
            let row = result?;
            rows.push(row.iter().map(|s| s.to_string()).collect());
        }

        // Only a first row naming the amount column is a header
        let skip = usize::from(
            rows.first()
                .and_then(|r| r.get(AMOUNT_COLUMN))
                .is_some_and(|cell| cell.eq_ignore_ascii_case(AMOUNT_HEADER)),
        );

        let mut records = Vec::new();
        for (i, row) in rows.iter().enumerate().skip(skip) {
            if row.iter().all(|cell| cell.is_empty()) {
                continue;
            }
            let record = self.parse_row(row).map_err(|e| match e {
                Error::InvalidAmount { value, .. } => Error::InvalidAmount { row: i + 1, value },
                other => Error::InvalidRow {
                    row: i + 1,
                    source: Box::new(other),
                },
            })?;
            records.push(record);
        }
        Ok(records)
    }

    fn parse_row(&self, row: &[String]) -> Result<Record> {
        let raw_amount = row.get(AMOUNT_COLUMN).map(String::as_str).unwrap_or("");
        let amount = parse_amount(raw_amount).ok_or_else(|| Error::InvalidAmount {
            row: 0,
            value: raw_amount.to_string(),
        })?;

        let comment = row.get(COMMENT_COLUMN).cloned().unwrap_or_default();

        let date = match row.get(DATE_COLUMN).map(String::as_str) {
            Some(s) if !s.is_empty() => parse_date(s)?,
            _ => self.today,
        };

        Ok(Record::on(amount, comment, date))
    }
}

fn parse_amount(s: &str) -> Option<Decimal> {
    let cleaned = s.trim();
    let cleaned = cleaned.strip_prefix('+').unwrap_or(cleaned);
    if cleaned.is_empty() {
        return None;
    }
    Decimal::from_str(cleaned)
        .ok()
        .filter(|amount| amount.abs() <= MAX_AMOUNT)
}

#[cfg(test)]
#[path = "csv_import_tests.rs"]
mod tests;
