//! CSV ingest.
//!
//! Turns the cached `date,count` CSV into an ordered `Vec<Record>`.
//!
//! - the header row is skipped, not validated; columns are read by position
//! - rows keep file order (the series is chronological as published)
//! - any malformed row aborts the load with its line number

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use csv::StringRecord;
use log::debug;

use crate::domain::Record;
use crate::error::AppError;

const DATE_COLUMN: usize = 0;
const COUNT_COLUMN: usize = 1;

/// Load every row of the CSV at `path`.
pub fn load_records(path: &Path) -> Result<Vec<Record>, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::io(format!("Failed to open CSV '{}': {e}", path.display())))?;
    let records = read_records(file)?;
    debug!("Loaded {} rows from {}", records.len(), path.display());
    Ok(records)
}

/// Parse `date,count` rows from any reader (header row expected).
pub fn read_records<R: Read>(reader: R) -> Result<Vec<Record>, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| AppError::parse(format!("Failed to read CSV headers: {e}")))?;
    debug!(
        "CSV columns: {:?}",
        headers.iter().map(normalize_header_name).collect::<Vec<_>>()
    );

    let mut out = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        // records() starts after the header, and lines are 1-based.
        let line = idx + 2;
        let record = result.map_err(|e| AppError::parse(format!("CSV parse error on line {line}: {e}")))?;
        out.push(parse_row(&record).map_err(|e| AppError::parse(format!("Line {line}: {e}")))?);
    }

    Ok(out)
}

fn normalize_header_name(name: &str) -> String {
    // UTF-8 CSVs written by spreadsheet tools may carry a BOM on the first header.
    name.trim().trim_start_matches('\u{feff}').to_lowercase()
}

fn parse_row(record: &StringRecord) -> Result<Record, String> {
    let date_raw = record
        .get(DATE_COLUMN)
        .ok_or_else(|| "missing date column".to_string())?;
    let count_raw = record
        .get(COUNT_COLUMN)
        .ok_or_else(|| "missing count column".to_string())?;

    Ok(Record {
        date: parse_date(date_raw)?,
        count: count_raw
            .parse::<f64>()
            .map_err(|e| format!("invalid count '{count_raw}': {e}"))?,
    })
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    let s = s.trim_start_matches('\u{feff}');
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| format!("invalid date '{s}' (expected YYYY-MM-DD): {e}"))
}
