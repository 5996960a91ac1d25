//! ECB euro foreign exchange reference rates, CSV layout
//!
//! One header row naming the currencies, then one row per publication date:
//!
//! ```text
//! Date,USD,JPY,NOK,SEK,
//! 2018-04-17,1.2375,132.58,9.598,10.3913,
//! ```
//!
//! The ECB leaves a trailing comma on every line and writes `N/A` for
//! currencies it did not publish that day. Every rate is quoted against the
//! euro, so each row gets EUR's 1.0 entry added.

use super::{parse_rate, RateSource};
use crate::currency::Currency;
use crate::data::fx::RateRecord;
use crate::error::{ExchangeRateError, Result};
use crate::types::{DateKey, DATE_FORMAT};
use chrono::NaiveDate;
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// CSV file source in the ECB historical layout
#[derive(Debug, Clone)]
pub struct EcbCsvSource {
    path: PathBuf,
}

impl EcbCsvSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RateSource for EcbCsvSource {
    fn load(&self) -> Result<Vec<RateRecord>> {
        let file = File::open(&self.path).map_err(|e| {
            ExchangeRateError::SourceUnavailable(format!(
                "Failed to open {}: {}",
                self.path.display(),
                e
            ))
        })?;

        let records = parse_ecb_csv(file)?;
        log::debug!("Loaded {} records from {}", records.len(), self.path.display());
        Ok(records)
    }

    fn name(&self) -> &str {
        "ecb-csv"
    }
}

/// Parse ECB-layout CSV from any reader
///
/// Columns for currencies outside the supported set are skipped. Records are
/// EUR-anchored.
pub fn parse_ecb_csv<R: Read>(reader: R) -> Result<Vec<RateRecord>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = rdr
        .headers()
        .map_err(|e| ExchangeRateError::SourceUnavailable(format!("Failed to read headers: {}", e)))?
        .clone();

    let date_idx = headers
        .iter()
        .position(|h| h.eq_ignore_ascii_case("date"))
        .ok_or_else(|| ExchangeRateError::SourceUnavailable("Column 'Date' not found".to_string()))?;

    let mut columns: Vec<(usize, Currency)> = Vec::new();
    for (idx, header) in headers.iter().enumerate() {
        if idx == date_idx || header.is_empty() {
            continue;
        }
        match Currency::from_code(header) {
            Some(currency) => columns.push((idx, currency)),
            None => log::debug!("Skipping unsupported currency column {}", header),
        }
    }

    let mut records = Vec::new();
    for (row, result) in rdr.records().enumerate() {
        let line = row + 2;
        let record = result.map_err(|e| {
            ExchangeRateError::SourceUnavailable(format!("Failed to read line {}: {}", line, e))
        })?;

        let date_str = record.get(date_idx).unwrap_or_default();
        let date: DateKey = NaiveDate::parse_from_str(date_str, DATE_FORMAT).map_err(|_| {
            ExchangeRateError::SourceUnavailable(format!(
                "Invalid date '{}' at line {}",
                date_str, line
            ))
        })?;

        let mut parsed = RateRecord::anchored(date, Currency::EUR);
        for (idx, currency) in &columns {
            if let Some(rate) = parse_rate(record.get(*idx).unwrap_or_default())? {
                parsed.rates.insert(*currency, rate);
            }
        }

        records.push(parsed);
    }

    Ok(records)
}
