//! JSON rate records
//!
//! ```json
//! [
//!   {"date": "2018-04-17", "rates": {"SEK": 10.3913, "NOK": 9.598, "USD": null}}
//! ]
//! ```
//!
//! `null` rates and unsupported codes are left out of the record. Rates are
//! EUR-based, the way the ECB publishes them; EUR's 1.0 entry is added when
//! the file does not list it.

use super::RateSource;
use crate::currency::Currency;
use crate::data::fx::RateRecord;
use crate::error::{ExchangeRateError, Result};
use crate::types::DateKey;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
struct JsonRecord {
    date: DateKey,
    rates: BTreeMap<String, Option<f64>>,
}

/// JSON file source
#[derive(Debug, Clone)]
pub struct JsonRateSource {
    path: PathBuf,
}

impl JsonRateSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RateSource for JsonRateSource {
    fn load(&self) -> Result<Vec<RateRecord>> {
        let file = File::open(&self.path).map_err(|e| {
            ExchangeRateError::SourceUnavailable(format!(
                "Failed to open {}: {}",
                self.path.display(),
                e
            ))
        })?;

        parse_json_records(BufReader::new(file))
    }

    fn name(&self) -> &str {
        "json"
    }
}

/// Parse a JSON array of dated rate objects
pub fn parse_json_records<R: Read>(reader: R) -> Result<Vec<RateRecord>> {
    let raw: Vec<JsonRecord> = serde_json::from_reader(reader)
        .map_err(|e| ExchangeRateError::SourceUnavailable(format!("Invalid JSON rates: {}", e)))?;

    let records = raw
        .into_iter()
        .map(|entry| {
            let mut record = RateRecord::anchored(entry.date, Currency::EUR);
            for (code, rate) in entry.rates {
                match (Currency::from_code(&code), rate) {
                    (Some(currency), Some(rate)) => {
                        record.rates.insert(currency, rate);
                    }
                    (Some(_), None) => {}
                    (None, _) => log::debug!("Skipping unsupported currency {}", code),
                }
            }
            record
        })
        .collect();

    Ok(records)
}
