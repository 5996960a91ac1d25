//! ECB euro foreign exchange reference rates, XML layout
//!
//! This is the format of the ECB's `eurofxref-hist-90d.xml` feed: a gesmes
//! envelope holding one `Cube` per publication date, each with one `Cube` per
//! currency.
//!
//! ```text
//! <gesmes:Envelope ...>
//!   <Cube>
//!     <Cube time="2018-04-17">
//!       <Cube currency="USD" rate="1.2375"/>
//!       <Cube currency="SEK" rate="10.3913"/>
//!     </Cube>
//!   </Cube>
//! </gesmes:Envelope>
//! ```
//!
//! Elements are matched by local name so the default `eurofxref` namespace
//! does not need spelling out. Every rate is quoted against the euro.

use super::{parse_rate, RateSource};
use crate::currency::Currency;
use crate::data::fx::RateRecord;
use crate::error::{ExchangeRateError, Result};
use crate::types::{DateKey, DATE_FORMAT};
use chrono::NaiveDate;
use roxmltree::{Document, Node};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// XML file source in the ECB daily/90-day feed layout
#[derive(Debug, Clone)]
pub struct EcbXmlSource {
    path: PathBuf,
}

impl EcbXmlSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RateSource for EcbXmlSource {
    fn load(&self) -> Result<Vec<RateRecord>> {
        let file = File::open(&self.path).map_err(|e| {
            ExchangeRateError::SourceUnavailable(format!(
                "Failed to open {}: {}",
                self.path.display(),
                e
            ))
        })?;

        let records = parse_ecb_xml(file)?;
        log::debug!("Loaded {} records from {}", records.len(), self.path.display());
        Ok(records)
    }

    fn name(&self) -> &str {
        "ecb-xml"
    }
}

fn is_cube(node: &Node<'_, '_>) -> bool {
    node.is_element() && node.tag_name().name() == "Cube"
}

/// Parse ECB-layout XML from any reader
///
/// Currencies outside the supported set are skipped. Records are
/// EUR-anchored, in document order.
pub fn parse_ecb_xml<R: Read>(mut reader: R) -> Result<Vec<RateRecord>> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|e| ExchangeRateError::SourceUnavailable(format!("Failed to read XML: {}", e)))?;

    let doc = Document::parse(&text)
        .map_err(|e| ExchangeRateError::SourceUnavailable(format!("Invalid XML rates: {}", e)))?;

    let root = doc.root_element();
    if root.tag_name().name() != "Envelope" {
        return Err(ExchangeRateError::SourceUnavailable(format!(
            "Expected gesmes:Envelope root, found {}",
            root.tag_name().name()
        )));
    }

    let mut records = Vec::new();
    for outer in root.children().filter(is_cube) {
        for day in outer.children().filter(is_cube) {
            records.push(parse_day(&day)?);
        }
    }

    Ok(records)
}

fn parse_day(day: &Node<'_, '_>) -> Result<RateRecord> {
    let time = day.attribute("time").ok_or_else(|| {
        ExchangeRateError::SourceUnavailable("Cube without a time attribute".to_string())
    })?;
    let date: DateKey = NaiveDate::parse_from_str(time.trim(), DATE_FORMAT).map_err(|_| {
        ExchangeRateError::SourceUnavailable(format!("Invalid date '{}' in Cube", time))
    })?;

    let mut record = RateRecord::anchored(date, Currency::EUR);
    for cube in day.children().filter(is_cube) {
        let (Some(code), Some(raw)) = (cube.attribute("currency"), cube.attribute("rate")) else {
            return Err(ExchangeRateError::SourceUnavailable(format!(
                "Cube on {} without currency or rate",
                date
            )));
        };

        match Currency::from_code(code) {
            Some(currency) => {
                if let Some(rate) = parse_rate(raw)? {
                    record.rates.insert(currency, rate);
                }
            }
            None => log::debug!("Skipping unsupported currency {}", code),
        }
    }

    Ok(record)
}
