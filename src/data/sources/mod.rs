//! Rate sources
//!
//! A rate source locates and parses a publisher's data and hands the core a
//! list of [`RateRecord`]s. Any I/O or format problem is reported as
//! [`ExchangeRateError::SourceUnavailable`].
//!
//! - ECB XML: the gesmes envelope of `eurofxref-hist-90d.xml`
//! - ECB CSV: the wide `Date,USD,JPY,...` layout of `eurofxref-hist.csv`
//! - JSON: `[{"date": "2018-04-17", "rates": {"SEK": 10.3913}}]`
//! - In-memory: records supplied directly by the caller

pub mod ecb_csv;
pub mod ecb_xml;
pub mod json;
pub mod memory;

pub use ecb_csv::{parse_ecb_csv, EcbCsvSource};
pub use ecb_xml::{parse_ecb_xml, EcbXmlSource};
pub use json::{parse_json_records, JsonRateSource};
pub use memory::InMemoryRateSource;

use crate::currency::Currency;
use crate::data::fx::RateRecord;
use crate::error::{ExchangeRateError, Result};
use std::path::Path;

/// Anything that can produce the full set of dated rate records
pub trait RateSource: Send + Sync {
    /// Load every record the source holds
    fn load(&self) -> Result<Vec<RateRecord>>;

    /// Get the source name
    fn name(&self) -> &str;

    /// Currency the loaded rates are quoted against
    fn anchor(&self) -> Currency {
        Currency::EUR
    }
}

/// Pick a source for `path` by file extension: `.xml`, `.json`, otherwise ECB CSV
pub fn open_source(path: &Path) -> Box<dyn RateSource> {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match ext.as_deref() {
        Some("xml") => Box::new(EcbXmlSource::new(path)),
        Some("json") => Box::new(JsonRateSource::new(path)),
        _ => Box::new(EcbCsvSource::new(path)),
    }
}

/// Parse one published rate value; `N/A` and empty cells mean "not published"
pub(crate) fn parse_rate(raw: &str) -> Result<Option<f64>> {
    let raw = raw.trim();
    if raw.is_empty() || raw.eq_ignore_ascii_case("N/A") {
        return Ok(None);
    }

    raw.parse::<f64>()
        .map(Some)
        .map_err(|_| ExchangeRateError::SourceUnavailable(format!("Invalid rate value: {}", raw)))
}
