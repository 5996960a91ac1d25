//! Core types and constants

use crate::error::{ExchangeRateError, Result};
use chrono::NaiveDate;

/// Calendar date used as the rate table key
pub type DateKey = NaiveDate;

/// Exchange rate relative to the table's anchor currency
pub type Rate = f64;

/// Date format used by the reference rate feed and the CLI
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Default number of dates checked when falling back from a missing date
pub const DEFAULT_MAX_LOOKBACK: usize = 5;

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(s: &str) -> Result<DateKey> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .map_err(|_| ExchangeRateError::InvalidDate(s.to_string()))
}
