//! FX utilities - currency pairs and batch conversions

use super::resolver::RateResolver;
use crate::currency::Currency;
use crate::error::{ExchangeRateError, Result};
use crate::types::{DateKey, Rate};
use rayon::prelude::*;
use std::fmt;

/// Currency pair representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CurrencyPair {
    pub base: Currency,
    pub counter: Currency,
}

impl CurrencyPair {
    /// Create new currency pair
    pub fn new(base: Currency, counter: Currency) -> Self {
        Self { base, counter }
    }

    /// Get inverse pair
    pub fn inverse(&self) -> Self {
        Self {
            base: self.counter,
            counter: self.base,
        }
    }

    /// Parse from string (e.g., "EUR/SEK" or "EURSEK")
    pub fn from_string(s: &str) -> Result<Self> {
        let (base, counter) = match s.split_once('/') {
            Some(parts) => parts,
            None if s.len() == 6 && s.is_ascii() => s.split_at(3),
            None => return Err(ExchangeRateError::InvalidPair(s.to_string())),
        };

        Ok(Self {
            base: base.trim().parse()?,
            counter: counter.trim().parse()?,
        })
    }
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.base, self.counter)
    }
}

/// Convert many amounts into one target currency on the same date
pub fn convert_amounts(
    resolver: &RateResolver<'_>,
    date: DateKey,
    amounts: &[(f64, Currency)],
    to: Currency,
) -> Result<Vec<f64>> {
    amounts
        .iter()
        .map(|(amount, from)| resolver.convert_amount(date, *amount, *from, to))
        .collect()
}

/// Resolve many (date, pair) requests in parallel
///
/// Results keep the order of `requests`; each entry fails independently.
pub fn convert_many(
    resolver: &RateResolver<'_>,
    requests: &[(DateKey, CurrencyPair)],
) -> Vec<Result<Rate>> {
    requests
        .par_iter()
        .map(|(date, pair)| resolver.convert(*date, pair.base, pair.counter))
        .collect()
}
