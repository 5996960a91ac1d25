//! Dated rate records supplied by a rate source

use crate::currency::Currency;
use crate::types::{DateKey, Rate};
use hashbrown::HashMap;

/// All rates published for one date, relative to the anchor currency
#[derive(Debug, Clone, PartialEq)]
pub struct RateRecord {
    pub date: DateKey,
    pub rates: HashMap<Currency, Rate>,
}

impl RateRecord {
    /// Create an empty record
    pub fn new(date: DateKey) -> Self {
        Self {
            date,
            rates: HashMap::new(),
        }
    }

    /// Create a record seeded with the anchor's own 1.0 rate
    pub fn anchored(date: DateKey, anchor: Currency) -> Self {
        let mut record = Self::new(date);
        record.rates.insert(anchor, 1.0);
        record
    }

    /// Builder-style insert
    pub fn with_rate(mut self, currency: Currency, rate: Rate) -> Self {
        self.rates.insert(currency, rate);
        self
    }

    /// Rate for a currency, if reported
    pub fn rate(&self, currency: Currency) -> Option<Rate> {
        self.rates.get(&currency).copied()
    }
}
