//! Caller-supplied records

use super::RateSource;
use crate::currency::Currency;
use crate::data::fx::RateRecord;
use crate::error::Result;

/// Rate source backed by a vector of records
///
/// Records are taken to be EUR-anchored unless [`with_anchor`] says otherwise.
///
/// [`with_anchor`]: InMemoryRateSource::with_anchor
#[derive(Debug, Clone)]
pub struct InMemoryRateSource {
    records: Vec<RateRecord>,
    anchor: Currency,
}

impl Default for InMemoryRateSource {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl InMemoryRateSource {
    pub fn new(records: Vec<RateRecord>) -> Self {
        Self {
            records,
            anchor: Currency::EUR,
        }
    }

    /// Currency the supplied records are quoted against
    pub fn with_anchor(mut self, anchor: Currency) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn push(&mut self, record: RateRecord) {
        self.records.push(record);
    }
}

impl RateSource for InMemoryRateSource {
    fn load(&self) -> Result<Vec<RateRecord>> {
        Ok(self.records.clone())
    }

    fn name(&self) -> &str {
        "memory"
    }

    fn anchor(&self) -> Currency {
        self.anchor
    }
}
