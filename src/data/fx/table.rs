//! Immutable in-memory rate table
//!
//! Rates are stored per date in a `BTreeMap`, each date holding the rates of
//! every reported currency relative to the table's anchor currency. The table
//! is validated once on construction and never mutated afterwards.

use super::record::RateRecord;
use crate::currency::Currency;
use crate::data::sources::RateSource;
use crate::error::{ExchangeRateError, Result};
use crate::types::{DateKey, Rate};
use hashbrown::HashMap;
use std::collections::BTreeMap;

/// Point-in-time reference rates keyed by date
///
/// # Example
/// ```
/// use rusty_exchange_rate::data::fx::{RateRecord, RateTable};
/// use rusty_exchange_rate::currency::Currency;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2018, 4, 17).unwrap();
/// let record = RateRecord::anchored(date, Currency::EUR).with_rate(Currency::SEK, 10.3913);
///
/// let table = RateTable::build(vec![record]).unwrap();
/// assert!(table.has_date(date));
/// assert_eq!(table.rate_of(Currency::SEK, date).unwrap(), 10.3913);
/// ```
#[derive(Debug, Clone)]
pub struct RateTable {
    /// date -> (currency -> rate relative to anchor)
    rates: BTreeMap<DateKey, HashMap<Currency, Rate>>,
    anchor: Currency,
}

impl RateTable {
    /// Build a EUR-anchored table, as published by the ECB
    pub fn build<I>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = RateRecord>,
    {
        Self::build_with_anchor(Currency::EUR, records)
    }

    /// Build a table whose rates are expressed against `anchor`
    ///
    /// Every record must carry the anchor at exactly 1.0 and only strictly
    /// positive, finite rates. When two records share a date the later one
    /// replaces the earlier one wholesale.
    pub fn build_with_anchor<I>(anchor: Currency, records: I) -> Result<Self>
    where
        I: IntoIterator<Item = RateRecord>,
    {
        let mut rates = BTreeMap::new();

        for record in records {
            Self::validate_record(anchor, &record)?;

            if rates.insert(record.date, record.rates).is_some() {
                log::warn!(
                    "Duplicate rate record for {}, keeping the later one",
                    record.date
                );
            }
        }

        let table = Self { rates, anchor };
        match (table.first_date(), table.last_date()) {
            (Some(first), Some(last)) => log::info!(
                "Built {}-anchored rate table with {} dates ({} to {})",
                anchor,
                table.len(),
                first,
                last
            ),
            _ => log::info!("Built empty {}-anchored rate table", anchor),
        }

        Ok(table)
    }

    /// Load `source` and express its rates against `anchor`
    ///
    /// Records are validated against the source's own anchor first, then
    /// rebased when `anchor` differs from it.
    pub fn from_source<S: RateSource + ?Sized>(source: &S, anchor: Currency) -> Result<Self> {
        Self::build_with_anchor(source.anchor(), source.load()?)?.rebase(anchor)
    }

    /// Re-express every rate against `anchor`
    ///
    /// Each date's rates are divided by that date's `anchor` rate. A date
    /// without a rate for `anchor` cannot be rebased and fails with
    /// `DataIntegrity`.
    pub fn rebase(self, anchor: Currency) -> Result<Self> {
        if anchor == self.anchor {
            return Ok(self);
        }

        let mut rates = BTreeMap::new();
        for (date, day) in self.rates {
            let divisor = day.get(&anchor).copied().ok_or_else(|| {
                ExchangeRateError::DataIntegrity(format!(
                    "Cannot rebase onto {}: no {} rate on {}",
                    anchor, anchor, date
                ))
            })?;

            let mut rebased: HashMap<Currency, Rate> = day
                .into_iter()
                .map(|(currency, rate)| (currency, rate / divisor))
                .collect();
            rebased.insert(anchor, 1.0);
            rates.insert(date, rebased);
        }

        log::info!("Rebased rate table from {} onto {}", self.anchor, anchor);
        Ok(Self { rates, anchor })
    }

    fn validate_record(anchor: Currency, record: &RateRecord) -> Result<()> {
        match record.rate(anchor) {
            Some(rate) if rate == 1.0 => {}
            Some(rate) => {
                return Err(ExchangeRateError::DataIntegrity(format!(
                    "Anchor {} rate on {} must be 1.0, got {}",
                    anchor, record.date, rate
                )))
            }
            None => {
                return Err(ExchangeRateError::DataIntegrity(format!(
                    "Anchor {} rate missing on {}",
                    anchor, record.date
                )))
            }
        }

        for (currency, rate) in &record.rates {
            if !rate.is_finite() || *rate <= 0.0 {
                return Err(ExchangeRateError::DataIntegrity(format!(
                    "{} rate on {} must be positive, got {}",
                    currency, record.date, rate
                )));
            }
        }

        Ok(())
    }

    /// Currency every rate is expressed against
    pub fn anchor(&self) -> Currency {
        self.anchor
    }

    /// True iff an exact record exists for `date`
    pub fn has_date(&self, date: DateKey) -> bool {
        self.rates.contains_key(&date)
    }

    /// Rate of `currency` relative to the anchor on exactly `at`
    pub fn rate_of(&self, currency: Currency, at: DateKey) -> Result<Rate> {
        self.rates
            .get(&at)
            .and_then(|rates| rates.get(&currency))
            .copied()
            .filter(|rate| *rate > 0.0)
            .ok_or(ExchangeRateError::MissingExchangeRate { currency, date: at })
    }

    /// Full rate mapping for a date
    pub fn record(&self, date: DateKey) -> Option<&HashMap<Currency, Rate>> {
        self.rates.get(&date)
    }

    /// Currencies reported on a date, sorted
    pub fn currencies_on(&self, date: DateKey) -> Vec<Currency> {
        let mut currencies: Vec<Currency> = self
            .rates
            .get(&date)
            .map(|rates| rates.keys().copied().collect())
            .unwrap_or_default();
        currencies.sort();
        currencies
    }

    /// All dates, ascending
    pub fn dates(&self) -> impl Iterator<Item = DateKey> + '_ {
        self.rates.keys().copied()
    }

    pub fn first_date(&self) -> Option<DateKey> {
        self.rates.keys().next().copied()
    }

    pub fn last_date(&self) -> Option<DateKey> {
        self.rates.keys().next_back().copied()
    }

    /// Number of dates
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}
