//! Cross-rate resolution with date fallback
//!
//! ECB reference rates are not published on weekends or TARGET holidays, so a
//! requested date may have no record. The resolver walks backwards one day at
//! a time, for a bounded number of checks, to find the closest earlier date.

use super::table::RateTable;
use crate::currency::Currency;
use crate::error::{ExchangeRateError, Result};
use crate::types::{parse_date, DateKey, Rate, DEFAULT_MAX_LOOKBACK};
use chrono::Days;
use serde::Serialize;

/// A resolved cross rate together with the dates involved
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Quote {
    pub base: Currency,
    pub counter: Currency,
    /// Date the caller asked for
    pub requested: DateKey,
    /// Date whose rates were used
    pub effective: DateKey,
    /// Units of `counter` per unit of `base`
    pub rate: Rate,
}

impl Quote {
    /// True when the rates came from an earlier date than requested
    pub fn is_fallback(&self) -> bool {
        self.requested != self.effective
    }
}

/// Resolves dates and cross rates against a borrowed [`RateTable`]
///
/// # Example
/// ```
/// use rusty_exchange_rate::data::fx::{RateRecord, RateResolver, RateTable};
/// use rusty_exchange_rate::currency::Currency;
/// use chrono::NaiveDate;
///
/// let tuesday = NaiveDate::from_ymd_opt(2018, 4, 17).unwrap();
/// let table = RateTable::build(vec![
///     RateRecord::anchored(tuesday, Currency::EUR).with_rate(Currency::SEK, 10.3913),
/// ])
/// .unwrap();
///
/// let resolver = RateResolver::new(&table);
/// let rate = resolver.convert(tuesday, Currency::EUR, Currency::SEK).unwrap();
/// assert!((rate - 10.3913).abs() < 1e-4);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RateResolver<'a> {
    table: &'a RateTable,
    max_lookback: usize,
}

impl<'a> RateResolver<'a> {
    pub fn new(table: &'a RateTable) -> Self {
        Self {
            table,
            max_lookback: DEFAULT_MAX_LOOKBACK,
        }
    }

    /// Set the total number of dates checked, the requested date included
    pub fn with_max_lookback(mut self, max_lookback: usize) -> Self {
        self.max_lookback = max_lookback;
        self
    }

    pub fn max_lookback(&self) -> usize {
        self.max_lookback
    }

    pub fn table(&self) -> &'a RateTable {
        self.table
    }

    /// Closest date at or before `requested` that has a record
    ///
    /// Checks `requested` and then up to `max_lookback - 1` earlier days.
    pub fn resolve_date(&self, requested: DateKey) -> Result<DateKey> {
        let mut candidate = Some(requested);

        for _ in 0..self.max_lookback {
            let Some(date) = candidate else { break };

            if self.table.has_date(date) {
                if date != requested {
                    log::warn!(
                        "No reference rates for {}, using {} instead",
                        requested,
                        date
                    );
                }
                return Ok(date);
            }

            candidate = date.checked_sub_days(Days::new(1));
        }

        Err(ExchangeRateError::MissingDate(requested))
    }

    /// Units of `counter` per unit of `base` on `requested` (or the fallback date)
    pub fn convert(&self, requested: DateKey, base: Currency, counter: Currency) -> Result<Rate> {
        self.quote(requested, base, counter).map(|quote| quote.rate)
    }

    /// Like [`convert`](Self::convert), also reporting the effective date
    pub fn quote(&self, requested: DateKey, base: Currency, counter: Currency) -> Result<Quote> {
        let effective = self.resolve_date(requested)?;

        let rate = if base == counter {
            // Still fails when the currency is missing on that date
            self.table.rate_of(base, effective)?;
            1.0
        } else {
            1.0 / self.table.rate_of(base, effective)? * self.table.rate_of(counter, effective)?
        };

        Ok(Quote {
            base,
            counter,
            requested,
            effective,
            rate,
        })
    }

    /// String entry point: validates base, then counter, then the date
    pub fn convert_codes(&self, requested: &str, base: &str, counter: &str) -> Result<Rate> {
        let base: Currency = base.parse()?;
        let counter: Currency = counter.parse()?;
        let requested = parse_date(requested)?;

        self.convert(requested, base, counter)
    }

    /// Convert an amount of `base` into `counter`
    pub fn convert_amount(
        &self,
        requested: DateKey,
        amount: f64,
        base: Currency,
        counter: Currency,
    ) -> Result<f64> {
        Ok(amount * self.convert(requested, base, counter)?)
    }

    /// Every rate reported on the resolved date, against the anchor
    pub fn rates_on(&self, requested: DateKey) -> Result<(DateKey, Vec<(Currency, Rate)>)> {
        let effective = self.resolve_date(requested)?;
        let rates = self
            .table
            .currencies_on(effective)
            .into_iter()
            .map(|currency| Ok((currency, self.table.rate_of(currency, effective)?)))
            .collect::<Result<Vec<_>>>()?;

        Ok((effective, rates))
    }
}
