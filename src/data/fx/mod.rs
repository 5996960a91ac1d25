//! Foreign Exchange (FX) reference rate system
//!
//! Answers "what is the rate between currency A and currency B on date D"
//! from a table of daily rates anchored to a single currency.
//!
//! # Components
//!
//! - **record**: one date's rates as delivered by a rate source
//! - **table**: validated, immutable date-indexed rate storage
//! - **resolver**: date fallback and cross-rate calculation
//! - **shared**: atomically reloadable table handle
//! - **utils**: currency pairs and batch conversions
//!
//! # Example
//!
//! ```rust
//! use rusty_exchange_rate::data::fx::{RateRecord, RateResolver, RateTable};
//! use rusty_exchange_rate::currency::Currency;
//! use chrono::NaiveDate;
//!
//! let tuesday = NaiveDate::from_ymd_opt(2018, 4, 17).unwrap();
//! let table = RateTable::build(vec![RateRecord::anchored(tuesday, Currency::EUR)
//!     .with_rate(Currency::SEK, 10.3913)
//!     .with_rate(Currency::NOK, 9.598)])
//! .unwrap();
//!
//! let resolver = RateResolver::new(&table);
//!
//! // Saturday falls back to Tuesday, the fifth and last date checked
//! let saturday = NaiveDate::from_ymd_opt(2018, 4, 21).unwrap();
//! let rate = resolver.convert(saturday, Currency::SEK, Currency::NOK).unwrap();
//! assert!((rate - 9.598 / 10.3913).abs() < 1e-9);
//! ```

pub mod record;
pub mod resolver;
pub mod shared;
pub mod table;
pub mod utils;

pub use record::RateRecord;
pub use resolver::{Quote, RateResolver};
pub use shared::SharedRateTable;
pub use table::RateTable;
pub use utils::{convert_amounts, convert_many, CurrencyPair};
