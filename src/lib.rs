//! # rusty_exchange_rate
//!
//! Currency conversion from historical daily reference rates, such as the ECB
//! euro foreign exchange reference rates.
//!
//! Rates are loaded once into an immutable [`RateTable`](data::fx::RateTable)
//! and queried through a [`RateResolver`](data::fx::RateResolver), which falls
//! back to the closest earlier date when the requested one was not published
//! (weekends, holidays).
//!
//! ## Example
//!
//! ```rust
//! use rusty_exchange_rate::prelude::*;
//! use chrono::NaiveDate;
//!
//! let date = NaiveDate::from_ymd_opt(2018, 4, 17).unwrap();
//! let table = RateTable::build(vec![RateRecord::anchored(date, Currency::EUR)
//!     .with_rate(Currency::SEK, 10.3913)
//!     .with_rate(Currency::NOK, 9.598)])
//! .unwrap();
//!
//! let rate = RateResolver::new(&table)
//!     .convert(date, Currency::EUR, Currency::NOK)
//!     .unwrap();
//! assert!((rate - 9.598).abs() < 1e-4);
//! ```

pub mod config;
pub mod currency;
pub mod data;
pub mod error;
pub mod types;

pub mod prelude {
    //! Commonly used types and traits
    pub use crate::currency::Currency;
    pub use crate::data::fx::{CurrencyPair, Quote, RateRecord, RateResolver, RateTable, SharedRateTable};
    pub use crate::data::sources::{open_source, RateSource};
    pub use crate::error::{ExchangeRateError, Result};
    pub use crate::types::*;
}
