//! Error types for rusty_exchange_rate

use crate::currency::Currency;
use chrono::NaiveDate;
use thiserror::Error;

/// Main error type for rate lookups and table construction
#[derive(Error, Debug)]
pub enum ExchangeRateError {
    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("{0} is not supported")]
    UnknownCurrency(String),

    #[error("Invalid currency pair format: {0}")]
    InvalidPair(String),

    #[error("Foreign exchange reference rate for {0} is missing")]
    MissingDate(NaiveDate),

    #[error("Foreign exchange reference rate for {currency} is missing on {date}")]
    MissingExchangeRate { currency: Currency, date: NaiveDate },

    #[error("Data integrity error: {0}")]
    DataIntegrity(String),

    #[error("Rate source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl ExchangeRateError {
    /// Currency named by a currency-related error, if any
    pub fn currency_code(&self) -> Option<&str> {
        match self {
            ExchangeRateError::UnknownCurrency(code) => Some(code.as_str()),
            ExchangeRateError::MissingExchangeRate { currency, .. } => Some(currency.as_str()),
            _ => None,
        }
    }
}

/// Result type alias for rusty_exchange_rate operations
pub type Result<T> = std::result::Result<T, ExchangeRateError>;
