//! Supported currency codes

use crate::error::{ExchangeRateError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Currency enumeration (ISO 4217 codes)
///
/// This is the full allow-list of currencies the rate table accepts. Codes
/// outside it are rejected with [`ExchangeRateError::UnknownCurrency`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Currency {
    /// Euro
    EUR,
    /// Swedish Krona
    SEK,
    /// Norwegian Krone
    NOK,
    /// Danish Krone
    DKK,
    /// US Dollar
    USD,
    /// British Pound Sterling
    GBP,
    /// Swiss Franc
    CHF,
    /// Japanese Yen
    JPY,
}

impl Currency {
    /// Every supported currency, in declaration order
    pub const ALL: [Currency; 8] = [
        Currency::EUR,
        Currency::SEK,
        Currency::NOK,
        Currency::DKK,
        Currency::USD,
        Currency::GBP,
        Currency::CHF,
        Currency::JPY,
    ];

    /// Get ISO 4217 code
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::EUR => "EUR",
            Currency::SEK => "SEK",
            Currency::NOK => "NOK",
            Currency::DKK => "DKK",
            Currency::USD => "USD",
            Currency::GBP => "GBP",
            Currency::CHF => "CHF",
            Currency::JPY => "JPY",
        }
    }

    /// Get currency symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::EUR => "€",
            Currency::SEK => "kr",
            Currency::NOK => "kr",
            Currency::DKK => "kr.",
            Currency::USD => "$",
            Currency::GBP => "£",
            Currency::CHF => "CHF",
            Currency::JPY => "¥",
        }
    }

    /// Parse from ISO code, returning `None` for unsupported codes
    ///
    /// Codes are matched exactly; `"eur"` is not a supported code.
    pub fn from_code(code: &str) -> Option<Self> {
        Currency::ALL.iter().copied().find(|c| c.as_str() == code)
    }

    /// True if `code` is on the allow-list
    pub fn is_supported(code: &str) -> bool {
        Currency::from_code(code).is_some()
    }
}

impl FromStr for Currency {
    type Err = ExchangeRateError;

    fn from_str(s: &str) -> Result<Self> {
        Currency::from_code(s).ok_or_else(|| ExchangeRateError::UnknownCurrency(s.to_string()))
    }
}

impl TryFrom<String> for Currency {
    type Error = ExchangeRateError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Currency> for String {
    fn from(currency: Currency) -> Self {
        currency.as_str().to_string()
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
