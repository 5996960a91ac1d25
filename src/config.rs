//! Runtime configuration
//!
//! Read from a TOML file:
//!
//! ```toml
//! data_source = "/srv/rates/eurofxref-hist-90d.xml"
//! max_lookback = 5
//! anchor = "EUR"
//! ```
//!
//! Every field is optional. The default file lives at
//! `~/.rusty-exchange-rate/config.toml`.

use crate::currency::Currency;
use crate::error::{ExchangeRateError, Result};
use crate::types::DEFAULT_MAX_LOOKBACK;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR: &str = ".rusty-exchange-rate";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_data_source")]
    pub data_source: PathBuf,
    #[serde(default = "default_max_lookback")]
    pub max_lookback: usize,
    /// Currency rates are re-expressed against; ECB data is rebased from EUR
    /// and needs this currency published on every date
    #[serde(default = "default_anchor")]
    pub anchor: Currency,
}

fn app_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

fn default_data_source() -> PathBuf {
    app_dir().join("eurofxref-hist-90d.xml")
}

fn default_max_lookback() -> usize {
    DEFAULT_MAX_LOOKBACK
}

fn default_anchor() -> Currency {
    Currency::EUR
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_source: default_data_source(),
            max_lookback: default_max_lookback(),
            anchor: default_anchor(),
        }
    }
}

impl Config {
    /// Default config file location
    pub fn default_path() -> PathBuf {
        app_dir().join("config.toml")
    }

    /// Load configuration
    ///
    /// An explicit `path` must exist and parse. Without one, the default
    /// location is tried and any problem there falls back to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(config_path) => Self::from_file(config_path)?,
            None => {
                let default_config = Self::default_path();
                if default_config.exists() {
                    Self::from_file(&default_config).unwrap_or_else(|e| {
                        log::warn!("Ignoring {}: {}", default_config.display(), e);
                        Config::default()
                    })
                } else {
                    Config::default()
                }
            }
        };

        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            ExchangeRateError::ConfigError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents)
            .map_err(|e| ExchangeRateError::ConfigError(format!("Failed to parse config: {}", e)))
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_lookback == 0 {
            return Err(ExchangeRateError::ConfigError(
                "max_lookback must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
