//! Configuration structures for the auction evaluator.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Largest number of decimal places a report may use.
pub const MAX_DECIMAL_PLACES: u32 = 10;

/// Main configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Report formatting configuration.
    pub report: ReportConfig,
}

impl Config {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that all values are within range.
    pub fn validate(&self) -> Result<()> {
        self.report.validate()
    }
}

/// Formatting options for evaluation reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Symbol printed in front of monetary values.
    pub currency_symbol: String,
    /// Decimal places used for monetary values.
    pub decimal_places: u32,
}

impl ReportConfig {
    /// Check that all values are within range.
    pub fn validate(&self) -> Result<()> {
        if self.decimal_places > MAX_DECIMAL_PLACES {
            return Err(Error::config(format!(
                "decimal_places must be at most {}, got {}",
                MAX_DECIMAL_PLACES, self.decimal_places
            )));
        }
        Ok(())
    }

    /// Format a monetary amount.
    pub fn format_amount(&self, amount: f64) -> String {
        format!(
            "{}{:.*}",
            self.currency_symbol, self.decimal_places as usize, amount
        )
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            decimal_places: 2,
        }
    }
}
