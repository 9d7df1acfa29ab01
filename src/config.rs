//! Mining configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FpError, Result};

pub const DEFAULT_MIN_SUPPORT: f64 = 0.5;

/// Parameters for one mining run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MiningConfig {
    /// Minimum support as a fraction of all transactions, in `(0, 1]`.
    pub min_support: f64,
}

impl Default for MiningConfig {
    fn default() -> Self {
        Self {
            min_support: DEFAULT_MIN_SUPPORT,
        }
    }
}

impl MiningConfig {
    pub fn new(min_support: f64) -> Result<Self> {
        let config = Self { min_support };
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)
            .map_err(|e| FpError::invalid_config("config", e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|_| FpError::ConfigNotFound {
            path: path.to_path_buf(),
        })?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.min_support.is_finite() || self.min_support <= 0.0 || self.min_support > 1.0 {
            return Err(FpError::invalid_config(
                "min_support",
                format!("expected a fraction in (0, 1], got {}", self.min_support),
            ));
        }
        Ok(())
    }

    /// `ceil(total_transactions * min_support)`.
    ///
    /// A product within a few ulps of an integer is that integer: `100 * 0.07`
    /// evaluates to `7.000000000000001` and must still give 7.
    pub fn min_count(&self, total_transactions: usize) -> usize {
        let raw = total_transactions as f64 * self.min_support;
        let nearest = raw.round();
        if (raw - nearest).abs() <= raw.abs() * f64::EPSILON * 4.0 {
            nearest as usize
        } else {
            raw.ceil() as usize
        }
    }
}
