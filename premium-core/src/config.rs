//! Estimator configuration.
//!
//! Every section is optional when deserialized; missing values fall back to
//! the published defaults.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calculations::{RateTable, RateTableError};
use crate::models::{Field, FieldLimits};

/// Errors found while validating an [`EstimatorConfig`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A field's minimum is greater than its maximum.
    #[error("{field} range is inverted: min {min} is greater than max {max}")]
    InvertedRange {
        field: Field,
        min: Decimal,
        max: Decimal,
    },

    /// A field's minimum is below zero.
    #[error("{field} minimum must not be negative, got {min}")]
    NegativeMinimum { field: Field, min: Decimal },

    #[error("currency label must not be empty")]
    EmptyCurrencyLabel,

    #[error("invalid rate table: {0}")]
    RateTable(#[from] RateTableError),
}

/// How results and inputs are shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Rewrite the loan amount input with grouping separators as it is typed.
    pub live_grouping: bool,

    /// Label printed after amounts.
    pub currency_label: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            live_grouping: true,
            currency_label: "baht".to_string(),
        }
    }
}

/// Complete configuration for a [`crate::PremiumEstimator`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorConfig {
    pub limits: FieldLimits,
    pub rate_table: RateTable,
    pub display: DisplayConfig,
}

impl EstimatorConfig {
    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if:
    /// - any field range has `min > max`
    /// - any field minimum is negative
    /// - the currency label is blank
    /// - the rate table is invalid (see [`RateTable::validate`])
    pub fn validate(&self) -> Result<(), ConfigError> {
        for field in Field::ALL {
            let range = self.limits.for_field(field);
            if range.min > range.max {
                return Err(ConfigError::InvertedRange {
                    field,
                    min: range.min,
                    max: range.max,
                });
            }
            if range.min < Decimal::ZERO {
                return Err(ConfigError::NegativeMinimum {
                    field,
                    min: range.min,
                });
            }
        }
        if self.display.currency_label.trim().is_empty() {
            return Err(ConfigError::EmptyCurrencyLabel);
        }
        self.rate_table.validate()?;
        Ok(())
    }
}
