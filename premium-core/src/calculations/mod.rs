//! Premium calculation modules.
//!
//! This module provides the age-bracketed rate lookup and the premium
//! formula built on top of it.

pub mod common;
pub mod premium;
pub mod rate_table;

pub use premium::{CalculationError, PremiumCalculator};
pub use rate_table::{AgeBracket, RateTable, RateTableError};
