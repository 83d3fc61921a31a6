//! Age-bracketed premium rates.
//!
//! Rates are quoted per [`RateTable::unit`] of outstanding loan per year of
//! coverage. Brackets are checked in ascending order and the first one whose
//! `max_age` is at or above the applicant's age wins; older applicants get the
//! fallback rate.
//!
//! | Age <= | Rate |
//! |--------|------|
//! | 60     | 790  |
//! | 65     | 1390 |
//! | 70     | 1680 |
//! | else   | 1800 |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use premium_core::calculations::RateTable;
//!
//! let table = RateTable::default();
//!
//! assert_eq!(table.rate_for_age(dec!(60)), dec!(790));
//! assert_eq!(table.rate_for_age(dec!(61)), dec!(1390));
//! assert_eq!(table.rate_for_age(dec!(74)), dec!(1800));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors found while validating a [`RateTable`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RateTableError {
    /// Bracket ages must increase strictly from one bracket to the next.
    #[error("bracket ages must be strictly ascending, {current} follows {previous}")]
    UnorderedBrackets { previous: Decimal, current: Decimal },

    /// Every rate, including the fallback, must be above zero.
    #[error("rate must be positive, got {0}")]
    NonPositiveRate(Decimal),

    /// The loan amount a rate is quoted against must be above zero.
    #[error("rate unit must be positive, got {0}")]
    NonPositiveUnit(Decimal),
}

/// Rate applied to every age up to and including `max_age`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeBracket {
    pub max_age: Decimal,
    pub rate: Decimal,
}

impl AgeBracket {
    pub fn new(
        max_age: impl Into<Decimal>,
        rate: impl Into<Decimal>,
    ) -> Self {
        Self {
            max_age: max_age.into(),
            rate: rate.into(),
        }
    }
}

/// Piecewise-constant mapping from age to annual rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RateTable {
    /// Loan amount each rate is quoted against.
    pub unit: Decimal,

    /// Brackets in ascending `max_age` order.
    pub brackets: Vec<AgeBracket>,

    /// Rate for ages above the last bracket.
    pub fallback_rate: Decimal,
}

impl Default for RateTable {
    fn default() -> Self {
        Self {
            unit: Decimal::from(100_000),
            brackets: vec![
                AgeBracket::new(60, 790),
                AgeBracket::new(65, 1390),
                AgeBracket::new(70, 1680),
            ],
            fallback_rate: Decimal::from(1800),
        }
    }
}

impl RateTable {
    /// Returns the rate of the first bracket covering `age`.
    pub fn rate_for_age(
        &self,
        age: Decimal,
    ) -> Decimal {
        self.brackets
            .iter()
            .find(|bracket| age <= bracket.max_age)
            .map_or(self.fallback_rate, |bracket| bracket.rate)
    }

    /// Checks that brackets ascend and that every rate and the unit are positive.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use premium_core::calculations::{AgeBracket, RateTable, RateTableError};
    ///
    /// let table = RateTable {
    ///     brackets: vec![AgeBracket::new(65, 1390), AgeBracket::new(60, 790)],
    ///     ..RateTable::default()
    /// };
    ///
    /// assert_eq!(
    ///     table.validate(),
    ///     Err(RateTableError::UnorderedBrackets { previous: dec!(65), current: dec!(60) })
    /// );
    /// ```
    pub fn validate(&self) -> Result<(), RateTableError> {
        if self.unit <= Decimal::ZERO {
            return Err(RateTableError::NonPositiveUnit(self.unit));
        }
        for pair in self.brackets.windows(2) {
            if pair[1].max_age <= pair[0].max_age {
                return Err(RateTableError::UnorderedBrackets {
                    previous: pair[0].max_age,
                    current: pair[1].max_age,
                });
            }
        }
        if let Some(bracket) = self.brackets.iter().find(|b| b.rate <= Decimal::ZERO) {
            return Err(RateTableError::NonPositiveRate(bracket.rate));
        }
        if self.fallback_rate <= Decimal::ZERO {
            return Err(RateTableError::NonPositiveRate(self.fallback_rate));
        }
        Ok(())
    }
}
