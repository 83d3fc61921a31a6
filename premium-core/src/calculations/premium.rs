//! Premium formula.
//!
//! ```text
//! premium = (loan_amount / unit) × rate_for_age(age) × coverage_period
//! ```
//!
//! rounded half-up to two decimal places.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use premium_core::calculations::{PremiumCalculator, RateTable};
//!
//! let calculator = PremiumCalculator::new(RateTable::default());
//!
//! assert_eq!(calculator.calculate(dec!(65), dec!(200000), dec!(2)), Ok(dec!(5560.00)));
//! ```

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::debug;

use crate::calculations::RateTable;
use crate::calculations::common::round_half_up;
use crate::models::PremiumQuote;

/// Errors returned by [`PremiumCalculator`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CalculationError {
    /// The premium does not fit in a [`Decimal`].
    #[error(
        "premium for a loan of {loan_amount} over {coverage_period} years at rate {rate} is too large"
    )]
    Overflow {
        loan_amount: Decimal,
        coverage_period: Decimal,
        rate: Decimal,
    },
}

/// Computes premiums from a [`RateTable`].
///
/// Inputs are not re-validated here: callers pass values that already
/// satisfy the field limits and are non-zero.
#[derive(Debug, Clone, Default)]
pub struct PremiumCalculator {
    rate_table: RateTable,
}

impl PremiumCalculator {
    pub fn new(rate_table: RateTable) -> Self {
        Self { rate_table }
    }

    pub fn rate_table(&self) -> &RateTable {
        &self.rate_table
    }

    /// Returns the premium rounded to two decimal places.
    ///
    /// # Errors
    ///
    /// Returns [`CalculationError::Overflow`] when the product does not fit
    /// in a [`Decimal`].
    pub fn calculate(
        &self,
        age: Decimal,
        loan_amount: Decimal,
        coverage_period: Decimal,
    ) -> Result<Decimal, CalculationError> {
        Ok(self.quote(age, loan_amount, coverage_period)?.premium)
    }

    /// Returns the premium along with the selected rate and the inputs.
    ///
    /// # Errors
    ///
    /// See [`PremiumCalculator::calculate`].
    pub fn quote(
        &self,
        age: Decimal,
        loan_amount: Decimal,
        coverage_period: Decimal,
    ) -> Result<PremiumQuote, CalculationError> {
        let rate = self.rate_table.rate_for_age(age);
        let overflow = || CalculationError::Overflow {
            loan_amount,
            coverage_period,
            rate,
        };
        let raw = loan_amount
            .checked_div(self.rate_table.unit)
            .and_then(|units| units.checked_mul(rate))
            .and_then(|annual| annual.checked_mul(coverage_period))
            .ok_or_else(overflow)?;
        let premium = round_half_up(raw);

        debug!(%age, %loan_amount, %coverage_period, %rate, %premium, "premium calculated");

        Ok(PremiumQuote {
            age,
            loan_amount,
            coverage_period,
            rate,
            premium,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn calculator() -> PremiumCalculator {
        PremiumCalculator::new(RateTable::default())
    }

    #[test]
    fn calculate_youngest_bracket_single_year() {
        let result = calculator().calculate(dec!(60), dec!(100000), dec!(1)).unwrap();

        assert_eq!(result, dec!(790.00));
    }

    #[test]
    fn calculate_second_bracket_two_years() {
        let result = calculator().calculate(dec!(65), dec!(200000), dec!(2)).unwrap();

        assert_eq!(result, dec!(5560.00));
    }

    #[test]
    fn calculate_maximum_inputs() {
        let result = calculator().calculate(dec!(74), dec!(3000000), dec!(3)).unwrap();

        assert_eq!(result, dec!(162000.00));
    }

    #[test]
    fn calculate_always_carries_two_decimal_digits() {
        let result = calculator().calculate(dec!(74), dec!(3000000), dec!(3)).unwrap();

        assert_eq!(result.to_string(), "162000.00");
    }

    #[test]
    fn calculate_rounds_fractional_cents_half_up() {
        // 1 / 100000 × 790 × 1 = 0.0079
        let result = calculator().calculate(dec!(30), dec!(1), dec!(1)).unwrap();

        assert_eq!(result, dec!(0.01));
    }

    #[test]
    fn calculate_handles_loan_amounts_off_the_unit() {
        // 123456 / 100000 × 1680 × 1 = 2074.0608
        let result = calculator().calculate(dec!(70), dec!(123456), dec!(1)).unwrap();

        assert_eq!(result, dec!(2074.06));
    }

    #[test]
    fn quote_reports_selected_rate() {
        let quote = calculator().quote(dec!(66), dec!(100000), dec!(1)).unwrap();

        assert_eq!(quote.rate, dec!(1680));
        assert_eq!(quote.premium, dec!(1680.00));
        assert_eq!(quote.display_premium(), "1,680.00");
    }

    #[test]
    fn calculate_uses_custom_unit() {
        let table = RateTable {
            unit: dec!(1000),
            ..RateTable::default()
        };

        let result = PremiumCalculator::new(table)
            .calculate(dec!(40), dec!(2000), dec!(1))
            .unwrap();

        assert_eq!(result, dec!(1580.00));
    }

    #[test]
    fn calculate_reports_overflow_instead_of_panicking() {
        let table = RateTable {
            unit: dec!(1),
            ..RateTable::default()
        };

        let result = PremiumCalculator::new(table).calculate(dec!(40), Decimal::MAX, dec!(3));

        assert_eq!(
            result,
            Err(CalculationError::Overflow {
                loan_amount: Decimal::MAX,
                coverage_period: dec!(3),
                rate: dec!(790),
            })
        );
    }
}
