//! Field-level range validation.
//!
//! Each field is checked on its own against its declared range; no rule looks
//! at more than one field.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::format::parse_amount;
use crate::messages;
use crate::models::{Field, FieldLimits, FieldRange};

/// A parsed value lies outside its field's range.
///
/// Displays as the inline message shown next to the field.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct RangeError {
    pub field: Field,
    pub value: Decimal,
    pub range: FieldRange,
    message: String,
}

impl RangeError {
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Checks raw field input against [`FieldLimits`].
#[derive(Debug, Clone)]
pub struct Validator {
    limits: FieldLimits,
    currency_label: String,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(FieldLimits::default(), "baht")
    }
}

impl Validator {
    pub fn new(
        limits: FieldLimits,
        currency_label: impl Into<String>,
    ) -> Self {
        Self {
            limits,
            currency_label: currency_label.into(),
        }
    }

    pub fn limits(&self) -> &FieldLimits {
        &self.limits
    }

    /// Checks an already parsed value.
    pub fn check(
        &self,
        field: Field,
        value: Decimal,
    ) -> Result<(), RangeError> {
        let range = self.limits.for_field(field);
        if range.contains(value) {
            return Ok(());
        }
        Err(RangeError {
            field,
            value,
            range: *range,
            message: messages::out_of_range(field, range, &self.currency_label),
        })
    }

    /// Returns the inline error for `raw`, or an empty string when it is valid.
    ///
    /// Separators are stripped before comparing, and blank input counts as
    /// zero.
    ///
    /// # Example
    ///
    /// ```
    /// use premium_core::{Field, Validator};
    ///
    /// let validator = Validator::default();
    ///
    /// assert_eq!(validator.validate(Field::LoanAmount, "3,000,000"), "");
    /// assert!(!validator.validate(Field::LoanAmount, "3,000,001").is_empty());
    /// ```
    pub fn validate(
        &self,
        field: Field,
        raw: &str,
    ) -> String {
        match self.check(field, parse_amount(raw)) {
            Ok(()) => String::new(),
            Err(e) => e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // age
    // =========================================================================

    #[test]
    fn age_boundaries_are_inclusive() {
        let validator = Validator::default();

        assert_eq!(validator.validate(Field::Age, "25"), "");
        assert_eq!(validator.validate(Field::Age, "74"), "");
    }

    #[test]
    fn age_just_outside_boundaries_is_rejected() {
        let validator = Validator::default();
        let expected = "Please enter an age between 25 and 74 years.";

        assert_eq!(validator.validate(Field::Age, "24"), expected);
        assert_eq!(validator.validate(Field::Age, "75"), expected);
    }

    #[test]
    fn age_lower_bound_follows_limits() {
        let limits = FieldLimits {
            age: FieldRange::new(1, 74),
            ..FieldLimits::default()
        };
        let validator = Validator::new(limits, "baht");

        assert_eq!(validator.validate(Field::Age, "1"), "");
        assert_eq!(
            validator.validate(Field::Age, "0"),
            "Please enter an age between 1 and 74 years."
        );
    }

    #[test]
    fn blank_input_is_out_of_range() {
        let validator = Validator::default();

        for field in Field::ALL {
            assert!(!validator.validate(field, "").is_empty(), "{field}");
        }
    }

    // =========================================================================
    // loan amount
    // =========================================================================

    #[test]
    fn loan_amount_ignores_separators() {
        let validator = Validator::default();

        assert_eq!(validator.validate(Field::LoanAmount, "1,500,000"), "");
    }

    #[test]
    fn loan_amount_above_maximum_is_rejected() {
        let validator = Validator::default();

        assert_eq!(
            validator.validate(Field::LoanAmount, "3,000,001"),
            "Please enter a remaining loan amount between 1 and 3,000,000 baht."
        );
    }

    // =========================================================================
    // coverage period
    // =========================================================================

    #[test]
    fn coverage_period_accepts_one_to_three() {
        let validator = Validator::default();

        assert_eq!(validator.validate(Field::CoveragePeriod, "1"), "");
        assert_eq!(validator.validate(Field::CoveragePeriod, "3"), "");
        assert_eq!(
            validator.validate(Field::CoveragePeriod, "4"),
            "Please enter a coverage period between 1 and 3 years."
        );
    }

    // =========================================================================
    // check
    // =========================================================================

    #[test]
    fn check_reports_field_value_and_range() {
        let validator = Validator::default();

        let err = validator.check(Field::CoveragePeriod, dec!(0)).unwrap_err();

        assert_eq!(err.field, Field::CoveragePeriod);
        assert_eq!(err.value, dec!(0));
        assert_eq!(err.range, FieldRange::new(1, 3));
        assert_eq!(err.message(), err.to_string());
    }

    #[test]
    fn garbage_input_is_rejected_as_zero() {
        let validator = Validator::default();

        assert!(!validator.validate(Field::Age, "forty").is_empty());
    }
}
