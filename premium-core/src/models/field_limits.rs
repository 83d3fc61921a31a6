use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Field;

/// Inclusive bounds for one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRange {
    pub min: Decimal,
    pub max: Decimal,
}

impl FieldRange {
    pub fn new(
        min: impl Into<Decimal>,
        max: impl Into<Decimal>,
    ) -> Self {
        Self {
            min: min.into(),
            max: max.into(),
        }
    }

    /// Returns `true` when `value` lies within `[min, max]`.
    pub fn contains(
        &self,
        value: Decimal,
    ) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Declared range for every field on the form.
///
/// Defaults: age 25-74 years, loan amount 1-3,000,000, coverage 1-3 years.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldLimits {
    pub age: FieldRange,
    pub loan_amount: FieldRange,
    pub coverage_period: FieldRange,
}

impl Default for FieldLimits {
    fn default() -> Self {
        Self {
            age: FieldRange::new(25, 74),
            loan_amount: FieldRange::new(1, 3_000_000),
            coverage_period: FieldRange::new(1, 3),
        }
    }
}

impl FieldLimits {
    pub fn for_field(
        &self,
        field: Field,
    ) -> &FieldRange {
        match field {
            Field::Age => &self.age,
            Field::LoanAmount => &self.loan_amount,
            Field::CoveragePeriod => &self.coverage_period,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn contains_is_inclusive_at_both_ends() {
        let range = FieldRange::new(25, 74);

        assert!(range.contains(dec!(25)));
        assert!(range.contains(dec!(74)));
        assert!(!range.contains(dec!(24)));
        assert!(!range.contains(dec!(75)));
    }

    #[test]
    fn contains_accepts_fractional_values_inside_range() {
        let range = FieldRange::new(1, 3);

        assert!(range.contains(dec!(2.5)));
        assert!(!range.contains(dec!(3.01)));
    }

    #[test]
    fn default_limits_match_published_ranges() {
        let limits = FieldLimits::default();

        assert_eq!(limits.for_field(Field::Age), &FieldRange::new(25, 74));
        assert_eq!(
            limits.for_field(Field::LoanAmount),
            &FieldRange::new(1, 3_000_000)
        );
        assert_eq!(
            limits.for_field(Field::CoveragePeriod),
            &FieldRange::new(1, 3)
        );
    }
}
