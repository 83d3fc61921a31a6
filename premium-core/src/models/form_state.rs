//! Immutable records describing the premium form.
//!
//! Nothing in here mutates in place: the estimator produces a new
//! [`FormState`] for every edit or calculation.

use rust_decimal::Decimal;

use super::{Field, PremiumQuote};

/// Raw text of one input and the number derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldInput {
    /// Text as typed or echoed back, possibly with grouping separators.
    pub raw: String,
    /// Parsed value; blank or unparseable text is zero.
    pub value: Decimal,
}

impl FieldInput {
    pub fn new(
        raw: impl Into<String>,
        value: Decimal,
    ) -> Self {
        Self {
            raw: raw.into(),
            value,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.raw.trim().is_empty()
    }
}

/// Current input of every field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InputState {
    pub age: FieldInput,
    pub loan_amount: FieldInput,
    pub coverage_period: FieldInput,
}

impl InputState {
    pub fn get(
        &self,
        field: Field,
    ) -> &FieldInput {
        match field {
            Field::Age => &self.age,
            Field::LoanAmount => &self.loan_amount,
            Field::CoveragePeriod => &self.coverage_period,
        }
    }

    /// Returns a copy with `field` replaced.
    pub fn with(
        &self,
        field: Field,
        input: FieldInput,
    ) -> Self {
        let mut next = self.clone();
        match field {
            Field::Age => next.age = input,
            Field::LoanAmount => next.loan_amount = input,
            Field::CoveragePeriod => next.coverage_period = input,
        }
        next
    }

    /// Returns `true` when no field holds a zero value.
    pub fn all_present(&self) -> bool {
        Field::ALL.iter().all(|f| !self.get(*f).value.is_zero())
    }
}

/// Inline error message per field. An empty string means valid.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ErrorState {
    pub age: String,
    pub loan_amount: String,
    pub coverage_period: String,
}

impl ErrorState {
    pub fn get(
        &self,
        field: Field,
    ) -> &str {
        match field {
            Field::Age => &self.age,
            Field::LoanAmount => &self.loan_amount,
            Field::CoveragePeriod => &self.coverage_period,
        }
    }

    /// Returns a copy with only `field`'s message replaced.
    pub fn with(
        &self,
        field: Field,
        message: impl Into<String>,
    ) -> Self {
        let mut next = self.clone();
        let message = message.into();
        match field {
            Field::Age => next.age = message,
            Field::LoanAmount => next.loan_amount = message,
            Field::CoveragePeriod => next.coverage_period = message,
        }
        next
    }

    pub fn is_clear(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}

/// What the result region currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ResultArea {
    /// Nothing calculated yet.
    #[default]
    NoResult,
    /// Last calculation was refused; the incomplete-form notice is shown.
    Error,
    Success(PremiumQuote),
}

/// Per-field status derived from the current records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStatus {
    /// Never filled in and carrying no error.
    Empty,
    Valid,
    Invalid,
}

/// Full state of one form instance.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    pub inputs: InputState,
    pub errors: ErrorState,
    pub result: ResultArea,
}

impl FormState {
    pub fn field_status(
        &self,
        field: Field,
    ) -> FieldStatus {
        if !self.errors.get(field).is_empty() {
            FieldStatus::Invalid
        } else if self.inputs.get(field).is_blank() {
            FieldStatus::Empty
        } else {
            FieldStatus::Valid
        }
    }

    /// The premium of the last successful calculation, if the result region
    /// currently shows one.
    pub fn premium(&self) -> Option<Decimal> {
        match &self.result {
            ResultArea::Success(quote) => Some(quote.premium),
            _ => None,
        }
    }

    /// Returns `true` when a calculation would be accepted.
    pub fn is_complete(&self) -> bool {
        self.errors.is_clear() && self.inputs.all_present()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn with_replaces_only_the_named_field() {
        let inputs = InputState::default().with(Field::Age, FieldInput::new("30", dec!(30)));

        assert_eq!(inputs.age.value, dec!(30));
        assert_eq!(inputs.loan_amount, FieldInput::default());
        assert_eq!(inputs.coverage_period, FieldInput::default());
    }

    #[test]
    fn error_state_with_leaves_other_messages_alone() {
        let errors = ErrorState::default()
            .with(Field::Age, "bad age")
            .with(Field::CoveragePeriod, "bad period")
            .with(Field::Age, "");

        assert_eq!(errors.get(Field::Age), "");
        assert_eq!(errors.get(Field::CoveragePeriod), "bad period");
        assert!(!errors.is_clear());
    }

    #[test]
    fn all_present_requires_every_value_non_zero() {
        let inputs = InputState::default()
            .with(Field::Age, FieldInput::new("30", dec!(30)))
            .with(Field::LoanAmount, FieldInput::new("100,000", dec!(100000)));

        assert!(!inputs.all_present());

        let inputs = inputs.with(Field::CoveragePeriod, FieldInput::new("1", dec!(1)));

        assert!(inputs.all_present());
    }

    #[test]
    fn field_status_reports_empty_valid_and_invalid() {
        let state = FormState {
            inputs: InputState::default().with(Field::Age, FieldInput::new("40", dec!(40))),
            errors: ErrorState::default().with(Field::LoanAmount, "out of range"),
            result: ResultArea::NoResult,
        };

        assert_eq!(state.field_status(Field::Age), FieldStatus::Valid);
        assert_eq!(state.field_status(Field::LoanAmount), FieldStatus::Invalid);
        assert_eq!(state.field_status(Field::CoveragePeriod), FieldStatus::Empty);
    }

    #[test]
    fn premium_is_unset_unless_result_is_success() {
        let mut state = FormState::default();
        assert_eq!(state.premium(), None);

        state.result = ResultArea::Error;
        assert_eq!(state.premium(), None);

        state.result = ResultArea::Success(PremiumQuote {
            age: dec!(60),
            loan_amount: dec!(100000),
            coverage_period: dec!(1),
            rate: dec!(790),
            premium: dec!(790.00),
        });
        assert_eq!(state.premium(), Some(dec!(790.00)));
    }
}
