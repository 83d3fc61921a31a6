//! Form orchestration.
//!
//! [`PremiumEstimator`] is a set of reducers: each takes the current
//! [`FormState`] and an event and returns the next state.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use premium_core::{EstimatorConfig, Field, FormState, PremiumEstimator};
//!
//! let estimator = PremiumEstimator::new(EstimatorConfig::default()).unwrap();
//!
//! let state = FormState::default();
//! let state = estimator.on_input(&state, Field::Age, "65");
//! let state = estimator.on_input(&state, Field::LoanAmount, "200000");
//! let state = estimator.on_input(&state, Field::CoveragePeriod, "2");
//! let state = estimator.on_calculate(&state);
//!
//! assert_eq!(state.inputs.loan_amount.raw, "200,000");
//! assert_eq!(state.premium(), Some(dec!(5560.00)));
//! ```

use std::fmt;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::calculations::{CalculationError, PremiumCalculator};
use crate::config::{ConfigError, EstimatorConfig};
use crate::format::{echo_grouped, parse_amount};
use crate::messages;
use crate::models::{Field, FieldInput, FormState, PremiumQuote, ResultArea};
use crate::validation::Validator;

/// Why one field blocks a calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    pub field: Field,
    pub message: String,
}

impl fmt::Display for FieldIssue {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}: {}", self.field.label(), self.message)
    }
}

/// Errors returned by [`PremiumEstimator::quote`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuoteError {
    /// At least one field is out of range or missing.
    #[error("{}", messages::INCOMPLETE_FORM)]
    IncompleteForm { issues: Vec<FieldIssue> },

    #[error(transparent)]
    Calculation(#[from] CalculationError),
}

/// Validates input, runs the calculator and tracks the form's result region.
#[derive(Debug, Clone)]
pub struct PremiumEstimator {
    validator: Validator,
    calculator: PremiumCalculator,
    live_grouping: bool,
    currency_label: String,
}

impl PremiumEstimator {
    /// Builds an estimator from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `config` fails [`EstimatorConfig::validate`].
    pub fn new(config: EstimatorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let EstimatorConfig {
            limits,
            rate_table,
            display,
        } = config;

        Ok(Self {
            validator: Validator::new(limits, display.currency_label.clone()),
            calculator: PremiumCalculator::new(rate_table),
            live_grouping: display.live_grouping,
            currency_label: display.currency_label,
        })
    }

    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    pub fn calculator(&self) -> &PremiumCalculator {
        &self.calculator
    }

    pub fn live_grouping(&self) -> bool {
        self.live_grouping
    }

    pub fn currency_label(&self) -> &str {
        &self.currency_label
    }

    /// Applies an edit of `field` and re-derives that field's error only.
    ///
    /// With live grouping on, the loan amount is reduced to its digits and
    /// echoed back grouped. The result region is left as it was.
    pub fn on_input(
        &self,
        state: &FormState,
        field: Field,
        raw: &str,
    ) -> FormState {
        let echo = field == Field::LoanAmount && self.live_grouping;
        self.apply_input(state, field, raw, echo)
    }

    /// Stores `raw` for `field`, echoed through [`echo_grouped`] when `echo`
    /// is set, and re-validates that field.
    fn apply_input(
        &self,
        state: &FormState,
        field: Field,
        raw: &str,
        echo: bool,
    ) -> FormState {
        let raw = if echo {
            echo_grouped(raw)
        } else {
            raw.to_string()
        };
        let value = parse_amount(&raw);
        let error = match self.validator.check(field, value) {
            Ok(()) => String::new(),
            Err(e) => e.to_string(),
        };

        debug!(%field, raw = %raw, %value, valid = error.is_empty(), "field edited");

        FormState {
            inputs: state.inputs.with(field, FieldInput::new(raw, value)),
            errors: state.errors.with(field, error),
            result: state.result.clone(),
        }
    }

    /// Runs a calculation attempt.
    ///
    /// Succeeds only when every field is error free and non-zero and the
    /// premium is representable; otherwise the result region switches to
    /// [`ResultArea::Error`] and any earlier premium is dropped.
    pub fn on_calculate(
        &self,
        state: &FormState,
    ) -> FormState {
        let result = match self.try_quote(state) {
            Ok(quote) => ResultArea::Success(quote),
            Err(err) => {
                warn!(%err, "calculation refused");
                ResultArea::Error
            }
        };

        FormState {
            result,
            ..state.clone()
        }
    }

    fn try_quote(
        &self,
        state: &FormState,
    ) -> Result<PremiumQuote, QuoteError> {
        if !state.is_complete() {
            return Err(QuoteError::IncompleteForm {
                issues: self.issues(state),
            });
        }

        let inputs = &state.inputs;
        let quote = self.calculator.quote(
            inputs.age.value,
            inputs.loan_amount.value,
            inputs.coverage_period.value,
        )?;
        info!(premium = %quote.premium, rate = %quote.rate, "premium quoted");
        Ok(quote)
    }

    /// Lists every field that currently blocks a calculation.
    pub fn issues(
        &self,
        state: &FormState,
    ) -> Vec<FieldIssue> {
        Field::ALL
            .iter()
            .filter_map(|&field| {
                let error = state.errors.get(field);
                let message = if !error.is_empty() {
                    error.to_string()
                } else if state.inputs.get(field).value.is_zero() {
                    format!("{} is required.", field.label())
                } else {
                    return None;
                };
                Some(FieldIssue { field, message })
            })
            .collect()
    }

    /// Quotes raw field text in one step.
    ///
    /// The text is parsed as given: no keystroke echo is applied, so a loan
    /// amount such as `"1000.5"` or `"-100000"` is judged on its real value.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::IncompleteForm`] listing each blocking field, or
    /// [`QuoteError::Calculation`] when the premium overflows.
    pub fn quote(
        &self,
        age: &str,
        loan_amount: &str,
        coverage_period: &str,
    ) -> Result<PremiumQuote, QuoteError> {
        let state = [
            (Field::Age, age),
            (Field::LoanAmount, loan_amount),
            (Field::CoveragePeriod, coverage_period),
        ]
        .into_iter()
        .fold(FormState::default(), |state, (field, raw)| {
            self.apply_input(&state, field, raw, false)
        });

        self.try_quote(&state)
    }

    /// Grouped premium with the currency label, e.g. `"5,560.00 baht"`.
    pub fn premium_text(
        &self,
        quote: &PremiumQuote,
    ) -> String {
        messages::premium_amount(quote, &self.currency_label)
    }
}
