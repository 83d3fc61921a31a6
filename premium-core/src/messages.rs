//! User-facing text.

use crate::format::format_amount;
use crate::models::{Field, FieldRange, PremiumQuote};

pub const FORM_TITLE: &str = "Insurance Premium Calculator";

pub const CALCULATE_LABEL: &str = "Calculate";

/// Global notice shown when a calculation is refused.
pub const INCOMPLETE_FORM: &str = "Please complete all fields.";

pub const RESULT_HEADING: &str = "Estimated premium:";

pub const TAX_DISCLAIMER: &str = "(Excludes taxes and duties.)";

/// Inline message for a value outside `range`.
pub fn out_of_range(
    field: Field,
    range: &FieldRange,
    currency_label: &str,
) -> String {
    match field {
        Field::Age => format!(
            "Please enter an age between {} and {} years.",
            range.min, range.max
        ),
        Field::LoanAmount => format!(
            "Please enter a remaining loan amount between {} and {} {currency_label}.",
            format_amount(range.min),
            format_amount(range.max)
        ),
        Field::CoveragePeriod => format!(
            "Please enter a coverage period between {} and {} years.",
            range.min, range.max
        ),
    }
}

/// Grouped premium followed by the currency label, e.g. `"5,560.00 baht"`.
pub fn premium_amount(
    quote: &PremiumQuote,
    currency_label: &str,
) -> String {
    format!("{} {currency_label}", quote.display_premium())
}
