//! Plain-text output for the command line.

use premium_core::{
    Field, PremiumEstimator, PremiumQuote,
    format::format_amount,
    messages::{RESULT_HEADING, TAX_DISCLAIMER},
};

/// Lines printed for a successful single quote.
pub fn quote_lines(
    estimator: &PremiumEstimator,
    quote: &PremiumQuote,
) -> Vec<String> {
    vec![
        quote.to_string(),
        format!("{RESULT_HEADING} {}", estimator.premium_text(quote)),
        TAX_DISCLAIMER.to_string(),
    ]
}

/// The active rate table followed by the field limits.
pub fn rate_table_lines(estimator: &PremiumEstimator) -> Vec<String> {
    let table = estimator.calculator().rate_table();
    let unit = format_amount(table.unit);
    let currency = estimator.currency_label();

    let mut lines = vec![format!("Annual rate per {unit} {currency} of loan:")];
    lines.extend(table.brackets.iter().map(|b| {
        format!(
            "  age <= {:<4} {:>8}",
            b.max_age.to_string(),
            format_amount(b.rate)
        )
    }));
    lines.push(format!(
        "  {:<11} {:>8}",
        "older",
        format_amount(table.fallback_rate)
    ));

    lines.push("Accepted ranges:".to_string());
    let limits = estimator.validator().limits();
    lines.extend(Field::ALL.iter().map(|&field| {
        let range = limits.for_field(field);
        format!(
            "  {:<22} {} - {}",
            field.label(),
            format_amount(range.min),
            format_amount(range.max)
        )
    }));
    lines
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use premium_core::EstimatorConfig;

    use super::*;

    fn estimator() -> PremiumEstimator {
        PremiumEstimator::new(EstimatorConfig::default()).unwrap()
    }

    #[test]
    fn rate_table_lines_lists_brackets_fallback_and_limits() {
        let lines = rate_table_lines(&estimator());

        assert_eq!(lines[0], "Annual rate per 100,000 baht of loan:");
        assert_eq!(lines[1], "  age <= 60        790");
        assert_eq!(lines[4], "  older          1,800");
        assert_eq!(lines[5], "Accepted ranges:");
        assert_eq!(lines[7], "  Remaining loan amount  1 - 3,000,000");
        assert_eq!(lines.len(), 9);
    }

    #[test]
    fn quote_lines_end_with_amount_and_disclaimer() {
        let estimator = estimator();
        let quote = estimator.quote("74", "3,000,000", "3").unwrap();

        let lines = quote_lines(&estimator, &quote);

        assert_eq!(lines[1], "Estimated premium: 162,000.00 baht");
        assert_eq!(lines[2], "(Excludes taxes and duties.)");
    }
}
