//! CSV batch quoting.
//!
//! ## CSV Format
//!
//! Headers are matched by name, so column order does not matter.
//!
//! | Column            | Type   | Notes                                        |
//! |-------------------|--------|----------------------------------------------|
//! | `age`             | number | years                                        |
//! | `loan_amount`     | number | may carry `,` separators (quote the cell)    |
//! | `coverage_period` | number | years                                        |
//!
//! Every cell goes through the same parse and validation as the form, so a
//! blank or out-of-range cell yields a per-row error rather than failing the
//! whole file.
//!
//! ```csv
//! age,loan_amount,coverage_period
//! 60,100000,1
//! 65,"200,000",2
//! ```

use std::path::Path;

use premium_core::{PremiumEstimator, PremiumQuote, QuoteError, messages};
use serde::Deserialize;
use tracing::{info, warn};

#[derive(Debug, Deserialize)]
struct CsvRow {
    age: String,
    loan_amount: String,
    coverage_period: String,
}

/// Errors that can occur while reading a batch file.
#[derive(Debug, thiserror::Error)]
pub enum BatchLoadError {
    /// The file could not be read.
    #[error("cannot read batch file: {0}")]
    Io(#[from] std::io::Error),

    /// The CSV is structurally invalid or a required column is missing.
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),
}

/// One applicant row, kept as raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Applicant {
    /// 1-based data row number (header excluded).
    pub row: usize,
    pub age: String,
    pub loan_amount: String,
    pub coverage_period: String,
}

/// Result of quoting one applicant.
#[derive(Debug)]
pub struct BatchOutcome {
    pub applicant: Applicant,
    pub result: Result<PremiumQuote, QuoteError>,
}

/// Parses CSV text into applicants, in file order.
pub fn load_from_str(input: &str) -> Result<Vec<Applicant>, BatchLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(input.as_bytes());

    reader
        .deserialize::<CsvRow>()
        .enumerate()
        .map(|(idx, result)| {
            let row = result?;
            Ok(Applicant {
                row: idx + 1,
                age: row.age,
                loan_amount: row.loan_amount,
                coverage_period: row.coverage_period,
            })
        })
        .collect()
}

/// Reads `path` and delegates to [`load_from_str`].
pub fn load_from_file(path: &Path) -> Result<Vec<Applicant>, BatchLoadError> {
    let contents = std::fs::read_to_string(path)?;
    load_from_str(&contents)
}

/// Quotes every applicant independently.
pub fn quote_all(
    estimator: &PremiumEstimator,
    applicants: Vec<Applicant>,
) -> Vec<BatchOutcome> {
    let outcomes: Vec<BatchOutcome> = applicants
        .into_iter()
        .map(|applicant| {
            let result = estimator.quote(
                &applicant.age,
                &applicant.loan_amount,
                &applicant.coverage_period,
            );
            if result.is_err() {
                warn!(row = applicant.row, "row could not be quoted");
            }
            BatchOutcome { applicant, result }
        })
        .collect();

    let quoted = outcomes.iter().filter(|o| o.result.is_ok()).count();
    info!(rows = outcomes.len(), quoted, "batch quoted");
    outcomes
}

/// One printable line per outcome.
pub fn render_line(
    estimator: &PremiumEstimator,
    outcome: &BatchOutcome,
) -> String {
    match &outcome.result {
        Ok(quote) => format!(
            "row {}: {}",
            outcome.applicant.row,
            estimator.premium_text(quote)
        ),
        Err(QuoteError::IncompleteForm { issues }) => {
            let details = issues
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ");
            format!(
                "row {}: {} ({details})",
                outcome.applicant.row,
                messages::INCOMPLETE_FORM
            )
        }
        Err(err) => format!("row {}: {err}", outcome.applicant.row),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use premium_core::EstimatorConfig;
    use rust_decimal_macros::dec;

    use super::*;

    const SAMPLE_CSV: &str = "\
age,loan_amount,coverage_period
60,100000,1
65,\"200,000\",2
80,100000,1
";

    fn estimator() -> PremiumEstimator {
        PremiumEstimator::new(EstimatorConfig::default()).unwrap()
    }

    #[test]
    fn load_from_str_keeps_raw_cells_and_row_numbers() {
        let applicants = load_from_str(SAMPLE_CSV).expect("should parse sample");

        assert_eq!(applicants.len(), 3);
        assert_eq!(
            applicants[1],
            Applicant {
                row: 2,
                age: "65".to_string(),
                loan_amount: "200,000".to_string(),
                coverage_period: "2".to_string(),
            }
        );
    }

    #[test]
    fn load_from_str_accepts_reordered_columns() {
        let csv = "coverage_period,age,loan_amount\n3,74,3000000\n";

        let applicants = load_from_str(csv).unwrap();

        assert_eq!(applicants[0].age, "74");
        assert_eq!(applicants[0].coverage_period, "3");
    }

    #[test]
    fn load_from_str_rejects_missing_column() {
        let csv = "age,loan_amount\n60,100000\n";

        assert!(matches!(load_from_str(csv), Err(BatchLoadError::Parse(_))));
    }

    #[test]
    fn quote_all_quotes_rows_independently() {
        let estimator = estimator();
        let outcomes = quote_all(&estimator, load_from_str(SAMPLE_CSV).unwrap());

        assert_eq!(outcomes[0].result.as_ref().unwrap().premium, dec!(790.00));
        assert_eq!(outcomes[1].result.as_ref().unwrap().premium, dec!(5560.00));
        assert!(outcomes[2].result.is_err());
    }

    #[test]
    fn quote_all_takes_loan_cells_at_face_value() {
        let csv = "age,loan_amount,coverage_period\n40,1000.5,1\n40,-100000,1\n";

        let outcomes = quote_all(&estimator(), load_from_str(csv).unwrap());

        let quote = outcomes[0].result.as_ref().unwrap();
        assert_eq!(quote.loan_amount, dec!(1000.5));
        assert_eq!(quote.premium, dec!(7.90));
        assert!(outcomes[1].result.is_err());
    }

    #[test]
    fn render_line_formats_success_and_failure() {
        let estimator = estimator();
        let outcomes = quote_all(&estimator, load_from_str(SAMPLE_CSV).unwrap());

        assert_eq!(render_line(&estimator, &outcomes[1]), "row 2: 5,560.00 baht");
        assert_eq!(
            render_line(&estimator, &outcomes[2]),
            "row 3: Please complete all fields. \
             (Age: Please enter an age between 25 and 74 years.)"
        );
    }

    #[test]
    fn render_line_reports_overflow() {
        let mut config = EstimatorConfig::default();
        config.limits.loan_amount.max = rust_decimal::Decimal::MAX;
        config.rate_table.unit = dec!(1);
        let estimator = PremiumEstimator::new(config).unwrap();
        let csv = "age,loan_amount,coverage_period\n40,79228162514264337593543950335,3\n";

        let outcomes = quote_all(&estimator, load_from_str(csv).unwrap());
        let line = render_line(&estimator, &outcomes[0]);

        assert!(line.starts_with("row 1: premium for a loan of"), "{line}");
        assert!(line.ends_with("is too large"), "{line}");
    }
}
