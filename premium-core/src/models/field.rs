use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the three inputs on the premium form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Age,
    LoanAmount,
    CoveragePeriod,
}

impl Field {
    /// Every field, in form order.
    pub const ALL: [Field; 3] = [Field::Age, Field::LoanAmount, Field::CoveragePeriod];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Age => "age",
            Self::LoanAmount => "loan_amount",
            Self::CoveragePeriod => "coverage_period",
        }
    }

    /// Label shown next to the input.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Age => "Age",
            Self::LoanAmount => "Remaining loan amount",
            Self::CoveragePeriod => "Coverage period",
        }
    }

    /// Placeholder text for an empty input.
    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Age => "Enter age (years)",
            Self::LoanAmount => "Enter remaining loan amount (baht)",
            Self::CoveragePeriod => "Enter coverage period (years)",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn machine_names_match_csv_headers() {
        let names: Vec<_> = Field::ALL.iter().map(Field::as_str).collect();

        assert_eq!(names, vec!["age", "loan_amount", "coverage_period"]);
    }

    #[test]
    fn display_uses_machine_name() {
        assert_eq!(Field::CoveragePeriod.to_string(), "coverage_period");
    }
}
