use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::format::format_amount;

/// A successful premium calculation together with the inputs that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PremiumQuote {
    pub age: Decimal,
    pub loan_amount: Decimal,
    pub coverage_period: Decimal,

    /// Annual rate per rate unit selected from the age bracket.
    pub rate: Decimal,

    /// Estimated premium, always carrying two fractional digits.
    pub premium: Decimal,
}

impl PremiumQuote {
    /// Grouped premium for display, e.g. `"5,560.00"`.
    pub fn display_premium(&self) -> String {
        format_amount(self.premium)
    }
}

impl fmt::Display for PremiumQuote {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "Age:             {}", self.age)?;
        writeln!(f, "Loan amount:     {}", format_amount(self.loan_amount))?;
        writeln!(f, "Coverage period: {}", self.coverage_period)?;
        writeln!(f, "Rate:            {}", format_amount(self.rate))?;
        write!(f, "Premium:         {}", self.display_premium())
    }
}
