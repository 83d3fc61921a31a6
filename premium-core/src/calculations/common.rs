//! Rounding shared by the premium calculations.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of fractional digits carried by every premium.
pub const PREMIUM_SCALE: u32 = 2;

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly 0.005 are rounded up to 0.01 (away from zero), and the
/// result is rescaled so whole amounts still print with two digits.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use premium_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_half_up(dec!(790)).to_string(), "790.00");
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    let mut rounded =
        value.round_dp_with_strategy(PREMIUM_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(PREMIUM_SCALE);
    rounded
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn round_half_up_rounds_down_below_midpoint() {
        let result = round_half_up(dec!(123.454));

        assert_eq!(result, dec!(123.45));
    }

    #[test]
    fn round_half_up_rounds_up_at_midpoint() {
        let result = round_half_up(dec!(0.125));

        assert_eq!(result, dec!(0.13));
    }

    #[test]
    fn round_half_up_handles_negative_values() {
        let result = round_half_up(dec!(-123.455));

        assert_eq!(result, dec!(-123.46)); // Away from zero
    }

    #[test]
    fn round_half_up_pads_whole_values_to_two_digits() {
        let result = round_half_up(dec!(162000));

        assert_eq!(result.to_string(), "162000.00");
    }

    #[test]
    fn round_half_up_carries_into_integer_part() {
        let result = round_half_up(dec!(999999.999));

        assert_eq!(result.to_string(), "1000000.00");
    }
}
