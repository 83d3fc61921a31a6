//! Grouped-digit formatting and the single parse step for form input.
//!
//! The grouping separator is always `,` regardless of the host locale.

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::warn;

/// Character inserted every three digits of the integer part.
pub const GROUPING_SEPARATOR: char = ',';

/// Error returned when text cannot be parsed as an amount.
#[derive(Debug, Error)]
#[error("invalid amount '{input}': {source}")]
pub struct ParseAmountError {
    input: String,
    #[source]
    source: rust_decimal::Error,
}

/// Trims whitespace and removes every grouping separator.
pub fn strip_separators(s: &str) -> String {
    s.trim().replace(GROUPING_SEPARATOR, "")
}

/// Keeps ASCII digits only.
pub fn sanitize_digits(s: &str) -> String {
    s.chars().filter(char::is_ascii_digit).collect()
}

/// Parses form text into a [`Decimal`].
///
/// Separators are stripped first and blank input is zero.
pub fn try_parse_amount(s: &str) -> Result<Decimal, ParseAmountError> {
    let normalized = strip_separators(s);
    if normalized.is_empty() {
        return Ok(Decimal::ZERO);
    }
    normalized.parse().map_err(|e| ParseAmountError {
        input: s.to_string(),
        source: e,
    })
}

/// Like [`try_parse_amount`] but unparseable text becomes zero.
///
/// Zero is outside every field's default range, so garbage input surfaces as
/// a range error instead of propagating silently.
pub fn parse_amount(s: &str) -> Decimal {
    try_parse_amount(s).unwrap_or_else(|e| {
        warn!(input = %s, "unparseable amount treated as zero: {}", e);
        Decimal::ZERO
    })
}

/// Inserts [`GROUPING_SEPARATOR`] every three digits of the integer part.
///
/// Existing separators are ignored, so the result is the same whether the
/// input was grouped or not. The fractional part and a leading `-` are kept
/// as they are. Text whose integer part is not made of digits is returned
/// trimmed but otherwise untouched.
///
/// # Examples
///
/// ```
/// use premium_core::format::group_digits;
///
/// assert_eq!(group_digits("3000000"), "3,000,000");
/// assert_eq!(group_digits("5560.00"), "5,560.00");
/// assert_eq!(group_digits("1,0000"), "10,000");
/// assert_eq!(group_digits("0"), "0");
/// ```
pub fn group_digits(s: &str) -> String {
    let cleaned = strip_separators(s);
    let (sign, unsigned) = match cleaned.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", cleaned.as_str()),
    };
    let (integer, fraction) = match unsigned.find('.') {
        Some(idx) => unsigned.split_at(idx),
        None => (unsigned, ""),
    };

    if integer.is_empty() || !integer.bytes().all(|b| b.is_ascii_digit()) {
        return cleaned;
    }

    let mut grouped = String::with_capacity(cleaned.len() + integer.len() / 3);
    grouped.push_str(sign);
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(GROUPING_SEPARATOR);
        }
        grouped.push(ch);
    }
    grouped.push_str(fraction);
    grouped
}

/// Grouped display of a decimal, keeping its scale.
///
/// ```
/// use rust_decimal_macros::dec;
/// use premium_core::format::format_amount;
///
/// assert_eq!(format_amount(dec!(162000.00)), "162,000.00");
/// assert_eq!(format_amount(dec!(1000000)), "1,000,000");
/// ```
pub fn format_amount(value: Decimal) -> String {
    group_digits(&value.to_string())
}

pub fn format_integer(value: u64) -> String {
    group_digits(&value.to_string())
}

/// Text to echo back into a live-grouped input after an edit.
///
/// Everything except digits is dropped before grouping; an input with no
/// digits left echoes as an empty string.
pub fn echo_grouped(raw: &str) -> String {
    let digits = sanitize_digits(raw);
    if digits.is_empty() {
        String::new()
    } else {
        group_digits(&digits)
    }
}
