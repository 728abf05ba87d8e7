//! # Currency Mask (BRL)
//!
//! Typed digits are whole cents. The display is computed on the digit string
//! itself, so it is exact for inputs of any length. Callers that need the
//! amount as a number go through [`parse_cents`], which reports overflow
//! instead of wrapping.

use crate::digits::clean_masked_value;
use crate::error::MaskError;

/// Prefix written before every formatted amount.
pub const CURRENCY_PREFIX: &str = "R$ ";

/// Format a digit string of cents as `R$ <units>,<cents>`.
///
/// `"1"` becomes `R$ 0,01`, `"12345"` becomes `R$ 123,45`. Leading zeros are
/// dropped from the integer part. An input with no digits yields an empty
/// string, not `R$ 0,00`. No thousands separator is inserted.
pub fn format_currency(value: &str) -> String {
    let digits = clean_masked_value(value);
    if digits.is_empty() {
        return String::new();
    }

    let significant = digits.trim_start_matches('0');
    let padded = format!("{significant:0>3}");
    let (units, cents) = padded.split_at(padded.len() - 2);
    format!("{CURRENCY_PREFIX}{units},{cents}")
}

/// Parse the digits of `value` as an integer number of cents.
///
/// An input with no digits is zero cents.
///
/// # Errors
///
/// Returns [`MaskError::CurrencyOverflow`] when the amount does not fit in
/// a `u128`.
pub fn parse_cents(value: &str) -> Result<u128, MaskError> {
    let digits = clean_masked_value(value);
    let significant = digits.trim_start_matches('0');
    if significant.is_empty() {
        return Ok(0);
    }
    significant
        .parse::<u128>()
        .map_err(|_| MaskError::CurrencyOverflow {
            digits: significant.len(),
        })
}
