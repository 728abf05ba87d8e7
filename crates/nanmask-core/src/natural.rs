//! Natural-number mask: digits only, no leading zeros, never empty.

use crate::digits::clean_masked_value;

/// Strip non-digits and leading zeros. Returns `"0"` when nothing is left.
pub fn format_natural_number(value: &str) -> String {
    let digits = clean_masked_value(value);
    match digits.trim_start_matches('0') {
        "" => "0".to_string(),
        significant => significant.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_leading_zeros() {
        assert_eq!(format_natural_number("12345"), "12345");
        assert_eq!(format_natural_number("012345"), "12345");
        assert_eq!(format_natural_number("00012345"), "12345");
        assert_eq!(format_natural_number("1000"), "1000");
    }

    #[test]
    fn test_zero_forms() {
        assert_eq!(format_natural_number("0"), "0");
        assert_eq!(format_natural_number("00"), "0");
        assert_eq!(format_natural_number("0000"), "0");
    }

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(format_natural_number(""), "0");
        assert_eq!(format_natural_number("abc"), "0");
    }

    #[test]
    fn test_mixed_input() {
        assert_eq!(format_natural_number("1.000,50"), "100050");
        assert_eq!(format_natural_number("-0042"), "42");
    }
}
