//! # Document and Contact Masks
//!
//! CPF, CNPJ, CEP and phone numbers share one algorithm: extract digits,
//! truncate to the mask's capacity, cut into fixed-width groups, then join
//! the groups that exist with the mask's literal separators. A separator is
//! emitted only once a digit follows it, so the display grows one digit at
//! a time (`1`, `12`, `123`, `123.4`, ...).
//!
//! Truncation happens before grouping: surplus digits are dropped, never
//! reflowed into the layout.

use crate::digits::{clean_masked_value, split_groups, truncate};

/// Digit capacity of a CPF.
pub const CPF_DIGITS: usize = 11;
/// Digit capacity of a CNPJ.
pub const CNPJ_DIGITS: usize = 14;
/// Digit capacity of a CEP.
pub const CEP_DIGITS: usize = 8;
/// Digit capacity of a phone number (2-digit area code plus 9-digit mobile).
pub const PHONE_DIGITS: usize = 11;

const CPF_GROUPS: [usize; 4] = [3, 3, 3, 2];
const CPF_SEPARATORS: [&str; 3] = [".", ".", "-"];

const CNPJ_GROUPS: [usize; 5] = [2, 3, 3, 4, 2];
const CNPJ_SEPARATORS: [&str; 4] = [".", ".", "/", "-"];

const CEP_GROUPS: [usize; 2] = [5, 3];
const CEP_SEPARATORS: [&str; 1] = ["-"];

const PHONE_GROUPS: [usize; 3] = [2, 5, 4];

/// Join groups, placing `separators[i]` between group `i` and group `i + 1`.
fn join_groups(groups: &[&str], separators: &[&str]) -> String {
    let mut out = String::with_capacity(groups.iter().map(|g| g.len() + 1).sum());
    for (i, group) in groups.iter().enumerate() {
        if i > 0 {
            out.push_str(separators[i - 1]);
        }
        out.push_str(group);
    }
    out
}

fn format_grouped(value: &str, max: usize, widths: &[usize], separators: &[&str]) -> String {
    let digits = clean_masked_value(value);
    let groups = split_groups(truncate(&digits, max), widths);
    join_groups(&groups, separators)
}

/// Format as CPF: `ddd.ddd.ddd-dd`.
pub fn format_cpf(value: &str) -> String {
    format_grouped(value, CPF_DIGITS, &CPF_GROUPS, &CPF_SEPARATORS)
}

/// Format as CNPJ: `dd.ddd.ddd/dddd-dd`.
pub fn format_cnpj(value: &str) -> String {
    format_grouped(value, CNPJ_DIGITS, &CNPJ_GROUPS, &CNPJ_SEPARATORS)
}

/// Format as CEP: `ddddd-ddd`.
pub fn format_cep(value: &str) -> String {
    format_grouped(value, CEP_DIGITS, &CEP_GROUPS, &CEP_SEPARATORS)
}

/// Format as a mobile phone number: `(dd) ddddd-dddd`.
///
/// The area code gets its parentheses only once the third digit arrives;
/// up to two digits are shown bare. The subscriber part always uses the
/// 5-4 mobile split, so a 10-digit landline renders as `(dd) ddddd-ddd`.
pub fn format_phone(value: &str) -> String {
    let digits = clean_masked_value(value);
    let groups = split_groups(truncate(&digits, PHONE_DIGITS), &PHONE_GROUPS);
    match groups.as_slice() {
        [] => String::new(),
        [area] => (*area).to_string(),
        [area, subscriber @ ..] => format!("({area}) {}", subscriber.join("-")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cpf_progressive() {
        let cases = [
            ("1", "1"),
            ("12", "12"),
            ("123", "123"),
            ("1234", "123.4"),
            ("12345", "123.45"),
            ("123456", "123.456"),
            ("1234567", "123.456.7"),
            ("12345678", "123.456.78"),
            ("123456789", "123.456.789"),
            ("1234567890", "123.456.789-0"),
            ("12345678901", "123.456.789-01"),
        ];
        for (input, expected) in cases {
            assert_eq!(format_cpf(input), expected, "cpf({input})");
        }
    }

    #[test]
    fn test_cpf_truncates() {
        assert_eq!(format_cpf("123456789012"), "123.456.789-01");
        assert_eq!(format_cpf("12345678901234567890"), "123.456.789-01");
    }

    #[test]
    fn test_cpf_ignores_non_digits() {
        assert_eq!(format_cpf("abc123def456"), "123.456");
        assert_eq!(format_cpf("123.456.789-01"), "123.456.789-01");
    }

    #[test]
    fn test_cnpj_progressive() {
        let cases = [
            ("1", "1"),
            ("12", "12"),
            ("123", "12.3"),
            ("1234", "12.34"),
            ("12345", "12.345"),
            ("123456", "12.345.6"),
            ("1234567", "12.345.67"),
            ("12345678", "12.345.678"),
            ("123456789", "12.345.678/9"),
            ("1234567890", "12.345.678/90"),
            ("12345678901", "12.345.678/901"),
            ("1234567890123", "12.345.678/9012-3"),
            ("12345678901234", "12.345.678/9012-34"),
        ];
        for (input, expected) in cases {
            assert_eq!(format_cnpj(input), expected, "cnpj({input})");
        }
    }

    #[test]
    fn test_cnpj_truncates() {
        assert_eq!(format_cnpj("123456789012345"), "12.345.678/9012-34");
    }

    #[test]
    fn test_cep_progressive() {
        let cases = [
            ("1", "1"),
            ("12345", "12345"),
            ("123456", "12345-6"),
            ("1234567", "12345-67"),
            ("12345678", "12345-678"),
        ];
        for (input, expected) in cases {
            assert_eq!(format_cep(input), expected, "cep({input})");
        }
        assert_eq!(format_cep("123456789"), "12345-678");
    }

    #[test]
    fn test_phone_progressive() {
        let cases = [
            ("1", "1"),
            ("11", "11"),
            ("119", "(11) 9"),
            ("1198", "(11) 98"),
            ("11987", "(11) 987"),
            ("119876", "(11) 9876"),
            ("1198765", "(11) 98765"),
            ("11987654", "(11) 98765-4"),
            ("119876543", "(11) 98765-43"),
            ("1198765432", "(11) 98765-432"),
            ("11987654321", "(11) 98765-4321"),
        ];
        for (input, expected) in cases {
            assert_eq!(format_phone(input), expected, "phone({input})");
        }
    }

    #[test]
    fn test_phone_reformats_own_output() {
        assert_eq!(format_phone("(11) 99999-9999"), "(11) 99999-9999");
        assert_eq!(format_phone("12345678901234567890"), "(12) 34567-8901");
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(format_cpf(""), "");
        assert_eq!(format_cnpj(""), "");
        assert_eq!(format_cep(""), "");
        assert_eq!(format_phone(""), "");
        assert_eq!(format_phone("--"), "");
    }
}
