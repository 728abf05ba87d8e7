//! # Date-Time and Time Masks
//!
//! Fields are read left to right from fixed positions of the digit string
//! and checked as they are typed, so a partially entered value is never
//! displayed in an impossible state:
//!
//! | Field | Digits | Leading digit | Clamp when complete |
//! |-------|--------|---------------|---------------------|
//! | day | `[0..2]` | 0-3 | > 31 → 31 |
//! | month | `[2..4]` | 0-1 | 00 → 01, > 12 → 12 |
//! | year | `[4..8]` | any | < reference year → reference year |
//! | hour | `[8..10]` | 0-2 | > 23 → 23 |
//! | minute | `[10..12]` | 0-5 | > 59 → 59 |
//!
//! A field holding a single disallowed leading digit is dropped. The time
//! mask uses only the hour and minute rules, at positions `[0..2]` and
//! `[2..4]`.
//!
//! Day validity is not checked against the month (`31/02` is accepted), and
//! a day of `00` is left alone.

use crate::digits::{clean_masked_value, truncate};
use crate::reference::ReferenceDate;

/// Digit capacity of `dd/mm/yyyy hh:mm`.
pub const DATETIME_DIGITS: usize = 12;
/// Digit capacity of `hh:mm`.
pub const TIME_DIGITS: usize = 4;

/// Typing rules for one fixed-width numeric field.
#[derive(Debug, Clone, Copy)]
struct FieldRule {
    width: usize,
    /// Highest digit allowed as the first character.
    max_leading: Option<char>,
    min: Option<i64>,
    max: Option<i64>,
    /// Literal written before the field when it has digits.
    separator: &'static str,
}

const DAY: FieldRule = FieldRule {
    width: 2,
    max_leading: Some('3'),
    min: None,
    max: Some(31),
    separator: "",
};

const MONTH: FieldRule = FieldRule {
    width: 2,
    max_leading: Some('1'),
    min: Some(1),
    max: Some(12),
    separator: "/",
};

const HOUR: FieldRule = FieldRule {
    width: 2,
    max_leading: Some('2'),
    min: None,
    max: Some(23),
    separator: " ",
};

const MINUTE: FieldRule = FieldRule {
    width: 2,
    max_leading: Some('5'),
    min: None,
    max: Some(59),
    separator: ":",
};

fn year_rule(reference: &ReferenceDate) -> FieldRule {
    FieldRule {
        width: 4,
        max_leading: None,
        min: Some(i64::from(reference.year())),
        max: None,
        separator: "/",
    }
}

impl FieldRule {
    /// Apply the leading-digit and range rules to the digits typed so far.
    fn check(&self, typed: &str) -> String {
        if typed.len() == 1 {
            let allowed = match (self.max_leading, typed.chars().next()) {
                (Some(limit), Some(first)) => first <= limit,
                _ => true,
            };
            return if allowed { typed.to_string() } else { String::new() };
        }

        if typed.len() == self.width {
            // Complete fields are all-digit and at most four wide.
            let value: i64 = typed.parse().unwrap_or_default();
            if let Some(min) = self.min.filter(|min| value < *min) {
                return format!("{min:0width$}", width = self.width);
            }
            if let Some(max) = self.max.filter(|max| value > *max) {
                return format!("{max:0width$}", width = self.width);
            }
        }

        typed.to_string()
    }
}

/// Slice `width` digits starting at `start`; empty when the input is shorter.
fn field_digits(digits: &str, start: usize, width: usize) -> &str {
    if start >= digits.len() {
        return "";
    }
    &digits[start..digits.len().min(start + width)]
}

/// Check each field in order and join the non-empty ones with their
/// separators.
fn format_fields(digits: &str, rules: &[FieldRule]) -> String {
    let mut out = String::new();
    let mut start = 0;
    for rule in rules {
        let field = rule.check(field_digits(digits, start, rule.width));
        if !field.is_empty() {
            out.push_str(rule.separator);
            out.push_str(&field);
        }
        start += rule.width;
    }
    tracing::trace!(digits, formatted = %out, "formatted date/time fields");
    out
}

/// Format as `dd/mm/yyyy hh:mm`, clamping each field as it completes.
///
/// Years before `reference.year()` are raised to it.
pub fn format_datetime(value: &str, reference: &ReferenceDate) -> String {
    let digits = clean_masked_value(value);
    let rules = [DAY, MONTH, year_rule(reference), HOUR, MINUTE];
    format_fields(truncate(&digits, DATETIME_DIGITS), &rules)
}

/// Format as ` hh:mm`.
///
/// The hour field keeps the leading space of the date-time layout, so the
/// output starts with a space whenever any digit is shown.
pub fn format_time(value: &str) -> String {
    let digits = clean_masked_value(value);
    format_fields(truncate(&digits, TIME_DIGITS), &[HOUR, MINUTE])
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// `dd/mm/yyyy hh:mm` is the longest possible date-time display.
        #[test]
        fn datetime_fits_layout(s in "[0-9]{0,20}", year in 1000i32..9999) {
            let reference = ReferenceDate::from_year(year).unwrap();
            prop_assert!(format_datetime(&s, &reference).len() <= 16);
        }

        /// ` hh:mm` is the longest possible time display.
        #[test]
        fn time_fits_layout(s in "[0-9]{0,10}") {
            prop_assert!(format_time(&s).len() <= 6);
        }

        /// Completed hours and minutes are always in range.
        #[test]
        fn complete_time_in_range(s in "[0-9]{4}") {
            let out = format_time(&s);
            let hour: u32 = out[1..3].parse().unwrap();
            let minute: u32 = out[4..6].parse().unwrap();
            prop_assert!(hour <= 23);
            prop_assert!(minute <= 59);
        }
    }
}
