//! # Digit Extraction
//!
//! Every formatter starts from the same place: the raw input reduced to its
//! ASCII digits. Only `0`-`9` count; other Unicode digits are dropped along
//! with letters, separators and whitespace.

/// Strip every character that is not an ASCII digit, preserving order.
///
/// This is also the "cleaned value" handed back to callers that need the
/// unformatted form of a masked field.
pub fn clean_masked_value(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

/// Keep at most `max` leading characters of a digit string.
///
/// Digit strings are ASCII, so the byte index is also the character index.
pub(crate) fn truncate(digits: &str, max: usize) -> &str {
    &digits[..digits.len().min(max)]
}

/// Split a digit string into consecutive fixed-width groups.
///
/// Stops at the first group that would be empty, so a partial input yields
/// only the groups it has reached. The final group may be shorter than its
/// width. Digits past the sum of `widths` are not returned.
pub(crate) fn split_groups<'a>(digits: &'a str, widths: &[usize]) -> Vec<&'a str> {
    let mut groups = Vec::with_capacity(widths.len());
    let mut rest = digits;
    for &width in widths {
        if rest.is_empty() {
            break;
        }
        let (head, tail) = rest.split_at(rest.len().min(width));
        groups.push(head);
        rest = tail;
    }
    groups
}
