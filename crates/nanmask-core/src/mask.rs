//! # Mask Dispatch
//!
//! The single entry point the UI layer calls. A [`Masker`] carries the
//! reference date used by the date-time mask and routes a raw input to the
//! formatter named by a [`MaskKind`]. No mask, or a token that names no
//! mask, returns the raw input untouched.
//!
//! [`Masker::change`] models one edit of a masked text field: it produces
//! both the text to display and the value to report to form state.

use serde::{Deserialize, Serialize};

use crate::currency::format_currency;
use crate::datetime::{format_datetime, format_time};
use crate::digits::clean_masked_value;
use crate::document::{format_cep, format_cnpj, format_cpf, format_phone};
use crate::kind::MaskKind;
use crate::natural::format_natural_number;
use crate::reference::ReferenceDate;

/// Result of one edit to a masked field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaskedChange {
    /// Text shown in the field.
    pub display: String,
    /// Value reported to the form: digits only for masked fields.
    pub value: String,
}

/// Applies masks relative to a fixed reference date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Masker {
    reference: ReferenceDate,
}

impl Masker {
    /// Create a masker that clamps years against `reference`.
    pub fn new(reference: ReferenceDate) -> Self {
        Self { reference }
    }

    /// The reference date used for year clamping.
    pub fn reference(&self) -> &ReferenceDate {
        &self.reference
    }

    /// Format `value` with `mask`. `None` returns `value` unchanged.
    pub fn apply(&self, value: &str, mask: Option<MaskKind>) -> String {
        let Some(mask) = mask else {
            return value.to_string();
        };
        match mask {
            MaskKind::Currency => format_currency(value),
            MaskKind::DateTime => format_datetime(value, &self.reference),
            MaskKind::Time => format_time(value),
            MaskKind::Cpf => format_cpf(value),
            MaskKind::Cnpj => format_cnpj(value),
            MaskKind::Cep => format_cep(value),
            MaskKind::NaturalNumber => format_natural_number(value),
            MaskKind::Phone => format_phone(value),
        }
    }

    /// Format `value` with a mask named by its token.
    ///
    /// Unrecognized tokens are passthrough, exactly like no mask at all.
    pub fn apply_token(&self, value: &str, token: Option<&str>) -> String {
        self.apply(value, resolve_token(token))
    }

    /// Process one edit of a field: what to show and what to report.
    ///
    /// Without a mask the input is shown and reported as typed. With a mask
    /// the input is first reduced to digits. The reported value is the
    /// digits left in the display, except for date-times, which report the
    /// digits as typed so that clamped fields can be told apart from
    /// typed ones.
    pub fn change(&self, input: &str, mask: Option<MaskKind>) -> MaskedChange {
        let Some(kind) = mask else {
            return MaskedChange {
                display: input.to_string(),
                value: input.to_string(),
            };
        };

        let typed = clean_masked_value(input);
        let display = self.apply(&typed, Some(kind));
        let value = match kind {
            MaskKind::DateTime => typed,
            _ => clean_masked_value(&display),
        };
        MaskedChange { display, value }
    }

    /// The text to show for a field's initial value.
    ///
    /// An empty value stays empty even for masks that would format nothing
    /// as something, such as `naturalNumber`.
    pub fn initial_display(&self, value: &str, mask: Option<MaskKind>) -> String {
        if value.is_empty() {
            return String::new();
        }
        self.apply(value, mask)
    }
}

/// Parse an optional mask token, treating unknown tokens as no mask.
pub fn resolve_token(token: Option<&str>) -> Option<MaskKind> {
    let token = token?;
    match token.parse::<MaskKind>() {
        Ok(kind) => Some(kind),
        Err(e) => {
            tracing::debug!(%e, "unrecognized mask token; passing value through");
            None
        }
    }
}

/// Format `value` with `mask`, clamping years against today's date.
pub fn apply_mask(value: &str, mask: Option<MaskKind>) -> String {
    Masker::default().apply(value, mask)
}

/// Format `value` with a mask named by its token, clamping years against
/// today's date. Unknown tokens are passthrough.
pub fn apply_mask_token(value: &str, token: Option<&str>) -> String {
    Masker::default().apply_token(value, token)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn masker() -> Masker {
        Masker::new(ReferenceDate::from_year(2026).unwrap())
    }

    #[test]
    fn test_no_mask_is_identity() {
        assert_eq!(masker().apply("12345678901234", None), "12345678901234");
        assert_eq!(masker().apply("R$ abc", None), "R$ abc");
    }

    #[test]
    fn test_unknown_token_is_identity() {
        assert_eq!(
            masker().apply_token("12345678901234", Some("unknown")),
            "12345678901234"
        );
        assert_eq!(masker().apply_token("a-b", Some("")), "a-b");
        assert_eq!(masker().apply_token("a-b", None), "a-b");
    }

    #[test]
    fn test_known_tokens_dispatch() {
        let m = masker();
        assert_eq!(m.apply_token("12345", Some("currency")), "R$ 123,45");
        assert_eq!(m.apply_token("12345678901", Some("cpf")), "123.456.789-01");
        assert_eq!(m.apply_token("12345678901234", Some("cnpj")), "12.345.678/9012-34");
        assert_eq!(m.apply_token("12345678", Some("cep")), "12345-678");
        assert_eq!(m.apply_token("012345", Some("naturalNumber")), "12345");
        assert_eq!(m.apply_token("11987654321", Some("phone")), "(11) 98765-4321");
        assert_eq!(m.apply_token("1230", Some("time")), " 12:30");
        assert_eq!(
            m.apply_token("010120241230", Some("datetime")),
            "01/01/2026 12:30"
        );
    }

    #[test]
    fn test_resolve_token() {
        assert_eq!(resolve_token(Some("cpf")), Some(MaskKind::Cpf));
        assert_eq!(resolve_token(Some("Cpf")), None);
        assert_eq!(resolve_token(None), None);
    }

    #[test]
    fn test_change_without_mask() {
        let change = masker().change("Hello, 42", None);
        assert_eq!(change.display, "Hello, 42");
        assert_eq!(change.value, "Hello, 42");
    }

    #[test]
    fn test_change_reports_clean_digits() {
        let change = masker().change("123.456.789-01", Some(MaskKind::Cpf));
        assert_eq!(change.display, "123.456.789-01");
        assert_eq!(change.value, "12345678901");

        let change = masker().change("R$ 0,012", Some(MaskKind::Currency));
        assert_eq!(change.display, "R$ 0,12");
        assert_eq!(change.value, "012");
    }

    #[test]
    fn test_change_drops_truncated_digits_from_value() {
        let change = masker().change("123456789", Some(MaskKind::Cep));
        assert_eq!(change.display, "12345-678");
        assert_eq!(change.value, "12345678");
    }

    #[test]
    fn test_change_datetime_reports_typed_digits() {
        let change = masker().change("32/12/2024 12:30", Some(MaskKind::DateTime));
        assert_eq!(change.display, "31/12/2026 12:30");
        assert_eq!(change.value, "321220241230");
    }

    #[test]
    fn test_initial_display() {
        let m = masker();
        assert_eq!(m.initial_display("", Some(MaskKind::NaturalNumber)), "");
        assert_eq!(m.initial_display("", None), "");
        assert_eq!(m.initial_display("007", Some(MaskKind::NaturalNumber)), "7");
        assert_eq!(m.initial_display("01310100", Some(MaskKind::Cep)), "01310-100");
        assert_eq!(m.initial_display("free text", None), "free text");
    }

    #[test]
    fn test_masked_change_serde() {
        let change = masker().change("11987654321", Some(MaskKind::Phone));
        let json = serde_json::to_string(&change).unwrap();
        assert_eq!(json, r#"{"display":"(11) 98765-4321","value":"11987654321"}"#);
    }

    #[test]
    fn test_default_masker_uses_today() {
        assert_eq!(
            Masker::default().reference().year(),
            ReferenceDate::today().year()
        );
    }
}
