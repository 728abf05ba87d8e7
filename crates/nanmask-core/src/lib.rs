//! # nanmask-core — Input Masking Engine
//!
//! Pure string transformations that turn raw keystrokes into the formatted
//! display of a masked form field, and back into the cleaned value a form
//! stores. Used by the nan UI kit's text inputs.
//!
//! ## Masks
//!
//! - `cpf`, `cnpj`, `cep`, `phone` — progressive separator insertion with a
//!   fixed digit capacity ([`document`]).
//! - `currency` — cents rendered as `R$ 1234,56` ([`currency`]).
//! - `naturalNumber` — digits without leading zeros ([`natural`]).
//! - `datetime`, `time` — per-field clamping as digits are typed
//!   ([`datetime`]).
//!
//! ## Key Design Principles
//!
//! 1. **Formatting is total.** Every formatter accepts any string and
//!    returns a best-effort display. Unknown or absent masks pass the input
//!    through unchanged.
//!
//! 2. **No hidden clock.** The year floor of the date-time mask comes from
//!    an explicit [`ReferenceDate`] held by a [`Masker`]. Only the
//!    convenience functions [`apply_mask`] and [`apply_mask_token`] read
//!    today's date.
//!
//! 3. **Closed mask set.** [`MaskKind`] is exhaustive; adding a mask forces
//!    every `match` to handle it.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - No I/O; the only side effects are `tracing` events.

pub mod currency;
pub mod datetime;
pub mod digits;
pub mod document;
pub mod error;
pub mod kind;
pub mod mask;
pub mod natural;
pub mod reference;

// Re-export primary types for ergonomic imports.
pub use currency::{format_currency, parse_cents};
pub use datetime::{format_datetime, format_time};
pub use digits::clean_masked_value;
pub use document::{format_cep, format_cnpj, format_cpf, format_phone};
pub use error::MaskError;
pub use kind::{MaskKind, MASK_KIND_COUNT};
pub use mask::{apply_mask, apply_mask_token, resolve_token, MaskedChange, Masker};
pub use natural::format_natural_number;
pub use reference::ReferenceDate;
