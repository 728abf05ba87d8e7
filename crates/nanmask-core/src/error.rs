//! # Error Types
//!
//! Formatting itself is total and never fails. Errors only arise on the
//! fallible edges of the engine: parsing a mask token, parsing a reference
//! date, and converting a currency digit string into a number.

use thiserror::Error;

/// Errors raised by the fallible parts of the masking engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MaskError {
    /// The token does not name any known mask.
    #[error("unknown mask: {0:?}")]
    UnknownMask(String),

    /// The currency digit string does not fit in a `u128` count of cents.
    #[error("currency value with {digits} significant digits exceeds u128 cents")]
    CurrencyOverflow {
        /// Number of significant digits after stripping leading zeros.
        digits: usize,
    },

    /// The reference date could not be parsed or constructed.
    #[error("invalid reference date: {0}")]
    InvalidReferenceDate(String),
}
