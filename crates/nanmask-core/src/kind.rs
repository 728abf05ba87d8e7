//! # Mask Kinds — Closed Set of Mask Identifiers
//!
//! `MaskKind` is the one definition of which masks exist. Every `match` on it
//! is exhaustive, so adding a mask forces the dispatcher, the CLI listing and
//! the tests to handle it.
//!
//! The string tokens (`naturalNumber`, `cpf`, `cnpj`, `phone`, `cep`,
//! `currency`, `datetime`, `time`) are what the UI layer passes around; they
//! are used verbatim by `Display`, `FromStr` and serde.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::MaskError;

/// A named formatting rule applied to the digits of a raw input.
///
/// | Token | Display shape | Digit cap |
/// |-------|---------------|-----------|
/// | `naturalNumber` | `12345` | none |
/// | `cpf` | `ddd.ddd.ddd-dd` | 11 |
/// | `cnpj` | `dd.ddd.ddd/dddd-dd` | 14 |
/// | `phone` | `(dd) ddddd-dddd` | 11 |
/// | `cep` | `ddddd-ddd` | 8 |
/// | `currency` | `R$ 1234,56` | none |
/// | `datetime` | `dd/mm/yyyy hh:mm` | 12 |
/// | `time` | ` hh:mm` | 4 |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaskKind {
    /// Non-negative integer without leading zeros.
    #[serde(rename = "naturalNumber")]
    NaturalNumber,
    /// Brazilian individual taxpayer number.
    #[serde(rename = "cpf")]
    Cpf,
    /// Brazilian company registry number.
    #[serde(rename = "cnpj")]
    Cnpj,
    /// Brazilian mobile phone number with area code.
    #[serde(rename = "phone")]
    Phone,
    /// Brazilian postal code.
    #[serde(rename = "cep")]
    Cep,
    /// Brazilian real amount, typed as cents.
    #[serde(rename = "currency")]
    Currency,
    /// Day, month, year, hour and minute.
    #[serde(rename = "datetime")]
    DateTime,
    /// Hour and minute.
    #[serde(rename = "time")]
    Time,
}

/// Number of mask kinds.
pub const MASK_KIND_COUNT: usize = 8;

impl MaskKind {
    /// All mask kinds, in declaration order.
    pub fn all() -> &'static [MaskKind] {
        &[
            Self::NaturalNumber,
            Self::Cpf,
            Self::Cnpj,
            Self::Phone,
            Self::Cep,
            Self::Currency,
            Self::DateTime,
            Self::Time,
        ]
    }

    /// The token used on the wire and in the UI layer.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NaturalNumber => "naturalNumber",
            Self::Cpf => "cpf",
            Self::Cnpj => "cnpj",
            Self::Phone => "phone",
            Self::Cep => "cep",
            Self::Currency => "currency",
            Self::DateTime => "datetime",
            Self::Time => "time",
        }
    }

    /// Maximum number of digits the mask keeps, or `None` when uncapped.
    pub fn max_digits(&self) -> Option<usize> {
        match self {
            Self::Cpf => Some(crate::document::CPF_DIGITS),
            Self::Cnpj => Some(crate::document::CNPJ_DIGITS),
            Self::Phone => Some(crate::document::PHONE_DIGITS),
            Self::Cep => Some(crate::document::CEP_DIGITS),
            Self::DateTime => Some(crate::datetime::DATETIME_DIGITS),
            Self::Time => Some(crate::datetime::TIME_DIGITS),
            Self::NaturalNumber | Self::Currency => None,
        }
    }

    /// Whether the mask inserts separators progressively without touching
    /// digit values. Re-formatting such a mask's output is stable.
    pub fn is_separator_mask(&self) -> bool {
        matches!(self, Self::Cpf | Self::Cnpj | Self::Phone | Self::Cep)
    }
}

impl std::fmt::Display for MaskKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MaskKind {
    type Err = MaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "naturalNumber" => Ok(Self::NaturalNumber),
            "cpf" => Ok(Self::Cpf),
            "cnpj" => Ok(Self::Cnpj),
            "phone" => Ok(Self::Phone),
            "cep" => Ok(Self::Cep),
            "currency" => Ok(Self::Currency),
            "datetime" => Ok(Self::DateTime),
            "time" => Ok(Self::Time),
            other => Err(MaskError::UnknownMask(other.to_string())),
        }
    }
}
