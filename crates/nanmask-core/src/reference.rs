//! # Reference Date
//!
//! The date-time mask never lets a completed year fall before the current
//! year. "Current" is supplied explicitly as a [`ReferenceDate`] so the
//! formatters stay pure; only [`ReferenceDate::today()`] reads the clock.

use chrono::{Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::MaskError;

/// The calendar date the masking engine treats as "today".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ReferenceDate(NaiveDate);

impl ReferenceDate {
    /// The current UTC calendar date.
    pub fn today() -> Self {
        Self(Utc::now().date_naive())
    }

    /// Wrap an existing calendar date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    /// January 1st of `year`.
    ///
    /// # Errors
    ///
    /// Returns [`MaskError::InvalidReferenceDate`] if chrono cannot
    /// represent the year.
    pub fn from_year(year: i32) -> Result<Self, MaskError> {
        NaiveDate::from_ymd_opt(year, 1, 1)
            .map(Self)
            .ok_or_else(|| MaskError::InvalidReferenceDate(format!("year {year} out of range")))
    }

    /// Access the inner date.
    pub fn as_date(&self) -> &NaiveDate {
        &self.0
    }

    /// The calendar year used as the lower bound for typed years.
    pub fn year(&self) -> i32 {
        self.0.year()
    }
}

impl Default for ReferenceDate {
    fn default() -> Self {
        Self::today()
    }
}

impl std::fmt::Display for ReferenceDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for ReferenceDate {
    type Err = MaskError;

    /// Parse an ISO 8601 calendar date (`YYYY-MM-DD`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Self)
            .map_err(|e| MaskError::InvalidReferenceDate(format!("{s:?}: {e}")))
    }
}
