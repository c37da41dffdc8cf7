//! Error types for navscrape input validation.

use chrono::NaiveDate;
use thiserror::Error;

/// Error for invalid dates and date ranges.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateRangeError {
    /// Date text did not match `dd-mm-yyyy` or named an impossible date.
    #[error("Invalid date '{input}': expected dd-mm-yyyy")]
    Parse {
        /// The rejected input.
        input: String,
    },

    /// Start date is after end date.
    #[error("Invalid date range: {start} > {end}")]
    InvalidRange {
        /// The start date.
        start: NaiveDate,
        /// The end date.
        end: NaiveDate,
    },
}

/// Error for invalid fund codes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FundQueryError {
    /// The fund code was empty or whitespace.
    #[error("Fund code must not be empty")]
    EmptyCode,

    /// The fund code contained a character outside `[A-Za-z0-9._-]`.
    #[error("Invalid fund code '{0}'")]
    InvalidCode(String),

    /// The date range was invalid.
    #[error(transparent)]
    DateRange(#[from] DateRangeError),
}
