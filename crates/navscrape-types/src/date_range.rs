//! Date inputs and date ranges.

use chrono::{Datelike, NaiveDate};

use crate::DateRangeError;

/// chrono format of textual date inputs (`dd-mm-yyyy`).
pub const DATE_INPUT_FORMAT: &str = "%d-%m-%Y";

/// A date given either as `dd-mm-yyyy` text or as a calendar date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateInput {
    /// Text to be parsed strictly as `dd-mm-yyyy`.
    Text(String),
    /// An already-constructed calendar date.
    Date(NaiveDate),
}

impl DateInput {
    /// Resolves the input to a calendar date.
    ///
    /// # Errors
    ///
    /// Returns [`DateRangeError::Parse`] if the text is not a valid
    /// `dd-mm-yyyy` date (wrong separator, non-numeric field, impossible day
    /// or month).
    pub fn resolve(&self) -> Result<NaiveDate, DateRangeError> {
        match self {
            Self::Date(date) => Ok(*date),
            Self::Text(text) => parse_input_date(text),
        }
    }
}

impl From<&str> for DateInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for DateInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<NaiveDate> for DateInput {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

// chrono accepts single-digit fields and surrounding slack that `%d-%m-%Y`
// should reject, so the shape is checked first.
fn parse_input_date(text: &str) -> Result<NaiveDate, DateRangeError> {
    let err = || DateRangeError::Parse {
        input: text.to_string(),
    };
    let bytes = text.as_bytes();
    let shape_ok = bytes.len() == 10
        && bytes[2] == b'-'
        && bytes[5] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 2 || i == 5 || b.is_ascii_digit());
    if !shape_ok {
        return Err(err());
    }
    NaiveDate::parse_from_str(text, DATE_INPUT_FORMAT).map_err(|_| err())
}

/// A range of dates for a NAV history request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    /// Start date (inclusive).
    pub start: NaiveDate,
    /// End date (inclusive).
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a new date range, validating that start <= end.
    ///
    /// # Errors
    ///
    /// Returns an error if start > end.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DateRangeError> {
        if start > end {
            return Err(DateRangeError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Builds a range from two date inputs.
    ///
    /// # Errors
    ///
    /// Returns an error if either input fails to parse or start > end.
    pub fn parse(
        start: impl Into<DateInput>,
        end: impl Into<DateInput>,
    ) -> Result<Self, DateRangeError> {
        let start = start.into().resolve()?;
        let end = end.into().resolve()?;
        Self::new(start, end)
    }

    /// Creates a date range for a single day.
    #[must_use]
    pub const fn single_day(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// Returns `(day, month, year)` of the start date.
    #[must_use]
    pub fn start_components(&self) -> (u32, u32, i32) {
        components(self.start)
    }

    /// Returns `(day, month, year)` of the end date.
    #[must_use]
    pub fn end_components(&self) -> (u32, u32, i32) {
        components(self.end)
    }
}

fn components(date: NaiveDate) -> (u32, u32, i32) {
    (date.day(), date.month(), date.year())
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}
