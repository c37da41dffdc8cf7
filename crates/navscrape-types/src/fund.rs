//! Fund queries and the site's fund catalogue.

use serde::{Deserialize, Serialize};

use crate::{DateInput, DateRange, FundQueryError};

/// A validated request for one fund's NAV history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FundQuery {
    code: String,
    range: DateRange,
}

impl FundQuery {
    /// Creates a query for `code` over `range`.
    ///
    /// The code is trimmed but otherwise kept as given; it must be non-empty
    /// and made of ASCII alphanumerics, `-`, `_` or `.`.
    ///
    /// # Errors
    ///
    /// Returns an error if the fund code is empty or has invalid characters.
    pub fn new(code: &str, range: DateRange) -> Result<Self, FundQueryError> {
        let code = code.trim();
        if code.is_empty() {
            return Err(FundQueryError::EmptyCode);
        }
        if !code
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
        {
            return Err(FundQueryError::InvalidCode(code.to_string()));
        }
        Ok(Self {
            code: code.to_string(),
            range,
        })
    }

    /// Creates a query from a fund code and two date inputs.
    ///
    /// # Errors
    ///
    /// Returns an error if the code or either date is invalid, or if the
    /// range is reversed.
    pub fn parse(
        code: &str,
        start: impl Into<DateInput>,
        end: impl Into<DateInput>,
    ) -> Result<Self, FundQueryError> {
        let range = DateRange::parse(start, end)?;
        Self::new(code, range)
    }

    /// Returns the fund code.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the requested date range.
    #[must_use]
    pub const fn range(&self) -> &DateRange {
        &self.range
    }
}

impl std::fmt::Display for FundQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.code, self.range)
    }
}

/// One entry of the fund catalogue embedded in every history page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundEntry {
    /// Fund code as used in history requests.
    pub code: String,
    /// Date of the latest published NAV.
    #[serde(default)]
    pub date: Option<String>,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_trims_code_and_keeps_case() {
        let query = FundQuery::parse(" bFixed ", "01-01-2024", "12-09-2025").unwrap();
        assert_eq!(query.code(), "bFixed");
        assert_eq!(query.range().start_components(), (1, 1, 2024));
    }

    #[test]
    fn test_query_accepts_hyphenated_code() {
        let query = FundQuery::parse("B-TREASURY", "01-01-2024", "02-01-2024").unwrap();
        assert_eq!(query.code(), "B-TREASURY");
    }

    #[test]
    fn test_query_rejects_empty_code() {
        let err = FundQuery::parse("  ", "01-01-2024", "02-01-2024").unwrap_err();
        assert_eq!(err, FundQueryError::EmptyCode);
    }

    #[test]
    fn test_query_rejects_query_string_injection() {
        let err = FundQuery::parse("BFIXED&date_from=1", "01-01-2024", "02-01-2024").unwrap_err();
        assert!(matches!(err, FundQueryError::InvalidCode(_)));
    }

    #[test]
    fn test_query_rejects_reversed_range() {
        let err = FundQuery::parse("BFIXED", "12-09-2025", "01-01-2024").unwrap_err();
        assert!(matches!(err, FundQueryError::DateRange(_)));
    }

    #[test]
    fn test_fund_entry_decode() {
        let entry: FundEntry = serde_json::from_str(
            r#"{"code": "B-TREASURY","date":"2025-09-12","name":"Bualuang Treasury"}"#,
        )
        .unwrap();
        assert_eq!(entry.code, "B-TREASURY");
        assert_eq!(entry.name.as_deref(), Some("Bualuang Treasury"));
    }
}
