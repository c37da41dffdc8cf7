//! Typed extraction of the arrays a history page carries.

use navscrape_types::{FundEntry, NavRecord};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::{ExtractError, FUND_ARRAY, PERFORM_ARRAY, PatternKind, capture_all, decode_array};

/// Result of extracting the NAV history from a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavExtraction {
    /// The history array was found and decoded. It may be empty.
    Records(Vec<NavRecord>),
    /// The page has no history array; there is nothing to convert.
    NotFound,
}

impl NavExtraction {
    /// Returns the decoded records, if the array was found.
    #[must_use]
    pub fn records(&self) -> Option<&[NavRecord]> {
        match self {
            Self::Records(records) => Some(records),
            Self::NotFound => None,
        }
    }
}

/// Extracts the NAV history (`performArray`) from page text.
///
/// Each matching pattern's capture is decoded in turn and the first that
/// decodes wins, so a capture that over- or under-runs the array falls back
/// to the next pattern instead of being trusted blindly.
///
/// # Errors
///
/// Returns [`ExtractError::Decode`] if the array is present but no capture
/// decodes, including when a record lacks `pf_date` or `pf_price`.
pub fn extract_nav_records(page: &str) -> Result<NavExtraction, ExtractError> {
    match extract_decoded(page, PERFORM_ARRAY)? {
        Some(records) => Ok(NavExtraction::Records(records)),
        None => {
            warn!(
                pattern = %PatternKind::Anchored.source(PERFORM_ARRAY),
                "pattern not found"
            );
            Ok(NavExtraction::NotFound)
        }
    }
}

/// Extracts the fund catalogue (`fundArray`) from page text.
///
/// Returns `Ok(None)` if the page has no catalogue.
///
/// # Errors
///
/// Returns [`ExtractError::Decode`] if the catalogue is present but does
/// not decode.
pub fn extract_fund_list(page: &str) -> Result<Option<Vec<FundEntry>>, ExtractError> {
    extract_decoded(page, FUND_ARRAY)
}

fn extract_decoded<T: DeserializeOwned>(
    page: &str,
    name: &str,
) -> Result<Option<Vec<T>>, ExtractError> {
    let mut last_error = None;
    for captured in capture_all(page, name)? {
        match decode_array(&captured.text) {
            Ok(records) => {
                debug!(array = name, pattern = ?captured.pattern, count = records.len(), "decoded array");
                return Ok(Some(records));
            }
            Err(e) => {
                warn!(array = name, pattern = ?captured.pattern, error = %e, "capture did not decode");
                last_error = Some(e);
            }
        }
    }
    match last_error {
        Some(source) => Err(ExtractError::Decode {
            array: name.to_string(),
            source,
        }),
        None => Ok(None),
    }
}
