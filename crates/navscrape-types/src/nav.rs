//! NAV history records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// chrono format of `pf_date` values.
pub const NAV_DATE_FORMAT: &str = "%Y-%m-%d";

/// One historical NAV data point as published by the source page.
///
/// All values are kept as the strings the page carries so that output
/// reproduces them exactly. Only `pf_date` and `pf_price` are required;
/// decoding a record without either fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavRecord {
    /// NAV date, `yyyy-mm-dd`.
    pub pf_date: String,
    /// Official NAV per unit.
    pub pf_price: String,
    /// Fund code the record belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub p_code: Option<String>,
    /// Offer (buy) price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pf_buy: Option<String>,
    /// Bid (sell) price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pf_sell: Option<String>,
    /// Units outstanding.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pf_units: Option<String>,
    /// Total net asset value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pf_value: Option<String>,
    /// Weekday index.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pf_day: Option<String>,
    /// Display date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pf_date_show: Option<String>,
}

impl NavRecord {
    /// Creates a record with only the required fields set.
    #[must_use]
    pub fn new(date: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            pf_date: date.into(),
            pf_price: price.into(),
            p_code: None,
            pf_buy: None,
            pf_sell: None,
            pf_units: None,
            pf_value: None,
            pf_day: None,
            pf_date_show: None,
        }
    }

    /// Returns the NAV date exactly as published.
    #[must_use]
    pub fn date(&self) -> &str {
        &self.pf_date
    }

    /// Returns the official NAV exactly as published.
    #[must_use]
    pub fn price(&self) -> &str {
        &self.pf_price
    }

    /// Parses the NAV date, or `None` if it is not `yyyy-mm-dd`.
    #[must_use]
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.pf_date, NAV_DATE_FORMAT).ok()
    }
}
