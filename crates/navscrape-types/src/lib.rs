//! Core types for the navscrape NAV history downloader.
//!
//! This crate provides the fundamental data structures used throughout navscrape:
//!
//! - [`DateInput`] - A `dd-mm-yyyy` string or a calendar date
//! - [`DateRange`] - Validated date range for a history request
//! - [`FundQuery`] - Fund code plus date range, the input of a fetch
//! - [`NavRecord`] - One historical NAV data point
//! - [`FundEntry`] - One fund from the site's catalogue

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/navscrape/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod date_range;
mod error;
mod fund;
mod nav;

pub use date_range::{DATE_INPUT_FORMAT, DateInput, DateRange};
pub use error::{DateRangeError, FundQueryError};
pub use fund::{FundEntry, FundQuery};
pub use nav::{NAV_DATE_FORMAT, NavRecord};
