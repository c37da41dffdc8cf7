//! Embedded JSON array extraction for navscrape.
//!
//! History pages carry their data as script assignments of the form
//! `let performArray = JSON.parse('[ ... ]');`. This crate provides:
//!
//! - [`extract_array`] - Locates the raw text of a named array
//! - [`decode_array`] - Repairs and decodes a captured array
//! - [`extract_nav_records`] - NAV history (`performArray`)
//! - [`extract_fund_list`] - Fund catalogue (`fundArray`)
//! - [`extract_selected_fund`] - Fund code the page was rendered for

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/navscrape/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod decode;
mod error;
mod pattern;
mod records;

pub use decode::{decode_array, decode_nav_records, ensure_array};
pub use error::ExtractError;
pub use pattern::{
    Captured, Extraction, FUND_ARRAY, PERFORM_ARRAY, PatternKind, capture_all, extract_array,
    extract_selected_fund,
};
pub use records::{NavExtraction, extract_fund_list, extract_nav_records};
