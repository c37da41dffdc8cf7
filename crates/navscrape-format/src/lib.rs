//! Output formatters for navscrape.
//!
//! This crate provides formatters for writing NAV history to delimited
//! text or JSON:
//!
//! - [`CsvFormatter`] - `DATE,NAV` delimited text
//! - [`JsonFormatter`] - JSON array or NDJSON format
//! - [`write_file`] - Writes records to a path, replacing any existing file

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/navscrape/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod csv;
mod formatter;
mod json;

pub use crate::csv::CsvFormatter;
pub use formatter::{FormatError, Formatter, OutputFormat, write_file};
pub use json::{JsonFormatter, JsonStyle};
