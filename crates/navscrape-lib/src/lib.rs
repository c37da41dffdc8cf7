//! Library for downloading mutual fund NAV history into delimited text.
//!
//! This is a facade crate that re-exports functionality from the navscrape
//! workspace crates and adds the end-to-end [`pipeline`].
//!
//! # Quick Start
//!
//! ```ignore
//! use navscrape_lib::prelude::*;
//! use std::path::Path;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = FetchClient::with_defaults()?;
//!     let outcome = pipeline::download(
//!         &client,
//!         "BFIXED",
//!         "01-01-2024",
//!         "12-09-2025",
//!         Path::new("BFIXED-20250912.csv"),
//!         OutputFormat::Csv,
//!     )
//!     .await?;
//!     println!("{outcome}");
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/navscrape/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod pipeline;

// Re-export core types
pub use navscrape_types::*;

// Re-export fetch functionality
pub use navscrape_fetch::{
    ClientConfig, DEFAULT_DUMP_PATH, FetchClient, FetchError, FetchFailure, FetchOutcome, RawPage,
    url,
};

// Re-export extraction
pub use navscrape_extract::{
    ExtractError, Extraction, NavExtraction, PatternKind, decode_nav_records, extract_array,
    extract_fund_list, extract_nav_records, extract_selected_fund,
};

// Re-export formatters
pub use navscrape_format::{
    CsvFormatter, FormatError, Formatter, JsonFormatter, JsonStyle, OutputFormat, write_file,
};

/// Prelude module for convenient imports.
///
/// ```
/// use navscrape_lib::prelude::*;
/// ```
pub mod prelude {
    pub use navscrape_types::{
        DateInput, DateRange, DateRangeError, FundEntry, FundQuery, FundQueryError, NavRecord,
    };

    pub use navscrape_fetch::{ClientConfig, FetchClient, FetchFailure, FetchOutcome, RawPage};

    pub use navscrape_extract::{NavExtraction, extract_fund_list, extract_nav_records};

    pub use navscrape_format::{CsvFormatter, Formatter, JsonFormatter, OutputFormat};

    pub use crate::pipeline::{self, Conversion, Download, PipelineError};
}
