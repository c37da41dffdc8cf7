//! End-to-end conversion of a fund's history page into an output file.
//!
//! A run is a single sequential pass: fetch one page, extract the embedded
//! history, write it out. Expected gaps (unreachable page, no history
//! array) come back as variants of [`Download`] / [`Conversion`]; a page
//! whose history no longer decodes is an error.

use navscrape_extract::{ExtractError, NavExtraction, extract_nav_records, extract_selected_fund};
use navscrape_fetch::{FetchClient, FetchError, FetchFailure, FetchOutcome};
use navscrape_format::{FormatError, OutputFormat, write_file};
use navscrape_types::{DateInput, FundQuery};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

/// Errors that abort a run.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// The query was invalid; nothing was fetched.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The page's history array is present but unreadable.
    #[error(transparent)]
    Extract(#[from] ExtractError),

    /// The output file could not be written.
    #[error(transparent)]
    Format(#[from] FormatError),
}

/// Result of converting page text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Conversion {
    /// The history was written.
    Written {
        /// Number of records written, excluding the header.
        rows: usize,
        /// The output file.
        path: PathBuf,
    },
    /// The page has no history array; no file was written.
    NoData,
}

/// Result of downloading and converting a fund's history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Download {
    /// The history was written.
    Written {
        /// Number of records written, excluding the header.
        rows: usize,
        /// The output file.
        path: PathBuf,
    },
    /// The page was fetched but has no history array; no file was written.
    NoData,
    /// The page could not be fetched; no file was written.
    Unavailable(FetchFailure),
}

impl From<Conversion> for Download {
    fn from(conversion: Conversion) -> Self {
        match conversion {
            Conversion::Written { rows, path } => Self::Written { rows, path },
            Conversion::NoData => Self::NoData,
        }
    }
}

impl std::fmt::Display for Download {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Written { rows, path } => {
                write!(f, "Wrote {rows} lines to {}", path.display())
            }
            Self::NoData => write!(f, "No NAV history found in page; nothing to convert"),
            Self::Unavailable(failure) => write!(f, "No data: {failure}"),
        }
    }
}

/// Extracts the NAV history from page text and writes it to `output`.
///
/// The output file is replaced, so converting the same page twice yields
/// identical files. When the page has no history array no file is created.
///
/// # Errors
///
/// Returns an error if the history array does not decode or the output
/// cannot be written.
pub fn convert_page(
    page: &str,
    output: &Path,
    format: OutputFormat,
) -> Result<Conversion, PipelineError> {
    let records = match extract_nav_records(page)? {
        NavExtraction::Records(records) => records,
        NavExtraction::NotFound => return Ok(Conversion::NoData),
    };
    let rows = write_file(&records, output, format)?;
    Ok(Conversion::Written {
        rows,
        path: output.to_path_buf(),
    })
}

/// Downloads a fund's NAV history and writes it to `output`.
///
/// # Errors
///
/// Returns an error, before any request, if the fund code or dates are
/// invalid; or after the request if the page's history does not decode or
/// the output cannot be written.
pub async fn download(
    client: &FetchClient,
    fund_code: &str,
    start: impl Into<DateInput>,
    end: impl Into<DateInput>,
    output: &Path,
    format: OutputFormat,
) -> Result<Download, PipelineError> {
    let query = FundQuery::parse(fund_code, start, end).map_err(FetchError::from)?;
    download_query(client, &query, output, format).await
}

/// Downloads the history for a validated query and writes it to `output`.
///
/// # Errors
///
/// Returns an error if the page's history does not decode or the output
/// cannot be written.
pub async fn download_query(
    client: &FetchClient,
    query: &FundQuery,
    output: &Path,
    format: OutputFormat,
) -> Result<Download, PipelineError> {
    let page = match client.fetch_query(query).await {
        FetchOutcome::Page(page) => page,
        FetchOutcome::Unavailable(failure) => return Ok(Download::Unavailable(failure)),
    };

    if let Some(selected) = extract_selected_fund(&page.body)?
        && !selected.eq_ignore_ascii_case(query.code())
    {
        warn!(requested = query.code(), %selected, "page was rendered for a different fund");
    }

    let outcome = Download::from(convert_page(&page.body, output, format)?);
    info!(fund = query.code(), range = %query.range(), "{outcome}");
    Ok(outcome)
}
