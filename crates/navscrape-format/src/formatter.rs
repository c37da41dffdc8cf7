//! Output format abstraction.

use navscrape_types::NavRecord;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use thiserror::Error;
use tracing::info;

use crate::{CsvFormatter, JsonFormatter};

/// Output format identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    /// Comma-separated `DATE,NAV`.
    #[default]
    Csv,
    /// Tab-separated `DATE\tNAV`.
    Tsv,
    /// JSON array format.
    Json,
    /// Newline-delimited JSON format.
    Ndjson,
}

impl OutputFormat {
    /// Returns the file extension for this format.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Tsv => "tsv",
            Self::Json => "json",
            Self::Ndjson => "ndjson",
        }
    }

    /// Returns all available formats.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Csv, Self::Tsv, Self::Json, Self::Ndjson]
    }

    /// Writes records with this format's default formatter.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn write_navs<W: Write>(&self, records: &[NavRecord], writer: W) -> Result<(), FormatError> {
        match self {
            Self::Csv => CsvFormatter::new().write_navs(records, writer),
            Self::Tsv => CsvFormatter::tsv().write_navs(records, writer),
            Self::Json => JsonFormatter::new().write_navs(records, writer),
            Self::Ndjson => JsonFormatter::ndjson().write_navs(records, writer),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "tsv" => Ok(Self::Tsv),
            "json" => Ok(Self::Json),
            "ndjson" | "jsonl" => Ok(Self::Ndjson),
            _ => Err(FormatError::UnknownFormat(s.to_string())),
        }
    }
}

/// Errors that can occur during formatting.
#[derive(Error, Debug)]
pub enum FormatError {
    /// Unknown output format.
    #[error("Unknown format: {0}")]
    UnknownFormat(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Trait for output formatters.
pub trait Formatter: Send + Sync {
    /// Writes NAV records to the output, in the order given.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_navs<W: Write>(&self, records: &[NavRecord], writer: W) -> Result<(), FormatError>;
}

/// Writes records to `path` in `format`, truncating any existing file.
///
/// Returns the number of records written.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn write_file(
    records: &[NavRecord],
    path: &Path,
    format: OutputFormat,
) -> Result<usize, FormatError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    format.write_navs(records, &mut writer)?;
    writer.flush()?;
    info!(rows = records.len(), path = %path.display(), %format, "wrote NAV history");
    Ok(records.len())
}
