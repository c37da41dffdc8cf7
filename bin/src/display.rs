//! Display utilities and output formatting for the navscrape CLI.

use chrono::NaiveDate;
use clap::ValueEnum;
use indicatif::{ProgressBar, ProgressStyle};
use navscrape_lib::prelude::*;
use std::path::PathBuf;
use std::time::Duration;

/// Output format for converted history.
#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum Format {
    Csv,
    Tsv,
    Json,
    Ndjson,
}

impl Format {
    /// Returns the file extension for this format.
    pub(crate) const fn extension(&self) -> &'static str {
        self.output_format().extension()
    }

    pub(crate) const fn output_format(&self) -> OutputFormat {
        match self {
            Self::Csv => OutputFormat::Csv,
            Self::Tsv => OutputFormat::Tsv,
            Self::Json => OutputFormat::Json,
            Self::Ndjson => OutputFormat::Ndjson,
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Default output path: `<FUND>-<yyyymmdd of end>.<ext>`.
pub(crate) fn default_output(fund: &str, end: NaiveDate, format: Format) -> PathBuf {
    PathBuf::from(format!(
        "{}-{}.{}",
        fund.trim(),
        end.format("%Y%m%d"),
        format.extension()
    ))
}

/// Spinner shown while the page downloads.
pub(crate) fn spinner(quiet: bool, message: String) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .expect("Invalid progress template"),
    );
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Prints the fund catalogue as a table.
pub(crate) fn print_funds(funds: &[FundEntry]) {
    if funds.is_empty() {
        println!("No funds found.");
        return;
    }

    println!("{:<20} {:<12} NAME", "CODE", "LATEST");
    println!("{}", "-".repeat(60));

    for fund in funds {
        println!(
            "{:<20} {:<12} {}",
            fund.code,
            fund.date.as_deref().unwrap_or("-"),
            fund.name.as_deref().unwrap_or("")
        );
    }

    println!("\nTotal: {} funds", funds.len());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output() {
        let end = NaiveDate::from_ymd_opt(2025, 9, 12).unwrap();
        assert_eq!(
            default_output("BFIXED", end, Format::Csv),
            PathBuf::from("BFIXED-20250912.csv")
        );
        assert_eq!(
            default_output(" bfixed ", end, Format::Csv),
            PathBuf::from("bfixed-20250912.csv")
        );
        assert_eq!(
            default_output("B-TREASURY", end, Format::Ndjson),
            PathBuf::from("B-TREASURY-20250912.ndjson")
        );
    }
}
