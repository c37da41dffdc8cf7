//! Download command implementation.
//!
//! This module fetches a fund's history page and converts the embedded NAV
//! history to the requested output format.

use crate::display::{Format, default_output, spinner};
use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use navscrape_lib::prelude::*;
use std::path::PathBuf;

/// Download NAV history for a fund.
pub(crate) async fn download(
    fund: &str,
    start_str: Option<&str>,
    end_str: Option<&str>,
    output: Option<PathBuf>,
    format: Format,
    config: ClientConfig,
    quiet: bool,
) -> Result<()> {
    let query = build_query(fund, start_str, end_str)?;

    // Determine output path (default to <FUND>-<yyyymmdd>.<format>)
    let output = output.unwrap_or_else(|| default_output(query.code(), query.range().end, format));

    let client = FetchClient::new(config)?;

    let progress = spinner(quiet, format!("{} {}", query.code(), query.range()));
    let result = pipeline::download_query(&client, &query, &output, format.output_format()).await;
    progress.finish_and_clear();

    let outcome = result.with_context(|| {
        format!("Failed to convert NAV history for {}; the page layout may have changed", query.code())
    })?;

    match outcome {
        Download::Written { .. } => {
            if !quiet {
                println!("{outcome}");
            }
        }
        Download::NoData | Download::Unavailable(_) => eprintln!("{outcome}"),
    }

    Ok(())
}

/// Resolves the CLI date arguments into a query.
///
/// End defaults to today and start to 1 January of the end year.
fn build_query(fund: &str, start_str: Option<&str>, end_str: Option<&str>) -> Result<FundQuery> {
    let end = match end_str {
        Some(s) => DateInput::from(s)
            .resolve()
            .with_context(|| format!("Invalid end date: {s}"))?,
        None => chrono::Local::now().date_naive(),
    };

    let start = match start_str {
        Some(s) => DateInput::from(s)
            .resolve()
            .with_context(|| format!("Invalid start date: {s}"))?,
        None => NaiveDate::from_ymd_opt(end.year(), 1, 1)
            .with_context(|| format!("No 1 January in year {}", end.year()))?,
    };

    let range = DateRange::new(start, end)?;
    Ok(FundQuery::new(fund, range)?)
}
