//! Funds command implementation.
//!
//! Every history page embeds the site's fund catalogue, so listing funds is
//! a one-day history request for any fund.

use crate::display::{print_funds, spinner};
use anyhow::{Context, Result};
use navscrape_lib::prelude::*;

/// Fetch a history page and print the fund catalogue it carries.
pub(crate) async fn list_funds(fund: &str, config: ClientConfig, quiet: bool) -> Result<()> {
    let today = chrono::Local::now().date_naive();
    let query = FundQuery::new(fund, DateRange::single_day(today))?;
    let client = FetchClient::new(config)?;

    let progress = spinner(quiet, format!("fund catalogue via {}", query.code()));
    let outcome = client.fetch_query(&query).await;
    progress.finish_and_clear();

    let page = match outcome {
        FetchOutcome::Page(page) => page,
        FetchOutcome::Unavailable(failure) => {
            eprintln!("No data: {failure}");
            return Ok(());
        }
    };

    match extract_fund_list(&page.body).context("Failed to decode fund catalogue")? {
        Some(funds) => print_funds(&funds),
        None => eprintln!("No fund catalogue found in page"),
    }

    Ok(())
}
