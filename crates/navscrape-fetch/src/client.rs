//! HTTP client for downloading NAV history pages.

use navscrape_types::{DateInput, FundQuery, FundQueryError};
use reqwest::Client;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

use crate::url::{BASE_URL, history_url};

/// Default location of the raw response dump.
pub const DEFAULT_DUMP_PATH: &str = "response.txt";

/// Configuration for the fetch client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Endpoint serving historical daily NAVs.
    pub base_url: String,
    /// User agent string.
    pub user_agent: String,
    /// Request timeout. `None` leaves the transport default in place.
    pub timeout: Option<Duration>,
    /// Where to write the raw response body, overwritten on every fetch.
    pub dump_path: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            user_agent: format!("navscrape/{}", env!("CARGO_PKG_VERSION")),
            timeout: None,
            dump_path: Some(PathBuf::from(DEFAULT_DUMP_PATH)),
        }
    }
}

/// Errors that prevent a fetch from being attempted.
///
/// These are raised before any network I/O. Failures of the request itself
/// are reported through [`FetchOutcome::Unavailable`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Fund code or date range was invalid.
    #[error(transparent)]
    Query(#[from] FundQueryError),
}

/// Why a page could not be retrieved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchFailure {
    /// Server answered with a non-success status.
    Status {
        /// HTTP status code.
        code: u16,
        /// Canonical reason phrase, empty if unknown.
        reason: String,
    },
    /// Connection, DNS, TLS, timeout or body read failure.
    Transport(String),
}

impl std::fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Status { code, reason } => write!(f, "HTTP error code: {code} {reason}"),
            Self::Transport(msg) => write!(f, "URL error: {msg}"),
        }
    }
}

/// A downloaded history page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawPage {
    /// URL the page was requested from.
    pub url: String,
    /// Response body decoded as text.
    pub body: String,
}

/// Result of a fetch that was actually attempted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The page was downloaded.
    Page(RawPage),
    /// No page is available; there is nothing to convert.
    Unavailable(FetchFailure),
}

impl FetchOutcome {
    /// Returns the page, if one was downloaded.
    #[must_use]
    pub const fn page(&self) -> Option<&RawPage> {
        match self {
            Self::Page(page) => Some(page),
            Self::Unavailable(_) => None,
        }
    }

    /// Consumes the outcome, returning the page if one was downloaded.
    #[must_use]
    pub fn into_page(self) -> Option<RawPage> {
        match self {
            Self::Page(page) => Some(page),
            Self::Unavailable(_) => None,
        }
    }
}

/// HTTP client issuing one GET per history request, without retries.
#[derive(Debug, Clone)]
pub struct FetchClient {
    client: Client,
    config: ClientConfig,
}

impl FetchClient {
    /// Creates a new fetch client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder().user_agent(&config.user_agent).gzip(true);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        Ok(Self { client, config })
    }

    /// Creates a client with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, reqwest::Error> {
        Self::new(ClientConfig::default())
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetches the NAV history page for `fund_code` between `start` and `end`.
    ///
    /// Dates are `dd-mm-yyyy` strings or `NaiveDate` values.
    ///
    /// # Errors
    ///
    /// Returns an error, without touching the network, if the fund code or
    /// either date is invalid or the range is reversed.
    pub async fn fetch(
        &self,
        fund_code: &str,
        start: impl Into<DateInput>,
        end: impl Into<DateInput>,
    ) -> Result<FetchOutcome, FetchError> {
        let query = FundQuery::parse(fund_code, start, end)?;
        Ok(self.fetch_query(&query).await)
    }

    /// Fetches the NAV history page for an already validated query.
    pub async fn fetch_query(&self, query: &FundQuery) -> FetchOutcome {
        let url = history_url(&self.config.base_url, query);
        debug!(%url, fund = query.code(), "requesting NAV history");

        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => return unavailable(FetchFailure::Transport(e.to_string())),
        };

        let status = response.status();
        if !status.is_success() {
            return unavailable(FetchFailure::Status {
                code: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => return unavailable(FetchFailure::Transport(e.to_string())),
        };
        debug!(bytes = body.len(), "received NAV history page");

        if let Some(path) = &self.config.dump_path {
            dump_page(path, &body).await;
        }

        FetchOutcome::Page(RawPage { url, body })
    }
}

fn unavailable(failure: FetchFailure) -> FetchOutcome {
    warn!(%failure, "NAV history page unavailable");
    FetchOutcome::Unavailable(failure)
}

// The dump is diagnostic only; failing to write it never fails the fetch.
async fn dump_page(path: &Path, body: &str) {
    match tokio::fs::write(path, body).await {
        Ok(()) => debug!(path = %path.display(), "wrote raw response dump"),
        Err(e) => warn!(path = %path.display(), error = %e, "failed to write raw response dump"),
    }
}
