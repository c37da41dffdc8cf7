//! HTTP client and history page fetching for navscrape.
//!
//! This crate provides the download half of the pipeline:
//!
//! - [`url::history_url`] - Constructs the historical-daily-NAV query URL
//! - [`FetchClient`] - Single-shot HTTP client returning a [`FetchOutcome`]
//! - [`RawPage`] - The decoded response body

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/navscrape/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
pub mod url;

pub use client::{
    ClientConfig, DEFAULT_DUMP_PATH, FetchClient, FetchError, FetchFailure, FetchOutcome, RawPage,
};
