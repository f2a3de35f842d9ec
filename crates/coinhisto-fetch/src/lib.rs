//! HTTP client and paginated data fetching for the coinhisto OHLCV downloader.
//!
//! This crate provides the fetch pipeline:
//!
//! - [`url::histo_url`] - Constructs historical-endpoint URLs
//! - [`HistoClient`] - Pooled HTTP client, one page per call
//! - [`parse_page`] - Strongly-typed response parsing
//! - [`backfill_series`] - Backward page walk assembling the raw series
//! - [`HistoricalFetcher`] - End-to-end per-symbol fetch with gap filling

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/coinhisto/coinhisto/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod backfill;
mod client;
mod fetcher;
mod response;
pub mod url;

pub use backfill::{Backfill, backfill_series};
pub use client::{ClientConfig, HistoClient, MAX_PAGE_LIMIT};
pub use fetcher::{FetchOutcome, HistoricalFetcher, SymbolFailure};
pub use response::{HistoPage, parse_page};
