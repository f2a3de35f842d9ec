//! Output formatters for the coinhisto OHLCV downloader.
//!
//! This crate writes fetched result sets to flat files:
//!
//! - [`CsvFormatter`] - CSV, either one column per symbol (wide) or the
//!   original one-row-per-sample layout (long)
//! - [`JsonFormatter`] - raw per-symbol candle arrays keyed by symbol

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/coinhisto/coinhisto/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod csv;
mod formatter;
mod json;

pub use crate::csv::{CsvFormatter, CsvLayout};
pub use formatter::{FormatError, Formatter, OutputFormat, PriceField};
pub use json::JsonFormatter;
