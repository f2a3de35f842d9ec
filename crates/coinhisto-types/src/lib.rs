//! Core types for the coinhisto OHLCV downloader.
//!
//! This crate provides the fundamental data structures used throughout
//! coinhisto:
//!
//! - [`Candle`] - A single OHLCV sample in the API's wire shape
//! - [`TickSize`] - The sampling interval (minute, hour, day)
//! - [`QuoteCurrency`] - The currency assets are priced in
//! - [`FetchRequest`] - Validated request parameters for one fetch
//! - [`ResultSet`] - Per-symbol series sharing one timestamp grid
//! - [`CoinhistoError`] - The error taxonomy for the whole pipeline

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/coinhisto/coinhisto/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod candle;
mod currency;
mod error;
mod request;
mod result;
mod ticksize;

pub use candle::Candle;
pub use currency::{CurrencyParseError, QuoteCurrency};
pub use error::{CoinhistoError, ConfigError, Result};
pub use request::FetchRequest;
pub use result::ResultSet;
pub use ticksize::{TickSize, TickSizeParseError};
