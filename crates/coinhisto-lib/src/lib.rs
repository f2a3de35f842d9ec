//! Historical crypto OHLCV downloader for the CryptoCompare min-api.
//!
//! This is a facade crate that re-exports functionality from the coinhisto
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```ignore
//! use coinhisto_lib::prelude::*;
//! use chrono::Utc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let request = FetchRequest::new(
//!         ["BTC", "ETH"],
//!         QuoteCurrency::Usd,
//!         TickSize::Day,
//!         Utc::now(),
//!         30,
//!     )?;
//!
//!     let fetcher = HistoricalFetcher::with_defaults()?;
//!     let outcome = fetcher.fetch(&request).await;
//!     for (symbol, series) in outcome.series.iter() {
//!         println!("{symbol}: {} candles", series.len());
//!     }
//!
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/coinhisto/coinhisto/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use coinhisto_types::*;

// Re-export fetch functionality
#[cfg(feature = "fetch")]
pub use coinhisto_fetch::{
    Backfill, ClientConfig, FetchOutcome, HistoClient, HistoPage, HistoricalFetcher,
    MAX_PAGE_LIMIT, SymbolFailure, backfill_series, parse_page,
};

// Re-export series tooling
#[cfg(feature = "series")]
pub use coinhisto_series::{GapFillError, TickGrid, fill_gaps, floor_to_tick};

// Re-export formatters
#[cfg(feature = "format")]
pub use coinhisto_format::{
    CsvFormatter, CsvLayout, FormatError, Formatter, JsonFormatter, OutputFormat, PriceField,
};

/// Prelude module for convenient imports.
///
/// ```
/// use coinhisto_lib::prelude::*;
/// ```
pub mod prelude {
    pub use coinhisto_types::{
        Candle, CoinhistoError, ConfigError, FetchRequest, QuoteCurrency, Result, ResultSet,
        TickSize,
    };

    #[cfg(feature = "fetch")]
    pub use coinhisto_fetch::{
        ClientConfig, FetchOutcome, HistoClient, HistoricalFetcher, SymbolFailure,
    };

    #[cfg(feature = "series")]
    pub use coinhisto_series::{TickGrid, fill_gaps};

    #[cfg(feature = "format")]
    pub use coinhisto_format::{
        CsvFormatter, CsvLayout, Formatter, JsonFormatter, OutputFormat, PriceField,
    };
}
