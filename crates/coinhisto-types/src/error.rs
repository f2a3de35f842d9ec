//! Error types for coinhisto.

use thiserror::Error;

use crate::{CurrencyParseError, TickSizeParseError};

/// Result type alias for coinhisto operations.
pub type Result<T> = std::result::Result<T, CoinhistoError>;

/// Errors that can occur while fetching and assembling a price series.
#[derive(Error, Debug)]
pub enum CoinhistoError {
    /// Network, HTTP, or API-reported request failure.
    #[error("request error: {0}")]
    Request(String),

    /// The API response did not match the expected JSON shape.
    #[error("response format error: {0}")]
    ResponseFormat(String),

    /// Fewer ticks are available than requested.
    #[error("insufficient history for {symbol}: {available} of {requested} ticks available")]
    InsufficientHistory {
        /// The symbol that ran out of history.
        symbol: String,
        /// Number of ticks requested.
        requested: usize,
        /// Number of ticks the feed can actually cover.
        available: usize,
    },

    /// Invalid request parameters.
    #[error(transparent)]
    Configuration(#[from] ConfigError),
}

/// Errors for invalid request parameters, raised before any network call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The symbol list is empty.
    #[error("symbol list must not be empty")]
    EmptySymbols,

    /// A symbol entry is blank.
    #[error("symbol at position {0} is blank")]
    BlankSymbol(usize),

    /// Lookback must be a positive count.
    #[error("lookback must be greater than zero")]
    ZeroLookback,

    /// Unrecognized tick size.
    #[error(transparent)]
    TickSize(#[from] TickSizeParseError),

    /// Unsupported quote currency.
    #[error(transparent)]
    Currency(#[from] CurrencyParseError),
}
