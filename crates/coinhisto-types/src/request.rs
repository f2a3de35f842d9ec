//! Validated request parameters.

use chrono::{DateTime, Utc};

use crate::{ConfigError, QuoteCurrency, TickSize};

/// Parameters for one historical fetch.
///
/// Constructed through [`FetchRequest::new`], which enforces the request
/// invariants up front: a non-empty symbol list with no blank entries and a
/// positive lookback. Symbols are normalized to uppercase and deduplicated
/// preserving order, so they can key a [`crate::ResultSet`] directly.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchRequest {
    symbols: Vec<String>,
    currency: QuoteCurrency,
    ticksize: TickSize,
    end: DateTime<Utc>,
    lookback: usize,
}

impl FetchRequest {
    /// Creates a new request, validating the parameters.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the symbol list is empty, contains a
    /// blank entry, or the lookback is zero.
    pub fn new(
        symbols: impl IntoIterator<Item = impl Into<String>>,
        currency: QuoteCurrency,
        ticksize: TickSize,
        end: DateTime<Utc>,
        lookback: usize,
    ) -> Result<Self, ConfigError> {
        let mut normalized: Vec<String> = Vec::new();
        let mut seen_any = false;
        for (position, symbol) in symbols.into_iter().enumerate() {
            seen_any = true;
            let symbol = symbol.into().trim().to_uppercase();
            if symbol.is_empty() {
                return Err(ConfigError::BlankSymbol(position));
            }
            if !normalized.contains(&symbol) {
                normalized.push(symbol);
            }
        }
        if !seen_any {
            return Err(ConfigError::EmptySymbols);
        }
        if lookback == 0 {
            return Err(ConfigError::ZeroLookback);
        }

        Ok(Self {
            symbols: normalized,
            currency,
            ticksize,
            end,
            lookback,
        })
    }

    /// Returns the requested symbols, uppercased and deduplicated.
    #[must_use]
    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    /// Returns the quote currency.
    #[must_use]
    pub const fn currency(&self) -> QuoteCurrency {
        self.currency
    }

    /// Returns the tick size.
    #[must_use]
    pub const fn ticksize(&self) -> TickSize {
        self.ticksize
    }

    /// Returns the end timestamp (most recent point requested).
    #[must_use]
    pub const fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Returns the number of points requested per symbol.
    #[must_use]
    pub const fn lookback(&self) -> usize {
        self.lookback
    }
}
