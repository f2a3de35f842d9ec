//! Per-symbol result collection.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::Candle;

/// Mapping from symbol to its fetched price series.
///
/// All series in a result set share the same timestamp grid; the set is built
/// once per fetch invocation, serialized to the output file, and discarded.
/// Serializes transparently as a JSON object keyed by symbol, each value being
/// the raw per-tick candle array.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ResultSet {
    series: BTreeMap<String, Vec<Candle>>,
}

impl ResultSet {
    /// Creates an empty result set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            series: BTreeMap::new(),
        }
    }

    /// Inserts the series for a symbol, replacing any previous entry.
    pub fn insert(&mut self, symbol: impl Into<String>, candles: Vec<Candle>) {
        self.series.insert(symbol.into(), candles);
    }

    /// Returns the series for a symbol, if present.
    #[must_use]
    pub fn get(&self, symbol: &str) -> Option<&[Candle]> {
        self.series.get(symbol).map(Vec::as_slice)
    }

    /// Iterates over `(symbol, series)` pairs in symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Candle])> {
        self.series
            .iter()
            .map(|(symbol, candles)| (symbol.as_str(), candles.as_slice()))
    }

    /// Iterates over the symbols in order.
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.series.keys().map(String::as_str)
    }

    /// Returns the number of symbols in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// Returns true if the set holds no series.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}
