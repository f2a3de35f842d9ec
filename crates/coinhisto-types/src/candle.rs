//! OHLCV candle representation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single OHLCV price sample for one symbol at one tick.
///
/// The serde representation matches the aggregation API's wire shape:
/// `time` is Unix seconds and the volume fields are named `volumefrom` and
/// `volumeto`. JSON output therefore round-trips the raw per-tick objects.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    /// Tick timestamp (UTC, aligned to the tick boundary).
    #[serde(with = "chrono::serde::ts_seconds")]
    pub time: DateTime<Utc>,
    /// Opening price.
    pub open: f64,
    /// Highest price during the tick.
    pub high: f64,
    /// Lowest price during the tick.
    pub low: f64,
    /// Closing price.
    pub close: f64,
    /// Volume traded in the base asset.
    #[serde(rename = "volumefrom")]
    pub volume_from: f64,
    /// Volume traded in the quote currency.
    #[serde(rename = "volumeto")]
    pub volume_to: f64,
}

impl Candle {
    /// Creates a new candle.
    #[must_use]
    pub const fn new(
        time: DateTime<Utc>,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume_from: f64,
        volume_to: f64,
    ) -> Self {
        Self {
            time,
            open,
            high,
            low,
            close,
            volume_from,
            volume_to,
        }
    }

    /// Creates a candle holding `close` forward across a missing tick.
    ///
    /// All four price fields repeat the prior close; volumes are zero since
    /// nothing traded.
    #[must_use]
    pub const fn held(time: DateTime<Utc>, close: f64) -> Self {
        Self {
            time,
            open: close,
            high: close,
            low: close,
            close,
            volume_from: 0.0,
            volume_to: 0.0,
        }
    }

    /// Returns true if this is a placeholder row.
    ///
    /// The API pads ticks with no trades (and periods before an asset was
    /// listed) with rows whose price fields are all zero.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.open == 0.0 && self.high == 0.0 && self.low == 0.0 && self.close == 0.0
    }

    /// Returns the price range (high - low).
    #[must_use]
    pub fn range(&self) -> f64 {
        self.high - self.low
    }
}
