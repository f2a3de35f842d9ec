//! Typed parsing of historical-endpoint responses.

use chrono::{DateTime, TimeZone, Utc};
use coinhisto_types::{Candle, CoinhistoError};
use serde::Deserialize;

/// Raw response envelope as returned by the API.
///
/// The API reports failures in-band: a 200 response with `Response: "Error"`
/// and a human-readable `Message`.
#[derive(Debug, Deserialize)]
struct RawResponse {
    #[serde(rename = "Response")]
    response: String,
    #[serde(rename = "Message", default)]
    message: String,
    #[serde(rename = "TimeFrom", default)]
    time_from: Option<i64>,
    #[serde(rename = "Data", default)]
    data: Vec<Candle>,
}

/// One page of historical data.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoPage {
    /// Earliest timestamp covered by the page, as reported by the API.
    pub time_from: Option<DateTime<Utc>>,
    /// Per-tick candles, ascending by timestamp.
    pub candles: Vec<Candle>,
}

impl HistoPage {
    /// Returns true if the page carries no candles.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.candles.is_empty()
    }

    /// Returns the number of candles in the page.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.candles.len()
    }
}

/// Parses one response body into a [`HistoPage`], failing fast on shape
/// mismatches.
///
/// # Errors
///
/// - [`CoinhistoError::ResponseFormat`] if the body is not the expected JSON
///   shape or carries an unknown status string.
/// - [`CoinhistoError::Request`] if the API reports an error in-band.
pub fn parse_page(body: &str) -> Result<HistoPage, CoinhistoError> {
    let raw: RawResponse =
        serde_json::from_str(body).map_err(|e| CoinhistoError::ResponseFormat(e.to_string()))?;

    match raw.response.as_str() {
        "Success" => {
            let time_from = match raw.time_from {
                Some(ts) => Some(Utc.timestamp_opt(ts, 0).single().ok_or_else(|| {
                    CoinhistoError::ResponseFormat(format!("TimeFrom {ts} out of range"))
                })?),
                None => None,
            };
            Ok(HistoPage {
                time_from,
                candles: raw.data,
            })
        }
        "Error" => Err(CoinhistoError::Request(raw.message)),
        other => Err(CoinhistoError::ResponseFormat(format!(
            "unexpected response status '{other}'"
        ))),
    }
}
