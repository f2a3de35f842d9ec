//! Backward-paging backfill of historical candles.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use coinhisto_types::{Candle, CoinhistoError, QuoteCurrency, TickSize};

use crate::client::HistoClient;
use crate::response::HistoPage;

/// Accumulator for the backward page walk.
///
/// Each absorbed page moves the `toTs` cursor one tick before the earliest
/// timestamp retrieved so far, so consecutive pages never overlap; candles
/// are keyed by timestamp, which both orders and dedupes them.
#[derive(Debug)]
pub struct Backfill {
    candles: BTreeMap<i64, Candle>,
    end_ts: i64,
    step: i64,
    lookback: usize,
    next_to_ts: i64,
}

impl Backfill {
    /// Creates an accumulator walking backward from `end`.
    ///
    /// `end` must already be aligned to the tick boundary.
    #[must_use]
    pub fn new(end: DateTime<Utc>, ticksize: TickSize, lookback: usize) -> Self {
        let end_ts = end.timestamp();
        Self {
            candles: BTreeMap::new(),
            end_ts,
            step: ticksize.seconds(),
            lookback,
            next_to_ts: end_ts,
        }
    }

    /// Returns the number of points still missing.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.lookback.saturating_sub(self.candles.len())
    }

    /// Returns the cursor (Unix seconds) for the next page request.
    #[must_use]
    pub const fn next_to_ts(&self) -> i64 {
        self.next_to_ts
    }

    /// Absorbs one page; returns false when paging should stop.
    ///
    /// Paging stops when the page carries no real (non-placeholder) candle,
    /// meaning the feed has run out of history, when the requested count has
    /// been reached, or when the cursor would stop moving backward.
    pub fn absorb(&mut self, page: &HistoPage) -> bool {
        let has_real = page.candles.iter().any(|c| !c.is_placeholder());

        for candle in &page.candles {
            let ts = candle.time.timestamp();
            if ts <= self.end_ts {
                self.candles.entry(ts).or_insert(*candle);
            }
        }

        if !has_real || self.remaining() == 0 {
            return false;
        }

        let earliest = page
            .time_from
            .map(|t| t.timestamp())
            .or_else(|| page.candles.first().map(|c| c.time.timestamp()));
        match earliest {
            Some(ts) if ts - self.step < self.next_to_ts => {
                self.next_to_ts = ts - self.step;
                true
            }
            _ => false,
        }
    }

    /// Returns the merged candles, ascending by timestamp.
    #[must_use]
    pub fn into_candles(self) -> Vec<Candle> {
        self.candles.into_values().collect()
    }
}

/// Fetches the raw (pre gap-fill) series for one symbol.
///
/// Issues sequential page requests walking backward from `end`; each page's
/// request depends on the earliest timestamp of the page before it, so this
/// loop cannot be parallelized.
///
/// # Errors
///
/// Propagates the first page-level error; nothing fetched so far is kept.
pub async fn backfill_series(
    client: &HistoClient,
    symbol: &str,
    currency: QuoteCurrency,
    ticksize: TickSize,
    end: DateTime<Utc>,
    lookback: usize,
) -> Result<Vec<Candle>, CoinhistoError> {
    let page_limit = client.config().page_limit.clamp(1, crate::MAX_PAGE_LIMIT);
    let mut backfill = Backfill::new(end, ticksize, lookback);

    loop {
        let limit = backfill.remaining().min(page_limit);
        let page = client
            .fetch_page(symbol, currency, ticksize, limit, backfill.next_to_ts())
            .await?;
        if !backfill.absorb(&page) {
            break;
        }
    }

    Ok(backfill.into_candles())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ClientConfig;
    use chrono::TimeZone;
    use httpmock::prelude::*;
    use serde_json::json;

    const DAY: i64 = 86_400;

    fn end() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2019, 6, 1, 0, 0, 0).unwrap()
    }

    fn bar(ts: i64, close: f64) -> serde_json::Value {
        json!({
            "time": ts,
            "open": close - 5.0,
            "high": close + 10.0,
            "low": close - 15.0,
            "close": close,
            "volumefrom": 10.0,
            "volumeto": 100.0,
        })
    }

    fn page(time_from: i64, bars: Vec<serde_json::Value>) -> serde_json::Value {
        json!({
            "Response": "Success",
            "TimeFrom": time_from,
            "TimeTo": time_from,
            "Data": bars,
        })
    }

    fn candle(ts: i64, close: f64) -> Candle {
        let time = Utc.timestamp_opt(ts, 0).unwrap();
        Candle::new(time, close - 5.0, close + 10.0, close - 15.0, close, 10.0, 100.0)
    }

    fn histo_page(time_from: Option<i64>, candles: Vec<Candle>) -> HistoPage {
        HistoPage {
            time_from: time_from.map(|ts| Utc.timestamp_opt(ts, 0).unwrap()),
            candles,
        }
    }

    #[test]
    fn test_absorb_dedupes_overlapping_pages() {
        let end_ts = end().timestamp();
        let mut backfill = Backfill::new(end(), TickSize::Day, 4);

        let newer = histo_page(
            Some(end_ts - DAY),
            vec![candle(end_ts - DAY, 8100.0), candle(end_ts, 8200.0)],
        );
        assert!(backfill.absorb(&newer));
        assert_eq!(backfill.next_to_ts(), end_ts - 2 * DAY);

        // Overlaps on end_ts - DAY with a different close; first write wins.
        let older = histo_page(
            Some(end_ts - 2 * DAY),
            vec![candle(end_ts - 2 * DAY, 8000.0), candle(end_ts - DAY, 9999.0)],
        );
        assert!(backfill.absorb(&older));

        let candles = backfill.into_candles();
        assert_eq!(candles.len(), 3);
        assert_eq!(candles[1].close, 8100.0);
    }

    #[test]
    fn test_absorb_stops_on_empty_page() {
        let mut backfill = Backfill::new(end(), TickSize::Day, 4);
        assert!(!backfill.absorb(&histo_page(None, vec![])));
        assert!(backfill.into_candles().is_empty());
    }

    #[test]
    fn test_absorb_stops_on_all_placeholder_page() {
        let end_ts = end().timestamp();
        let mut backfill = Backfill::new(end(), TickSize::Day, 4);

        let padded = histo_page(
            Some(end_ts - DAY),
            vec![
                Candle::new(Utc.timestamp_opt(end_ts - DAY, 0).unwrap(), 0.0, 0.0, 0.0, 0.0, 0.0, 0.0),
                Candle::new(Utc.timestamp_opt(end_ts, 0).unwrap(), 0.0, 0.0, 0.0, 0.0, 0.0, 0.0),
            ],
        );
        assert!(!backfill.absorb(&padded));
    }

    #[test]
    fn test_absorb_stops_when_cursor_stalls() {
        let end_ts = end().timestamp();
        let mut backfill = Backfill::new(end(), TickSize::Day, 10);

        let page = histo_page(Some(end_ts), vec![candle(end_ts, 8200.0)]);
        assert!(backfill.absorb(&page));

        // Same TimeFrom again: the cursor would not move backward.
        let stalled = histo_page(Some(end_ts), vec![candle(end_ts, 8200.0)]);
        assert!(!backfill.absorb(&stalled));
    }

    #[test]
    fn test_absorb_ignores_candles_after_end() {
        let end_ts = end().timestamp();
        let mut backfill = Backfill::new(end(), TickSize::Day, 2);

        let page = histo_page(
            Some(end_ts),
            vec![candle(end_ts, 8200.0), candle(end_ts + DAY, 8300.0)],
        );
        backfill.absorb(&page);

        let candles = backfill.into_candles();
        assert_eq!(candles.len(), 1);
        assert_eq!(candles[0].time.timestamp(), end_ts);
    }

    #[tokio::test]
    async fn test_backfill_walks_pages_backward() {
        let server = MockServer::start_async().await;
        let end_ts = end().timestamp();

        let first = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/data/histoday")
                    .query_param("fsym", "BTC")
                    .query_param("limit", "2")
                    .query_param("toTs", end_ts.to_string());
                then.status(200).json_body(page(
                    end_ts - DAY,
                    vec![bar(end_ts - DAY, 8100.0), bar(end_ts, 8200.0)],
                ));
            })
            .await;
        let second = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/data/histoday")
                    .query_param("limit", "2")
                    .query_param("toTs", (end_ts - 2 * DAY).to_string());
                then.status(200).json_body(page(
                    end_ts - 3 * DAY,
                    vec![bar(end_ts - 3 * DAY, 7900.0), bar(end_ts - 2 * DAY, 8000.0)],
                ));
            })
            .await;
        let third = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/data/histoday")
                    .query_param("limit", "1")
                    .query_param("toTs", (end_ts - 4 * DAY).to_string());
                then.status(200)
                    .json_body(page(end_ts - 4 * DAY, vec![bar(end_ts - 4 * DAY, 7800.0)]));
            })
            .await;

        let config = ClientConfig {
            base_url: server.url("/data"),
            page_limit: 2,
            ..Default::default()
        };
        let client = HistoClient::new(config).unwrap();
        let candles = backfill_series(&client, "BTC", QuoteCurrency::Usd, TickSize::Day, end(), 5)
            .await
            .unwrap();

        first.assert_async().await;
        second.assert_async().await;
        third.assert_async().await;

        assert_eq!(candles.len(), 5);
        let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
        assert_eq!(closes, [7800.0, 7900.0, 8000.0, 8100.0, 8200.0]);
        for pair in candles.windows(2) {
            assert_eq!((pair[1].time - pair[0].time).num_seconds(), DAY);
        }
    }

    #[tokio::test]
    async fn test_backfill_stops_when_history_runs_out() {
        let server = MockServer::start_async().await;
        let end_ts = end().timestamp();

        server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/data/histoday")
                    .query_param("toTs", end_ts.to_string());
                then.status(200)
                    .json_body(page(end_ts, vec![bar(end_ts, 8200.0)]));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/data/histoday")
                    .query_param("toTs", (end_ts - DAY).to_string());
                then.status(200).json_body(page(0, vec![]));
            })
            .await;

        let config = ClientConfig {
            base_url: server.url("/data"),
            page_limit: 2000,
            ..Default::default()
        };
        let client = HistoClient::new(config).unwrap();
        let candles = backfill_series(&client, "BTC", QuoteCurrency::Usd, TickSize::Day, end(), 5)
            .await
            .unwrap();

        assert_eq!(candles.len(), 1);
    }
}
