//! Gap filling by horizontal extrapolation.

use std::collections::BTreeMap;

use coinhisto_types::Candle;
use thiserror::Error;

use crate::TickGrid;

/// Errors that can occur while projecting a series onto a grid.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GapFillError {
    /// The feed cannot cover the leading slots of the grid.
    #[error("insufficient history: {available} of {requested} ticks available")]
    InsufficientData {
        /// Number of grid slots requested.
        requested: usize,
        /// Number of slots coverable from the available data.
        available: usize,
    },
}

/// Projects raw candles onto `grid`, holding the prior close across gaps.
///
/// Each grid slot takes its real candle when the feed has one; a slot with no
/// candle (or only a zero placeholder row) takes a [`Candle::held`] repeating
/// the nearest preceding close with zero volume. Candles before the grid
/// start seed the hold, so a gap at the very first slot can still be covered.
/// The result always has exactly `grid.len()` entries with strictly
/// increasing, tick-spaced timestamps, and running the projection again over
/// its own output returns it unchanged.
///
/// # Errors
///
/// Returns [`GapFillError::InsufficientData`] when the leading slots have no
/// real candle at or before them, i.e. the feed's history starts inside the
/// grid. `available` counts the slots from the first coverable one onward.
pub fn fill_gaps(candles: &[Candle], grid: &TickGrid) -> Result<Vec<Candle>, GapFillError> {
    let real: BTreeMap<i64, &Candle> = candles
        .iter()
        .filter(|candle| !candle.is_placeholder())
        .map(|candle| (candle.time.timestamp(), candle))
        .collect();

    let mut feed = real.into_iter().peekable();
    let mut filled = Vec::with_capacity(grid.len());
    let mut last_close: Option<f64> = None;
    let mut uncovered = 0usize;

    for slot in grid.timestamps() {
        let slot_ts = slot.timestamp();
        let mut exact: Option<Candle> = None;

        while let Some(&(ts, candle)) = feed.peek() {
            if ts > slot_ts {
                break;
            }
            last_close = Some(candle.close);
            if ts == slot_ts {
                exact = Some(*candle);
            }
            feed.next();
        }

        match (exact, last_close) {
            (Some(candle), _) => filled.push(candle),
            (None, Some(close)) => filled.push(Candle::held(slot, close)),
            (None, None) => uncovered += 1,
        }
    }

    if uncovered > 0 {
        return Err(GapFillError::InsufficientData {
            requested: grid.len(),
            available: grid.len() - uncovered,
        });
    }

    Ok(filled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};
    use coinhisto_types::TickSize;

    const DAY: i64 = 86_400;

    fn end() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2019, 6, 1, 0, 0, 0).unwrap()
    }

    fn candle(ts: i64, close: f64) -> Candle {
        let time = Utc.timestamp_opt(ts, 0).unwrap();
        Candle::new(time, close - 10.0, close + 20.0, close - 30.0, close, 100.0, 1000.0)
    }

    fn placeholder(ts: i64) -> Candle {
        let time = Utc.timestamp_opt(ts, 0).unwrap();
        Candle::new(time, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0)
    }

    #[test]
    fn test_dense_series_passes_through() {
        let end_ts = end().timestamp();
        let candles: Vec<_> = (0..5)
            .map(|i| candle(end_ts - (4 - i) * DAY, 8000.0 + i as f64))
            .collect();
        let grid = TickGrid::new(end(), TickSize::Day, 5);

        let filled = fill_gaps(&candles, &grid).unwrap();
        assert_eq!(filled, candles);
    }

    #[test]
    fn test_gap_fill_is_idempotent() {
        let end_ts = end().timestamp();
        let candles = vec![
            candle(end_ts - 4 * DAY, 8000.0),
            candle(end_ts - 2 * DAY, 8200.0),
            candle(end_ts, 8400.0),
        ];
        let grid = TickGrid::new(end(), TickSize::Day, 5);

        let filled = fill_gaps(&candles, &grid).unwrap();
        let refilled = fill_gaps(&filled, &grid).unwrap();
        assert_eq!(refilled, filled);
    }

    #[test]
    fn test_missing_tick_holds_prior_close() {
        let end_ts = end().timestamp();
        let candles = vec![
            candle(end_ts - 2 * DAY, 8000.0),
            // end_ts - DAY missing entirely
            candle(end_ts, 8400.0),
        ];
        let grid = TickGrid::new(end(), TickSize::Day, 3);

        let filled = fill_gaps(&candles, &grid).unwrap();
        assert_eq!(filled.len(), 3);
        assert_eq!(filled[1].time.timestamp(), end_ts - DAY);
        assert_eq!(filled[1].open, 8000.0);
        assert_eq!(filled[1].high, 8000.0);
        assert_eq!(filled[1].low, 8000.0);
        assert_eq!(filled[1].close, 8000.0);
        assert_eq!(filled[1].volume_from, 0.0);

        // No timestamp skipped, spacing exact
        for pair in filled.windows(2) {
            assert_eq!((pair[1].time - pair[0].time).num_seconds(), DAY);
        }
    }

    #[test]
    fn test_placeholder_row_treated_as_gap() {
        let end_ts = end().timestamp();
        let candles = vec![
            candle(end_ts - 2 * DAY, 8000.0),
            placeholder(end_ts - DAY),
            candle(end_ts, 8400.0),
        ];
        let grid = TickGrid::new(end(), TickSize::Day, 3);

        let filled = fill_gaps(&candles, &grid).unwrap();
        assert_eq!(filled[1].close, 8000.0);
        assert_eq!(filled[1].open, 8000.0);
    }

    #[test]
    fn test_candle_before_grid_seeds_hold() {
        let end_ts = end().timestamp();
        let candles = vec![
            candle(end_ts - 5 * DAY, 7900.0), // before the grid start
            candle(end_ts, 8400.0),
        ];
        let grid = TickGrid::new(end(), TickSize::Day, 3);

        let filled = fill_gaps(&candles, &grid).unwrap();
        assert_eq!(filled[0].close, 7900.0);
        assert_eq!(filled[1].close, 7900.0);
        assert_eq!(filled[2].close, 8400.0);
    }

    #[test]
    fn test_short_history_reports_available() {
        let end_ts = end().timestamp();
        let candles = vec![candle(end_ts - DAY, 8200.0), candle(end_ts, 8400.0)];
        let grid = TickGrid::new(end(), TickSize::Day, 5);

        let err = fill_gaps(&candles, &grid).unwrap_err();
        assert_eq!(
            err,
            GapFillError::InsufficientData {
                requested: 5,
                available: 2
            }
        );
    }

    #[test]
    fn test_empty_feed_has_nothing_available() {
        let grid = TickGrid::new(end(), TickSize::Day, 5);
        let err = fill_gaps(&[], &grid).unwrap_err();
        assert_eq!(
            err,
            GapFillError::InsufficientData {
                requested: 5,
                available: 0
            }
        );
    }

    #[test]
    fn test_five_day_window_dates() {
        let grid = TickGrid::new(end(), TickSize::Day, 5);
        let end_ts = end().timestamp();
        let candles: Vec<_> = (0..5)
            .map(|i| candle(end_ts - (4 - i) * DAY, 8000.0 + i as f64))
            .collect();

        let filled = fill_gaps(&candles, &grid).unwrap();
        let dates: Vec<String> = filled
            .iter()
            .map(|c| c.time.format("%Y-%m-%d").to_string())
            .collect();
        assert_eq!(
            dates,
            ["2019-05-28", "2019-05-29", "2019-05-30", "2019-05-31", "2019-06-01"]
        );
    }
}
