//! Tick-aligned timestamp grids.

use chrono::{DateTime, TimeZone, Utc};
use coinhisto_types::TickSize;

/// A fixed grid of tick-aligned timestamps ending at a given point.
///
/// The grid has exactly `len` slots spaced by the tick duration, the last of
/// which is the end timestamp floored to its tick boundary. Every fetched
/// series must cover this grid exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickGrid {
    end: DateTime<Utc>,
    ticksize: TickSize,
    len: usize,
}

impl TickGrid {
    /// Creates a grid of `len` slots ending at `end` (floored to the tick).
    #[must_use]
    pub fn new(end: DateTime<Utc>, ticksize: TickSize, len: usize) -> Self {
        Self {
            end: floor_to_tick(end, ticksize),
            ticksize,
            len,
        }
    }

    /// Returns the last grid timestamp.
    #[must_use]
    pub const fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Returns the first grid timestamp.
    #[must_use]
    pub fn start(&self) -> DateTime<Utc> {
        self.end - chrono::TimeDelta::seconds(self.ticksize.seconds() * (self.len as i64 - 1))
    }

    /// Returns the tick size of the grid.
    #[must_use]
    pub const fn ticksize(&self) -> TickSize {
        self.ticksize
    }

    /// Returns the number of slots in the grid.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the grid has no slots.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns an iterator over the grid timestamps, ascending.
    #[must_use]
    pub fn timestamps(&self) -> GridIter {
        GridIter {
            current: self.start(),
            step: self.ticksize.delta(),
            remaining: self.len,
        }
    }
}

impl std::fmt::Display for TickGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} x {} ending {}",
            self.len,
            self.ticksize,
            self.end.format("%Y-%m-%dT%H:%M:%SZ")
        )
    }
}

/// Iterator over the timestamps of a [`TickGrid`].
#[derive(Debug, Clone)]
pub struct GridIter {
    current: DateTime<Utc>,
    step: chrono::TimeDelta,
    remaining: usize,
}

impl Iterator for GridIter {
    type Item = DateTime<Utc>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let result = self.current;
        self.current += self.step;
        self.remaining -= 1;
        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for GridIter {}

/// Floors a timestamp to the start of its containing tick (UTC).
///
/// Day boundaries are UTC midnights, matching the feed's daily bars.
#[must_use]
pub fn floor_to_tick(timestamp: DateTime<Utc>, ticksize: TickSize) -> DateTime<Utc> {
    let step = ticksize.seconds();
    let secs = timestamp.timestamp();
    Utc.timestamp_opt(secs - secs.rem_euclid(step), 0).unwrap()
}
