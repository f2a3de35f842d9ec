//! Time-grid construction and gap filling for the coinhisto OHLCV downloader.
//!
//! This crate turns the raw, possibly sparse candles returned by the feed
//! into a dense series on an exact timestamp grid:
//!
//! - [`TickGrid`] - The fixed grid of tick-aligned timestamps a series covers
//! - [`fill_gaps`] - Horizontal extrapolation across missing ticks

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/coinhisto/coinhisto/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod gapfill;
mod grid;

pub use gapfill::{GapFillError, fill_gaps};
pub use grid::{GridIter, TickGrid, floor_to_tick};
