//! Fetch command implementation.
//!
//! This module drives the per-symbol fetch pipeline and writes the merged
//! result set to the output file.

use crate::display::{self, Field, Format, Layout};
use anyhow::{Context, Result, bail};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use coinhisto_lib::prelude::*;
use futures::StreamExt;
use futures::stream;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

/// Fetch historical OHLCV data for one or more symbols.
#[allow(clippy::too_many_arguments)]
pub(crate) async fn fetch(
    symbols: Vec<String>,
    currency_str: &str,
    ticksize_str: &str,
    end_str: Option<&str>,
    lookback: usize,
    output: Option<PathBuf>,
    format: Format,
    field: Field,
    layout: Layout,
    api_key: Option<String>,
    concurrency: usize,
    quiet: bool,
) -> Result<()> {
    // Validate everything before the first network call
    let currency: QuoteCurrency = currency_str.parse().map_err(ConfigError::from)?;
    let ticksize: TickSize = ticksize_str.parse().map_err(ConfigError::from)?;

    let end = match end_str {
        Some(s) => parse_end(s)?,
        None => Utc::now(),
    };

    let request = FetchRequest::new(symbols, currency, ticksize, end, lookback)?;

    let api_key = api_key
        .or_else(|| std::env::var("CRYPTOCOMPARE_API_KEY").ok())
        .unwrap_or_default();
    let config = ClientConfig {
        api_key,
        concurrency,
        ..Default::default()
    };
    let fetcher = HistoricalFetcher::new(HistoClient::new(config)?);

    // Setup progress bar
    let total = request.symbols().len() as u64;
    let progress = if quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new(total);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} symbols {msg}")
                .expect("Invalid progress template")
                .progress_chars("=>-"),
        );
        pb.set_message(format!("{lookback} x {ticksize} in {currency}"));
        pb
    };

    // Fetch each symbol independently; a failure for one leaves the others intact
    let results: Vec<(String, Result<Vec<Candle>, CoinhistoError>)> =
        stream::iter(request.symbols())
            .map(|symbol| {
                let fetcher = &fetcher;
                let request = &request;
                let progress = &progress;
                async move {
                    let result = fetcher.fetch_symbol(symbol, request).await;
                    progress.inc(1);
                    (symbol.clone(), result)
                }
            })
            .buffer_unordered(concurrency.max(1))
            .collect()
            .await;

    let mut series = ResultSet::new();
    let mut failures = Vec::new();
    for (symbol, result) in results {
        match result {
            Ok(candles) => series.insert(symbol, candles),
            Err(error) => failures.push((symbol, error)),
        }
    }

    progress.finish_with_message(format!("Fetched {} of {total} symbols", series.len()));

    for (symbol, error) in &failures {
        eprintln!("{symbol}: {error}");
    }

    if series.is_empty() {
        bail!("no symbol could be fetched");
    }

    let output =
        output.unwrap_or_else(|| PathBuf::from(format!("ohlcv.{}", format.extension())));
    let date_only = matches!(request.ticksize(), TickSize::Day);
    display::write_result_set(&series, &output, format, field, layout, date_only)?;

    if !quiet {
        println!("Output written to: {}", output.display());
    }

    if !failures.is_empty() {
        bail!("fetch failed for {} of {total} symbols", failures.len());
    }

    Ok(())
}

/// Parses an end date as `YYYY-MM-DD` (midnight UTC) or `YYYY-MM-DDTHH:MM:SS`.
fn parse_end(s: &str) -> Result<DateTime<Utc>> {
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(date.and_hms_opt(0, 0, 0).expect("valid time").and_utc());
    }

    let datetime = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .with_context(|| format!("Invalid end date: {s}"))?;
    Ok(datetime.and_utc())
}
