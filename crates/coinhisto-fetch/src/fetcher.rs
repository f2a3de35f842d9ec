//! End-to-end historical series fetching.

use coinhisto_series::{GapFillError, TickGrid, fill_gaps};
use coinhisto_types::{Candle, CoinhistoError, FetchRequest, ResultSet};
use futures::stream::{self, StreamExt};

use crate::backfill::backfill_series;
use crate::client::HistoClient;

/// A symbol whose fetch failed, with the reason.
#[derive(Debug)]
pub struct SymbolFailure {
    /// The symbol that failed.
    pub symbol: String,
    /// Why it failed.
    pub error: CoinhistoError,
}

/// Outcome of a multi-symbol fetch.
///
/// Symbols are fetched best-effort: a failure for one symbol leaves the
/// others untouched. A failed symbol contributes no rows at all.
#[derive(Debug, Default)]
pub struct FetchOutcome {
    /// Successfully fetched series, keyed by symbol.
    pub series: ResultSet,
    /// Per-symbol failures.
    pub failures: Vec<SymbolFailure>,
}

impl FetchOutcome {
    /// Returns true if every requested symbol was fetched.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Produces dense, gap-free price series matching a [`FetchRequest`].
#[derive(Debug, Clone)]
pub struct HistoricalFetcher {
    client: HistoClient,
}

impl HistoricalFetcher {
    /// Creates a fetcher using the given client.
    #[must_use]
    pub const fn new(client: HistoClient) -> Self {
        Self { client }
    }

    /// Creates a fetcher with a default-configured client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, reqwest::Error> {
        Ok(Self::new(HistoClient::with_defaults()?))
    }

    /// Returns the underlying client.
    #[must_use]
    pub const fn client(&self) -> &HistoClient {
        &self.client
    }

    /// Fetches the dense series for a single symbol.
    ///
    /// Pages backward from the request's tick-aligned end timestamp, then
    /// projects the raw candles onto the exact lookback grid, holding the
    /// prior close across missing ticks.
    ///
    /// # Errors
    ///
    /// Returns [`CoinhistoError::InsufficientHistory`] when the feed cannot
    /// cover the requested grid, or the page-level error that interrupted the
    /// walk.
    pub async fn fetch_symbol(
        &self,
        symbol: &str,
        request: &FetchRequest,
    ) -> Result<Vec<Candle>, CoinhistoError> {
        let grid = TickGrid::new(request.end(), request.ticksize(), request.lookback());
        let raw = backfill_series(
            &self.client,
            symbol,
            request.currency(),
            request.ticksize(),
            grid.end(),
            request.lookback(),
        )
        .await?;

        fill_gaps(&raw, &grid).map_err(|err| match err {
            GapFillError::InsufficientData {
                requested,
                available,
            } => CoinhistoError::InsufficientHistory {
                symbol: symbol.to_string(),
                requested,
                available,
            },
        })
    }

    /// Fetches every symbol in the request, best-effort.
    ///
    /// Symbols are independent, so they are fetched concurrently up to
    /// [`crate::ClientConfig::concurrency`]; the page loop within each symbol
    /// stays strictly sequential.
    pub async fn fetch(&self, request: &FetchRequest) -> FetchOutcome {
        let concurrency = self.client.config().concurrency.max(1);

        let results: Vec<(String, Result<Vec<Candle>, CoinhistoError>)> =
            stream::iter(request.symbols())
                .map(|symbol| async move {
                    (symbol.clone(), self.fetch_symbol(symbol, request).await)
                })
                .buffer_unordered(concurrency)
                .collect()
                .await;

        let mut outcome = FetchOutcome::default();
        for (symbol, result) in results {
            match result {
                Ok(candles) => outcome.series.insert(symbol, candles),
                Err(error) => outcome.failures.push(SymbolFailure { symbol, error }),
            }
        }
        outcome
    }
}
