//! HTTP client for the historical-data endpoints.

use std::time::Duration;

use coinhisto_types::{CoinhistoError, QuoteCurrency, TickSize};

use crate::response::{HistoPage, parse_page};
use crate::url::{BASE_URL, histo_url};

/// Hard cap on points per call imposed by the free API tier.
pub const MAX_PAGE_LIMIT: usize = 2000;

/// Configuration for the historical-data client.
///
/// An explicit struct passed in at construction; nothing here lives in
/// process-wide state.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API key, passed as a request parameter. Empty means unauthenticated.
    pub api_key: String,
    /// Base URL of the data endpoints.
    pub base_url: String,
    /// Points requested per page, at most [`MAX_PAGE_LIMIT`].
    pub page_limit: usize,
    /// Maximum symbols fetched concurrently.
    pub concurrency: usize,
    /// Request timeout.
    pub timeout: Duration,
    /// User agent string.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: BASE_URL.to_string(),
            page_limit: MAX_PAGE_LIMIT,
            concurrency: 4,
            timeout: Duration::from_secs(30),
            user_agent: format!("coinhisto/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// HTTP client with connection pooling, one historical page per call.
///
/// Requests are not retried; a failed call surfaces immediately and the
/// caller decides whether to re-invoke.
#[derive(Debug, Clone)]
pub struct HistoClient {
    client: reqwest::Client,
    config: ClientConfig,
}

impl HistoClient {
    /// Creates a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .pool_max_idle_per_host(config.concurrency)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_nodelay(true)
            .tcp_keepalive(Duration::from_secs(60))
            .timeout(config.timeout)
            .connect_timeout(Duration::from_secs(10))
            .user_agent(&config.user_agent)
            .gzip(true)
            .build()?;
        Ok(Self { client, config })
    }

    /// Creates a client with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, reqwest::Error> {
        Self::new(ClientConfig::default())
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetches one page of `limit` ticks ending at `to_ts` (Unix seconds).
    ///
    /// # Errors
    ///
    /// - [`CoinhistoError::Request`] on network failure, a non-success HTTP
    ///   status, or an API-reported error.
    /// - [`CoinhistoError::ResponseFormat`] if the body does not match the
    ///   expected shape.
    pub async fn fetch_page(
        &self,
        symbol: &str,
        currency: QuoteCurrency,
        ticksize: TickSize,
        limit: usize,
        to_ts: i64,
    ) -> Result<HistoPage, CoinhistoError> {
        let url = histo_url(
            &self.config.base_url,
            symbol,
            currency,
            ticksize,
            limit,
            to_ts,
            &self.config.api_key,
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| CoinhistoError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CoinhistoError::Request(format!("HTTP status {status}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| CoinhistoError::Request(e.to_string()))?;
        parse_page(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert!(config.api_key.is_empty());
        assert_eq!(config.base_url, BASE_URL);
        assert_eq!(config.page_limit, MAX_PAGE_LIMIT);
        assert_eq!(config.concurrency, 4);
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[tokio::test]
    async fn test_client_creation() {
        let client = HistoClient::with_defaults();
        assert!(client.is_ok());
    }

    #[tokio::test]
    async fn test_http_error_status_maps_to_request() {
        let server = httpmock::MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(httpmock::Method::GET).path("/data/histoday");
                then.status(503).body("unavailable");
            })
            .await;

        let config = ClientConfig {
            base_url: server.url("/data"),
            ..Default::default()
        };
        let client = HistoClient::new(config).unwrap();
        let err = client
            .fetch_page("BTC", QuoteCurrency::Usd, TickSize::Day, 5, 1_559_347_200)
            .await
            .unwrap_err();

        mock.assert_async().await;
        assert!(matches!(err, CoinhistoError::Request(msg) if msg.contains("503")));
    }
}
