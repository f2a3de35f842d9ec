//! CryptoCompare URL construction.

use coinhisto_types::{QuoteCurrency, TickSize};

/// Base URL for the CryptoCompare min-api data endpoints.
pub const BASE_URL: &str = "https://min-api.cryptocompare.com/data";

/// Builds the URL for one page of historical data.
///
/// URL format:
/// `{base}/histo{ticksize}?fsym={SYMBOL}&tsym={CURRENCY}&limit={limit}&toTs={to_ts}[&api_key={key}]`
///
/// The page covers `limit` ticks ending at the Unix timestamp `to_ts`. An
/// empty API key is omitted from the query string.
///
/// # Example
///
/// ```
/// use coinhisto_fetch::url::{BASE_URL, histo_url};
/// use coinhisto_types::{QuoteCurrency, TickSize};
///
/// let url = histo_url(BASE_URL, "btc", QuoteCurrency::Usd, TickSize::Day, 5, 1_559_347_200, "");
/// assert_eq!(
///     url,
///     "https://min-api.cryptocompare.com/data/histoday?fsym=BTC&tsym=USD&limit=5&toTs=1559347200"
/// );
/// ```
#[must_use]
pub fn histo_url(
    base: &str,
    symbol: &str,
    currency: QuoteCurrency,
    ticksize: TickSize,
    limit: usize,
    to_ts: i64,
    api_key: &str,
) -> String {
    let mut url = format!(
        "{}/{}?fsym={}&tsym={}&limit={}&toTs={}",
        base,
        ticksize.api_path(),
        symbol.to_uppercase(),
        currency,
        limit,
        to_ts
    );
    if !api_key.is_empty() {
        url.push_str("&api_key=");
        url.push_str(api_key);
    }
    url
}
