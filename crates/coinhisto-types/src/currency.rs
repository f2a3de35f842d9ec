//! Quote currency definitions.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The currency in which asset prices are quoted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum QuoteCurrency {
    /// US Dollar.
    #[default]
    Usd,
    /// Bitcoin.
    Btc,
    /// Ether.
    Eth,
    /// Euro.
    Eur,
}

impl QuoteCurrency {
    /// Returns the currency as the API's uppercase ticker.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Btc => "BTC",
            Self::Eth => "ETH",
            Self::Eur => "EUR",
        }
    }

    /// Returns all supported quote currencies.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Usd, Self::Btc, Self::Eth, Self::Eur]
    }
}

impl std::fmt::Display for QuoteCurrency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for QuoteCurrency {
    type Err = CurrencyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "USD" => Ok(Self::Usd),
            "BTC" => Ok(Self::Btc),
            "ETH" => Ok(Self::Eth),
            "EUR" => Ok(Self::Eur),
            _ => Err(CurrencyParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an unsupported quote currency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyParseError(String);

impl std::fmt::Display for CurrencyParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unsupported quote currency '{}', expected one of: USD, BTC, ETH, EUR",
            self.0
        )
    }
}

impl std::error::Error for CurrencyParseError {}
