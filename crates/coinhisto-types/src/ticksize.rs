//! Sampling interval definitions.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The fixed time interval between consecutive price samples.
///
/// The aggregation API exposes one historical endpoint per tick size, so this
/// enum also selects the endpoint to call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TickSize {
    /// One sample per minute.
    Minute,
    /// One sample per hour.
    Hour,
    /// One sample per day.
    #[default]
    Day,
}

impl TickSize {
    /// Returns the duration of one tick in seconds.
    #[must_use]
    pub const fn seconds(&self) -> i64 {
        match self {
            Self::Minute => 60,
            Self::Hour => 3_600,
            Self::Day => 86_400,
        }
    }

    /// Returns the duration of one tick as a [`chrono::TimeDelta`].
    #[must_use]
    pub fn delta(&self) -> chrono::TimeDelta {
        chrono::TimeDelta::seconds(self.seconds())
    }

    /// Returns the historical-data endpoint for this tick size.
    #[must_use]
    pub const fn api_path(&self) -> &'static str {
        match self {
            Self::Minute => "histominute",
            Self::Hour => "histohour",
            Self::Day => "histoday",
        }
    }

    /// Returns the tick size as a string identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Minute => "minute",
            Self::Hour => "hour",
            Self::Day => "day",
        }
    }

    /// Returns all available tick sizes.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Minute, Self::Hour, Self::Day]
    }
}

impl std::fmt::Display for TickSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TickSize {
    type Err = TickSizeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "minute" | "min" | "m1" | "1m" => Ok(Self::Minute),
            "hour" | "h1" | "1h" => Ok(Self::Hour),
            "day" | "daily" | "d1" | "1d" => Ok(Self::Day),
            _ => Err(TickSizeParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an invalid tick size string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickSizeParseError(String);

impl std::fmt::Display for TickSizeParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid tick size '{}', expected one of: minute, hour, day",
            self.0
        )
    }
}

impl std::error::Error for TickSizeParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticksize_seconds() {
        assert_eq!(TickSize::Minute.seconds(), 60);
        assert_eq!(TickSize::Hour.seconds(), 3_600);
        assert_eq!(TickSize::Day.seconds(), 86_400);
    }

    #[test]
    fn test_ticksize_api_path() {
        assert_eq!(TickSize::Minute.api_path(), "histominute");
        assert_eq!(TickSize::Hour.api_path(), "histohour");
        assert_eq!(TickSize::Day.api_path(), "histoday");
    }

    #[test]
    fn test_ticksize_parse() {
        assert_eq!("minute".parse::<TickSize>().unwrap(), TickSize::Minute);
        assert_eq!("1h".parse::<TickSize>().unwrap(), TickSize::Hour);
        assert_eq!("Daily".parse::<TickSize>().unwrap(), TickSize::Day);
        assert!("week".parse::<TickSize>().is_err());
    }

    #[test]
    fn test_ticksize_delta_matches_seconds() {
        for tick in TickSize::all() {
            assert_eq!(tick.delta().num_seconds(), tick.seconds());
        }
    }
}
