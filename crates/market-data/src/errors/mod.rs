//! Error types for the market data crate.
//!
//! Nothing here is retried automatically. [`MarketDataError::is_transport`]
//! lets callers tell an unreachable relay apart from a bad payload when they
//! word the notice shown to the user.

use thiserror::Error;

/// Errors that can occur while fetching a series.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MarketDataError {
    /// The symbol was empty after trimming.
    #[error("Invalid symbol: '{0}'")]
    InvalidSymbol(String),

    /// The relay or upstream could not be reached, answered with a
    /// non-success status, or did not answer within the request timeout.
    #[error("Transport failure: {0}")]
    TransportFailure(String),

    /// The body did not have the expected chart structure.
    /// Unknown symbols and upstream error payloads land here.
    #[error("Invalid response shape: {0}")]
    InvalidResponseShape(String),
}

impl MarketDataError {
    /// True for network-level failures.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::TransportFailure(_))
    }
}

impl From<reqwest::Error> for MarketDataError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::TransportFailure(format!("request timed out: {}", err))
        } else {
            Self::TransportFailure(err.to_string())
        }
    }
}

impl From<serde_json::Error> for MarketDataError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidResponseShape(format!("body is not valid chart JSON: {}", err))
    }
}
