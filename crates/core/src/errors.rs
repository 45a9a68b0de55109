//! Core error types for the Tickerboard dashboard.
//!
//! Fetch failures come from the market-data crate and are shown to the user.
//! Series errors are contract violations: the dashboard checks its inputs
//! before aligning or indexing, so reaching one means a caller bug.

use chrono::NaiveDate;
use thiserror::Error;

pub use tickerboard_market_data::MarketDataError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the dashboard.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Market data operation failed: {0}")]
    MarketData(#[from] MarketDataError),

    #[error("Series operation failed: {0}")]
    Series(#[from] SeriesError),

    #[error("No closing prices for {0} in the requested range")]
    NoData(String),

    #[error("Projection failed: {0}")]
    Projection(#[from] ProjectionError),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),
}

/// Precondition failures of series indexing.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesError {
    /// Nothing to take a base value from.
    #[error("Cannot index an empty series")]
    EmptyInput,

    /// The base value is zero.
    #[error("Cannot index a series whose base value is zero")]
    DivisionByZero,
}

/// Validation errors of the investment projection form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProjectionError {
    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Amount must be greater than zero")]
    NonPositiveAmount,

    #[error("Start date {0} is in the future")]
    FutureStartDate(NaiveDate),

    #[error("Calculation overflowed")]
    Overflow,
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
