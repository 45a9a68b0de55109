//! Quote source trait definitions.
//!
//! This module defines the `QuoteSource` trait the dashboard depends on, so
//! orchestration code can be tested without a network.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::{Interval, Range, Symbol, TimeSeries};

/// Anything that can produce a closing-price series for a symbol.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use tickerboard_market_data::{Interval, MarketDataError, QuoteSource, Range, Symbol, TimeSeries};
///
/// struct FixedSource(TimeSeries);
///
/// #[async_trait]
/// impl QuoteSource for FixedSource {
///     fn id(&self) -> &'static str {
///         "FIXED"
///     }
///
///     async fn fetch_series(
///         &self,
///         _symbol: &Symbol,
///         _interval: Interval,
///         _range: Range,
///     ) -> Result<TimeSeries, MarketDataError> {
///         Ok(self.0.clone())
///     }
/// }
/// ```
#[async_trait]
pub trait QuoteSource: Send + Sync {
    /// Identifier used in log lines.
    fn id(&self) -> &'static str;

    /// Fetch the closing-price series for `symbol`.
    ///
    /// # Returns
    ///
    /// Points ordered by label ascending with unique labels, or a
    /// `MarketDataError`. Implementations do not retry.
    async fn fetch_series(
        &self,
        symbol: &Symbol,
        interval: Interval,
        range: Range,
    ) -> Result<TimeSeries, MarketDataError>;
}
