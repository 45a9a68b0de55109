//! Yahoo Finance chart client.
//!
//! Fetches `v8/finance/chart/<symbol>` through a [`Relay`] and reduces the
//! response to `(date label, close)` pairs.

mod models;

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};
use urlencoding::encode;

use crate::config::QuoteClientConfig;
use crate::errors::MarketDataError;
use crate::models::{Interval, Range, SeriesPoint, Symbol, TimeSeries};
use crate::provider::relay::{AllOriginsRelay, Relay};
use crate::provider::QuoteSource;

use models::{YahooChartResponse, YahooChartResult};

// ============================================================================
// Quote Client
// ============================================================================

/// Closing-price client for the chart endpoint.
///
/// One call is one relay round trip, bounded by
/// [`QuoteClientConfig::request_timeout`]. Failures are reported, never
/// retried.
pub struct QuoteClient {
    relay: Arc<dyn Relay>,
    config: QuoteClientConfig,
}

impl QuoteClient {
    /// Create a client that talks to the configured relay over HTTP.
    pub fn new(config: QuoteClientConfig) -> Result<Self, MarketDataError> {
        let relay = AllOriginsRelay::new(&config)?;
        Ok(Self::with_relay(config, Arc::new(relay)))
    }

    /// Create a client over any relay implementation.
    pub fn with_relay(config: QuoteClientConfig, relay: Arc<dyn Relay>) -> Self {
        Self { relay, config }
    }

    pub fn config(&self) -> &QuoteClientConfig {
        &self.config
    }

    /// Target URL on the quote host, before relaying.
    pub fn chart_url(&self, symbol: &Symbol, interval: Interval, range: Range) -> String {
        format!(
            "{}/v8/finance/chart/{}?interval={}&range={}",
            self.config.quote_host,
            encode(symbol.as_str()),
            interval.as_str(),
            range.as_str()
        )
    }

    // ========================================================================
    // Response Parsing
    // ========================================================================

    /// Parse a raw chart body into a series.
    pub fn parse_chart(&self, body: &str) -> Result<TimeSeries, MarketDataError> {
        let response: YahooChartResponse = serde_json::from_str(body)?;

        let chart = response.chart.ok_or_else(|| {
            MarketDataError::InvalidResponseShape("missing 'chart' object".to_string())
        })?;

        let result = match chart.result.and_then(|r| r.into_iter().next()) {
            Some(result) => result,
            None => {
                let message = match chart.error {
                    Some(err) => format!(
                        "upstream error {}: {}",
                        err.code.as_deref().unwrap_or("unknown"),
                        err.description.as_deref().unwrap_or("no description")
                    ),
                    None => "missing 'chart.result'".to_string(),
                };
                return Err(MarketDataError::InvalidResponseShape(message));
            }
        };

        self.result_to_series(result)
    }

    fn result_to_series(&self, result: YahooChartResult) -> Result<TimeSeries, MarketDataError> {
        let timestamps = result.timestamp.ok_or_else(|| {
            MarketDataError::InvalidResponseShape("missing 'timestamp' array".to_string())
        })?;

        let closes = result
            .indicators
            .and_then(|i| i.quote)
            .and_then(|q| q.into_iter().next())
            .and_then(|q| q.close)
            .ok_or_else(|| {
                MarketDataError::InvalidResponseShape(
                    "missing 'indicators.quote[0].close' array".to_string(),
                )
            })?;

        if timestamps.len() != closes.len() {
            return Err(MarketDataError::InvalidResponseShape(format!(
                "{} timestamps but {} closes",
                timestamps.len(),
                closes.len()
            )));
        }

        let zone = self.config.label_zone;
        let points = timestamps
            .into_iter()
            .zip(closes)
            .filter_map(|(ts, close)| match zone.label_for(ts) {
                Some(label) => Some(SeriesPoint::new(label, close)),
                None => {
                    warn!("Skipping bar with invalid timestamp: {}", ts);
                    None
                }
            });

        Ok(TimeSeries::from_points(points))
    }
}

// ============================================================================
// QuoteSource Implementation
// ============================================================================

#[async_trait]
impl QuoteSource for QuoteClient {
    fn id(&self) -> &'static str {
        "YAHOO"
    }

    async fn fetch_series(
        &self,
        symbol: &Symbol,
        interval: Interval,
        range: Range,
    ) -> Result<TimeSeries, MarketDataError> {
        let url = self.chart_url(symbol, interval, range);

        debug!(
            "Fetching {} series for {} ({}) via {}",
            interval.as_str(),
            symbol,
            range.as_str(),
            self.relay.id()
        );

        let body = tokio::time::timeout(self.config.request_timeout, self.relay.fetch_raw(&url))
            .await
            .map_err(|_| {
                MarketDataError::TransportFailure(format!(
                    "no response within {} ms",
                    self.config.request_timeout.as_millis()
                ))
            })?
            .inspect_err(|e| warn!("Relay failed for {}: {}", symbol, e))?;

        let series = self
            .parse_chart(&body)
            .inspect_err(|e| warn!("Unusable chart body for {}: {}", symbol, e))?;

        debug!("Parsed {} bars for {}", series.len(), symbol);
        Ok(series)
    }
}

// ============================================================================
// Tests
// ============================================================================
