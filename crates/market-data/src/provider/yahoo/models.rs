//! Yahoo Finance chart API response models.
//!
//! Only the fields needed for a closing-price series are modelled. Every level
//! is optional so a missing piece surfaces as a descriptive shape error
//! instead of an opaque serde message.

use serde::Deserialize;

/// Main response wrapper for the v8 chart API
#[derive(Debug, Deserialize)]
pub struct YahooChartResponse {
    pub chart: Option<YahooChart>,
}

#[derive(Debug, Deserialize)]
pub struct YahooChart {
    pub result: Option<Vec<YahooChartResult>>,
    pub error: Option<YahooChartError>,
}

/// Error object the API returns for unknown symbols
#[derive(Debug, Deserialize)]
pub struct YahooChartError {
    pub code: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct YahooChartResult {
    pub timestamp: Option<Vec<i64>>,
    pub indicators: Option<YahooIndicators>,
}

#[derive(Debug, Deserialize)]
pub struct YahooIndicators {
    pub quote: Option<Vec<YahooQuoteIndicator>>,
}

/// OHLCV arrays; nulls mark bars without a trade
#[derive(Debug, Deserialize)]
pub struct YahooQuoteIndicator {
    pub close: Option<Vec<Option<f64>>>,
}
