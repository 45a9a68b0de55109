//! Tickerboard Core - dashboard logic behind the stock chart.
//!
//! This crate aligns and indexes price series, assembles chart frames and
//! orchestrates refreshes. It talks to the outside world only through traits:
//! [`QuoteSource`](tickerboard_market_data::QuoteSource) for data,
//! [`chart::ChartPresenter`] for drawing and [`dashboard::Notifier`] for
//! user-visible messages.

pub mod chart;
pub mod constants;
pub mod dashboard;
pub mod errors;
pub mod projection;
pub mod series;

pub use chart::{ChartFrame, ChartPresenter, DisplayMode, InMemoryChart};
pub use dashboard::{DashboardConfig, DashboardController, Notice, Notifier, RefreshOutcome};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
