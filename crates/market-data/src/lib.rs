//! Tickerboard Market Data Crate
//!
//! This crate fetches daily closing-price series for ticker symbols from a
//! public finance chart endpoint. Requests are routed through a pass-through
//! relay so the same code path works where the upstream host cannot be reached
//! directly.
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +------------------+
//! |   Dashboard      | --> |   QuoteSource    |  (trait, mockable)
//! +------------------+     +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |   QuoteClient    |  (builds chart URL, parses body)
//!                          +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |      Relay       |  (raw body pass-through)
//!                          +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |   TimeSeries     |  (date label, close)
//!                          +------------------+
//! ```
//!
//! # Core Types
//!
//! - [`Symbol`] - Case-insensitive ticker, stored uppercased
//! - [`TimeSeries`] - Ordered `(label, value)` points with unique labels
//! - [`QuoteClient`] - Chart-endpoint client over a [`Relay`]
//! - [`QuoteClientConfig`] - Hosts, timeout and label time zone

pub mod config;
pub mod errors;
pub mod models;
pub mod provider;

pub use config::{LabelZone, QuoteClientConfig};
pub use errors::MarketDataError;
pub use models::{Interval, Range, SeriesPoint, Symbol, TimeSeries};
pub use provider::relay::{AllOriginsRelay, Relay};
pub use provider::yahoo::QuoteClient;
pub use provider::QuoteSource;
