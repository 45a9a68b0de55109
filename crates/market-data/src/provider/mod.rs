//! Quote source abstractions and implementations.
//!
//! This module contains:
//! - The `QuoteSource` trait consumed by the dashboard
//! - The `Relay` pass-through used to reach the upstream host
//! - The chart-endpoint client (`yahoo::QuoteClient`)

mod traits;

pub mod relay;
pub mod yahoo;

pub use traits::QuoteSource;
