//! Market data models
//!
//! - `types` - Symbol and the chart endpoint's interval/range parameters
//! - `series` - Labeled time series (TimeSeries, SeriesPoint)

mod series;
mod types;

pub use series::{SeriesPoint, TimeSeries};
pub use types::{Interval, Range, Symbol};
