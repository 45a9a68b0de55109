//! Chart module - the frame handed to the drawing surface, tick formatting,
//! and the presenter contract.

mod chart_model;
mod chart_traits;
mod in_memory_chart;

pub use chart_model::{ChartConfig, ChartDataset, ChartFrame, ConfigDataset, DatasetStyle, DisplayMode};
pub use chart_traits::ChartPresenter;
pub use in_memory_chart::InMemoryChart;
