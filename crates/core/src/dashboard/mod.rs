//! Dashboard module - refresh orchestration for the stock chart.

mod dashboard_model;
mod dashboard_service;
mod dashboard_traits;

pub use dashboard_model::{DashboardConfig, DashboardState, Notice, Phase, RefreshOutcome};
pub use dashboard_service::{build_frame, DashboardController};
pub use dashboard_traits::Notifier;
