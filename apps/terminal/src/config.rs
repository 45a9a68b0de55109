use tickerboard_core::DashboardConfig;
use tickerboard_market_data::QuoteClientConfig;

pub struct Config {
    pub quotes: QuoteClientConfig,
    pub dashboard: DashboardConfig,
    /// Start with the reference series shown.
    pub compare_on_start: bool,
}

impl Config {
    /// Read the `TB_*` variables. Call after `.env` is loaded and tracing is
    /// installed, since rejected values are only reported as warnings.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let quotes = QuoteClientConfig::from_lookup(&lookup);
        let dashboard = DashboardConfig::from_lookup(&lookup)?;
        let compare_on_start = lookup("TB_COMPARE")
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "on"))
            .unwrap_or(false);
        Ok(Self {
            quotes,
            dashboard,
            compare_on_start,
        })
    }
}
