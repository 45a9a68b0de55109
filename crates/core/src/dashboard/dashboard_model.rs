use serde::{Deserialize, Serialize};
use tickerboard_market_data::{Interval, Range, Symbol};

use crate::chart::{ChartFrame, DisplayMode};
use crate::constants::{DEFAULT_REFERENCE_LABEL, DEFAULT_REFERENCE_SYMBOL, DEFAULT_SYMBOL};
use crate::errors::{Error, Result};

/// Static dashboard settings.
#[derive(Clone, Debug)]
pub struct DashboardConfig {
    pub initial_symbol: Symbol,
    pub reference_symbol: Symbol,
    pub reference_label: String,
    pub interval: Interval,
    pub range: Range,
}

impl DashboardConfig {
    pub fn new(initial_symbol: &str, reference_symbol: &str) -> Result<Self> {
        Ok(Self {
            initial_symbol: Symbol::parse(initial_symbol)?,
            reference_symbol: Symbol::parse(reference_symbol)?,
            reference_label: DEFAULT_REFERENCE_LABEL.to_string(),
            interval: Interval::default(),
            range: Range::default(),
        })
    }

    /// Defaults overridden by `TB_INITIAL_SYMBOL`, `TB_REFERENCE_SYMBOL`,
    /// `TB_REFERENCE_LABEL`, `TB_INTERVAL` and `TB_RANGE`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let initial = lookup("TB_INITIAL_SYMBOL").unwrap_or_else(|| DEFAULT_SYMBOL.into());
        let reference =
            lookup("TB_REFERENCE_SYMBOL").unwrap_or_else(|| DEFAULT_REFERENCE_SYMBOL.into());
        let mut config = Self::new(&initial, &reference)?;

        if let Some(label) = lookup("TB_REFERENCE_LABEL") {
            if !label.trim().is_empty() {
                config.reference_label = label.trim().to_string();
            }
        }
        if let Some(raw) = lookup("TB_INTERVAL") {
            config.interval = raw.parse::<Interval>().map_err(Error::InvalidConfigValue)?;
        }
        if let Some(raw) = lookup("TB_RANGE") {
            config.range = raw.parse::<Range>().map_err(Error::InvalidConfigValue)?;
        }
        Ok(config)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Idle,
    Refreshing,
}

/// User-visible message about a refresh that did not reach the chart.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub symbol: Option<String>,
    pub message: String,
}

impl Notice {
    pub fn new(symbol: Option<&Symbol>, message: impl Into<String>) -> Self {
        Self {
            symbol: symbol.map(|s| s.to_string()),
            message: message.into(),
        }
    }

    pub(crate) fn from_error(symbol: Option<&Symbol>, error: &Error) -> Self {
        let message = match (symbol, error) {
            (Some(symbol), Error::MarketData(e)) if e.is_transport() => {
                format!("Could not reach the quote service for {}: {}", symbol, e)
            }
            (Some(symbol), Error::MarketData(e)) => {
                format!("Price data for {} could not be loaded: {}", symbol, e)
            }
            (Some(symbol), other) => format!("Chart for {} could not be updated: {}", symbol, other),
            (None, other) => other.to_string(),
        };
        Self::new(symbol, message)
    }
}

/// Explicit dashboard state, owned by the controller.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardState {
    /// Symbol of the most recent selection.
    pub symbol: Option<Symbol>,
    /// Whether the reference series is overlaid.
    pub comparison: bool,
    pub phase: Phase,
    /// Sequence number of the newest refresh issued.
    pub issued_seq: u64,
    /// Sequence number of the refresh currently on the chart, 0 if none.
    pub applied_seq: u64,
    pub last_notice: Option<Notice>,
}

impl DashboardState {
    pub fn mode(&self) -> DisplayMode {
        DisplayMode::for_comparison(self.comparison)
    }
}

/// What became of one refresh.
#[derive(Clone, Debug, PartialEq)]
pub enum RefreshOutcome {
    /// The frame was pushed to the presenter.
    Rendered(ChartFrame),
    /// A newer refresh was issued before this one finished; its result was
    /// dropped.
    Superseded,
    /// Nothing was drawn; the notice was published.
    Failed(Notice),
}
