//! Quote client configuration.

use std::str::FromStr;
use std::time::Duration;

use chrono::{DateTime, Local, TimeZone, Utc};
use chrono_tz::Tz;
use tracing::warn;

pub const DEFAULT_QUOTE_HOST: &str = "https://query1.finance.yahoo.com";
pub const DEFAULT_RELAY_HOST: &str = "https://api.allorigins.win";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Time zone used to turn epoch timestamps into `YYYY-MM-DD` labels.
///
/// The same trading bar can land on different calendar days depending on the
/// zone, so the choice is explicit configuration rather than whatever the host
/// happens to run in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LabelZone {
    #[default]
    Utc,
    Local,
    Named(Tz),
}

impl LabelZone {
    /// Format an epoch-seconds timestamp as a calendar-date label.
    ///
    /// Returns `None` for timestamps chrono cannot represent.
    pub fn label_for(&self, epoch_seconds: i64) -> Option<String> {
        let utc: DateTime<Utc> = Utc.timestamp_opt(epoch_seconds, 0).single()?;
        let label = match self {
            Self::Utc => utc.format("%Y-%m-%d").to_string(),
            Self::Local => utc.with_timezone(&Local).format("%Y-%m-%d").to_string(),
            Self::Named(tz) => utc.with_timezone(tz).format("%Y-%m-%d").to_string(),
        };
        Some(label)
    }
}

impl FromStr for LabelZone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "utc" => Ok(Self::Utc),
            "local" => Ok(Self::Local),
            _ => s
                .trim()
                .parse::<Tz>()
                .map(Self::Named)
                .map_err(|_| format!("unknown time zone '{}'", s.trim())),
        }
    }
}

/// Settings for [`QuoteClient`](crate::QuoteClient) and the default relay.
#[derive(Clone, Debug)]
pub struct QuoteClientConfig {
    /// Base URL of the chart endpoint, without trailing slash.
    pub quote_host: String,
    /// Base URL of the pass-through relay, without trailing slash.
    pub relay_host: String,
    /// Upper bound for a single relay round trip.
    pub request_timeout: Duration,
    pub label_zone: LabelZone,
}

impl Default for QuoteClientConfig {
    fn default() -> Self {
        Self {
            quote_host: DEFAULT_QUOTE_HOST.to_string(),
            relay_host: DEFAULT_RELAY_HOST.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            label_zone: LabelZone::Utc,
        }
    }
}

impl QuoteClientConfig {
    /// Read overrides from `TB_*` environment variables.
    ///
    /// Invalid values are logged and replaced by the default, so install the
    /// tracing subscriber before calling this.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(host) = lookup("TB_QUOTE_HOST") {
            config = config.with_quote_host(host);
        }
        if let Some(host) = lookup("TB_RELAY_HOST") {
            config = config.with_relay_host(host);
        }
        if let Some(raw) = lookup("TB_REQUEST_TIMEOUT_MS") {
            match raw.trim().parse::<u64>() {
                Ok(ms) if ms > 0 => config.request_timeout = Duration::from_millis(ms),
                _ => warn!("Ignoring invalid TB_REQUEST_TIMEOUT_MS '{}'", raw),
            }
        }
        if let Some(raw) = lookup("TB_LABEL_TZ") {
            match raw.parse::<LabelZone>() {
                Ok(zone) => config.label_zone = zone,
                Err(e) => warn!("Ignoring TB_LABEL_TZ: {}", e),
            }
        }
        config
    }

    pub fn with_quote_host(mut self, host: impl Into<String>) -> Self {
        self.quote_host = host.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_relay_host(mut self, host: impl Into<String>) -> Self {
        self.relay_host = host.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_label_zone(mut self, zone: LabelZone) -> Self {
        self.label_zone = zone;
        self
    }
}
