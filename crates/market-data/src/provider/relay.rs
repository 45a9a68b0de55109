//! Pass-through relay.
//!
//! The relay takes a target URL and hands back the target's body untouched.
//! It exists only to get around same-origin restrictions, so it carries no
//! parsing or error interpretation of its own.

use async_trait::async_trait;
use tracing::debug;
use urlencoding::encode;

use crate::config::QuoteClientConfig;
use crate::errors::MarketDataError;

#[async_trait]
pub trait Relay: Send + Sync {
    fn id(&self) -> &'static str;

    /// Fetch `target_url` and return its raw body.
    async fn fetch_raw(&self, target_url: &str) -> Result<String, MarketDataError>;
}

/// Relay speaking the `GET <host>/raw?url=<encoded target>` protocol.
pub struct AllOriginsRelay {
    client: reqwest::Client,
    host: String,
}

impl AllOriginsRelay {
    pub fn new(config: &QuoteClientConfig) -> Result<Self, MarketDataError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| {
                MarketDataError::TransportFailure(format!("Failed to build HTTP client: {}", e))
            })?;
        Ok(Self {
            client,
            host: config.relay_host.clone(),
        })
    }

    fn relay_url(&self, target_url: &str) -> String {
        format!("{}/raw?url={}", self.host, encode(target_url))
    }
}

#[async_trait]
impl Relay for AllOriginsRelay {
    fn id(&self) -> &'static str {
        "ALLORIGINS"
    }

    async fn fetch_raw(&self, target_url: &str) -> Result<String, MarketDataError> {
        let url = self.relay_url(target_url);
        debug!("Relaying {} via {}", target_url, self.host);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(MarketDataError::TransportFailure(format!(
                "relay answered HTTP {}",
                status.as_u16()
            )));
        }

        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relay_url_encodes_target() {
        let config = QuoteClientConfig::default().with_relay_host("https://relay.example/");
        let relay = AllOriginsRelay::new(&config).unwrap();
        assert_eq!(
            relay.relay_url(
                "https://query1.finance.yahoo.com/v8/finance/chart/%5EGDAXI?interval=1d&range=1mo"
            ),
            "https://relay.example/raw?url=https%3A%2F%2Fquery1.finance.yahoo.com%2Fv8%2Ffinance%2Fchart%2F%255EGDAXI%3Finterval%3D1d%26range%3D1mo"
        );
    }

    #[tokio::test]
    async fn test_unreachable_relay_is_transport_failure() {
        // Port 9 (discard) on localhost is closed in test environments.
        let config = QuoteClientConfig::default()
            .with_relay_host("http://127.0.0.1:9")
            .with_timeout(std::time::Duration::from_millis(500));
        let relay = AllOriginsRelay::new(&config).unwrap();
        let error = relay.fetch_raw("http://example.invalid/").await.unwrap_err();
        assert!(error.is_transport());
    }

    #[tokio::test]
    async fn test_error_status_is_transport_failure() {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};
        use tokio::net::TcpListener;

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = [0u8; 1024];
            let _ = socket.read(&mut request).await;
            socket
                .write_all(
                    b"HTTP/1.1 502 Bad Gateway\r\ncontent-length: 0\r\nconnection: close\r\n\r\n",
                )
                .await
                .unwrap();
        });

        let config = QuoteClientConfig::default()
            .with_relay_host(format!("http://{}", addr))
            .with_timeout(std::time::Duration::from_secs(2));
        let relay = AllOriginsRelay::new(&config).unwrap();
        let error = relay.fetch_raw("http://example.invalid/").await.unwrap_err();
        assert_eq!(
            error,
            MarketDataError::TransportFailure("relay answered HTTP 502".to_string())
        );
    }
}
