//! [`reqwest`]-backed implementation of [`Transport`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use serde_json::Value;
use tracing::debug;

use crate::error::{Result, TransportError};
use crate::transport::Transport;

/// Configuration for the HTTP transport.
#[derive(Debug, Clone, Default)]
pub struct HttpTransportConfig {
    /// Per-request timeout. `None` leaves requests unbounded.
    pub timeout: Option<Duration>,
}

impl HttpTransportConfig {
    /// Set a per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// A [`reqwest`]-backed HTTP transport.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    inner: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport with default settings.
    pub fn new() -> Self {
        Self {
            inner: reqwest::Client::new(),
        }
    }

    /// Create a transport from configuration.
    ///
    /// Fails with [`TransportError::Build`] if the client cannot honor the
    /// configuration.
    pub fn with_config(config: &HttpTransportConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let inner = builder
            .build()
            .map_err(|e| TransportError::Build(e.to_string()))?;
        Ok(Self { inner })
    }

    async fn decode(url: &str, response: reqwest::Response) -> Result<Value> {
        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.json::<Value>().await.map_err(|e| TransportError::Decode {
            url: url.to_string(),
            message: e.to_string(),
        })
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

fn request_error(url: &str, e: reqwest::Error) -> TransportError {
    TransportError::Request {
        url: url.to_string(),
        message: e.to_string(),
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn fetch_json(&self, url: &str) -> Result<Value> {
        debug!(url, "GET");
        let response = self
            .inner
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| request_error(url, e))?;
        Self::decode(url, response).await
    }

    async fn post_json(&self, url: &str, body: &Value) -> Result<Value> {
        debug!(url, "POST");
        let response = self
            .inner
            .post(url)
            .header(ACCEPT, "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| request_error(url, e))?;
        Self::decode(url, response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_timeout() {
        let config = HttpTransportConfig::default().with_timeout(Duration::from_secs(3));
        assert_eq!(config.timeout, Some(Duration::from_secs(3)));
        assert!(HttpTransport::with_config(&config).is_ok());
    }

    #[tokio::test]
    async fn test_unreachable_host_is_request_error() {
        let transport = HttpTransport::with_config(
            &HttpTransportConfig::default().with_timeout(Duration::from_secs(2)),
        )
        .unwrap();
        // Port 9 on loopback (discard) is closed on test hosts.
        let err = transport.fetch_json("http://127.0.0.1:9/x").await.unwrap_err();
        assert!(matches!(err, TransportError::Request { .. }));
    }
}
