//! Client configuration.

use std::time::Duration;

use hashmap_payload_transport::HttpTransportConfig;

/// Configuration for a [`Client`](crate::Client).
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    /// Server base URI inherited by payloads created without one.
    pub default_uri: Option<String>,
    /// HTTP transport settings.
    pub http: HttpTransportConfig,
}

impl ClientConfig {
    /// Set the default server URI. An empty string clears it.
    pub fn with_default_uri(mut self, uri: impl Into<String>) -> Self {
        self.default_uri = non_empty(uri.into());
        self
    }

    /// Set a per-request HTTP timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.http = self.http.with_timeout(timeout);
        self
    }
}

pub(crate) fn non_empty(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}
