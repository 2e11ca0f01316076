//! The Client: configuration context for payload sessions.
//!
//! The client owns the transport and the default server URI. Payloads
//! created through it inherit the default URI at construction time only;
//! changing the default afterwards does not affect existing payloads.

use std::sync::Arc;

use hashmap_payload_transport::{HttpTransport, Transport};
use tracing::debug;

use crate::config::{non_empty, ClientConfig};
use crate::error::Result;
use crate::payload::{Payload, PayloadOptions};

/// Factory for payloads sharing one transport and configuration.
pub struct Client<T: Transport = HttpTransport> {
    transport: Arc<T>,
    config: ClientConfig,
}

impl Client<HttpTransport> {
    /// Create a client backed by the HTTP transport.
    ///
    /// Fails if the HTTP client cannot be built from `config.http`.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let transport = Arc::new(HttpTransport::with_config(&config.http)?);
        Ok(Self { transport, config })
    }
}

impl<T: Transport> Client<T> {
    /// Create a client over any transport.
    pub fn with_transport(transport: Arc<T>, config: ClientConfig) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &Arc<T> {
        &self.transport
    }

    /// The server URI inherited by new payloads.
    pub fn default_uri(&self) -> Option<&str> {
        self.config.default_uri.as_deref()
    }

    /// Replace the default server URI. An empty string clears it.
    pub fn set_default_uri(&mut self, uri: impl Into<String>) {
        self.config.default_uri = non_empty(uri.into());
        debug!(default_uri = ?self.config.default_uri, "default uri updated");
    }

    /// Create an empty payload, falling back to the default URI.
    pub fn payload(&self, options: PayloadOptions) -> Payload<T> {
        let options = PayloadOptions {
            uri: options.uri.or_else(|| self.config.default_uri.clone()),
            endpoint: options.endpoint,
        };
        Payload::new(options, Arc::clone(&self.transport))
    }
}
