//! Payload: a client session around one envelope.
//!
//! A payload starts [`PayloadState::Empty`] and becomes
//! [`PayloadState::Validated`] through `generate`, `import`, `validate`, or a
//! successful `get`. It never returns to `Empty`, and a failed operation
//! leaves the previous state in place.

use std::sync::Arc;

use hashmap_payload_core::{
    validate_envelope, validate_for_endpoint, DataRecord, Envelope, Keypair, ValidatedEnvelope,
    DEFAULT_MESSAGE,
};
use hashmap_payload_transport::{HttpTransport, Transport};
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::non_empty;
use crate::error::{ClientError, Result};

/// Options for constructing a payload.
#[derive(Debug, Clone, Default)]
pub struct PayloadOptions {
    /// Server base URI.
    pub uri: Option<String>,
    /// Endpoint to fetch from.
    pub endpoint: Option<String>,
}

impl PayloadOptions {
    pub fn uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = non_empty(uri.into());
        self
    }

    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = non_empty(endpoint.into());
        self
    }
}

/// Options for `generate`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateOptions {
    /// Requested lifetime in seconds; `None` or zero means the default.
    pub ttl: Option<u64>,
}

impl GenerateOptions {
    pub fn ttl(ttl: u64) -> Self {
        Self { ttl: Some(ttl) }
    }
}

/// Where a payload is in its lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadState {
    /// Nothing generated, imported, or fetched yet.
    Empty,
    /// Holds an envelope that passed the validation chain.
    Validated(ValidatedEnvelope),
}

/// A payload session bound to a transport.
pub struct Payload<T: Transport = HttpTransport> {
    uri: Option<String>,
    endpoint: Option<String>,
    state: PayloadState,
    transport: Arc<T>,
}

impl<T: Transport> Payload<T> {
    /// Create an empty payload.
    pub fn new(options: PayloadOptions, transport: Arc<T>) -> Self {
        Self {
            uri: options.uri,
            endpoint: options.endpoint,
            state: PayloadState::Empty,
            transport,
        }
    }

    pub fn uri(&self) -> Option<&str> {
        self.uri.as_deref()
    }

    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    pub fn state(&self) -> &PayloadState {
        &self.state
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Local Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Build, sign, and validate an envelope from a base64 private key.
    ///
    /// Returns the envelope as JSON text. On any error no envelope is stored.
    pub fn generate(
        &mut self,
        private_key: &str,
        message: &[u8],
        options: GenerateOptions,
    ) -> Result<String> {
        let keypair = Keypair::from_private_key(private_key)?;
        let record = DataRecord::new(message, options.ttl)?;
        let validated = Envelope::seal_validated(&keypair, &record)?;
        let json = validated.envelope.to_json()?;

        debug!(
            endpoint = %validated.endpoint(),
            ttl = record.ttl,
            "generated payload"
        );
        self.state = PayloadState::Validated(validated);
        Ok(json)
    }

    /// Like [`Payload::generate`] with the default single-space message.
    pub fn generate_default(
        &mut self,
        private_key: &str,
        options: GenerateOptions,
    ) -> Result<String> {
        self.generate(private_key, DEFAULT_MESSAGE, options)
    }

    /// Parse envelope JSON and run the validation chain.
    pub fn import(&mut self, json: &str) -> Result<&ValidatedEnvelope> {
        let envelope = Envelope::from_json(json)?;
        self.validate(envelope)
    }

    /// Run the validation chain and keep the envelope on success.
    pub fn validate(&mut self, envelope: Envelope) -> Result<&ValidatedEnvelope> {
        let validated = validate_envelope(&envelope)?;
        self.state = PayloadState::Validated(validated);
        self.validated()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Network Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Fetch and verify the envelope stored under an endpoint.
    ///
    /// Explicit arguments override and replace the instance's endpoint and
    /// URI. The fetched envelope must validate and its public key must hash
    /// to the requested endpoint.
    pub async fn get(&mut self, endpoint: Option<&str>, uri: Option<&str>) -> Result<Envelope> {
        if let Some(endpoint) = endpoint.filter(|e| !e.is_empty()) {
            self.endpoint = Some(endpoint.to_string());
        }
        let endpoint = self.endpoint.clone().ok_or(ClientError::MissingEndpoint)?;

        if let Some(uri) = uri.filter(|u| !u.is_empty()) {
            self.uri = Some(uri.to_string());
        }
        let uri = self.uri.clone().ok_or(ClientError::MissingUri)?;

        let url = format!("{}/{}", uri.trim_end_matches('/'), endpoint);
        debug!(%url, "fetching payload");

        let value = self.transport.fetch_json(&url).await?;
        let envelope = Envelope::from_value(value)?;
        let validated = validate_for_endpoint(&envelope, &endpoint).map_err(|e| {
            warn!(%url, error = %e, "rejected fetched payload");
            e
        })?;

        self.state = PayloadState::Validated(validated);
        Ok(envelope)
    }

    /// POST the held envelope to the server.
    ///
    /// Addressing is the server's job; the endpoint is not checked here.
    pub async fn post(&mut self, uri: Option<&str>) -> Result<Value> {
        let uri = uri
            .filter(|u| !u.is_empty())
            .map(str::to_string)
            .or_else(|| self.uri.clone())
            .ok_or(ClientError::MissingUri)?;
        let body = self.envelope()?.to_value()?;
        self.uri = Some(uri.clone());

        debug!(%uri, "posting payload");
        Ok(self.transport.post_json(&uri, &body).await?)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// The validated envelope and its decoded parts.
    pub fn validated(&self) -> Result<&ValidatedEnvelope> {
        match &self.state {
            PayloadState::Validated(validated) => Ok(validated),
            PayloadState::Empty => Err(ClientError::MissingPayload),
        }
    }

    pub fn envelope(&self) -> Result<&Envelope> {
        Ok(&self.validated()?.envelope)
    }

    /// The decoded data record.
    pub fn data(&self) -> Result<&DataRecord> {
        Ok(&self.validated()?.record)
    }

    pub fn message_bytes(&self) -> Result<&[u8]> {
        Ok(&self.validated()?.message)
    }

    /// The message as text. Invalid UTF-8 is replaced, not rejected.
    pub fn message(&self) -> Result<String> {
        Ok(String::from_utf8_lossy(self.message_bytes()?).into_owned())
    }

    /// The envelope as JSON text.
    pub fn to_json(&self) -> Result<String> {
        Ok(self.envelope()?.to_json()?)
    }
}

impl<T: Transport> std::fmt::Debug for Payload<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Payload")
            .field("uri", &self.uri)
            .field("endpoint", &self.endpoint)
            .field("state", &self.state)
            .finish()
    }
}
