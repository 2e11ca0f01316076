//! An in-memory hashmap server.
//!
//! Implements [`Transport`] directly so client code can be exercised end to
//! end without sockets. POST to the base URI validates the envelope and
//! stores it under the endpoint derived from its public key; GET
//! `{base}/{endpoint}` returns whatever is stored there.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};
use tokio::sync::RwLock;

use hashmap_payload_core::{validate_envelope, Envelope};
use hashmap_payload_transport::{Result, Transport, TransportError};

/// Base URI used when none is given.
pub const DEFAULT_BASE_URI: &str = "https://hashmap.test";

/// In-memory server keyed by endpoint.
pub struct HashmapServer {
    base: String,
    entries: RwLock<HashMap<String, Value>>,
}

impl HashmapServer {
    /// Create a server answering under [`DEFAULT_BASE_URI`].
    pub fn new() -> Arc<Self> {
        Self::with_base(DEFAULT_BASE_URI)
    }

    /// Create a server answering under `base`.
    pub fn with_base(base: &str) -> Arc<Self> {
        Arc::new(Self {
            base: base.trim_end_matches('/').to_string(),
            entries: RwLock::new(HashMap::new()),
        })
    }

    pub fn base_uri(&self) -> &str {
        &self.base
    }

    /// Store `value` under `endpoint` without any checks.
    ///
    /// Simulates a server that serves someone else's payload.
    pub async fn insert_raw(&self, endpoint: &str, value: Value) {
        self.entries.write().await.insert(endpoint.to_string(), value);
    }

    /// The stored document for `endpoint`, if any.
    pub async fn stored(&self, endpoint: &str) -> Option<Value> {
        self.entries.read().await.get(endpoint).cloned()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    fn endpoint_of<'a>(&self, url: &'a str) -> Option<&'a str> {
        url.strip_prefix(self.base.as_str())?
            .strip_prefix('/')
            .map(|rest| rest.trim_end_matches('/'))
            .filter(|rest| !rest.is_empty() && !rest.contains('/'))
    }

    fn status(url: &str, status: u16) -> TransportError {
        TransportError::Status {
            url: url.to_string(),
            status,
        }
    }
}

#[async_trait]
impl Transport for HashmapServer {
    async fn fetch_json(&self, url: &str) -> Result<Value> {
        let endpoint = self.endpoint_of(url).ok_or_else(|| Self::status(url, 404))?;
        self.stored(endpoint)
            .await
            .ok_or_else(|| Self::status(url, 404))
    }

    async fn post_json(&self, url: &str, body: &Value) -> Result<Value> {
        if url.trim_end_matches('/') != self.base {
            return Err(Self::status(url, 404));
        }

        let envelope = Envelope::from_value(body.clone()).map_err(|_| Self::status(url, 400))?;
        let validated = validate_envelope(&envelope).map_err(|_| Self::status(url, 400))?;
        let endpoint = validated.endpoint();

        self.insert_raw(endpoint.as_str(), body.clone()).await;
        Ok(json!({ "endpoint": endpoint.as_str() }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::TestFixture;

    #[tokio::test]
    async fn test_post_then_fetch() {
        let server = HashmapServer::new();
        let fixture = TestFixture::with_seed([0x11; 32]);
        let envelope = fixture.make_envelope(b"stored");
        let body = envelope.to_value().unwrap();

        let reply = server.post_json(DEFAULT_BASE_URI, &body).await.unwrap();
        assert_eq!(reply["endpoint"], fixture.endpoint().as_str());

        let url = format!("{}/{}", DEFAULT_BASE_URI, fixture.endpoint());
        assert_eq!(server.fetch_json(&url).await.unwrap(), body);
    }

    #[tokio::test]
    async fn test_repost_replaces_entry() {
        let server = HashmapServer::new();
        let fixture = TestFixture::with_seed([0x11; 32]);

        for message in [&b"first"[..], &b"second"[..]] {
            let body = fixture.make_envelope(message).to_value().unwrap();
            server.post_json(DEFAULT_BASE_URI, &body).await.unwrap();
        }

        assert_eq!(server.len().await, 1);
    }

    #[tokio::test]
    async fn test_rejects_invalid_envelope() {
        let server = HashmapServer::new();
        let mut envelope = TestFixture::new().make_envelope(b"x");
        envelope.sig = TestFixture::new().make_envelope(b"y").sig;

        let err = server
            .post_json(DEFAULT_BASE_URI, &envelope.to_value().unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, TransportError::Status { status: 400, .. }));
        assert!(server.is_empty().await);

        let err = server
            .post_json(DEFAULT_BASE_URI, &json!({ "total": "fail" }))
            .await
            .unwrap_err();
        assert!(matches!(err, TransportError::Status { status: 400, .. }));
    }

    #[tokio::test]
    async fn test_unknown_routes() {
        let server = HashmapServer::with_base("https://a.test/");

        let err = server.fetch_json("https://a.test/nothing").await.unwrap_err();
        assert!(matches!(err, TransportError::Status { status: 404, .. }));

        let err = server.fetch_json("https://b.test/x").await.unwrap_err();
        assert!(matches!(err, TransportError::Status { status: 404, .. }));

        let err = server.post_json("https://b.test", &json!({})).await.unwrap_err();
        assert!(matches!(err, TransportError::Status { status: 404, .. }));
    }

    #[tokio::test]
    async fn test_insert_raw_serves_anything() {
        let server = HashmapServer::new();
        server.insert_raw("abc", json!({ "any": "thing" })).await;

        let value = server
            .fetch_json(&format!("{DEFAULT_BASE_URI}/abc/"))
            .await
            .unwrap();
        assert_eq!(value, json!({ "any": "thing" }));
    }
}
