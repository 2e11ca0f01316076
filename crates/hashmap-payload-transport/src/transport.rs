//! Transport abstraction for envelope exchange.
//!
//! The transport layer only moves JSON documents. It knows nothing about
//! envelopes or signatures; validation happens above it.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;

/// Transport trait for fetching and posting JSON documents.
///
/// Implementations must be thread-safe (Send + Sync). Network failures and
/// non-2xx statuses are both reported as [`TransportError`](crate::TransportError).
#[async_trait]
pub trait Transport: Send + Sync {
    /// GET `url` and decode the response body as JSON.
    async fn fetch_json(&self, url: &str) -> Result<Value>;

    /// POST `body` as JSON to `url` and decode the response body as JSON.
    async fn post_json(&self, url: &str, body: &Value) -> Result<Value>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn fetch_json(&self, url: &str) -> Result<Value> {
        (**self).fetch_json(url).await
    }

    async fn post_json(&self, url: &str, body: &Value) -> Result<Value> {
        (**self).post_json(url, body).await
    }
}

/// A canned in-memory transport for testing.
///
/// Routes are matched on the exact URL with any trailing slash removed.
/// Unknown routes answer 404.
pub mod memory {
    use super::*;
    use std::collections::HashMap;
    use tokio::sync::RwLock;

    use crate::error::TransportError;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum Method {
        Get,
        Post,
    }

    #[derive(Debug, Clone)]
    enum Reply {
        Json(Value),
        Status(u16),
    }

    /// A request observed by the transport.
    #[derive(Debug, Clone, PartialEq)]
    pub struct RecordedRequest {
        pub url: String,
        pub body: Option<Value>,
    }

    /// In-memory transport implementation.
    #[derive(Default)]
    pub struct MemoryTransport {
        routes: RwLock<HashMap<(Method, String), Reply>>,
        requests: RwLock<Vec<RecordedRequest>>,
    }

    impl MemoryTransport {
        /// Create an empty transport.
        pub fn new() -> Arc<Self> {
            Arc::new(Self::default())
        }

        /// Answer GET `url` with `body`.
        pub async fn on_get(&self, url: &str, body: Value) {
            self.insert(Method::Get, url, Reply::Json(body)).await;
        }

        /// Answer POST `url` with `reply`.
        pub async fn on_post(&self, url: &str, reply: Value) {
            self.insert(Method::Post, url, Reply::Json(reply)).await;
        }

        /// Answer GET `url` with an error status.
        pub async fn fail_get(&self, url: &str, status: u16) {
            self.insert(Method::Get, url, Reply::Status(status)).await;
        }

        /// Answer POST `url` with an error status.
        pub async fn fail_post(&self, url: &str, status: u16) {
            self.insert(Method::Post, url, Reply::Status(status)).await;
        }

        /// Every request seen so far, in order.
        pub async fn requests(&self) -> Vec<RecordedRequest> {
            self.requests.read().await.clone()
        }

        async fn insert(&self, method: Method, url: &str, reply: Reply) {
            self.routes
                .write()
                .await
                .insert((method, normalize(url)), reply);
        }

        async fn answer(&self, method: Method, url: &str, body: Option<&Value>) -> Result<Value> {
            self.requests.write().await.push(RecordedRequest {
                url: url.to_string(),
                body: body.cloned(),
            });

            let routes = self.routes.read().await;
            match routes.get(&(method, normalize(url))) {
                Some(Reply::Json(value)) => Ok(value.clone()),
                Some(Reply::Status(status)) => Err(TransportError::Status {
                    url: url.to_string(),
                    status: *status,
                }),
                None => Err(TransportError::Status {
                    url: url.to_string(),
                    status: 404,
                }),
            }
        }
    }

    fn normalize(url: &str) -> String {
        url.trim_end_matches('/').to_string()
    }

    #[async_trait]
    impl Transport for MemoryTransport {
        async fn fetch_json(&self, url: &str) -> Result<Value> {
            self.answer(Method::Get, url, None).await
        }

        async fn post_json(&self, url: &str, body: &Value) -> Result<Value> {
            self.answer(Method::Post, url, Some(body)).await
        }
    }
}
