//! # Hashmap Payload Transport
//!
//! Moves JSON-serialized envelopes between a client and a hashmap server.
//!
//! ## Overview
//!
//! The transport is a thin collaborator: GET a document by URL, POST a
//! document to a URL. It reports network failures and non-2xx statuses as
//! [`TransportError`] and never retries.
//!
//! - [`HttpTransport`] - `reqwest` client for real servers
//! - [`MemoryTransport`] - canned routes for tests
//!
//! ## Message Flow
//!
//! ```text
//! Client                              Server
//!   |-------- POST {uri} envelope ---->|
//!   |<------- {"endpoint": ...} -------|
//!   |-------- GET {uri}/{endpoint} --->|
//!   |<------- envelope ----------------|
//! ```

pub mod error;
pub mod http;
pub mod transport;

pub use error::{Result, TransportError};
pub use http::{HttpTransport, HttpTransportConfig};
pub use transport::{memory::MemoryTransport, memory::RecordedRequest, Transport};
