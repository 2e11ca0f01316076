//! Post a signed payload to a hashmap server and read it back.
//!
//! ```text
//! cargo run --example hashmap -- [BASE64_PRIVATE_KEY] [URI]
//! ```
//!
//! Without a key a fresh one is generated. The URI defaults to the public
//! prototype server.

use anyhow::Context;
use hashmap_payload::core::{generate_private_key, unix_nano_now};
use hashmap_payload::{Client, ClientConfig, GenerateOptions, PayloadOptions};
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_URI: &str = "https://prototype.hashmap.sh";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args().skip(1);
    let key = args.next().unwrap_or_else(generate_private_key);
    let uri = args.next().unwrap_or_else(|| DEFAULT_URI.to_string());

    let client = Client::new(ClientConfig::default().with_default_uri(uri))
        .context("building HTTP client")?;

    // Post
    let mut outgoing = client.payload(PayloadOptions::default());
    let message = format!("hello, world it is: {}", unix_nano_now());
    outgoing
        .generate(&key, message.as_bytes(), GenerateOptions::default())
        .context("generating payload")?;
    let reply = outgoing.post(None).await.context("posting payload")?;
    info!(%reply, "posted");

    // Get
    let endpoint = outgoing.validated()?.endpoint();
    let mut incoming = client.payload(PayloadOptions::default().endpoint(endpoint.as_str()));
    incoming.get(None, None).await.context("fetching payload")?;

    println!("{}: {}", endpoint, incoming.message()?);
    Ok(())
}
