//! HTTP client initialization.

use std::time::Duration;

use reqwest::ClientBuilder;

/// Client-level safety-net timeout. Individual provider calls carry their own
/// per-request timeout; this only bounds calls that forgot one.
const CLIENT_TIMEOUT_SECS: u64 = 30;

/// Initializes the shared outbound HTTP client.
///
/// One client serves every provider adapter: connection pooling across
/// requests is what makes the sequential fallback chain cheap when a later
/// provider is retried for many lookups in a row.
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client() -> Result<reqwest::Client, reqwest::Error> {
    ClientBuilder::new()
        .timeout(Duration::from_secs(CLIENT_TIMEOUT_SECS))
        .user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ))
        .build()
}
