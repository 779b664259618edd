//! Provider adapters.
//!
//! One adapter per external service. Each adapter knows how to call its fixed
//! endpoint, recognize that service's failure signal, and translate the raw
//! response into the canonical shape. Adapters never let an error escape:
//! network failures, timeouts, JSON-shape surprises, and provider-reported
//! failures all come back as [`AdapterFailure`], which is all the
//! orchestrator needs to move on to the next provider.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::error_handling::{categorize_reqwest_error, AdapterFailure};

pub mod geo;
pub mod mc;
pub mod self_ip;

/// One external data service that can resolve a target into a canonical
/// result. Implementations are assembled into ordered fallback chains; adding,
/// removing, or reordering providers is a configuration change, not a code
/// change.
#[async_trait]
pub trait Provider: Send + Sync {
    /// The canonical result this provider produces.
    type Output: Send;

    /// Short service tag attached to results produced by this adapter.
    fn name(&self) -> &'static str;

    /// Issues exactly one outbound call for `target`, bounded by `timeout`,
    /// and maps the response onto the canonical shape.
    async fn fetch(
        &self,
        client: &reqwest::Client,
        target: &str,
        timeout: Duration,
    ) -> Result<Self::Output, AdapterFailure>;
}

/// Shared GET-and-decode helper used by every adapter.
///
/// Non-2xx statuses and transport errors are categorized via the central
/// error categorization; a body that fails to decode as `T` is a malformed
/// response. Provider schemas drift without notice, so `T` is expected to be
/// a struct of optional fields that tolerates additions and removals.
pub(crate) async fn get_json<T: DeserializeOwned>(
    client: &reqwest::Client,
    url: &str,
    timeout: Duration,
) -> Result<T, AdapterFailure> {
    let response = client
        .get(url)
        .timeout(timeout)
        .send()
        .await
        .map_err(|e| categorize_reqwest_error(&e, timeout))?
        .error_for_status()
        .map_err(|e| categorize_reqwest_error(&e, timeout))?;

    response
        .json::<T>()
        .await
        .map_err(|e| AdapterFailure::Malformed(e.to_string()))
}
