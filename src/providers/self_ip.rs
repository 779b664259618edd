//! One-shot public-IP discovery.
//!
//! Consulted only when the directly observed caller address is loopback or
//! otherwise local, so geolocating it would be meaningless. This is not part
//! of any fallback chain: one call, and on any failure the caller falls back
//! to the well-known demo address.

use std::time::Duration;

use serde::Deserialize;

use crate::config::IPIFY_BASE_URL;
use crate::providers::get_json;

/// Discovery client for `api.ipify.org`.
pub struct SelfIpDiscovery {
    base_url: String,
}

impl Default for SelfIpDiscovery {
    fn default() -> Self {
        Self {
            base_url: IPIFY_BASE_URL.to_string(),
        }
    }
}

impl SelfIpDiscovery {
    /// Creates a discovery client pointed at a non-default endpoint (tests).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Asks the discovery service for our public address.
    ///
    /// Returns `None` on any failure; the caller substitutes the demo IP.
    pub async fn discover(&self, client: &reqwest::Client, timeout: Duration) -> Option<String> {
        let url = format!("{}/?format=json", self.base_url);
        match get_json::<RawResponse>(client, &url, timeout).await {
            Ok(raw) => raw.ip.filter(|ip| !ip.is_empty()),
            Err(failure) => {
                log::warn!("public IP discovery failed: {failure}");
                None
            }
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawResponse {
    ip: Option<String>,
}
