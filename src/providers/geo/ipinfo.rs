//! ipinfo.io adapter.
//!
//! The quirkiest mapping in the chain:
//! - coordinates arrive as a single combined `"lat,lon"` string; a missing or
//!   empty `loc` is replaced with the documented `"0,0"` default pair before
//!   splitting;
//! - `country` holds only an ISO code, which fills both canonical country
//!   fields;
//! - one unified `org` value ("AS15169 Google LLC") stands in for `isp`,
//!   `org`, and `as` alike.
//!
//! Failure signal is an `error` object in the payload, or `bogon: true` for
//! unroutable addresses.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::config::IPINFO_BASE_URL;
use crate::error_handling::AdapterFailure;
use crate::models::GeoInfo;
use crate::normalize::{or_unknown, split_coord_pair, DEFAULT_COORD_PAIR, UNKNOWN};
use crate::providers::{get_json, Provider};

const SERVICE: &str = "ipinfo.io";

/// Adapter for `ipinfo.io`.
pub struct IpInfo {
    base_url: String,
}

impl Default for IpInfo {
    fn default() -> Self {
        Self {
            base_url: IPINFO_BASE_URL.to_string(),
        }
    }
}

impl IpInfo {
    /// Creates an adapter pointed at a non-default endpoint (tests).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawError {
    message: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawResponse {
    error: Option<RawError>,
    bogon: Option<bool>,
    country: Option<String>,
    region: Option<String>,
    city: Option<String>,
    postal: Option<String>,
    loc: Option<String>,
    timezone: Option<String>,
    org: Option<String>,
}

#[async_trait]
impl Provider for IpInfo {
    type Output = GeoInfo;

    fn name(&self) -> &'static str {
        SERVICE
    }

    async fn fetch(
        &self,
        client: &reqwest::Client,
        target: &str,
        timeout: Duration,
    ) -> Result<GeoInfo, AdapterFailure> {
        let url = format!("{}/{}/json", self.base_url, target);
        let raw: RawResponse = get_json(client, &url, timeout).await?;

        if let Some(error) = raw.error {
            return Err(AdapterFailure::Provider(
                error
                    .message
                    .unwrap_or_else(|| "error object in payload".to_string()),
            ));
        }
        if raw.bogon == Some(true) {
            return Err(AdapterFailure::Provider("bogon address".to_string()));
        }

        // Missing or empty loc falls back to the default pair, so a response
        // with no coordinates yields 0,0 rather than an absent pair here.
        let loc = raw
            .loc
            .filter(|l| !l.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_COORD_PAIR.to_string());
        let (lat, lon) = split_coord_pair(&loc);

        // country is a bare ISO code; it fills both canonical fields
        let country_code = or_unknown(raw.country);
        let org = or_unknown(raw.org);

        Ok(GeoInfo {
            ip: target.to_string(),
            success: true,
            country: country_code.clone(),
            country_code,
            // no region code from this provider, only the name
            region: UNKNOWN.to_string(),
            region_name: or_unknown(raw.region),
            city: or_unknown(raw.city),
            zip: or_unknown(raw.postal),
            lat,
            lon,
            timezone: or_unknown(raw.timezone),
            isp: org.clone(),
            org: org.clone(),
            autonomous_system: org,
            query: target.to_string(),
            service: SERVICE.to_string(),
        })
    }
}
