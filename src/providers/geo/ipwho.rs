//! ipwho.is adapter.
//!
//! Distinguishes ISP and organization inside a nested `connection` object and
//! wraps the timezone in an object of its own. Failure signal is a `success`
//! flag that must be literally true.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::config::IPWHO_BASE_URL;
use crate::error_handling::AdapterFailure;
use crate::models::GeoInfo;
use crate::normalize::{or_unknown, paired_coords};
use crate::providers::{get_json, Provider};

const SERVICE: &str = "ipwho.is";

/// Adapter for `ipwho.is`.
pub struct IpWho {
    base_url: String,
}

impl Default for IpWho {
    fn default() -> Self {
        Self {
            base_url: IPWHO_BASE_URL.to_string(),
        }
    }
}

impl IpWho {
    /// Creates an adapter pointed at a non-default endpoint (tests).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawTimezone {
    id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawConnection {
    asn: Option<u32>,
    org: Option<String>,
    isp: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawResponse {
    success: Option<bool>,
    message: Option<String>,
    country: Option<String>,
    country_code: Option<String>,
    region: Option<String>,
    region_code: Option<String>,
    city: Option<String>,
    postal: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
    timezone: Option<RawTimezone>,
    connection: Option<RawConnection>,
}

#[async_trait]
impl Provider for IpWho {
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
        let url = format!("{}/{}", self.base_url, target);
        let raw: RawResponse = get_json(client, &url, timeout).await?;

        if raw.success != Some(true) {
            return Err(AdapterFailure::Provider(
                raw.message
                    .unwrap_or_else(|| "success flag was not set".to_string()),
            ));
        }

        let (lat, lon) = paired_coords(raw.latitude, raw.longitude);
        let connection = raw.connection.unwrap_or_default();
        Ok(GeoInfo {
            ip: target.to_string(),
            success: true,
            country: or_unknown(raw.country),
            country_code: or_unknown(raw.country_code),
            region: or_unknown(raw.region_code),
            region_name: or_unknown(raw.region),
            city: or_unknown(raw.city),
            zip: or_unknown(raw.postal),
            lat,
            lon,
            timezone: or_unknown(raw.timezone.and_then(|t| t.id)),
            isp: or_unknown(connection.isp),
            org: or_unknown(connection.org),
            autonomous_system: or_unknown(connection.asn.map(|asn| format!("AS{asn}"))),
            query: target.to_string(),
            service: SERVICE.to_string(),
        })
    }
}
