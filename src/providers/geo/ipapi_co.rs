//! ipapi.co adapter.
//!
//! Carries no separate ISP field, so the unified `org` value stands in for
//! both `isp` and `org`. Failure signal is an `error: true` flag with the
//! explanation in `reason`.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::config::IPAPI_CO_BASE_URL;
use crate::error_handling::AdapterFailure;
use crate::models::GeoInfo;
use crate::normalize::{or_unknown, paired_coords};
use crate::providers::{get_json, Provider};

const SERVICE: &str = "ipapi.co";

/// Adapter for `ipapi.co`.
pub struct IpapiCo {
    base_url: String,
}

impl Default for IpapiCo {
    fn default() -> Self {
        Self {
            base_url: IPAPI_CO_BASE_URL.to_string(),
        }
    }
}

impl IpapiCo {
    /// Creates an adapter pointed at a non-default endpoint (tests).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawResponse {
    error: Option<bool>,
    reason: Option<String>,
    country_name: Option<String>,
    country_code: Option<String>,
    region: Option<String>,
    region_code: Option<String>,
    city: Option<String>,
    postal: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
    timezone: Option<String>,
    org: Option<String>,
    asn: Option<String>,
}

#[async_trait]
impl Provider for IpapiCo {
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
        let url = format!("{}/{}/json/", self.base_url, target);
        let raw: RawResponse = get_json(client, &url, timeout).await?;

        if raw.error == Some(true) {
            return Err(AdapterFailure::Provider(
                raw.reason
                    .unwrap_or_else(|| "error flag was set".to_string()),
            ));
        }

        let (lat, lon) = paired_coords(raw.latitude, raw.longitude);
        Ok(GeoInfo {
            ip: target.to_string(),
            success: true,
            country: or_unknown(raw.country_name),
            country_code: or_unknown(raw.country_code),
            region: or_unknown(raw.region_code),
            region_name: or_unknown(raw.region),
            city: or_unknown(raw.city),
            zip: or_unknown(raw.postal),
            lat,
            lon,
            timezone: or_unknown(raw.timezone),
            // single unified organization field serves both roles
            isp: or_unknown(raw.org.clone()),
            org: or_unknown(raw.org),
            autonomous_system: or_unknown(raw.asn),
            query: target.to_string(),
            service: SERVICE.to_string(),
        })
    }
}
