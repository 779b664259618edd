//! ip-api.com adapter.
//!
//! The richest of the geolocation providers: distinct ISP/org/AS fields and
//! both region code and region name. Failure signal is `status` not equal to
//! `"success"`, with the reason in `message`.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::config::IP_API_BASE_URL;
use crate::error_handling::AdapterFailure;
use crate::models::GeoInfo;
use crate::normalize::{or_unknown, paired_coords};
use crate::providers::{get_json, Provider};

const SERVICE: &str = "ip-api.com";

/// Field list requested from the provider; anything outside this set is
/// ignored on their side, which keeps responses small.
const FIELDS: &str =
    "status,message,country,countryCode,region,regionName,city,zip,lat,lon,timezone,isp,org,as,query";

/// Adapter for `ip-api.com`.
pub struct IpApi {
    base_url: String,
}

impl Default for IpApi {
    fn default() -> Self {
        Self {
            base_url: IP_API_BASE_URL.to_string(),
        }
    }
}

impl IpApi {
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
    status: Option<String>,
    message: Option<String>,
    country: Option<String>,
    #[serde(rename = "countryCode")]
    country_code: Option<String>,
    region: Option<String>,
    #[serde(rename = "regionName")]
    region_name: Option<String>,
    city: Option<String>,
    zip: Option<String>,
    lat: Option<f64>,
    lon: Option<f64>,
    timezone: Option<String>,
    isp: Option<String>,
    org: Option<String>,
    #[serde(rename = "as")]
    autonomous_system: Option<String>,
}

#[async_trait]
impl Provider for IpApi {
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
        let url = format!("{}/json/{}?fields={}", self.base_url, target, FIELDS);
        let raw: RawResponse = get_json(client, &url, timeout).await?;

        if raw.status.as_deref() != Some("success") {
            return Err(AdapterFailure::Provider(
                raw.message
                    .unwrap_or_else(|| "status was not success".to_string()),
            ));
        }

        let (lat, lon) = paired_coords(raw.lat, raw.lon);
        Ok(GeoInfo {
            ip: target.to_string(),
            success: true,
            country: or_unknown(raw.country),
            country_code: or_unknown(raw.country_code),
            region: or_unknown(raw.region),
            region_name: or_unknown(raw.region_name),
            city: or_unknown(raw.city),
            zip: or_unknown(raw.zip),
            lat,
            lon,
            timezone: or_unknown(raw.timezone),
            isp: or_unknown(raw.isp),
            org: or_unknown(raw.org),
            autonomous_system: or_unknown(raw.autonomous_system),
            query: target.to_string(),
            service: SERVICE.to_string(),
        })
    }
}
