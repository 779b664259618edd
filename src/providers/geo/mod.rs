//! Geolocation provider adapters.
//!
//! Four services, tried in the order below. ip-api.com is first because it is
//! the most complete (distinct ISP/org/AS fields, region code and name); the
//! later providers fill progressively fewer canonical fields and exist to
//! keep lookups working when the earlier ones are down or rate-limited.

use crate::models::GeoInfo;
use crate::providers::Provider;

mod ip_api;
mod ipapi_co;
mod ipinfo;
mod ipwho;

pub use ip_api::IpApi;
pub use ipapi_co::IpapiCo;
pub use ipinfo::IpInfo;
pub use ipwho::IpWho;

/// The full fallback chain, in fixed configured order.
pub fn default_providers() -> Vec<Box<dyn Provider<Output = GeoInfo>>> {
    vec![
        Box::new(IpApi::default()),
        Box::new(IpWho::default()),
        Box::new(IpapiCo::default()),
        Box::new(IpInfo::default()),
    ]
}

/// The legacy single-provider configuration: the primary provider alone,
/// whose failure surfaces as a hard error instead of triggering fallback.
pub fn primary_provider() -> Vec<Box<dyn Provider<Output = GeoInfo>>> {
    vec![Box::new(IpApi::default())]
}
