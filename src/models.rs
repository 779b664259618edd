//! Canonical result types.
//!
//! Every provider adapter maps its service's idiosyncratic response shape
//! onto these structs, so the JSON contract seen by callers is identical no
//! matter which provider answered. Field names follow the public API
//! contract (camelCase where the contract has it).

use serde::{Deserialize, Serialize};

/// Normalized geolocation record for one resolved IPv4 address.
///
/// Invariants:
/// - every string field is populated, with `"Unknown"` standing in for data
///   the provider did not supply;
/// - `lat`/`lon` are either both numeric or both absent;
/// - `ip` and `query` always carry the resolved target, never a provider's
///   echo of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoInfo {
    /// The resolved address.
    pub ip: String,
    /// Whether resolution succeeded.
    pub success: bool,
    /// Country name.
    pub country: String,
    /// ISO country code.
    #[serde(rename = "countryCode")]
    pub country_code: String,
    /// Region/state code.
    pub region: String,
    /// Region/state name.
    #[serde(rename = "regionName")]
    pub region_name: String,
    /// City name.
    pub city: String,
    /// Postal code.
    pub zip: String,
    /// Latitude, absent (null) when the provider supplied none.
    #[serde(default)]
    pub lat: Option<f64>,
    /// Longitude, absent (null) when the provider supplied none.
    #[serde(default)]
    pub lon: Option<f64>,
    /// IANA timezone.
    pub timezone: String,
    /// Internet service provider.
    pub isp: String,
    /// Organization.
    pub org: String,
    /// Autonomous system.
    #[serde(rename = "as")]
    pub autonomous_system: String,
    /// The queried address (mirrors `ip`).
    pub query: String,
    /// Name of the provider that answered.
    pub service: String,
}

/// Player counts inside a [`ServerStatus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Players {
    /// Players currently connected.
    #[serde(default)]
    pub online: u32,
    /// Server capacity.
    #[serde(default)]
    pub max: u32,
}

/// Normalized Minecraft server status.
///
/// Invariant: when `online` is false the player counts are zero regardless of
/// what any provider reported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerStatus {
    /// Whether the game server is reachable.
    pub online: bool,
    /// Player counts (zeroed when offline).
    pub players: Players,
    /// Server version string.
    pub version: String,
    /// Message of the day.
    pub motd: String,
    /// Base64 favicon, when the provider supplies one.
    pub icon: Option<String>,
    /// Hostname the status applies to.
    pub hostname: String,
    /// Game port.
    pub port: u16,
    /// Server software name.
    pub software: String,
    /// Explanation attached to the degraded all-providers-failed status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// HTTP payload wrapping a [`ServerStatus`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct McStatusResponse {
    /// Always true for resolved-or-degraded results.
    pub success: bool,
    /// The server that was queried.
    pub server: String,
    /// The normalized status.
    pub status: ServerStatus,
    /// Which provider answered, or `"fallback"` when none did.
    pub service: String,
    /// RFC 3339 timestamp of this response.
    pub timestamp: String,
}
