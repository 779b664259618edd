//! Response normalization.
//!
//! The single default-fill policy shared by every provider adapter and by the
//! orchestrator's degraded-path constructors: unset string fields become
//! [`UNKNOWN`], numeric fields stay absent rather than zero-filled (the one
//! exception being the documented `"0,0"` coordinate-pair fallback), and
//! coordinates are only ever jointly present.

use crate::config::{DEFAULT_MC_PORT, DEFAULT_MOTD};
use crate::models::{Players, ServerStatus};

/// Placeholder substituted for every string field a provider left unset.
pub const UNKNOWN: &str = "Unknown";

/// Default coordinate pair used by the one provider whose combined
/// `"lat,lon"` field is replaced with `"0,0"` when missing or empty,
/// before splitting.
pub const DEFAULT_COORD_PAIR: &str = "0,0";

/// Returns the value, or [`UNKNOWN`] when it is absent or empty.
pub fn or_unknown(value: Option<String>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => UNKNOWN.to_string(),
    }
}

/// Enforces joint presence of coordinates: a half-missing pair collapses to
/// wholly absent, never to a zero-filled half.
pub fn paired_coords(lat: Option<f64>, lon: Option<f64>) -> (Option<f64>, Option<f64>) {
    match (lat, lon) {
        (Some(lat), Some(lon)) => (Some(lat), Some(lon)),
        _ => (None, None),
    }
}

/// Splits a combined `"lat,lon"` string into numeric coordinates.
///
/// Each half is parsed independently; an unparseable half resolves to absent
/// (not zero), and [`paired_coords`] then collapses any half-parsed pair.
pub fn split_coord_pair(loc: &str) -> (Option<f64>, Option<f64>) {
    let mut halves = loc.splitn(2, ',');
    let lat = halves.next().and_then(|s| s.trim().parse::<f64>().ok());
    let lon = halves.next().and_then(|s| s.trim().parse::<f64>().ok());
    paired_coords(lat, lon)
}

/// Applies the canonical-status invariant: an offline server reports zero
/// players regardless of provider data.
pub fn finalize_status(mut status: ServerStatus) -> ServerStatus {
    if !status.online {
        status.players = Players::default();
    }
    status
}

/// Builds the degraded status returned when every provider failed: offline,
/// zero players, placeholder message of the day, and an explanatory error
/// nested inside the payload.
pub fn offline_status(hostname: &str, error: impl Into<String>) -> ServerStatus {
    ServerStatus {
        online: false,
        players: Players::default(),
        version: UNKNOWN.to_string(),
        motd: DEFAULT_MOTD.to_string(),
        icon: None,
        hostname: hostname.to_string(),
        port: DEFAULT_MC_PORT,
        software: "Minecraft".to_string(),
        error: Some(error.into()),
    }
}
