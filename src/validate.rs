//! Target validation.
//!
//! Pure functions that check a caller-supplied identifier before any network
//! call is made. IP targets are held to a strict dotted-quad grammar; server
//! targets are accepted as opaque `host` / `host:port` strings, with a
//! configured default substituted when the caller names none.

use std::net::IpAddr;
use std::sync::LazyLock;

use regex::Regex;

use crate::error_handling::ValidationError;

/// Strict IPv4 dotted-quad grammar: exactly four octets, each 0-255, nothing
/// before or after. This is the same pattern the public endpoints have always
/// enforced, so leading zeros within an octet remain accepted.
static IPV4_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)$")
        .expect("hard-coded IPv4 pattern compiles")
});

/// Validates an IP lookup target.
///
/// Returns the input unchanged on success. Anything that deviates from the
/// dotted-quad grammar - malformed octets, extra characters, IPv6 literals,
/// hostnames - fails with [`ValidationError::InvalidFormat`].
pub fn validate_ip(raw: &str) -> Result<&str, ValidationError> {
    if IPV4_PATTERN.is_match(raw) {
        Ok(raw)
    } else {
        Err(ValidationError::InvalidFormat)
    }
}

/// Resolves the server-status target.
///
/// The one permissive branch in an otherwise strict validator: a missing or
/// blank target falls back to the configured default server rather than
/// failing. Anything non-empty is accepted as an opaque `host` or
/// `host:port` string for the status providers to interpret.
pub fn validate_server_target(raw: Option<&str>, default_server: &str) -> String {
    match raw.map(str::trim) {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => default_server.to_string(),
    }
}

/// Returns true when the observed caller address cannot be geolocated:
/// loopback, RFC 1918 private, link-local, or unspecified addresses, in
/// either plain or IPv4-mapped (`::ffff:127.0.0.1`) form. Such callers
/// trigger the one-shot public-IP discovery instead.
pub fn is_local_address(raw: &str) -> bool {
    let candidate = raw.strip_prefix("::ffff:").unwrap_or(raw);
    match candidate.parse::<IpAddr>() {
        Ok(IpAddr::V4(v4)) => {
            v4.is_loopback() || v4.is_private() || v4.is_link_local() || v4.is_unspecified()
        }
        Ok(IpAddr::V6(v6)) => v6.is_loopback() || v6.is_unspecified(),
        // An unparseable remote address is treated as unknown-local so the
        // discovery path still produces something resolvable.
        Err(_) => true,
    }
}
