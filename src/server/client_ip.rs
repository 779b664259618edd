//! Client IP extraction.

use std::net::SocketAddr;

use axum::http::HeaderMap;

/// Determines the caller's network-visible address.
///
/// Standard forwarded-header inspection, in priority order:
/// `X-Forwarded-For` (first hop of the chain), then `X-Real-IP`, then the
/// socket's remote address. The result is a raw string; deciding whether it
/// is geolocatable is the validator's job.
pub fn client_ip(headers: &HeaderMap, remote: SocketAddr) -> String {
    for name in ["x-forwarded-for", "x-real-ip"] {
        if let Some(value) = headers.get(name).and_then(|v| v.to_str().ok()) {
            // the first entry in a comma-separated chain is the original client
            if let Some(first) = value.split(',').next() {
                let first = first.trim();
                if !first.is_empty() {
                    return first.to_string();
                }
            }
        }
    }
    remote.ip().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn remote() -> SocketAddr {
        "198.51.100.4:55555".parse().expect("valid socket address")
    }

    #[test]
    fn test_forwarded_for_takes_priority() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-forwarded-for",
            HeaderValue::from_static("203.0.113.9, 10.0.0.1"),
        );
        headers.insert("x-real-ip", HeaderValue::from_static("192.0.2.1"));
        assert_eq!(client_ip(&headers, remote()), "203.0.113.9");
    }

    #[test]
    fn test_real_ip_is_second_choice() {
        let mut headers = HeaderMap::new();
        headers.insert("x-real-ip", HeaderValue::from_static("192.0.2.1"));
        assert_eq!(client_ip(&headers, remote()), "192.0.2.1");
    }

    #[test]
    fn test_socket_address_is_the_fallback() {
        let headers = HeaderMap::new();
        assert_eq!(client_ip(&headers, remote()), "198.51.100.4");
    }

    #[test]
    fn test_empty_header_values_are_skipped() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", HeaderValue::from_static(""));
        assert_eq!(client_ip(&headers, remote()), "198.51.100.4");
    }
}
