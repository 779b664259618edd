//! Error categorization.
//!
//! This module converts transport-layer errors into [`AdapterFailure`] values
//! so adapters never let a raw `reqwest::Error` escape their boundary.

use std::time::Duration;

use super::types::AdapterFailure;

/// Categorizes a `reqwest::Error` into an [`AdapterFailure`].
///
/// This is the single categorization point used by every provider adapter,
/// keeping the failure taxonomy consistent across the codebase.
///
/// # Arguments
///
/// * `error` - The `reqwest::Error` to categorize
/// * `timeout` - The per-call budget that was in force (reported on timeouts)
pub fn categorize_reqwest_error(error: &reqwest::Error, timeout: Duration) -> AdapterFailure {
    // Timeouts first: reqwest reports both connect and total-duration
    // timeouts through is_timeout().
    if error.is_timeout() {
        return AdapterFailure::Timeout(timeout);
    }

    // Non-2xx statuses surfaced via error_for_status().
    if let Some(status) = error.status() {
        return AdapterFailure::Network(format!("HTTP {status}"));
    }

    if error.is_connect() {
        return AdapterFailure::Network(format!("connect error: {error}"));
    }

    // Body-decode failures mean the provider answered with something that is
    // not the JSON we expect.
    if error.is_decode() {
        return AdapterFailure::Malformed(error.to_string());
    }

    AdapterFailure::Network(error.to_string())
}
