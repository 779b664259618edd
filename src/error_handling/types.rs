//! Error type definitions.
//!
//! This module defines all error types used throughout the application:
//! validation failures, per-provider adapter failures, and the terminal
//! outcome of an exhausted fallback chain.

use std::time::Duration;

use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(String),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] reqwest::Error),
}

/// Caller-supplied target failed validation (400-class).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The target does not match the strict IPv4 dotted-quad grammar.
    #[error("Invalid IP address format")]
    InvalidFormat,

    /// The request named no target at all.
    #[error("IP parameter is required")]
    MissingTarget,
}

/// Why one provider adapter could not produce a usable result.
///
/// All four causes are equivalent for orchestration purposes (the chain moves
/// on to the next provider); the distinction exists for logging and counters.
#[derive(Error, Debug)]
pub enum AdapterFailure {
    /// The outbound call failed at the network or HTTP layer.
    #[error("network error: {0}")]
    Network(String),

    /// The provider did not answer within the per-call budget.
    #[error("no response within {0:?}")]
    Timeout(Duration),

    /// The provider answered, but its payload carried a failure signal
    /// (a status flag other than the success sentinel, or an error field).
    #[error("provider reported failure: {0}")]
    Provider(String),

    /// The response body did not match the shape this adapter expects.
    #[error("unexpected response shape: {0}")]
    Malformed(String),
}

/// Coarse classification of an [`AdapterFailure`], used for counters and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum FailureClass {
    /// Network or HTTP transport failure.
    Network,
    /// Per-call timeout elapsed.
    Timeout,
    /// Provider-reported (semantic) failure.
    Semantic,
    /// Response parsed but did not match the expected shape.
    Malformed,
}

impl AdapterFailure {
    /// Returns the coarse class of this failure.
    pub fn class(&self) -> FailureClass {
        match self {
            AdapterFailure::Network(_) => FailureClass::Network,
            AdapterFailure::Timeout(_) => FailureClass::Timeout,
            AdapterFailure::Provider(_) => FailureClass::Semantic,
            AdapterFailure::Malformed(_) => FailureClass::Malformed,
        }
    }
}

impl FailureClass {
    /// Returns a human-readable string representation of the failure class.
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureClass::Network => "network error",
            FailureClass::Timeout => "timeout",
            FailureClass::Semantic => "provider-reported failure",
            FailureClass::Malformed => "malformed response",
        }
    }
}

impl std::fmt::Display for FailureClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Terminal outcome of a fallback chain that produced no result.
#[derive(Error, Debug)]
pub enum ChainError {
    /// Single-provider configuration: the lone provider's failure surfaces
    /// directly instead of being folded into a chain-exhaustion report.
    #[error("{service}: {failure}")]
    Provider {
        /// Name of the provider that failed.
        service: &'static str,
        /// The failure it reported.
        failure: AdapterFailure,
    },

    /// Multi-provider configuration: every adapter in the chain failed.
    #[error("all {attempted} providers failed for {target}")]
    AllProvidersFailed {
        /// The target that could not be resolved.
        target: String,
        /// How many providers were tried.
        attempted: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_failure_class_mapping() {
        assert_eq!(
            AdapterFailure::Network("connection refused".into()).class(),
            FailureClass::Network
        );
        assert_eq!(
            AdapterFailure::Timeout(Duration::from_secs(5)).class(),
            FailureClass::Timeout
        );
        assert_eq!(
            AdapterFailure::Provider("status was fail".into()).class(),
            FailureClass::Semantic
        );
        assert_eq!(
            AdapterFailure::Malformed("missing field".into()).class(),
            FailureClass::Malformed
        );
    }

    #[test]
    fn test_all_failure_classes_have_string_representation() {
        for class in FailureClass::iter() {
            assert!(
                !class.as_str().is_empty(),
                "{:?} should have non-empty string",
                class
            );
        }
    }

    #[test]
    fn test_validation_error_messages() {
        // These strings are part of the public API contract (400 bodies).
        assert_eq!(
            ValidationError::InvalidFormat.to_string(),
            "Invalid IP address format"
        );
        assert_eq!(
            ValidationError::MissingTarget.to_string(),
            "IP parameter is required"
        );
    }

    #[test]
    fn test_chain_error_display() {
        let single = ChainError::Provider {
            service: "ip-api.com",
            failure: AdapterFailure::Provider("invalid query".into()),
        };
        assert_eq!(
            single.to_string(),
            "ip-api.com: provider reported failure: invalid query"
        );

        let exhausted = ChainError::AllProvidersFailed {
            target: "8.8.8.8".into(),
            attempted: 4,
        };
        assert_eq!(exhausted.to_string(), "all 4 providers failed for 8.8.8.8");
    }
}
