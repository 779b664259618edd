//! Fallback orchestration.
//!
//! A [`FallbackChain`] holds an ordered list of provider adapters for one
//! resolution kind and tries them in sequence with a per-call timeout,
//! stopping at the first success. The order is fixed configuration - no
//! randomization, no load-based reordering - so the most reliable provider
//! is always the default and behavior stays predictable.
//!
//! Providers are invoked sequentially, not in parallel: once one succeeds the
//! rest are never called, at the cost of worst-case latency being the sum of
//! the failed providers' timeouts.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use log::{debug, warn};

use crate::error_handling::{AdapterFailure, ChainError};
use crate::providers::Provider;

/// A successful chain resolution: the canonical value plus the name of the
/// provider that produced it.
#[derive(Debug)]
pub struct Resolved<T> {
    /// The canonical result.
    pub value: T,
    /// The provider that answered.
    pub service: &'static str,
}

/// Counters for one resolution chain, read by the `/status` endpoint.
#[derive(Debug, Default)]
pub struct ChainStats {
    /// Resolutions attempted.
    pub requests: AtomicUsize,
    /// Individual provider failures (several may occur per request).
    pub provider_failures: AtomicUsize,
    /// Requests for which every provider failed.
    pub exhausted: AtomicUsize,
}

impl ChainStats {
    /// Snapshot of the counters as plain integers.
    pub fn snapshot(&self) -> (usize, usize, usize) {
        (
            self.requests.load(Ordering::Relaxed),
            self.provider_failures.load(Ordering::Relaxed),
            self.exhausted.load(Ordering::Relaxed),
        )
    }
}

/// Ordered fallback chain over providers of one resolution kind.
///
/// The legacy single-provider behavior and the full multi-provider behavior
/// are the same component configured with a list of one versus a list of
/// several: a chain of one propagates its lone provider's failure directly,
/// a longer chain reports exhaustion.
pub struct FallbackChain<T> {
    kind: &'static str,
    providers: Vec<Box<dyn Provider<Output = T>>>,
    per_call_timeout: Duration,
    stats: ChainStats,
}

impl<T: Send> FallbackChain<T> {
    /// Builds a chain over `providers`, tried in the given order, each call
    /// bounded by `per_call_timeout`.
    pub fn new(
        kind: &'static str,
        providers: Vec<Box<dyn Provider<Output = T>>>,
        per_call_timeout: Duration,
    ) -> Self {
        Self {
            kind,
            providers,
            per_call_timeout,
            stats: ChainStats::default(),
        }
    }

    /// Counters for this chain.
    pub fn stats(&self) -> &ChainStats {
        &self.stats
    }

    /// Resolves `target` with the chain's configured per-call timeout.
    pub async fn resolve(
        &self,
        client: &reqwest::Client,
        target: &str,
    ) -> Result<Resolved<T>, ChainError> {
        self.resolve_with_timeout(client, target, self.per_call_timeout)
            .await
    }

    /// Resolves `target` with an explicit per-call timeout.
    ///
    /// Each provider gets at most `timeout`; a call still in flight when it
    /// elapses is abandoned and counts as that provider's failure. There is
    /// no request-level deadline beyond the sum of the per-call budgets.
    pub async fn resolve_with_timeout(
        &self,
        client: &reqwest::Client,
        target: &str,
        timeout: Duration,
    ) -> Result<Resolved<T>, ChainError> {
        self.stats.requests.fetch_add(1, Ordering::Relaxed);

        let mut last_failure: Option<(&'static str, AdapterFailure)> = None;
        for provider in &self.providers {
            let outcome =
                match tokio::time::timeout(timeout, provider.fetch(client, target, timeout)).await
                {
                    Ok(result) => result,
                    Err(_) => Err(AdapterFailure::Timeout(timeout)),
                };

            match outcome {
                Ok(value) => {
                    debug!(
                        "{} resolution for {} answered by {}",
                        self.kind,
                        target,
                        provider.name()
                    );
                    return Ok(Resolved {
                        value,
                        service: provider.name(),
                    });
                }
                Err(failure) => {
                    self.stats.provider_failures.fetch_add(1, Ordering::Relaxed);
                    warn!(
                        "{} provider {} failed for {}: {}",
                        self.kind,
                        provider.name(),
                        target,
                        failure
                    );
                    last_failure = Some((provider.name(), failure));
                }
            }
        }

        self.stats.exhausted.fetch_add(1, Ordering::Relaxed);
        match last_failure {
            // Single-provider configuration: surface that provider's failure.
            Some((service, failure)) if self.providers.len() == 1 => {
                Err(ChainError::Provider { service, failure })
            }
            _ => Err(ChainError::AllProvidersFailed {
                target: target.to_string(),
                attempted: self.providers.len(),
            }),
        }
    }
}
