//! Error handling.
//!
//! This module provides:
//! - Error type definitions for validation, adapter, and chain failures
//! - Categorization of transport errors into adapter failures
//!
//! The taxonomy mirrors the resolution pipeline: a [`ValidationError`] never
//! reaches a provider, an [`AdapterFailure`] never reaches the caller (it
//! triggers fallback to the next provider), and a [`ChainError`] is what the
//! orchestrator reports when no provider produced a result.

mod categorization;
mod types;

// Re-export public API
pub use categorization::categorize_reqwest_error;
pub use types::{
    AdapterFailure, ChainError, FailureClass, InitializationError, ValidationError,
};
