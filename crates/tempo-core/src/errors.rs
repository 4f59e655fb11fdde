//! Cross-cutting error types for tempo.
//!
//! This module defines errors that can originate from any crate in the
//! system. Layer-specific errors (e.g., `StoreError`, `ConfigError`) are
//! defined in their respective crates.

use thiserror::Error;

/// Errors raised by the core parsing and validation helpers.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A timestamp string matched neither accepted format.
    #[error("invalid timestamp '{input}' (expected YYYY-MM-DD or YYYY-MM-DD HH:MM)")]
    InvalidStamp { input: String },

    /// A duration string could not be understood or was not positive.
    #[error("invalid duration '{input}' (expected e.g. '1.5 hours', '30 minutes')")]
    InvalidDuration { input: String },

    /// A status string is not one of the known schedule statuses.
    #[error("invalid status '{input}' (valid: completed, in_progress, not_started, shelved, postponed)")]
    InvalidStatus { input: String },

    /// Data failed validation (format, constraints).
    #[error("validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
