//! Store error types for tempo-store.

use thiserror::Error;

/// Errors from registry and persistence operations.
///
/// Nothing here is fatal: every operation reports failure as a value and
/// the process-terminating decision stays with the CLI layer.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A record, index, or key could not be resolved.
    #[error("not found: {0}")]
    NotFound(String),

    /// Caller input failed validation; nothing was changed.
    #[error("validation error: {0}")]
    Validation(String),

    /// Soft delete requested for a record that is already deleted.
    #[error("record is already deleted")]
    AlreadyDeleted,

    /// Restore requested for a record that is not deleted.
    #[error("record is not deleted, nothing to restore")]
    NotDeleted,

    /// Tag removal requested for a tag the record does not carry.
    #[error("tag not present: {0}")]
    TagMissing(String),

    /// Filesystem failure. After a failed save the in-memory mutation is
    /// retained; only the disk write was lost.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV parse failure.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Invalid stamp, duration, or status from tempo-core.
    #[error(transparent)]
    Core(#[from] tempo_core::errors::CoreError),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
