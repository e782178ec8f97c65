//! Error types for BadgeDB core.

use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in BadgeDB core operations.
///
/// Expected outcomes of normal operation (duplicate insert, store full,
/// removing an absent UID) are **not** errors; they are
/// [`InsertOutcome`](crate::InsertOutcome) and
/// [`RemoveOutcome`](crate::RemoveOutcome) values. Errors here are true
/// failures: backend faults and caller mistakes.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Storage backend error.
    #[error("storage error: {0}")]
    Storage(#[from] badgedb_storage::StorageError),

    /// A UID of the wrong width was passed.
    #[error("UID width mismatch: expected {expected} bytes, got {actual}")]
    UidWidth {
        /// The configured UID width.
        expected: usize,
        /// The width of the UID passed in.
        actual: usize,
    },

    /// The store configuration is invalid.
    #[error("invalid store config: {message}")]
    InvalidConfig {
        /// Description of the problem.
        message: String,
    },

    /// The backend region is smaller than the configured layout requires.
    #[error("region too small: layout needs {required} bytes, backend has {actual}")]
    RegionTooSmall {
        /// Bytes required by the layout.
        required: u32,
        /// Bytes the backend provides.
        actual: u32,
    },
}

impl CoreError {
    /// Creates an invalid config error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}
