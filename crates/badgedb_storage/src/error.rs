//! Error types for storage operations.

use std::io;
use thiserror::Error;

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Attempted to access an address outside the reserved region.
    #[error("address out of range: addr {addr}, region size {size}")]
    AddressOutOfRange {
        /// The requested address.
        addr: u32,
        /// The reserved region size in bytes.
        size: u32,
    },

    /// An existing backing file does not match the requested region size.
    #[error("region size mismatch: expected {expected} bytes, file has {actual}")]
    RegionMismatch {
        /// The requested region size.
        expected: u32,
        /// The actual file size.
        actual: u64,
    },

    /// Another process holds the backing file.
    #[error("backing file locked: another process has exclusive access")]
    Locked,
}
