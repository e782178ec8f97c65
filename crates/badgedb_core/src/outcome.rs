//! Operation outcome enums.
//!
//! Insert and remove have disjoint sets of expected outcomes, so each
//! family gets its own enum rather than a shared flat code space. These
//! are normal results callers branch on, not failures.

use std::fmt;

/// Outcome of an insert operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The UID was appended and committed.
    Added,
    /// The UID is already present; nothing was written.
    AlreadyExists,
    /// The store is at capacity; nothing was written.
    Full,
}

impl fmt::Display for InsertOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Added => write!(f, "added"),
            Self::AlreadyExists => write!(f, "already exists"),
            Self::Full => write!(f, "store full"),
        }
    }
}

/// Outcome of a remove operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// The UID was removed and the survivors compacted.
    Removed,
    /// The UID was not present; nothing was written.
    NotFound,
}

impl fmt::Display for RemoveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Removed => write!(f, "removed"),
            Self::NotFound => write!(f, "not found"),
        }
    }
}
