//! # BadgeDB Core
//!
//! Persistent allow-list record store for BadgeDB.
//!
//! This crate provides:
//! - [`CardStore`] - a bounded set of fixed-width card UIDs kept in a
//!   byte-addressable non-volatile region, surviving power loss
//! - Idempotent initialization-on-first-use
//! - Duplicate detection and capacity enforcement on insert
//! - Order-preserving removal via left-shift compaction
//!
//! ## Persisted layout
//!
//! ```text
//! ┌────────┬────────┬────────────────────────────────┐
//! │ offset │ width  │ field                          │
//! ├────────┼────────┼────────────────────────────────┤
//! │ 0      │ 1      │ init sentinel (0xAA when set)  │
//! │ 1      │ 1      │ record count                   │
//! │ 2      │ w × n  │ packed UID array, no padding   │
//! └────────┴────────┴────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use badgedb_core::{CardStore, InsertOutcome, StoreConfig};
//!
//! let mut store = CardStore::open_in_memory(StoreConfig::default()).unwrap();
//! assert_eq!(store.insert(&[1, 2, 3, 4]).unwrap(), InsertOutcome::Added);
//! assert!(store.contains(&[1, 2, 3, 4]).unwrap());
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod outcome;
mod store;
mod types;

pub use config::StoreConfig;
pub use error::{CoreError, CoreResult};
pub use outcome::{InsertOutcome, RemoveOutcome};
pub use store::CardStore;
pub use types::{CardUid, ParseUidError};

/// Current version of BadgeDB core.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
