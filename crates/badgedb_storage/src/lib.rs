//! # BadgeDB Storage
//!
//! Byte-addressable storage backend trait and implementations for BadgeDB.
//!
//! This crate provides the lowest-level storage abstraction for BadgeDB.
//! Backends model a fixed-size region of non-volatile memory: random-access
//! byte reads, buffered byte writes, and an explicit `commit` that makes
//! buffered writes durable. Backends do not interpret the region - BadgeDB
//! owns the record layout.
//!
//! ## Design Principles
//!
//! - Backends are dumb byte regions (read byte, write byte, commit)
//! - The region size is fixed at construction; no growth or truncation
//! - Reads observe buffered writes; durability happens at `commit`
//! - Must be `Send + Sync` so a store can move across threads
//!
//! ## Available Backends
//!
//! - [`MemoryBackend`] - For testing and ephemeral storage
//! - [`FileBackend`] - For persistent storage using OS file APIs
//!
//! ## Example
//!
//! ```rust
//! use badgedb_storage::{StorageBackend, MemoryBackend};
//!
//! let mut backend = MemoryBackend::new(64);
//! backend.write_byte(0, 0xAA).unwrap();
//! backend.commit().unwrap();
//! assert_eq!(backend.read_byte(0).unwrap(), 0xAA);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod backend;
mod error;
mod file;
mod memory;

pub use backend::StorageBackend;
pub use error::{StorageError, StorageResult};
pub use file::FileBackend;
pub use memory::MemoryBackend;
