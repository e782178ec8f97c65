//! Storage backend trait definition.

use crate::error::StorageResult;

/// A byte-addressable storage backend for BadgeDB.
///
/// Backends model a fixed-size region of **non-volatile memory**. They
/// provide random-access byte reads, buffered byte writes, and an explicit
/// commit that makes buffered writes durable. BadgeDB owns all record
/// layout interpretation - backends do not understand sentinels, counts,
/// or card records.
///
/// # Invariants
///
/// - `size` is fixed for the lifetime of the backend
/// - `read_byte` observes writes that have not yet been committed
/// - After `commit` returns successfully, all prior writes survive
///   process termination
/// - Commit is all-or-nothing from the caller's perspective; backends do
///   not expose partial-commit states
/// - Backends must be `Send + Sync`
///
/// # Implementors
///
/// - [`super::MemoryBackend`] - For testing
/// - [`super::FileBackend`] - For persistent storage
pub trait StorageBackend: Send + Sync {
    /// Reads the byte at `addr`.
    ///
    /// # Errors
    ///
    /// Returns an error if `addr` is outside the region or an I/O error
    /// occurs.
    fn read_byte(&self, addr: u32) -> StorageResult<u8>;

    /// Writes `value` at `addr`.
    ///
    /// The write is buffered: it is visible to subsequent reads but not
    /// durable until [`commit`](Self::commit) succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if `addr` is outside the region or an I/O error
    /// occurs.
    fn write_byte(&mut self, addr: u32, value: u8) -> StorageResult<()>;

    /// Flushes all buffered writes to durable media.
    ///
    /// Blocks until the writes are durable or the medium reports an
    /// unrecoverable fault.
    ///
    /// # Errors
    ///
    /// Returns an error if the commit fails.
    fn commit(&mut self) -> StorageResult<()>;

    /// Returns the size of the reserved region in bytes.
    fn size(&self) -> u32;

    /// Reads `buf.len()` bytes starting at `addr` into `buf`.
    ///
    /// # Errors
    ///
    /// Returns an error if any byte of the range is outside the region.
    fn read_into(&self, addr: u32, buf: &mut [u8]) -> StorageResult<()> {
        for (i, slot) in buf.iter_mut().enumerate() {
            *slot = self.read_byte(addr + i as u32)?;
        }
        Ok(())
    }

    /// Writes all of `data` starting at `addr`.
    ///
    /// # Errors
    ///
    /// Returns an error if any byte of the range is outside the region.
    fn write_all(&mut self, addr: u32, data: &[u8]) -> StorageResult<()> {
        for (i, &value) in data.iter().enumerate() {
            self.write_byte(addr + i as u32, value)?;
        }
        Ok(())
    }
}
