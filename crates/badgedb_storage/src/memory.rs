//! In-memory storage backend for testing.

use crate::backend::StorageBackend;
use crate::error::{StorageError, StorageResult};
use parking_lot::RwLock;

#[derive(Debug)]
struct Inner {
    /// Working image, observed by reads.
    buffered: Vec<u8>,
    /// Image as of the last successful commit.
    durable: Vec<u8>,
    commits: u64,
}

/// An in-memory storage backend.
///
/// This backend keeps the region in memory and is suitable for:
/// - Unit tests
/// - Integration tests
/// - Ephemeral stores that don't need persistence
///
/// It tracks the buffered and durable images separately, so tests can
/// simulate power loss: [`durable_data`](Self::durable_data) returns only
/// what a committed region would contain, and a fresh backend built from
/// it via [`with_data`](Self::with_data) behaves like a reopen after a
/// crash.
///
/// # Thread Safety
///
/// This backend is thread-safe and can be shared across threads.
///
/// # Example
///
/// ```rust
/// use badgedb_storage::{StorageBackend, MemoryBackend};
///
/// let mut backend = MemoryBackend::new(16);
/// backend.write_byte(3, 0x42).unwrap();
/// assert_eq!(backend.read_byte(3).unwrap(), 0x42);
/// assert_eq!(backend.durable_data()[3], 0);
/// backend.commit().unwrap();
/// assert_eq!(backend.durable_data()[3], 0x42);
/// ```
#[derive(Debug)]
pub struct MemoryBackend {
    inner: RwLock<Inner>,
}

impl MemoryBackend {
    /// Creates a zero-filled in-memory backend of `size` bytes.
    #[must_use]
    pub fn new(size: u32) -> Self {
        Self::with_data(vec![0; size as usize])
    }

    /// Creates an in-memory backend with pre-existing (already durable)
    /// data.
    ///
    /// Useful for testing reopen and crash-recovery scenarios.
    #[must_use]
    pub fn with_data(data: Vec<u8>) -> Self {
        Self {
            inner: RwLock::new(Inner {
                buffered: data.clone(),
                durable: data,
                commits: 0,
            }),
        }
    }

    /// Returns a copy of the working image, including uncommitted writes.
    #[must_use]
    pub fn data(&self) -> Vec<u8> {
        self.inner.read().buffered.clone()
    }

    /// Returns a copy of the image as of the last successful commit.
    #[must_use]
    pub fn durable_data(&self) -> Vec<u8> {
        self.inner.read().durable.clone()
    }

    /// Returns how many commits have completed.
    #[must_use]
    pub fn commit_count(&self) -> u64 {
        self.inner.read().commits
    }
}

impl StorageBackend for MemoryBackend {
    fn read_byte(&self, addr: u32) -> StorageResult<u8> {
        let inner = self.inner.read();
        inner
            .buffered
            .get(addr as usize)
            .copied()
            .ok_or(StorageError::AddressOutOfRange {
                addr,
                size: inner.buffered.len() as u32,
            })
    }

    fn write_byte(&mut self, addr: u32, value: u8) -> StorageResult<()> {
        let mut inner = self.inner.write();
        let size = inner.buffered.len() as u32;
        match inner.buffered.get_mut(addr as usize) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(StorageError::AddressOutOfRange { addr, size }),
        }
    }

    fn commit(&mut self) -> StorageResult<()> {
        let mut inner = self.inner.write();
        let image = inner.buffered.clone();
        inner.durable = image;
        inner.commits += 1;
        Ok(())
    }

    fn size(&self) -> u32 {
        self.inner.read().buffered.len() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_new_is_zero_filled() {
        let backend = MemoryBackend::new(8);
        assert_eq!(backend.size(), 8);
        assert_eq!(backend.data(), vec![0; 8]);
    }

    #[test]
    fn memory_write_then_read() {
        let mut backend = MemoryBackend::new(8);
        backend.write_byte(0, 0xAA).unwrap();
        backend.write_byte(7, 0x55).unwrap();

        assert_eq!(backend.read_byte(0).unwrap(), 0xAA);
        assert_eq!(backend.read_byte(7).unwrap(), 0x55);
    }

    #[test]
    fn memory_read_out_of_range_fails() {
        let backend = MemoryBackend::new(8);
        let result = backend.read_byte(8);
        assert!(matches!(
            result,
            Err(StorageError::AddressOutOfRange { addr: 8, size: 8 })
        ));
    }

    #[test]
    fn memory_write_out_of_range_fails() {
        let mut backend = MemoryBackend::new(8);
        let result = backend.write_byte(100, 1);
        assert!(matches!(
            result,
            Err(StorageError::AddressOutOfRange { addr: 100, .. })
        ));
    }

    #[test]
    fn memory_uncommitted_writes_are_not_durable() {
        let mut backend = MemoryBackend::new(4);
        backend.write_byte(1, 0x42).unwrap();

        assert_eq!(backend.data()[1], 0x42);
        assert_eq!(backend.durable_data()[1], 0);

        backend.commit().unwrap();
        assert_eq!(backend.durable_data()[1], 0x42);
        assert_eq!(backend.commit_count(), 1);
    }

    #[test]
    fn memory_with_data_is_durable() {
        let backend = MemoryBackend::with_data(vec![0xAA, 2, 9, 9]);
        assert_eq!(backend.size(), 4);
        assert_eq!(backend.durable_data(), vec![0xAA, 2, 9, 9]);
    }

    #[test]
    fn memory_read_into_and_write_all() {
        let mut backend = MemoryBackend::new(8);
        backend.write_all(2, &[1, 2, 3, 4]).unwrap();

        let mut buf = [0u8; 4];
        backend.read_into(2, &mut buf).unwrap();
        assert_eq!(buf, [1, 2, 3, 4]);
    }

    #[test]
    fn memory_write_all_partially_out_of_range_fails() {
        let mut backend = MemoryBackend::new(4);
        let result = backend.write_all(2, &[1, 2, 3]);
        assert!(result.is_err());
    }

    #[test]
    fn memory_reopen_from_durable_drops_uncommitted() {
        let mut backend = MemoryBackend::new(4);
        backend.write_byte(0, 0xAA).unwrap();
        backend.commit().unwrap();
        backend.write_byte(1, 0x07).unwrap(); // never committed

        // Simulated power loss: rebuild from the durable image only.
        let reopened = MemoryBackend::with_data(backend.durable_data());
        assert_eq!(reopened.read_byte(0).unwrap(), 0xAA);
        assert_eq!(reopened.read_byte(1).unwrap(), 0);
    }
}
