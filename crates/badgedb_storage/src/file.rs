//! File-based storage backend for persistent storage.

use crate::backend::StorageBackend;
use crate::error::{StorageError, StorageResult};
use fs2::FileExt;
use parking_lot::RwLock;
use std::fs::OpenOptions;
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

#[derive(Debug)]
struct Inner {
    file: std::fs::File,
    /// RAM shadow of the whole region; reads are served from here.
    shadow: Vec<u8>,
    dirty: bool,
}

/// A file-based storage backend.
///
/// The backing file is exactly `size` bytes, zero-filled on first
/// creation. The whole region is loaded into a RAM shadow at open;
/// writes mutate the shadow and `commit` rewrites the file and syncs it
/// to disk. This mirrors how small non-volatile memories (EEPROM and
/// friends) are driven: cheap buffered writes, one explicit durable
/// commit.
///
/// # Single Owner
///
/// An exclusive advisory lock (via `fs2`) is taken on the backing file
/// at open. A second process opening the same file gets
/// [`StorageError::Locked`].
///
/// # Durability
///
/// `commit()` writes the shadow, flushes, and calls `File::sync_all()`.
///
/// # Example
///
/// ```no_run
/// use badgedb_storage::{StorageBackend, FileBackend};
/// use std::path::Path;
///
/// let mut backend = FileBackend::open(Path::new("region.bin"), 1024).unwrap();
/// backend.write_byte(0, 0xAA).unwrap();
/// backend.commit().unwrap();
/// ```
#[derive(Debug)]
pub struct FileBackend {
    path: PathBuf,
    size: u32,
    inner: RwLock<Inner>,
}

impl FileBackend {
    /// Opens or creates a file backend at the given path with a region of
    /// `size` bytes.
    ///
    /// A missing file is created and zero-filled. An existing file must
    /// be exactly `size` bytes; the region never resizes.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be opened or created
    /// - Another process holds the lock (`Locked`)
    /// - An existing file has a different size (`RegionMismatch`)
    pub fn open(path: &Path, size: u32) -> StorageResult<Self> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)?;

        if file.try_lock_exclusive().is_err() {
            return Err(StorageError::Locked);
        }

        let len = file.metadata()?.len();
        let shadow = if len == 0 {
            // Fresh region: zero-fill to the full size up front.
            let zeros = vec![0u8; size as usize];
            let mut file = &file;
            file.write_all(&zeros)?;
            file.sync_all()?;
            zeros
        } else if len == u64::from(size) {
            let mut buf = vec![0u8; size as usize];
            let mut file = &file;
            file.seek(SeekFrom::Start(0))?;
            file.read_exact(&mut buf)?;
            buf
        } else {
            return Err(StorageError::RegionMismatch {
                expected: size,
                actual: len,
            });
        };

        Ok(Self {
            path: path.to_path_buf(),
            size,
            inner: RwLock::new(Inner {
                file,
                shadow,
                dirty: false,
            }),
        })
    }

    /// Opens or creates a file backend, creating parent directories if
    /// needed.
    ///
    /// # Errors
    ///
    /// Returns an error if directories cannot be created or the file
    /// cannot be opened.
    pub fn open_with_create_dirs(path: &Path, size: u32) -> StorageResult<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Self::open(path, size)
    }

    /// Returns the path to the underlying file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageBackend for FileBackend {
    fn read_byte(&self, addr: u32) -> StorageResult<u8> {
        if addr >= self.size {
            return Err(StorageError::AddressOutOfRange {
                addr,
                size: self.size,
            });
        }
        Ok(self.inner.read().shadow[addr as usize])
    }

    fn write_byte(&mut self, addr: u32, value: u8) -> StorageResult<()> {
        if addr >= self.size {
            return Err(StorageError::AddressOutOfRange {
                addr,
                size: self.size,
            });
        }
        let mut inner = self.inner.write();
        inner.shadow[addr as usize] = value;
        inner.dirty = true;
        Ok(())
    }

    fn commit(&mut self) -> StorageResult<()> {
        let mut guard = self.inner.write();
        let inner = &mut *guard;
        if !inner.dirty {
            return Ok(());
        }
        inner.file.seek(SeekFrom::Start(0))?;
        inner.file.write_all(&inner.shadow)?;
        inner.file.flush()?;
        inner.file.sync_all()?;
        inner.dirty = false;
        Ok(())
    }

    fn size(&self) -> u32 {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn file_create_zero_filled() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("region.bin");

        let backend = FileBackend::open(&path, 64).unwrap();
        assert_eq!(backend.size(), 64);
        assert!(path.exists());
        assert_eq!(std::fs::metadata(&path).unwrap().len(), 64);
        assert_eq!(backend.read_byte(63).unwrap(), 0);
    }

    #[test]
    fn file_write_commit_read() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("region.bin");

        let mut backend = FileBackend::open(&path, 16).unwrap();
        backend.write_byte(0, 0xAA).unwrap();
        backend.write_byte(15, 0x55).unwrap();
        backend.commit().unwrap();

        assert_eq!(backend.read_byte(0).unwrap(), 0xAA);
        assert_eq!(backend.read_byte(15).unwrap(), 0x55);
    }

    #[test]
    fn file_persistence_across_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("region.bin");

        {
            let mut backend = FileBackend::open(&path, 16).unwrap();
            backend.write_byte(3, 0x42).unwrap();
            backend.commit().unwrap();
        }

        {
            let backend = FileBackend::open(&path, 16).unwrap();
            assert_eq!(backend.read_byte(3).unwrap(), 0x42);
        }
    }

    #[test]
    fn file_uncommitted_writes_lost_on_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("region.bin");

        {
            let mut backend = FileBackend::open(&path, 16).unwrap();
            backend.write_byte(3, 0x42).unwrap();
            // dropped without commit
        }

        {
            let backend = FileBackend::open(&path, 16).unwrap();
            assert_eq!(backend.read_byte(3).unwrap(), 0);
        }
    }

    #[test]
    fn file_region_mismatch_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("region.bin");
        std::fs::write(&path, vec![0u8; 10]).unwrap();

        let result = FileBackend::open(&path, 16);
        assert!(matches!(
            result,
            Err(StorageError::RegionMismatch {
                expected: 16,
                actual: 10
            })
        ));
    }

    #[test]
    fn file_second_open_is_locked() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("region.bin");

        let _first = FileBackend::open(&path, 16).unwrap();
        let second = FileBackend::open(&path, 16);
        assert!(matches!(second, Err(StorageError::Locked)));
    }

    #[test]
    fn file_read_out_of_range_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("region.bin");

        let backend = FileBackend::open(&path, 16).unwrap();
        assert!(matches!(
            backend.read_byte(16),
            Err(StorageError::AddressOutOfRange { addr: 16, size: 16 })
        ));
    }

    #[test]
    fn file_commit_without_writes_is_noop() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("region.bin");

        let mut backend = FileBackend::open(&path, 16).unwrap();
        backend.commit().unwrap();
        assert_eq!(backend.size(), 16);
    }

    #[test]
    fn file_create_with_dirs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("path").join("region.bin");

        let backend = FileBackend::open_with_create_dirs(&path, 8).unwrap();
        assert_eq!(backend.size(), 8);
        assert!(path.exists());
    }

    #[test]
    fn file_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("region.bin");

        let backend = FileBackend::open(&path, 8).unwrap();
        assert_eq!(backend.path(), path);
    }
}
