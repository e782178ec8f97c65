//! The card store: a persistent allow-list of fixed-width UIDs.

use crate::config::StoreConfig;
use crate::error::{CoreError, CoreResult};
use crate::outcome::{InsertOutcome, RemoveOutcome};
use crate::types::CardUid;
use badgedb_storage::StorageBackend;
use std::path::Path;
use tracing::{debug, warn};

/// Offset of the init sentinel byte.
const INIT_OFFSET: u32 = 0;
/// Offset of the record count byte.
const COUNT_OFFSET: u32 = 1;
/// Offset where the packed record array starts.
const RECORDS_OFFSET: u32 = 2;
/// Sentinel value marking an initialized region.
const INIT_MAGIC: u8 = 0xAA;

/// A bounded, persistent set of fixed-width card UIDs.
///
/// The store owns a byte-addressable [`StorageBackend`] region laid out
/// as a one-byte init sentinel, a one-byte record count, and a packed
/// array of `uid_size`-byte records. Insertion order is preserved and is
/// the enumeration order; removal compacts the survivors left by one
/// slot.
///
/// The region is initialized exactly once: the first operation (or
/// [`open`](Self::open) itself) that finds the sentinel missing writes
/// the sentinel and a zero count, then commits. The on-region sentinel
/// stays the source of truth for first-run; an in-memory flag only
/// caches "already checked this session".
///
/// # Crash windows
///
/// Mutations order their writes so a crash is benign where possible:
/// insert writes the record bytes before the count, so a crash in
/// between leaves an orphan beyond `count` that the next insert
/// overwrites. A crash during the removal shift loop can leave a
/// duplicated or stale record visible at the tail until the count is
/// decremented; this window is accepted, not journaled away.
///
/// # Example
///
/// ```rust
/// use badgedb_core::{CardStore, InsertOutcome, StoreConfig};
///
/// let mut store = CardStore::open_in_memory(StoreConfig::default()).unwrap();
/// store.insert(&[0xAA, 0xBB, 0xCC, 0xDD]).unwrap();
/// assert_eq!(store.count().unwrap(), 1);
/// ```
pub struct CardStore {
    config: StoreConfig,
    backend: Box<dyn StorageBackend>,
    /// Session cache for "already ran the init check".
    ensured: bool,
}

impl std::fmt::Debug for CardStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CardStore")
            .field("config", &self.config)
            .field("ensured", &self.ensured)
            .finish_non_exhaustive()
    }
}

impl CardStore {
    /// Opens a store over the given backend, initializing the region on
    /// first use.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, the backend
    /// region is smaller than the layout requires, or the backend faults.
    pub fn open(backend: Box<dyn StorageBackend>, config: StoreConfig) -> CoreResult<Self> {
        config.validate()?;
        if backend.size() < config.layout_size() {
            return Err(CoreError::RegionTooSmall {
                required: config.layout_size(),
                actual: backend.size(),
            });
        }

        let mut store = Self {
            config,
            backend,
            ensured: false,
        };
        store.ensure_init()?;
        Ok(store)
    }

    /// Opens a store over a fresh in-memory region.
    ///
    /// Non-persistent; data is lost when the store is dropped. Intended
    /// for tests.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn open_in_memory(config: StoreConfig) -> CoreResult<Self> {
        use badgedb_storage::MemoryBackend;
        Self::open(Box::new(MemoryBackend::new(config.region_size)), config)
    }

    /// Opens a store over a file-backed region, creating parent
    /// directories and the file as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened, is locked by
    /// another process, or has the wrong size.
    pub fn open_file(path: &Path, config: StoreConfig) -> CoreResult<Self> {
        use badgedb_storage::FileBackend;
        config.validate()?;
        let backend = FileBackend::open_with_create_dirs(path, config.region_size)?;
        Self::open(Box::new(backend), config)
    }

    /// Returns the persisted record count byte, unclamped.
    ///
    /// A well-formed store keeps this in `0..=capacity`. A corrupted
    /// medium can yield a larger value; it is returned as stored, and
    /// internal operations clamp it to `capacity` (see
    /// [`capacity`](Self::capacity)).
    ///
    /// # Errors
    ///
    /// Returns an error if the backend faults.
    pub fn count(&mut self) -> CoreResult<u8> {
        self.ensure_init()?;
        Ok(self.backend.read_byte(COUNT_OFFSET)?)
    }

    /// Returns true if `uid` is present.
    ///
    /// Ordered scan of the live records, comparing byte-for-byte with
    /// short-circuit on the first mismatching byte within a record.
    ///
    /// # Errors
    ///
    /// Returns an error if `uid` has the wrong width or the backend
    /// faults.
    pub fn contains(&mut self, uid: &[u8]) -> CoreResult<bool> {
        self.check_width(uid)?;
        self.ensure_init()?;
        Ok(self.find(uid)?.is_some())
    }

    /// Inserts `uid`, appending it after the existing records.
    ///
    /// Duplicate check precedes the capacity check; the record bytes are
    /// written before the count is bumped, and the commit comes last.
    ///
    /// # Errors
    ///
    /// Returns an error if `uid` has the wrong width or the backend
    /// faults.
    pub fn insert(&mut self, uid: &[u8]) -> CoreResult<InsertOutcome> {
        self.check_width(uid)?;
        self.ensure_init()?;

        if self.find(uid)?.is_some() {
            return Ok(InsertOutcome::AlreadyExists);
        }

        let count = self.live_count()?;
        if count >= self.config.capacity {
            return Ok(InsertOutcome::Full);
        }

        let slot = self.record_addr(count);
        self.backend.write_all(slot, uid)?;
        self.backend.write_byte(COUNT_OFFSET, (count + 1) as u8)?;
        self.backend.commit()?;

        Ok(InsertOutcome::Added)
    }

    /// Removes the first record equal to `uid`, shifting every later
    /// record left one slot so the survivors keep their relative order.
    ///
    /// # Errors
    ///
    /// Returns an error if `uid` has the wrong width or the backend
    /// faults.
    pub fn remove(&mut self, uid: &[u8]) -> CoreResult<RemoveOutcome> {
        self.check_width(uid)?;
        self.ensure_init()?;

        let Some(pos) = self.find(uid)? else {
            return Ok(RemoveOutcome::NotFound);
        };

        let count = self.live_count()?;
        let width = self.config.uid_size;
        for i in pos..count - 1 {
            let from = self.record_addr(i + 1);
            let to = self.record_addr(i);
            for j in 0..width as u32 {
                let value = self.backend.read_byte(from + j)?;
                self.backend.write_byte(to + j, value)?;
            }
        }

        self.backend.write_byte(COUNT_OFFSET, (count - 1) as u8)?;
        self.backend.commit()?;

        Ok(RemoveOutcome::Removed)
    }

    /// Returns the record at `index`, or `None` if `index` is beyond the
    /// live records.
    ///
    /// Callers enumerate by iterating `0..count` in order.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend faults.
    pub fn get(&mut self, index: usize) -> CoreResult<Option<CardUid>> {
        self.ensure_init()?;

        if index >= self.live_count()? {
            return Ok(None);
        }

        let slot = self.record_addr(index);
        let mut bytes = vec![0u8; self.config.uid_size];
        self.backend.read_into(slot, &mut bytes)?;
        Ok(Some(CardUid::new(bytes)))
    }

    /// Returns a snapshot of all records in stored order.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend faults.
    pub fn cards(&mut self) -> CoreResult<Vec<CardUid>> {
        self.ensure_init()?;

        let count = self.live_count()?;
        let mut cards = Vec::with_capacity(count);
        for index in 0..count {
            let slot = self.record_addr(index);
            let mut bytes = vec![0u8; self.config.uid_size];
            self.backend.read_into(slot, &mut bytes)?;
            cards.push(CardUid::new(bytes));
        }
        Ok(cards)
    }

    /// Removes all records by zeroing the count field.
    ///
    /// Record bytes are left in place; they are unreachable once the
    /// count is zero and get overwritten by subsequent inserts.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend faults.
    pub fn clear(&mut self) -> CoreResult<()> {
        self.ensure_init()?;

        self.backend.write_byte(COUNT_OFFSET, 0)?;
        self.backend.commit()?;
        Ok(())
    }

    /// Returns true if the region carries the init sentinel.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend faults.
    pub fn is_initialized(&self) -> CoreResult<bool> {
        Ok(self.backend.read_byte(INIT_OFFSET)? == INIT_MAGIC)
    }

    /// Returns the configured record capacity.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.config.capacity
    }

    /// Returns the configured UID width in bytes.
    #[must_use]
    pub fn uid_size(&self) -> usize {
        self.config.uid_size
    }

    /// Returns the store configuration.
    #[must_use]
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Check-and-initialize. Idempotent: once the sentinel is present
    /// this is a single read.
    fn ensure_init(&mut self) -> CoreResult<()> {
        if self.ensured {
            return Ok(());
        }
        if self.backend.read_byte(INIT_OFFSET)? != INIT_MAGIC {
            debug!("region uninitialized, writing sentinel and zero count");
            self.backend.write_byte(INIT_OFFSET, INIT_MAGIC)?;
            self.backend.write_byte(COUNT_OFFSET, 0)?;
            self.backend.commit()?;
        }
        self.ensured = true;
        Ok(())
    }

    /// The persisted count clamped to capacity. Scans and slot
    /// arithmetic go through this so a corrupted count byte never
    /// addresses outside the record array.
    fn live_count(&mut self) -> CoreResult<usize> {
        let raw = self.backend.read_byte(COUNT_OFFSET)? as usize;
        if raw > self.config.capacity {
            warn!(
                raw,
                capacity = self.config.capacity,
                "stored count exceeds capacity, clamping"
            );
            return Ok(self.config.capacity);
        }
        Ok(raw)
    }

    /// Ordered scan for the first record equal to `uid`.
    fn find(&mut self, uid: &[u8]) -> CoreResult<Option<usize>> {
        let count = self.live_count()?;
        for i in 0..count {
            let addr = self.record_addr(i);
            let mut matched = true;
            for (j, &byte) in uid.iter().enumerate() {
                if self.backend.read_byte(addr + j as u32)? != byte {
                    matched = false;
                    break;
                }
            }
            if matched {
                return Ok(Some(i));
            }
        }
        Ok(None)
    }

    fn record_addr(&self, index: usize) -> u32 {
        RECORDS_OFFSET + (index * self.config.uid_size) as u32
    }

    fn check_width(&self, uid: &[u8]) -> CoreResult<()> {
        if uid.len() != self.config.uid_size {
            return Err(CoreError::UidWidth {
                expected: self.config.uid_size,
                actual: uid.len(),
            });
        }
        Ok(())
    }
}


#[cfg(test)]
mod model_tests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone)]
    enum Op {
        Insert(u8),
        Remove(u8),
        Clear,
    }

    /// Ops draw UIDs from a small pool so inserts and removes actually
    /// collide with existing records.
    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            4 => (0u8..8).prop_map(Op::Insert),
            4 => (0u8..8).prop_map(Op::Remove),
            1 => Just(Op::Clear),
        ]
    }

    fn uid(tag: u8) -> [u8; 4] {
        [tag, tag.wrapping_mul(3), 0x5A, tag]
    }

    proptest! {
        #[test]
        fn store_matches_vec_model(ops in prop::collection::vec(op_strategy(), 0..64)) {
            let config = StoreConfig::new().capacity(5).region_size(64);
            let mut store = CardStore::open_in_memory(config).unwrap();
            let mut model: Vec<[u8; 4]> = Vec::new();

            for op in ops {
                match op {
                    Op::Insert(tag) => {
                        let u = uid(tag);
                        let outcome = store.insert(&u).unwrap();
                        let expected = if model.contains(&u) {
                            InsertOutcome::AlreadyExists
                        } else if model.len() == 5 {
                            InsertOutcome::Full
                        } else {
                            model.push(u);
                            InsertOutcome::Added
                        };
                        prop_assert_eq!(outcome, expected);
                    }
                    Op::Remove(tag) => {
                        let u = uid(tag);
                        let outcome = store.remove(&u).unwrap();
                        let expected = if let Some(pos) = model.iter().position(|m| *m == u) {
                            model.remove(pos);
                            RemoveOutcome::Removed
                        } else {
                            RemoveOutcome::NotFound
                        };
                        prop_assert_eq!(outcome, expected);
                    }
                    Op::Clear => {
                        store.clear().unwrap();
                        model.clear();
                    }
                }

                // The store must enumerate exactly the model, in order.
                prop_assert_eq!(store.count().unwrap() as usize, model.len());
                let cards = store.cards().unwrap();
                prop_assert_eq!(cards.len(), model.len());
                for (card, expected) in cards.iter().zip(&model) {
                    prop_assert_eq!(card.as_bytes(), expected.as_slice());
                }
            }
        }
    }
}
