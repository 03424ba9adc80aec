//! The linear-hashing table: dual-hash addressing, the split/shrink
//! pointer discipline, and the bucket-level migration protocol.
//!
//! Grounded end-to-end on `original_source/src/map.c` (`make_map`,
//! `mm_put`, `mm_get`, `mm_delete`, `split`, `shrink`), with the
//! `HashTable<K, V>` shape (`hash_builder` field, `DefaultHashBuilder =
//! fxhash::FxBuildHasher`, `make_hash` helper) adapted from
//! `src/index/hash/mod.rs`.

pub mod addressing;
pub(crate) mod bucket;
pub(crate) mod directory;
mod persist;

use std::hash::{BuildHasher, Hash, Hasher};

use crate::config::TableConfig;
use crate::data::{Key, Value};
use directory::Directory;

/// Default hasher: `fxhash` for small fixed-width keys.
pub type DefaultHashBuilder = fxhash::FxBuildHasher;

#[inline]
pub(crate) fn make_hash<K: Hash + ?Sized>(hash_builder: &impl BuildHasher, key: &K) -> u64 {
    let mut state = hash_builder.build_hasher();
    key.hash(&mut state);
    state.finish()
}

/// An in-memory associative container mapping opaque fixed-width keys to
/// opaque fixed-width values, growing and shrinking one bucket at a time.
///
/// `M` is [`capacity`](Self::capacity), `p` is
/// [`split_pointer`](Self::split_pointer), `U` is [`len`](Self::len).
pub struct Table<K, V, S = DefaultHashBuilder>
where
    K: Key,
    V: Value,
    S: BuildHasher,
{
    directory: Directory<K, V>,
    capacity: usize,
    split_pointer: usize,
    len: usize,
    config: TableConfig,
    hash_builder: S,
}

impl<K, V, S> Table<K, V, S>
where
    K: Key,
    V: Value,
    S: BuildHasher + Default,
{
    /// Builds a table with the default hasher, `capacity := config.m_min()`,
    /// `split_pointer := 0`, `len := 0`, directory pre-populated with
    /// `config.m_min()` empty buckets.
    pub fn new(config: TableConfig) -> Self {
        Self::with_hasher(config, S::default())
    }
}

impl<K, V, S> Table<K, V, S>
where
    K: Key,
    V: Value,
    S: BuildHasher,
{
    pub fn with_hasher(config: TableConfig, hash_builder: S) -> Self {
        let m_min = config.m_min();
        Self {
            directory: Directory::with_len(m_min),
            capacity: m_min,
            split_pointer: 0,
            len: 0,
            config,
            hash_builder,
        }
    }

    /// Number of entries currently stored (`U`).
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Logical capacity (`M`).
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Current split pointer (`p`).
    #[inline]
    pub fn split_pointer(&self) -> usize {
        self.split_pointer
    }

    /// Directory length (`L = M + p`).
    #[inline]
    pub fn directory_len(&self) -> usize {
        self.directory.len()
    }

    #[inline]
    fn getpos(&self, hash: u64) -> usize {
        addressing::getpos(hash, self.capacity, self.split_pointer)
    }

    #[inline]
    fn load_factor(&self) -> f32 {
        self.len as f32 / (self.directory.len() as f32 * self.config.bucket_capacity() as f32)
    }

    #[inline]
    fn need_split(&self) -> bool {
        self.load_factor() > self.config.split_threshold()
    }

    #[inline]
    fn need_shrink(&self) -> bool {
        self.capacity > self.config.m_min() && self.load_factor() <= self.config.split_threshold()
    }

    /// Inserts `value` under `key`, overwriting any existing value for an
    /// equal key (last-write-wins). Triggers at most one split step.
    pub fn put(&mut self, key: K, value: V) {
        let hash = make_hash(&self.hash_builder, &key);
        let index = self.getpos(hash);
        let bucket = self.directory.get_mut(index);
        if bucket.insert_or_replace(key, value) {
            self.len += 1;
            if self.need_split() {
                self.split_step();
            }
        }
    }

    /// Returns a clone of the value stored under `key`, if present.
    pub fn get(&self, key: &K) -> Option<V> {
        let hash = make_hash(&self.hash_builder, key);
        let index = self.getpos(hash);
        self.directory.get(index).find(key).map(|e| e.value.clone())
    }

    /// As `get`, without copying the value out.
    pub fn has(&self, key: &K) -> bool {
        let hash = make_hash(&self.hash_builder, key);
        let index = self.getpos(hash);
        self.directory.get(index).find(key).is_some()
    }

    /// Removes the entry stored under `key`. Triggers at most one shrink
    /// step. Returns whether an entry was actually removed.
    pub fn delete(&mut self, key: &K) -> bool {
        let hash = make_hash(&self.hash_builder, key);
        let index = self.getpos(hash);
        let bucket = self.directory.get_mut(index);
        if bucket.remove(key) {
            self.len -= 1;
            if self.need_shrink() {
                self.shrink_step();
            }
            true
        } else {
            false
        }
    }

    /// Migrates the bucket at the current split pointer into itself plus
    /// a freshly appended bucket, then advances `(capacity, split_pointer)`.
    ///
    /// Mirrors `map.c`'s `split`: entries whose `h_high` address is the
    /// new bucket's index move; every other entry (whose `h_high` address
    /// is necessarily the split bucket's own index — see §4.4's tie-break
    /// rule) stays.
    fn split_step(&mut self) {
        let s = self.split_pointer;
        let new_index = self.directory.append_empty();
        debug_assert_eq!(new_index, self.capacity + s);

        let hash_builder = &self.hash_builder;
        let capacity = self.capacity;
        let (split_bucket, new_bucket) = self.directory.get_pair_mut(s, new_index);
        split_bucket.drain_into(new_bucket, |entry| {
            let hash = make_hash(hash_builder, &entry.key);
            addressing::h_high(hash, capacity) == new_index
        });

        self.split_pointer += 1;
        if self.split_pointer == self.capacity {
            self.capacity *= 2;
            self.split_pointer = 0;
        }
    }

    /// Merges the last directory bucket back into the bucket it was split
    /// out of, then retreats `(capacity, split_pointer)`. The exact
    /// inverse of [`split_step`](Self::split_step) — see `map.c`'s `shrink`.
    fn shrink_step(&mut self) {
        let origin = if self.split_pointer > 0 {
            self.split_pointer - 1
        } else {
            self.capacity / 2 - 1
        };
        let last = self.directory.len() - 1;

        let (origin_bucket, last_bucket) = self.directory.get_pair_mut(origin, last);
        last_bucket.drain_into(origin_bucket, |_| true);
        self.directory.truncate_to(last);

        if self.split_pointer == 0 {
            self.capacity /= 2;
            self.split_pointer = self.capacity - 1;
        } else {
            self.split_pointer -= 1;
        }
    }
}

impl<K, V, S> Default for Table<K, V, S>
where
    K: Key,
    V: Value,
    S: BuildHasher + Default,
{
    fn default() -> Self {
        Self::new(TableConfig::default())
    }
}

/// Debug-only per-bucket occupancy snapshot: the Rust analogue of
/// `map.c`'s `mm_print_map`, retained for the crate's own test suite
/// rather than exposed as diagnostic printing on the public API.
#[cfg(test)]
#[derive(Debug)]
pub(crate) struct TableDump {
    pub capacity: usize,
    pub split_pointer: usize,
    pub len: usize,
    pub directory_len: usize,
    pub bucket_lens: Vec<usize>,
}

#[cfg(test)]
impl<K, V, S> Table<K, V, S>
where
    K: Key,
    V: Value,
    S: BuildHasher,
{
    /// Snapshots `(capacity, split_pointer, len, directory_len)` plus the
    /// length of every bucket, for inspection in tests.
    pub(crate) fn dump(&self) -> TableDump {
        TableDump {
            capacity: self.capacity,
            split_pointer: self.split_pointer,
            len: self.len,
            directory_len: self.directory.len(),
            bucket_lens: (0..self.directory.len()).map(|i| self.directory.get(i).len()).collect(),
        }
    }
}
