//! A growable, ordered sequence of buckets indexed by computed address.
//!
//! Grounded on `original_source/src/slice.c` (`make_slice`/`ss_append`/
//! `ss_getptr`/`ss_shrink`): a fixed-item-size array that doubles its
//! backing allocation on overflow and truncates from the tail. `Vec<T>`
//! already provides exactly this contract, so the directory is a thin,
//! safe wrapper rather than a hand-rolled reallocating array.

use crate::data::{Key, Value};
use crate::table::bucket::Bucket;

#[derive(Debug, Default)]
pub struct Directory<K, V>
where
    K: Key,
    V: Value,
{
    buckets: Vec<Bucket<K, V>>,
}

impl<K, V> Directory<K, V>
where
    K: Key,
    V: Value,
{
    /// Builds a directory pre-populated with `len` empty buckets.
    pub fn with_len(len: usize) -> Self {
        let mut buckets = Vec::with_capacity(len);
        buckets.resize_with(len, Bucket::new);
        Self { buckets }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Out-of-range access is a programming error under the table's own
    /// invariants (§4.7); debug builds catch it instead of indexing
    /// silently out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> &Bucket<K, V> {
        debug_assert!(index < self.buckets.len(), "directory index out of range");
        &self.buckets[index]
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> &mut Bucket<K, V> {
        debug_assert!(index < self.buckets.len(), "directory index out of range");
        &mut self.buckets[index]
    }

    /// Appends a fresh empty bucket, returning its directory index.
    #[inline]
    pub fn append_empty(&mut self) -> usize {
        self.buckets.push(Bucket::new());
        self.buckets.len() - 1
    }

    /// Truncates the directory to `new_len`. `new_len` must be strictly
    /// less than the current length — the table never calls this
    /// otherwise, so this is a debug-only assertion rather than a
    /// recoverable error (§4.7's "asymmetry with shrink to same length").
    #[inline]
    pub fn truncate_to(&mut self, new_len: usize) {
        debug_assert!(new_len < self.buckets.len(), "truncate_to requires new_len < len");
        self.buckets.truncate(new_len);
    }

    /// Splits the storage so that bucket `a` and bucket `b` can be
    /// borrowed mutably at the same time (needed by split/shrink, which
    /// always move entries between two distinct indices).
    pub fn get_pair_mut(&mut self, a: usize, b: usize) -> (&mut Bucket<K, V>, &mut Bucket<K, V>) {
        debug_assert_ne!(a, b, "get_pair_mut requires distinct indices");
        if a < b {
            let (left, right) = self.buckets.split_at_mut(b);
            (&mut left[a], &mut right[0])
        } else {
            let (left, right) = self.buckets.split_at_mut(a);
            (&mut right[0], &mut left[b])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_len_prepopulates_empty_buckets() {
        let dir: Directory<i32, i32> = Directory::with_len(16);
        assert_eq!(dir.len(), 16);
        for i in 0..16 {
            assert!(dir.get(i).is_empty());
        }
    }

    #[test]
    fn append_and_truncate_round_trip() {
        let mut dir: Directory<i32, i32> = Directory::with_len(4);
        let idx = dir.append_empty();
        assert_eq!(idx, 4);
        assert_eq!(dir.len(), 5);
        dir.truncate_to(4);
        assert_eq!(dir.len(), 4);
    }

    #[test]
    fn get_pair_mut_borrows_distinct_buckets() {
        let mut dir: Directory<i32, i32> = Directory::with_len(4);
        let (a, b) = dir.get_pair_mut(1, 3);
        a.insert_or_replace(1, 1);
        b.insert_or_replace(2, 2);
        assert_eq!(dir.get(1).len(), 1);
        assert_eq!(dir.get(3).len(), 1);
    }
}
