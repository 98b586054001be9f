//! HashTable: fixed bucket array over an entry arena, chains linked by slot keys.

use crate::error::TableError;
use crate::hash::bucket_index;
use core::fmt;
use core::num::NonZeroUsize;
use log::{debug, trace};
use slotmap::{DefaultKey, SlotMap};

/// Returned by [`HashTable::get_or_sentinel`] when no entry matches.
pub const NOT_FOUND: i32 = -1;

#[derive(Debug)]
struct Entry {
    key: Box<str>,
    value: i32,
    next: Option<DefaultKey>,
}

pub struct HashTable {
    capacity: NonZeroUsize,
    buckets: Vec<Option<DefaultKey>>, // chain heads
    entries: SlotMap<DefaultKey, Entry>,
}

/// Walks one chain from its head to its tail.
struct Chain<'a> {
    entries: &'a SlotMap<DefaultKey, Entry>,
    cursor: Option<DefaultKey>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a Entry;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let e = self.entries.get(self.cursor?)?;
        self.cursor = e.next;
        Some(e)
    }
}

impl HashTable {
    /// Create a table with `capacity` empty buckets.
    pub fn new(capacity: usize) -> Result<Self, TableError> {
        let capacity = NonZeroUsize::new(capacity).ok_or(TableError::ZeroCapacity)?;
        let mut buckets = Vec::new();
        buckets.try_reserve_exact(capacity.get())?;
        buckets.resize(capacity.get(), None);
        debug!("created hash table with {} buckets", capacity);
        Ok(Self {
            capacity,
            buckets,
            entries: SlotMap::with_key(),
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity.get()
    }

    /// Number of stored entries, shadowed duplicates included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Bucket that `key` hashes to under this table's capacity.
    pub fn bucket_of(&self, key: &str) -> usize {
        bucket_index(key, self.capacity)
    }

    fn chain(&self, bucket: usize) -> Chain<'_> {
        Chain {
            entries: &self.entries,
            cursor: self.buckets[bucket],
        }
    }

    /// Number of entries chained in `bucket`, or `None` if out of range.
    pub fn chain_len(&self, bucket: usize) -> Option<usize> {
        if bucket >= self.buckets.len() {
            return None;
        }
        Some(self.chain(bucket).count())
    }

    /// Prepend a new entry for `key`. Earlier entries with the same key stay
    /// in the chain but are shadowed for lookups.
    pub fn set(&mut self, key: &str, value: i32) {
        let bucket = self.bucket_of(key);
        let entry = Entry {
            key: Box::from(key),
            value,
            next: self.buckets[bucket],
        };
        let k = self.entries.insert(entry);
        self.buckets[bucket] = Some(k);
        trace!("set {:?} in bucket {}", key, bucket);
    }

    /// Value of the most recently set entry for `key`.
    pub fn get(&self, key: &str) -> Option<i32> {
        let bucket = self.bucket_of(key);
        let mut depth = 0usize;
        let found = self.chain(bucket).find(|e| {
            depth += 1;
            *e.key == *key
        });
        trace!(
            "get {:?} in bucket {}: {} after {} probes",
            key,
            bucket,
            if found.is_some() { "hit" } else { "miss" },
            depth
        );
        found.map(|e| e.value)
    }

    /// Like [`get`](Self::get), but reports absence as [`NOT_FOUND`].
    ///
    /// A stored `-1` is indistinguishable from a missing key here; prefer
    /// `get` when that matters.
    pub fn get_or_sentinel(&self, key: &str) -> i32 {
        self.get(key).unwrap_or(NOT_FOUND)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Release every entry chain by chain, then the buckets and the table.
    /// Returns the number of entries released.
    ///
    /// Dropping the table releases the same storage; this form walks the
    /// chains explicitly and reports what it freed.
    pub fn destroy(mut self) -> usize {
        let mut released = 0usize;
        for head in self.buckets.iter_mut() {
            let mut cursor = head.take();
            while let Some(k) = cursor {
                match self.entries.remove(k) {
                    Some(e) => {
                        cursor = e.next;
                        released += 1;
                    }
                    None => break,
                }
            }
        }
        debug_assert!(self.entries.is_empty(), "entry not reachable from any bucket");
        debug!(
            "destroyed hash table with {} buckets, released {} entries",
            self.capacity, released
        );
        released
    }

    #[cfg(test)]
    pub(crate) fn chain_keys(&self, bucket: usize) -> Vec<(&str, i32)> {
        self.chain(bucket).map(|e| (&*e.key, e.value)).collect()
    }
}

impl fmt::Debug for HashTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashTable")
            .field("capacity", &self.capacity)
            .field("len", &self.entries.len())
            .field(
                "occupied_buckets",
                &self.buckets.iter().filter(|b| b.is_some()).count(),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Invariant: zero capacity is rejected at construction.
    #[test]
    fn zero_capacity_rejected() {
        match HashTable::new(0) {
            Err(TableError::ZeroCapacity) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }

    /// Invariant: a new table has `capacity` empty buckets and no entries.
    #[test]
    fn new_table_is_empty() {
        let t = HashTable::new(8).unwrap();
        assert_eq!(t.capacity(), 8);
        assert_eq!(t.len(), 0);
        assert!(t.is_empty());
        for b in 0..8 {
            assert_eq!(t.chain_len(b), Some(0));
        }
        assert_eq!(t.chain_len(8), None);
    }

    /// Invariant: a key set once is returned by `get`; absent keys are `None`.
    #[test]
    fn set_then_get() {
        let mut t = HashTable::new(50).unwrap();
        t.set("apple", 100);
        assert_eq!(t.get("apple"), Some(100));
        assert_eq!(t.get("pear"), None);
        assert!(t.contains_key("apple"));
        assert!(!t.contains_key("pear"));
    }

    /// Invariant: repeated `set` prepends; the newest entry shadows older ones
    /// and the chain grows instead of being updated in place.
    #[test]
    fn last_write_wins_and_chain_grows() {
        let mut t = HashTable::new(4).unwrap();
        t.set("k", 1);
        t.set("k", 2);
        assert_eq!(t.get("k"), Some(2));
        assert_eq!(t.len(), 2);
        let b = t.bucket_of("k");
        assert_eq!(t.chain_keys(b), vec![("k", 2), ("k", 1)]);
    }

    /// Invariant: entries in a shared bucket are chained newest first and all
    /// remain retrievable.
    #[test]
    fn collisions_chain_newest_first() {
        let mut t = HashTable::new(1).unwrap();
        t.set("a", 1);
        t.set("b", 2);
        t.set("c", 3);
        assert_eq!(t.chain_keys(0), vec![("c", 3), ("b", 2), ("a", 1)]);
        assert_eq!(t.get("a"), Some(1));
        assert_eq!(t.get("b"), Some(2));
        assert_eq!(t.get("c"), Some(3));
    }

    /// Invariant: the sentinel form returns -1 for misses and cannot tell a
    /// stored -1 apart; `get` can.
    #[test]
    fn sentinel_is_ambiguous_but_option_is_not() {
        let mut t = HashTable::new(10).unwrap();
        t.set("neg", -1);
        assert_eq!(t.get_or_sentinel("neg"), NOT_FOUND);
        assert_eq!(t.get_or_sentinel("missing"), NOT_FOUND);
        assert_eq!(t.get("neg"), Some(-1));
        assert_eq!(t.get("missing"), None);
    }

    /// Invariant: the empty key lives in bucket 0 and behaves like any key.
    #[test]
    fn empty_key() {
        let mut t = HashTable::new(13).unwrap();
        assert_eq!(t.bucket_of(""), 0);
        t.set("", 7);
        assert_eq!(t.get(""), Some(7));
        assert_eq!(t.chain_len(0), Some(1));
        t.set("", 8);
        assert_eq!(t.get(""), Some(8));
    }

    /// Invariant: the table keeps its own copy of the key.
    #[test]
    fn key_is_copied() {
        let mut t = HashTable::new(16).unwrap();
        let mut buf = String::from("temp");
        t.set(&buf, 5);
        buf.clear();
        buf.push_str("other");
        assert_eq!(t.get("temp"), Some(5));
        assert_eq!(t.get("other"), None);
    }

    /// Invariant: lookup compares keys exactly, byte for byte.
    #[test]
    fn exact_key_equality() {
        let mut t = HashTable::new(1).unwrap();
        t.set("Key", 1);
        assert_eq!(t.get("key"), None);
        assert_eq!(t.get("Key "), None);
        assert_eq!(t.get("Ke"), None);
        assert_eq!(t.get("Key"), Some(1));
    }

    /// Invariant: `destroy` releases every entry, duplicates included.
    #[test]
    fn destroy_counts_released_entries() {
        assert_eq!(HashTable::new(3).unwrap().destroy(), 0);

        let mut t = HashTable::new(3).unwrap();
        t.set("only", 1);
        assert_eq!(t.destroy(), 1);

        let mut t = HashTable::new(3).unwrap();
        for i in 0..100 {
            t.set(&format!("k{}", i % 40), i);
        }
        assert_eq!(t.len(), 100);
        assert_eq!(t.destroy(), 100);
    }

    #[test]
    fn debug_reports_shape() {
        let mut t = HashTable::new(1).unwrap();
        t.set("a", 1);
        t.set("b", 2);
        let s = format!("{:?}", t);
        assert!(s.contains("capacity: 1"));
        assert!(s.contains("len: 2"));
        assert!(s.contains("occupied_buckets: 1"));
    }
}
