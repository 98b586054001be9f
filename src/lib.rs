//! chained-hashtable: a fixed-capacity hash table mapping string keys to
//! `i32` values, resolving collisions by separate chaining.
//!
//! Internal Design:
//!
//! Summary
//! - `HashTable` owns a bucket array of fixed length (`capacity`) and an
//!   entry arena. Each bucket holds the head of a singly linked chain; each
//!   entry owns a copy of its key, its value, and the link to the next entry
//!   in the same bucket.
//! - Bucket selection uses `hash::bucket_index`, a position-weighted byte
//!   sum reduced modulo the capacity.
//!
//! Constraints
//! - Single-threaded; no internal synchronization. Wrap the table in a lock
//!   for shared use.
//! - Capacity is fixed at construction and never changes; there is no
//!   rehashing.
//! - No removal of individual keys. Entries live until the table is
//!   destroyed or dropped.
//!
//! Insertion and lookup
//! - `set` always prepends a new entry to its chain, without searching for
//!   an existing key. Re-setting a key therefore grows the chain.
//! - `get` walks the chain head to tail and returns the first exact key
//!   match, which is the most recently set value (last write wins).
//! - `get` reports absence as `None`. `get_or_sentinel` keeps the older
//!   `-1` convention, which cannot tell a stored `-1` from a miss.
//!
//! Storage
//! - Entries live in a `SlotMap`; chain links are slot keys rather than
//!   boxed pointers, so long chains never recurse on drop and the whole
//!   arena is released in one step.
//! - `destroy(self)` consumes the table, so a destroyed table cannot be
//!   used again. Plain drop frees the same memory.
//!
//! Failure policy
//! - Zero capacity is rejected with `TableError::ZeroCapacity`.
//! - The bucket array is reserved fallibly (`TableError::Alloc`). Entry
//!   allocation follows the global allocator, which aborts on exhaustion.

mod chained_table;
mod chained_table_proptest;
mod error;
pub mod hash;

// Public surface
pub use chained_table::{HashTable, NOT_FOUND};
pub use error::TableError;
pub use hash::bucket_index;
