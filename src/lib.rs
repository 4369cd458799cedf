//! chain-map: a single-threaded HashMap built on separate chaining over a
//! bucket array whose size is fixed at construction, plus a small
//! word-frequency client that drives it.
//!
//! Internal Design:
//!
//! Layout
//! - `ChainedHashMap<K, V, S>` owns `Vec<Vec<Entry<K, V>>>`: one chain per
//!   bucket. Chains are plain vectors in insertion order; there is no
//!   probing and no sorting.
//! - `bucket_index(hash, n)` is the floored modulo of the hash, read as a
//!   signed 64-bit code, by `n`. Every operation that takes a key routes
//!   through it and then scans exactly one chain.
//! - `WordCounter` wraps a `ChainedHashMap<String, usize>` and only uses
//!   insert-or-increment, `entries()` and `len()`.
//!
//! Constraints
//! - Keys are unique across the table. `put` on an existing key replaces the
//!   value in place; the entry keeps its chain position.
//! - The number of buckets never changes: `clear` empties chains but keeps
//!   them, and there is no load-factor growth. Chains grow without bound.
//! - Hashing is delegated to `K: Hash` through a `BuildHasher`. The default
//!   `DefaultState` is deterministic, so layout depends only on contents,
//!   insertion order and table size.
//! - `len()` sums chain lengths on every call; nothing is cached.
//!
//! Views
//! - `keys()`, `values()` and `entries()` return detached copies. Later
//!   mutation of the table does not show through, and mutating a copy does
//!   not reach the table. `iter()` borrows the table, so the borrow checker
//!   rules out mutation while it is live.
//!
//! Failure semantics
//! - Only construction fails: a table size of zero yields
//!   `TableError::InvalidCapacity`.
//! - Absence is `None`, never an error. A stored value that is itself
//!   "empty" (`None`, `0`) is still `Some(&value)`.
//! - A panicking `Hash` or `Eq` impl propagates; the table does not catch it.
//!   `put_all` is not atomic and keeps the pairs written before a panic.
//!
//! Notes and non-goals
//! - No internal locking. Callers that share a table across
//!   threads wrap it in their own `Mutex`/`RwLock`.
//! - No resizing, no persistence.

pub mod chained_hash_map;
mod chained_hash_map_proptest;
pub mod error;
pub mod word_count;

// Public surface
pub use chained_hash_map::{bucket_index, ChainedHashMap, DefaultState, DEFAULT_TABLE_SIZE};
pub use error::{TableError, WordCountError};
pub use word_count::{format_report_line, tokenize, WordCounter};
