//! ChainedHashMap: a fixed array of buckets, each holding an insertion-ordered chain.

use crate::error::TableError;
use core::borrow::Borrow;
use core::fmt;
use core::hash::{BuildHasher, BuildHasherDefault, Hash};
use hashbrown::HashSet;
use std::collections::hash_map::DefaultHasher;

/// Number of buckets used by [`ChainedHashMap::new`]. A prime.
pub const DEFAULT_TABLE_SIZE: usize = 11;

/// Hasher used unless one is supplied. Deterministic across instances, so two
/// tables with the same size lay out the same keys identically.
pub type DefaultState = BuildHasherDefault<DefaultHasher>;

#[derive(Clone)]
struct Entry<K, V> {
    key: K,
    value: V,
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Entry<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("").field(&self.key).field(&self.value).finish()
    }
}

type Chain<K, V> = Vec<Entry<K, V>>;

/// Maps a hash to a bucket with floored modulo.
///
/// The hash is read as a signed 64-bit code, so codes with the top bit set
/// behave like negative hash codes; the result is still in `0..table_size`.
#[inline]
pub fn bucket_index(hash: u64, table_size: usize) -> usize {
    debug_assert!(table_size > 0, "bucket_index on an empty table");
    (hash as i64).rem_euclid(table_size as i64) as usize
}

/// A map with unique keys stored in `table_size` chains. The number of chains
/// is fixed at construction; chains grow without bound.
#[derive(Clone)]
pub struct ChainedHashMap<K, V, S = DefaultState> {
    hasher: S,
    table: Vec<Chain<K, V>>,
}

impl<K, V> ChainedHashMap<K, V>
where
    K: Eq + Hash,
{
    pub fn new() -> Self {
        Self::with_hasher(DefaultState::default())
    }

    /// Creates a table with `table_size` empty chains.
    pub fn with_capacity(table_size: usize) -> Result<Self, TableError> {
        Self::with_capacity_and_hasher(table_size, DefaultState::default())
    }
}

impl<K, V> Default for ChainedHashMap<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over borrowed entries, in table order and then chain order.
pub struct Iter<'a, K, V> {
    chains: core::slice::Iter<'a, Chain<K, V>>,
    current: core::slice::Iter<'a, Entry<K, V>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(e) = self.current.next() {
                return Some((&e.key, &e.value));
            }
            self.current = self.chains.next()?.iter();
        }
    }
}

/// Owning iterator returned by `ChainedHashMap::into_iter`.
pub struct IntoIter<K, V> {
    chains: std::vec::IntoIter<Chain<K, V>>,
    current: std::vec::IntoIter<Entry<K, V>>,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(e) = self.current.next() {
                return Some((e.key, e.value));
            }
            self.current = self.chains.next()?.into_iter();
        }
    }
}

impl<K, V, S> ChainedHashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    /// Creates a table with [`DEFAULT_TABLE_SIZE`] chains and the given hasher.
    pub fn with_hasher(hasher: S) -> Self {
        Self::allocate(DEFAULT_TABLE_SIZE, hasher)
    }

    pub fn with_capacity_and_hasher(table_size: usize, hasher: S) -> Result<Self, TableError> {
        if table_size == 0 {
            return Err(TableError::InvalidCapacity {
                requested: table_size,
            });
        }
        Ok(Self::allocate(table_size, hasher))
    }

    fn allocate(table_size: usize, hasher: S) -> Self {
        let mut table = Vec::with_capacity(table_size);
        table.resize_with(table_size, Vec::new);
        tracing::trace!(table_size, "allocated chained hash table");
        Self { hasher, table }
    }

    fn index_of<Q>(&self, q: &Q) -> usize
    where
        Q: ?Sized + Hash,
    {
        bucket_index(self.hasher.hash_one(q), self.table.len())
    }

    /// Number of buckets. Never changes after construction.
    pub fn table_size(&self) -> usize {
        self.table.len()
    }

    /// Number of entries, summed over every chain.
    pub fn len(&self) -> usize {
        self.table.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Length of each chain, indexed by bucket.
    pub fn chain_lengths(&self) -> Vec<usize> {
        self.table.iter().map(Vec::len).collect()
    }

    pub fn contains_key<Q>(&self, q: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.table[self.index_of(q)]
            .iter()
            .any(|e| e.key.borrow() == q)
    }

    /// Scans every chain; O(len).
    pub fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.iter().any(|(_, v)| v == value)
    }

    pub fn get<Q>(&self, q: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.table[self.index_of(q)]
            .iter()
            .find(|e| e.key.borrow() == q)
            .map(|e| &e.value)
    }

    pub fn get_mut<Q>(&mut self, q: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let index = self.index_of(q);
        self.table[index]
            .iter_mut()
            .find(|e| e.key.borrow() == q)
            .map(|e| &mut e.value)
    }

    /// Stores `value` under `key`.
    ///
    /// An existing entry keeps its chain position and has its value replaced;
    /// the old value is returned. Otherwise the entry is appended to the tail
    /// of its chain and `None` is returned.
    #[doc(alias = "insert")]
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        let index = self.index_of(&key);
        let chain = &mut self.table[index];
        if let Some(entry) = chain.iter_mut().find(|e| e.key == key) {
            return Some(core::mem::replace(&mut entry.value, value));
        }
        chain.push(Entry { key, value });
        None
    }

    /// Removes the entry for `q`, keeping the order of the rest of its chain.
    pub fn remove<Q>(&mut self, q: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let index = self.index_of(q);
        let chain = &mut self.table[index];
        let pos = chain.iter().position(|e| e.key.borrow() == q)?;
        Some(chain.remove(pos).value)
    }

    /// Calls [`put`](Self::put) for every pair, in iteration order.
    ///
    /// Not atomic: if the source iterator or a key's `Hash`/`Eq` panics
    /// partway, the pairs already written stay in the table.
    pub fn put_all<I>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (K, V)>,
    {
        for (k, v) in pairs {
            self.put(k, v);
        }
    }

    /// Empties every chain. The table size is kept.
    pub fn clear(&mut self) {
        for chain in &mut self.table {
            chain.clear();
        }
    }

    /// Borrowing iterator in table order, then chain order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        let empty: &[Entry<K, V>] = &[];
        Iter {
            chains: self.table.iter(),
            current: empty.iter(),
        }
    }

    /// Detached copy of every key.
    pub fn keys(&self) -> HashSet<K>
    where
        K: Clone,
    {
        self.iter().map(|(k, _)| k.clone()).collect()
    }

    /// Detached copy of every value, in table order and then chain order.
    pub fn values(&self) -> Vec<V>
    where
        V: Clone,
    {
        self.iter().map(|(_, v)| v.clone()).collect()
    }

    /// Detached copy of every entry, in table order and then chain order.
    /// Keys are unique, so the result is a set of pairs.
    pub fn entries(&self) -> Vec<(K, V)>
    where
        K: Clone,
        V: Clone,
    {
        self.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }
}

impl<K, V, S> IntoIterator for ChainedHashMap<K, V, S> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            chains: self.table.into_iter(),
            current: Vec::new().into_iter(),
        }
    }
}

impl<'a, K, V, S> IntoIterator for &'a ChainedHashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V, S> Extend<(K, V)> for ChainedHashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.put_all(iter);
    }
}

impl<K, V, S> FromIterator<(K, V)> for ChainedHashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut m = Self::with_hasher(S::default());
        m.put_all(iter);
        m
    }
}

// Equality compares entry sets; table size, hasher and bucket layout are ignored.
impl<K, V, S1, S2> PartialEq<ChainedHashMap<K, V, S2>> for ChainedHashMap<K, V, S1>
where
    K: Eq + Hash,
    V: PartialEq,
    S1: BuildHasher,
    S2: BuildHasher,
{
    fn eq(&self, other: &ChainedHashMap<K, V, S2>) -> bool {
        self.len() == other.len() && self.iter().all(|(k, v)| other.get(k) == Some(v))
    }
}

impl<K, V, S> Eq for ChainedHashMap<K, V, S>
where
    K: Eq + Hash,
    V: Eq,
    S: BuildHasher,
{
}

/// Renders one list per bucket, e.g. `[[("a", 1)], [], [("b", 2), ("c", 3)]]`.
impl<K, V, S> fmt::Debug for ChainedHashMap<K, V, S>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.table.iter()).finish()
    }
}
