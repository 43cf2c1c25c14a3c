//! HashMap: key/value pairs keyed by caller-supplied key semantics.
//!
//! Storage is the same `Buckets` layer `HashSet` uses, holding `Entry`
//! values chained under the key's hash. Value semantics are only consulted
//! where values are compared (`Collection::contains` on entries, equality,
//! hashing and display of the whole map).

use crate::array_list::ArrayList;
use crate::buckets::{self, Buckets};
use crate::collection::Collection;
use crate::error::{CollectionError, Result};
use crate::hash_set::HashSet;
use crate::semantics::{Native, Shown, ValueSemantics};
use core::fmt;
use core::ops::Index;

/// One key/value pair. Immutable once stored; the map swaps whole entries on
/// `replace`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entry<K, V> {
    key: K,
    value: V,
}

impl<K, V> Entry<K, V> {
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn into_parts(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K, V> From<(K, V)> for Entry<K, V> {
    fn from((key, value): (K, V)) -> Self {
        Self::new(key, value)
    }
}

/// Semantics of an `Entry`, built from key and value semantics.
///
/// Two entries are equal when both keys and values are; the hash is
/// `37 * hash(key) * hash(value)` (wrapping); display is `key:value`.
#[derive(Clone, Debug, Default)]
pub struct EntrySemantics<KS, VS> {
    keys: KS,
    values: VS,
}

impl<KS, VS> EntrySemantics<KS, VS> {
    pub fn new(keys: KS, values: VS) -> Self {
        Self { keys, values }
    }

    pub fn keys(&self) -> &KS {
        &self.keys
    }

    pub fn values(&self) -> &VS {
        &self.values
    }
}

impl<K, V, KS, VS> ValueSemantics<Entry<K, V>> for EntrySemantics<KS, VS>
where
    KS: ValueSemantics<K>,
    VS: ValueSemantics<V>,
{
    fn equals(&self, a: &Entry<K, V>, b: &Entry<K, V>) -> bool {
        self.keys.equals(&a.key, &b.key) && self.values.equals(&a.value, &b.value)
    }

    fn hash_code(&self, entry: &Entry<K, V>) -> u64 {
        37u64
            .wrapping_mul(self.keys.hash_code(&entry.key))
            .wrapping_mul(self.values.hash_code(&entry.value))
    }

    fn format(&self, entry: &Entry<K, V>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.keys.format(&entry.key, f)?;
        f.write_str(":")?;
        self.values.format(&entry.value, f)
    }
}

/// A map from `K` to `V` whose key identity is decided by `KS`.
///
/// `put` never overwrites; `replace` only overwrites; `put_or_replace` does
/// either. Iteration order is unspecified.
#[derive(Clone)]
pub struct HashMap<K, V, KS = Native, VS = Native> {
    buckets: Buckets<Entry<K, V>>,
    semantics: EntrySemantics<KS, VS>,
}

/// Iterator over the entries of a `HashMap`.
pub type Iter<'a, K, V> = buckets::Iter<'a, Entry<K, V>>;

impl<K, V> HashMap<K, V>
where
    Native: ValueSemantics<K> + ValueSemantics<V>,
{
    pub fn new() -> Self {
        Self::with_semantics(Native::new(), Native::new())
    }
}

impl<K, V, KS: Default, VS: Default> Default for HashMap<K, V, KS, VS> {
    fn default() -> Self {
        Self {
            buckets: Buckets::new(),
            semantics: EntrySemantics::default(),
        }
    }
}

impl<K, V, KS, VS> HashMap<K, V, KS, VS> {
    pub fn key_semantics(&self) -> &KS {
        &self.semantics.keys
    }

    pub fn value_semantics(&self) -> &VS {
        &self.semantics.values
    }

    pub fn entry_semantics(&self) -> &EntrySemantics<KS, VS> {
        &self.semantics
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, K, V> {
        self.buckets.iter()
    }

    /// Key/value pairs as borrowed tuples.
    pub fn entries(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.iter().map(|e| (&e.key, &e.value))
    }

    pub fn clear(&mut self) {
        self.buckets.clear();
    }
}

impl<K, V, KS, VS> HashMap<K, V, KS, VS>
where
    KS: ValueSemantics<K>,
    VS: ValueSemantics<V>,
{
    pub fn with_semantics(keys: KS, values: VS) -> Self {
        Self {
            buckets: Buckets::new(),
            semantics: EntrySemantics::new(keys, values),
        }
    }

    /// Build a map from `pairs`; a later pair whose key is already present
    /// is dropped.
    pub fn from_iter_with<I>(keys: KS, values: VS, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let mut map = Self::with_semantics(keys, values);
        map.extend(pairs);
        map
    }

    fn find(&self, key: &K) -> Option<&Entry<K, V>> {
        let keys = &self.semantics.keys;
        self.buckets
            .find(keys.hash_code(key), |e| keys.equals(&e.key, key))
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// Insert a new pair; fails with `AlreadyExists` if the key is present
    /// and leaves the stored value untouched.
    pub fn put(&mut self, key: K, value: V) -> Result<()> {
        let keys = &self.semantics.keys;
        let hash = keys.hash_code(&key);
        self.buckets
            .insert_unique(hash, Entry::new(key, value), |stored, new| {
                keys.equals(&stored.key, &new.key)
            })
            .map_err(|rejected| CollectionError::already_exists(keys, &rejected.key))
    }

    /// Swap the value stored under `key`, returning the displaced one; fails
    /// with `NotFound` if the key is absent.
    pub fn replace(&mut self, key: K, value: V) -> Result<V> {
        let keys = &self.semantics.keys;
        match self
            .buckets
            .find_mut(keys.hash_code(&key), |e| keys.equals(&e.key, &key))
        {
            Some(stored) => {
                let old = core::mem::replace(stored, Entry::new(key, value));
                Ok(old.value)
            }
            None => Err(CollectionError::not_found(keys, &key)),
        }
    }

    /// Insert or overwrite. Returns the displaced value when the key was
    /// already present.
    pub fn put_or_replace(&mut self, key: K, value: V) -> Option<V> {
        let keys = &self.semantics.keys;
        let hash = keys.hash_code(&key);
        if let Some(stored) = self.buckets.find_mut(hash, |e| keys.equals(&e.key, &key)) {
            let old = core::mem::replace(stored, Entry::new(key, value));
            return Some(old.value);
        }
        self.buckets.insert_unchecked(hash, Entry::new(key, value));
        None
    }

    /// Remove the pair stored under `key`, returning its value.
    pub fn delete(&mut self, key: &K) -> Result<V> {
        self.delete_if_present(key)
            .ok_or_else(|| CollectionError::not_found(&self.semantics.keys, key))
    }

    pub fn delete_if_present(&mut self, key: &K) -> Option<V> {
        let keys = &self.semantics.keys;
        self.buckets
            .remove(keys.hash_code(key), |e| keys.equals(&e.key, key))
            .map(|e| e.value)
    }

    /// The value stored under `key`.
    ///
    /// # Panics
    ///
    /// Panics if the key is absent; use `get_safe` to handle that case.
    pub fn get(&self, key: &K) -> &V {
        match self.find(key) {
            Some(e) => &e.value,
            None => panic!("key not found: {}", Shown::new(key, &self.semantics.keys)),
        }
    }

    pub fn get_safe(&self, key: &K) -> Result<&V> {
        self.find(key)
            .map(|e| &e.value)
            .ok_or_else(|| CollectionError::not_found(&self.semantics.keys, key))
    }

    /// Snapshot of the keys, sharing this map's key semantics.
    pub fn keys(&self) -> HashSet<K, KS>
    where
        K: Clone,
        KS: Clone,
    {
        HashSet::from_iter_with(
            self.semantics.keys.clone(),
            self.iter().map(|e| e.key.clone()),
        )
    }

    /// Snapshot of the values, sharing this map's value semantics.
    pub fn values(&self) -> ArrayList<V, VS>
    where
        V: Clone,
        VS: Clone,
    {
        ArrayList::from_iter_with(
            self.semantics.values.clone(),
            self.iter().map(|e| e.value.clone()),
        )
    }

    /// Order-independent hash of the contents.
    pub fn hash_code(&self) -> u64 {
        self.iter().fold(13001u64, |acc, e| {
            acc.wrapping_mul(self.semantics.hash_code(e))
        })
    }

    #[cfg(test)]
    pub(crate) fn check_invariants(&self) -> bool {
        let keys = &self.semantics.keys;
        self.buckets.check(
            |e| keys.hash_code(&e.key),
            |a, b| keys.equals(&a.key, &b.key),
        )
    }
}

/// A map is a collection of its entries: `add` is `put`, and an entry is
/// contained only if its value matches the stored one.
impl<K, V, KS, VS> Collection<Entry<K, V>> for HashMap<K, V, KS, VS>
where
    KS: ValueSemantics<K>,
    VS: ValueSemantics<V>,
{
    type Iter<'a>
        = Iter<'a, K, V>
    where
        Self: 'a,
        Entry<K, V>: 'a;

    fn iter(&self) -> Self::Iter<'_> {
        HashMap::iter(self)
    }

    fn len(&self) -> usize {
        HashMap::len(self)
    }

    fn add(&mut self, entry: Entry<K, V>) -> Result<()> {
        let (key, value) = entry.into_parts();
        self.put(key, value)
    }

    fn remove(&mut self, entry: &Entry<K, V>) -> Result<()> {
        if !self.contains(entry) {
            return Err(CollectionError::not_found(&self.semantics, entry));
        }
        self.delete(&entry.key).map(|_| ())
    }

    fn contains(&self, entry: &Entry<K, V>) -> bool {
        self.find(&entry.key)
            .is_some_and(|stored| self.semantics.values.equals(&stored.value, &entry.value))
    }

    fn clear(&mut self) {
        HashMap::clear(self)
    }
}

impl<K, V, KS, VS> Index<&K> for HashMap<K, V, KS, VS>
where
    KS: ValueSemantics<K>,
    VS: ValueSemantics<V>,
{
    type Output = V;

    fn index(&self, key: &K) -> &V {
        self.get(key)
    }
}

impl<'a, K, V, KS, VS> IntoIterator for &'a HashMap<K, V, KS, VS> {
    type Item = &'a Entry<K, V>;
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V, KS, VS> Extend<(K, V)> for HashMap<K, V, KS, VS>
where
    KS: ValueSemantics<K>,
    VS: ValueSemantics<V>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, pairs: I) {
        for (key, value) in pairs {
            let _ = self.put(key, value);
        }
    }
}

impl<K, V, KS, VS> FromIterator<(K, V)> for HashMap<K, V, KS, VS>
where
    KS: ValueSemantics<K> + Default,
    VS: ValueSemantics<V> + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(pairs: I) -> Self {
        Self::from_iter_with(KS::default(), VS::default(), pairs)
    }
}

/// Equal when both hold the same keys and each key maps to equal values.
impl<K, V, KS, VS> PartialEq for HashMap<K, V, KS, VS>
where
    KS: ValueSemantics<K>,
    VS: ValueSemantics<V>,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|e| other.contains(e))
    }
}

impl<K, V, KS, VS> fmt::Display for HashMap<K, V, KS, VS>
where
    KS: ValueSemantics<K>,
    VS: ValueSemantics<V>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, e) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", Shown::new(e, &self.semantics))?;
        }
        f.write_str("}")
    }
}

impl<K: fmt::Debug, V: fmt::Debug, KS, VS> fmt::Debug for HashMap<K, V, KS, VS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries()).finish()
    }
}

#[cfg(feature = "serde")]
impl<K, V, KS, VS> serde::Serialize for HashMap<K, V, KS, VS>
where
    K: serde::Serialize,
    V: serde::Serialize,
{
    fn serialize<Z>(&self, serializer: Z) -> core::result::Result<Z::Ok, Z::Error>
    where
        Z: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, K, V, KS, VS> serde::Deserialize<'de> for HashMap<K, V, KS, VS>
where
    K: serde::Deserialize<'de>,
    V: serde::Deserialize<'de>,
    KS: ValueSemantics<K> + Default,
    VS: ValueSemantics<V> + Default,
{
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let entries = <Vec<Entry<K, V>> as serde::Deserialize>::deserialize(deserializer)?;
        let mut map = Self::with_semantics(KS::default(), VS::default());
        for entry in entries {
            let (key, value) = entry.into_parts();
            map.put(key, value)
                .map_err(<D::Error as serde::de::Error>::custom)?;
        }
        Ok(map)
    }
}
