//! HashSet: unique elements under caller-supplied value semantics.

use crate::buckets::{self, Buckets};
use crate::collection::Collection;
use crate::error::{CollectionError, Result};
use crate::semantics::{Native, Shown, ValueSemantics};
use core::fmt;

/// A set whose uniqueness is decided by `S`, not by `T`'s own equality.
///
/// Elements are chained under `S::hash_code`; lookups scan one chain with
/// `S::equals`. Iteration order is unspecified.
#[derive(Clone)]
pub struct HashSet<T, S = Native> {
    buckets: Buckets<T>,
    semantics: S,
}

/// Iterator over the elements of a `HashSet`.
pub type Iter<'a, T> = buckets::Iter<'a, T>;

impl<T> HashSet<T>
where
    Native: ValueSemantics<T>,
{
    pub fn new() -> Self {
        Self::with_semantics(Native::new())
    }
}

impl<T, S: Default> Default for HashSet<T, S> {
    fn default() -> Self {
        Self {
            buckets: Buckets::new(),
            semantics: S::default(),
        }
    }
}

impl<T, S> HashSet<T, S> {
    pub fn semantics(&self) -> &S {
        &self.semantics
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.buckets.iter()
    }

    pub fn clear(&mut self) {
        self.buckets.clear();
    }
}

impl<T, S> HashSet<T, S>
where
    S: ValueSemantics<T>,
{
    pub fn with_semantics(semantics: S) -> Self {
        Self {
            buckets: Buckets::new(),
            semantics,
        }
    }

    /// Build a set from `values`; later duplicates of an element are dropped.
    pub fn from_iter_with<I>(semantics: S, values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut set = Self::with_semantics(semantics);
        set.extend(values);
        set
    }

    /// Insert `value`; fails with `AlreadyExists` if an equal element is
    /// present, leaving the stored one in place.
    pub fn add(&mut self, value: T) -> Result<()> {
        let semantics = &self.semantics;
        let hash = semantics.hash_code(&value);
        self.buckets
            .insert_unique(hash, value, |stored, new| semantics.equals(stored, new))
            .map_err(|rejected| CollectionError::already_exists(semantics, &rejected))
    }

    pub fn contains(&self, value: &T) -> bool {
        self.get(value).is_some()
    }

    /// The stored element equal to `value`.
    pub fn get(&self, value: &T) -> Option<&T> {
        let hash = self.semantics.hash_code(value);
        self.buckets
            .find(hash, |stored| self.semantics.equals(stored, value))
    }

    pub fn remove(&mut self, value: &T) -> Result<()> {
        match self.take(value) {
            Some(_) => Ok(()),
            None => Err(CollectionError::not_found(&self.semantics, value)),
        }
    }

    /// Remove and return the stored element equal to `value`.
    pub fn take(&mut self, value: &T) -> Option<T> {
        let semantics = &self.semantics;
        let hash = semantics.hash_code(value);
        self.buckets
            .remove(hash, |stored| semantics.equals(stored, value))
    }

    /// Order-independent hash of the contents.
    pub fn hash_code(&self) -> u64 {
        self.iter().fold(13001u64, |acc, value| {
            acc.wrapping_mul(self.semantics.hash_code(value))
        })
    }

    #[cfg(test)]
    pub(crate) fn check_invariants(&self) -> bool {
        self.buckets.check(
            |value| self.semantics.hash_code(value),
            |a, b| self.semantics.equals(a, b),
        )
    }
}

impl<T, S> Collection<T> for HashSet<T, S>
where
    S: ValueSemantics<T>,
{
    type Iter<'a>
        = Iter<'a, T>
    where
        Self: 'a,
        T: 'a;

    fn iter(&self) -> Self::Iter<'_> {
        HashSet::iter(self)
    }

    fn len(&self) -> usize {
        HashSet::len(self)
    }

    fn add(&mut self, value: T) -> Result<()> {
        HashSet::add(self, value)
    }

    fn remove(&mut self, value: &T) -> Result<()> {
        HashSet::remove(self, value)
    }

    fn contains(&self, value: &T) -> bool {
        HashSet::contains(self, value)
    }

    fn clear(&mut self) {
        HashSet::clear(self)
    }
}

impl<'a, T, S> IntoIterator for &'a HashSet<T, S> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, S> Extend<T> for HashSet<T, S>
where
    S: ValueSemantics<T>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, values: I) {
        for value in values {
            let _ = self.add(value);
        }
    }
}

impl<T, S> FromIterator<T> for HashSet<T, S>
where
    S: ValueSemantics<T> + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(values: I) -> Self {
        Self::from_iter_with(S::default(), values)
    }
}

/// Equal when both hold the same number of elements and every element of
/// `self` is contained in `other` under `other`'s semantics.
impl<T, S> PartialEq for HashSet<T, S>
where
    S: ValueSemantics<T>,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|value| other.contains(value))
    }
}

impl<T, S> fmt::Display for HashSet<T, S>
where
    S: ValueSemantics<T>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", Shown::new(value, &self.semantics))?;
        }
        f.write_str("]")
    }
}

impl<T: fmt::Debug, S> fmt::Debug for HashSet<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(feature = "serde")]
impl<T, S> serde::Serialize for HashSet<T, S>
where
    T: serde::Serialize,
{
    fn serialize<Z>(&self, serializer: Z) -> core::result::Result<Z::Ok, Z::Error>
    where
        Z: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, T, S> serde::Deserialize<'de> for HashSet<T, S>
where
    T: serde::Deserialize<'de>,
    S: ValueSemantics<T> + Default,
{
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let values = <Vec<T> as serde::Deserialize>::deserialize(deserializer)?;
        let given = values.len();
        let set = Self::from_iter_with(S::default(), values);
        if set.len() != given {
            tracing::debug!(
                dropped = given - set.len(),
                "duplicate elements dropped while deserializing set"
            );
        }
        Ok(set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::semantics::ByKey;
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    /// Semantics with a hash that sends every value to one of two chains.
    #[derive(Clone, Default)]
    struct Parity;

    impl ValueSemantics<u32> for Parity {
        fn equals(&self, a: &u32, b: &u32) -> bool {
            a == b
        }
        fn hash_code(&self, value: &u32) -> u64 {
            u64::from(value % 2)
        }
        fn format(&self, value: &u32, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "#{value}")
        }
    }

    /// Invariant: adding an equal element fails with `AlreadyExists` and the
    /// set keeps its size.
    #[test]
    fn duplicate_add_rejected() {
        let mut s: HashSet<&str> = HashSet::new();
        s.add("a").unwrap();
        s.add("b").unwrap();
        let err = s.add("a").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AlreadyExists);
        assert_eq!(err.to_string(), "already exists: a");
        assert_eq!(s.len(), 2);
        assert!(s.contains(&"a"));
        assert!(s.check_invariants());
    }

    /// Invariant: uniqueness follows the semantics: elements the projection
    /// maps to the same key are one element.
    #[test]
    fn semantics_decide_uniqueness() {
        let mut s = HashSet::with_semantics(ByKey::new(|v: &String| v.to_lowercase()));
        s.add("Ada".to_string()).unwrap();
        assert!(s.add("ADA".to_string()).is_err());
        assert!(s.contains(&"ada".to_string()));
        assert_eq!(s.get(&"aDa".to_string()).map(String::as_str), Some("Ada"));
        assert_eq!(s.take(&"ada".to_string()).as_deref(), Some("Ada"));
        assert!(s.is_empty());
    }

    /// Invariant: removing an absent element reports `NotFound` rendered
    /// through the semantics and leaves the set alone.
    #[test]
    fn remove_absent_is_not_found() {
        let mut s = HashSet::with_semantics(Parity);
        s.add(1).unwrap();
        let err = s.remove(&3).unwrap_err();
        assert_eq!(err, CollectionError::NotFound { value: "#3".into() });
        assert_eq!(s.len(), 1);
        s.remove(&1).unwrap();
        assert!(s.is_empty());
    }

    /// Invariant: a clone is independent of its source.
    #[test]
    fn clone_is_deep() {
        let mut a: HashSet<i32> = (1..=3).collect();
        let b = a.clone();
        a.remove(&2).unwrap();
        a.add(9).unwrap();
        assert!(b.contains(&2));
        assert!(!b.contains(&9));
        assert_eq!(b.len(), 3);
        assert_ne!(a, b);
    }

    /// Invariant: equality and `hash_code` ignore insertion order.
    #[test]
    fn equality_and_hash_ignore_order() {
        let a = HashSet::from_iter_with(Parity, [1, 2, 3]);
        let b = HashSet::from_iter_with(Parity, [3, 1, 2, 1]);
        assert_eq!(b.len(), 3);
        assert_eq!(a, b);
        assert_eq!(a.hash_code(), b.hash_code());
    }

    /// Invariant: `Display` lists every element through the semantics.
    #[test]
    fn display_uses_semantics() {
        let s = HashSet::from_iter_with(Parity, [4]);
        assert_eq!(s.to_string(), "[#4]");
        let s = HashSet::from_iter_with(Parity, [1, 2]);
        let shown = s.to_string();
        assert!(shown == "[#1,#2]" || shown == "[#2,#1]", "{shown}");
        assert_eq!(HashSet::<u32, Parity>::default().to_string(), "[]");
    }

    #[derive(Clone, Debug)]
    enum Op {
        Add(u32),
        Remove(u32),
        Take(u32),
        Clear,
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            4 => (0u32..16).prop_map(Op::Add),
            3 => (0u32..16).prop_map(Op::Remove),
            2 => (0u32..16).prop_map(Op::Take),
            1 => Just(Op::Clear),
        ]
    }

    // Property: state-machine equivalence against BTreeSet under a hash that
    // collides for half of all values.
    // - `add` succeeds iff the model lacks the element.
    // - `remove`/`take` succeed iff the model has it.
    // - chain invariants and `len` hold after every step.
    proptest! {
        #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
        #[test]
        fn prop_matches_model(ops in proptest::collection::vec(op(), 1..80)) {
            let mut sut = HashSet::with_semantics(Parity);
            let mut model: BTreeSet<u32> = BTreeSet::new();
            for op in ops {
                match op {
                    Op::Add(v) => {
                        prop_assert_eq!(sut.add(v).is_ok(), model.insert(v));
                    }
                    Op::Remove(v) => {
                        prop_assert_eq!(sut.remove(&v).is_ok(), model.remove(&v));
                    }
                    Op::Take(v) => {
                        prop_assert_eq!(sut.take(&v), model.take(&v));
                    }
                    Op::Clear => {
                        sut.clear();
                        model.clear();
                    }
                }
                prop_assert!(sut.check_invariants());
                prop_assert_eq!(sut.len(), model.len());
            }
            let seen: BTreeSet<u32> = sut.iter().copied().collect();
            prop_assert_eq!(seen, model);
        }
    }
}
