//! Buckets: the structural hash-table layer under `HashSet` and `HashMap`.
//!
//! A dictionary from a caller-computed `u64` hash to the chain of elements
//! carrying that hash, plus a running element count. Hash codes are used as
//! dictionary keys directly (never reduced modulo a table size), so the
//! layer never rehashes and inherits whatever distribution the caller's hash
//! function has. Equality is a predicate passed per call.
//!
//! Invariants (upheld as long as callers pass consistent hash/eq pairs):
//! - Every element in the chain under `h` was inserted with hash `h`.
//! - `len` is the sum of chain lengths; no chain is empty.
//! - `insert_unique` never places two elements the predicate calls equal in
//!   one chain.
//!
//! Order inside a chain is unspecified: removal swaps the last element into
//! the hole. Iteration order across chains is unspecified.

use hashbrown::hash_map::{self, HashMap};

#[derive(Clone, Debug)]
pub(crate) struct Buckets<E> {
    chains: HashMap<u64, Vec<E>>,
    len: usize,
}

impl<E> Buckets<E> {
    pub(crate) fn new() -> Self {
        Self {
            chains: HashMap::new(),
            len: 0,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(crate) fn find<F>(&self, hash: u64, mut eq: F) -> Option<&E>
    where
        F: FnMut(&E) -> bool,
    {
        self.chains.get(&hash)?.iter().find(|e| eq(e))
    }

    pub(crate) fn find_mut<F>(&mut self, hash: u64, mut eq: F) -> Option<&mut E>
    where
        F: FnMut(&E) -> bool,
    {
        self.chains.get_mut(&hash)?.iter_mut().find(|e| eq(e))
    }

    /// Append `value` to the chain for `hash` unless an equal element is
    /// already there; the rejected value is handed back.
    pub(crate) fn insert_unique<F>(&mut self, hash: u64, value: E, mut eq: F) -> Result<(), E>
    where
        F: FnMut(&E, &E) -> bool,
    {
        let chain = self.chains.entry(hash).or_default();
        if chain.iter().any(|e| eq(e, &value)) {
            return Err(value);
        }
        chain.push(value);
        self.len += 1;
        Ok(())
    }

    /// Append without probing. The caller has just seen `find` miss.
    pub(crate) fn insert_unchecked(&mut self, hash: u64, value: E) {
        self.chains.entry(hash).or_default().push(value);
        self.len += 1;
    }

    pub(crate) fn remove<F>(&mut self, hash: u64, mut eq: F) -> Option<E>
    where
        F: FnMut(&E) -> bool,
    {
        let hash_map::Entry::Occupied(mut occupied) = self.chains.entry(hash) else {
            return None;
        };
        let chain = occupied.get_mut();
        let ix = chain.iter().position(|e| eq(e))?;
        let removed = chain.swap_remove(ix);
        if chain.is_empty() {
            occupied.remove();
        }
        self.len -= 1;
        Some(removed)
    }

    pub(crate) fn clear(&mut self) {
        self.chains.clear();
        self.len = 0;
    }

    pub(crate) fn iter(&self) -> Iter<'_, E> {
        Iter {
            chains: self.chains.values(),
            current: Default::default(),
            remaining: self.len,
        }
    }

    /// Verify the structural invariants against the hash/eq pair the
    /// elements were inserted with.
    #[cfg(test)]
    pub(crate) fn check<H, F>(&self, mut hash_of: H, mut eq: F) -> bool
    where
        H: FnMut(&E) -> u64,
        F: FnMut(&E, &E) -> bool,
    {
        let mut total = 0;
        for (&h, chain) in &self.chains {
            if chain.is_empty() {
                return false;
            }
            for (i, e) in chain.iter().enumerate() {
                if hash_of(e) != h {
                    return false;
                }
                if chain[i + 1..].iter().any(|other| eq(e, other)) {
                    return false;
                }
            }
            total += chain.len();
        }
        total == self.len
    }
}

/// Iterator over every element, chain by chain.
pub struct Iter<'a, E> {
    chains: hash_map::Values<'a, u64, Vec<E>>,
    current: core::slice::Iter<'a, E>,
    remaining: usize,
}

impl<'a, E> Iterator for Iter<'a, E> {
    type Item = &'a E;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(e) = self.current.next() {
                self.remaining -= 1;
                return Some(e);
            }
            self.current = self.chains.next()?.iter();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<E> ExactSizeIterator for Iter<'_, E> {}

impl<E> Clone for Iter<'_, E> {
    fn clone(&self) -> Self {
        Iter {
            chains: self.chains.clone(),
            current: self.current.clone(),
            remaining: self.remaining,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn eq(a: &&str, b: &&str) -> bool {
        a == b
    }

    fn first_byte(s: &&str) -> u64 {
        s.bytes().next().map(u64::from).unwrap_or(0)
    }

    /// Invariant: duplicates are rejected and handed back; `len` is
    /// unaffected by the failed insert.
    #[test]
    fn duplicate_insert_rejected() {
        let mut b: Buckets<&str> = Buckets::new();
        assert_eq!(b.insert_unique(1, "dup", eq), Ok(()));
        assert_eq!(b.insert_unique(1, "dup", eq), Err("dup"));
        assert_eq!(b.len(), 1);
        assert!(b.check(|_| 1, eq));
    }

    /// Invariant: elements sharing a hash live in one chain and are told
    /// apart by the predicate alone.
    #[test]
    fn colliding_hashes_share_a_chain() {
        let mut b: Buckets<&str> = Buckets::new();
        for s in ["apple", "avocado", "apricot", "banana"] {
            b.insert_unique(first_byte(&s), s, eq).unwrap();
        }
        assert_eq!(b.len(), 4);
        assert_eq!(b.chains.len(), 2);
        assert_eq!(b.find(first_byte(&"avocado"), |e| *e == "avocado"), Some(&"avocado"));
        assert_eq!(b.find(first_byte(&"apple"), |e| *e == "almond"), None);
        assert!(b.check(first_byte, eq));
    }

    /// Invariant: removal compacts the chain, drops empty chains and keeps
    /// `len` equal to the sum of chain lengths.
    #[test]
    fn remove_compacts_and_drops_empty_chains() {
        let mut b: Buckets<&str> = Buckets::new();
        for s in ["apple", "avocado", "banana"] {
            b.insert_unique(first_byte(&s), s, eq).unwrap();
        }
        assert_eq!(b.remove(first_byte(&"apple"), |e| *e == "apple"), Some("apple"));
        assert_eq!(b.remove(first_byte(&"apple"), |e| *e == "apple"), None);
        assert_eq!(b.remove(first_byte(&"banana"), |e| *e == "banana"), Some("banana"));
        assert_eq!(b.len(), 1);
        assert_eq!(b.chains.len(), 1);
        assert!(b.check(first_byte, eq));
        assert_eq!(b.remove(99, |_| true), None);
    }

    /// Invariant: iteration yields every element exactly once and reports an
    /// exact length.
    #[test]
    fn iteration_visits_each_element_once() {
        let mut b: Buckets<&str> = Buckets::new();
        let all = ["a1", "a2", "b1", "c1", "c2", "c3"];
        for s in all {
            b.insert_unique(first_byte(&s), s, eq).unwrap();
        }
        let it = b.iter();
        assert_eq!(it.len(), all.len());
        let seen: BTreeSet<&str> = it.copied().collect();
        assert_eq!(seen, all.into_iter().collect());
    }

    /// Invariant: `find_mut` edits in place and `clear` resets everything.
    #[test]
    fn find_mut_and_clear() {
        let mut b: Buckets<(u8, i32)> = Buckets::new();
        b.insert_unchecked(7, (7, 1));
        *b.find_mut(7, |e| e.0 == 7).map(|e| &mut e.1).unwrap() += 41;
        assert_eq!(b.find(7, |e| e.0 == 7), Some(&(7, 42)));
        b.clear();
        assert!(b.is_empty());
        assert_eq!(b.iter().count(), 0);
    }
}
