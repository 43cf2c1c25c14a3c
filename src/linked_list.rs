//! LinkedList: a doubly linked sequence over generational slot keys.
//!
//! Nodes live in a `SlotMap`; links are `DefaultKey`s rather than pointers,
//! so the list needs no unsafe code and a stale link can never alias a node
//! allocated later. Positional access walks from whichever end is closer to
//! the target index, which keeps both ends O(1) for the queue and stack
//! adapters.

use crate::collection::Collection;
use crate::error::{CollectionError, Result};
use crate::list::{self, List};
use crate::semantics::{Comparator, Native, ValueSemantics};
use core::fmt;
use slotmap::{DefaultKey, SlotMap};

#[derive(Clone, Debug)]
struct Node<T> {
    value: T,
    prev: Option<DefaultKey>,
    next: Option<DefaultKey>,
}

#[derive(Clone)]
pub struct LinkedList<T, S = Native> {
    nodes: SlotMap<DefaultKey, Node<T>>,
    head: Option<DefaultKey>,
    tail: Option<DefaultKey>,
    semantics: S,
}

impl<T> LinkedList<T>
where
    Native: ValueSemantics<T>,
{
    pub fn new() -> Self {
        Self::with_semantics(Native::new())
    }
}

impl<T, S: Default> Default for LinkedList<T, S> {
    fn default() -> Self {
        Self::with_semantics_unchecked(S::default())
    }
}

/// Front-to-back iterator over a `LinkedList`.
pub struct Iter<'a, T> {
    nodes: &'a SlotMap<DefaultKey, Node<T>>,
    next: Option<DefaultKey>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.nodes.get(self.next?)?;
        self.next = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// Owning front-to-back iterator.
pub struct IntoIter<T, S> {
    list: LinkedList<T, S>,
}

impl<T, S> Iterator for IntoIter<T, S> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T, S> LinkedList<T, S> {
    fn with_semantics_unchecked(semantics: S) -> Self {
        Self {
            nodes: SlotMap::with_key(),
            head: None,
            tail: None,
            semantics,
        }
    }

    pub fn semantics(&self) -> &S {
        &self.semantics
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            next: self.head,
            remaining: self.nodes.len(),
        }
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
    }

    pub fn front(&self) -> Option<&T> {
        self.head.and_then(|k| self.nodes.get(k)).map(|n| &n.value)
    }

    pub fn back(&self) -> Option<&T> {
        self.tail.and_then(|k| self.nodes.get(k)).map(|n| &n.value)
    }

    pub fn push_front(&mut self, value: T) {
        let key = self.nodes.insert(Node {
            value,
            prev: None,
            next: self.head,
        });
        match self.head.and_then(|k| self.nodes.get_mut(k)) {
            Some(old) => old.prev = Some(key),
            None => self.tail = Some(key),
        }
        self.head = Some(key);
    }

    pub fn push_back(&mut self, value: T) {
        let key = self.nodes.insert(Node {
            value,
            prev: self.tail,
            next: None,
        });
        match self.tail.and_then(|k| self.nodes.get_mut(k)) {
            Some(old) => old.next = Some(key),
            None => self.head = Some(key),
        }
        self.tail = Some(key);
    }

    pub fn pop_front(&mut self) -> Option<T> {
        self.head.map(|k| self.unlink(k))
    }

    pub fn pop_back(&mut self) -> Option<T> {
        self.tail.map(|k| self.unlink(k))
    }

    /// Key of the node at `index`, walking from the nearer end.
    fn key_at(&self, index: usize) -> Option<DefaultKey> {
        let len = self.nodes.len();
        if index >= len {
            return None;
        }
        if index <= len / 2 {
            let mut key = self.head?;
            for _ in 0..index {
                key = self.nodes[key].next?;
            }
            Some(key)
        } else {
            let mut key = self.tail?;
            for _ in index + 1..len {
                key = self.nodes[key].prev?;
            }
            Some(key)
        }
    }

    fn unlink(&mut self, key: DefaultKey) -> T {
        let node = self
            .nodes
            .remove(key)
            .expect("linked node must be live while reachable");
        match node.prev {
            Some(p) => self.nodes[p].next = node.next,
            None => self.head = node.next,
        }
        match node.next {
            Some(n) => self.nodes[n].prev = node.prev,
            None => self.tail = node.prev,
        }
        node.value
    }

    pub fn get(&self, index: usize) -> Result<&T> {
        self.key_at(index)
            .map(|k| &self.nodes[k].value)
            .ok_or_else(|| CollectionError::out_of_bounds(index, self.len()))
    }

    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        let len = self.len();
        if index == len {
            self.push_back(value);
            return Ok(());
        }
        let next = self
            .key_at(index)
            .ok_or_else(|| CollectionError::out_of_bounds(index, len))?;
        let prev = self.nodes[next].prev;
        let key = self.nodes.insert(Node {
            value,
            prev,
            next: Some(next),
        });
        self.nodes[next].prev = Some(key);
        match prev {
            Some(p) => self.nodes[p].next = Some(key),
            None => self.head = Some(key),
        }
        Ok(())
    }

    pub fn replace(&mut self, index: usize, value: T) -> Result<T> {
        let key = self
            .key_at(index)
            .ok_or_else(|| CollectionError::out_of_bounds(index, self.len()))?;
        Ok(core::mem::replace(&mut self.nodes[key].value, value))
    }

    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        let key = self
            .key_at(index)
            .ok_or_else(|| CollectionError::out_of_bounds(index, self.len()))?;
        Ok(self.unlink(key))
    }

    pub fn sort_by<C>(&mut self, comparator: &C)
    where
        C: Comparator<T> + ?Sized,
    {
        let mut values: Vec<T> = Vec::with_capacity(self.len());
        while let Some(value) = self.pop_front() {
            values.push(value);
        }
        values.sort_by(|a, b| comparator.compare(a, b));
        for value in values {
            self.push_back(value);
        }
    }

    #[cfg(test)]
    pub(crate) fn check_links(&self) -> bool {
        let mut count = 0;
        let mut prev = None;
        let mut cursor = self.head;
        while let Some(k) = cursor {
            let Some(node) = self.nodes.get(k) else {
                return false;
            };
            if node.prev != prev {
                return false;
            }
            prev = Some(k);
            cursor = node.next;
            count += 1;
        }
        prev == self.tail && count == self.nodes.len()
    }
}

impl<T, S> LinkedList<T, S>
where
    S: ValueSemantics<T>,
{
    pub fn with_semantics(semantics: S) -> Self {
        Self::with_semantics_unchecked(semantics)
    }

    pub fn from_iter_with<I>(semantics: S, values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut list = Self::with_semantics(semantics);
        list.extend(values);
        list
    }

    fn key_of(&self, value: &T) -> Option<DefaultKey> {
        let mut cursor = self.head;
        while let Some(k) = cursor {
            let node = &self.nodes[k];
            if self.semantics.equals(&node.value, value) {
                return Some(k);
            }
            cursor = node.next;
        }
        None
    }

    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.iter()
            .position(|item| self.semantics.equals(item, value))
    }

    pub fn contains(&self, value: &T) -> bool {
        self.key_of(value).is_some()
    }

    /// Remove the first element equal to `value`.
    pub fn remove(&mut self, value: &T) -> Result<()> {
        match self.key_of(value) {
            Some(k) => {
                self.unlink(k);
                Ok(())
            }
            None => Err(CollectionError::not_found(&self.semantics, value)),
        }
    }

    pub fn hash_code(&self) -> u64 {
        list::sequence_hash(13001, &self.semantics, self.iter())
    }
}

impl<T, S> Collection<T> for LinkedList<T, S>
where
    S: ValueSemantics<T>,
{
    type Iter<'a>
        = Iter<'a, T>
    where
        Self: 'a,
        T: 'a;

    fn iter(&self) -> Self::Iter<'_> {
        LinkedList::iter(self)
    }

    fn len(&self) -> usize {
        LinkedList::len(self)
    }

    fn add(&mut self, value: T) -> Result<()> {
        self.push_back(value);
        Ok(())
    }

    fn remove(&mut self, value: &T) -> Result<()> {
        LinkedList::remove(self, value)
    }

    fn contains(&self, value: &T) -> bool {
        LinkedList::contains(self, value)
    }

    fn clear(&mut self) {
        LinkedList::clear(self)
    }
}

impl<T, S> List<T> for LinkedList<T, S>
where
    S: ValueSemantics<T>,
{
    fn index_of(&self, value: &T) -> Option<usize> {
        LinkedList::index_of(self, value)
    }

    fn get(&self, index: usize) -> Result<&T> {
        LinkedList::get(self, index)
    }

    fn insert(&mut self, index: usize, value: T) -> Result<()> {
        LinkedList::insert(self, index, value)
    }

    fn replace(&mut self, index: usize, value: T) -> Result<T> {
        LinkedList::replace(self, index, value)
    }

    fn remove_at(&mut self, index: usize) -> Result<T> {
        LinkedList::remove_at(self, index)
    }

    fn sort_by<C>(&mut self, comparator: &C)
    where
        C: Comparator<T> + ?Sized,
    {
        LinkedList::sort_by(self, comparator)
    }
}

impl<'a, T, S> IntoIterator for &'a LinkedList<T, S> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, S> IntoIterator for LinkedList<T, S> {
    type Item = T;
    type IntoIter = IntoIter<T, S>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<T, S> Extend<T> for LinkedList<T, S> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, values: I) {
        for value in values {
            self.push_back(value);
        }
    }
}

impl<T, S> FromIterator<T> for LinkedList<T, S>
where
    S: ValueSemantics<T> + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(values: I) -> Self {
        Self::from_iter_with(S::default(), values)
    }
}

impl<T, S> PartialEq for LinkedList<T, S>
where
    S: ValueSemantics<T>,
{
    fn eq(&self, other: &Self) -> bool {
        list::sequence_eq(&self.semantics, self.iter(), other.iter())
    }
}

impl<T, S> fmt::Display for LinkedList<T, S>
where
    S: ValueSemantics<T>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        list::write_sequence(f, &self.semantics, self.iter())
    }
}

impl<T: fmt::Debug, S> fmt::Debug for LinkedList<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(feature = "serde")]
impl<T, S> serde::Serialize for LinkedList<T, S>
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
impl<'de, T, S> serde::Deserialize<'de> for LinkedList<T, S>
where
    T: serde::Deserialize<'de>,
    S: ValueSemantics<T> + Default,
{
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let values = <Vec<T> as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from_iter_with(S::default(), values))
    }
}
