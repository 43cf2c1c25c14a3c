//! PriorityQueue: a binary heap ordered by a comparator, with lookup and
//! removal by value through the element semantics.
//!
//! `pop` always returns the least element under the comparator; ties leave
//! in no particular order. Iteration never disturbs the queue: it drains a
//! heap of references to the stored elements.

use crate::binary_heap::{BinaryHeap, Sorted};
use crate::collection::Collection;
use crate::error::{CollectionError, Result};
use crate::list;
use crate::queue::Queue;
use crate::semantics::{Comparator, Native, NaturalOrder, ValueSemantics};
use core::fmt;

/// Ascending borrowed iterator over a queue.
pub type Iter<'a, T, C> = Sorted<'a, T, C>;

#[derive(Clone)]
pub struct PriorityQueue<T, C = NaturalOrder, S = Native> {
    heap: BinaryHeap<T>,
    comparator: C,
    semantics: S,
}

impl<T> PriorityQueue<T>
where
    T: Ord,
    Native: ValueSemantics<T>,
{
    pub fn new() -> Self {
        Self::with_comparator_and_semantics(NaturalOrder, Native::new())
    }
}

impl<T, C> PriorityQueue<T, C>
where
    C: Comparator<T>,
    Native: ValueSemantics<T>,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self::with_comparator_and_semantics(comparator, Native::new())
    }
}

impl<T, C: Default, S: Default> Default for PriorityQueue<T, C, S> {
    fn default() -> Self {
        Self {
            heap: BinaryHeap::new(),
            comparator: C::default(),
            semantics: S::default(),
        }
    }
}

impl<T, C, S> PriorityQueue<T, C, S> {
    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    pub fn semantics(&self) -> &S {
        &self.semantics
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn clear(&mut self) {
        self.heap.clear();
    }

    /// Elements in internal heap order; only the first is meaningful.
    pub fn as_unordered_slice(&self) -> &[T] {
        self.heap.as_slice()
    }

    /// The least element, without removing it.
    pub fn peek(&self) -> Result<&T> {
        self.heap
            .peek()
            .ok_or_else(|| CollectionError::out_of_bounds(0, 0))
    }
}

impl<T, C, S> PriorityQueue<T, C, S>
where
    C: Comparator<T>,
{
    pub fn offer(&mut self, value: T) {
        self.heap.push(value, &self.comparator);
    }

    /// Remove and return the least element.
    pub fn pop(&mut self) -> Result<T> {
        self.heap
            .pop(&self.comparator)
            .ok_or_else(|| CollectionError::out_of_bounds(0, 0))
    }

    /// Ascending snapshot; the queue itself is left untouched.
    pub fn iter(&self) -> Iter<'_, T, C> {
        Sorted::new(&self.heap, &self.comparator)
    }

    pub fn into_sorted_vec(self) -> Vec<T> {
        self.into_iter().collect()
    }

    pub fn is_heap(&self) -> bool {
        self.heap.is_heap(&self.comparator)
    }
}

impl<T, C, S> PriorityQueue<T, C, S>
where
    C: Comparator<T>,
    S: ValueSemantics<T>,
{
    pub fn with_comparator_and_semantics(comparator: C, semantics: S) -> Self {
        Self {
            heap: BinaryHeap::new(),
            comparator,
            semantics,
        }
    }

    /// Build a queue from `values` in one heapify pass.
    pub fn from_iter_with<I>(comparator: C, semantics: S, values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let heap = BinaryHeap::from_vec(values.into_iter().collect(), &comparator);
        Self {
            heap,
            comparator,
            semantics,
        }
    }

    pub fn contains(&self, value: &T) -> bool {
        self.position(value).is_some()
    }

    /// Remove one element equal to `value` under the semantics.
    pub fn remove(&mut self, value: &T) -> Result<()> {
        let ix = self
            .position(value)
            .ok_or_else(|| CollectionError::not_found(&self.semantics, value))?;
        self.heap.remove_at(ix, &self.comparator);
        Ok(())
    }

    pub fn hash_code(&self) -> u64 {
        list::sequence_hash(13997, &self.semantics, self.heap.as_slice())
    }

    fn position(&self, value: &T) -> Option<usize> {
        self.heap
            .position(|item| self.semantics.equals(item, value))
    }
}

impl<T, C, S> Collection<T> for PriorityQueue<T, C, S>
where
    C: Comparator<T>,
    S: ValueSemantics<T>,
{
    type Iter<'a>
        = Iter<'a, T, C>
    where
        Self: 'a,
        T: 'a;

    fn iter(&self) -> Self::Iter<'_> {
        PriorityQueue::iter(self)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn add(&mut self, value: T) -> Result<()> {
        PriorityQueue::offer(self, value);
        Ok(())
    }

    fn remove(&mut self, value: &T) -> Result<()> {
        PriorityQueue::remove(self, value)
    }

    fn contains(&self, value: &T) -> bool {
        PriorityQueue::contains(self, value)
    }

    fn clear(&mut self) {
        self.heap.clear();
    }
}

impl<T, C, S> Queue<T> for PriorityQueue<T, C, S>
where
    C: Comparator<T>,
    S: ValueSemantics<T>,
{
    fn offer(&mut self, value: T) -> Result<()> {
        PriorityQueue::offer(self, value);
        Ok(())
    }

    fn peek(&self) -> Result<&T> {
        PriorityQueue::peek(self)
    }

    fn pop(&mut self) -> Result<T> {
        PriorityQueue::pop(self)
    }
}

/// Owning ascending iterator.
pub struct IntoIter<T, C> {
    heap: BinaryHeap<T>,
    comparator: C,
}

impl<T, C: Comparator<T>> Iterator for IntoIter<T, C> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.heap.pop(&self.comparator)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.heap.len(), Some(self.heap.len()))
    }
}

impl<T, C: Comparator<T>> ExactSizeIterator for IntoIter<T, C> {}

impl<T, C, S> IntoIterator for PriorityQueue<T, C, S>
where
    C: Comparator<T>,
{
    type Item = T;
    type IntoIter = IntoIter<T, C>;

    fn into_iter(self) -> IntoIter<T, C> {
        IntoIter {
            heap: self.heap,
            comparator: self.comparator,
        }
    }
}

impl<'a, T, C, S> IntoIterator for &'a PriorityQueue<T, C, S>
where
    C: Comparator<T>,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, C, S> Extend<T> for PriorityQueue<T, C, S>
where
    C: Comparator<T>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, values: I) {
        for value in values {
            self.heap.push(value, &self.comparator);
        }
    }
}

impl<T, C, S> FromIterator<T> for PriorityQueue<T, C, S>
where
    C: Comparator<T> + Default,
    S: ValueSemantics<T> + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(values: I) -> Self {
        Self::from_iter_with(C::default(), S::default(), values)
    }
}

/// Equal when both drain to semantically equal sequences.
impl<T, C, S> PartialEq for PriorityQueue<T, C, S>
where
    C: Comparator<T>,
    S: ValueSemantics<T>,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && list::sequence_eq(&self.semantics, self.iter(), other.iter())
    }
}

/// Elements in pop order.
impl<T, C, S> fmt::Display for PriorityQueue<T, C, S>
where
    C: Comparator<T>,
    S: ValueSemantics<T>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        list::write_sequence(f, &self.semantics, self.iter())
    }
}

impl<T: fmt::Debug, C, S> fmt::Debug for PriorityQueue<T, C, S>
where
    C: Comparator<T>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Serialized in pop order; deserializing re-heapifies under the default
/// comparator.
#[cfg(feature = "serde")]
impl<T, C, S> serde::Serialize for PriorityQueue<T, C, S>
where
    T: serde::Serialize,
    C: Comparator<T>,
{
    fn serialize<Z>(&self, serializer: Z) -> core::result::Result<Z::Ok, Z::Error>
    where
        Z: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, T, C, S> serde::Deserialize<'de> for PriorityQueue<T, C, S>
where
    T: serde::Deserialize<'de>,
    C: Comparator<T> + Default,
    S: ValueSemantics<T> + Default,
{
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let items = <Vec<T> as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from_iter_with(C::default(), S::default(), items))
    }
}
