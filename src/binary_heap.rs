//! Array-backed binary min-heap under a caller-supplied comparator.
//!
//! The comparator is passed to every ordering operation rather than
//! stored, so the same engine serves owned queues and the borrowed
//! snapshots their iterators drain.
//!
//! Invariant: for every `i > 0`,
//! `compare(items[(i - 1) / 2], items[i]) != Greater`.

use crate::semantics::Comparator;
use core::cmp::Ordering;

#[derive(Clone, Debug)]
pub(crate) struct BinaryHeap<T> {
    items: Vec<T>,
}

impl<T> BinaryHeap<T> {
    pub(crate) fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Heapify `items` bottom-up.
    pub(crate) fn from_vec<C>(items: Vec<T>, comparator: &C) -> Self
    where
        C: Comparator<T> + ?Sized,
    {
        let mut heap = Self { items };
        for ix in (0..heap.items.len() / 2).rev() {
            heap.sift_down(ix, comparator);
        }
        heap
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Elements in heap-array order.
    pub(crate) fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub(crate) fn clear(&mut self) {
        self.items.clear();
    }

    pub(crate) fn into_vec(self) -> Vec<T> {
        self.items
    }

    pub(crate) fn peek(&self) -> Option<&T> {
        self.items.first()
    }

    pub(crate) fn position(&self, mut pred: impl FnMut(&T) -> bool) -> Option<usize> {
        self.items.iter().position(|item| pred(item))
    }

    pub(crate) fn push<C>(&mut self, value: T, comparator: &C)
    where
        C: Comparator<T> + ?Sized,
    {
        self.items.push(value);
        self.sift_up(self.items.len() - 1, comparator);
    }

    pub(crate) fn pop<C>(&mut self, comparator: &C) -> Option<T>
    where
        C: Comparator<T> + ?Sized,
    {
        self.remove_at(0, comparator)
    }

    /// Remove the element at heap-array position `index`. The last element
    /// takes its place and moves whichever way restores the order.
    pub(crate) fn remove_at<C>(&mut self, index: usize, comparator: &C) -> Option<T>
    where
        C: Comparator<T> + ?Sized,
    {
        if index >= self.items.len() {
            return None;
        }
        let removed = self.items.swap_remove(index);
        if index < self.items.len() && self.sift_down(index, comparator) == index {
            self.sift_up(index, comparator);
        }
        Some(removed)
    }

    pub(crate) fn is_heap<C>(&self, comparator: &C) -> bool
    where
        C: Comparator<T> + ?Sized,
    {
        (1..self.items.len()).all(|ix| {
            comparator.compare(&self.items[(ix - 1) / 2], &self.items[ix]) != Ordering::Greater
        })
    }

    fn sift_up<C>(&mut self, mut ix: usize, comparator: &C) -> usize
    where
        C: Comparator<T> + ?Sized,
    {
        while ix > 0 {
            let parent = (ix - 1) / 2;
            if comparator.compare(&self.items[ix], &self.items[parent]) != Ordering::Less {
                break;
            }
            self.items.swap(ix, parent);
            ix = parent;
        }
        ix
    }

    fn sift_down<C>(&mut self, mut ix: usize, comparator: &C) -> usize
    where
        C: Comparator<T> + ?Sized,
    {
        let len = self.items.len();
        loop {
            let left = 2 * ix + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let child = if right < len
                && comparator.compare(&self.items[right], &self.items[left]) == Ordering::Less
            {
                right
            } else {
                left
            };
            if comparator.compare(&self.items[child], &self.items[ix]) != Ordering::Less {
                break;
            }
            self.items.swap(ix, child);
            ix = child;
        }
        ix
    }
}

/// Lifts a comparator over `T` to one over `&T`.
struct ByRef<'a, C: ?Sized>(&'a C);

impl<'a, 'b, T: ?Sized, C> Comparator<&'b T> for ByRef<'a, C>
where
    C: Comparator<T> + ?Sized,
{
    fn compare(&self, a: &&'b T, b: &&'b T) -> Ordering {
        self.0.compare(*a, *b)
    }
}

/// Borrowing ascending iterator: pops from a heap of references so the
/// source heap is untouched.
pub struct Sorted<'a, T, C: ?Sized> {
    heap: BinaryHeap<&'a T>,
    comparator: &'a C,
}

impl<'a, T, C: ?Sized> Sorted<'a, T, C> {
    pub(crate) fn new(source: &'a BinaryHeap<T>, comparator: &'a C) -> Self {
        // A heap's array stays a heap when every element is replaced by a
        // reference to itself.
        Self {
            heap: BinaryHeap {
                items: source.items.iter().collect(),
            },
            comparator,
        }
    }
}

impl<'a, T, C> Clone for Sorted<'a, T, C>
where
    C: ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            heap: self.heap.clone(),
            comparator: self.comparator,
        }
    }
}

impl<'a, T, C> Iterator for Sorted<'a, T, C>
where
    C: Comparator<T> + ?Sized,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.heap.pop(&ByRef(self.comparator))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.heap.len(), Some(self.heap.len()))
    }
}

impl<'a, T, C> ExactSizeIterator for Sorted<'a, T, C> where C: Comparator<T> + ?Sized {}
