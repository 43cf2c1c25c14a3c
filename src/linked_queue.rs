//! LinkedQueue: FIFO adapter over `LinkedList` (offer at the back, pop at
//! the front).

use crate::collection::Collection;
use crate::error::{CollectionError, Result};
use crate::linked_list::{self, LinkedList};
use crate::list;
use crate::queue::Queue;
use crate::semantics::{Native, ValueSemantics};
use core::fmt;

#[derive(Clone)]
pub struct LinkedQueue<T, S = Native> {
    list: LinkedList<T, S>,
}

impl<T> LinkedQueue<T>
where
    Native: ValueSemantics<T>,
{
    pub fn new() -> Self {
        Self::with_semantics(Native::new())
    }
}

impl<T, S: Default> Default for LinkedQueue<T, S> {
    fn default() -> Self {
        Self {
            list: LinkedList::default(),
        }
    }
}

impl<T, S> LinkedQueue<T, S> {
    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Front to back, i.e. in pop order.
    pub fn iter(&self) -> linked_list::Iter<'_, T> {
        self.list.iter()
    }

    pub fn clear(&mut self) {
        self.list.clear();
    }

    pub fn offer(&mut self, value: T) {
        self.list.push_back(value);
    }

    pub fn peek(&self) -> Result<&T> {
        self.list
            .front()
            .ok_or_else(|| CollectionError::out_of_bounds(0, 0))
    }

    pub fn pop(&mut self) -> Result<T> {
        self.list
            .pop_front()
            .ok_or_else(|| CollectionError::out_of_bounds(0, 0))
    }
}

impl<T, S> LinkedQueue<T, S>
where
    S: ValueSemantics<T>,
{
    pub fn with_semantics(semantics: S) -> Self {
        Self {
            list: LinkedList::with_semantics(semantics),
        }
    }

    pub fn contains(&self, value: &T) -> bool {
        self.list.contains(value)
    }

    /// Remove the element equal to `value` nearest the front.
    pub fn remove(&mut self, value: &T) -> Result<()> {
        self.list.remove(value)
    }

    pub fn hash_code(&self) -> u64 {
        list::sequence_hash(13997, self.list.semantics(), self.iter())
    }
}

impl<T, S> Collection<T> for LinkedQueue<T, S>
where
    S: ValueSemantics<T>,
{
    type Iter<'a>
        = linked_list::Iter<'a, T>
    where
        Self: 'a,
        T: 'a;

    fn iter(&self) -> Self::Iter<'_> {
        self.list.iter()
    }

    fn len(&self) -> usize {
        self.list.len()
    }

    fn add(&mut self, value: T) -> Result<()> {
        LinkedQueue::offer(self, value);
        Ok(())
    }

    fn remove(&mut self, value: &T) -> Result<()> {
        LinkedQueue::remove(self, value)
    }

    fn contains(&self, value: &T) -> bool {
        LinkedQueue::contains(self, value)
    }

    fn clear(&mut self) {
        self.list.clear();
    }
}

impl<T, S> Queue<T> for LinkedQueue<T, S>
where
    S: ValueSemantics<T>,
{
    fn offer(&mut self, value: T) -> Result<()> {
        LinkedQueue::offer(self, value);
        Ok(())
    }

    fn peek(&self) -> Result<&T> {
        LinkedQueue::peek(self)
    }

    fn pop(&mut self) -> Result<T> {
        LinkedQueue::pop(self)
    }
}

impl<T, S> Extend<T> for LinkedQueue<T, S> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, values: I) {
        self.list.extend(values);
    }
}

impl<T, S> FromIterator<T> for LinkedQueue<T, S>
where
    S: ValueSemantics<T> + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(values: I) -> Self {
        Self {
            list: values.into_iter().collect(),
        }
    }
}

impl<T, S> PartialEq for LinkedQueue<T, S>
where
    S: ValueSemantics<T>,
{
    fn eq(&self, other: &Self) -> bool {
        self.list == other.list
    }
}

impl<T, S> fmt::Display for LinkedQueue<T, S>
where
    S: ValueSemantics<T>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.list, f)
    }
}

impl<T: fmt::Debug, S> fmt::Debug for LinkedQueue<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.list, f)
    }
}

#[cfg(feature = "serde")]
impl<T, S> serde::Serialize for LinkedQueue<T, S>
where
    T: serde::Serialize,
{
    fn serialize<Z>(&self, serializer: Z) -> core::result::Result<Z::Ok, Z::Error>
    where
        Z: serde::Serializer,
    {
        serde::Serialize::serialize(&self.list, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T, S> serde::Deserialize<'de> for LinkedQueue<T, S>
where
    T: serde::Deserialize<'de>,
    S: ValueSemantics<T> + Default,
{
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let list = <LinkedList<T, S> as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self { list })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    /// Invariant: elements leave in the order they were offered.
    #[test]
    fn fifo_order() {
        let mut q: LinkedQueue<&str> = LinkedQueue::new();
        q.offer("a");
        q.offer("b");
        q.offer("c");
        assert_eq!(q.peek(), Ok(&"a"));
        assert_eq!(q.len(), 3);
        assert_eq!(q.pop(), Ok("a"));
        assert_eq!(q.pop(), Ok("b"));
        q.offer("d");
        assert_eq!(q.pop(), Ok("c"));
        assert_eq!(q.pop(), Ok("d"));
        assert_eq!(q.pop().unwrap_err().kind(), ErrorKind::OutOfBounds);
        assert_eq!(q.peek().unwrap_err().kind(), ErrorKind::OutOfBounds);
    }

    /// Invariant: through the `Queue` trait, `add` and `offer` both enqueue
    /// at the back and removal by value keeps the remaining order.
    #[test]
    fn queue_trait_and_remove() {
        fn fill<Q: Queue<i32>>(q: &mut Q) {
            q.add(1).unwrap();
            Queue::offer(q, 2).unwrap();
            q.add(3).unwrap();
        }
        let mut q: LinkedQueue<i32> = LinkedQueue::new();
        fill(&mut q);
        q.remove(&2).unwrap();
        assert!(!q.contains(&2));
        assert_eq!(q.to_string(), "[1,3]");
        assert_eq!(q.iter().copied().collect::<Vec<_>>(), vec![1, 3]);
    }

    /// Invariant: equality is positional and clones are independent.
    #[test]
    fn clone_and_equality() {
        let q: LinkedQueue<i32> = (1..=3).collect();
        let mut r = q.clone();
        assert!(q == r);
        assert_eq!(q.hash_code(), r.hash_code());
        r.pop().unwrap();
        assert!(q != r);
        assert_eq!(q.len(), 3);
    }
}
