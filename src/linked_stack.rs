//! LinkedStack: LIFO adapter over `LinkedList`; the top is the list front.

use crate::collection::Collection;
use crate::error::{CollectionError, Result};
use crate::linked_list::{self, LinkedList};
use crate::list;
use crate::queue::Stack;
use crate::semantics::{Native, ValueSemantics};
use core::fmt;

#[derive(Clone)]
pub struct LinkedStack<T, S = Native> {
    list: LinkedList<T, S>,
}

impl<T> LinkedStack<T>
where
    Native: ValueSemantics<T>,
{
    pub fn new() -> Self {
        Self::with_semantics(Native::new())
    }
}

impl<T, S: Default> Default for LinkedStack<T, S> {
    fn default() -> Self {
        Self {
            list: LinkedList::default(),
        }
    }
}

impl<T, S> LinkedStack<T, S> {
    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Top to bottom, i.e. in pop order.
    pub fn iter(&self) -> linked_list::Iter<'_, T> {
        self.list.iter()
    }

    pub fn clear(&mut self) {
        self.list.clear();
    }

    pub fn push(&mut self, value: T) {
        self.list.push_front(value);
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

impl<T, S> LinkedStack<T, S>
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

    /// Remove the element equal to `value` nearest the top.
    pub fn remove(&mut self, value: &T) -> Result<()> {
        self.list.remove(value)
    }

    pub fn hash_code(&self) -> u64 {
        list::sequence_hash(13997, self.list.semantics(), self.iter())
    }
}

impl<T, S> Collection<T> for LinkedStack<T, S>
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
        LinkedStack::push(self, value);
        Ok(())
    }

    fn remove(&mut self, value: &T) -> Result<()> {
        LinkedStack::remove(self, value)
    }

    fn contains(&self, value: &T) -> bool {
        LinkedStack::contains(self, value)
    }

    fn clear(&mut self) {
        self.list.clear();
    }
}

impl<T, S> Stack<T> for LinkedStack<T, S>
where
    S: ValueSemantics<T>,
{
    fn push(&mut self, value: T) -> Result<()> {
        LinkedStack::push(self, value);
        Ok(())
    }

    fn peek(&self) -> Result<&T> {
        LinkedStack::peek(self)
    }

    fn pop(&mut self) -> Result<T> {
        LinkedStack::pop(self)
    }
}

/// Pushes in iteration order, so the last value ends on top.
impl<T, S> Extend<T> for LinkedStack<T, S> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, values: I) {
        for value in values {
            self.list.push_front(value);
        }
    }
}

impl<T, S> FromIterator<T> for LinkedStack<T, S>
where
    S: ValueSemantics<T> + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(values: I) -> Self {
        let mut stack = Self::default();
        stack.extend(values);
        stack
    }
}

impl<T, S> PartialEq for LinkedStack<T, S>
where
    S: ValueSemantics<T>,
{
    fn eq(&self, other: &Self) -> bool {
        self.list == other.list
    }
}

impl<T, S> fmt::Display for LinkedStack<T, S>
where
    S: ValueSemantics<T>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.list, f)
    }
}

impl<T: fmt::Debug, S> fmt::Debug for LinkedStack<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.list, f)
    }
}

/// Serialized top first and restored in the same order.
#[cfg(feature = "serde")]
impl<T, S> serde::Serialize for LinkedStack<T, S>
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
impl<'de, T, S> serde::Deserialize<'de> for LinkedStack<T, S>
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
