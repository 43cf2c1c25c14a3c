//! ArrayList: a contiguous sequence with semantics-based lookup.

use crate::collection::Collection;
use crate::error::{CollectionError, Result};
use crate::list::{self, List};
use crate::semantics::{Comparator, Native, ValueSemantics};
use core::fmt;
use core::ops::Index;

#[derive(Clone)]
pub struct ArrayList<T, S = Native> {
    items: Vec<T>,
    semantics: S,
}

impl<T> ArrayList<T>
where
    Native: ValueSemantics<T>,
{
    pub fn new() -> Self {
        Self::with_semantics(Native::new())
    }
}

impl<T, S: Default> Default for ArrayList<T, S> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            semantics: S::default(),
        }
    }
}

impl<T, S> ArrayList<T, S> {
    pub fn semantics(&self) -> &S {
        &self.semantics
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    pub fn get(&self, index: usize) -> Result<&T> {
        self.items
            .get(index)
            .ok_or_else(|| CollectionError::out_of_bounds(index, self.items.len()))
    }

    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        if index > self.items.len() {
            return Err(CollectionError::out_of_bounds(index, self.items.len()));
        }
        self.items.insert(index, value);
        Ok(())
    }

    pub fn replace(&mut self, index: usize, value: T) -> Result<T> {
        let len = self.items.len();
        let slot = self
            .items
            .get_mut(index)
            .ok_or_else(|| CollectionError::out_of_bounds(index, len))?;
        Ok(core::mem::replace(slot, value))
    }

    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        if index >= self.items.len() {
            return Err(CollectionError::out_of_bounds(index, self.items.len()));
        }
        Ok(self.items.remove(index))
    }

    pub fn sort_by<C>(&mut self, comparator: &C)
    where
        C: Comparator<T> + ?Sized,
    {
        self.items.sort_by(|a, b| comparator.compare(a, b));
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T, S> ArrayList<T, S>
where
    S: ValueSemantics<T>,
{
    pub fn with_semantics(semantics: S) -> Self {
        Self {
            items: Vec::new(),
            semantics,
        }
    }

    pub fn from_iter_with<I>(semantics: S, values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self {
            items: values.into_iter().collect(),
            semantics,
        }
    }

    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.items
            .iter()
            .position(|item| self.semantics.equals(item, value))
    }

    pub fn contains(&self, value: &T) -> bool {
        self.index_of(value).is_some()
    }

    /// Remove the first element equal to `value`.
    pub fn remove(&mut self, value: &T) -> Result<()> {
        match self.index_of(value) {
            Some(ix) => {
                self.items.remove(ix);
                Ok(())
            }
            None => Err(CollectionError::not_found(&self.semantics, value)),
        }
    }

    pub fn hash_code(&self) -> u64 {
        list::sequence_hash(13001, &self.semantics, &self.items)
    }
}

impl<T, S> Collection<T> for ArrayList<T, S>
where
    S: ValueSemantics<T>,
{
    type Iter<'a>
        = core::slice::Iter<'a, T>
    where
        Self: 'a,
        T: 'a;

    fn iter(&self) -> Self::Iter<'_> {
        self.items.iter()
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn add(&mut self, value: T) -> Result<()> {
        self.items.push(value);
        Ok(())
    }

    fn remove(&mut self, value: &T) -> Result<()> {
        ArrayList::remove(self, value)
    }

    fn contains(&self, value: &T) -> bool {
        ArrayList::contains(self, value)
    }

    fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T, S> List<T> for ArrayList<T, S>
where
    S: ValueSemantics<T>,
{
    fn index_of(&self, value: &T) -> Option<usize> {
        ArrayList::index_of(self, value)
    }

    fn get(&self, index: usize) -> Result<&T> {
        ArrayList::get(self, index)
    }

    fn insert(&mut self, index: usize, value: T) -> Result<()> {
        ArrayList::insert(self, index, value)
    }

    fn replace(&mut self, index: usize, value: T) -> Result<T> {
        ArrayList::replace(self, index, value)
    }

    fn remove_at(&mut self, index: usize) -> Result<T> {
        ArrayList::remove_at(self, index)
    }

    fn sort_by<C>(&mut self, comparator: &C)
    where
        C: Comparator<T> + ?Sized,
    {
        ArrayList::sort_by(self, comparator)
    }
}

impl<T, S> Index<usize> for ArrayList<T, S> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<'a, T, S> IntoIterator for &'a ArrayList<T, S> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T, S> Extend<T> for ArrayList<T, S> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, values: I) {
        self.items.extend(values);
    }
}

impl<T, S> FromIterator<T> for ArrayList<T, S>
where
    S: ValueSemantics<T> + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(values: I) -> Self {
        Self::from_iter_with(S::default(), values)
    }
}

impl<T, S> PartialEq for ArrayList<T, S>
where
    S: ValueSemantics<T>,
{
    fn eq(&self, other: &Self) -> bool {
        list::sequence_eq(&self.semantics, &self.items, &other.items)
    }
}

impl<T, S> fmt::Display for ArrayList<T, S>
where
    S: ValueSemantics<T>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        list::write_sequence(f, &self.semantics, &self.items)
    }
}

impl<T: fmt::Debug, S> fmt::Debug for ArrayList<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

#[cfg(feature = "serde")]
impl<T, S> serde::Serialize for ArrayList<T, S>
where
    T: serde::Serialize,
{
    fn serialize<Z>(&self, serializer: Z) -> core::result::Result<Z::Ok, Z::Error>
    where
        Z: serde::Serializer,
    {
        serializer.collect_seq(self.items.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, T, S> serde::Deserialize<'de> for ArrayList<T, S>
where
    T: serde::Deserialize<'de>,
    S: ValueSemantics<T> + Default,
{
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let items = <Vec<T> as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from_iter_with(S::default(), items))
    }
}
