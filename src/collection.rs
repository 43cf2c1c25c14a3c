//! The contract every container implements, and the bulk helpers built on it.
//!
//! The bulk helpers are best-effort: they visit every element of the source
//! once, keep going after a failure and report all failures together as one
//! `CollectionError::Aggregate`. Elements accepted before a failure stay in
//! the target; nothing is rolled back.

use crate::error::{CollectionError, Result};
use tracing::{debug, trace};

/// Operations shared by every container in the crate.
///
/// `iter` yields each element once; it can be called again for a fresh pass.
/// Copying a container is `Clone::clone`.
pub trait Collection<T> {
    type Iter<'a>: Iterator<Item = &'a T>
    where
        Self: 'a,
        T: 'a;

    fn iter(&self) -> Self::Iter<'_>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn add(&mut self, value: T) -> Result<()>;

    /// Remove one element equal to `value` under the container's semantics.
    fn remove(&mut self, value: &T) -> Result<()>;

    fn contains(&self, value: &T) -> bool;

    fn clear(&mut self);

    fn add_all<C>(&mut self, other: &C) -> Result<()>
    where
        Self: Sized,
        C: Collection<T> + ?Sized,
        T: Clone,
    {
        add_all(self, other)
    }

    fn remove_all<C>(&mut self, other: &C) -> Result<()>
    where
        Self: Sized,
        C: Collection<T> + ?Sized,
    {
        remove_all(self, other)
    }

    fn contains_all<C>(&self, other: &C) -> bool
    where
        Self: Sized,
        C: Collection<T> + ?Sized,
    {
        contains_all(self, other)
    }
}

/// Add a clone of every element of `other` to `target`.
pub fn add_all<T, C, O>(target: &mut C, other: &O) -> Result<()>
where
    T: Clone,
    C: Collection<T> + ?Sized,
    O: Collection<T> + ?Sized,
{
    trace!(count = other.len(), "add_all");
    let failures: Vec<CollectionError> = other
        .iter()
        .filter_map(|value| target.add(value.clone()).err())
        .collect();
    report("add_all", failures)
}

/// Remove from `target` every element of `other`, attempting all of them.
pub fn remove_all<T, C, O>(target: &mut C, other: &O) -> Result<()>
where
    C: Collection<T> + ?Sized,
    O: Collection<T> + ?Sized,
{
    trace!(count = other.len(), "remove_all");
    let failures: Vec<CollectionError> = other
        .iter()
        .filter_map(|value| target.remove(value).err())
        .collect();
    report("remove_all", failures)
}

/// Whether `target` contains every element of `other`; stops at the first
/// missing one.
pub fn contains_all<T, C, O>(target: &C, other: &O) -> bool
where
    C: Collection<T> + ?Sized,
    O: Collection<T> + ?Sized,
{
    other.iter().all(|value| target.contains(value))
}

fn report(operation: &'static str, failures: Vec<CollectionError>) -> Result<()> {
    if !failures.is_empty() {
        debug!(operation, failed = failures.len(), "bulk operation incomplete");
    }
    CollectionError::aggregate(failures)
}
