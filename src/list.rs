//! Positional sequences, plus the display/hash/equality rules every ordered
//! container shares.

use crate::collection::Collection;
use crate::error::Result;
use crate::semantics::{Comparator, Shown, ValueSemantics};
use core::fmt;

/// A collection addressed by position. `add` appends.
pub trait List<T>: Collection<T> {
    /// Position of the first element equal to `value`.
    fn index_of(&self, value: &T) -> Option<usize>;

    fn get(&self, index: usize) -> Result<&T>;

    /// Insert before `index`; `index == len` appends, anything larger is
    /// `OutOfBounds`.
    fn insert(&mut self, index: usize, value: T) -> Result<()>;

    /// Overwrite the element at `index`, returning the old one.
    fn replace(&mut self, index: usize, value: T) -> Result<T>;

    fn remove_at(&mut self, index: usize) -> Result<T>;

    /// Stable ascending sort under `comparator`.
    fn sort_by<C>(&mut self, comparator: &C)
    where
        Self: Sized,
        C: Comparator<T> + ?Sized;
}

/// `[a,b,c]` with each element shown through `semantics`.
pub(crate) fn write_sequence<'a, T, S, I>(
    f: &mut fmt::Formatter<'_>,
    semantics: &S,
    values: I,
) -> fmt::Result
where
    T: 'a,
    S: ValueSemantics<T>,
    I: IntoIterator<Item = &'a T>,
{
    f.write_str("[")?;
    for (i, value) in values.into_iter().enumerate() {
        if i > 0 {
            f.write_str(",")?;
        }
        write!(f, "{}", Shown::new(value, semantics))?;
    }
    f.write_str("]")
}

/// Wrapping product of element hashes, starting from `seed`.
pub(crate) fn sequence_hash<'a, T, S, I>(seed: u64, semantics: &S, values: I) -> u64
where
    T: 'a,
    S: ValueSemantics<T>,
    I: IntoIterator<Item = &'a T>,
{
    values
        .into_iter()
        .fold(seed, |acc, value| acc.wrapping_mul(semantics.hash_code(value)))
}

/// Positional equality of two equally long sequences.
pub(crate) fn sequence_eq<'a, T, S, A, B>(semantics: &S, a: A, b: B) -> bool
where
    T: 'a,
    S: ValueSemantics<T>,
    A: IntoIterator<Item = &'a T>,
    B: IntoIterator<Item = &'a T>,
{
    let mut a = a.into_iter();
    let mut b = b.into_iter();
    loop {
        match (a.next(), b.next()) {
            (Some(x), Some(y)) if semantics.equals(x, y) => {}
            (None, None) => return true,
            _ => return false,
        }
    }
}
