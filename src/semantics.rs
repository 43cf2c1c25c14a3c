//! Value semantics: equality, hashing, display and ordering supplied by the
//! caller instead of taken from the element type.
//!
//! Every container in this crate stores one `ValueSemantics` instance (two
//! for maps) and routes every equality and hash decision through it. The
//! element type itself is never compared structurally.
//!
//! Contract (caller's responsibility, not checked):
//! - `equals` is reflexive, symmetric and transitive.
//! - `equals(a, b)` implies `hash_code(a) == hash_code(b)`.
//! - `Comparator::compare` is a strict weak ordering.

use core::cmp::Ordering;
use core::fmt;
use core::hash::{BuildHasher, Hash};
use hashbrown::hash_map::DefaultHashBuilder;

/// Equality, hashing and display for values of type `T`.
pub trait ValueSemantics<T: ?Sized> {
    fn equals(&self, a: &T, b: &T) -> bool;

    fn hash_code(&self, value: &T) -> u64;

    /// Write the display form of `value`.
    fn format(&self, value: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result;

    /// Owned display form of `value`; used when building error values.
    fn render(&self, value: &T) -> String {
        Shown::new(value, self).to_string()
    }
}

impl<T, S> ValueSemantics<T> for &S
where
    T: ?Sized,
    S: ValueSemantics<T> + ?Sized,
{
    #[inline]
    fn equals(&self, a: &T, b: &T) -> bool {
        (**self).equals(a, b)
    }

    #[inline]
    fn hash_code(&self, value: &T) -> u64 {
        (**self).hash_code(value)
    }

    fn format(&self, value: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).format(value, f)
    }
}

/// Total order over values of type `T`.
///
/// Closures `Fn(&T, &T) -> Ordering` are comparators.
pub trait Comparator<T: ?Sized> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T, F> Comparator<T> for F
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// `Display` adapter pairing a value with the semantics that knows how to
/// print it.
pub struct Shown<'a, T: ?Sized, S: ?Sized> {
    value: &'a T,
    semantics: &'a S,
}

impl<'a, T: ?Sized, S: ?Sized> Shown<'a, T, S> {
    pub fn new(value: &'a T, semantics: &'a S) -> Self {
        Self { value, semantics }
    }
}

impl<T, S> fmt::Display for Shown<'_, T, S>
where
    T: ?Sized,
    S: ValueSemantics<T> + ?Sized,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.semantics.format(self.value, f)
    }
}

/// Semantics taken from the element's own `Eq`, `Hash` and `Display`.
///
/// Hashes go through a stored `BuildHasher`, so a value hashes the same for
/// the lifetime of this instance and of its clones. Containers clone their
/// semantics on copy, which keeps bucket placement valid in the copy.
#[derive(Clone, Debug, Default)]
pub struct Native<H = DefaultHashBuilder> {
    hasher: H,
}

impl Native {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<H> Native<H> {
    pub fn with_hasher(hasher: H) -> Self {
        Self { hasher }
    }
}

impl<T, H> ValueSemantics<T> for Native<H>
where
    T: ?Sized + Eq + Hash + fmt::Display,
    H: BuildHasher,
{
    #[inline]
    fn equals(&self, a: &T, b: &T) -> bool {
        a == b
    }

    #[inline]
    fn hash_code(&self, value: &T) -> u64 {
        self.hasher.hash_one(value)
    }

    fn format(&self, value: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(value, f)
    }
}

/// Semantics of a projected key: two values are equal when their keys are.
///
/// ```
/// use semcoll::{ByKey, HashSet};
///
/// let mut names = HashSet::with_semantics(ByKey::new(|s: &String| s.to_lowercase()));
/// names.add("Ada".to_string()).unwrap();
/// assert!(names.add("ADA".to_string()).is_err());
/// ```
#[derive(Clone, Debug)]
pub struct ByKey<F, H = DefaultHashBuilder> {
    key: F,
    hasher: H,
}

impl<F> ByKey<F> {
    pub fn new(key: F) -> Self {
        Self {
            key,
            hasher: DefaultHashBuilder::default(),
        }
    }
}

impl<F, H> ByKey<F, H> {
    pub fn with_hasher(key: F, hasher: H) -> Self {
        Self { key, hasher }
    }
}

impl<T, K, F, H> ValueSemantics<T> for ByKey<F, H>
where
    T: ?Sized,
    F: Fn(&T) -> K,
    K: Eq + Hash + fmt::Display,
    H: BuildHasher,
{
    fn equals(&self, a: &T, b: &T) -> bool {
        (self.key)(a) == (self.key)(b)
    }

    fn hash_code(&self, value: &T) -> u64 {
        self.hasher.hash_one((self.key)(value))
    }

    fn format(&self, value: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&(self.key)(value), f)
    }
}

/// Ascending order of the element's own `Ord`.
#[derive(Clone, Copy, Debug, Default)]
pub struct NaturalOrder;

impl<T: ?Sized + Ord> Comparator<T> for NaturalOrder {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Inverts another comparator; turns a min-queue into a max-queue.
#[derive(Clone, Copy, Debug, Default)]
pub struct ReverseOrder<C>(pub C);

impl<T: ?Sized, C: Comparator<T>> Comparator<T> for ReverseOrder<C> {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Invariant: equal values hash equally under `Native`, and clones of a
    /// `Native` instance agree on every hash.
    #[test]
    fn native_hash_is_stable_across_clones() {
        let s = Native::new();
        let t = s.clone();
        let a = "alpha".to_string();
        let b = "alpha".to_string();
        assert!(ValueSemantics::<String>::equals(&s, &a, &b));
        assert_eq!(s.hash_code(&a), s.hash_code(&b));
        assert_eq!(s.hash_code(&a), t.hash_code(&a));
        assert_eq!(s.render(&a), "alpha");
    }

    /// Invariant: `ByKey` equality, hash and display all go through the
    /// projection.
    #[test]
    fn by_key_projects_before_comparing() {
        let s = ByKey::new(|v: &(u32, &'static str)| v.0);
        let a = (7, "seven");
        let b = (7, "SEVEN");
        let c = (8, "seven");
        assert!(s.equals(&a, &b));
        assert!(!s.equals(&a, &c));
        assert_eq!(s.hash_code(&a), s.hash_code(&b));
        assert_eq!(s.render(&a), "7");
    }

    /// Invariant: closures, `NaturalOrder` and `ReverseOrder` agree with the
    /// orderings they describe.
    #[test]
    fn comparators() {
        let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
        assert_eq!(by_len.compare(&"ab", &"abc"), Ordering::Less);
        assert_eq!(NaturalOrder.compare(&1, &2), Ordering::Less);
        assert_eq!(ReverseOrder(NaturalOrder).compare(&1, &2), Ordering::Greater);
        assert_eq!(NaturalOrder.compare("b", "a"), Ordering::Greater);
    }

    /// Invariant: `Shown` prints through the semantics, not the value's own
    /// `Display`.
    #[test]
    fn shown_uses_semantics() {
        let s = ByKey::new(|v: &i32| v * 10);
        assert_eq!(Shown::new(&4, &s).to_string(), "40");
        assert_eq!(format!("<{}>", Shown::new(&4, &&s)), "<40>");
    }
}
