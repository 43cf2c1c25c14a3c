//! Queue and stack contracts.
//!
//! Both read and remove at one end only; an empty `peek` or `pop` is
//! `OutOfBounds`.

use crate::collection::Collection;
use crate::error::Result;

/// Elements leave in queue order: FIFO for `LinkedQueue`, comparator order
/// for `PriorityQueue`.
pub trait Queue<T>: Collection<T> {
    fn offer(&mut self, value: T) -> Result<()>;

    /// The element `pop` would return next.
    fn peek(&self) -> Result<&T>;

    fn pop(&mut self) -> Result<T>;
}

/// Elements leave in LIFO order.
pub trait Stack<T>: Collection<T> {
    fn push(&mut self, value: T) -> Result<()>;

    /// The element `pop` would return next.
    fn peek(&self) -> Result<&T>;

    fn pop(&mut self) -> Result<T>;
}
