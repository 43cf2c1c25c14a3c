//! semcoll: hash-bucketed sets and maps, a binary-heap priority queue and
//! sequence containers whose notion of equality, hashing and display is
//! supplied by the caller instead of taken from `Eq`/`Hash`/`Display`.
//!
//! Internal Design:
//!
//! Summary
//! - Every container carries a `ValueSemantics<T>` value. Membership,
//!   bucket selection, rendering in errors and `Display` all go through
//!   it; `Native` forwards to the element's own impls.
//! - Ordered containers additionally take a `Comparator<T>`; ordering and
//!   identity are independent (a priority queue may order by one key and
//!   look up by another).
//! - Layers:
//!   - `buckets::Buckets<E>`: hash -> chain table. Callers hand in the
//!     hash and an equality closure; the table never calls user code on
//!     its own and never rehashes stored elements.
//!   - `HashSet<T, S>` and `HashMap<K, V, KS, VS>`: thin layers over
//!     `Buckets` that compute hashes through their semantics. A map is a
//!     set of `Entry<K, V>` keyed on the entry's key.
//!   - `binary_heap::BinaryHeap<T>`: array heap; the comparator is passed
//!     per call. `PriorityQueue<T, C, S>` owns one plus its comparator.
//!   - `ArrayList<T, S>` over `Vec`, `LinkedList<T, S>` over a slotmap of
//!     nodes; `LinkedQueue` and `LinkedStack` adapt the linked list.
//!
//! Constraints
//! - Duplicate inserts into sets and maps fail with `AlreadyExists`;
//!   nothing is overwritten except through the explicit replace calls.
//! - Bulk operations (`add_all`, `remove_all`, `contains_all`) try every
//!   element and report all failures together as one `Aggregate` error.
//! - A `ValueSemantics` must be consistent: `equals(a, b)` implies
//!   `hash_code(a) == hash_code(b)`. Violations do not cause UB, only
//!   missed lookups.
//!
//! Notes and non-goals
//! - Single-threaded containers; no interior mutability and no locking.
//! - Hash chains are never rebalanced; the outer table grows as
//!   hashbrown decides.
//! - Iteration order of sets and maps is unspecified. Priority queues
//!   iterate in pop order without consuming themselves.

mod binary_heap;
mod buckets;

pub mod array_list;
pub mod collection;
pub mod error;
pub mod hash_map;
pub mod hash_set;
pub mod linked_list;
pub mod linked_queue;
pub mod linked_stack;
pub mod list;
pub mod priority_queue;
pub mod queue;
pub mod semantics;

// Public surface
pub use array_list::ArrayList;
pub use collection::{add_all, contains_all, remove_all, Collection};
pub use error::{CollectionError, ErrorKind, Result};
pub use hash_map::{Entry, EntrySemantics, HashMap};
pub use hash_set::HashSet;
pub use linked_list::LinkedList;
pub use linked_queue::LinkedQueue;
pub use linked_stack::LinkedStack;
pub use list::List;
pub use priority_queue::PriorityQueue;
pub use queue::{Queue, Stack};
pub use semantics::{ByKey, Comparator, Native, NaturalOrder, ReverseOrder, Shown, ValueSemantics};
