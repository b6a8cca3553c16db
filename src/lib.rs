//! Generic array-backed binary heap with a pluggable ordering predicate.
//!
//! [`Heap`] stores its elements in a dense `Vec<T>` as an implicit complete
//! binary tree and keeps them in heap order with the classic sift-up /
//! sift-down walks. Ordering comes from a stored predicate: the default is
//! `a > b` (max-heap), [`Heap::new_min`] gives `a < b`, and
//! [`Heap::with_comparator`] takes any `Fn(&T, &T) -> bool`, which makes
//! key-extraction orderings over non-`Ord` element types a one-liner.
//!
//! ```
//! use priority_heap::Heap;
//!
//! let mut tasks = Heap::with_comparator(|a: &(&str, u8), b: &(&str, u8)| a.1 > b.1);
//! tasks.push(("low", 1));
//! tasks.push(("high", 9));
//! tasks.push(("mid", 5));
//!
//! assert_eq!(tasks.poll(), Some(("high", 9)));
//! assert_eq!(tasks.poll(), Some(("mid", 5)));
//! ```
//!
//! Querying an empty heap is not an error: [`Heap::peek`] and [`Heap::poll`]
//! return `None`. The structure is single-threaded and does no internal
//! locking; wrap it externally if shared across threads.

mod heap;
mod iter;
#[cfg(feature = "serde")]
mod serde_impls;

pub use heap::{Comparator, Heap};
pub use iter::IntoIter;
