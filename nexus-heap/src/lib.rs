//! Array-backed binary heap with min/max ordering and cursor removal.
//!
//! This crate provides a single priority queue, [`Heap`], tuned for the
//! cases the standard library's `BinaryHeap` does not cover:
//!
//! - **Both directions**: min-heap or max-heap chosen at construction
//! - **Pluggable ordering**: natural `Ord`, a closure, a key extractor, or a
//!   partial order that reports incomparable values instead of panicking
//! - **Arbitrary removal**: a [`Cursor`] walks the heap in storage order and
//!   can remove the element it just returned, repairing the heap in place
//!
//! # Quick Start
//!
//! ```
//! use nexus_heap::Heap;
//!
//! let mut heap = Heap::min(4).unwrap();
//! for value in [5, 3, 8, 1] {
//!     heap.insert(value).unwrap();
//! }
//!
//! assert_eq!(heap.peek(), Ok(&1));
//! assert_eq!(heap.pop(), Ok(1));
//! assert_eq!(heap.pop(), Ok(3));
//! ```
//!
//! # Removing From The Middle
//!
//! ```
//! use nexus_heap::Heap;
//!
//! let mut heap = Heap::min(8).unwrap();
//! for value in [10, 4, 15, 2, 7] {
//!     heap.insert(value).unwrap();
//! }
//!
//! let mut cursor = heap.cursor();
//! while let Some(&value) = cursor.next() {
//!     if value == 15 {
//!         assert_eq!(cursor.remove(), Ok(15));
//!     }
//! }
//!
//! assert_eq!(heap.into_sorted_vec(), Ok(vec![2, 4, 7, 10]));
//! ```
//!
//! # Storage Layout
//!
//! ```text
//! slot:   0    1    2    3    4    5
//!       [ -- | r  | a  | b  | c  | d  ]     parent(i) = i / 2
//!              └──┬─┘    │                  left(i)   = 2i
//!                 └──────┘                  right(i)  = 2i + 1
//! ```
//!
//! Slot 0 is never occupied; keeping the root at slot 1 makes the
//! parent/child arithmetic a shift. The array doubles when full and never
//! shrinks.
//!
//! # Threading
//!
//! The heap does no internal synchronization. Wrap it in a `Mutex` (one lock
//! around every operation, iteration included) to share it across threads.

#![warn(missing_docs)]

pub mod compare;
pub mod cursor;
pub mod error;
pub mod heap;

pub use compare::{Compare, FnComparator, KeyComparator, Natural, Order, PartialNatural};
pub use cursor::Cursor;
pub use error::HeapError;
pub use heap::{DEFAULT_CAPACITY, DrainWhile, Heap, Iter};
