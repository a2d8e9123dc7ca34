//! Ordering policy: heap direction and element comparators.
//!
//! A heap is parameterised by two things fixed at construction:
//!
//! - an [`Order`], selecting whether the least or the greatest element
//!   surfaces at the root
//! - a comparator implementing [`Compare`], defining what "least" means
//!
//! The comparator is resolved statically. Natural ordering requires `T: Ord`,
//! so a heap of unorderable elements does not compile. Only comparators that
//! are genuinely partial ([`PartialNatural`] over floats, or a custom
//! [`Compare`] impl) can report [`HeapError::Incomparable`](crate::HeapError)
//! at runtime, and only once two elements are actually compared.

use std::cmp::Ordering;

/// Which extreme of the ordering sits at the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Order {
    /// `peek`/`pop` yield the least element.
    Min,
    /// `peek`/`pop` yield the greatest element.
    Max,
}

impl Order {
    /// Returns `true` for [`Order::Min`].
    #[inline]
    pub const fn is_min(self) -> bool {
        matches!(self, Self::Min)
    }

    /// Returns `true` if `ord` (the result of comparing `a` to `b`) means `a`
    /// must sit above `b` in a heap of this order.
    #[inline]
    pub(crate) const fn precedes(self, ord: Ordering) -> bool {
        match self {
            Self::Min => ord.is_lt(),
            Self::Max => ord.is_gt(),
        }
    }
}

/// A comparison function over heap elements.
///
/// Returns `None` when `a` and `b` cannot be ordered relative to each other.
///
/// Any `Fn(&T, &T) -> Ordering` closure implements this trait, so ad-hoc
/// orderings need no wrapper:
///
/// ```
/// use nexus_heap::{Heap, Order};
///
/// // Order strings by length.
/// let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
/// let mut heap = Heap::with_comparator(4, Order::Max, by_len).unwrap();
///
/// heap.insert("a").unwrap();
/// heap.insert("abc").unwrap();
/// heap.insert("ab").unwrap();
///
/// assert_eq!(heap.pop(), Ok("abc"));
/// ```
pub trait Compare<T: ?Sized> {
    /// Compares `a` to `b`.
    fn compare(&self, a: &T, b: &T) -> Option<Ordering>;
}

impl<T: ?Sized, F> Compare<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Option<Ordering> {
        Some(self(a, b))
    }
}

/// The element type's own total order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Natural;

impl<T: Ord + ?Sized> Compare<T> for Natural {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Option<Ordering> {
        Some(a.cmp(b))
    }
}

/// The element type's partial order.
///
/// Fails on the first pair `partial_cmp` cannot order (e.g. `NaN`).
///
/// ```
/// use nexus_heap::{Heap, HeapError, Order, PartialNatural};
///
/// let mut heap = Heap::with_comparator(4, Order::Min, PartialNatural).unwrap();
/// heap.insert(1.5_f64).unwrap();
/// assert_eq!(heap.insert(f64::NAN), Err(HeapError::Incomparable));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PartialNatural;

impl<T: PartialOrd + ?Sized> Compare<T> for PartialNatural {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Option<Ordering> {
        a.partial_cmp(b)
    }
}

/// Wraps a comparison closure in a nameable type.
///
/// Useful when the comparator must be stored in a struct field, where a bare
/// closure type cannot be written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FnComparator<F>(pub F);

impl<T: ?Sized, F> Compare<T> for FnComparator<F>
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Option<Ordering> {
        Some((self.0)(a, b))
    }
}

/// Orders elements by a key extracted from each one.
///
/// ```
/// use nexus_heap::{Heap, KeyComparator, Order};
///
/// struct Job { priority: u8, name: &'static str }
///
/// let by_priority = KeyComparator(|job: &Job| job.priority);
/// let mut heap = Heap::with_comparator(4, Order::Max, by_priority).unwrap();
///
/// heap.insert(Job { priority: 1, name: "sweep" }).unwrap();
/// heap.insert(Job { priority: 9, name: "page" }).unwrap();
///
/// assert_eq!(heap.peek().unwrap().name, "page");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyComparator<F>(pub F);

impl<T: ?Sized, K: Ord, F> Compare<T> for KeyComparator<F>
where
    F: Fn(&T) -> K,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Option<Ordering> {
        Some((self.0)(a).cmp(&(self.0)(b)))
    }
}
