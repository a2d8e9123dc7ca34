//! Array-backed binary heap with min or max ordering.
//!
//! Elements live in a 1-indexed slot array: slot 0 is reserved, the root is
//! slot 1, and the children of slot `i` are `2i` and `2i + 1`. The array
//! doubles when an insert finds it full.

use core::fmt;
use std::cmp::Ordering;

use log::trace;

use crate::compare::{Compare, Natural, Order};
use crate::cursor::Cursor;
use crate::error::HeapError;

/// Capacity used by [`Heap::default`].
pub const DEFAULT_CAPACITY: usize = 13;

/// A binary heap that yields its least ([`Order::Min`]) or greatest
/// ([`Order::Max`]) element first.
///
/// Ordering comes from the comparator `C`, which defaults to the element's
/// natural [`Ord`]. See [`compare`](crate::compare) for the alternatives.
///
/// # Example
///
/// ```
/// use nexus_heap::{Heap, Order};
///
/// let mut heap = Heap::new(4, Order::Max).unwrap();
/// for value in [5, 3, 8, 1] {
///     heap.insert(value).unwrap();
/// }
///
/// assert_eq!(heap.len(), 4);
/// assert_eq!(heap.pop(), Ok(8));
/// assert_eq!(heap.pop(), Ok(5));
/// assert_eq!(heap.pop(), Ok(3));
/// assert_eq!(heap.pop(), Ok(1));
/// assert!(heap.pop().is_err());
/// ```
#[derive(Clone)]
pub struct Heap<T, C = Natural> {
    /// Slot array; index 0 and every index above `len` hold `None`.
    slots: Vec<Option<T>>,
    len: usize,
    order: Order,
    cmp: C,
}

impl<T: Ord> Heap<T, Natural> {
    /// Creates an empty heap using the elements' natural order.
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::InvalidCapacity`] if `capacity` is 0 or
    /// `usize::MAX`.
    pub fn new(capacity: usize, order: Order) -> Result<Self, HeapError> {
        Self::with_comparator(capacity, order, Natural)
    }

    /// Creates an empty min-heap using the elements' natural order.
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::InvalidCapacity`] if `capacity` is 0 or
    /// `usize::MAX`.
    pub fn min(capacity: usize) -> Result<Self, HeapError> {
        Self::new(capacity, Order::Min)
    }

    /// Creates an empty max-heap using the elements' natural order.
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::InvalidCapacity`] if `capacity` is 0 or
    /// `usize::MAX`.
    pub fn max(capacity: usize) -> Result<Self, HeapError> {
        Self::new(capacity, Order::Max)
    }
}

impl<T: Ord> Default for Heap<T, Natural> {
    fn default() -> Self {
        Self {
            slots: empty_slots(DEFAULT_CAPACITY + 1),
            len: 0,
            order: Order::Min,
            cmp: Natural,
        }
    }
}

fn empty_slots<T>(len: usize) -> Vec<Option<T>> {
    let mut slots = Vec::with_capacity(len);
    slots.resize_with(len, || None);
    slots
}

impl<T, C> Heap<T, C> {
    /// Returns the number of elements in the heap.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the heap is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if the next insert will grow the backing array.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len + 1 == self.slots.len()
    }

    /// Returns how many elements fit before the next growth.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len() - 1
    }

    /// Returns the heap's direction.
    #[inline]
    pub fn order(&self) -> Order {
        self.order
    }

    /// Returns the comparator.
    #[inline]
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Returns the root element without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::Empty`] if the heap is empty.
    #[inline]
    pub fn peek(&self) -> Result<&T, HeapError> {
        if self.is_empty() {
            return Err(HeapError::Empty);
        }
        Ok(self.slot(1))
    }

    /// Removes every element.
    ///
    /// All elements are dropped here; the backing array keeps its size.
    pub fn clear(&mut self) {
        for slot in &mut self.slots[1..=self.len] {
            *slot = None;
        }
        trace!("heap cleared: dropped {} elements", self.len);
        self.len = 0;
    }

    /// Returns an iterator over the elements in storage order.
    ///
    /// Storage order is not priority order; only the first element is
    /// guaranteed to be the root.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.slots[1..=self.len].iter(),
        }
    }

    /// Returns a cursor over the elements in storage order that can remove
    /// the element it last returned.
    pub fn cursor(&mut self) -> Cursor<'_, T, C> {
        Cursor::new(self)
    }

    #[inline]
    pub(crate) fn slot(&self, index: usize) -> &T {
        self.slots[index].as_ref().expect("slot outside live range")
    }

    #[inline]
    fn take(&mut self, index: usize) -> T {
        self.slots[index].take().expect("slot outside live range")
    }

    /// Doubles the backing array. Live slots keep their positions.
    fn grow(&mut self) {
        let old_len = self.slots.len();
        self.slots.resize_with(old_len * 2, || None);
        trace!(
            "heap grown: slots {} -> {} ({} live)",
            old_len,
            self.slots.len(),
            self.len
        );
    }
}

impl<T, C: Compare<T>> Heap<T, C> {
    /// Creates an empty heap ordered by `cmp`.
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::InvalidCapacity`] if `capacity` is 0 or
    /// `usize::MAX`.
    pub fn with_comparator(capacity: usize, order: Order, cmp: C) -> Result<Self, HeapError> {
        if capacity == 0 {
            return Err(HeapError::InvalidCapacity);
        }
        let slots = capacity.checked_add(1).ok_or(HeapError::InvalidCapacity)?;

        Ok(Self {
            slots: empty_slots(slots),
            len: 0,
            order,
            cmp,
        })
    }

    /// Inserts an element, growing the backing array if it is full.
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::Incomparable`] if the comparator fails while
    /// placing the element. The element stays in the heap, but the heap
    /// property may no longer hold on its path to the root.
    pub fn insert(&mut self, value: T) -> Result<(), HeapError> {
        if self.is_full() {
            self.grow();
        }

        self.len += 1;
        self.slots[self.len] = Some(value);
        self.percolate_up(self.len)
    }

    /// Inserts every element of `iter`, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// Returns the first error reported by [`insert`](Self::insert).
    pub fn try_extend<I>(&mut self, iter: I) -> Result<(), HeapError>
    where
        I: IntoIterator<Item = T>,
    {
        iter.into_iter().try_for_each(|value| self.insert(value))
    }

    /// Removes and returns the root element.
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::Empty`] if the heap is empty, or
    /// [`HeapError::Incomparable`] if the comparator fails while restoring
    /// the heap. In the latter case the root has already been detached and
    /// is dropped.
    pub fn pop(&mut self) -> Result<T, HeapError> {
        self.peek()?;

        let root = self.take(1);
        let last = self.len;
        self.len -= 1;

        if self.len != 0 {
            self.slots[1] = self.slots[last].take();
            self.percolate_down(1)?;
        }

        Ok(root)
    }

    /// Removes elements in priority order while `pred` accepts the root.
    ///
    /// If the comparator fails while restoring the heap after a removal, the
    /// iterator yields that [`HeapError::Incomparable`] once and then ends.
    /// As with [`pop`](Self::pop), the detached root is dropped.
    ///
    /// # Example
    ///
    /// ```
    /// use nexus_heap::Heap;
    ///
    /// let mut heap = Heap::min(8).unwrap();
    /// heap.try_extend([1, 5, 3, 7]).unwrap();
    ///
    /// let expired: Result<Vec<_>, _> = heap.drain_while(|&deadline| deadline < 4).collect();
    /// assert_eq!(expired, Ok(vec![1, 3]));
    /// assert_eq!(heap.peek(), Ok(&5));
    /// ```
    pub fn drain_while<F>(&mut self, pred: F) -> DrainWhile<'_, T, C, F>
    where
        F: FnMut(&T) -> bool,
    {
        DrainWhile {
            heap: self,
            pred,
            done: false,
        }
    }

    /// Consumes the heap, returning its elements in pop order.
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::Incomparable`] if the comparator fails.
    pub fn into_sorted_vec(mut self) -> Result<Vec<T>, HeapError> {
        let mut sorted = Vec::with_capacity(self.len);
        while !self.is_empty() {
            sorted.push(self.pop()?);
        }
        Ok(sorted)
    }

    /// Removes the element at `index`, moving the last element into its slot
    /// and re-sifting it.
    ///
    /// The sift direction is chosen by comparing the moved element to its new
    /// parent only: up if it precedes the parent, otherwise down.
    pub(crate) fn remove_at(&mut self, index: usize) -> Result<T, HeapError> {
        debug_assert!(index >= 1 && index <= self.len, "index outside live range");

        let removed = self.take(index);
        let last = self.len;
        self.len -= 1;

        if index == last {
            return Ok(removed);
        }

        self.slots[index] = self.slots[last].take();

        if index > 1 && self.precedes(self.slot(index), self.slot(index / 2))? {
            self.percolate_up(index)?;
        } else {
            self.percolate_down(index)?;
        }

        Ok(removed)
    }

    #[inline]
    fn compare(&self, a: &T, b: &T) -> Result<Ordering, HeapError> {
        self.cmp.compare(a, b).ok_or(HeapError::Incomparable)
    }

    /// Returns `true` if `a` belongs strictly above `b`.
    #[inline]
    fn precedes(&self, a: &T, b: &T) -> Result<bool, HeapError> {
        Ok(self.order.precedes(self.compare(a, b)?))
    }

    /// Walks the element at `index` toward the root.
    ///
    /// The element is lifted out as a bubble; parents it precedes move down
    /// into the hole until it lands. On comparator failure the bubble is put
    /// back in the current hole before returning.
    fn percolate_up(&mut self, index: usize) -> Result<(), HeapError> {
        let bubble = self.take(index);
        let mut hole = index;

        let result = loop {
            if hole <= 1 {
                break Ok(());
            }

            let parent = hole / 2;
            match self.precedes(&bubble, self.slot(parent)) {
                Ok(true) => {
                    self.slots[hole] = self.slots[parent].take();
                    hole = parent;
                }
                Ok(false) => break Ok(()),
                Err(err) => break Err(err),
            }
        };

        self.slots[hole] = Some(bubble);
        result
    }

    /// Walks the element at `index` toward the leaves.
    ///
    /// At each level the right child is chosen only if it strictly precedes
    /// the left; ties go left. The walk stops once the chosen child does not
    /// strictly precede the bubble.
    fn percolate_down(&mut self, index: usize) -> Result<(), HeapError> {
        let bubble = self.take(index);
        let mut hole = index;

        let result = loop {
            let mut child = hole * 2;
            if child > self.len {
                break Ok(());
            }

            if child != self.len {
                match self.precedes(self.slot(child + 1), self.slot(child)) {
                    Ok(true) => child += 1,
                    Ok(false) => {}
                    Err(err) => break Err(err),
                }
            }

            match self.precedes(self.slot(child), &bubble) {
                Ok(true) => {
                    self.slots[hole] = self.slots[child].take();
                    hole = child;
                }
                Ok(false) => break Ok(()),
                Err(err) => break Err(err),
            }
        };

        self.slots[hole] = Some(bubble);
        result
    }

    /// Checks the heap property at every slot.
    #[cfg(test)]
    pub(crate) fn is_valid(&self) -> bool {
        (2..=self.len)
            .all(|child| self.precedes(self.slot(child), self.slot(child / 2)) == Ok(false))
    }
}

impl<T: Ord> Extend<T> for Heap<T, Natural> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value).expect("natural order is total; insert cannot fail");
        }
    }
}

impl<T: fmt::Debug, C> fmt::Debug for Heap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Heap")
            .field("order", &self.order)
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("elements", &DebugElements(self))
            .finish()
    }
}

struct DebugElements<'a, T, C>(&'a Heap<T, C>);

impl<T: fmt::Debug, C> fmt::Debug for DebugElements<'_, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

/// Renders `[ e1, e2, ..., en ]` in storage order.
///
/// Debugging aid; not a stable format.
impl<T: fmt::Display, C> fmt::Display for Heap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[ ")?;
        for (i, value) in self.iter().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str(" ]")
    }
}

impl<'a, T, C> IntoIterator for &'a Heap<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// Iterator over heap elements in storage order.
///
/// Created by [`Heap::iter`].
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    inner: std::slice::Iter<'a, Option<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        self.inner.next()?.as_ref()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()?.as_ref()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// An iterator that pops elements while a predicate holds.
///
/// Yields `Err` at most once, as its last item, when the comparator fails.
///
/// Created by [`Heap::drain_while`].
pub struct DrainWhile<'a, T, C, F>
where
    C: Compare<T>,
    F: FnMut(&T) -> bool,
{
    heap: &'a mut Heap<T, C>,
    pred: F,
    done: bool,
}

impl<T, C, F> Iterator for DrainWhile<'_, T, C, F>
where
    C: Compare<T>,
    F: FnMut(&T) -> bool,
{
    type Item = Result<T, HeapError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let root = self.heap.peek().ok()?;
        if !(self.pred)(root) {
            self.done = true;
            return None;
        }

        let popped = self.heap.pop();
        self.done = popped.is_err();
        Some(popped)
    }
}
