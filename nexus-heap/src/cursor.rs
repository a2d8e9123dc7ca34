//! Storage-order cursor with arbitrary removal.

use crate::compare::Compare;
use crate::error::HeapError;
use crate::heap::Heap;

/// A cursor over a heap's elements in storage order.
///
/// Unlike [`Iter`](crate::Iter), a cursor can remove the element it last
/// returned. Removal moves the heap's last element into the vacated slot and
/// sifts it up or down to restore the heap property, then steps the cursor
/// back so the refilled slot is visited next.
///
/// The cursor holds the heap's only mutable borrow, so the heap cannot be
/// changed through any other path while it is alive.
///
/// # Example
///
/// ```
/// use nexus_heap::Heap;
///
/// let mut heap = Heap::max(8).unwrap();
/// heap.try_extend([3, 9, 4, 6, 1]).unwrap();
///
/// // Drop every even element.
/// let mut cursor = heap.cursor();
/// while let Some(&value) = cursor.next() {
///     if value % 2 == 0 {
///         cursor.remove().unwrap();
///     }
/// }
///
/// assert_eq!(heap.into_sorted_vec(), Ok(vec![9, 3, 1]));
/// ```
///
/// # Visit Order After Removal
///
/// When the refilled slot sifts down, every element is visited exactly once.
/// When it sifts up (the moved element outranks its new parent), the moved
/// element lands behind the cursor and the former parent is revisited.
pub struct Cursor<'a, T, C> {
    heap: &'a mut Heap<T, C>,
    /// Slot `next()` will return.
    next: usize,
    /// Slot returned by the last `next()`, cleared by `remove()`.
    last: Option<usize>,
}

impl<'a, T, C> Cursor<'a, T, C> {
    pub(crate) fn new(heap: &'a mut Heap<T, C>) -> Self {
        Self {
            heap,
            next: 1,
            last: None,
        }
    }

    /// Returns `true` if [`next`](Self::next) will return an element.
    #[inline]
    pub fn has_next(&self) -> bool {
        self.next <= self.heap.len()
    }

    /// Advances the cursor, returning the element at the new position.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<&T> {
        if !self.has_next() {
            return None;
        }

        let index = self.next;
        self.next += 1;
        self.last = Some(index);
        Some(self.heap.slot(index))
    }
}

impl<T, C: Compare<T>> Cursor<'_, T, C> {
    /// Removes and returns the element last returned by
    /// [`next`](Self::next).
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::IllegalCursorState`] if `next` has not been
    /// called, or if the element it returned was already removed.
    /// Returns [`HeapError::Incomparable`] if the comparator fails while
    /// repairing the heap; the element is then dropped.
    pub fn remove(&mut self) -> Result<T, HeapError> {
        let index = self.last.take().ok_or(HeapError::IllegalCursorState)?;
        self.next -= 1;
        self.heap.remove_at(index)
    }
}
