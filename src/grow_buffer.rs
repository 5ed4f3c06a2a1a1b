//! Auto-growing contiguous storage with a capacity-shrink heuristic.
//!
//! Elements live in a `Vec<Option<T>>`. Pushes append and let the vector
//! grow by amortized doubling. Pulls from the front take the slot at `head`
//! and advance it, leaving a dead `None` prefix that is compacted away once it
//! is at least as long as the live region, so front removal stays O(1)
//! amortized.
//!
//! # Invariants
//! - `head <= items.len()`.
//! - Slots `[0, head)` are `None`; slots `[head, items.len())` are `Some`.
//! - Logical index `i` lives at `items[head + i]`; the storage never wraps.
//!
//! # Shrink heuristic
//! After every removal, if capacity is at least [`SHRINK_MIN_CAPACITY`] and
//! the live count is at most a quarter of capacity, the live elements move to
//! a fresh allocation of half the capacity.

use tracing::debug;

use crate::config::SHRINK_MIN_CAPACITY;

pub(crate) struct GrowBuffer<T> {
    items: Vec<Option<T>>,
    head: usize,
}

impl<T> GrowBuffer<T> {
    /// Creates an empty buffer without allocating.
    pub(crate) fn new() -> Self {
        Self {
            items: Vec::new(),
            head: 0,
        }
    }

    /// Current allocation size of the backing vector.
    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.items.capacity()
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.items.len() - self.head
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Appends `value`. Never fails; growth is delegated to `Vec`.
    #[inline]
    pub(crate) fn push_back(&mut self, value: T) {
        self.items.push(Some(value));
        debug_assert!(self.capacity() >= self.len());
    }

    /// Removes the logical front element.
    pub(crate) fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let value = self.items[self.head].take();
        debug_assert!(value.is_some(), "live slot was empty");
        self.head += 1;

        self.after_remove();
        value
    }

    /// Removes the logical back element.
    pub(crate) fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let value = self.items.pop().flatten();
        debug_assert!(value.is_some(), "live slot was empty");

        self.after_remove();
        value
    }

    #[inline]
    pub(crate) fn get(&self, i: usize) -> Option<&T> {
        if i >= self.len() {
            return None;
        }
        self.items[self.head + i].as_ref()
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        if i >= self.len() {
            return None;
        }
        self.items[self.head + i].as_mut()
    }

    /// Exchanges logical slots `i` and `j`.
    ///
    /// # Panics
    /// Panics if either index is `>= len()`.
    pub(crate) fn swap(&mut self, i: usize, j: usize) {
        let len = self.len();
        assert!(i < len && j < len, "swap index out of bounds");
        self.items.swap(self.head + i, self.head + j);
    }

    /// Drops every element, keeping the current allocation.
    pub(crate) fn clear(&mut self) {
        self.items.clear();
        self.head = 0;
    }

    fn after_remove(&mut self) {
        let live = self.len();
        let cap = self.capacity();

        if cap >= SHRINK_MIN_CAPACITY && live <= cap / 4 {
            self.reallocate(cap / 2);
        } else if live == 0 {
            self.items.clear();
            self.head = 0;
        } else if self.head >= live {
            self.compact();
        }

        debug_assert!(self.head <= self.items.len());
    }

    /// Moves live elements into a fresh vector of `new_cap` slots.
    fn reallocate(&mut self, new_cap: usize) {
        let old_cap = self.capacity();
        let mut next = Vec::with_capacity(new_cap);
        next.extend(self.items.drain(self.head..));
        self.items = next;
        self.head = 0;

        debug!(old_cap, new_cap, len = self.items.len(), "grow buffer shrunk");
    }

    /// Drops the dead prefix in place without touching the allocation.
    fn compact(&mut self) {
        let dead = self.head;
        self.items.drain(..dead);
        self.head = 0;

        debug!(dead, len = self.items.len(), "grow buffer compacted");
    }
}
