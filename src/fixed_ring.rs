//! Fixed-capacity circular storage with wrap-around head/tail indices.
//!
//! # Invariants
//! - `head < capacity` and `tail < capacity`.
//! - `head == tail` means empty unless `full` is set, in which case every slot
//!   is occupied. The flag is the only way to tell the two states apart.
//! - Slots in the logical range `[head, head + len)` (wrapping modulo
//!   capacity) are `Some`; all other slots are `None`.
//! - The element at logical index `i` lives at physical slot
//!   `(head + i) % capacity`. Every indexed accessor goes through that
//!   mapping, so callers always see a zero-based contiguous sequence even
//!   after the ring has wrapped.
//!
//! # Threading
//! This type is not synchronized; it assumes single-threaded usage.

/// Circular buffer backed by a boxed slice that never reallocates.
pub(crate) struct FixedRing<T> {
    slots: Box<[Option<T>]>,
    head: usize,
    tail: usize,
    full: bool,
}

impl<T> FixedRing<T> {
    /// Preallocates `capacity` empty slots.
    ///
    /// # Panics
    /// Panics if `capacity == 0`.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "FixedRing capacity must be > 0");
        let slots: Box<[Option<T>]> = (0..capacity).map(|_| None).collect();

        let ring = Self {
            slots,
            head: 0,
            tail: 0,
            full: false,
        };

        debug_assert!(ring.is_empty());
        ring
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.head == self.tail && !self.full
    }

    #[inline]
    pub(crate) fn is_full(&self) -> bool {
        self.full
    }

    /// Number of stored elements: 0 when empty, capacity when full, otherwise
    /// the modulo distance from head to tail.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        if self.full {
            return self.capacity();
        }
        let cap = self.capacity();
        (self.tail + cap - self.head) % cap
    }

    #[inline]
    fn wrap_inc(&self, i: usize) -> usize {
        let next = i + 1;
        if next == self.capacity() {
            0
        } else {
            next
        }
    }

    #[inline]
    fn wrap_dec(&self, i: usize) -> usize {
        if i == 0 {
            self.capacity() - 1
        } else {
            i - 1
        }
    }

    /// Physical slot of logical index `i`.
    #[inline]
    fn physical(&self, i: usize) -> usize {
        debug_assert!(i < self.len(), "logical index out of bounds");
        (self.head + i) % self.capacity()
    }

    /// Writes `value` at the tail, returning `Err(value)` when full.
    pub(crate) fn push_back(&mut self, value: T) -> Result<(), T> {
        if self.full {
            return Err(value);
        }
        debug_assert!(self.slots[self.tail].is_none(), "tail slot occupied");

        self.slots[self.tail] = Some(value);
        self.tail = self.wrap_inc(self.tail);
        if self.head == self.tail {
            self.full = true;
        }

        debug_assert!(self.tail < self.capacity());
        Ok(())
    }

    /// Removes the element at the head, clearing its slot.
    pub(crate) fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let value = self.slots[self.head].take();
        debug_assert!(value.is_some(), "head slot empty in non-empty ring");

        self.head = self.wrap_inc(self.head);
        self.full = false;
        value
    }

    /// Removes the element just before the tail.
    ///
    /// The tail steps back one slot with wrap-around, so a full ring whose
    /// tail sits at slot 0 gives up the element in the last slot.
    pub(crate) fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        self.tail = self.wrap_dec(self.tail);
        let value = self.slots[self.tail].take();
        debug_assert!(value.is_some(), "tail slot empty in non-empty ring");

        self.full = false;
        value
    }

    #[inline]
    pub(crate) fn get(&self, i: usize) -> Option<&T> {
        if i >= self.len() {
            return None;
        }
        self.slots[self.physical(i)].as_ref()
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        if i >= self.len() {
            return None;
        }
        let slot = self.physical(i);
        self.slots[slot].as_mut()
    }

    /// Exchanges logical slots `i` and `j`.
    ///
    /// # Panics
    /// Panics if either index is `>= len()`.
    pub(crate) fn swap(&mut self, i: usize, j: usize) {
        let len = self.len();
        assert!(i < len && j < len, "swap index out of bounds");
        let (pi, pj) = (self.physical(i), self.physical(j));
        self.slots.swap(pi, pj);
    }

    /// Drops every element and rewinds both indices to slot 0.
    pub(crate) fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = None;
        }
        self.head = 0;
        self.tail = 0;
        self.full = false;

        debug_assert!(self.is_empty());
    }
}
