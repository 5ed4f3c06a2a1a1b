//! Binary-heap priority queue layered on [`RingBuffer`] storage.
//!
//! The heap treats the ring as a plain zero-based array of length `len()`:
//! the root is logical index 0, and the children of `i` are `2i + 1` and
//! `2i + 2`. Both ring layouts map logical indices to physical slots, so the
//! heap works the same on bounded and unbounded storage.
//!
//! # Invariants
//! - Heap order: for every `i > 0`, `less(i, parent(i))` is false under the
//!   active [`Order`]; no child outranks its parent.
//! - Position bookkeeping: the item at logical index `i` reports
//!   `position() == Some(i)`. Every swap rewrites both positions; a pulled
//!   item reports `None`.
//! - The ordering can only change while the queue is empty.
//!
//! # Complexity
//! - `push` and `pull` are O(log n) swaps plus the ring's O(1) amortized
//!   append/remove at the tail.

use std::fmt;

use tracing::debug;

use crate::config::{Order, QueueConfig, DEFAULT_CAPACITY};
use crate::error::{PushError, QueueError};
use crate::item::Item;
use crate::ring_buffer::RingBuffer;
use crate::Queue;

/// Max-heap by default (higher priority pulled first); switch to a min-heap
/// with [`PriorityQueue::set_ascending`] before the first push.
///
/// # Examples
/// ```
/// use queue_rs::{Item, PriorityQueue};
///
/// let mut pq = PriorityQueue::unbounded();
/// for (p, v) in [(7, "a"), (5, "b"), (8, "c")] {
///     pq.push(Item::new(p, v)).unwrap();
/// }
/// assert_eq!(*pq.pull().unwrap().value(), "c");
/// assert_eq!(*pq.pull().unwrap().value(), "a");
/// ```
pub struct PriorityQueue<V> {
    buf: RingBuffer<Item<V>>,
    order: Order,
}

impl<V> PriorityQueue<V> {
    /// Creates a fixed-capacity queue. `capacity == 0` falls back to
    /// [`DEFAULT_CAPACITY`].
    pub fn bounded(capacity: usize) -> Self {
        let capacity = if capacity == 0 {
            DEFAULT_CAPACITY
        } else {
            capacity
        };
        Self {
            buf: RingBuffer::bounded(capacity),
            order: Order::default(),
        }
    }

    /// Creates an auto-growing queue.
    pub fn unbounded() -> Self {
        Self {
            buf: RingBuffer::unbounded(),
            order: Order::default(),
        }
    }

    /// Creates a queue from `config`: capacity 0 selects unbounded storage and
    /// `config.order` is installed up front.
    pub fn with_config(config: &QueueConfig) -> Self {
        Self {
            buf: RingBuffer::with_config(config),
            order: config.order,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    pub fn cap(&self) -> usize {
        self.buf.cap()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.buf.is_full()
    }

    #[inline]
    pub fn order(&self) -> Order {
        self.order
    }

    /// Installs `order`.
    ///
    /// # Errors
    /// [`QueueError::NotEmpty`] if any element is stored; the current
    /// ordering is kept.
    pub fn set_order(&mut self, order: Order) -> Result<(), QueueError> {
        if !self.is_empty() {
            return Err(QueueError::NotEmpty);
        }
        if self.order != order {
            debug!(from = ?self.order, to = ?order, "priority queue order changed");
        }
        self.order = order;
        Ok(())
    }

    /// Pull lowest priority first. Must be called while empty.
    pub fn set_ascending(&mut self) -> Result<(), QueueError> {
        self.set_order(Order::Ascending)
    }

    /// Pull highest priority first (the default). Must be called while empty.
    pub fn set_descending(&mut self) -> Result<(), QueueError> {
        self.set_order(Order::Descending)
    }

    /// Inserts `item` and restores heap order.
    ///
    /// The item is stamped with the slot it lands in (`len()` before the
    /// insert) and then sifted up.
    ///
    /// # Errors
    /// A full bounded queue rejects the item and hands it back with its
    /// position cleared; the queue is unchanged.
    pub fn push(&mut self, mut item: Item<V>) -> Result<(), PushError<Item<V>>> {
        let index = self.len();
        item.set_position(Some(index));

        if let Err(err) = self.buf.push(item) {
            let mut item = err.into_inner();
            item.set_position(None);
            return Err(PushError::full(item));
        }
        debug_assert_eq!(self.len(), index + 1);

        self.up(index);
        Ok(())
    }

    /// Wraps `value` in an [`Item`] and pushes it.
    pub fn push_value(&mut self, priority: i64, value: V) -> Result<(), PushError<Item<V>>> {
        self.push(Item::new(priority, value))
    }

    /// Removes and returns the highest-ranked item.
    ///
    /// The root is swapped to the logical end, the remaining `[0, len - 1)`
    /// range is sifted down, and the old root is popped off the tail. The
    /// returned item reports `position() == None`.
    pub fn pull(&mut self) -> Result<Item<V>, QueueError> {
        if self.is_empty() {
            return Err(QueueError::Empty);
        }
        let end = self.len() - 1;
        self.swap(0, end);
        self.down(0, end);

        let mut item = self.buf.pop()?;
        debug_assert_eq!(item.position(), Some(end));
        item.set_position(None);
        Ok(item)
    }

    /// Returns the item the next `pull` would remove.
    #[inline]
    pub fn peek(&self) -> Option<&Item<V>> {
        self.buf.get(0)
    }

    /// Iterates in storage (heap array) order, not priority order.
    ///
    /// The `n`-th yielded item reports `position() == Some(n)`.
    pub fn iter(&self) -> impl Iterator<Item = &Item<V>> + '_ {
        self.buf.iter()
    }

    /// Pulls every item in priority order.
    pub fn drain(&mut self) -> impl Iterator<Item = Item<V>> + '_ {
        std::iter::from_fn(move || self.pull().ok())
    }

    /// Drops every stored item. The ordering may be changed afterwards.
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    #[inline]
    fn item(&self, i: usize) -> &Item<V> {
        match self.buf.get(i) {
            Some(item) => item,
            None => panic!("heap index {i} out of bounds (len {})", self.len()),
        }
    }

    #[inline]
    fn item_mut(&mut self, i: usize) -> &mut Item<V> {
        let len = self.len();
        match self.buf.get_mut(i) {
            Some(item) => item,
            None => panic!("heap index {i} out of bounds (len {len})"),
        }
    }

    /// True when the item at `i` must come out before the item at `j`.
    #[inline]
    fn less(&self, i: usize, j: usize) -> bool {
        self.order
            .outranks(self.item(i).priority(), self.item(j).priority())
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.buf.swap(i, j);
        self.item_mut(i).set_position(Some(i));
        self.item_mut(j).set_position(Some(j));
    }

    fn up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if !self.less(index, parent) {
                break;
            }
            self.swap(parent, index);
            index = parent;
        }
    }

    /// Sifts `start` down within `[0, end)`. Returns true if it moved.
    fn down(&mut self, start: usize, end: usize) -> bool {
        let mut i = start;
        loop {
            let left = 2 * i + 1;
            if left >= end {
                break;
            }
            let mut child = left;
            let right = left + 1;
            // Right wins only if it strictly outranks left.
            if right < end && self.less(right, left) {
                child = right;
            }
            if !self.less(child, i) {
                break;
            }
            self.swap(i, child);
            i = child;
        }
        i > start
    }

    /// Panic if heap order or position bookkeeping is violated. Debug and
    /// test builds only.
    #[cfg(any(test, debug_assertions))]
    pub fn check_invariants(&self) {
        for i in 0..self.len() {
            assert_eq!(
                self.item(i).position(),
                Some(i),
                "item at {i} records a stale position"
            );
            if i > 0 {
                let parent = (i - 1) / 2;
                assert!(
                    !self.less(i, parent),
                    "child {i} outranks parent {parent}"
                );
            }
        }
    }
}

impl<V> Default for PriorityQueue<V> {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl<V: fmt::Debug> fmt::Debug for PriorityQueue<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("order", &self.order)
            .field("buf", &self.buf)
            .finish()
    }
}

impl<V> Queue for PriorityQueue<V> {
    type Elem = Item<V>;

    fn len(&self) -> usize {
        PriorityQueue::len(self)
    }

    fn cap(&self) -> usize {
        PriorityQueue::cap(self)
    }

    fn is_empty(&self) -> bool {
        PriorityQueue::is_empty(self)
    }

    fn is_full(&self) -> bool {
        PriorityQueue::is_full(self)
    }

    fn push(&mut self, value: Item<V>) -> Result<(), PushError<Item<V>>> {
        PriorityQueue::push(self, value)
    }

    fn pull(&mut self) -> Result<Item<V>, QueueError> {
        PriorityQueue::pull(self)
    }
}

// Kani proofs and property tests live in the sibling module.
#[cfg(any(test, kani))]
#[path = "priority_queue_tests.rs"]
mod priority_queue_tests;
