//! Bounded or auto-growing ring queue.
//!
//! `RingBuffer` picks one of two physical layouts at construction:
//! - **Bounded** (`capacity > 0`): a preallocated circular array with
//!   wrap-around head/tail indices and an explicit full flag. It never grows;
//!   pushing into a full buffer is rejected.
//! - **Unbounded** (`capacity == 0`): a contiguous growable array that starts
//!   without any allocation, grows by amortized doubling, and shrinks by half
//!   once it becomes sparse.
//!
//! Both layouts expose the same zero-based logical index space (front = 0),
//! which is what lets [`PriorityQueue`](crate::PriorityQueue) run its heap
//! swaps on either one.
//!
//! # Threading
//! This type is not synchronized; it assumes single-threaded usage.

use std::fmt;

use tracing::trace;

use crate::config::QueueConfig;
use crate::error::{PushError, QueueError};
use crate::fixed_ring::FixedRing;
use crate::grow_buffer::GrowBuffer;
use crate::Queue;

enum Repr<T> {
    Bounded(FixedRing<T>),
    Unbounded(GrowBuffer<T>),
}

/// FIFO queue with O(1) amortized push at the tail and pull at the head.
///
/// # Examples
/// ```
/// use queue_rs::{QueueError, RingBuffer};
///
/// let mut q = RingBuffer::bounded(2);
/// q.push(1).unwrap();
/// q.push(2).unwrap();
/// assert_eq!(q.push(3).unwrap_err().into_inner(), 3);
/// assert_eq!(q.pull(), Ok(1));
/// assert_eq!(q.pull(), Ok(2));
/// assert_eq!(q.pull(), Err(QueueError::Empty));
/// ```
pub struct RingBuffer<T> {
    repr: Repr<T>,
}

impl<T> RingBuffer<T> {
    /// Creates a queue; `capacity == 0` selects the unbounded layout.
    pub fn new(capacity: usize) -> Self {
        if capacity == 0 {
            Self::unbounded()
        } else {
            Self::bounded(capacity)
        }
    }

    /// Creates a fixed-capacity queue that never reallocates.
    ///
    /// # Panics
    /// Panics if `capacity == 0`. Use [`RingBuffer::new`] to map 0 to the
    /// unbounded layout instead.
    pub fn bounded(capacity: usize) -> Self {
        Self {
            repr: Repr::Bounded(FixedRing::with_capacity(capacity)),
        }
    }

    /// Creates an auto-growing queue with no preallocated storage.
    pub fn unbounded() -> Self {
        Self {
            repr: Repr::Unbounded(GrowBuffer::new()),
        }
    }

    /// Creates a queue from `config.capacity`; the ordering field is ignored.
    pub fn with_config(config: &QueueConfig) -> Self {
        Self::new(config.capacity)
    }

    /// Number of stored elements.
    #[inline]
    pub fn len(&self) -> usize {
        match &self.repr {
            Repr::Bounded(ring) => ring.len(),
            Repr::Unbounded(buf) => buf.len(),
        }
    }

    /// Current physical capacity.
    ///
    /// Constant for bounded queues. For unbounded queues this is the backing
    /// allocation, which grows with pushes and shrinks with sparse pulls; it is
    /// always `>= len()`.
    #[inline]
    pub fn cap(&self) -> usize {
        match &self.repr {
            Repr::Bounded(ring) => ring.capacity(),
            Repr::Unbounded(buf) => buf.capacity(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        match &self.repr {
            Repr::Bounded(ring) => ring.is_empty(),
            Repr::Unbounded(buf) => buf.is_empty(),
        }
    }

    /// True when a bounded queue holds `cap()` elements. Always false for
    /// unbounded queues.
    #[inline]
    pub fn is_full(&self) -> bool {
        match &self.repr {
            Repr::Bounded(ring) => ring.is_full(),
            Repr::Unbounded(_) => false,
        }
    }

    #[inline]
    pub fn is_bounded(&self) -> bool {
        matches!(self.repr, Repr::Bounded(_))
    }

    /// Appends `value` at the tail.
    ///
    /// Fails only for a full bounded queue; the value is handed back inside
    /// the error and the queue is unchanged.
    pub fn push(&mut self, value: T) -> Result<(), PushError<T>> {
        match &mut self.repr {
            Repr::Bounded(ring) => ring.push_back(value).map_err(|value| {
                trace!(cap = ring.capacity(), "push rejected: queue full");
                PushError::full(value)
            }),
            Repr::Unbounded(buf) => {
                buf.push_back(value);
                Ok(())
            }
        }
    }

    /// Removes and returns the element at the head.
    pub fn pull(&mut self) -> Result<T, QueueError> {
        let value = match &mut self.repr {
            Repr::Bounded(ring) => ring.pop_front(),
            Repr::Unbounded(buf) => buf.pop_front(),
        };
        value.ok_or(QueueError::Empty)
    }

    /// Removes and returns the element at the tail.
    ///
    /// Used by the heap layer to drop the relocated root.
    pub(crate) fn pop(&mut self) -> Result<T, QueueError> {
        let value = match &mut self.repr {
            Repr::Bounded(ring) => ring.pop_back(),
            Repr::Unbounded(buf) => buf.pop_back(),
        };
        value.ok_or(QueueError::Empty)
    }

    /// Returns the element at logical index `i` (front = 0).
    #[inline]
    pub(crate) fn get(&self, i: usize) -> Option<&T> {
        match &self.repr {
            Repr::Bounded(ring) => ring.get(i),
            Repr::Unbounded(buf) => buf.get(i),
        }
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        match &mut self.repr {
            Repr::Bounded(ring) => ring.get_mut(i),
            Repr::Unbounded(buf) => buf.get_mut(i),
        }
    }

    /// Exchanges logical slots `i` and `j`.
    ///
    /// # Panics
    /// Panics if either index is `>= len()`.
    #[inline]
    pub(crate) fn swap(&mut self, i: usize, j: usize) {
        match &mut self.repr {
            Repr::Bounded(ring) => ring.swap(i, j),
            Repr::Unbounded(buf) => buf.swap(i, j),
        }
    }

    /// Returns the element that the next `pull` would remove.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.get(0)
    }

    /// Drops all elements. Bounded queues keep their capacity; unbounded
    /// queues keep their current allocation.
    pub fn clear(&mut self) {
        match &mut self.repr {
            Repr::Bounded(ring) => ring.clear(),
            Repr::Unbounded(buf) => buf.clear(),
        }
    }

    /// Iterates from head to tail without removing anything.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        (0..self.len()).filter_map(move |i| self.get(i))
    }
}

impl<T> Default for RingBuffer<T> {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl<T: fmt::Debug> fmt::Debug for RingBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RingBuffer")
            .field("bounded", &self.is_bounded())
            .field("len", &self.len())
            .field("cap", &self.cap())
            .field("items", &DebugItems(self))
            .finish()
    }
}

struct DebugItems<'a, T>(&'a RingBuffer<T>);

impl<T: fmt::Debug> fmt::Debug for DebugItems<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

impl<T> Queue for RingBuffer<T> {
    type Elem = T;

    fn len(&self) -> usize {
        RingBuffer::len(self)
    }

    fn cap(&self) -> usize {
        RingBuffer::cap(self)
    }

    fn is_empty(&self) -> bool {
        RingBuffer::is_empty(self)
    }

    fn is_full(&self) -> bool {
        RingBuffer::is_full(self)
    }

    fn push(&mut self, value: T) -> Result<(), PushError<T>> {
        RingBuffer::push(self, value)
    }

    fn pull(&mut self) -> Result<T, QueueError> {
        RingBuffer::pull(self)
    }
}

// Kani proofs and property tests live in the sibling module.
#[cfg(any(test, kani))]
#[path = "ring_buffer_tests.rs"]
mod ring_buffer_tests;
