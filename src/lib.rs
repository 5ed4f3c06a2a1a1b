//! Array-backed ring queue and binary-heap priority queue.
//!
//! ## Scope
//! Two in-memory containers sharing one storage abstraction:
//! - [`RingBuffer`]: FIFO queue, either bounded (preallocated circular array
//!   with wrap-around head/tail) or unbounded (growable array that shrinks
//!   when sparse).
//! - [`PriorityQueue`]: binary heap of [`Item`]s stored in a `RingBuffer`,
//!   pulling the highest priority first by default or the lowest with
//!   [`Order::Ascending`].
//!
//! ## Key invariants
//! - Bounded rings never reallocate; a push into a full ring is rejected and
//!   the value is handed back in [`PushError`].
//! - Every storage layout exposes a zero-based logical index space, so heap
//!   swaps never see physical wrap-around.
//! - A stored item's [`Item::position`] always equals its index in the heap
//!   array; pulled items report `None`.
//! - Heap ordering can only be changed while the queue is empty.
//!
//! ## Threading
//! Nothing here is synchronized. Wrap a queue in a mutex to share it.
//!
//! ## Logging
//! Storage reallocations and ordering changes emit `tracing` events at
//! `debug`; rejected pushes emit at `trace`. The library never installs a
//! subscriber.

mod config;
mod error;
mod fixed_ring;
mod grow_buffer;
mod item;
mod priority_queue;
mod ring_buffer;
#[cfg(test)]
pub mod test_utils;

pub use config::{Order, QueueConfig, DEFAULT_CAPACITY, SHRINK_MIN_CAPACITY};
pub use error::{PushError, QueueError};
pub use item::Item;
pub use priority_queue::PriorityQueue;
pub use ring_buffer::RingBuffer;

/// Container contract shared by [`RingBuffer`] and [`PriorityQueue`].
///
/// Lets callers drive either queue generically, e.g. a worker that drains
/// whatever queue it was handed.
pub trait Queue {
    /// Element type accepted by `push` and returned by `pull`.
    type Elem;

    fn len(&self) -> usize;

    /// Current physical capacity; see the implementors for growth rules.
    fn cap(&self) -> usize;

    fn is_empty(&self) -> bool;

    /// Always false for unbounded queues.
    fn is_full(&self) -> bool;

    /// Inserts `value`, handing it back if a bounded queue is full.
    fn push(&mut self, value: Self::Elem) -> Result<(), PushError<Self::Elem>>;

    /// Removes the next element, or fails with [`QueueError::Empty`].
    fn pull(&mut self) -> Result<Self::Elem, QueueError>;
}
