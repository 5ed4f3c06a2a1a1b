//! Construction-time configuration shared by both queue types.

/// Capacity used by a bounded priority queue when asked for capacity 0.
pub const DEFAULT_CAPACITY: usize = 1024;

/// Growable storage only shrinks when its capacity is at least this large.
///
/// Keeps small queues from reallocating back and forth near the growth floor.
pub const SHRINK_MIN_CAPACITY: usize = 32;

/// Heap ordering for [`PriorityQueue`](crate::PriorityQueue).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Order {
    /// Higher priority values are pulled first (max-heap).
    #[default]
    Descending,
    /// Lower priority values are pulled first (min-heap).
    Ascending,
}

impl Order {
    /// Returns true when priority `a` must be pulled before priority `b`.
    #[inline]
    pub fn outranks(self, a: i64, b: i64) -> bool {
        match self {
            Self::Descending => a > b,
            Self::Ascending => a < b,
        }
    }
}

/// Queue construction parameters.
///
/// `capacity == 0` selects the unbounded, auto-growing layout. `order` is only
/// consulted by priority queues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QueueConfig {
    /// Fixed capacity, or 0 for unbounded.
    pub capacity: usize,
    /// Heap ordering installed at construction.
    pub order: Order,
}

impl QueueConfig {
    /// Bounded configuration with the default ordering.
    pub fn bounded(capacity: usize) -> Self {
        Self {
            capacity,
            order: Order::default(),
        }
    }

    /// Unbounded configuration with the default ordering.
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Replaces the ordering.
    pub fn with_order(mut self, order: Order) -> Self {
        self.order = order;
        self
    }

    /// True when this configuration selects the auto-growing layout.
    #[inline]
    pub fn is_unbounded(&self) -> bool {
        self.capacity == 0
    }
}
