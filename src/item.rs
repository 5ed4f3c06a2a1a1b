//! Priority-queue element: a caller payload tagged with a priority.

use std::fmt;

/// A value paired with its ordering key.
///
/// `position` is heap bookkeeping: while the item is stored in a
/// [`PriorityQueue`](crate::PriorityQueue) it always equals the item's current
/// logical index in the backing array. It is `None` before the first push and
/// after the item has been pulled.
#[derive(Clone, PartialEq, Eq)]
pub struct Item<V> {
    priority: i64,
    value: V,
    position: Option<usize>,
}

impl<V> Item<V> {
    pub fn new(priority: i64, value: V) -> Self {
        Self {
            priority,
            value,
            position: None,
        }
    }

    #[inline]
    pub fn priority(&self) -> i64 {
        self.priority
    }

    #[inline]
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Mutable payload access. The priority is fixed once constructed, so this
    /// cannot break heap order.
    #[inline]
    pub fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    /// Logical index inside the owning heap, or `None` when not enqueued.
    #[inline]
    pub fn position(&self) -> Option<usize> {
        self.position
    }

    #[inline]
    pub(crate) fn set_position(&mut self, position: Option<usize>) {
        self.position = position;
    }

    pub fn into_value(self) -> V {
        self.value
    }

    /// Splits into `(priority, value)`.
    pub fn into_parts(self) -> (i64, V) {
        (self.priority, self.value)
    }
}

impl<V: fmt::Debug> fmt::Debug for Item<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Item")
            .field("priority", &self.priority)
            .field("value", &self.value)
            .field("position", &self.position)
            .finish()
    }
}

/// Renders `{p: <priority>, v: <value>, idx: <position>}` with `-1` for an
/// item that is not enqueued.
impl<V: fmt::Debug> fmt::Display for Item<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let idx = self.position.map_or(-1, |p| p as i64);
        write!(f, "{{p: {}, v: {:?}, idx: {}}}", self.priority, self.value, idx)
    }
}
