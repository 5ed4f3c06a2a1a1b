//! Error types for queue operations.
//!
//! All conditions are local and recoverable. Failed operations leave the
//! container unchanged.
//!
//! # Design Notes
//! - `QueueError` is `#[non_exhaustive]`; consumers should include a fallback
//!   match arm.
//! - A rejected push hands the value back through [`PushError`] so ownership
//!   is never silently lost. `PushError` converts into `QueueError::Full` for
//!   callers that only care about the condition.

use std::fmt;

/// Errors returned by [`RingBuffer`](crate::RingBuffer) and
/// [`PriorityQueue`](crate::PriorityQueue) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum QueueError {
    /// Push on a bounded queue that is already at capacity.
    Full,
    /// Pull or pop with no elements present.
    Empty,
    /// Ordering change requested after elements were inserted.
    NotEmpty,
}

impl fmt::Display for QueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Full => write!(f, "queue is full"),
            Self::Empty => write!(f, "queue is empty"),
            Self::NotEmpty => {
                write!(f, "queue can't change its ordering because it is not empty")
            }
        }
    }
}

impl std::error::Error for QueueError {}

/// A push rejected because the bounded queue is full.
///
/// Carries the rejected value so the caller can retry or reroute it.
#[derive(Clone, PartialEq, Eq)]
pub struct PushError<T> {
    value: T,
}

impl<T> PushError<T> {
    #[inline]
    pub(crate) fn full(value: T) -> Self {
        Self { value }
    }

    /// Returns the value that could not be pushed.
    #[inline]
    pub fn into_inner(self) -> T {
        self.value
    }

    /// Borrows the value that could not be pushed.
    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The condition that caused the rejection.
    #[inline]
    pub fn kind(&self) -> QueueError {
        QueueError::Full
    }
}

// Manual impl so `T` need not be `Debug`.
impl<T> fmt::Debug for PushError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PushError").finish_non_exhaustive()
    }
}

impl<T> fmt::Display for PushError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.kind(), f)
    }
}

impl<T> std::error::Error for PushError<T> {}

impl<T> From<PushError<T>> for QueueError {
    fn from(err: PushError<T>) -> Self {
        err.kind()
    }
}
