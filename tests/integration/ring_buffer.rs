//! FIFO, capacity, growth and shrink behavior of `RingBuffer`.

use queue_rs::{QueueError, RingBuffer, SHRINK_MIN_CAPACITY};

use crate::init_tracing;

#[test]
fn bounded_fifo_order() {
    let mut q = RingBuffer::bounded(8);
    let values = ["v0", "v1", "v2", "v3", "v4", "v5"];
    for v in values {
        q.push(v).unwrap();
    }
    for v in values {
        assert_eq!(q.pull(), Ok(v));
    }
}

#[test]
fn bounded_capacity_enforced() {
    const CAP: usize = 4;
    let mut q = RingBuffer::bounded(CAP);
    for i in 0..CAP {
        q.push(i).unwrap();
    }
    let err = q.push(CAP).unwrap_err();
    assert_eq!(QueueError::from(err), QueueError::Full);
    assert_eq!(q.len(), CAP);

    for _ in 0..CAP {
        q.pull().unwrap();
    }
    assert_eq!(q.pull(), Err(QueueError::Empty));
}

#[test]
fn unbounded_grows_and_cap_covers_len() {
    let mut q = RingBuffer::unbounded();
    for i in 0..10_000u32 {
        q.push(i).unwrap();
        assert!(q.cap() >= q.len());
        assert!(!q.is_full());
    }
    assert_eq!(q.len(), 10_000);
    assert_eq!(q.pull(), Ok(0));
}

#[test]
fn unbounded_shrinks_after_drain() {
    init_tracing();

    let mut q = RingBuffer::unbounded();
    for i in 0..40u32 {
        q.push(i).unwrap();
    }
    let peak = q.cap();
    assert!(peak >= SHRINK_MIN_CAPACITY);

    while q.len() > 10 {
        q.pull().unwrap();
    }
    assert_eq!(q.cap(), peak / 2);
    assert!(q.cap() >= q.len());
    assert_eq!(q.pull(), Ok(30));
}

#[test]
fn drain_then_one_more_pull_is_empty() {
    for mut q in [RingBuffer::bounded(3), RingBuffer::unbounded()] {
        q.push(1).unwrap();
        q.push(2).unwrap();
        q.pull().unwrap();
        q.push(3).unwrap();
        q.pull().unwrap();
        q.pull().unwrap();
        assert_eq!(q.pull(), Err(QueueError::Empty));
        assert!(q.is_empty());
    }
}

#[test]
fn rejected_value_is_not_lost() {
    let mut q = RingBuffer::bounded(1);
    q.push(String::from("kept")).unwrap();
    let rejected = q.push(String::from("returned")).unwrap_err().into_inner();
    assert_eq!(rejected, "returned");
    assert_eq!(q.peek().map(String::as_str), Some("kept"));
}
