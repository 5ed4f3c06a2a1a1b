//! Generic use through the `Queue` trait.

use queue_rs::{Item, PriorityQueue, Queue, QueueError, RingBuffer};

/// Pushes every value it can, returning how many were rejected.
fn fill<Q: Queue>(q: &mut Q, values: impl IntoIterator<Item = Q::Elem>) -> usize {
    values
        .into_iter()
        .map(|v| q.push(v))
        .filter(Result::is_err)
        .count()
}

fn drain<Q: Queue>(q: &mut Q) -> Vec<Q::Elem> {
    let mut out = Vec::with_capacity(q.len());
    loop {
        match q.pull() {
            Ok(v) => out.push(v),
            Err(QueueError::Empty) => break,
            Err(err) => panic!("unexpected error: {err}"),
        }
    }
    out
}

#[test]
fn ring_buffer_through_trait() {
    let mut q = RingBuffer::bounded(3);
    assert_eq!(fill(&mut q, [1, 2, 3, 4]), 1);
    assert!(Queue::is_full(&q));
    assert_eq!(Queue::cap(&q), 3);
    assert_eq!(drain(&mut q), vec![1, 2, 3]);
    assert!(Queue::is_empty(&q));
}

#[test]
fn priority_queue_through_trait() {
    let mut pq = PriorityQueue::unbounded();
    let items = [4, 1, 3].map(|p| Item::new(p, ()));
    assert_eq!(fill(&mut pq, items), 0);
    assert_eq!(Queue::len(&pq), 3);
    let priorities: Vec<i64> = drain(&mut pq).iter().map(Item::priority).collect();
    assert_eq!(priorities, vec![4, 3, 1]);
}
