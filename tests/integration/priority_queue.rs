//! Ordering and position bookkeeping of `PriorityQueue`.

use queue_rs::{Item, Order, PriorityQueue, QueueConfig, QueueError};

use crate::init_tracing;

const PRIORITIES: [i64; 5] = [7, 5, 3, 8, 6];

fn drain_priorities<V>(pq: &mut PriorityQueue<V>) -> Vec<i64> {
    pq.drain().map(|item| item.priority()).collect()
}

#[test]
fn default_order_pulls_highest_first() {
    for mut pq in [PriorityQueue::bounded(8), PriorityQueue::unbounded()] {
        for p in PRIORITIES {
            pq.push(Item::new(p, format!("item-{p}"))).unwrap();
        }
        assert_eq!(drain_priorities(&mut pq), vec![8, 7, 6, 5, 3]);
    }
}

#[test]
fn ascending_pulls_lowest_first() {
    init_tracing();

    for mut pq in [PriorityQueue::bounded(8), PriorityQueue::unbounded()] {
        pq.set_ascending().unwrap();
        for p in PRIORITIES {
            pq.push_value(p, ()).unwrap();
        }
        assert_eq!(drain_priorities(&mut pq), vec![3, 5, 6, 7, 8]);
    }
}

#[test]
fn reorder_with_one_element_rejected() {
    let mut pq = PriorityQueue::unbounded();
    pq.push_value(1, ()).unwrap();
    assert_eq!(pq.set_ascending(), Err(QueueError::NotEmpty));
    assert_eq!(pq.set_descending(), Err(QueueError::NotEmpty));
    assert_eq!(pq.len(), 1);
}

#[test]
fn positions_track_true_index() {
    let mut pq = PriorityQueue::unbounded();
    let mut pulled = Vec::new();

    for round in 0..50i64 {
        pq.push_value((round * 37) % 23, round).unwrap();
        if round % 3 == 0 {
            pulled.push(pq.pull().unwrap());
        }
        for (i, item) in pq.iter().enumerate() {
            assert_eq!(item.position(), Some(i));
        }
    }
    assert!(pulled.iter().all(|item| item.position().is_none()));
}

#[test]
fn first_push_lands_at_zero() {
    let mut pq = PriorityQueue::bounded(4);
    pq.push_value(3, "first").unwrap();
    let root = pq.peek().unwrap();
    assert_eq!(root.position(), Some(0));
    assert_eq!(root.to_string(), r#"{p: 3, v: "first", idx: 0}"#);
}

#[test]
fn extra_pull_after_drain_is_empty() {
    let mut pq = PriorityQueue::unbounded();
    for p in PRIORITIES {
        pq.push_value(p, ()).unwrap();
    }
    for _ in PRIORITIES {
        pq.pull().unwrap();
    }
    assert_eq!(pq.pull().unwrap_err(), QueueError::Empty);
}

#[test]
fn full_bounded_queue_rejects_and_keeps_state() {
    let mut pq = PriorityQueue::bounded(3);
    for p in [1, 2, 3] {
        pq.push_value(p, ()).unwrap();
    }
    let before: Vec<i64> = pq.iter().map(Item::priority).collect();

    let rejected = pq.push_value(99, ()).unwrap_err().into_inner();
    assert_eq!(rejected.priority(), 99);
    assert_eq!(rejected.position(), None);

    let after: Vec<i64> = pq.iter().map(Item::priority).collect();
    assert_eq!(before, after);
    assert_eq!(drain_priorities(&mut pq), vec![3, 2, 1]);
}

#[test]
fn config_constructs_ascending_bounded_queue() {
    let cfg = QueueConfig::bounded(16).with_order(Order::Ascending);
    let mut pq = PriorityQueue::with_config(&cfg);
    assert_eq!(pq.cap(), 16);
    for p in PRIORITIES {
        pq.push_value(p, ()).unwrap();
    }
    assert_eq!(pq.pull().unwrap().priority(), 3);
}

#[test]
fn unbounded_heap_shrinks_as_it_drains() {
    let mut pq = PriorityQueue::unbounded();
    for p in 0..200 {
        pq.push_value(p, ()).unwrap();
    }
    let peak = pq.cap();
    while pq.len() > 20 {
        pq.pull().unwrap();
    }
    assert!(pq.cap() < peak);
    assert!(pq.cap() >= pq.len());
    assert_eq!(pq.peek().map(Item::priority), Some(19));
}
