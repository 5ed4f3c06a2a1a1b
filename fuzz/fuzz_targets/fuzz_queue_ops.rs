//! Fuzz target driving both queue types with an arbitrary operation stream.
//!
//! Checks against simple models:
//!   RingBuffer     == VecDeque (bounded and unbounded)
//!   PriorityQueue  pulls the extreme priority of a naive Vec model
//!
//! # Input Format
//!
//! Byte 0 selects the capacity (0 = unbounded) and byte 1 the heap order.
//! Every following pair of bytes is one operation: `[opcode, payload]`.
//!
//! # Running
//!
//! ```bash
//! cargo +nightly fuzz run fuzz_queue_ops -- -max_len=4096
//! ```

#![no_main]

use std::collections::VecDeque;

use libfuzzer_sys::fuzz_target;
use queue_rs::{Order, PriorityQueue, QueueConfig, QueueError, RingBuffer};

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    let capacity = (data[0] % 32) as usize;
    let order = if data[1] & 1 == 0 {
        Order::Descending
    } else {
        Order::Ascending
    };
    let cfg = QueueConfig {
        capacity,
        order,
    };

    let mut rb = RingBuffer::with_config(&cfg);
    let mut rb_model: VecDeque<u8> = VecDeque::new();
    let mut pq = PriorityQueue::with_config(&cfg);
    let mut pq_model: Vec<i64> = Vec::new();

    for op in data[2..].chunks_exact(2) {
        let (opcode, payload) = (op[0], op[1]);
        match opcode % 3 {
            0 => {
                let full = capacity != 0 && rb_model.len() == capacity;
                assert_eq!(rb.push(payload).is_err(), full);
                if !full {
                    rb_model.push_back(payload);
                }

                let priority = i64::from(payload as i8);
                let full = capacity != 0 && pq_model.len() == capacity;
                assert_eq!(pq.push_value(priority, ()).is_err(), full);
                if !full {
                    pq_model.push(priority);
                }
            }
            1 => {
                assert_eq!(rb.pull().ok(), rb_model.pop_front());

                let best = pq_model
                    .iter()
                    .copied()
                    .reduce(|a, b| if order.outranks(b, a) { b } else { a });
                match best {
                    Some(p) => {
                        let item = pq.pull().unwrap();
                        assert_eq!(item.priority(), p);
                        assert_eq!(item.position(), None);
                        let idx = pq_model.iter().position(|&q| q == p).unwrap();
                        pq_model.swap_remove(idx);
                    }
                    None => assert_eq!(pq.pull().unwrap_err(), QueueError::Empty),
                }
            }
            _ => {
                rb.clear();
                rb_model.clear();
            }
        }

        assert_eq!(rb.len(), rb_model.len());
        assert!(rb.cap() >= rb.len());
        assert!(rb.iter().eq(rb_model.iter()));
        assert_eq!(pq.len(), pq_model.len());
        for (i, item) in pq.iter().enumerate() {
            assert_eq!(item.position(), Some(i));
        }
    }
});
