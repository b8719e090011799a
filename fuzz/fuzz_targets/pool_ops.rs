#![no_main]

use std::collections::VecDeque;

use libfuzzer_sys::fuzz_target;
use poolrs::Pool;

// Values at or above this mark came from the factory.
const FRESH_BASE: u64 = 1_000_000;

fuzz_target!(|data: &[u8]| {
    let mut bytes = data.iter().copied();

    let initial_capacity = match bytes.next() {
        Some(b) => usize::from(b % 32) + 1,
        None => return,
    };

    let pool = Pool::new(initial_capacity, || FRESH_BASE);
    let mut model: VecDeque<u64> = VecDeque::new();
    let mut capacity = initial_capacity;
    let mut next_value = 0u64;

    // Each byte selects an operation; the pool must track the reference
    // model exactly.
    while let Some(op) = bytes.next() {
        match op % 4 {
            0 => {
                pool.push(next_value);
                if model.len() < capacity {
                    model.push_back(next_value);
                }
                next_value += 1;
            }
            1 => {
                let delivered = pool.pull();
                match model.pop_front() {
                    Some(expected) => assert_eq!(delivered, expected),
                    None => assert_eq!(delivered, FRESH_BASE),
                }
            }
            2 => {
                assert_eq!(pool.try_pull(), model.pop_front());
            }
            _ => {
                let new_capacity = match bytes.next() {
                    Some(b) => usize::from(b % 32) + 1,
                    None => break,
                };
                pool.resize(new_capacity);
                capacity = new_capacity;
                while model.len() > capacity {
                    model.pop_back();
                }
            }
        }

        assert_eq!(pool.capacity(), capacity);
        assert_eq!(pool.len(), model.len());
        assert!(pool.len() <= pool.capacity());
    }

    // Drain in FIFO order.
    while let Some(expected) = model.pop_front() {
        assert_eq!(pool.pull(), expected);
    }
    assert!(pool.is_empty());
});
