// Model-based tests: random operation sequences against a VecDeque
// reference implementing the same overflow, underflow and shrink policies.

use std::collections::VecDeque;

use proptest::prelude::*;

use poolrs::Pool;

/// Values at or above this mark came from the factory, not the pool.
const FRESH_BASE: u64 = 1_000_000;

#[derive(Debug, Clone)]
enum Op {
    Push(u16),
    Pull,
    TryPull,
    Resize(usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => any::<u16>().prop_map(Op::Push),
        4 => Just(Op::Pull),
        2 => Just(Op::TryPull),
        1 => (1usize..24).prop_map(Op::Resize),
    ]
}

proptest! {
    #[test]
    fn pool_matches_fifo_model(
        initial_capacity in 1usize..16,
        ops in prop::collection::vec(op_strategy(), 0..300),
    ) {
        let pool = Pool::new(initial_capacity, || FRESH_BASE);
        let mut model: VecDeque<u64> = VecDeque::new();
        let mut capacity = initial_capacity;

        for op in ops {
            match op {
                Op::Push(value) => {
                    let value = u64::from(value);
                    pool.push(value);
                    if model.len() < capacity {
                        model.push_back(value);
                    }
                }
                Op::Pull => {
                    let delivered = pool.pull();
                    match model.pop_front() {
                        Some(expected) => prop_assert_eq!(delivered, expected),
                        None => prop_assert_eq!(delivered, FRESH_BASE),
                    }
                }
                Op::TryPull => {
                    prop_assert_eq!(pool.try_pull(), model.pop_front());
                }
                Op::Resize(new_capacity) => {
                    pool.resize(new_capacity);
                    capacity = new_capacity;
                    // Shrinking sheds the newest entries.
                    while model.len() > capacity {
                        model.pop_back();
                    }
                }
            }

            prop_assert_eq!(pool.capacity(), capacity);
            prop_assert_eq!(pool.len(), model.len());
            prop_assert!(pool.len() <= pool.capacity());
        }

        // Drain: everything left must come out in model order.
        while let Some(expected) = model.pop_front() {
            prop_assert_eq!(pool.pull(), expected);
        }
        prop_assert!(pool.is_empty());
    }
}
