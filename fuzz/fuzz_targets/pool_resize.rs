#![no_main]

use libfuzzer_sys::fuzz_target;
use poolrs::Pool;

// Resize sequences over a pool kept near capacity, with the occupied arc
// deliberately wrapped before each resize.
fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let initial_capacity = usize::from(data[0] % 64) + 1;
    let pool = Pool::new(initial_capacity, || u64::MAX);

    let mut pushed = 0u64;
    let mut oldest = 0u64;

    // Fill, rotate a few entries so the arc wraps, then resize per input
    // byte. Stored values are consecutive, so FIFO order means the pool
    // always delivers `oldest`.
    for &byte in &data[1..] {
        while !pool.is_full() {
            pool.push(pushed);
            pushed += 1;
        }
        for _ in 0..usize::from(byte % 4) {
            let delivered = pool.pull();
            assert_eq!(delivered, oldest, "FIFO order broken before resize");
            oldest += 1;
            pool.push(pushed);
            pushed += 1;
        }

        let occupancy_before = pool.len();
        let new_capacity = usize::from(byte % 64) + 1;
        pool.resize(new_capacity);

        assert_eq!(pool.capacity(), new_capacity);
        assert_eq!(pool.len(), occupancy_before.min(new_capacity));
        assert!(pool.len() <= pool.capacity());

        // Shrinking sheds the newest values; the oldest survivor is
        // unchanged, so the next push continues right after the tail.
        pushed = oldest + pool.len() as u64;
    }

    // Final drain must be consecutive from `oldest`.
    while let Some(delivered) = pool.try_pull() {
        assert_eq!(delivered, oldest);
        oldest += 1;
    }
});
