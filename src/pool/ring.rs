//! Fixed-length circular slot storage backing the pool.
//!
//! `Ring` owns the slot array only. Cursor positions, occupancy accounting
//! and the locking protocol live in [`Pool`](crate::Pool); the ring itself
//! has no notion of full or empty.

use parking_lot::Mutex;

/// A fixed-length array of slots addressed circularly.
///
/// Slots hold `Option<T>` behind their own mutex so the push and pull
/// sides can each mutate their end of the occupied arc through a shared
/// reference. A slot's mutex is only ever contended transiently; under
/// the pool's occupancy discipline push and pull never address the same
/// slot at the same time.
pub(crate) struct Ring<T> {
    slots: Vec<Mutex<Option<T>>>,
}

impl<T> Ring<T> {
    /// Creates a ring of `capacity` vacant slots.
    pub(crate) fn new(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || Mutex::new(None));
        Self { slots }
    }

    /// Returns the number of slots.
    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the position following `index`, wrapping at capacity.
    pub(crate) fn advance(&self, index: usize) -> usize {
        (index + 1) % self.slots.len()
    }

    /// Stores `item` into the slot at `index`.
    ///
    /// The caller must have established that the slot is outside the
    /// occupied arc; any previous occupant would be dropped.
    pub(crate) fn put(&self, index: usize, item: T) {
        *self.slots[index].lock() = Some(item);
    }

    /// Removes and returns the occupant of the slot at `index`.
    pub(crate) fn take(&self, index: usize) -> Option<T> {
        self.slots[index].lock().take()
    }

    /// Builds a replacement ring of `new_capacity` slots holding the
    /// oldest `keep` occupants of the circular arc that starts at `start`,
    /// moved to positions `0..keep` in arc order.
    ///
    /// The arc may wrap past the end of this ring; it is moved in at most
    /// two contiguous segments. Occupants beyond `keep` stay behind and
    /// are dropped with `self`. Caller guarantees `keep <= new_capacity`
    /// and that the arc holds at least `keep` occupants.
    pub(crate) fn rebuild(&mut self, start: usize, keep: usize, new_capacity: usize) -> Ring<T> {
        let first = keep.min(self.slots.len() - start);

        let mut slots = Vec::with_capacity(new_capacity);
        for slot in &mut self.slots[start..start + first] {
            slots.push(Mutex::new(slot.get_mut().take()));
        }
        for slot in &mut self.slots[..keep - first] {
            slots.push(Mutex::new(slot.get_mut().take()));
        }
        slots.resize_with(new_capacity, || Mutex::new(None));

        Ring { slots }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(ring: &Ring<u32>, pairs: &[(usize, u32)]) {
        for &(index, value) in pairs {
            ring.put(index, value);
        }
    }

    fn drain(ring: &Ring<u32>) -> Vec<Option<u32>> {
        (0..ring.capacity()).map(|i| ring.take(i)).collect()
    }

    #[test]
    fn test_new_ring_is_vacant() {
        let ring: Ring<u32> = Ring::new(4);
        assert_eq!(ring.capacity(), 4);
        assert_eq!(drain(&ring), vec![None; 4]);
    }

    #[test]
    fn test_put_take_roundtrip() {
        let ring = Ring::new(3);
        ring.put(1, 42);
        assert_eq!(ring.take(1), Some(42));
        assert_eq!(ring.take(1), None, "take vacates the slot");
    }

    #[test]
    fn test_advance_wraps() {
        let ring: Ring<u32> = Ring::new(3);
        assert_eq!(ring.advance(0), 1);
        assert_eq!(ring.advance(1), 2);
        assert_eq!(ring.advance(2), 0);
    }

    #[test]
    fn test_rebuild_contiguous_arc() {
        let mut ring = Ring::new(6);
        fill(&ring, &[(2, 10), (3, 11), (4, 12)]);

        let rebuilt = ring.rebuild(2, 3, 6);
        assert_eq!(
            drain(&rebuilt),
            vec![Some(10), Some(11), Some(12), None, None, None]
        );
    }

    #[test]
    fn test_rebuild_wrapped_arc_two_segments() {
        // Arc of 4 starting at slot 3 of 5: slots 3, 4, 0, 1.
        let mut ring = Ring::new(5);
        fill(&ring, &[(3, 20), (4, 21), (0, 22), (1, 23)]);

        let rebuilt = ring.rebuild(3, 4, 8);
        let contents = drain(&rebuilt);
        assert_eq!(contents[..4], [Some(20), Some(21), Some(22), Some(23)]);
        assert_eq!(contents[4..], [None, None, None, None]);
    }

    #[test]
    fn test_rebuild_keeps_oldest_on_shrink() {
        let mut ring = Ring::new(4);
        fill(&ring, &[(0, 1), (1, 2), (2, 3)]);

        // keep = 2 retains the head of the arc, slot order preserved.
        let rebuilt = ring.rebuild(0, 2, 2);
        assert_eq!(drain(&rebuilt), vec![Some(1), Some(2)]);
    }

    #[test]
    fn test_rebuild_wrapped_shrink_cuts_second_segment() {
        // Arc of 4 starting at slot 2 of 4: slots 2, 3, 0, 1. Keeping 3
        // takes the whole first segment and one slot of the second.
        let mut ring = Ring::new(4);
        fill(&ring, &[(2, 30), (3, 31), (0, 32), (1, 33)]);

        let rebuilt = ring.rebuild(2, 3, 3);
        assert_eq!(drain(&rebuilt), vec![Some(30), Some(31), Some(32)]);
    }

    #[test]
    fn test_rebuild_empty_arc() {
        let mut ring: Ring<u32> = Ring::new(3);
        let rebuilt = ring.rebuild(2, 0, 5);
        assert_eq!(rebuilt.capacity(), 5);
        assert_eq!(drain(&rebuilt), vec![None; 5]);
    }
}
