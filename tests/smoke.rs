// smoke.rs - scenario coverage for the sparse set under realistic churn

use slotset::debug_assert_consistent;
use slotset::prelude::*;
use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq)]
struct Transform {
    position: [f32; 3],
}

#[test]
fn full_cycle_fill_round_trip_conditional_erase() {
    const CAPACITY: usize = 4096;
    let mut set = SparseSet::new(CAPACITY);

    for i in 0..set.capacity() {
        set.insert(
            i,
            Transform {
                position: [i as f32, 0.0, 0.0],
            },
        )
        .unwrap();
    }
    assert!(set.is_full());
    assert_eq!(set.len(), CAPACITY);

    for i in 0..set.capacity() {
        assert_eq!(set.at(i).unwrap().position[0], i as f32);
    }

    for i in 0..set.capacity() {
        if i % 3 != 0 {
            set.remove(i);
        }
    }
    for i in 0..set.capacity() {
        assert_eq!(set.contains(i), i % 3 == 0, "index {}", i);
    }
    let expected = (0..CAPACITY).filter(|i| i % 3 == 0).count();
    assert_eq!(set.len(), expected);
    debug_assert_consistent!(set);

    // Survivors still round-trip after the compaction churn.
    for i in (0..CAPACITY).step_by(3) {
        assert_eq!(set.at(i).unwrap().position[0], i as f32);
    }
}

#[test]
fn clear_scenario() {
    let mut set = SparseSet::new(256);
    for i in (0..256).rev() {
        set.insert(i, i as u64).unwrap();
    }
    set.clear();
    assert!(set.is_empty());
    assert_eq!(set.len(), 0);
    for i in 0..256 {
        assert!(!set.contains(i));
    }
    debug_assert_consistent!(set);
}

/// Value type that keeps a live-instance count, so drop accounting is
/// observable across inserts, replacements, removals, and teardown.
struct Guard {
    live: Rc<Cell<i64>>,
}

impl Guard {
    fn new(live: &Rc<Cell<i64>>) -> Self {
        live.set(live.get() + 1);
        Self {
            live: Rc::clone(live),
        }
    }
}

impl Drop for Guard {
    fn drop(&mut self) {
        self.live.set(self.live.get() - 1);
    }
}

#[test]
fn every_value_dropped_exactly_once() {
    let live = Rc::new(Cell::new(0i64));
    {
        let mut set = SparseSet::new(64);
        for i in 0..64 {
            set.insert_with(i, || Guard::new(&live)).unwrap();
        }
        assert_eq!(live.get(), 64);

        // Replacement drops the displaced value, nothing else.
        set.insert_with(10, || Guard::new(&live)).unwrap();
        assert_eq!(live.get(), 64);

        for i in (0..64).step_by(2) {
            set.remove(i);
        }
        assert_eq!(live.get(), 32);

        set.clear();
        assert_eq!(live.get(), 0);

        for i in 0..16 {
            set.insert_with(i, || Guard::new(&live)).unwrap();
        }
        assert_eq!(live.get(), 16);
        debug_assert_consistent!(set);
    }
    assert_eq!(live.get(), 0, "container drop releases remaining values");
}

#[test]
fn removed_values_are_handed_back() {
    let mut set = SparseSet::new(32);
    for i in 0..32 {
        set.insert(i, format!("value-{}", i)).unwrap();
    }
    let mut drained = 0;
    for i in 0..32 {
        if i % 2 == 0 {
            assert_eq!(set.remove(i).as_deref(), Some(format!("value-{}", i).as_str()));
            drained += 1;
        }
    }
    assert_eq!(set.len(), 32 - drained);
    debug_assert_consistent!(set);
}
