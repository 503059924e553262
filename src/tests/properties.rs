extern crate std;

use std::collections::VecDeque;
use std::vec::Vec;

use proptest::collection::vec as prop_vec;
use proptest::prelude::*;

use super::contents;
use crate::StretchRing;

#[derive(Debug, Clone)]
enum Op {
    PushBack(i32),
    PushFront(i32),
    PopBack,
    PopFront,
    Insert(usize, i32),
    Erase(usize),
    Window(i32),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<i32>().prop_map(Op::PushBack),
        any::<i32>().prop_map(Op::PushFront),
        Just(Op::PopBack),
        Just(Op::PopFront),
        (any::<usize>(), any::<i32>()).prop_map(|(i, v)| Op::Insert(i, v)),
        any::<usize>().prop_map(Op::Erase),
        any::<i32>().prop_map(Op::Window),
    ]
}

proptest! {
    /// Any operation sequence observed through indexed access must match a
    /// reference double-ended queue.
    #[test]
    fn matches_reference_deque(ops in prop_vec(op_strategy(), 0..200)) {
        let mut ring = StretchRing::new();
        let mut model: VecDeque<i32> = VecDeque::new();

        for op in ops {
            match op {
                Op::PushBack(v) => {
                    ring.push_back(v);
                    model.push_back(v);
                }
                Op::PushFront(v) => {
                    ring.push_front(v);
                    model.push_front(v);
                }
                Op::PopBack => {
                    prop_assert_eq!(ring.pop_back(), model.pop_back());
                }
                Op::PopFront => {
                    prop_assert_eq!(ring.pop_front(), model.pop_front());
                }
                Op::Insert(i, v) => {
                    let at = i % (ring.len() + 1);
                    ring.insert(at, v);
                    model.insert(at, v);
                }
                Op::Erase(i) => {
                    if !model.is_empty() {
                        let at = i % ring.len();
                        let removed = model.remove(at);
                        prop_assert_eq!(Some(ring.erase(at)), removed);
                    }
                }
                Op::Window(v) => {
                    // The eviction order depends on whether spare capacity
                    // exists, so mirror the branch over the model.
                    let expect = if ring.len() < ring.capacity() {
                        model.push_front(v);
                        model.pop_back()
                    } else {
                        let evicted = model.pop_back();
                        model.push_front(v);
                        evicted
                    };
                    prop_assert_eq!(ring.push_front_and_pop_back(v), expect);
                }
            }

            prop_assert!(ring.len() <= ring.capacity());
            prop_assert_eq!(ring.len(), model.len());
            let got: Vec<i32> = contents(&ring);
            let want: Vec<i32> = model.iter().copied().collect();
            prop_assert_eq!(got, want);
        }
    }

    /// Insert followed by erase at the same index restores the sequence.
    #[test]
    fn insert_erase_round_trip(
        seed in prop_vec(any::<i32>(), 0..40),
        at in any::<usize>(),
        value in any::<i32>(),
    ) {
        let mut ring = StretchRing::new();
        for v in &seed {
            ring.push_back(*v);
        }
        let before = contents(&ring);
        let at = at % (ring.len() + 1);

        ring.insert(at, value);
        prop_assert_eq!(ring.len(), before.len() + 1);
        prop_assert_eq!(ring[at], value);

        prop_assert_eq!(ring.erase(at), value);
        prop_assert_eq!(contents(&ring), before);
    }

    /// The window update keeps the element count fixed on a full window.
    #[test]
    fn window_width_is_stable(
        width in 1usize..16,
        samples in prop_vec(any::<i32>(), 0..64),
    ) {
        let mut window: StretchRing<i32> = StretchRing::filled(width);
        for v in samples {
            let before = contents(&window);
            let evicted = window.push_front_and_pop_back(v);
            prop_assert_eq!(window.len(), width);
            prop_assert_eq!(evicted.as_ref(), before.last());
            prop_assert_eq!(window.front(), Some(&v));
            prop_assert_eq!(&contents(&window)[1..], &before[..width - 1]);
        }
    }
}
