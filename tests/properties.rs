//! Random operation sequences checked against `Vec`.

use hybridvec::{GrowVec, HybridVec};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Push(i32),
    Pop,
    Insert(usize, i32),
    InsertMany(usize, Vec<i32>),
    Remove(usize),
    Erase(usize, usize),
    Truncate(usize),
    Resize(usize, i32),
    Assign(Vec<i32>),
    Reserve(usize),
    ShrinkToFit,
    Clear,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => any::<i32>().prop_map(Op::Push),
        2 => Just(Op::Pop),
        2 => (any::<usize>(), any::<i32>()).prop_map(|(i, v)| Op::Insert(i, v)),
        1 => (any::<usize>(), prop::collection::vec(any::<i32>(), 0..12))
            .prop_map(|(i, v)| Op::InsertMany(i, v)),
        1 => any::<usize>().prop_map(Op::Remove),
        1 => (any::<usize>(), any::<usize>()).prop_map(|(a, b)| Op::Erase(a, b)),
        1 => (0usize..24).prop_map(Op::Truncate),
        1 => (0usize..24, any::<i32>()).prop_map(|(n, v)| Op::Resize(n, v)),
        1 => prop::collection::vec(any::<i32>(), 0..12).prop_map(Op::Assign),
        1 => (0usize..20).prop_map(Op::Reserve),
        1 => Just(Op::ShrinkToFit),
        1 => Just(Op::Clear),
    ]
}

/// Applies `op` to both sides. Out-of-range positions are reduced modulo
/// the current length so every op is valid.
macro_rules! apply {
    ($vec:expr, $model:expr, $op:expr) => {{
        let len = $model.len();
        match $op {
            Op::Push(v) => {
                $vec.push(v);
                $model.push(v);
            }
            Op::Pop => assert_eq!($vec.pop(), $model.pop()),
            Op::Insert(i, v) => {
                let i = i % (len + 1);
                $vec.insert(i, v);
                $model.insert(i, v);
            }
            Op::InsertMany(i, items) => {
                let i = i % (len + 1);
                $vec.insert_from_slice(i, &items);
                $model.splice(i..i, items.iter().copied());
            }
            Op::Remove(i) => {
                if len > 0 {
                    let i = i % len;
                    assert_eq!($vec.remove(i), $model.remove(i));
                }
            }
            Op::Erase(a, b) => {
                let a = a % (len + 1);
                let b = a + b % (len - a + 1);
                $vec.erase(a..b);
                $model.drain(a..b);
            }
            Op::Truncate(n) => {
                $vec.truncate(n);
                $model.truncate(n);
            }
            Op::Resize(n, v) => {
                $vec.resize(n, v);
                $model.resize(n, v);
            }
            Op::Assign(items) => {
                $vec.assign_from_slice(&items);
                $model.clone_from(&items);
            }
            Op::Reserve(n) => {
                $vec.reserve(n);
                assert!($vec.capacity() >= $model.len() + n);
            }
            Op::ShrinkToFit => $vec.shrink_to_fit(),
            Op::Clear => {
                $vec.clear();
                $model.clear();
            }
        }
    }};
}

proptest! {
    #[test]
    fn hybrid_matches_vec(ops in prop::collection::vec(op(), 0..64)) {
        let mut vec: HybridVec<i32, 4> = HybridVec::new();
        let mut model: Vec<i32> = Vec::new();
        for op in ops {
            apply!(vec, model, op);
            prop_assert_eq!(vec.as_slice(), model.as_slice());
            prop_assert!(vec.len() <= vec.capacity());
            if vec.is_static() {
                prop_assert_eq!(vec.capacity(), 4);
            } else {
                prop_assert!(vec.capacity() >= 4);
            }
        }
    }

    #[test]
    fn grow_matches_vec(ops in prop::collection::vec(op(), 0..64)) {
        let mut vec: GrowVec<i32, 3> = GrowVec::new();
        let mut model: Vec<i32> = Vec::new();
        for op in ops {
            apply!(vec, model, op);
            prop_assert_eq!(vec.as_slice(), model.as_slice());
            prop_assert!(vec.len() <= vec.capacity());
            prop_assert_eq!(vec.is_inline(), vec.capacity() == 3);
        }
    }

    #[test]
    fn promotion_sticks_until_shrink(ops in prop::collection::vec(op(), 0..64)) {
        let mut vec: HybridVec<i32, 4> = HybridVec::new();
        let mut model: Vec<i32> = Vec::new();
        for op in ops {
            let was_dynamic = vec.is_dynamic();
            let shrinks = matches!(op, Op::ShrinkToFit);
            apply!(vec, model, op);
            if was_dynamic && !shrinks {
                prop_assert!(vec.is_dynamic());
            }
            if vec.len() > 4 {
                prop_assert!(vec.is_dynamic());
            }
        }
    }

    #[test]
    fn insert_then_erase_restores(
        items in prop::collection::vec(any::<i32>(), 0..16),
        extra in prop::collection::vec(any::<i32>(), 0..16),
        at in any::<usize>(),
    ) {
        let mut vec: HybridVec<i32, 8> = HybridVec::from_slice(&items);
        let at = at % (items.len() + 1);
        vec.insert_from_slice(at, &extra);
        prop_assert_eq!(vec.len(), items.len() + extra.len());
        prop_assert_eq!(&vec[at..at + extra.len()], extra.as_slice());
        vec.erase(at..at + extra.len());
        prop_assert_eq!(vec.as_slice(), items.as_slice());
    }

    #[test]
    fn reserve_never_reallocates_twice(
        items in prop::collection::vec(any::<i32>(), 0..16),
        additional in 0usize..32,
    ) {
        let mut vec: HybridVec<i32, 4> = HybridVec::from_slice(&items);
        vec.reserve(additional);
        let cap = vec.capacity();
        prop_assert!(cap >= items.len() + additional);
        vec.reserve(additional);
        prop_assert_eq!(vec.capacity(), cap);
    }
}
