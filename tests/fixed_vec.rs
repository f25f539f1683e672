mod common;

use common::{Tracked, counters, expect_panic, panic_after_clones, reset, values};
use hybridvec::{Error, FixedVec, fixedvec};

#[test]
fn push_pop_and_access() {
    let mut vec: FixedVec<i32, 4> = FixedVec::new();
    assert!(vec.is_empty());
    vec.push(1);
    *vec.emplace_back(2) += 10;
    assert_eq!(vec, [1, 12]);
    assert_eq!(vec.front(), Some(&1));
    assert_eq!(vec.back(), Some(&12));
    assert_eq!(vec.at(1), Ok(&12));
    assert_eq!(vec.at(2), Err(Error::IndexOutOfRange { index: 2, len: 2 }));
    *vec.at_mut(0).unwrap() = 5;
    assert_eq!(vec.pop(), Some(12));
    assert_eq!(vec.pop(), Some(5));
    assert_eq!(vec.pop(), None);
}

#[test]
#[should_panic(expected = "fixed capacity 2 exceeded (requested 3)")]
fn push_past_capacity_panics() {
    let mut vec: FixedVec<i32, 2> = fixedvec![1, 2];
    vec.push(3);
}

#[test]
#[should_panic(expected = "fixed capacity 3 exceeded (requested 5)")]
fn insert_n_past_capacity_panics() {
    let mut vec: FixedVec<i32, 3> = fixedvec![1, 2];
    vec.insert_n(0, 3, &0);
}

#[test]
fn try_reserve_reports_without_changing() {
    let vec: FixedVec<i32, 3> = fixedvec![1];
    assert_eq!(vec.try_reserve(2), Ok(()));
    assert_eq!(
        vec.try_reserve(3),
        Err(Error::CapacityExceeded {
            capacity: 3,
            requested: 4
        })
    );
    assert_eq!(vec, [1]);
}

#[test]
fn insert_and_erase_keep_order() {
    let mut vec: FixedVec<i32, 8> = fixedvec![1, 5];
    vec.insert(1, 4);
    vec.insert_from_slice(1, &[2, 3]);
    assert_eq!(vec, [1, 2, 3, 4, 5]);
    vec.insert_iter(5, [6, 7]);
    assert_eq!(vec, [1, 2, 3, 4, 5, 6, 7]);

    vec.erase(1..3);
    assert_eq!(vec, [1, 4, 5, 6, 7]);
    vec.erase(..=1);
    assert_eq!(vec, [5, 6, 7]);
    assert_eq!(vec.remove(1), 6);
    vec.erase(..);
    assert!(vec.is_empty());
}

#[test]
fn emplace_returns_the_new_element() {
    let mut vec: FixedVec<i32, 4> = fixedvec![1, 3];
    let slot = vec.emplace(1, 2);
    *slot *= 10;
    assert_eq!(vec, [1, 20, 3]);
}

#[test]
fn panicking_insert_leaves_contents() {
    reset();
    {
        let mut vec: FixedVec<Tracked, 8> = Tracked::many([1, 2, 3]).into_iter().collect();
        let extra = Tracked::many([7, 8, 9]);

        panic_after_clones(1);
        expect_panic(|| vec.insert_from_slice(1, &extra));

        assert_eq!(values(&vec), [1, 2, 3]);
        assert_eq!(vec.len(), 3);
        // The one clone made before the panic was destroyed.
        assert_eq!(counters().live(), 6);
    }
    assert_eq!(counters().live(), 0);
}

#[test]
fn assign_reuses_and_fits() {
    let mut vec: FixedVec<String, 4> = FixedVec::from_slice(&["a".to_string(), "b".to_string()]);
    vec.assign_from_slice(&["x".to_string(), "y".to_string(), "z".to_string()]);
    assert_eq!(vec, ["x", "y", "z"]);
    vec.assign_fill(1, &"k".to_string());
    assert_eq!(vec, ["k"]);
    vec.assign_iter(["p".to_string(), "q".to_string()]);
    assert_eq!(vec, ["p", "q"]);
}

#[test]
fn clone_and_clone_from() {
    reset();
    {
        let src: FixedVec<Tracked, 4> = Tracked::many([1, 2, 3]).into_iter().collect();
        let copy = src.clone();
        assert_eq!(copy, src);

        let mut target: FixedVec<Tracked, 4> = Tracked::many([9]).into_iter().collect();
        target.clone_from(&src);
        assert_eq!(values(&target), [1, 2, 3]);
    }
    assert_eq!(counters().live(), 0);
}

#[test]
fn resize_both_ways() {
    let mut vec: FixedVec<i32, 5> = fixedvec![1];
    vec.resize(4, 7);
    assert_eq!(vec, [1, 7, 7, 7]);
    vec.resize(2, 0);
    assert_eq!(vec, [1, 7]);
    let mut n = 0;
    vec.resize_with(5, || {
        n += 1;
        n
    });
    assert_eq!(vec, [1, 7, 1, 2, 3]);
    assert!(vec.is_full());
}

#[test]
fn swap_of_equal_lengths_moves_no_element() {
    reset();
    let mut a: FixedVec<Tracked, 4> = Tracked::many([1, 2, 3]).into_iter().collect();
    let mut b: FixedVec<Tracked, 4> = Tracked::many([11, 12, 13]).into_iter().collect();
    let before = counters();

    a.swap_with(&mut b);

    assert_eq!(values(&a), [11, 12, 13]);
    assert_eq!(values(&b), [1, 2, 3]);
    assert_eq!(counters(), before);
}

#[test]
fn swap_of_uneven_lengths() {
    let mut a: FixedVec<String, 4> = fixedvec!["a".to_string()];
    let mut b: FixedVec<String, 4> = fixedvec!["x".to_string(), "y".to_string(), "z".to_string()];
    a.swap_with(&mut b);
    assert_eq!(a, ["x", "y", "z"]);
    assert_eq!(b, ["a"]);
    b.swap_with(&mut a);
    assert_eq!(a, ["a"]);
}

#[test]
fn into_iter_drops_the_rest() {
    reset();
    let vec: FixedVec<Tracked, 4> = Tracked::many([1, 2, 3, 4]).into_iter().collect();
    let mut iter = vec.into_iter();
    assert_eq!(iter.next().map(|t| t.0), Some(1));
    assert_eq!(iter.next_back().map(|t| t.0), Some(4));
    assert_eq!(iter.len(), 2);
    drop(iter);
    assert_eq!(counters().live(), 0);
}

#[test]
fn into_vec_moves() {
    let vec: FixedVec<i32, 4> = fixedvec![1, 2, 3];
    let v = vec.into_vec();
    assert_eq!(v, [1, 2, 3]);
    assert_eq!(v.capacity(), 3);
}

#[test]
fn cursors_walk_the_elements() {
    let vec: FixedVec<i32, 4> = fixedvec![1, 2, 3];
    let mut it = vec.begin();
    let mut seen = Vec::new();
    while it != vec.end() {
        seen.push(*it);
        it += 1;
    }
    assert_eq!(seen, [1, 2, 3]);
    assert_eq!(*vec.cursor(2), 3);
    assert_eq!(vec.end() - vec.begin(), 3);
}

#[test]
fn spare_capacity_then_set_len() {
    let mut vec: FixedVec<u8, 4> = fixedvec![1];
    let spare = vec.spare_capacity_mut();
    assert_eq!(spare.len(), 3);
    spare[0].write(2);
    unsafe { vec.set_len(2) };
    assert_eq!(vec, [1, 2]);
}

#[test]
fn zero_sized_elements() {
    let mut vec: FixedVec<(), 3> = FixedVec::new();
    vec.push(());
    vec.insert(0, ());
    assert_eq!(vec.len(), 2);
    vec.erase(..1);
    assert_eq!(vec.len(), 1);
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "`pop_back` called on an empty container")]
fn pop_back_on_empty_panics_in_debug() {
    let mut vec: FixedVec<i32, 2> = FixedVec::new();
    vec.pop_back();
}

#[test]
#[cfg(not(debug_assertions))]
fn pop_back_on_empty_is_a_no_op_in_release() {
    let mut vec: FixedVec<i32, 2> = FixedVec::new();
    vec.pop_back();
    assert!(vec.is_empty());
}

#[test]
fn pop_back_drops_the_last() {
    reset();
    let mut vec: FixedVec<Tracked, 2> = Tracked::many([1, 2]).into_iter().collect();
    vec.pop_back();
    assert_eq!(counters().dropped, 1);
    assert_eq!(values(&vec), [1]);
}

#[test]
fn comparisons_and_hash() {
    use std::collections::HashSet;

    let a: FixedVec<i32, 4> = fixedvec![1, 2];
    let b: FixedVec<i32, 8> = fixedvec![1, 2];
    let c: FixedVec<i32, 4> = fixedvec![1, 3];
    assert_eq!(a, b);
    assert!(a < c);
    assert_eq!(a, vec![1, 2]);

    let set: HashSet<FixedVec<i32, 4>> = [a.clone(), c].into_iter().collect();
    assert!(set.contains(&a));
}
