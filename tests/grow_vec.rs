mod common;

use common::{
    CountingAlloc, FailingAlloc, Faulty, Tracked, counters, expect_panic, panic_after_clones, reset, values,
};
use hybridvec::{Error, GrowVec, growvec};

#[test]
fn growth_doubles_from_the_minimum() {
    let mut vec: GrowVec<u64> = GrowVec::new();
    assert_eq!(vec.capacity(), 0);
    assert_eq!(vec.min_capacity(), 4);

    vec.push(1);
    assert_eq!(vec.capacity(), 4);
    vec.extend([2, 3, 4]);
    assert_eq!(vec.capacity(), 4);
    vec.push(5);
    assert_eq!(vec.capacity(), 8);
    vec.extend(6..=20);
    assert_eq!(vec.capacity(), 20);
    assert_eq!(vec.len(), 20);
}

#[test]
fn byte_vectors_start_at_eight() {
    let mut vec: GrowVec<u8> = GrowVec::new();
    vec.push(1);
    assert_eq!(vec.capacity(), 8);
}

#[test]
fn configured_minimum_applies_to_the_first_block() {
    let mut vec: GrowVec<u64> = GrowVec::with_min_capacity(32);
    vec.push(1);
    assert_eq!(vec.capacity(), 32);

    let mut exact: GrowVec<u64> = GrowVec::with_min_capacity(32);
    exact.reserve_exact(3);
    assert_eq!(exact.capacity(), 32);
}

#[test]
fn with_capacity_is_exact() {
    let vec: GrowVec<u64> = GrowVec::with_capacity(5);
    assert_eq!(vec.capacity(), 5);
    assert!(!vec.is_inline());

    let vec: GrowVec<u64, 8> = GrowVec::with_capacity(5);
    assert_eq!(vec.capacity(), 8);
    assert!(vec.is_inline());
}

#[test]
fn reserve_is_idempotent() {
    let mut vec: GrowVec<i32> = growvec![1, 2];
    vec.reserve(10);
    let cap = vec.capacity();
    assert!(cap >= 12);
    vec.reserve(10);
    assert_eq!(vec.capacity(), cap);
    vec.reserve(0);
    assert_eq!(vec.capacity(), cap);
}

#[test]
fn inline_block_then_heap_then_back() {
    let alloc = CountingAlloc::default();
    let mut vec: GrowVec<i32, 4, &CountingAlloc> = GrowVec::new_in(&alloc);

    vec.extend([1, 2, 3, 4]);
    assert!(vec.is_inline());
    assert_eq!(vec.capacity(), 4);
    assert_eq!(alloc.acquired(), 0);

    vec.push(5);
    assert!(!vec.is_inline());
    assert_eq!(vec.capacity(), 8);
    assert_eq!(alloc.live(), 1);

    vec.truncate(2);
    assert!(!vec.is_inline());
    vec.shrink_to_fit();
    assert!(vec.is_inline());
    assert_eq!(vec.capacity(), 4);
    assert_eq!(vec, [1, 2]);
    assert_eq!(alloc.live(), 0);
}

#[test]
fn drop_releases_the_block() {
    let alloc = CountingAlloc::default();
    {
        let mut vec: GrowVec<String, 0, &CountingAlloc> = GrowVec::new_in(&alloc);
        for i in 0..20 {
            vec.push(i.to_string());
        }
        assert!(alloc.acquired() > 1);
    }
    assert_eq!(alloc.live(), 0);
}

#[test]
fn panicking_growth_leaves_the_vector_as_it_was() {
    reset();
    let alloc = CountingAlloc::default();
    {
        let mut vec: GrowVec<Tracked, 0, &CountingAlloc> = GrowVec::with_capacity_in(4, &alloc);
        vec.extend(Tracked::many([1, 2, 3, 4]));
        let extra = Tracked::many([5, 6, 7]);
        let before = vec.as_ptr();

        panic_after_clones(2);
        expect_panic(|| vec.extend_from_slice(&extra));

        assert_eq!(values(&vec), [1, 2, 3, 4]);
        assert_eq!(vec.capacity(), 4);
        assert_eq!(vec.as_ptr(), before);
        assert_eq!(alloc.live(), 1);
        assert_eq!(alloc.acquired(), 2);

        let c = counters();
        assert_eq!(c.constructed, 9);
        assert_eq!(c.dropped, 2);
    }
    assert_eq!(counters().live(), 0);
    assert_eq!(alloc.live(), 0);
}

#[test]
fn panicking_iterator_during_growth() {
    reset();
    let mut vec: GrowVec<Tracked, 2> = GrowVec::new();
    vec.extend(Tracked::many([1, 2]));

    expect_panic(|| {
        vec.insert_iter(
            1,
            (0..4).map(|i| {
                if i == 2 {
                    panic!("iterator failed");
                }
                Tracked::new(10 + i)
            }),
        );
    });

    assert_eq!(values(&vec), [1, 2]);
    assert!(vec.is_inline());
    drop(vec);
    assert_eq!(counters().live(), 0);
}

#[test]
fn length_error_for_impossible_capacity() {
    let mut vec: GrowVec<u64> = growvec![1];
    assert!(matches!(
        vec.try_reserve(usize::MAX),
        Err(Error::LengthError { .. })
    ));
    assert!(matches!(
        vec.try_reserve(usize::MAX / 4),
        Err(Error::LengthError { .. })
    ));
    assert_eq!(vec, [1]);
    assert_eq!(vec.max_capacity(), isize::MAX as usize / 8);
}

#[test]
fn allocation_failure_is_reported() {
    let alloc = FailingAlloc::new(0);
    let mut vec: GrowVec<u64, 0, &FailingAlloc> = GrowVec::new_in(&alloc);
    assert_eq!(
        vec.try_reserve(3),
        Err(Error::AllocationFailure { size: 32, align: 8 })
    );
    assert!(vec.is_empty());
    assert_eq!(vec.capacity(), 0);
}

#[test]
#[should_panic(expected = "allocator failed to provide 32 bytes aligned to 8")]
fn push_panics_when_the_allocator_refuses() {
    let alloc = FailingAlloc::new(0);
    let mut vec: GrowVec<u64, 0, &FailingAlloc> = GrowVec::new_in(&alloc);
    vec.push(1);
}

#[test]
fn failed_shrink_keeps_the_block() {
    let alloc = FailingAlloc::new(1);
    let mut vec: GrowVec<u64, 0, &FailingAlloc> = GrowVec::with_capacity_in(10, &alloc);
    vec.extend([1, 2, 3]);
    vec.shrink_to_fit();
    assert_eq!(vec.capacity(), 10);
    assert_eq!(vec, [1, 2, 3]);
}

#[test]
fn shrink_to_len() {
    let alloc = CountingAlloc::default();
    let mut vec: GrowVec<u64, 0, &CountingAlloc> = GrowVec::with_capacity_in(10, &alloc);
    vec.extend([1, 2, 3]);
    vec.shrink_to_fit();
    assert_eq!(vec.capacity(), 3);
    assert_eq!(vec, [1, 2, 3]);
    assert_eq!(alloc.live(), 1);

    vec.clear();
    vec.shrink_to_fit();
    assert_eq!(vec.capacity(), 0);
    assert_eq!(alloc.live(), 0);
}

#[test]
fn heap_swap_exchanges_blocks() {
    let mut a: GrowVec<i32> = growvec![1, 2, 3];
    let mut b: GrowVec<i32> = growvec![4, 5];
    let (pa, pb) = (a.as_ptr(), b.as_ptr());

    a.swap_with(&mut b);

    assert_eq!(a, [4, 5]);
    assert_eq!(b, [1, 2, 3]);
    assert_eq!(a.as_ptr(), pb);
    assert_eq!(b.as_ptr(), pa);
}

#[test]
fn inline_swap_exchanges_elements() {
    reset();
    let mut a: GrowVec<Tracked, 4> = GrowVec::new();
    a.extend(Tracked::many([1, 2]));
    let mut b: GrowVec<Tracked, 4> = GrowVec::new();
    b.extend(Tracked::many(0..6));
    let before = counters();

    a.swap_with(&mut b);

    assert_eq!(values(&a), [0, 1, 2, 3, 4, 5]);
    assert_eq!(values(&b), [1, 2]);
    assert_eq!(counters().cloned, before.cloned);
    assert_eq!(counters().dropped, before.dropped);
}

#[test]
fn zero_sized_elements_never_allocate() {
    let alloc = CountingAlloc::default();
    let mut vec: GrowVec<(), 0, &CountingAlloc> = GrowVec::new_in(&alloc);
    for _ in 0..100 {
        vec.push(());
    }
    vec.insert(50, ());
    assert_eq!(vec.len(), 101);
    vec.erase(10..20);
    assert_eq!(vec.len(), 91);
    vec.shrink_to_fit();
    assert_eq!(alloc.acquired(), 0);
}

#[test]
fn insert_and_erase() {
    let mut vec: GrowVec<i32, 2> = growvec![1, 6];
    vec.insert(1, 2);
    vec.insert_iter(2, [3, 4, 5]);
    assert_eq!(vec, [1, 2, 3, 4, 5, 6]);
    vec.insert_n(0, 2, &0);
    assert_eq!(vec, [0, 0, 1, 2, 3, 4, 5, 6]);
    vec.erase(..2);
    vec.erase(3..=4);
    assert_eq!(vec, [1, 2, 3, 6]);
    assert_eq!(vec.remove(0), 1);
    assert_eq!(*vec.emplace(0, 9), 9);
    assert_eq!(vec, [9, 2, 3, 6]);
}

#[test]
fn insert_from_an_iterator_without_a_hint() {
    let mut vec: GrowVec<i32> = growvec![1, 5];
    let inserted = vec.insert_iter(1, (2..5).filter(|_| true));
    assert_eq!(inserted, 3);
    assert_eq!(vec, [1, 2, 3, 4, 5]);
}

#[test]
fn into_iter_drops_the_rest_and_the_block() {
    reset();
    let alloc = CountingAlloc::default();
    {
        let mut vec: GrowVec<Tracked, 0, &CountingAlloc> = GrowVec::new_in(&alloc);
        vec.extend(Tracked::many(0..10));
        let mut iter = vec.into_iter();
        assert_eq!(iter.next().map(|t| t.0), Some(0));
        assert_eq!(iter.next_back().map(|t| t.0), Some(9));
        assert_eq!(values(iter.as_slice()), [1, 2, 3, 4, 5, 6, 7, 8]);
    }
    assert_eq!(counters().live(), 0);
    assert_eq!(alloc.live(), 0);
}

#[test]
fn clone_keeps_the_minimum() {
    let mut vec: GrowVec<u64> = GrowVec::with_min_capacity(16);
    vec.extend([1, 2, 3]);
    let copy = vec.clone();
    assert_eq!(copy, vec);
    assert_eq!(copy.min_capacity(), 16);
    assert_eq!(copy.capacity(), 16);
}

#[test]
fn clone_from_reuses_the_block() {
    let mut target: GrowVec<String> = GrowVec::with_capacity(8);
    target.push("old".to_string());
    let ptr = target.as_ptr();
    let source: GrowVec<String> = growvec!["a".to_string(), "b".to_string()];

    target.clone_from(&source);

    assert_eq!(target, source);
    assert_eq!(target.as_ptr(), ptr);
}

#[test]
fn assign_keeps_capacity() {
    let mut vec: GrowVec<i32> = GrowVec::with_capacity(10);
    vec.assign_fill(3, &7);
    assert_eq!(vec, [7, 7, 7]);
    vec.assign_iter(0..12);
    assert_eq!(vec.len(), 12);
    let cap = vec.capacity();
    vec.assign_from_slice(&[1]);
    assert_eq!(vec, [1]);
    assert_eq!(vec.capacity(), cap);
}

#[test]
fn checked_access() {
    let mut vec: GrowVec<i32> = growvec![1, 2];
    assert_eq!(vec.at(0), Ok(&1));
    assert_eq!(vec.at(5), Err(Error::IndexOutOfRange { index: 5, len: 2 }));
    *vec.at_mut(1).unwrap() = 20;
    assert_eq!(vec.back(), Some(&20));
    assert_eq!(vec.begin().get(), Some(&1));
    assert_eq!(vec.end().get(), None);
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "`pop_back` called on an empty container")]
fn pop_back_on_empty_panics_in_debug() {
    let mut vec: GrowVec<i32> = GrowVec::new();
    vec.pop_back();
}

#[test]
fn into_vec_keeps_order() {
    let vec: GrowVec<i32, 2> = (0..5).collect();
    assert_eq!(vec.into_vec(), [0, 1, 2, 3, 4]);
}

#[test]
fn failed_swap_leaves_both_sides() {
    let alloc = FailingAlloc::new(1);
    let mut b: GrowVec<i32, 2, &FailingAlloc> = GrowVec::with_capacity_in(5, &alloc);
    b.extend([10, 20, 30, 40, 50]);
    let mut a: GrowVec<i32, 2, &FailingAlloc> = GrowVec::new_in(&alloc);
    a.extend([1, 2]);

    expect_panic(|| a.swap_with(&mut b));

    assert_eq!(a, [1, 2]);
    assert!(a.is_inline());
    assert_eq!(b, [10, 20, 30, 40, 50]);
}

#[test]
fn panic_past_the_size_hint_withdraws_the_inserted() {
    reset();
    {
        let mut vec: GrowVec<Tracked, 0> = GrowVec::with_capacity(2);
        vec.extend(Tracked::many([1, 2]));

        expect_panic(|| {
            vec.insert_iter(1, Faulty::new(2, 2));
        });

        assert_eq!(values(&vec), [1, 2]);
        assert_eq!(counters().live(), 2);
    }
    assert_eq!(counters().live(), 0);
}
