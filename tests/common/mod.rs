#![allow(dead_code)]

use std::{
    alloc::Layout,
    cell::Cell,
    panic::{self, AssertUnwindSafe},
    ptr::NonNull,
};

use hybridvec::{AllocError, Allocator, Global};

thread_local! {
    static CONSTRUCTED: Cell<usize> = const { Cell::new(0) };
    static CLONED: Cell<usize> = const { Cell::new(0) };
    static DROPPED: Cell<usize> = const { Cell::new(0) };
    static CLONES_BEFORE_PANIC: Cell<Option<usize>> = const { Cell::new(None) };
}

/// The counters of every [`Tracked`] on this thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Counters {
    pub constructed: usize,
    pub cloned: usize,
    pub dropped: usize,
}

impl Counters {
    pub fn live(&self) -> usize {
        self.constructed - self.dropped
    }
}

pub fn counters() -> Counters {
    Counters {
        constructed: CONSTRUCTED.get(),
        cloned: CLONED.get(),
        dropped: DROPPED.get(),
    }
}

pub fn reset() {
    CONSTRUCTED.set(0);
    CLONED.set(0);
    DROPPED.set(0);
    CLONES_BEFORE_PANIC.set(None);
}

/// The next `count` clones succeed, the one after panics.
pub fn panic_after_clones(count: usize) {
    CLONES_BEFORE_PANIC.set(Some(count));
}

pub fn disarm() {
    CLONES_BEFORE_PANIC.set(None);
}

/// Runs `f`, expecting it to panic.
pub fn expect_panic(f: impl FnOnce()) {
    let result = panic::catch_unwind(AssertUnwindSafe(f));
    assert!(result.is_err(), "expected a panic");
}

/// An element that counts its constructions, clones and drops.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tracked(pub i32);

impl Tracked {
    pub fn new(value: i32) -> Self {
        CONSTRUCTED.set(CONSTRUCTED.get() + 1);
        Self(value)
    }

    pub fn many(values: impl IntoIterator<Item = i32>) -> Vec<Self> {
        values.into_iter().map(Self::new).collect()
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        match CLONES_BEFORE_PANIC.get() {
            Some(0) => {
                CLONES_BEFORE_PANIC.set(None);
                panic!("clone of Tracked({}) failed", self.0);
            }
            Some(n) => CLONES_BEFORE_PANIC.set(Some(n - 1)),
            None => {}
        }
        CLONED.set(CLONED.get() + 1);
        Self::new(self.0)
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        DROPPED.set(DROPPED.get() + 1);
    }
}

pub fn values<'a>(items: impl IntoIterator<Item = &'a Tracked>) -> Vec<i32> {
    items.into_iter().map(|t| t.0).collect()
}

/// Forwards to [`Global`] and counts blocks.
#[derive(Debug, Default)]
pub struct CountingAlloc {
    acquired: Cell<usize>,
    released: Cell<usize>,
}

impl CountingAlloc {
    pub fn acquired(&self) -> usize {
        self.acquired.get()
    }

    pub fn released(&self) -> usize {
        self.released.get()
    }

    pub fn live(&self) -> usize {
        self.acquired.get() - self.released.get()
    }
}

unsafe impl Allocator for CountingAlloc {
    fn allocate(&self, layout: Layout) -> Result<NonNull<u8>, AllocError> {
        let block = Global.allocate(layout)?;
        self.acquired.set(self.acquired.get() + 1);
        Ok(block)
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        self.released.set(self.released.get() + 1);
        unsafe { Global.deallocate(ptr, layout) }
    }
}

/// Forwards to [`Global`] for the first `budget` allocations, then fails.
#[derive(Debug)]
pub struct FailingAlloc {
    budget: Cell<usize>,
}

impl FailingAlloc {
    pub fn new(budget: usize) -> Self {
        Self {
            budget: Cell::new(budget),
        }
    }
}

unsafe impl Allocator for FailingAlloc {
    fn allocate(&self, layout: Layout) -> Result<NonNull<u8>, AllocError> {
        match self.budget.get() {
            0 => Err(AllocError),
            n => {
                self.budget.set(n - 1);
                Global.allocate(layout)
            }
        }
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        unsafe { Global.deallocate(ptr, layout) }
    }
}

/// Yields `Tracked(101)`, `Tracked(102)`, ... and panics on item `fail_at`.
/// The lower size hint starts at `hint` and the upper one is unknown.
#[derive(Debug)]
pub struct Faulty {
    produced: usize,
    hint: usize,
    fail_at: usize,
}

impl Faulty {
    pub fn new(hint: usize, fail_at: usize) -> Self {
        Self {
            produced: 0,
            hint,
            fail_at,
        }
    }
}

impl Iterator for Faulty {
    type Item = Tracked;

    fn next(&mut self) -> Option<Tracked> {
        if self.produced == self.fail_at {
            panic!("item {} failed", self.produced);
        }
        self.produced += 1;
        Some(Tracked::new(100 + self.produced as i32))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.hint.saturating_sub(self.produced), None)
    }
}
