//! Element algorithms shared by every store.
//!
//! Insertion constructs at the tail and rotates into place, erasure rotates
//! to the tail and destroys, assignment reuses live slots. Each store only
//! has to describe its buffer through [`RawBuf`].

use core::{marker::PhantomData, ptr, slice};

use crate::utils::cold_path;

/// A contiguous buffer of `T` with a live prefix.
///
/// # Safety
///
/// `raw_ptr()[..raw_len()]` must be initialized, `raw_len() <= raw_capacity()`,
/// and `reserve_more(n)` must either leave `raw_capacity() >= raw_len() + n`
/// or panic. The pointer may change across `reserve_more`.
pub(crate) unsafe trait RawBuf<T> {
    fn raw_ptr(&mut self) -> *mut T;
    fn raw_len(&self) -> usize;
    unsafe fn raw_set_len(&mut self, len: usize);
    fn raw_capacity(&self) -> usize;
    fn reserve_more(&mut self, additional: usize);
}

#[inline(always)]
pub(crate) fn as_mut_slice<T, B: RawBuf<T>>(buf: &mut B) -> &mut [T] {
    let len = buf.raw_len();
    // SAFETY: guaranteed by `RawBuf`.
    unsafe { slice::from_raw_parts_mut(buf.raw_ptr(), len) }
}

/// Drops everything past `len`.
///
/// The length is lowered first, so a panicking destructor leaks instead of
/// double-dropping.
pub(crate) fn truncate<T, B: RawBuf<T>>(buf: &mut B, len: usize) {
    let old_len = buf.raw_len();
    if len < old_len {
        unsafe {
            buf.raw_set_len(len);
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                buf.raw_ptr().add(len),
                old_len - len,
            ));
        }
    }
}

#[inline]
pub(crate) fn push<T, B: RawBuf<T>>(buf: &mut B, value: T) -> &mut T {
    let len = buf.raw_len();
    if len == buf.raw_capacity() {
        cold_path();
        buf.reserve_more(1);
    }
    unsafe {
        let slot = buf.raw_ptr().add(len);
        ptr::write(slot, value);
        buf.raw_set_len(len + 1);
        &mut *slot
    }
}

#[inline]
pub(crate) fn pop<T, B: RawBuf<T>>(buf: &mut B) -> Option<T> {
    let len = buf.raw_len();
    if len == 0 {
        cold_path();
        return None;
    }
    unsafe {
        buf.raw_set_len(len - 1);
        Some(ptr::read(buf.raw_ptr().add(len - 1)))
    }
}

/// Truncates back to `origin` on drop unless disarmed.
struct Rollback<'a, T, B: RawBuf<T>> {
    buf: &'a mut B,
    origin: usize,
    armed: bool,
    _marker: PhantomData<T>,
}

impl<T, B: RawBuf<T>> Drop for Rollback<'_, T, B> {
    fn drop(&mut self) {
        if self.armed {
            truncate(&mut *self.buf, self.origin);
        }
    }
}

/// Inserts every item of `items` at `index`, keeping their order.
///
/// Items are constructed at the tail and then rotated into position; the
/// rotation is skipped when inserting at the end. If the iterator panics
/// (or the buffer cannot make room) the partially built tail is destroyed
/// and the original contents are left exactly as they were.
///
/// Returns the number of inserted items.
pub(crate) fn insert_iter<T, B, I>(buf: &mut B, index: usize, items: I) -> usize
where
    B: RawBuf<T>,
    I: Iterator<Item = T>,
{
    let origin = buf.raw_len();
    assert!(index <= origin, "insertion index should be <= len");

    let mut guard = Rollback {
        buf,
        origin,
        armed: true,
        _marker: PhantomData,
    };

    for item in items {
        push(&mut *guard.buf, item);
    }

    let inserted = guard.buf.raw_len() - origin;
    if index < origin && inserted > 0 {
        as_mut_slice(&mut *guard.buf)[index..].rotate_right(inserted);
    }
    guard.armed = false;
    inserted
}

/// Erases `[start, start + count)` on drop unless disarmed.
struct Withdraw<'a, T, B: RawBuf<T>> {
    buf: &'a mut B,
    start: usize,
    count: usize,
    armed: bool,
    _marker: PhantomData<T>,
}

impl<T, B: RawBuf<T>> Drop for Withdraw<'_, T, B> {
    fn drop(&mut self) {
        if self.armed {
            erase(&mut *self.buf, self.start, self.start + self.count);
        }
    }
}

/// Finishes an insertion at `index` whose first `placed` items already sit
/// in `[index, index + placed)`, inserting the rest of `items` after them.
///
/// If `items` panics, the placed items are erased as well, so the buffer
/// holds its original elements in their original order.
///
/// Returns the total number of inserted items.
pub(crate) fn finish_insert<T, B, I>(buf: &mut B, index: usize, placed: usize, items: I) -> usize
where
    B: RawBuf<T>,
    I: Iterator<Item = T>,
{
    if placed == 0 {
        return insert_iter(buf, index, items);
    }

    let mut guard = Withdraw {
        buf,
        start: index,
        count: placed,
        armed: true,
        _marker: PhantomData,
    };
    let inserted = insert_iter(&mut *guard.buf, index + placed, items);
    guard.armed = false;
    placed + inserted
}

/// Removes `[start, end)` by rotating it to the tail and destroying it there.
pub(crate) fn erase<T, B: RawBuf<T>>(buf: &mut B, start: usize, end: usize) {
    let len = buf.raw_len();
    assert!(start <= end, "erase range starts after it ends");
    assert!(end <= len, "erase range end should be <= len");

    let count = end - start;
    if count == 0 {
        return;
    }
    if end < len {
        as_mut_slice(buf)[start..].rotate_left(count);
    }
    truncate(buf, len - count);
}

/// Removes and returns the element at `index`, shifting the rest down.
pub(crate) fn remove<T, B: RawBuf<T>>(buf: &mut B, index: usize) -> T {
    let len = buf.raw_len();
    assert!(index < len, "removal index should be < len");

    as_mut_slice(buf)[index..].rotate_left(1);
    unsafe {
        buf.raw_set_len(len - 1);
        ptr::read(buf.raw_ptr().add(len - 1))
    }
}

/// Replaces the contents with `items`.
///
/// Live slots are assigned in place, a shorter input destroys the leftover
/// tail and a longer one constructs the excess past the old length.
pub(crate) fn assign_iter<T, B, I>(buf: &mut B, items: I)
where
    B: RawBuf<T>,
    I: Iterator<Item = T>,
{
    let len = buf.raw_len();
    let mut items = items;
    let mut assigned = 0;

    while assigned < len {
        match items.next() {
            // SAFETY: `assigned < len`, the slot is live.
            Some(item) => unsafe { *buf.raw_ptr().add(assigned) = item },
            None => break,
        }
        assigned += 1;
    }

    if assigned < len {
        truncate(buf, assigned);
    } else {
        insert_iter(buf, len, items);
    }
}

/// [`assign_iter`] for borrowed input: the overlap is assigned with
/// [`Clone::clone_from`], the excess is cloned past the old length.
pub(crate) fn assign_from_slice<T: Clone, B: RawBuf<T>>(buf: &mut B, src: &[T]) {
    let len = buf.raw_len();
    let common = len.min(src.len());

    for (dst, item) in as_mut_slice(buf)[..common].iter_mut().zip(src) {
        dst.clone_from(item);
    }

    if src.len() < len {
        truncate(buf, src.len());
    } else {
        insert_iter(buf, len, src[common..].iter().cloned());
    }
}

/// Exchanges the contents of two buffers element by element.
///
/// The shorter side reserves room for the excess tail before anything
/// moves, so a failed reservation leaves both buffers untouched. Then the
/// common prefix is swapped in place and the excess tail is moved into the
/// shorter side's vacated slots; the donor forgets it.
pub(crate) fn swap_elements<T, A, B>(a: &mut A, b: &mut B)
where
    A: RawBuf<T>,
    B: RawBuf<T>,
{
    let a_len = a.raw_len();
    let b_len = b.raw_len();
    let common = a_len.min(b_len);

    if b_len > a_len {
        a.reserve_more(b_len - a_len);
    } else if a_len > b_len {
        b.reserve_more(a_len - b_len);
    }

    as_mut_slice(a)[..common].swap_with_slice(&mut as_mut_slice(b)[..common]);

    if b_len > a_len {
        transfer_tail(b, a, common);
    } else if a_len > b_len {
        transfer_tail(a, b, common);
    }
}

fn transfer_tail<T, S, D>(src: &mut S, dst: &mut D, from: usize)
where
    S: RawBuf<T>,
    D: RawBuf<T>,
{
    debug_assert_eq!(dst.raw_len(), from);
    let count = src.raw_len() - from;
    debug_assert!(dst.raw_capacity() - from >= count);

    // SAFETY: `dst` reserved room for `count` more, `src[from..]` is live
    // and is forgotten by `src` after the copy.
    unsafe {
        ptr::copy_nonoverlapping(src.raw_ptr().add(from), dst.raw_ptr().add(from), count);
        src.raw_set_len(from);
        dst.raw_set_len(from + count);
    }
}
