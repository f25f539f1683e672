//! Random-access positions over a contiguous run.
//!
//! A [`Cursor`] borrows the container it was taken from, so the container
//! cannot be mutated, reallocated, promoted or demoted while the cursor is
//! alive. Positions may move outside the run through arithmetic; only
//! dereferencing them is checked.

use core::{
    cmp::Ordering,
    fmt,
    ops::{Add, AddAssign, Deref, Index, Sub, SubAssign},
    ptr,
};

#[inline]
#[track_caller]
const fn position(index: usize) -> isize {
    assert!(index <= isize::MAX as usize, "run is too long for a cursor");
    index as isize
}

/// A position within a borrowed run of elements.
///
/// # Examples
///
/// ```
/// # use hybridvec::{HybridVec, hybridvec};
/// let vec: HybridVec<i32, 4> = hybridvec![10, 20, 30];
///
/// let mut it = vec.begin();
/// assert_eq!(*it, 10);
/// it += 2;
/// assert_eq!(*it, 30);
/// assert_eq!(it[-1], 20);
/// assert_eq!(vec.end() - it, 1);
/// assert!(it < vec.end());
/// ```
pub struct Cursor<'a, T> {
    run: &'a [T],
    pos: isize,
}

impl<'a, T> Cursor<'a, T> {
    /// A cursor at the first element of `run`.
    #[inline]
    pub const fn begin(run: &'a [T]) -> Self {
        Self { run, pos: 0 }
    }

    /// A cursor one past the last element of `run`.
    ///
    /// # Panics
    /// Panics if `run.len() > isize::MAX`, which only a run of zero-sized
    /// elements can reach.
    #[inline]
    pub const fn end(run: &'a [T]) -> Self {
        Self {
            run,
            pos: position(run.len()),
        }
    }

    /// A cursor at `index`.
    ///
    /// # Panics
    /// Panics if `index > run.len()` or `index > isize::MAX`.
    #[inline]
    pub fn at(run: &'a [T], index: usize) -> Self {
        assert!(
            index <= run.len(),
            "cursor index {index} is past the end (len {})",
            run.len()
        );
        Self {
            run,
            pos: position(index),
        }
    }

    /// The signed distance from the start of the run.
    #[inline(always)]
    pub const fn offset(&self) -> isize {
        self.pos
    }

    /// The index of the element under the cursor, if there is one.
    #[inline]
    pub fn index(&self) -> Option<usize> {
        usize::try_from(self.pos)
            .ok()
            .filter(|&index| index < self.run.len())
    }

    /// The address the cursor designates. Never dereference it outside the run.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.run.as_ptr().wrapping_offset(self.pos)
    }

    /// The element under the cursor, or `None` outside the run.
    #[inline]
    pub fn get(&self) -> Option<&'a T> {
        self.index().map(|index| &self.run[index])
    }

    /// The element under the cursor without a bounds check.
    ///
    /// # Safety
    /// `0 <= offset() < len` of the run.
    #[inline]
    pub unsafe fn get_unchecked(&self) -> &'a T {
        debug_assert!(self.index().is_some());
        unsafe { self.run.get_unchecked(self.pos as usize) }
    }

    /// The number of elements from the cursor to the end of the run.
    #[inline]
    pub fn remaining(&self) -> usize {
        match usize::try_from(self.pos) {
            Ok(pos) => self.run.len().saturating_sub(pos),
            Err(_) => self.run.len(),
        }
    }

    #[inline]
    #[track_caller]
    fn element(&self) -> &'a T {
        match self.get() {
            Some(value) => value,
            None => panic!(
                "cursor at offset {} is outside the run of length {}",
                self.pos,
                self.run.len()
            ),
        }
    }

    #[inline]
    fn same_run(&self, other: &Self) -> bool {
        ptr::eq(self.run, other.run)
    }
}

impl<T> Clone for Cursor<'_, T> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<T> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("offset", &self.pos)
            .field("len", &self.run.len())
            .finish()
    }
}

impl<T> Deref for Cursor<'_, T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        self.element()
    }
}

impl<T> Index<isize> for Cursor<'_, T> {
    type Output = T;

    #[inline]
    fn index(&self, offset: isize) -> &T {
        (*self + offset).element()
    }
}

impl<T> Add<isize> for Cursor<'_, T> {
    type Output = Self;

    #[inline]
    fn add(mut self, rhs: isize) -> Self {
        self += rhs;
        self
    }
}

impl<T> Sub<isize> for Cursor<'_, T> {
    type Output = Self;

    #[inline]
    fn sub(mut self, rhs: isize) -> Self {
        self -= rhs;
        self
    }
}

impl<T> AddAssign<isize> for Cursor<'_, T> {
    #[inline]
    fn add_assign(&mut self, rhs: isize) {
        self.pos = self.pos.wrapping_add(rhs);
    }
}

impl<T> SubAssign<isize> for Cursor<'_, T> {
    #[inline]
    fn sub_assign(&mut self, rhs: isize) {
        self.pos = self.pos.wrapping_sub(rhs);
    }
}

/// The signed distance between two cursors over the same run.
///
/// Wraps on overflow, like the offset arithmetic.
impl<'a, T> Sub<Cursor<'a, T>> for Cursor<'a, T> {
    type Output = isize;

    #[inline]
    fn sub(self, rhs: Cursor<'a, T>) -> isize {
        debug_assert!(self.same_run(&rhs), "cursors over different runs");
        self.pos.wrapping_sub(rhs.pos)
    }
}

impl<T> PartialEq for Cursor<'_, T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.same_run(other) && self.pos == other.pos
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T> PartialOrd for Cursor<'_, T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.same_run(other) {
            Some(self.pos.cmp(&other.pos))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Cursor;

    #[test]
    fn walk_forward_and_back() {
        let run = [1, 2, 3, 4];
        let begin = Cursor::begin(&run);
        let end = Cursor::end(&run);

        assert_eq!(end - begin, 4);
        assert_eq!(*(begin + 3), 4);
        assert_eq!(*(end - 1), 4);
        assert_eq!(begin.remaining(), 4);
        assert_eq!(end.remaining(), 0);
        assert_eq!(end.get(), None);
        assert_eq!(end.index(), None);
        assert_eq!((begin + 2).index(), Some(2));
    }

    #[test]
    fn ordering_within_one_run() {
        let run = [0u8; 5];
        let a = Cursor::at(&run, 1);
        let b = Cursor::at(&run, 4);
        assert!(a < b);
        assert_eq!(a + 3, b);
        assert_ne!(a, b);
    }

    #[test]
    fn different_runs_are_unordered() {
        let x = [1, 2];
        let y = [1, 2];
        let a = Cursor::begin(&x);
        let b = Cursor::begin(&y);
        assert_ne!(a, b);
        assert_eq!(a.partial_cmp(&b), None);
    }

    #[test]
    fn offsets_outside_the_run_are_representable() {
        let run = [7];
        let before = Cursor::begin(&run) - 1;
        assert_eq!(before.offset(), -1);
        assert_eq!(before.get(), None);
        assert_eq!(before.remaining(), 1);
        assert_eq!(*(before + 1), 7);
    }

    #[test]
    #[should_panic(expected = "outside the run")]
    fn deref_past_end_panics() {
        let run = [1, 2];
        let end = Cursor::end(&run);
        assert_eq!(*end, 0);
    }

    #[test]
    fn distance_wraps_like_the_offsets() {
        let run = [1, 2];
        let far = Cursor::begin(&run) + isize::MAX;
        let before = Cursor::begin(&run) - 1;
        assert_eq!(far - before, isize::MIN);
        assert_eq!(before - far, isize::MIN);
    }

    #[test]
    #[should_panic(expected = "too long for a cursor")]
    fn end_of_an_oversized_run_panics() {
        // SAFETY: any length is valid for a run of zero-sized elements.
        let run: &[()] = unsafe {
            core::slice::from_raw_parts(core::ptr::NonNull::<()>::dangling().as_ptr(), usize::MAX)
        };
        let _ = Cursor::end(run);
    }

    #[test]
    #[should_panic(expected = "past the end")]
    fn at_past_end_panics() {
        let run = [1, 2];
        let _ = Cursor::at(&run, 3);
    }
}
