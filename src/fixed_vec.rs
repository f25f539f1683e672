use alloc::vec::Vec;
use core::{
    fmt,
    iter::FusedIterator,
    mem::{ManuallyDrop, MaybeUninit},
    ptr,
};

use crate::{
    Arena, Cursor, Error, Result,
    raw::{self, RawBuf},
    utils::{capacity_exceeded, cold_path, empty_violation, split_range_bound},
};

/// An ordered sequence stored in place with a fixed capacity `N`.
///
/// It never allocates. Slots `[0, len)` hold live elements and
/// `[len, N)` are uninitialized [`Arena`] slots.
///
/// It mirrors most of the API of [`Vec`], but maintains the same efficiency as `[T; N]`.
///
/// # Panics
/// Any operation that would make `len > N` panics with
/// [`Error::CapacityExceeded`]. Use [`try_reserve`](FixedVec::try_reserve)
/// to check first.
///
/// # Examples
///
/// ```
/// use hybridvec::FixedVec;
///
/// let mut vec: FixedVec<String, 10> = FixedVec::new();
///
/// assert_eq!(vec.len(), 0);
/// assert_eq!(vec.capacity(), 10);
///
/// vec.push("Hello".to_string());
/// vec.push(", world!".to_string());
///
/// assert_eq!(vec, ["Hello", ", world!"]);
/// ```
pub struct FixedVec<T, const N: usize> {
    arena: Arena<T, N>,
    len: usize,
}

unsafe impl<T, const N: usize> Send for FixedVec<T, N> where T: Send {}
unsafe impl<T, const N: usize> Sync for FixedVec<T, N> where T: Sync {}

impl<T, const N: usize> Drop for FixedVec<T, N> {
    fn drop(&mut self) {
        if self.len > 0 {
            // SAFETY: `[0, len)` is live.
            unsafe { self.arena.destroy_range(0..self.len) }
        }
    }
}

/// Creates a [`FixedVec`] containing the arguments.
///
/// The syntax is similar to [`vec!`](https://doc.rust-lang.org/std/macro.vec.html).
/// The capacity comes from the annotated type.
///
/// # Panics
/// Panics if the number of elements exceeds the capacity.
///
/// # Examples
///
/// ```
/// # use hybridvec::{fixedvec, FixedVec};
/// let vec: FixedVec<String, 10> = fixedvec![];
/// let vec: FixedVec<i64, 10> = fixedvec![1; 5];
/// let vec: FixedVec<_, 10> = fixedvec![1, 2, 3, 4];
/// ```
#[macro_export]
macro_rules! fixedvec {
    [] => { $crate::FixedVec::new() };
    [$elem:expr; $n:expr] => { $crate::FixedVec::from_elem($elem, $n) };
    [$($item:expr),+ $(,)?] => { $crate::FixedVec::from_buf([ $($item),+ ]) };
}

unsafe impl<T, const N: usize> RawBuf<T> for FixedVec<T, N> {
    #[inline(always)]
    fn raw_ptr(&mut self) -> *mut T {
        self.arena.as_mut_ptr()
    }

    #[inline(always)]
    fn raw_len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    unsafe fn raw_set_len(&mut self, len: usize) {
        debug_assert!(len <= N);
        self.len = len;
    }

    #[inline(always)]
    fn raw_capacity(&self) -> usize {
        N
    }

    #[inline]
    fn reserve_more(&mut self, additional: usize) {
        if additional > N - self.len {
            capacity_exceeded(N, self.len.saturating_add(additional));
        }
    }
}

impl<T, const N: usize> FixedVec<T, N> {
    /// Constructs a new, empty `FixedVec`.
    ///
    /// The storage lives inside the value, so `N` should stay small enough
    /// for wherever the vector is placed.
    ///
    /// # Examples
    ///
    /// ```
    /// # use hybridvec::FixedVec;
    /// let vec: FixedVec<i32, 8> = FixedVec::new();
    /// assert!(vec.is_empty());
    /// ```
    #[inline]
    pub const fn new() -> Self {
        Self {
            arena: Arena::new(),
            len: 0,
        }
    }

    /// Creates a [`FixedVec`] from an array.
    ///
    /// # Panics
    /// Panics if `P > N`.
    ///
    /// # Examples
    /// ```
    /// # use hybridvec::FixedVec;
    /// let vec: FixedVec<i32, 5> = FixedVec::from_buf([1, 2, 3]);
    /// assert_eq!(vec.len(), 3);
    /// ```
    #[inline]
    pub fn from_buf<const P: usize>(arr: [T; P]) -> Self {
        if P > N {
            capacity_exceeded(N, P);
        }
        let arr = ManuallyDrop::new(arr);
        let mut vec = Self::new();
        // SAFETY: `P <= N`, and `arr` is never dropped.
        unsafe {
            ptr::copy_nonoverlapping(arr.as_ptr(), vec.as_mut_ptr(), P);
        }
        vec.len = P;
        vec
    }

    /// Returns a raw pointer to the vector's buffer.
    ///
    /// The pointer is only valid while the vector is neither moved nor dropped.
    #[inline(always)]
    pub const fn as_ptr(&self) -> *const T {
        self.arena.as_ptr()
    }

    /// Returns a raw mutable pointer to the vector's buffer.
    ///
    /// The pointer is only valid while the vector is neither moved nor dropped.
    #[inline(always)]
    pub const fn as_mut_ptr(&mut self) -> *mut T {
        self.arena.as_mut_ptr()
    }

    /// Forces the length of the vector to `new_len`.
    ///
    /// # Safety
    /// - `new_len <= N`.
    /// - Elements in `[old_len, new_len)` must be initialized.
    /// - Elements dropped from the length are forgotten, not dropped.
    #[inline(always)]
    pub const unsafe fn set_len(&mut self, new_len: usize) {
        debug_assert!(new_len <= N);
        self.len = new_len
    }

    /// Returns the number of elements in the vector.
    #[inline(always)]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the vector contains no elements.
    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if `len == N`.
    ///
    /// # Examples
    /// ```
    /// # use hybridvec::FixedVec;
    /// let mut v = FixedVec::<i32, 3>::new();
    /// assert!(!v.is_full());
    ///
    /// v.extend([1, 2, 3]);
    /// assert!(v.is_full());
    /// ```
    #[inline(always)]
    pub const fn is_full(&self) -> bool {
        self.len >= N
    }

    /// Returns `N`.
    #[inline(always)]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Checks that `additional` more elements fit.
    ///
    /// A fixed store cannot grow, so this never changes anything; it reports
    /// [`Error::CapacityExceeded`] when `len + additional > N`.
    ///
    /// # Examples
    /// ```
    /// # use hybridvec::{Error, FixedVec, fixedvec};
    /// let vec: FixedVec<i32, 3> = fixedvec![1, 2];
    /// assert!(vec.try_reserve(1).is_ok());
    /// assert_eq!(
    ///     vec.try_reserve(2),
    ///     Err(Error::CapacityExceeded { capacity: 3, requested: 4 }),
    /// );
    /// ```
    #[inline]
    pub fn try_reserve(&self, additional: usize) -> Result<()> {
        if additional > N - self.len {
            return Err(Error::CapacityExceeded {
                capacity: N,
                requested: self.len.saturating_add(additional),
            });
        }
        Ok(())
    }

    /// Extracts a slice containing the entire vector.
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        unsafe { core::slice::from_raw_parts(self.as_ptr(), self.len) }
    }

    /// Extracts a mutable slice containing the entire vector.
    #[inline]
    pub const fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { core::slice::from_raw_parts_mut(self.as_mut_ptr(), self.len) }
    }

    /// Bounds-checked access.
    ///
    /// # Examples
    /// ```
    /// # use hybridvec::{Error, FixedVec, fixedvec};
    /// let vec: FixedVec<i32, 3> = fixedvec![1, 2, 3];
    /// assert_eq!(vec.at(2), Ok(&3));
    /// assert_eq!(vec.at(3), Err(Error::IndexOutOfRange { index: 3, len: 3 }));
    /// ```
    #[inline]
    pub fn at(&self, index: usize) -> Result<&T> {
        self.as_slice().get(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.len,
        })
    }

    /// Bounds-checked mutable access.
    #[inline]
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.len;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(Error::IndexOutOfRange { index, len })
    }

    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.as_slice().first()
    }

    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// A cursor at the first element.
    #[inline]
    pub fn begin(&self) -> Cursor<'_, T> {
        Cursor::begin(self.as_slice())
    }

    /// A cursor one past the last element.
    #[inline]
    pub fn end(&self) -> Cursor<'_, T> {
        Cursor::end(self.as_slice())
    }

    /// A cursor at `index`.
    ///
    /// # Panics
    /// Panics if `index > len`.
    #[inline]
    pub fn cursor(&self, index: usize) -> Cursor<'_, T> {
        Cursor::at(self.as_slice(), index)
    }

    /// Appends an element to the back of the vector.
    ///
    /// # Panics
    /// Panics if the vector is full.
    ///
    /// # Time complexity
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```
    /// # use hybridvec::FixedVec;
    /// let mut vec = FixedVec::<i32, 5>::new();
    /// vec.push(1);
    /// vec.push(2);
    /// assert_eq!(vec, [1, 2]);
    /// ```
    #[inline]
    pub fn push(&mut self, value: T) {
        self.emplace_back(value);
    }

    /// Appends an element and returns a reference to it.
    ///
    /// # Panics
    /// Panics if the vector is full.
    #[inline]
    pub fn emplace_back(&mut self, value: T) -> &mut T {
        let len = self.len;
        if len >= N {
            capacity_exceeded(N, len + 1);
        }
        self.len = len + 1;
        // SAFETY: `len < N` and the slot is dead.
        unsafe { self.arena.construct(len, value) }
    }

    /// Removes the last element and returns it, or `None` if empty.
    ///
    /// # Time complexity
    /// O(1)
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            cold_path();
            None
        } else {
            self.len -= 1;
            // SAFETY: the slot was live and is now past `len`.
            Some(unsafe { self.arena.take(self.len) })
        }
    }

    /// Drops the last element.
    ///
    /// # Panics
    /// In debug builds, panics with [`Error::EmptyContainerViolation`] if the
    /// vector is empty. Release builds do nothing in that case.
    #[inline]
    pub fn pop_back(&mut self) {
        if self.len == 0 {
            empty_violation("pop_back");
            return;
        }
        self.len -= 1;
        // SAFETY: the slot was live and is now past `len`.
        unsafe { self.arena.destroy(self.len) }
    }

    /// Inserts an element at position `index`, shifting all elements after it
    /// to the right.
    ///
    /// # Panics
    /// Panics if `index > len` or the vector is full.
    ///
    /// # Examples
    ///
    /// ```
    /// # use hybridvec::{FixedVec, fixedvec};
    /// let mut vec: FixedVec<i32, 5> = fixedvec![1, 3];
    /// vec.insert(1, 2);
    /// assert_eq!(vec, [1, 2, 3]);
    /// ```
    #[inline]
    pub fn insert(&mut self, index: usize, element: T) {
        self.emplace(index, element);
    }

    /// Inserts an element at `index` and returns a reference to it.
    ///
    /// # Panics
    /// Panics if `index > len` or the vector is full.
    pub fn emplace(&mut self, index: usize, element: T) -> &mut T {
        assert!(index <= self.len, "insertion index should be <= len");
        raw::insert_iter(self, index, core::iter::once(element));
        &mut self.as_mut_slice()[index]
    }

    /// Inserts `count` clones of `value` at `index`.
    ///
    /// # Panics
    /// Panics if `index > len` or the result would exceed `N`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use hybridvec::{FixedVec, fixedvec};
    /// let mut vec: FixedVec<i32, 6> = fixedvec![1, 2];
    /// vec.insert_n(1, 3, &0);
    /// assert_eq!(vec, [1, 0, 0, 0, 2]);
    /// ```
    pub fn insert_n(&mut self, index: usize, count: usize, value: &T)
    where
        T: Clone,
    {
        assert!(index <= self.len, "insertion index should be <= len");
        if let Err(err) = self.try_reserve(count) {
            crate::utils::raise(err);
        }
        raw::insert_iter(self, index, core::iter::repeat_n(value, count).cloned());
    }

    /// Inserts clones of `items` at `index`, keeping their order.
    ///
    /// # Panics
    /// Panics if `index > len` or the result would exceed `N`.
    pub fn insert_from_slice(&mut self, index: usize, items: &[T])
    where
        T: Clone,
    {
        assert!(index <= self.len, "insertion index should be <= len");
        if let Err(err) = self.try_reserve(items.len()) {
            crate::utils::raise(err);
        }
        raw::insert_iter(self, index, items.iter().cloned());
    }

    /// Inserts every item of `items` at `index`, keeping their order.
    ///
    /// Items are constructed at the tail and rotated into place. If the
    /// iterator panics, or yields more than fits, the vector is restored to
    /// its previous contents before the panic propagates.
    ///
    /// Returns the number of inserted items.
    ///
    /// # Panics
    /// Panics if `index > len` or the result would exceed `N`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use hybridvec::{FixedVec, fixedvec};
    /// let mut vec: FixedVec<i32, 6> = fixedvec![1, 5];
    /// assert_eq!(vec.insert_iter(1, 2..5), 3);
    /// assert_eq!(vec, [1, 2, 3, 4, 5]);
    /// ```
    pub fn insert_iter<I: IntoIterator<Item = T>>(&mut self, index: usize, items: I) -> usize {
        assert!(index <= self.len, "insertion index should be <= len");
        let items = items.into_iter();
        if let Err(err) = self.try_reserve(items.size_hint().0) {
            crate::utils::raise(err);
        }
        raw::insert_iter(self, index, items)
    }

    /// Removes and returns the element at `index`, shifting the rest down.
    ///
    /// # Panics
    /// Panics if `index >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use hybridvec::{FixedVec, fixedvec};
    /// let mut vec: FixedVec<i32, 5> = fixedvec![1, 2, 3];
    /// assert_eq!(vec.remove(1), 2);
    /// assert_eq!(vec, [1, 3]);
    /// ```
    #[inline]
    pub fn remove(&mut self, index: usize) -> T {
        raw::remove(self, index)
    }

    /// Removes the elements in `range`.
    ///
    /// The range is rotated to the tail and destroyed there.
    ///
    /// # Panics
    /// Panics if the range is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use hybridvec::{FixedVec, fixedvec};
    /// let mut vec: FixedVec<i32, 5> = fixedvec![1, 2, 3, 4, 5];
    /// vec.erase(1..3);
    /// assert_eq!(vec, [1, 4, 5]);
    /// ```
    pub fn erase<R: core::ops::RangeBounds<usize>>(&mut self, range: R) {
        let (start, end) = split_range_bound(&range, self.len);
        raw::erase(self, start, end);
    }

    /// Shortens the vector, keeping the first `len` elements.
    ///
    /// Has no effect if `len >= self.len()`.
    #[inline]
    pub fn truncate(&mut self, len: usize) {
        raw::truncate(self, len);
    }

    /// Clears the vector, removing all values.
    #[inline]
    pub fn clear(&mut self) {
        raw::truncate(self, 0);
    }

    /// Resizes the vector in place so that `len == new_len`, filling new slots
    /// with the results of `f`.
    ///
    /// # Panics
    /// Panics if `new_len > N`.
    pub fn resize_with<F: FnMut() -> T>(&mut self, new_len: usize, mut f: F) {
        if new_len > N {
            capacity_exceeded(N, new_len);
        }
        if new_len <= self.len {
            self.truncate(new_len);
        } else {
            let len = self.len;
            raw::insert_iter(self, len, (len..new_len).map(|_| f()));
        }
    }

    /// Replaces the contents with `items`.
    ///
    /// Live slots are assigned in place; a shorter input destroys the
    /// leftover tail and a longer one constructs the excess.
    ///
    /// # Panics
    /// Panics if `items` yields more than `N` elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use hybridvec::{FixedVec, fixedvec};
    /// let mut vec: FixedVec<i32, 5> = fixedvec![1, 2, 3];
    /// vec.assign_iter([7, 8]);
    /// assert_eq!(vec, [7, 8]);
    /// ```
    pub fn assign_iter<I: IntoIterator<Item = T>>(&mut self, items: I) {
        let items = items.into_iter();
        if items.size_hint().0 > N {
            capacity_exceeded(N, items.size_hint().0);
        }
        raw::assign_iter(self, items);
    }

    /// Returns the remaining spare capacity as a slice of `MaybeUninit<T>`.
    ///
    /// Fill it and then call [`set_len`](FixedVec::set_len).
    ///
    /// # Examples
    ///
    /// ```
    /// # use hybridvec::FixedVec;
    /// let mut v = FixedVec::<i32, 10>::new();
    ///
    /// let uninit = v.spare_capacity_mut();
    /// uninit[0].write(0);
    /// uninit[1].write(1);
    ///
    /// unsafe { v.set_len(2) };
    /// assert_eq!(v, [0, 1]);
    /// ```
    #[inline]
    pub fn spare_capacity_mut(&mut self) -> &mut [MaybeUninit<T>] {
        self.arena.uninit_from(self.len)
    }

    /// Exchanges the contents of two vectors.
    ///
    /// The common prefix is swapped element by element; the longer side's
    /// excess is moved into the shorter side. No element is cloned or dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// # use hybridvec::{FixedVec, fixedvec};
    /// let mut a: FixedVec<i32, 4> = fixedvec![1, 2, 3];
    /// let mut b: FixedVec<i32, 4> = fixedvec![9];
    /// a.swap_with(&mut b);
    /// assert_eq!(a, [9]);
    /// assert_eq!(b, [1, 2, 3]);
    /// ```
    #[inline]
    pub fn swap_with(&mut self, other: &mut Self) {
        raw::swap_elements(self, other);
    }

    /// Moves the elements into a [`Vec`] of exactly `len` capacity.
    pub fn into_vec(self) -> Vec<T> {
        let mut this = ManuallyDrop::new(self);
        let mut vec = Vec::with_capacity(this.len);
        // SAFETY: the elements are moved out and `this` is never dropped.
        unsafe {
            ptr::copy_nonoverlapping(this.as_ptr(), vec.as_mut_ptr(), this.len);
            vec.set_len(this.len);
            this.len = 0;
        }
        vec
    }
}

impl<T: Clone, const N: usize> FixedVec<T, N> {
    /// Creates a vector with `num` clones of `elem`.
    ///
    /// # Panics
    /// Panics if `num > N`.
    ///
    /// # Examples
    /// ```
    /// # use hybridvec::FixedVec;
    /// let vec: FixedVec<i32, 5> = FixedVec::from_elem(1, 4);
    /// assert_eq!(vec, [1, 1, 1, 1]);
    /// ```
    pub fn from_elem(elem: T, num: usize) -> Self {
        if num > N {
            capacity_exceeded(N, num);
        }
        let mut vec = Self::new();
        vec.assign_fill(num, &elem);
        vec
    }

    /// Creates a vector from clones of `items`.
    ///
    /// # Panics
    /// Panics if `items.len() > N`.
    pub fn from_slice(items: &[T]) -> Self {
        let mut vec = Self::new();
        vec.assign_from_slice(items);
        vec
    }

    /// Resizes the vector in place so that `len == new_len`, cloning `value`
    /// into new slots.
    ///
    /// # Panics
    /// Panics if `new_len > N`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use hybridvec::{FixedVec, fixedvec};
    /// let mut vec: FixedVec<_, 5> = fixedvec!["hello"];
    /// vec.resize(3, "world");
    /// assert_eq!(vec, ["hello", "world", "world"]);
    ///
    /// vec.resize(1, "_");
    /// assert_eq!(vec, ["hello"]);
    /// ```
    pub fn resize(&mut self, new_len: usize, value: T) {
        if new_len > N {
            capacity_exceeded(N, new_len);
        }
        if new_len <= self.len {
            self.truncate(new_len);
        } else {
            let len = self.len;
            self.insert_n(len, new_len - len, &value);
        }
    }

    /// Appends clones of every element of `other`.
    ///
    /// # Panics
    /// Panics if the result would exceed `N`.
    #[inline]
    pub fn extend_from_slice(&mut self, other: &[T]) {
        let len = self.len;
        self.insert_from_slice(len, other);
    }

    /// Replaces the contents with `count` clones of `value`, reusing live slots.
    ///
    /// # Panics
    /// Panics if `count > N`.
    pub fn assign_fill(&mut self, count: usize, value: &T) {
        if count > N {
            capacity_exceeded(N, count);
        }
        raw::assign_iter(self, core::iter::repeat_n(value, count).cloned());
    }

    /// Replaces the contents with clones of `items`.
    ///
    /// The overlap is assigned with [`Clone::clone_from`], the rest is
    /// destroyed or cloned in.
    ///
    /// # Panics
    /// Panics if `items.len() > N`.
    pub fn assign_from_slice(&mut self, items: &[T]) {
        if items.len() > N {
            capacity_exceeded(N, items.len());
        }
        raw::assign_from_slice(self, items);
    }
}

impl<T, const N: usize> Default for FixedVec<T, N> {
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, const N: usize> Clone for FixedVec<T, N> {
    fn clone(&self) -> Self {
        Self::from_slice(self.as_slice())
    }

    fn clone_from(&mut self, source: &Self) {
        self.assign_from_slice(source.as_slice());
    }
}

impl<'a, T: 'a + Clone, const N: usize> Extend<&'a T> for FixedVec<T, N> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        let len = self.len;
        self.insert_iter(len, iter.into_iter().cloned());
    }
}

impl<T, const N: usize> Extend<T> for FixedVec<T, N> {
    #[inline]
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let len = self.len;
        self.insert_iter(len, iter);
    }
}

crate::utils::impl_slice_traits!([const N: usize] FixedVec<T, N>);

impl<T, U, const N: usize, const P: usize> PartialEq<FixedVec<U, P>> for FixedVec<T, N>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &FixedVec<U, P>) -> bool {
        PartialEq::eq(self.as_slice(), other.as_slice())
    }
}

impl<T: Clone, const N: usize> From<&[T]> for FixedVec<T, N> {
    #[inline]
    fn from(value: &[T]) -> Self {
        Self::from_slice(value)
    }
}

impl<T, const N: usize, const P: usize> From<[T; P]> for FixedVec<T, N> {
    #[inline]
    fn from(value: [T; P]) -> Self {
        Self::from_buf(value)
    }
}

impl<T, const N: usize> FromIterator<T> for FixedVec<T, N> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut vec = Self::new();
        vec.extend(iter);
        vec
    }
}

/// An iterator that moves out of a [`FixedVec`].
///
/// Created by [`FixedVec::into_iter`].
pub struct IntoIter<T, const N: usize> {
    vec: ManuallyDrop<FixedVec<T, N>>,
    index: usize,
}

impl<T, const N: usize> IntoIterator for FixedVec<T, N> {
    type Item = T;
    type IntoIter = IntoIter<T, N>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            vec: ManuallyDrop::new(self),
            index: 0,
        }
    }
}

impl<T, const N: usize> Iterator for IntoIter<T, N> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.index < self.vec.len {
            self.index += 1;
            // SAFETY: each live slot is read once.
            Some(unsafe { self.vec.arena.take(self.index - 1) })
        } else {
            None
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let v = self.vec.len - self.index;
        (v, Some(v))
    }
}

impl<T, const N: usize> DoubleEndedIterator for IntoIter<T, N> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.index < self.vec.len {
            let last = self.vec.len - 1;
            self.vec.len = last;
            // SAFETY: each live slot is read once.
            Some(unsafe { self.vec.arena.take(last) })
        } else {
            None
        }
    }
}

impl<T, const N: usize> ExactSizeIterator for IntoIter<T, N> {}

impl<T, const N: usize> FusedIterator for IntoIter<T, N> {}

impl<T, const N: usize> Drop for IntoIter<T, N> {
    fn drop(&mut self) {
        let (start, end) = (self.index, self.vec.len);
        if start < end {
            // SAFETY: `[index, len)` has not been yielded.
            unsafe { self.vec.arena.destroy_range(start..end) }
        }
    }
}

impl<T, const N: usize> IntoIter<T, N> {
    /// The remaining items as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.vec.as_slice()[self.index..]
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for IntoIter<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}
