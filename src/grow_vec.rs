use alloc::vec::Vec;
use core::{
    alloc::Layout,
    cmp, fmt,
    iter::FusedIterator,
    mem::{self, ManuallyDrop, MaybeUninit},
    ptr::{self, NonNull},
    slice,
};

use crate::{
    Arena, Cursor, Error, FixedVec, Result,
    allocator::{Allocator, Global},
    raw::{self, RawBuf},
    utils::{cold_path, empty_violation, max_cap, min_cap, raise, split_range_bound},
};

/// A growable sequence backed by an [`Allocator`], with an optional inline
/// prefix of `I` slots.
///
/// While the elements fit in the inline block no allocation happens. Once
/// they outgrow it the contents move to a heap block obtained from `A`;
/// the inline block is kept and can be returned to with
/// [`shrink_to_fit`](GrowVec::shrink_to_fit).
///
/// Growth allocates `max(required, 2 * capacity, min_capacity)` slots. If
/// cloning the new elements panics during a growth, the vector is left
/// exactly as it was.
///
/// # Examples
///
/// ```
/// use hybridvec::{GrowVec, growvec};
///
/// let mut vec: GrowVec<i32> = growvec![1, 2, 3];
/// vec.push(4);
///
/// assert_eq!(vec, [1, 2, 3, 4]);
/// assert!(vec.capacity() >= 4);
///
/// let mut small: GrowVec<i32, 4> = GrowVec::new();
/// small.extend([1, 2, 3]);
/// assert!(small.is_inline());
/// ```
pub struct GrowVec<T, const I: usize = 0, A: Allocator = Global> {
    inline: Arena<T, I>,
    heap: Option<NonNull<T>>,
    cap: usize,
    len: usize,
    min: usize,
    alloc: A,
}

unsafe impl<T: Send, const I: usize, A: Allocator + Send> Send for GrowVec<T, I, A> {}
unsafe impl<T: Sync, const I: usize, A: Allocator + Sync> Sync for GrowVec<T, I, A> {}

impl<T, const I: usize, A: Allocator> Drop for GrowVec<T, I, A> {
    fn drop(&mut self) {
        unsafe {
            ptr::drop_in_place(self.as_mut_slice());
            if let Some(heap) = self.heap {
                Self::release_block(&self.alloc, heap, self.cap);
            }
        }
    }
}

/// Creates a [`GrowVec`] containing the arguments.
///
/// The syntax is similar to [`vec!`](https://doc.rust-lang.org/std/macro.vec.html).
///
/// # Examples
///
/// ```
/// # use hybridvec::{growvec, GrowVec};
/// let vec: GrowVec<String> = growvec![];
/// let vec: GrowVec<i64, 2> = growvec![1; 5];
/// let vec: GrowVec<_> = growvec![1, 2, 3, 4];
/// ```
#[macro_export]
macro_rules! growvec {
    [] => { $crate::GrowVec::new() };
    [$elem:expr; $n:expr] => { $crate::GrowVec::from_elem($elem, $n) };
    [$($item:expr),+ $(,)?] => { $crate::GrowVec::from_buf([ $($item),+ ]) };
}

/// Releases a partially filled block if the fill panics.
struct BlockGuard<'a, T, A: Allocator> {
    alloc: &'a A,
    block: NonNull<T>,
    cap: usize,
    start: usize,
    written: usize,
}

impl<T, A: Allocator> Drop for BlockGuard<'_, T, A> {
    fn drop(&mut self) {
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.block.as_ptr().add(self.start),
                self.written,
            ));
            let layout = Layout::from_size_align_unchecked(self.cap * size_of::<T>(), align_of::<T>());
            if layout.size() != 0 {
                self.alloc.deallocate(self.block.cast(), layout);
            }
        }
    }
}

impl<T, const I: usize> GrowVec<T, I, Global> {
    /// Constructs a new, empty `GrowVec` using the global allocator.
    ///
    /// Nothing is allocated until the elements outgrow the inline block.
    #[inline]
    pub const fn new() -> Self {
        Self::new_in(Global)
    }

    /// Constructs an empty vector that can hold at least `capacity` elements
    /// without reallocating.
    ///
    /// # Panics
    /// Panics if the allocation fails or the capacity is not representable.
    ///
    /// # Examples
    /// ```
    /// # use hybridvec::GrowVec;
    /// let vec: GrowVec<i32> = GrowVec::with_capacity(10);
    /// assert_eq!(vec.capacity(), 10);
    ///
    /// let vec: GrowVec<i32, 16> = GrowVec::with_capacity(10);
    /// assert_eq!(vec.capacity(), 16);
    /// assert!(vec.is_inline());
    /// ```
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_in(capacity, Global)
    }

    /// Constructs an empty vector whose growth never allocates fewer than
    /// `min` slots.
    #[inline]
    pub const fn with_min_capacity(min: usize) -> Self {
        Self::with_min_capacity_in(min, Global)
    }

    /// Creates a vector from an array.
    ///
    /// # Examples
    /// ```
    /// # use hybridvec::GrowVec;
    /// let vec: GrowVec<i32> = GrowVec::from_buf([1, 2, 3]);
    /// assert_eq!(vec, [1, 2, 3]);
    /// ```
    pub fn from_buf<const P: usize>(arr: [T; P]) -> Self {
        let mut vec = Self::with_capacity(P);
        let arr = ManuallyDrop::new(arr);
        // SAFETY: capacity is at least `P`, and `arr` is never dropped.
        unsafe {
            ptr::copy_nonoverlapping(arr.as_ptr(), vec.as_mut_ptr(), P);
            vec.len = P;
        }
        vec
    }
}

impl<T: Clone, const I: usize> GrowVec<T, I, Global> {
    /// Creates a vector with `num` clones of `elem`.
    ///
    /// # Examples
    /// ```
    /// # use hybridvec::GrowVec;
    /// let vec: GrowVec<i32> = GrowVec::from_elem(1, 4);
    /// assert_eq!(vec, [1, 1, 1, 1]);
    /// ```
    pub fn from_elem(elem: T, num: usize) -> Self {
        let mut vec = Self::with_capacity(num);
        vec.assign_fill(num, &elem);
        vec
    }

    /// Creates a vector from clones of `items`.
    pub fn from_slice(items: &[T]) -> Self {
        Self::from_slice_in(items, Global)
    }
}

impl<T, const I: usize, A: Allocator> GrowVec<T, I, A> {
    /// Constructs a new, empty `GrowVec` using `alloc`.
    #[inline]
    pub const fn new_in(alloc: A) -> Self {
        Self::with_min_capacity_in(min_cap::<T>(), alloc)
    }

    /// Constructs an empty vector that uses `alloc` and never grows to fewer
    /// than `min` slots.
    #[inline]
    pub const fn with_min_capacity_in(min: usize, alloc: A) -> Self {
        Self {
            inline: Arena::new(),
            heap: None,
            cap: I,
            len: 0,
            min,
            alloc,
        }
    }

    /// Constructs an empty vector that can hold at least `capacity` elements.
    ///
    /// # Panics
    /// Panics if the allocation fails or the capacity is not representable.
    pub fn with_capacity_in(capacity: usize, alloc: A) -> Self {
        let mut vec = Self::new_in(alloc);
        if capacity > I {
            if let Err(err) = vec.try_reserve_exact_to(capacity) {
                raise(err);
            }
        }
        vec
    }

    /// Creates a vector from clones of `items` using `alloc`.
    pub fn from_slice_in(items: &[T], alloc: A) -> Self
    where
        T: Clone,
    {
        let mut vec = Self::with_capacity_in(items.len(), alloc);
        raw::assign_from_slice(&mut vec, items);
        vec
    }

    /// Moves the elements of `src` into a heap block of `new_cap` slots,
    /// writing up to `gap` items from `items` at `at` first.
    ///
    /// On success `src` is left empty. On failure or panic `src` is untouched.
    pub(crate) fn adopt<const N: usize, It: Iterator<Item = T>>(
        src: &mut FixedVec<T, N>,
        new_cap: usize,
        at: usize,
        gap: usize,
        items: It,
        min: usize,
        alloc: A,
    ) -> Result<(Self, usize)> {
        let len = src.len();
        debug_assert!(at <= len && len + gap <= new_cap);

        let (block, written) = Self::fill_block(&alloc, new_cap, at, gap, items)?;
        // SAFETY: the block has room for `len + written`, and the gap is filled.
        unsafe {
            let old = src.as_mut_ptr();
            ptr::copy_nonoverlapping(old, block.as_ptr(), at);
            ptr::copy_nonoverlapping(old.add(at), block.as_ptr().add(at + written), len - at);
            src.set_len(0);
        }

        let vec = Self {
            inline: Arena::new(),
            heap: Some(block),
            cap: new_cap,
            len: len + written,
            min,
            alloc,
        };
        Ok((vec, written))
    }

    fn layout_for(capacity: usize) -> Result<Layout> {
        let max = max_cap::<T>();
        if capacity > max {
            return Err(Error::LengthError {
                requested: capacity,
                max,
            });
        }
        Layout::array::<T>(capacity).map_err(|_| Error::LengthError {
            requested: capacity,
            max,
        })
    }

    fn allocate_block(alloc: &A, capacity: usize) -> Result<NonNull<T>> {
        let layout = Self::layout_for(capacity)?;
        if layout.size() == 0 {
            return Ok(NonNull::dangling());
        }
        let block = alloc
            .allocate(layout)
            .map_err(|_| Error::AllocationFailure {
                size: layout.size(),
                align: layout.align(),
            })?;
        log::trace!("acquired {} bytes for {capacity} elements", layout.size());
        Ok(block.cast())
    }

    /// # Safety
    /// `block` came from `allocate_block(alloc, capacity)` and is not used again.
    unsafe fn release_block(alloc: &A, block: NonNull<T>, capacity: usize) {
        let size = capacity * size_of::<T>();
        if size != 0 {
            unsafe {
                alloc.deallocate(
                    block.cast(),
                    Layout::from_size_align_unchecked(size, align_of::<T>()),
                );
            }
            log::trace!("released {size} bytes for {capacity} elements");
        }
    }

    /// Allocates `capacity` slots and writes up to `gap` items at `at`.
    ///
    /// If an item panics, the items already written are dropped and the
    /// block is released.
    fn fill_block<It: Iterator<Item = T>>(
        alloc: &A,
        capacity: usize,
        at: usize,
        gap: usize,
        items: It,
    ) -> Result<(NonNull<T>, usize)> {
        let block = Self::allocate_block(alloc, capacity)?;
        let mut guard = BlockGuard {
            alloc,
            block,
            cap: capacity,
            start: at,
            written: 0,
        };
        for item in items.take(gap) {
            // SAFETY: `at + gap <= capacity`.
            unsafe { ptr::write(block.as_ptr().add(at + guard.written), item) };
            guard.written += 1;
        }
        let written = guard.written;
        mem::forget(guard);
        Ok((block, written))
    }

    /// Moves the contents into a fresh block of `new_cap` slots, leaving a
    /// gap at `at` that is filled from `items` before anything moves.
    ///
    /// Returns the number of items written into the gap.
    fn relocate<It: Iterator<Item = T>>(
        &mut self,
        new_cap: usize,
        at: usize,
        gap: usize,
        items: It,
    ) -> Result<usize> {
        debug_assert!(at <= self.len && self.len + gap <= new_cap);

        let (block, written) = Self::fill_block(&self.alloc, new_cap, at, gap, items)?;
        // SAFETY: the old contents are moved once into disjoint slots.
        unsafe {
            let old = self.as_mut_ptr();
            ptr::copy_nonoverlapping(old, block.as_ptr(), at);
            ptr::copy_nonoverlapping(
                old.add(at),
                block.as_ptr().add(at + written),
                self.len - at,
            );
            if let Some(heap) = self.heap {
                Self::release_block(&self.alloc, heap, self.cap);
            }
        }
        self.heap = Some(block);
        self.cap = new_cap;
        self.len += written;
        Ok(written)
    }

    /// The capacity a growth to `required` slots allocates.
    #[inline]
    fn grown_capacity(&self, required: usize) -> usize {
        let cap = cmp::max(cmp::max(required, self.cap.saturating_mul(2)), self.min);
        cmp::max(cmp::min(cap, max_cap::<T>()), required)
    }

    #[inline]
    fn required(&self, additional: usize) -> Result<usize> {
        self.len.checked_add(additional).ok_or(Error::LengthError {
            requested: usize::MAX,
            max: max_cap::<T>(),
        })
    }

    fn try_reserve_exact_to(&mut self, capacity: usize) -> Result<()> {
        let len = self.len;
        self.relocate(capacity, len, 0, core::iter::empty()).map(drop)
    }

    /// Returns a raw pointer to the vector's buffer.
    ///
    /// The pointer may point into the value itself while the vector is
    /// inline, so it is invalidated by moves as well as reallocation.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        match self.heap {
            Some(heap) => heap.as_ptr(),
            None => self.inline.as_ptr(),
        }
    }

    /// Returns a raw mutable pointer to the vector's buffer.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        match self.heap {
            Some(heap) => heap.as_ptr(),
            None => self.inline.as_mut_ptr(),
        }
    }

    /// Forces the length of the vector to `new_len`.
    ///
    /// # Safety
    /// - `new_len <= capacity()`.
    /// - Elements in `[old_len, new_len)` must be initialized.
    #[inline(always)]
    pub unsafe fn set_len(&mut self, new_len: usize) {
        debug_assert!(new_len <= self.cap);
        self.len = new_len;
    }

    #[inline(always)]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The number of elements the current block can hold.
    #[inline(always)]
    pub const fn capacity(&self) -> usize {
        self.cap
    }

    /// Returns `true` if the elements live in the inline block.
    ///
    /// A vector with `I == 0` is inline exactly when it has no heap block.
    #[inline(always)]
    pub const fn is_inline(&self) -> bool {
        self.heap.is_none()
    }

    /// The smallest block the vector grows to.
    #[inline(always)]
    pub const fn min_capacity(&self) -> usize {
        self.min
    }

    /// The largest capacity a block of `T` can describe.
    #[inline(always)]
    pub const fn max_capacity(&self) -> usize {
        max_cap::<T>()
    }

    #[inline(always)]
    pub const fn allocator(&self) -> &A {
        &self.alloc
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.as_ptr(), self.len) }
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { slice::from_raw_parts_mut(self.as_mut_ptr(), self.len) }
    }

    /// Bounds-checked access.
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

    #[inline]
    pub fn begin(&self) -> Cursor<'_, T> {
        Cursor::begin(self.as_slice())
    }

    #[inline]
    pub fn end(&self) -> Cursor<'_, T> {
        Cursor::end(self.as_slice())
    }

    /// # Panics
    /// Panics if `index > len`.
    #[inline]
    pub fn cursor(&self, index: usize) -> Cursor<'_, T> {
        Cursor::at(self.as_slice(), index)
    }

    /// Ensures room for at least `additional` more elements, growing by the
    /// usual rule.
    ///
    /// Does nothing if the capacity is already sufficient.
    ///
    /// # Errors
    /// [`Error::LengthError`] if the capacity would not be representable,
    /// [`Error::AllocationFailure`] if the allocator refuses. The vector is
    /// unchanged in both cases.
    ///
    /// # Examples
    /// ```
    /// # use hybridvec::{Error, GrowVec};
    /// let mut vec: GrowVec<u64> = GrowVec::new();
    /// assert!(vec.try_reserve(10).is_ok());
    /// assert!(vec.capacity() >= 10);
    /// assert!(matches!(vec.try_reserve(usize::MAX), Err(Error::LengthError { .. })));
    /// ```
    pub fn try_reserve(&mut self, additional: usize) -> Result<()> {
        let required = self.required(additional)?;
        if required <= self.cap {
            return Ok(());
        }
        cold_path();
        Self::layout_for(required)?;
        let new_cap = self.grown_capacity(required);
        self.try_reserve_exact_to(new_cap)
    }

    /// Ensures room for `additional` more elements without over-allocating
    /// beyond the configured minimum.
    ///
    /// # Errors
    /// Same as [`try_reserve`](GrowVec::try_reserve).
    pub fn try_reserve_exact(&mut self, additional: usize) -> Result<()> {
        let required = self.required(additional)?;
        if required <= self.cap {
            return Ok(());
        }
        self.try_reserve_exact_to(cmp::max(required, self.min))
    }

    /// Reserves capacity for at least `additional` more elements.
    ///
    /// # Panics
    /// Panics with the message of [`try_reserve`](GrowVec::try_reserve)'s error.
    ///
    /// # Examples
    /// ```
    /// # use hybridvec::{GrowVec, growvec};
    /// let mut vec: GrowVec<i32> = growvec![1];
    /// vec.reserve(10);
    /// let cap = vec.capacity();
    /// assert!(cap >= 11);
    ///
    /// vec.reserve(5);
    /// assert_eq!(vec.capacity(), cap);
    /// ```
    #[inline]
    pub fn reserve(&mut self, additional: usize) {
        if let Err(err) = self.try_reserve(additional) {
            raise(err);
        }
    }

    /// Reserves capacity for exactly `additional` more elements, or the
    /// configured minimum if that is larger.
    ///
    /// # Panics
    /// Panics if the allocation fails or the capacity is not representable.
    #[inline]
    pub fn reserve_exact(&mut self, additional: usize) {
        if let Err(err) = self.try_reserve_exact(additional) {
            raise(err);
        }
    }

    /// Shrinks the capacity as much as possible.
    ///
    /// - If the elements fit the inline block, they move back into it and
    ///   the heap block is released.
    /// - An empty vector releases its heap block.
    /// - Otherwise the elements move to a block of exactly `len` slots.
    ///
    /// If that block cannot be allocated the vector is left as it was.
    ///
    /// # Examples
    /// ```
    /// # use hybridvec::GrowVec;
    /// let mut vec: GrowVec<i32, 4> = GrowVec::new();
    /// vec.extend(0..10);
    /// assert!(!vec.is_inline());
    ///
    /// vec.truncate(3);
    /// vec.shrink_to_fit();
    /// assert!(vec.is_inline());
    /// assert_eq!(vec.capacity(), 4);
    /// assert_eq!(vec, [0, 1, 2]);
    /// ```
    pub fn shrink_to_fit(&mut self) {
        let Some(heap) = self.heap else {
            return;
        };
        if self.len == self.cap {
            return;
        }

        if I > 0 && self.len <= I {
            // SAFETY: the inline slots are dead while the heap block is in use.
            unsafe {
                ptr::copy_nonoverlapping(heap.as_ptr(), self.inline.as_mut_ptr(), self.len);
                Self::release_block(&self.alloc, heap, self.cap);
            }
            self.heap = None;
            self.cap = I;
            log::debug!("moved {} elements back into the inline block", self.len);
        } else if self.len == 0 {
            unsafe { Self::release_block(&self.alloc, heap, self.cap) };
            self.heap = None;
            self.cap = I;
        } else {
            let len = self.len;
            if let Err(err) = self.relocate(len, len, 0, core::iter::empty()) {
                log::warn!("shrink_to_fit skipped: {err}");
            }
        }
    }

    /// Appends an element to the back of the vector.
    ///
    /// # Panics
    /// Panics if growing fails.
    ///
    /// # Examples
    /// ```
    /// # use hybridvec::{GrowVec, growvec};
    /// let mut vec: GrowVec<i32, 2> = growvec![1, 2];
    /// vec.push(3);
    /// assert_eq!(vec, [1, 2, 3]);
    /// assert!(!vec.is_inline());
    /// ```
    #[inline]
    pub fn push(&mut self, value: T) {
        raw::push(self, value);
    }

    /// Appends an element and returns a reference to it.
    #[inline]
    pub fn emplace_back(&mut self, value: T) -> &mut T {
        raw::push(self, value)
    }

    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        raw::pop(self)
    }

    /// Drops the last element.
    ///
    /// # Panics
    /// In debug builds, panics with [`Error::EmptyContainerViolation`] if the
    /// vector is empty.
    #[inline]
    pub fn pop_back(&mut self) {
        if self.len == 0 {
            empty_violation("pop_back");
            return;
        }
        let len = self.len - 1;
        raw::truncate(self, len);
    }

    /// Inserts an element at `index`, shifting everything after it right.
    ///
    /// # Panics
    /// Panics if `index > len` or growing fails.
    #[inline]
    pub fn insert(&mut self, index: usize, element: T) {
        self.emplace(index, element);
    }

    /// Inserts an element at `index` and returns a reference to it.
    pub fn emplace(&mut self, index: usize, element: T) -> &mut T {
        self.insert_iter(index, core::iter::once(element));
        &mut self.as_mut_slice()[index]
    }

    /// Inserts every item of `items` at `index`, keeping their order.
    ///
    /// When the items do not fit, a new block is allocated and the leading
    /// `size_hint().0` items are written into their final gap before the
    /// old elements move. Items beyond the hint are pushed and rotated into
    /// place. If the iterator panics at any point the inserted items are
    /// removed again and the original elements keep their order.
    ///
    /// Returns the number of inserted items.
    ///
    /// # Panics
    /// Panics if `index > len` or growing fails.
    ///
    /// # Examples
    /// ```
    /// # use hybridvec::{GrowVec, growvec};
    /// let mut vec: GrowVec<i32> = growvec![1, 5];
    /// assert_eq!(vec.insert_iter(1, [2, 3, 4]), 3);
    /// assert_eq!(vec, [1, 2, 3, 4, 5]);
    /// ```
    pub fn insert_iter<It: IntoIterator<Item = T>>(&mut self, index: usize, items: It) -> usize {
        assert!(index <= self.len, "insertion index should be <= len");
        let mut items = items.into_iter();
        let lower = items.size_hint().0;

        let mut written = 0;
        if lower > self.cap - self.len {
            cold_path();
            let new_cap = match self.required(lower).and_then(|required| {
                Self::layout_for(required)?;
                Ok(self.grown_capacity(required))
            }) {
                Ok(cap) => cap,
                Err(err) => raise(err),
            };
            written = match self.relocate(new_cap, index, lower, items.by_ref()) {
                Ok(written) => written,
                Err(err) => raise(err),
            };
        }
        raw::finish_insert(self, index, written, items)
    }

    /// Inserts `count` clones of `value` at `index`.
    #[inline]
    pub fn insert_n(&mut self, index: usize, count: usize, value: &T)
    where
        T: Clone,
    {
        self.insert_iter(index, core::iter::repeat_n(value, count).cloned());
    }

    /// Inserts clones of `items` at `index`.
    #[inline]
    pub fn insert_from_slice(&mut self, index: usize, items: &[T])
    where
        T: Clone,
    {
        self.insert_iter(index, items.iter().cloned());
    }

    /// Removes and returns the element at `index`.
    ///
    /// # Panics
    /// Panics if `index >= len`.
    #[inline]
    pub fn remove(&mut self, index: usize) -> T {
        raw::remove(self, index)
    }

    /// Removes the elements in `range`.
    ///
    /// # Panics
    /// Panics if the range is out of bounds.
    pub fn erase<R: core::ops::RangeBounds<usize>>(&mut self, range: R) {
        let (start, end) = split_range_bound(&range, self.len);
        raw::erase(self, start, end);
    }

    #[inline]
    pub fn truncate(&mut self, len: usize) {
        raw::truncate(self, len);
    }

    /// Removes every element. The capacity is kept.
    #[inline]
    pub fn clear(&mut self) {
        raw::truncate(self, 0);
    }

    pub fn resize_with<F: FnMut() -> T>(&mut self, new_len: usize, mut f: F) {
        let len = self.len;
        if new_len <= len {
            self.truncate(new_len);
        } else {
            self.insert_iter(len, (len..new_len).map(|_| f()));
        }
    }

    /// Replaces the contents with `items`, reusing live slots.
    pub fn assign_iter<It: IntoIterator<Item = T>>(&mut self, items: It) {
        let items = items.into_iter();
        self.reserve(items.size_hint().0.saturating_sub(self.len));
        raw::assign_iter(self, items);
    }

    #[inline]
    pub fn spare_capacity_mut(&mut self) -> &mut [MaybeUninit<T>] {
        let (len, cap) = (self.len, self.cap);
        unsafe {
            slice::from_raw_parts_mut(
                self.as_mut_ptr().add(len) as *mut MaybeUninit<T>,
                cap - len,
            )
        }
    }

    const fn is_anchored(&self) -> bool {
        I > 0 && self.heap.is_none()
    }

    /// Exchanges the contents of two vectors.
    ///
    /// When neither side lives in its inline block this swaps the blocks
    /// themselves and is O(1). Otherwise the elements are exchanged one by
    /// one and the longer side's tail moves across.
    ///
    /// # Panics
    /// Panics if the shorter side cannot grow to take the tail.
    ///
    /// # Examples
    /// ```
    /// # use hybridvec::{GrowVec, growvec};
    /// let mut a: GrowVec<i32> = growvec![1, 2, 3];
    /// let mut b: GrowVec<i32> = growvec![4];
    /// a.swap_with(&mut b);
    /// assert_eq!(a, [4]);
    /// assert_eq!(b, [1, 2, 3]);
    /// ```
    pub fn swap_with(&mut self, other: &mut Self) {
        if self.is_anchored() || other.is_anchored() {
            raw::swap_elements(self, other);
        } else {
            mem::swap(&mut self.heap, &mut other.heap);
            mem::swap(&mut self.cap, &mut other.cap);
            mem::swap(&mut self.len, &mut other.len);
            mem::swap(&mut self.min, &mut other.min);
            mem::swap(&mut self.alloc, &mut other.alloc);
        }
    }

    /// Moves the elements into a [`Vec`].
    pub fn into_vec(self) -> Vec<T> {
        let mut vec = Vec::with_capacity(self.len);
        vec.extend(self);
        vec
    }
}

impl<T: Clone, const I: usize, A: Allocator> GrowVec<T, I, A> {
    /// Resizes the vector in place so that `len == new_len`.
    pub fn resize(&mut self, new_len: usize, value: T) {
        let len = self.len;
        if new_len <= len {
            self.truncate(new_len);
        } else {
            self.insert_n(len, new_len - len, &value);
        }
    }

    /// Appends clones of every element of `other`.
    ///
    /// # Examples
    /// ```
    /// # use hybridvec::{GrowVec, growvec};
    /// let mut vec: GrowVec<i32> = growvec![1];
    /// vec.extend_from_slice(&[2, 3, 4]);
    /// assert_eq!(vec, [1, 2, 3, 4]);
    /// ```
    #[inline]
    pub fn extend_from_slice(&mut self, other: &[T]) {
        let len = self.len;
        self.insert_from_slice(len, other);
    }

    /// Replaces the contents with `count` clones of `value`.
    pub fn assign_fill(&mut self, count: usize, value: &T) {
        self.reserve(count.saturating_sub(self.len));
        raw::assign_iter(self, core::iter::repeat_n(value, count).cloned());
    }

    /// Replaces the contents with clones of `items`, assigning the overlap
    /// with [`Clone::clone_from`].
    pub fn assign_from_slice(&mut self, items: &[T]) {
        self.reserve(items.len().saturating_sub(self.len));
        raw::assign_from_slice(self, items);
    }
}

unsafe impl<T, const I: usize, A: Allocator> RawBuf<T> for GrowVec<T, I, A> {
    #[inline(always)]
    fn raw_ptr(&mut self) -> *mut T {
        self.as_mut_ptr()
    }

    #[inline(always)]
    fn raw_len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    unsafe fn raw_set_len(&mut self, len: usize) {
        self.len = len;
    }

    #[inline(always)]
    fn raw_capacity(&self) -> usize {
        self.cap
    }

    #[inline]
    fn reserve_more(&mut self, additional: usize) {
        self.reserve(additional);
    }
}

impl<T, const I: usize> Default for GrowVec<T, I, Global> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, const I: usize, A: Allocator + Clone> Clone for GrowVec<T, I, A> {
    fn clone(&self) -> Self {
        let mut vec = Self::with_min_capacity_in(self.min, self.alloc.clone());
        vec.assign_from_slice(self.as_slice());
        vec
    }

    fn clone_from(&mut self, source: &Self) {
        self.assign_from_slice(source.as_slice());
    }
}

impl<'a, T: 'a + Clone, const I: usize, A: Allocator> Extend<&'a T> for GrowVec<T, I, A> {
    fn extend<It: IntoIterator<Item = &'a T>>(&mut self, iter: It) {
        let len = self.len;
        self.insert_iter(len, iter.into_iter().cloned());
    }
}

impl<T, const I: usize, A: Allocator> Extend<T> for GrowVec<T, I, A> {
    #[inline]
    fn extend<It: IntoIterator<Item = T>>(&mut self, iter: It) {
        let len = self.len;
        self.insert_iter(len, iter);
    }
}

crate::utils::impl_slice_traits!([const I: usize, A: Allocator] GrowVec<T, I, A>);

impl<T, U, const I: usize, const J: usize, A: Allocator, B: Allocator> PartialEq<GrowVec<U, J, B>>
    for GrowVec<T, I, A>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &GrowVec<U, J, B>) -> bool {
        PartialEq::eq(self.as_slice(), other.as_slice())
    }
}

impl<T: Clone, const I: usize> From<&[T]> for GrowVec<T, I, Global> {
    #[inline]
    fn from(value: &[T]) -> Self {
        Self::from_slice(value)
    }
}

impl<T, const I: usize, const P: usize> From<[T; P]> for GrowVec<T, I, Global> {
    #[inline]
    fn from(value: [T; P]) -> Self {
        Self::from_buf(value)
    }
}

impl<T, const I: usize> FromIterator<T> for GrowVec<T, I, Global> {
    fn from_iter<It: IntoIterator<Item = T>>(iter: It) -> Self {
        let mut vec = Self::new();
        vec.extend(iter);
        vec
    }
}

/// An iterator that moves out of a [`GrowVec`].
pub struct IntoIter<T, const I: usize = 0, A: Allocator = Global> {
    vec: ManuallyDrop<GrowVec<T, I, A>>,
    index: usize,
}

impl<T, const I: usize, A: Allocator> IntoIterator for GrowVec<T, I, A> {
    type Item = T;
    type IntoIter = IntoIter<T, I, A>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            vec: ManuallyDrop::new(self),
            index: 0,
        }
    }
}

impl<T, const I: usize, A: Allocator> Iterator for IntoIter<T, I, A> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.index < self.vec.len {
            self.index += 1;
            // SAFETY: each live slot is read once.
            Some(unsafe { ptr::read(self.vec.as_ptr().add(self.index - 1)) })
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

impl<T, const I: usize, A: Allocator> DoubleEndedIterator for IntoIter<T, I, A> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.index < self.vec.len {
            self.vec.len -= 1;
            // SAFETY: each live slot is read once.
            Some(unsafe { ptr::read(self.vec.as_ptr().add(self.vec.len)) })
        } else {
            None
        }
    }
}

impl<T, const I: usize, A: Allocator> ExactSizeIterator for IntoIter<T, I, A> {}

impl<T, const I: usize, A: Allocator> FusedIterator for IntoIter<T, I, A> {}

impl<T, const I: usize, A: Allocator> IntoIter<T, I, A> {
    /// The remaining items as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.vec.as_slice()[self.index..]
    }
}

impl<T, const I: usize, A: Allocator> Drop for IntoIter<T, I, A> {
    fn drop(&mut self) {
        unsafe {
            let remaining = self.vec.len - self.index;
            let rest = self.vec.as_mut_ptr().add(self.index);
            self.vec.len = 0;
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(rest, remaining));
            // Releases the block.
            ManuallyDrop::drop(&mut self.vec);
        }
    }
}

impl<T: fmt::Debug, const I: usize, A: Allocator> fmt::Debug for IntoIter<T, I, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}
