use alloc::vec::Vec;
use core::{cmp, fmt, iter::FusedIterator, mem::MaybeUninit, ptr};

use crate::{
    Cursor, Error, FixedVec, GrowVec, Result,
    allocator::{Allocator, Global},
    fixed_vec, grow_vec,
    raw::{self, RawBuf},
    utils::{cold_path, empty_violation, max_cap, raise, split_range_bound},
};

enum Repr<T, const N: usize, A: Allocator> {
    Static(FixedVec<T, N>, A),
    Dynamic(GrowVec<T, 0, A>),
}

/// A sequence stored in place while it holds at most `N` elements, moved to
/// an allocator-backed block when it grows past that.
///
/// Moving to the heap (promotion) happens automatically on any mutation that
/// needs more than `N` slots. Moving back (demotion) only happens on an
/// explicit [`shrink_to_fit`](HybridVec::shrink_to_fit) once the elements
/// fit again, so a sequence oscillating around `N` never thrashes.
///
/// Heap blocks never hold fewer than [`dynamic_minimum`](HybridVec::dynamic_minimum)
/// slots, that is `max(MIN, N)`.
///
/// # Examples
///
/// ```
/// use hybridvec::HybridVec;
///
/// let mut vec: HybridVec<&'static str, 2> = HybridVec::new();
///
/// vec.push("Hello");
/// vec.push("world");
/// assert!(vec.is_static());
/// assert_eq!(vec.capacity(), 2);
///
/// vec.extend(["2025", "12"]);
/// assert!(vec.is_dynamic());
/// assert_eq!(vec, ["Hello", "world", "2025", "12"]);
///
/// vec.truncate(2);
/// assert!(vec.is_dynamic());
///
/// vec.shrink_to_fit();
/// assert!(vec.is_static());
/// assert_eq!(vec, ["Hello", "world"]);
/// ```
pub struct HybridVec<T, const N: usize, const MIN: usize = 0, A: Allocator + Clone = Global> {
    repr: Repr<T, N, A>,
}

/// Creates a [`HybridVec`] containing the arguments.
///
/// The syntax is similar to [`vec!`](https://doc.rust-lang.org/std/macro.vec.html).
/// When the elements exceed the fixed capacity the result starts out dynamic.
///
/// # Examples
///
/// ```
/// # use hybridvec::{hybridvec, HybridVec};
/// let vec: HybridVec<String, 10> = hybridvec![];
/// let vec: HybridVec<i64, 10> = hybridvec![1; 5];
/// let vec: HybridVec<_, 2> = hybridvec![1, 2, 3, 4];
/// assert!(vec.is_dynamic());
/// ```
#[macro_export]
macro_rules! hybridvec {
    [] => { $crate::HybridVec::new() };
    [$elem:expr; $n:expr] => { $crate::HybridVec::from_elem($elem, $n) };
    [$($item:expr),+ $(,)?] => { $crate::HybridVec::from_buf([ $($item),+ ]) };
}

impl<T, const N: usize, const MIN: usize> HybridVec<T, N, MIN, Global> {
    /// Constructs a new, empty `HybridVec` in its fixed representation.
    ///
    /// # Examples
    /// ```
    /// # use hybridvec::HybridVec;
    /// let vec: HybridVec<i32, 8> = HybridVec::new();
    /// assert!(vec.is_static());
    /// assert_eq!(vec.capacity(), 8);
    /// ```
    #[inline]
    pub const fn new() -> Self {
        Self::new_in(Global)
    }

    /// Constructs an empty vector with room for at least `capacity`
    /// elements.
    ///
    /// A capacity above `N` starts out dynamic with a block of
    /// `max(capacity, dynamic_minimum())` slots.
    ///
    /// # Examples
    /// ```
    /// # use hybridvec::HybridVec;
    /// let vec: HybridVec<i32, 4> = HybridVec::with_capacity(3);
    /// assert!(vec.is_static());
    ///
    /// let vec: HybridVec<i32, 4, 16> = HybridVec::with_capacity(5);
    /// assert!(vec.is_dynamic());
    /// assert_eq!(vec.capacity(), 16);
    /// ```
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_in(capacity, Global)
    }

    /// Creates a vector from an array.
    ///
    /// # Examples
    /// ```
    /// # use hybridvec::HybridVec;
    /// let vec: HybridVec<i32, 2, 8> = HybridVec::from_buf([1, 2, 3]);
    /// assert!(vec.is_dynamic());
    /// assert_eq!(vec.capacity(), 8);
    /// ```
    pub fn from_buf<const P: usize>(arr: [T; P]) -> Self {
        let mut vec = Self::with_capacity(P);
        let arr = core::mem::ManuallyDrop::new(arr);
        // SAFETY: capacity is at least `P`, and `arr` is never dropped.
        unsafe {
            ptr::copy_nonoverlapping(arr.as_ptr(), vec.as_mut_ptr(), P);
            vec.set_len(P);
        }
        vec
    }
}

impl<T: Clone, const N: usize, const MIN: usize> HybridVec<T, N, MIN, Global> {
    /// Creates a vector with `num` clones of `elem`.
    pub fn from_elem(elem: T, num: usize) -> Self {
        let mut vec = Self::with_capacity(num);
        raw::assign_iter(&mut vec, core::iter::repeat_n(&elem, num).cloned());
        vec
    }

    /// Creates a vector from clones of `items`.
    pub fn from_slice(items: &[T]) -> Self {
        Self::from_slice_in(items, Global)
    }

    /// Copies a vector of another configuration.
    ///
    /// The representation is chosen from the element count against this
    /// type's `N`, not from the representation of `other`.
    ///
    /// # Examples
    /// ```
    /// # use hybridvec::HybridVec;
    /// let small: HybridVec<i32, 2, 4> = HybridVec::from_slice(&[1, 2, 3]);
    /// assert!(small.is_dynamic());
    ///
    /// let wider: HybridVec<i32, 3, 4> = HybridVec::from_other(&small);
    /// assert!(wider.is_static());
    /// assert_eq!(wider, small);
    /// ```
    pub fn from_other<const P: usize, const Q: usize, B: Allocator + Clone>(
        other: &HybridVec<T, P, Q, B>,
    ) -> Self {
        Self::from_slice(other.as_slice())
    }
}

impl<T, const N: usize, const MIN: usize, A: Allocator + Clone> HybridVec<T, N, MIN, A> {
    /// The smallest heap block a promotion or growth allocates, `max(MIN, N)`.
    #[inline(always)]
    pub const fn dynamic_minimum() -> usize {
        if MIN > N { MIN } else { N }
    }

    /// Constructs a new, empty `HybridVec` that allocates from `alloc`.
    #[inline]
    pub const fn new_in(alloc: A) -> Self {
        Self {
            repr: Repr::Static(FixedVec::new(), alloc),
        }
    }

    /// See [`with_capacity`](HybridVec::with_capacity).
    ///
    /// # Panics
    /// Panics if the allocation fails.
    pub fn with_capacity_in(capacity: usize, alloc: A) -> Self {
        if capacity <= N {
            return Self::new_in(alloc);
        }
        let mut grow = GrowVec::with_min_capacity_in(Self::dynamic_minimum(), alloc);
        grow.reserve_exact(capacity);
        Self {
            repr: Repr::Dynamic(grow),
        }
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

    /// Moves the elements from the fixed block into a heap block with room
    /// for `required`, writing up to `gap` items from `items` at `at` first.
    ///
    /// Returns the number of items written. On error nothing changes.
    fn promote<It: Iterator<Item = T>>(
        &mut self,
        required: usize,
        at: usize,
        gap: usize,
        items: It,
    ) -> Result<usize> {
        let Repr::Static(fixed, alloc) = &mut self.repr else {
            return Ok(0);
        };
        let len = fixed.len();
        let wanted = cmp::max(required, Self::dynamic_minimum());
        let new_cap = cmp::max(cmp::min(wanted, max_cap::<T>()), required);

        let (grow, written) = GrowVec::adopt(
            fixed,
            new_cap,
            at,
            gap,
            items,
            Self::dynamic_minimum(),
            alloc.clone(),
        )?;
        self.repr = Repr::Dynamic(grow);
        log::debug!("promoted {len} elements to a heap block of {new_cap}");
        Ok(written)
    }

    fn demote(&mut self) {
        let Repr::Dynamic(grow) = &mut self.repr else {
            return;
        };
        let len = grow.len();
        debug_assert!(len <= N);

        let mut fixed = FixedVec::new();
        // SAFETY: `len <= N`, and the heap block forgets the moved elements.
        unsafe {
            ptr::copy_nonoverlapping(grow.as_ptr(), fixed.as_mut_ptr(), len);
            grow.set_len(0);
            fixed.set_len(len);
        }
        let alloc = grow.allocator().clone();
        self.repr = Repr::Static(fixed, alloc);
        log::debug!("demoted {len} elements back into the fixed block");
    }

    /// Returns `true` while the elements live in the fixed block.
    #[inline]
    pub const fn is_static(&self) -> bool {
        matches!(self.repr, Repr::Static(..))
    }

    /// Returns `true` once the elements have moved to a heap block.
    #[inline]
    pub const fn is_dynamic(&self) -> bool {
        matches!(self.repr, Repr::Dynamic(_))
    }

    /// The fixed representation, if the vector is static.
    #[inline]
    pub fn as_fixed(&self) -> Option<&FixedVec<T, N>> {
        match &self.repr {
            Repr::Static(fixed, _) => Some(fixed),
            Repr::Dynamic(_) => None,
        }
    }

    /// The heap representation, if the vector is dynamic.
    #[inline]
    pub fn as_grow(&self) -> Option<&GrowVec<T, 0, A>> {
        match &self.repr {
            Repr::Static(..) => None,
            Repr::Dynamic(grow) => Some(grow),
        }
    }

    #[inline]
    pub fn allocator(&self) -> &A {
        match &self.repr {
            Repr::Static(_, alloc) => alloc,
            Repr::Dynamic(grow) => grow.allocator(),
        }
    }

    #[inline]
    pub fn as_ptr(&self) -> *const T {
        match &self.repr {
            Repr::Static(fixed, _) => fixed.as_ptr(),
            Repr::Dynamic(grow) => grow.as_ptr(),
        }
    }

    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        match &mut self.repr {
            Repr::Static(fixed, _) => fixed.as_mut_ptr(),
            Repr::Dynamic(grow) => grow.as_mut_ptr(),
        }
    }

    /// Forces the length of the vector to `new_len`.
    ///
    /// # Safety
    /// - `new_len <= capacity()`.
    /// - Elements in `[old_len, new_len)` must be initialized.
    #[inline]
    pub unsafe fn set_len(&mut self, new_len: usize) {
        match &mut self.repr {
            Repr::Static(fixed, _) => unsafe { fixed.set_len(new_len) },
            Repr::Dynamic(grow) => unsafe { grow.set_len(new_len) },
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        match &self.repr {
            Repr::Static(fixed, _) => fixed.len(),
            Repr::Dynamic(grow) => grow.len(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `N` while static, the heap block's capacity while dynamic.
    #[inline]
    pub fn capacity(&self) -> usize {
        match &self.repr {
            Repr::Static(..) => N,
            Repr::Dynamic(grow) => grow.capacity(),
        }
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        match &self.repr {
            Repr::Static(fixed, _) => fixed.as_slice(),
            Repr::Dynamic(grow) => grow.as_slice(),
        }
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        match &mut self.repr {
            Repr::Static(fixed, _) => fixed.as_mut_slice(),
            Repr::Dynamic(grow) => grow.as_mut_slice(),
        }
    }

    /// Bounds-checked access.
    ///
    /// # Examples
    /// ```
    /// # use hybridvec::{Error, HybridVec, hybridvec};
    /// let vec: HybridVec<i32, 4> = hybridvec![1, 2];
    /// assert_eq!(vec.at(1), Ok(&2));
    /// assert_eq!(vec.at(2), Err(Error::IndexOutOfRange { index: 2, len: 2 }));
    /// ```
    #[inline]
    pub fn at(&self, index: usize) -> Result<&T> {
        self.as_slice().get(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.len(),
        })
    }

    /// Bounds-checked mutable access.
    #[inline]
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.len();
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

    /// Ensures room for `additional` more elements, promoting if the fixed
    /// block is too small.
    ///
    /// # Errors
    /// [`Error::LengthError`] or [`Error::AllocationFailure`]; the vector is
    /// unchanged.
    pub fn try_reserve(&mut self, additional: usize) -> Result<()> {
        let len = self.len();
        if let Repr::Dynamic(grow) = &mut self.repr {
            return grow.try_reserve(additional);
        }
        if additional <= N - len {
            return Ok(());
        }
        cold_path();
        let required = len.checked_add(additional).ok_or(Error::LengthError {
            requested: usize::MAX,
            max: max_cap::<T>(),
        })?;
        self.promote(required, len, 0, core::iter::empty()).map(drop)
    }

    /// Reserves room for at least `additional` more elements.
    ///
    /// # Panics
    /// Panics if growing fails.
    ///
    /// # Examples
    /// ```
    /// # use hybridvec::{HybridVec, hybridvec};
    /// let mut vec: HybridVec<i32, 4> = hybridvec![1, 2];
    /// vec.reserve(2);
    /// assert!(vec.is_static());
    ///
    /// vec.reserve(3);
    /// assert!(vec.is_dynamic());
    /// assert!(vec.capacity() >= 5);
    /// ```
    #[inline]
    pub fn reserve(&mut self, additional: usize) {
        if let Err(err) = self.try_reserve(additional) {
            raise(err);
        }
    }

    /// Releases unused capacity.
    ///
    /// A dynamic vector whose elements fit in `N` moves back into the fixed
    /// block; a larger one shrinks its heap block to `len`. A static vector is
    /// left alone. This is the only operation that demotes.
    ///
    /// # Examples
    /// ```
    /// # use hybridvec::HybridVec;
    /// let mut vec: HybridVec<i32, 2, 8> = HybridVec::from_slice(&[1, 2, 3]);
    /// assert_eq!(vec.capacity(), 8);
    ///
    /// vec.pop();
    /// vec.shrink_to_fit();
    /// assert!(vec.is_static());
    /// assert_eq!(vec.capacity(), 2);
    /// assert_eq!(vec, [1, 2]);
    /// ```
    pub fn shrink_to_fit(&mut self) {
        let Repr::Dynamic(grow) = &mut self.repr else {
            return;
        };
        if grow.len() <= N {
            self.demote();
        } else {
            grow.shrink_to_fit();
        }
    }

    /// Appends an element, promoting if the fixed block is full.
    ///
    /// # Examples
    /// ```
    /// # use hybridvec::{HybridVec, hybridvec};
    /// let mut vec: HybridVec<i32, 4> = hybridvec![1, 2, 3];
    /// vec.push(4);
    /// assert!(vec.is_static());
    ///
    /// vec.push(5);
    /// assert!(vec.is_dynamic());
    /// assert_eq!(vec, [1, 2, 3, 4, 5]);
    /// ```
    #[inline]
    pub fn push(&mut self, value: T) {
        raw::push(self, value);
    }

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
        let len = self.len();
        if len == 0 {
            empty_violation("pop_back");
            return;
        }
        raw::truncate(self, len - 1);
    }

    /// Inserts an element at `index`, promoting if needed.
    ///
    /// # Panics
    /// Panics if `index > len` or growing fails.
    ///
    /// # Examples
    /// ```
    /// # use hybridvec::{HybridVec, hybridvec};
    /// let mut vec: HybridVec<i32, 3> = hybridvec![1, 2, 3];
    /// vec.insert(1, 99);
    /// assert_eq!(vec, [1, 99, 2, 3]);
    /// assert!(vec.is_dynamic());
    /// assert!(vec.capacity() > 3);
    /// ```
    #[inline]
    pub fn insert(&mut self, index: usize, element: T) {
        self.emplace(index, element);
    }

    pub fn emplace(&mut self, index: usize, element: T) -> &mut T {
        self.insert_iter(index, core::iter::once(element));
        &mut self.as_mut_slice()[index]
    }

    /// Inserts every item of `items` at `index`, keeping their order.
    ///
    /// A promotion caused by the insertion writes the leading
    /// `size_hint().0` items straight into the new heap block, so an
    /// iterator panicking within its hint leaves the vector static and
    /// unchanged. A panic past the hint leaves the original elements in
    /// place, in the already promoted block.
    ///
    /// Returns the number of inserted items.
    ///
    /// # Panics
    /// Panics if `index > len` or growing fails.
    pub fn insert_iter<It: IntoIterator<Item = T>>(&mut self, index: usize, items: It) -> usize {
        let mut items = items.into_iter();
        if let Repr::Dynamic(grow) = &mut self.repr {
            return grow.insert_iter(index, items);
        }

        let len = self.len();
        assert!(index <= len, "insertion index should be <= len");
        let lower = items.size_hint().0;

        let mut written = 0;
        if lower > N - len {
            let promoted = len
                .checked_add(lower)
                .ok_or(Error::LengthError {
                    requested: usize::MAX,
                    max: max_cap::<T>(),
                })
                .and_then(|required| self.promote(required, index, lower, items.by_ref()));
            written = match promoted {
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

    /// Removes the elements in `range`. Never demotes.
    ///
    /// # Panics
    /// Panics if the range is out of bounds.
    pub fn erase<R: core::ops::RangeBounds<usize>>(&mut self, range: R) {
        let (start, end) = split_range_bound(&range, self.len());
        raw::erase(self, start, end);
    }

    /// Shortens the vector. Never demotes.
    #[inline]
    pub fn truncate(&mut self, len: usize) {
        raw::truncate(self, len);
    }

    #[inline]
    pub fn clear(&mut self) {
        raw::truncate(self, 0);
    }

    pub fn resize_with<F: FnMut() -> T>(&mut self, new_len: usize, mut f: F) {
        let len = self.len();
        if new_len <= len {
            self.truncate(new_len);
        } else {
            self.insert_iter(len, (len..new_len).map(|_| f()));
        }
    }

    /// Replaces the contents with `items`, keeping the current
    /// representation unless more room is needed.
    pub fn assign_iter<It: IntoIterator<Item = T>>(&mut self, items: It) {
        let items = items.into_iter();
        self.reserve(items.size_hint().0.saturating_sub(self.len()));
        raw::assign_iter(self, items);
    }

    #[inline]
    pub fn spare_capacity_mut(&mut self) -> &mut [MaybeUninit<T>] {
        match &mut self.repr {
            Repr::Static(fixed, _) => fixed.spare_capacity_mut(),
            Repr::Dynamic(grow) => grow.spare_capacity_mut(),
        }
    }

    /// Exchanges the contents of two vectors.
    ///
    /// - Both static: the elements are swapped in place, no element is
    ///   cloned or dropped.
    /// - Both dynamic: the heap blocks are exchanged in O(1).
    /// - Mixed: the representations trade places.
    ///
    /// # Examples
    /// ```
    /// # use hybridvec::{HybridVec, hybridvec};
    /// let mut a: HybridVec<i32, 2> = hybridvec![1];
    /// let mut b: HybridVec<i32, 2> = hybridvec![2, 3, 4];
    /// a.swap_with(&mut b);
    /// assert!(a.is_dynamic() && b.is_static());
    /// assert_eq!(a, [2, 3, 4]);
    /// assert_eq!(b, [1]);
    /// ```
    pub fn swap_with(&mut self, other: &mut Self) {
        match (&mut self.repr, &mut other.repr) {
            (Repr::Static(a, a_alloc), Repr::Static(b, b_alloc)) => {
                a.swap_with(b);
                core::mem::swap(a_alloc, b_alloc);
            }
            (Repr::Dynamic(a), Repr::Dynamic(b)) => a.swap_with(b),
            (a, b) => core::mem::swap(a, b),
        }
    }

    /// Moves the elements into a [`Vec`].
    pub fn into_vec(self) -> Vec<T> {
        match self.repr {
            Repr::Static(fixed, _) => fixed.into_vec(),
            Repr::Dynamic(grow) => grow.into_vec(),
        }
    }
}

impl<T: Clone, const N: usize, const MIN: usize, A: Allocator + Clone> HybridVec<T, N, MIN, A> {
    pub fn resize(&mut self, new_len: usize, value: T) {
        let len = self.len();
        if new_len <= len {
            self.truncate(new_len);
        } else {
            self.insert_n(len, new_len - len, &value);
        }
    }

    #[inline]
    pub fn extend_from_slice(&mut self, other: &[T]) {
        let len = self.len();
        self.insert_from_slice(len, other);
    }

    /// Replaces the contents with `count` clones of `value`, keeping the
    /// current representation unless more room is needed.
    pub fn assign_fill(&mut self, count: usize, value: &T) {
        self.reserve(count.saturating_sub(self.len()));
        raw::assign_iter(self, core::iter::repeat_n(value, count).cloned());
    }

    /// Replaces the contents with clones of `items`, keeping the current
    /// representation unless more room is needed.
    ///
    /// # Examples
    /// ```
    /// # use hybridvec::{HybridVec, hybridvec};
    /// let mut vec: HybridVec<i32, 2> = hybridvec![1, 2, 3];
    /// vec.assign_from_slice(&[7]);
    /// assert!(vec.is_dynamic());
    /// assert_eq!(vec, [7]);
    /// ```
    pub fn assign_from_slice(&mut self, items: &[T]) {
        self.reserve(items.len().saturating_sub(self.len()));
        raw::assign_from_slice(self, items);
    }

    /// Replaces the contents with clones of another configuration's elements.
    #[inline]
    pub fn assign_from_other<const P: usize, const Q: usize, B: Allocator + Clone>(
        &mut self,
        other: &HybridVec<T, P, Q, B>,
    ) {
        self.assign_from_slice(other.as_slice());
    }
}

unsafe impl<T, const N: usize, const MIN: usize, A: Allocator + Clone> RawBuf<T>
    for HybridVec<T, N, MIN, A>
{
    #[inline(always)]
    fn raw_ptr(&mut self) -> *mut T {
        self.as_mut_ptr()
    }

    #[inline(always)]
    fn raw_len(&self) -> usize {
        self.len()
    }

    #[inline(always)]
    unsafe fn raw_set_len(&mut self, len: usize) {
        unsafe { self.set_len(len) }
    }

    #[inline(always)]
    fn raw_capacity(&self) -> usize {
        self.capacity()
    }

    #[inline]
    fn reserve_more(&mut self, additional: usize) {
        self.reserve(additional);
    }
}

impl<T, const N: usize, const MIN: usize> Default for HybridVec<T, N, MIN, Global> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, const N: usize, const MIN: usize, A: Allocator + Clone> Clone
    for HybridVec<T, N, MIN, A>
{
    fn clone(&self) -> Self {
        Self::from_slice_in(self.as_slice(), self.allocator().clone())
    }

    fn clone_from(&mut self, source: &Self) {
        self.assign_from_slice(source.as_slice());
    }
}

impl<'a, T: 'a + Clone, const N: usize, const MIN: usize, A: Allocator + Clone> Extend<&'a T>
    for HybridVec<T, N, MIN, A>
{
    fn extend<It: IntoIterator<Item = &'a T>>(&mut self, iter: It) {
        let len = self.len();
        self.insert_iter(len, iter.into_iter().cloned());
    }
}

impl<T, const N: usize, const MIN: usize, A: Allocator + Clone> Extend<T>
    for HybridVec<T, N, MIN, A>
{
    #[inline]
    fn extend<It: IntoIterator<Item = T>>(&mut self, iter: It) {
        let len = self.len();
        self.insert_iter(len, iter);
    }
}

crate::utils::impl_slice_traits!([const N: usize, const MIN: usize, A: Allocator + Clone] HybridVec<T, N, MIN, A>);

impl<T, U, const N: usize, const MIN: usize, A, const P: usize, const Q: usize, B>
    PartialEq<HybridVec<U, P, Q, B>> for HybridVec<T, N, MIN, A>
where
    T: PartialEq<U>,
    A: Allocator + Clone,
    B: Allocator + Clone,
{
    #[inline]
    fn eq(&self, other: &HybridVec<U, P, Q, B>) -> bool {
        PartialEq::eq(self.as_slice(), other.as_slice())
    }
}

impl<T: Clone, const N: usize, const MIN: usize> From<&[T]> for HybridVec<T, N, MIN, Global> {
    #[inline]
    fn from(value: &[T]) -> Self {
        Self::from_slice(value)
    }
}

impl<T, const N: usize, const MIN: usize, const P: usize> From<[T; P]>
    for HybridVec<T, N, MIN, Global>
{
    #[inline]
    fn from(value: [T; P]) -> Self {
        Self::from_buf(value)
    }
}

impl<T, const N: usize, const MIN: usize> From<FixedVec<T, N>> for HybridVec<T, N, MIN, Global> {
    #[inline]
    fn from(value: FixedVec<T, N>) -> Self {
        Self {
            repr: Repr::Static(value, Global),
        }
    }
}

impl<T, const N: usize, const MIN: usize> FromIterator<T> for HybridVec<T, N, MIN, Global> {
    fn from_iter<It: IntoIterator<Item = T>>(iter: It) -> Self {
        let iter = iter.into_iter();
        let mut vec = Self::with_capacity(iter.size_hint().0);
        vec.extend(iter);
        vec
    }
}

enum IntoIterRepr<T, const N: usize, A: Allocator> {
    Static(fixed_vec::IntoIter<T, N>),
    Dynamic(grow_vec::IntoIter<T, 0, A>),
}

/// An iterator that moves out of a [`HybridVec`].
pub struct IntoIter<T, const N: usize, A: Allocator = Global> {
    inner: IntoIterRepr<T, N, A>,
}

impl<T, const N: usize, const MIN: usize, A: Allocator + Clone> IntoIterator
    for HybridVec<T, N, MIN, A>
{
    type Item = T;
    type IntoIter = IntoIter<T, N, A>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        let inner = match self.repr {
            Repr::Static(fixed, _) => IntoIterRepr::Static(fixed.into_iter()),
            Repr::Dynamic(grow) => IntoIterRepr::Dynamic(grow.into_iter()),
        };
        IntoIter { inner }
    }
}

impl<T, const N: usize, A: Allocator> IntoIter<T, N, A> {
    /// The remaining items as a slice.
    pub fn as_slice(&self) -> &[T] {
        match &self.inner {
            IntoIterRepr::Static(iter) => iter.as_slice(),
            IntoIterRepr::Dynamic(iter) => iter.as_slice(),
        }
    }
}

impl<T, const N: usize, A: Allocator> Iterator for IntoIter<T, N, A> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        match &mut self.inner {
            IntoIterRepr::Static(iter) => iter.next(),
            IntoIterRepr::Dynamic(iter) => iter.next(),
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            IntoIterRepr::Static(iter) => iter.size_hint(),
            IntoIterRepr::Dynamic(iter) => iter.size_hint(),
        }
    }
}

impl<T, const N: usize, A: Allocator> DoubleEndedIterator for IntoIter<T, N, A> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        match &mut self.inner {
            IntoIterRepr::Static(iter) => iter.next_back(),
            IntoIterRepr::Dynamic(iter) => iter.next_back(),
        }
    }
}

impl<T, const N: usize, A: Allocator> ExactSizeIterator for IntoIter<T, N, A> {}

impl<T, const N: usize, A: Allocator> FusedIterator for IntoIter<T, N, A> {}

impl<T: fmt::Debug, const N: usize, A: Allocator> fmt::Debug for IntoIter<T, N, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}
