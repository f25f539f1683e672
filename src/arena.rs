use core::{mem::MaybeUninit, ops::Range, ptr};

/// `N` uninitialized slots with manual per-slot lifetime control.
///
/// The arena does not know which slots are live, and has no `Drop`:
/// the owning store tracks liveness through its own length and destroys
/// what it constructed.
///
/// # Examples
///
/// ```
/// # use hybridvec::Arena;
/// let mut arena: Arena<String, 4> = Arena::new();
///
/// unsafe {
///     arena.construct(0, "slot".to_string());
///     assert_eq!(arena.get(0), "slot");
///     arena.destroy(0);
/// }
/// ```
pub struct Arena<T, const N: usize> {
    slots: [MaybeUninit<T>; N],
}

impl<T, const N: usize> Arena<T, N> {
    /// Creates an arena with every slot uninitialized.
    #[inline]
    pub const fn new() -> Self {
        Self {
            slots: [const { MaybeUninit::uninit() }; N],
        }
    }

    /// The number of slots, `N`.
    #[inline(always)]
    pub const fn capacity(&self) -> usize {
        N
    }

    #[inline(always)]
    pub const fn as_ptr(&self) -> *const T {
        &raw const self.slots as *const T
    }

    #[inline(always)]
    pub const fn as_mut_ptr(&mut self) -> *mut T {
        &raw mut self.slots as *mut T
    }

    /// Writes `value` into slot `index` and returns a reference to it.
    ///
    /// # Safety
    /// `index < N`, and the slot must not hold a live value (it would be
    /// overwritten without being dropped).
    #[inline]
    pub unsafe fn construct(&mut self, index: usize, value: T) -> &mut T {
        debug_assert!(index < N, "arena slot {index} out of range");
        unsafe { self.slots.get_unchecked_mut(index).write(value) }
    }

    /// Drops the value in slot `index` in place.
    ///
    /// # Safety
    /// `index < N` and the slot holds a live value, which is dead afterwards.
    #[inline]
    pub unsafe fn destroy(&mut self, index: usize) {
        debug_assert!(index < N, "arena slot {index} out of range");
        unsafe { self.slots.get_unchecked_mut(index).assume_init_drop() }
    }

    /// Drops every value in `range`.
    ///
    /// # Safety
    /// `range.end <= N` and every slot in `range` holds a live value.
    #[inline]
    pub unsafe fn destroy_range(&mut self, range: Range<usize>) {
        debug_assert!(range.start <= range.end && range.end <= N);
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.as_mut_ptr().add(range.start),
                range.end - range.start,
            ));
        }
    }

    /// Moves the value out of slot `index`, leaving it dead.
    ///
    /// # Safety
    /// `index < N` and the slot holds a live value.
    #[inline]
    pub unsafe fn take(&mut self, index: usize) -> T {
        debug_assert!(index < N, "arena slot {index} out of range");
        unsafe { self.slots.get_unchecked(index).assume_init_read() }
    }

    /// # Safety
    /// `index < N` and the slot holds a live value.
    #[inline]
    pub unsafe fn get(&self, index: usize) -> &T {
        debug_assert!(index < N, "arena slot {index} out of range");
        unsafe { self.slots.get_unchecked(index).assume_init_ref() }
    }

    /// # Safety
    /// `index < N` and the slot holds a live value.
    #[inline]
    pub unsafe fn get_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < N, "arena slot {index} out of range");
        unsafe { self.slots.get_unchecked_mut(index).assume_init_mut() }
    }

    /// The slots from `start` onwards, all treated as uninitialized.
    #[inline]
    pub fn uninit_from(&mut self, start: usize) -> &mut [MaybeUninit<T>] {
        &mut self.slots[start..]
    }
}

impl<T, const N: usize> Default for Arena<T, N> {
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}
