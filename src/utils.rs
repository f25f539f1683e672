use crate::Error;

#[inline(always)]
#[cold]
pub(crate) const fn cold_path() {}

/// The smallest non-zero block worth allocating, the same rule `Vec` uses.
#[inline(always)]
pub(crate) const fn min_cap<T>() -> usize {
    let size = size_of::<T>();
    if size == 1 {
        8
    } else if size <= 1024 {
        4
    } else {
        1
    }
}

/// The largest element count a block of `T` can describe.
#[inline(always)]
pub(crate) const fn max_cap<T>() -> usize {
    match size_of::<T>() {
        0 => usize::MAX,
        size => isize::MAX as usize / size,
    }
}

#[inline(always)]
pub(crate) fn split_range_bound(
    src: &impl core::ops::RangeBounds<usize>,
    len: usize,
) -> (usize, usize) {
    let start = match src.start_bound() {
        core::ops::Bound::Included(&i) => i,
        core::ops::Bound::Excluded(&i) => i + 1,
        core::ops::Bound::Unbounded => 0,
    };

    let end = match src.end_bound() {
        core::ops::Bound::Included(&i) => i + 1,
        core::ops::Bound::Excluded(&i) => i,
        core::ops::Bound::Unbounded => len,
    };
    (start, end)
}

#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn capacity_exceeded(capacity: usize, requested: usize) -> ! {
    panic!(
        "{}",
        Error::CapacityExceeded {
            capacity,
            requested
        }
    )
}

#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn raise(err: Error) -> ! {
    panic!("{err}")
}

/// Guard for `pop_back` on an empty container: panics in debug builds,
/// does nothing otherwise.
#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn empty_violation(operation: &'static str) {
    if cfg!(debug_assertions) {
        raise(Error::EmptyContainerViolation { operation })
    }
}

/// Implements the slice-backed traits shared by every container.
///
/// The first argument lists the generic parameters after `T`; the
/// container must provide `as_slice` and `as_mut_slice`.
macro_rules! impl_slice_traits {
    ([$($gen:tt)*] $name:ty) => {
        impl<T, $($gen)*> core::ops::Deref for $name {
            type Target = [T];
            #[inline]
            fn deref(&self) -> &Self::Target {
                self.as_slice()
            }
        }

        impl<T, $($gen)*> core::ops::DerefMut for $name {
            #[inline]
            fn deref_mut(&mut self) -> &mut Self::Target {
                self.as_mut_slice()
            }
        }

        impl<T: core::fmt::Debug, $($gen)*> core::fmt::Debug for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Debug::fmt(self.as_slice(), f)
            }
        }

        impl<T, $($gen)*> core::convert::AsRef<[T]> for $name {
            #[inline]
            fn as_ref(&self) -> &[T] {
                self.as_slice()
            }
        }

        impl<T, $($gen)*> core::convert::AsMut<[T]> for $name {
            #[inline]
            fn as_mut(&mut self) -> &mut [T] {
                self.as_mut_slice()
            }
        }

        impl<T, $($gen)*> alloc::borrow::Borrow<[T]> for $name {
            #[inline]
            fn borrow(&self) -> &[T] {
                self.as_slice()
            }
        }

        impl<T, $($gen)*> alloc::borrow::BorrowMut<[T]> for $name {
            #[inline]
            fn borrow_mut(&mut self) -> &mut [T] {
                self.as_mut_slice()
            }
        }

        impl<T: core::hash::Hash, $($gen)*> core::hash::Hash for $name {
            #[inline]
            fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
                core::hash::Hash::hash(self.as_slice(), state);
            }
        }

        impl<T, Idx: core::slice::SliceIndex<[T]>, $($gen)*> core::ops::Index<Idx> for $name {
            type Output = <Idx as core::slice::SliceIndex<[T]>>::Output;
            #[inline]
            fn index(&self, index: Idx) -> &Self::Output {
                core::ops::Index::index(self.as_slice(), index)
            }
        }

        impl<T, Idx: core::slice::SliceIndex<[T]>, $($gen)*> core::ops::IndexMut<Idx> for $name {
            #[inline]
            fn index_mut(&mut self, index: Idx) -> &mut Self::Output {
                core::ops::IndexMut::index_mut(self.as_mut_slice(), index)
            }
        }

        impl<'a, T, $($gen)*> IntoIterator for &'a $name {
            type Item = &'a T;
            type IntoIter = core::slice::Iter<'a, T>;
            #[inline]
            fn into_iter(self) -> Self::IntoIter {
                self.as_slice().iter()
            }
        }

        impl<'a, T, $($gen)*> IntoIterator for &'a mut $name {
            type Item = &'a mut T;
            type IntoIter = core::slice::IterMut<'a, T>;
            #[inline]
            fn into_iter(self) -> Self::IntoIter {
                self.as_mut_slice().iter_mut()
            }
        }

        impl<T: core::cmp::Ord, $($gen)*> core::cmp::Ord for $name {
            #[inline]
            fn cmp(&self, other: &Self) -> core::cmp::Ordering {
                core::cmp::Ord::cmp(self.as_slice(), other.as_slice())
            }
        }

        impl<T: core::cmp::PartialOrd, $($gen)*> core::cmp::PartialOrd for $name {
            #[inline]
            fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
                core::cmp::PartialOrd::partial_cmp(self.as_slice(), other.as_slice())
            }
        }

        impl<T: Eq, $($gen)*> Eq for $name {}

        impl<T, U, $($gen)*> core::cmp::PartialEq<[U]> for $name
        where
            T: core::cmp::PartialEq<U>,
        {
            #[inline]
            fn eq(&self, other: &[U]) -> bool {
                core::cmp::PartialEq::eq(self.as_slice(), other)
            }
        }

        impl<T, U, $($gen)*> core::cmp::PartialEq<&[U]> for $name
        where
            T: core::cmp::PartialEq<U>,
        {
            #[inline]
            fn eq(&self, other: &&[U]) -> bool {
                core::cmp::PartialEq::eq(self.as_slice(), *other)
            }
        }

        impl<T, U, $($gen)*, const P: usize> core::cmp::PartialEq<[U; P]> for $name
        where
            T: core::cmp::PartialEq<U>,
        {
            #[inline]
            fn eq(&self, other: &[U; P]) -> bool {
                core::cmp::PartialEq::eq(self.as_slice(), other.as_slice())
            }
        }

        impl<T, U, $($gen)*, const P: usize> core::cmp::PartialEq<&[U; P]> for $name
        where
            T: core::cmp::PartialEq<U>,
        {
            #[inline]
            fn eq(&self, other: &&[U; P]) -> bool {
                core::cmp::PartialEq::eq(self.as_slice(), other.as_slice())
            }
        }

        impl<T, U, $($gen)*> core::cmp::PartialEq<alloc::vec::Vec<U>> for $name
        where
            T: core::cmp::PartialEq<U>,
        {
            #[inline]
            fn eq(&self, other: &alloc::vec::Vec<U>) -> bool {
                core::cmp::PartialEq::eq(self.as_slice(), other.as_slice())
            }
        }
    };
}

pub(crate) use impl_slice_traits;
