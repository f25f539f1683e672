//! The allocation capability used by [`GrowVec`](crate::GrowVec) and
//! [`HybridVec`](crate::HybridVec).
//!
//! `core::alloc::Allocator` is not stable, so the containers are generic over
//! this smaller trait instead. [`Global`] forwards to the global allocator.

use alloc::alloc::{alloc, dealloc};
use core::{alloc::Layout, ptr::NonNull};

/// The allocator could not satisfy a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, thiserror::Error)]
#[error("memory allocation failed")]
pub struct AllocError;

/// Acquires and releases memory blocks.
///
/// # Safety
///
/// A block returned by [`allocate`](Allocator::allocate) must be valid for
/// reads and writes of `layout.size()` bytes, aligned to `layout.align()`,
/// and must stay valid until it is passed to
/// [`deallocate`](Allocator::deallocate) on the same allocator (or a clone
/// of it).
///
/// The containers never call `allocate` with a zero-sized layout.
pub unsafe trait Allocator {
    /// Acquires a block described by `layout`.
    fn allocate(&self, layout: Layout) -> Result<NonNull<u8>, AllocError>;

    /// Releases a block previously returned by `allocate`.
    ///
    /// # Safety
    ///
    /// `ptr` must come from `allocate` on this allocator with the same
    /// `layout`, and must not be released twice.
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout);
}

/// The global allocator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Global;

unsafe impl Allocator for Global {
    #[inline]
    fn allocate(&self, layout: Layout) -> Result<NonNull<u8>, AllocError> {
        debug_assert!(layout.size() != 0, "zero-sized allocation");
        // SAFETY: non-zero size, checked by the callers.
        NonNull::new(unsafe { alloc(layout) }).ok_or(AllocError)
    }

    #[inline]
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        // SAFETY: see trait docs.
        unsafe { dealloc(ptr.as_ptr(), layout) }
    }
}

unsafe impl<A: Allocator + ?Sized> Allocator for &A {
    #[inline]
    fn allocate(&self, layout: Layout) -> Result<NonNull<u8>, AllocError> {
        (**self).allocate(layout)
    }

    #[inline]
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        unsafe { (**self).deallocate(ptr, layout) }
    }
}
