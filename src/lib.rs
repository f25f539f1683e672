//! ## Intro
//!
//! Sequence containers that keep small collections in place and move to an
//! allocator-backed block only when they outgrow it.
//!
//! Many workloads hold a handful of elements almost all the time and only
//! occasionally need more. Keeping those elements inside the container
//! avoids the allocator entirely for the common case, and keeps them next
//! to whatever owns the container.
//!
//! ## Containers
//!
//! ### `FixedVec`
//!
//! - **Fixed capacity** `N`, stored in place
//! - **Vec-like** interface
//! - **Panics** with [`Error::CapacityExceeded`] if the capacity is exceeded
//! - Use when: you know the maximum size in advance
//!
//! ```
//! # use hybridvec::FixedVec;
//! let mut vec: FixedVec<i32, 10> = FixedVec::new();
//! assert_eq!(vec.capacity(), 10);
//!
//! vec.push(1);
//! vec.push(2);
//! assert_eq!(vec.len(), 2);
//! assert!(vec.try_reserve(9).is_err());
//! ```
//!
//! ### `GrowVec`
//!
//! - **Growable**, backed by a pluggable [`Allocator`]
//! - Optional **inline prefix** of `I` slots used before the first allocation
//! - Growth keeps the **strong guarantee**: a panicking clone leaves it untouched
//!
//! ```
//! # use hybridvec::{GrowVec, growvec};
//! let mut vec: GrowVec<i32, 2> = growvec![1, 2];
//! assert!(vec.is_inline());
//!
//! vec.push(3);
//! assert!(!vec.is_inline());
//! ```
//!
//! ### `HybridVec`
//!
//! - **Static** while it holds at most `N` elements, stored in a [`FixedVec`]
//! - **Dynamic** once a mutation needs more, stored in a [`GrowVec`]
//! - Moves back only on an explicit [`shrink_to_fit`](HybridVec::shrink_to_fit)
//!
//! ```
//! # use hybridvec::{HybridVec, hybridvec};
//! let mut vec: HybridVec<i32, 5> = hybridvec![1, 2, 3];
//! assert!(vec.is_static());
//!
//! vec.extend(&[4, 5, 6, 7, 8]);
//! assert!(vec.is_dynamic());
//! ```
//!
//! ### Alias
//!
//! - [`MiniVec<T>`] = `HybridVec<T, 8>` for tiny collections
//! - [`AutoVec<T>`] = `HybridVec<T, 16, 64>` for general use
//!
//! ## Cursors
//!
//! [`Cursor`] is a random-access position over a container's elements,
//! obtained from `begin`, `end` or `cursor(i)`. It borrows the container, so
//! nothing can invalidate it while it is alive.
//!
//! ## `no_std` support
//!
//! This crate requires only `core` and `alloc`.
//!
//! ## Optional features
//!
//! ### `serde`
//!
//! [`FixedVec`], [`GrowVec`] and [`HybridVec`] implement `Serialize` and
//! `Deserialize` as plain sequences.
//!
//! ### `std`
//!
//! The `u8` containers implement `std::io::Write`.
//!
//! ## Logging
//!
//! Block acquisition and release are reported through [`log`] at `trace`
//! level, promotion and demotion at `debug`, and skipped shrinks at `warn`.
#![no_std]

extern crate alloc;

mod raw;
mod utils;

pub mod allocator;
pub mod arena;
pub mod cursor;
pub mod error;

#[cfg(feature = "serde")]
mod serde;

#[cfg(feature = "std")]
mod std_io;

#[doc(inline)]
pub use allocator::{AllocError, Allocator, Global};
#[doc(inline)]
pub use arena::Arena;
#[doc(inline)]
pub use cursor::Cursor;
#[doc(inline)]
pub use error::{Error, Result};

pub mod fixed_vec;
#[doc(inline)]
pub use fixed_vec::FixedVec;

pub mod grow_vec;
#[doc(inline)]
pub use grow_vec::GrowVec;

pub mod hybrid_vec;
#[doc(inline)]
pub use hybrid_vec::HybridVec;

/// A small `HybridVec` with a fixed capacity of 8 elements.
///
/// # Examples
///
/// ```
/// # use hybridvec::MiniVec;
/// let mut vec: MiniVec<i32> = MiniVec::new();
///
/// vec.extend([1, 2, 3]);
/// assert!(vec.is_static());
///
/// vec.extend(&[4, 5, 6, 7, 8, 9]);
/// assert!(vec.is_dynamic());
/// assert_eq!(vec.len(), 9);
/// ```
pub type MiniVec<T> = HybridVec<T, 8>;

/// A `HybridVec` with a fixed capacity of 16 elements whose heap blocks
/// start at 64 slots.
///
/// # Examples
///
/// ```
/// # use hybridvec::AutoVec;
/// let mut vec: AutoVec<String> = AutoVec::new();
///
/// for i in 0..16 {
///     vec.push(format!("item_{i}"));
/// }
/// assert!(vec.is_static());
///
/// vec.push("beyond".to_string());
/// assert!(vec.is_dynamic());
/// assert_eq!(vec.capacity(), 64);
/// ```
pub type AutoVec<T> = HybridVec<T, 16, 64>;
