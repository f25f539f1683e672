/// Failures reported by the containers in this crate.
///
/// Fallible entry points (`at`, `try_reserve`, ...) return these as values.
/// The panicking counterparts (`push`, `reserve`, indexing, ...) panic with
/// the [`Display`](core::fmt::Display) of the same variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Checked access at or beyond `len`.
    #[error("index {index} is out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// The requested capacity cannot be represented for this element type.
    #[error("requested capacity {requested} exceeds the maximum of {max}")]
    LengthError { requested: usize, max: usize },

    /// The allocator could not provide a block.
    #[error("allocator failed to provide {size} bytes aligned to {align}")]
    AllocationFailure { size: usize, align: usize },

    /// A fixed-capacity store was asked to hold more than its bound.
    #[error("fixed capacity {capacity} exceeded (requested {requested})")]
    CapacityExceeded { capacity: usize, requested: usize },

    /// `pop_back` on an empty container (checked in debug builds only).
    #[error("`{operation}` called on an empty container")]
    EmptyContainerViolation { operation: &'static str },
}

/// Shorthand for results carrying [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;
