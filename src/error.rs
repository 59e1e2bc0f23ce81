use thiserror::Error;

/// Validation faults raised by the engine.
///
/// Every fault is raised synchronously before any mutation takes effect:
/// an operation that returns `Err` leaves the model exactly as it was.
/// A failed offset→index lookup is *not* a fault — it is reported as
/// `None` by [`crate::PositionIndex`] and means "nothing to window yet".
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("item size components must not be negative")]
    NegativeSize,
    #[error("padding components must not be negative")]
    NegativePadding,
    #[error("spacing must not be negative")]
    NegativeSpacing,
    #[error("viewport length must be greater than zero")]
    InvalidViewLength,
    #[error("item collection must not be empty")]
    EmptyItems,
    #[error("index {index} is out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("range start {start} with count {count} is out of range (len {len})")]
    InvalidRange {
        start: usize,
        count: usize,
        len: usize,
    },
    #[error("count must be greater than zero")]
    InvalidCount,
    #[error("pivot must be top-left (0, 1)")]
    InvalidPivot,
}

pub type Result<T, E = Error> = core::result::Result<T, E>;
