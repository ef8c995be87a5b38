//! Error type shared by every fallible vector and swizzle operation.

use thiserror::Error;

/// Contract and environment failures surfaced by this crate.
///
/// Numeric domain errors (integer division by zero) are not represented here;
/// they panic with Rust's native integer semantics.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VecError {
    #[error("constructor arguments contribute {found} lanes, expected exactly {expected}")]
    LaneCountMismatch { expected: usize, found: usize },
    #[error("cannot reinterpret a {from}-byte vector as a {to}-byte vector")]
    SizeMismatch { from: usize, to: usize },
    #[error("reinterpretation target must differ from the source vector type")]
    SameType,
    #[error("lane index {index} is out of range for a {lanes}-lane vector")]
    IndexOutOfRange { index: usize, lanes: usize },
    #[error("unsupported lane count {0}")]
    UnsupportedLanes(usize),
    #[error("buffer of {len} elements is too short for {lanes} lanes at offset {offset}")]
    BufferTooShort {
        offset: usize,
        lanes: usize,
        len: usize,
    },
    #[error("Unable to query the current rounding mode (status {0})")]
    RoundingModeQuery(i32),
    #[error("Unable to set rounding mode to nearest-even (status {0})")]
    RoundingModeSet(i32),
    #[error("Unable to restore rounding mode (status {0})")]
    RoundingModeRestore(i32),
}
