//! Errors raised when building an `IntervalMap` from external breakpoints.

use thiserror::Error;

/// Result type for fallible `IntervalMap` constructors
pub type Result<T> = std::result::Result<T, Error>;

/// Reasons a breakpoint sequence is not a canonical step function
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// No breakpoints at all
    #[error("breakpoint sequence is empty")]
    Empty,

    /// The first breakpoint is not at the lowest key
    #[error("first breakpoint is not at the lowest key")]
    MissingLowest,

    /// A key is not strictly greater than the one before it
    #[error("breakpoint {index} is not strictly after the previous one")]
    Unordered { index: usize },

    /// A breakpoint repeats the value of the one before it
    #[error("breakpoint {index} repeats the previous value")]
    Redundant { index: usize },
}
