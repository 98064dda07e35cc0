//! Error type for calls that take explicit bounds.
//!
//! "Not found" is not an error: searches return `None` for that. A
//! [`ProbeError`] means the caller asked for a range or parameter that does
//! not fit the sequence.

use thiserror::Error;

/// Rejected bounds or parameters.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeError {
    #[error("inverted bounds: lo {lo} is greater than hi {hi}")]
    Inverted { lo: usize, hi: usize },

    #[error("index {index} is out of range for a sequence of length {len}")]
    OutOfRange { index: usize, len: usize },

    #[error("jump search block size must be at least 1")]
    ZeroBlockSize,
}
