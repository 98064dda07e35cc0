//! Core traits and helpers shared by the algorithm modules.
//!
//! This module defines:
//! - [`Numeric`]: The element trait every search and sort is generic over.
//! - [`swap`]: The element exchange used by quicksort's partition step.
//! - [`sentinel`]: Conversion from `Option<usize>` to the `-1` convention.

use crate::error::ProbeError;
use tracing::debug;

/// Numeric value returned by [`sentinel`] when nothing was found.
pub const NOT_FOUND: isize = -1;

/// An element that can live in a searched or sorted sequence.
///
/// Ordering comes from `PartialOrd`. [`Numeric::to_f64`] is only used by
/// interpolation search to estimate a probe position, so precision loss on
/// very large integers degrades the estimate but never the result.
///
/// # Examples
///
/// Implementing for a numeric newtype:
///
/// ```
/// use probesort::core::Numeric;
///
/// #[derive(Clone, Copy, PartialEq, PartialOrd)]
/// struct Meters(f64);
///
/// impl Numeric for Meters {
///     fn to_f64(self) -> f64 {
///         self.0
///     }
/// }
/// ```
pub trait Numeric: Copy + PartialOrd {
    /// Returns the value as an `f64` for position estimates.
    fn to_f64(self) -> f64;
}

macro_rules! impl_numeric {
    ($($t:ty),* $(,)?) => {
        $(
            impl Numeric for $t {
                #[inline(always)]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_numeric!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);

/// Exchanges the elements at `i` and `j` and returns the same slice.
///
/// # Panics
///
/// Panics if `i` or `j` is out of bounds.
///
/// # Examples
///
/// ```
/// use probesort::core::swap;
///
/// let mut data = [1, 2, 3];
/// assert_eq!(swap(&mut data, 0, 2), &[3, 2, 1]);
/// ```
#[inline]
pub fn swap<T>(a: &mut [T], i: usize, j: usize) -> &mut [T] {
    a.swap(i, j);
    a
}

/// Maps a search result to the numeric sentinel convention: the index, or
/// [`NOT_FOUND`] (`-1`).
///
/// ```
/// use probesort::core::sentinel;
///
/// assert_eq!(sentinel(Some(3)), 3);
/// assert_eq!(sentinel(None), -1);
/// ```
pub fn sentinel(found: Option<usize>) -> isize {
    match found {
        // Slices never exceed isize::MAX bytes, so any index fits.
        Some(index) => index as isize,
        None => NOT_FOUND,
    }
}

/// Validates an inclusive `[lo, hi]` range against a sequence of length `len`.
pub(crate) fn check_bounds(len: usize, lo: usize, hi: usize) -> Result<(), ProbeError> {
    let err = if lo > hi {
        ProbeError::Inverted { lo, hi }
    } else if hi >= len {
        ProbeError::OutOfRange { index: hi, len }
    } else {
        return Ok(());
    };

    debug!(lo, hi, len, %err, "rejected explicit bounds");
    Err(err)
}
