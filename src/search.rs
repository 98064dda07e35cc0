//! Searching a numeric slice for a target value.
//!
//! Every search returns `Some(index)` of an element equal to the target, or
//! `None` when no such element exists within the searched range. With
//! duplicates, any matching index may be returned.
//!
//! All searches except [`linear_search`] and [`linear_search_rev`] require the
//! slice to be sorted ascending. That precondition is not checked: unsorted
//! input (or input containing NaN) yields an unspecified `Option`, never a
//! panic.
//!
//! Functions suffixed `_within` search an inclusive `[lo, hi]` sub-range and
//! reject bounds that do not fit the slice with a [`ProbeError`].

use crate::core::{Numeric, check_bounds};
use crate::error::ProbeError;
use cuneiform::cuneiform;
use tracing::debug;

/// Number of entries in the Fibonacci ladder. `F(93)` is the largest
/// Fibonacci number that fits in a `u64`.
pub const FIBONACCI_LEN: usize = 94;

/// Binary search over the whole slice.
///
/// Probes the floor midpoint of the candidate range and halves it on each
/// comparison.
///
/// # Examples
///
/// ```
/// use probesort::search::binary_search;
///
/// assert_eq!(binary_search(&[1, 3, 5, 7, 9, 11], 7), Some(3));
/// assert_eq!(binary_search(&[1, 3, 5, 7, 9, 11], 4), None);
/// ```
pub fn binary_search<T: Numeric>(a: &[T], v: T) -> Option<usize> {
    bisect(a, v, 0, a.len())
}

/// Binary search over the inclusive range `[lo, hi]`.
///
/// # Errors
///
/// Returns [`ProbeError`] if `lo > hi` or `hi` is past the end of `a`.
pub fn binary_search_within<T: Numeric>(
    a: &[T],
    v: T,
    lo: usize,
    hi: usize,
) -> Result<Option<usize>, ProbeError> {
    check_bounds(a.len(), lo, hi)?;
    Ok(bisect(a, v, lo, hi + 1))
}

/// Binary search variant that rounds the midpoint up and only tests for
/// equality once the range has collapsed to a single index.
///
/// ```
/// use probesort::search::binary_search_alt;
///
/// assert_eq!(binary_search_alt(&[1, 3, 5, 7, 9, 11], 7), Some(3));
/// ```
pub fn binary_search_alt<T: Numeric>(a: &[T], v: T) -> Option<usize> {
    if a.is_empty() {
        return None;
    }
    bisect_alt(a, v, 0, a.len() - 1)
}

/// [`binary_search_alt`] over the inclusive range `[lo, hi]`.
///
/// # Errors
///
/// Returns [`ProbeError`] if `lo > hi` or `hi` is past the end of `a`.
pub fn binary_search_alt_within<T: Numeric>(
    a: &[T],
    v: T,
    lo: usize,
    hi: usize,
) -> Result<Option<usize>, ProbeError> {
    check_bounds(a.len(), lo, hi)?;
    Ok(bisect_alt(a, v, lo, hi))
}

/// Interpolation search over the whole slice.
///
/// Instead of the midpoint, probes where `v` would sit if the values between
/// the two bounds were evenly spaced. Works best on uniformly distributed
/// data.
///
/// A range whose bounds hold equal values cannot be interpolated; since the
/// loop only runs while `a[lo] <= v <= a[hi]`, such a range means `v` equals
/// the left bound and its index is returned.
///
/// ```
/// use probesort::search::interpolation_search;
///
/// let a = [10, 20, 30, 40, 50];
/// assert_eq!(interpolation_search(&a, 40), Some(3));
/// assert_eq!(interpolation_search(&[4, 4, 4], 4), Some(0));
/// ```
pub fn interpolation_search<T: Numeric>(a: &[T], v: T) -> Option<usize> {
    if a.is_empty() {
        return None;
    }
    interpolate(a, v, 0, a.len() - 1)
}

/// [`interpolation_search`] over the inclusive range `[lo, hi]`.
///
/// # Errors
///
/// Returns [`ProbeError`] if `lo > hi` or `hi` is past the end of `a`.
pub fn interpolation_search_within<T: Numeric>(
    a: &[T],
    v: T,
    lo: usize,
    hi: usize,
) -> Result<Option<usize>, ProbeError> {
    check_bounds(a.len(), lo, hi)?;
    Ok(interpolate(a, v, lo, hi))
}

/// Fibonacci search.
///
/// Finds the smallest Fibonacci number `F(k) >= a.len()` and splits the
/// remaining window at `F(k-2)`, stepping `k` down by one when the probe is
/// below `v` (discarding the prefix) or by two when it is above. Once the
/// window is exhausted a single index just past the discarded prefix is
/// checked. Every path that does not match returns `None`.
///
/// ```
/// use probesort::search::fibonacci_search;
///
/// let a = [10, 22, 35, 40, 45, 50, 80, 82, 85, 90, 100];
/// assert_eq!(fibonacci_search(&a, 85), Some(8));
/// assert_eq!(fibonacci_search(&a, 11), None);
/// ```
pub fn fibonacci_search<T: Numeric>(a: &[T], v: T) -> Option<usize> {
    let n = a.len();
    if n == 0 {
        return None;
    }

    let mut k = 2;
    while fibonacci(k) < n as u64 && k + 1 < FIBONACCI_LEN {
        k += 1;
    }

    // Everything before `start` is known to be smaller than `v`.
    let mut start = 0;

    while fibonacci(k) > 1 {
        let i = (start + fibonacci(k - 2) as usize - 1).min(n - 1);

        if a[i] < v {
            k -= 1;
            start = i + 1;
        } else if a[i] > v {
            k -= 2;
        } else {
            return Some(i);
        }
    }

    (fibonacci(k - 1) != 0 && start < n && a[start] == v).then_some(start)
}

/// Jump search with a block size of `floor(sqrt(a.len()))`.
///
/// ```
/// use probesort::search::jump_search;
///
/// assert_eq!(jump_search(&[1, 2, 3, 4, 5, 6, 7, 8, 9], 6), Some(5));
/// ```
pub fn jump_search<T: Numeric>(a: &[T], v: T) -> Option<usize> {
    if a.is_empty() {
        return None;
    }
    jump_in_blocks(a, v, a.len().isqrt())
}

/// Jump search with an explicit block size.
///
/// Skips ahead `block` elements at a time until the last element of the
/// current block is at least `v`, then scans that block linearly.
///
/// # Errors
///
/// Returns [`ProbeError::ZeroBlockSize`] if `block` is 0.
pub fn jump_search_with_step<T: Numeric>(
    a: &[T],
    v: T,
    block: usize,
) -> Result<Option<usize>, ProbeError> {
    if block == 0 {
        return Err(ProbeError::ZeroBlockSize);
    }
    if a.is_empty() {
        return Ok(None);
    }
    Ok(jump_in_blocks(a, v, block))
}

/// Exponential search.
///
/// Doubles a probe index while the probed value is at most `v`, then binary
/// searches the last window `[i/2, min(i, len))`.
///
/// ```
/// use probesort::search::exponential_search;
///
/// let a = [2, 3, 4, 10, 40, 41, 42, 43];
/// assert_eq!(exponential_search(&a, 10), Some(3));
/// assert_eq!(exponential_search(&a, 5), None);
/// ```
pub fn exponential_search<T: Numeric>(a: &[T], v: T) -> Option<usize> {
    let n = a.len();
    if n == 0 {
        return None;
    }
    if a[0] == v {
        return Some(0);
    }

    let mut bound = 1;
    while bound < n && a[bound] <= v {
        bound *= 2;
    }

    let lo = bound / 2;
    bisect(a, v, lo, bound.min(n))
}

/// Scans from the front and returns the first match. Does not require sorted
/// input.
pub fn linear_search<T: Numeric>(a: &[T], v: T) -> Option<usize> {
    a.iter().position(|&x| x == v)
}

/// Scans from the back and returns the last match. Does not require sorted
/// input.
pub fn linear_search_rev<T: Numeric>(a: &[T], v: T) -> Option<usize> {
    a.iter().rposition(|&x| x == v)
}

// Floor-midpoint bisection over the half-open range [lo, hi).
fn bisect<T: Numeric>(a: &[T], v: T, mut lo: usize, mut hi: usize) -> Option<usize> {
    while lo < hi {
        let m = lo + (hi - lo - 1) / 2;

        if a[m] < v {
            lo = m + 1;
        } else if a[m] > v {
            hi = m;
        } else {
            return Some(m);
        }
    }
    None
}

// Ceil-midpoint bisection over the inclusive range [l, r].
fn bisect_alt<T: Numeric>(a: &[T], v: T, mut l: usize, mut r: usize) -> Option<usize> {
    while l != r {
        let m = l + (r - l).div_ceil(2);

        if a[m] > v {
            r = m - 1;
        } else {
            l = m;
        }
    }

    (a[l] == v).then_some(l)
}

fn interpolate<T: Numeric>(a: &[T], v: T, mut l: usize, mut r: usize) -> Option<usize> {
    while l <= r && v >= a[l] && v <= a[r] {
        if l == r {
            return (a[l] == v).then_some(l);
        }

        if a[l] == a[r] {
            debug!(l, r, "interpolation over a flat range");
            return Some(l);
        }

        let span = a[r].to_f64() - a[l].to_f64();
        let offset = ((r - l) as f64 / span * (v.to_f64() - a[l].to_f64())).floor();
        let pos = if offset.is_finite() && offset >= 0.0 {
            l + (offset as usize).min(r - l)
        } else {
            // Distinct values that collapse to the same f64.
            l + (r - l) / 2
        };

        if a[pos] == v {
            return Some(pos);
        } else if a[pos] < v {
            l = pos + 1;
        } else {
            r = pos.checked_sub(1)?;
        }
    }

    None
}

fn jump_in_blocks<T: Numeric>(a: &[T], v: T, block: usize) -> Option<usize> {
    let n = a.len();
    let mut prev = 0;
    let mut step = block;

    while a[step.min(n) - 1] < v {
        prev = step;
        if prev >= n {
            return None;
        }
        step = step.saturating_add(block);
    }

    (prev..step.min(n))
        .find(|&i| a[i] >= v)
        .filter(|&i| a[i] == v)
}

// Cache-aligned Fibonacci ladder.
#[cuneiform]
struct FibonacciLadder {
    data: [u64; FIBONACCI_LEN],
}

static FIBONACCI: FibonacciLadder = FibonacciLadder {
    data: fibonacci_ladder(),
};

const fn fibonacci_ladder() -> [u64; FIBONACCI_LEN] {
    let mut data = [0u64; FIBONACCI_LEN];
    data[1] = 1;
    let mut k = 2;
    while k < FIBONACCI_LEN {
        data[k] = data[k - 1] + data[k - 2];
        k += 1;
    }
    data
}

/// Returns `F(k)`, with `F(0) = 0` and `F(1) = F(2) = 1`.
#[inline(always)]
fn fibonacci(k: usize) -> u64 {
    FIBONACCI.data[k]
}

/// Every search in the crate, for sweeping them uniformly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Search {
    Binary,
    BinaryAlt,
    Interpolation,
    Fibonacci,
    Jump,
    Exponential,
    Linear,
    LinearRev,
}

impl Search {
    pub const ALL: [Search; 8] = [
        Search::Binary,
        Search::BinaryAlt,
        Search::Interpolation,
        Search::Fibonacci,
        Search::Jump,
        Search::Exponential,
        Search::Linear,
        Search::LinearRev,
    ];

    /// Short human-readable name, used to label test and bench output.
    pub fn name(self) -> &'static str {
        match self {
            Search::Binary => "binary",
            Search::BinaryAlt => "binary (alt)",
            Search::Interpolation => "interpolation",
            Search::Fibonacci => "fibonacci",
            Search::Jump => "jump",
            Search::Exponential => "exponential",
            Search::Linear => "linear",
            Search::LinearRev => "linear (rev)",
        }
    }

    /// Whether the search only gives meaningful answers on ascending input.
    pub fn requires_sorted(self) -> bool {
        !matches!(self, Search::Linear | Search::LinearRev)
    }

    /// Runs the search with its default bounds and parameters.
    pub fn run<T: Numeric>(self, a: &[T], v: T) -> Option<usize> {
        match self {
            Search::Binary => binary_search(a, v),
            Search::BinaryAlt => binary_search_alt(a, v),
            Search::Interpolation => interpolation_search(a, v),
            Search::Fibonacci => fibonacci_search(a, v),
            Search::Jump => jump_search(a, v),
            Search::Exponential => exponential_search(a, v),
            Search::Linear => linear_search(a, v),
            Search::LinearRev => linear_search_rev(a, v),
        }
    }
}
