//! In-place ascending sorts over numeric slices.
//!
//! Each sort mutates the slice it is given and returns the same slice so
//! calls can be chained:
//!
//! ```
//! use probesort::sort::merge_sort;
//! use probesort::search::binary_search;
//!
//! let mut data = [5, 3, 4, 1, 2];
//! assert_eq!(binary_search(merge_sort(&mut data), 4), Some(3));
//! ```
//!
//! Elements are ordered by `PartialOrd`. Slices containing NaN still sort
//! without panicking, but their final order is unspecified.

use crate::core::{Numeric, check_bounds, swap};
use crate::error::ProbeError;
use tracing::trace;

/// Insertion sort.
///
/// Grows a sorted prefix one element at a time, shifting the new element left
/// past every larger predecessor. Stable; O(n) on sorted input and O(n^2) in
/// general.
///
/// ```
/// use probesort::sort::insertion_sort;
///
/// let mut data = [5, 3, 4, 1, 2];
/// assert_eq!(insertion_sort(&mut data), &[1, 2, 3, 4, 5]);
/// ```
pub fn insertion_sort<T: Numeric>(a: &mut [T]) -> &mut [T] {
    trace!(len = a.len(), "insertion sort");

    for i in 1..a.len() {
        let x = a[i];
        let mut j = i;

        while j > 0 && a[j - 1] > x {
            a[j] = a[j - 1];
            j -= 1;
        }

        a[j] = x;
    }

    a
}

/// Quicksort with Lomuto partitioning.
///
/// The pivot is always the last element of the range, so already sorted or
/// reverse sorted input degrades to O(n^2) comparisons. Partitions are driven
/// from an explicit work stack, smaller side first, which bounds the extra
/// memory at O(log n) ranges even in that worst case.
///
/// ```
/// use probesort::sort::quicksort;
///
/// let mut data = [5, 3, 4, 1, 2];
/// assert_eq!(quicksort(&mut data), &[1, 2, 3, 4, 5]);
/// ```
pub fn quicksort<T: Numeric>(a: &mut [T]) -> &mut [T] {
    trace!(len = a.len(), "quicksort");

    if a.len() > 1 {
        let hi = a.len() - 1;
        quicksort_range(a, 0, hi);
    }
    a
}

/// [`quicksort`] restricted to the inclusive range `[lo, hi]`. Elements
/// outside the range are left untouched.
///
/// # Errors
///
/// Returns [`ProbeError`] if `lo > hi` or `hi` is past the end of `a`.
pub fn quicksort_within<T: Numeric>(
    a: &mut [T],
    lo: usize,
    hi: usize,
) -> Result<&mut [T], ProbeError> {
    check_bounds(a.len(), lo, hi)?;
    trace!(len = a.len(), lo, hi, "quicksort");

    quicksort_range(a, lo, hi);
    Ok(a)
}

fn quicksort_range<T: Numeric>(a: &mut [T], lo: usize, hi: usize) {
    let mut pending = vec![(lo, hi)];

    while let Some((lo, hi)) = pending.pop() {
        if lo >= hi {
            continue;
        }

        let part = lomuto_partition(a, lo, hi);
        let (left, right) = (part.left(), part.right());

        // Push the larger side first so the smaller one is handled next.
        if part.left_len() > part.right_len() {
            pending.extend(left);
            pending.extend(right);
        } else {
            pending.extend(right);
            pending.extend(left);
        }
    }
}

/// Outcome of partitioning the inclusive range `[lo, hi]`.
///
/// The slice itself is partitioned in place; this only records where the
/// pivot landed and the range it was taken from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Partition {
    pub lo: usize,
    pub pivot: usize,
    pub hi: usize,
}

impl Partition {
    /// The range left of the pivot, if non-empty.
    pub fn left(&self) -> Option<(usize, usize)> {
        (self.pivot > self.lo).then(|| (self.lo, self.pivot - 1))
    }

    /// The range right of the pivot, if non-empty.
    pub fn right(&self) -> Option<(usize, usize)> {
        (self.pivot < self.hi).then(|| (self.pivot + 1, self.hi))
    }

    /// Number of elements left of the pivot.
    pub fn left_len(&self) -> usize {
        self.pivot - self.lo
    }

    /// Number of elements right of the pivot.
    pub fn right_len(&self) -> usize {
        self.hi - self.pivot
    }
}

/// Lomuto partition of the inclusive range `[lo, hi]` around `a[hi]`.
///
/// Elements strictly smaller than the pivot are swapped into a growing
/// prefix, then the pivot is swapped to the end of that prefix. Afterwards
/// everything in `[lo, pivot)` is smaller than `a[pivot]` and everything in
/// `(pivot, hi]` is not.
///
/// # Panics
///
/// Panics if `hi` is out of bounds or `lo > hi`.
///
/// ```
/// use probesort::sort::lomuto_partition;
///
/// let mut data = [7, 2, 9, 1, 5];
/// let part = lomuto_partition(&mut data, 0, 4);
/// assert_eq!(part.pivot, 2);
/// assert_eq!(data[2], 5);
/// ```
pub fn lomuto_partition<T: Numeric>(a: &mut [T], lo: usize, hi: usize) -> Partition {
    let pivot = a[hi];
    let mut i = lo;

    for j in lo..hi {
        if a[j] < pivot {
            swap(a, i, j);
            i += 1;
        }
    }

    swap(a, i, hi);
    Partition { lo, pivot: i, hi }
}

/// Top-down merge sort.
///
/// Splits at the midpoint, sorts both halves, then merges them taking the
/// left head on ties, so equal elements keep their relative order.
/// Allocates a copy of the left half at each merge.
///
/// ```
/// use probesort::sort::merge_sort;
///
/// let mut data = [5, 3, 4, 1, 2];
/// assert_eq!(merge_sort(&mut data), &[1, 2, 3, 4, 5]);
/// ```
pub fn merge_sort<T: Numeric>(a: &mut [T]) -> &mut [T] {
    trace!(len = a.len(), "merge sort");

    merge_sort_slice(a);
    a
}

fn merge_sort_slice<T: Numeric>(a: &mut [T]) {
    if a.len() <= 1 {
        return;
    }

    let mid = a.len() / 2;
    merge_sort_slice(&mut a[..mid]);
    merge_sort_slice(&mut a[mid..]);
    merge(a, mid);
}

// Merges the sorted runs a[..mid] and a[mid..]. The right run is consumed in
// place: the write cursor never overtakes it while left elements remain.
fn merge<T: Numeric>(a: &mut [T], mid: usize) {
    let left = a[..mid].to_vec();
    let (mut i, mut j, mut k) = (0, mid, 0);

    while i < left.len() {
        if j < a.len() && a[j] < left[i] {
            a[k] = a[j];
            j += 1;
        } else {
            a[k] = left[i];
            i += 1;
        }
        k += 1;
    }
}

/// Every sort in the crate, for sweeping them uniformly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sort {
    Insertion,
    Quick,
    Merge,
}

impl Sort {
    pub const ALL: [Sort; 3] = [Sort::Insertion, Sort::Quick, Sort::Merge];

    /// Short human-readable name, used to label test and bench output.
    pub fn name(self) -> &'static str {
        match self {
            Sort::Insertion => "insertion",
            Sort::Quick => "quicksort",
            Sort::Merge => "merge",
        }
    }

    /// Whether equal elements keep their relative order.
    pub fn is_stable(self) -> bool {
        !matches!(self, Sort::Quick)
    }

    /// Sorts `a` in place with this algorithm and returns it.
    pub fn run<T: Numeric>(self, a: &mut [T]) -> &mut [T] {
        match self {
            Sort::Insertion => insertion_sort(a),
            Sort::Quick => quicksort(a),
            Sort::Merge => merge_sort(a),
        }
    }
}
