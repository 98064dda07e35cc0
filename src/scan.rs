//! Two-pointer scans for locating an item near a pair of start positions.
//!
//! Both scans check the left pointer before the right one on every step, so
//! when both pointers hit a match at once the left index wins.
//!
//! The `&str` functions work on `char` positions: the returned index counts
//! Unicode scalar values, not bytes. The slice functions [`scan_outward`] and
//! [`scan_inward`] accept any `PartialEq` item.

use crate::core::check_bounds;
use crate::error::ProbeError;

/// Expands outward from the two middle characters of `s`.
///
/// ```
/// use probesort::scan::two_pointer_out;
///
/// assert_eq!(two_pointer_out("abcXdef", 'X'), Some(3));
/// assert_eq!(two_pointer_out("abcdef", 'X'), None);
/// ```
pub fn two_pointer_out(s: &str, c: char) -> Option<usize> {
    let chars: Vec<char> = s.chars().collect();
    if chars.is_empty() {
        return None;
    }

    let last = chars.len() - 1;
    scan_outward(&chars, &c, last / 2, last.div_ceil(2))
}

/// Expands outward from explicit `left` and `right` start positions.
///
/// # Errors
///
/// Returns [`ProbeError`] if `left > right` or `right` is past the last
/// character.
pub fn two_pointer_out_from(
    s: &str,
    c: char,
    left: usize,
    right: usize,
) -> Result<Option<usize>, ProbeError> {
    let chars: Vec<char> = s.chars().collect();
    check_bounds(chars.len(), left, right)?;
    Ok(scan_outward(&chars, &c, left, right))
}

/// Contracts inward from both ends of `s`.
///
/// ```
/// use probesort::scan::two_pointer_in;
///
/// assert_eq!(two_pointer_in("abcXdef", 'X'), Some(3));
/// assert_eq!(two_pointer_in("xabcx", 'x'), Some(0));
/// ```
pub fn two_pointer_in(s: &str, c: char) -> Option<usize> {
    let chars: Vec<char> = s.chars().collect();
    if chars.is_empty() {
        return None;
    }

    let last = chars.len() - 1;
    scan_inward(&chars, &c, 0, last)
}

/// Contracts inward from explicit `left` and `right` start positions. Only
/// characters in `[left, right]` are examined.
///
/// # Errors
///
/// Returns [`ProbeError`] if `left > right` or `right` is past the last
/// character.
pub fn two_pointer_in_from(
    s: &str,
    c: char,
    left: usize,
    right: usize,
) -> Result<Option<usize>, ProbeError> {
    let chars: Vec<char> = s.chars().collect();
    check_bounds(chars.len(), left, right)?;
    Ok(scan_inward(&chars, &c, left, right))
}

/// Outward scan over a slice.
///
/// Steps `left` down and `right` up together, checking `left` first. Once one
/// pointer leaves the slice the other keeps going alone until it does too.
/// Indices strictly between `left` and `right` are checked last, in
/// ascending order. Every index is visited, so the result is `None` only if
/// `target` does not occur at all.
///
/// # Panics
///
/// Panics if `left >= items.len()`.
pub fn scan_outward<T: PartialEq>(
    items: &[T],
    target: &T,
    left: usize,
    right: usize,
) -> Option<usize> {
    let mut down = (0..=left).rev();
    let mut up = right..items.len();

    loop {
        match (down.next(), up.next()) {
            (None, None) => break,
            (l, r) => {
                if let Some(i) = l.filter(|&i| items[i] == *target) {
                    return Some(i);
                }
                if let Some(i) = r.filter(|&i| items[i] == *target) {
                    return Some(i);
                }
            }
        }
    }

    (left + 1..right).find(|&i| items[i] == *target)
}

/// Inward scan over a slice.
///
/// Steps `left` up and `right` down together, checking `left` first, until
/// the pointers cross. If they meet on a single index, that index gets a
/// final check.
///
/// # Panics
///
/// Panics if `right >= items.len()` while `left <= right`.
pub fn scan_inward<T: PartialEq>(
    items: &[T],
    target: &T,
    mut left: usize,
    mut right: usize,
) -> Option<usize> {
    while left < right {
        if items[left] == *target {
            return Some(left);
        }
        if items[right] == *target {
            return Some(right);
        }
        left += 1;
        right -= 1;
    }

    (left == right && items[left] == *target).then_some(left)
}
