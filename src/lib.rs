//! # Probesort
//!
//! `probesort` is a compact collection of the classical array algorithms: eight ways to
//! search a slice for a value, three ways to sort one in place, and two two-pointer scans
//! for finding a character near a pair of start positions.
//!
//! ## Algorithms
//!
//! - **Search** ([`search`]): binary (two midpoint roundings), interpolation, Fibonacci,
//!   jump, exponential, and forward/reverse linear search. All but the linear searches
//!   expect ascending input.
//! - **Sort** ([`sort`]): insertion sort, quicksort with Lomuto partitioning, and stable
//!   merge sort. Each sorts in place and hands the slice back for chaining.
//! - **Scan** ([`scan`]): outward and inward two-pointer scans over strings or slices.
//!
//! ## Usage
//!
//! ```rust
//! use probesort::prelude::*;
//!
//! let mut data = vec![9, 1, 7, 3, 5];
//! quicksort(&mut data);
//! assert_eq!(data, vec![1, 3, 5, 7, 9]);
//!
//! assert_eq!(binary_search(&data, 7), Some(3));
//! assert_eq!(fibonacci_search(&data, 4), None);
//!
//! assert_eq!(two_pointer_out("abcXdef", 'X'), Some(3));
//! ```
//!
//! "Not found" is `None`. Callers that need the numeric `-1` convention can use
//! [`core::sentinel`](crate::core::sentinel):
//!
//! ```rust
//! use probesort::core::sentinel;
//! use probesort::search::linear_search;
//!
//! assert_eq!(sentinel(linear_search::<i32>(&[], 5)), -1);
//! ```
//!
//! ## Element Types
//!
//! Searches and sorts are generic over [`Numeric`], implemented for every primitive integer
//! and float type. Implement it for your own numeric newtypes to search and sort them too.
//!
//! ## Bounds
//!
//! Variants that take explicit bounds (`*_within`, `*_from`) validate them and return
//! [`ProbeError`] instead of clamping. Default variants never fail and treat an empty
//! slice as "not found".

pub mod core;
pub mod error;
pub mod scan;
pub mod search;
pub mod sort;

pub use crate::core::Numeric;
pub use crate::error::ProbeError;

pub mod prelude {
    pub use crate::core::{Numeric, sentinel};
    pub use crate::error::ProbeError;
    pub use crate::scan::{
        two_pointer_in, two_pointer_in_from, two_pointer_out, two_pointer_out_from,
    };
    pub use crate::search::{
        Search, binary_search, binary_search_alt, binary_search_alt_within, binary_search_within,
        exponential_search, fibonacci_search, interpolation_search, interpolation_search_within,
        jump_search, jump_search_with_step, linear_search, linear_search_rev,
    };
    pub use crate::sort::{Sort, insertion_sort, merge_sort, quicksort, quicksort_within};
}
