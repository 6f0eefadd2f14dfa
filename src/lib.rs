// Copyright (c) Meta Platforms, Inc. and affiliates.
//
// This source code is dual-licensed under either the MIT license found in the
// LICENSE-MIT file in the root directory of this source tree or the Apache
// License, Version 2.0 found in the LICENSE-APACHE file in the root directory
// of this source tree. You may select, at your option, one of the above-listed licenses.

//! An implementation of bitonic sort.
//!
//! Bitonic sort is a sorting network: the sequence of comparisons it performs
//! depends only on the length of the input, never on its values.
//! The sorter splits a range in two, sorts the lower half ascending and the upper half descending,
//! and then merges the resulting bitonic range with a recursive compare-and-swap step.
//!
//! All sorting happens in place on a single buffer. Lengths need not be powers of two.
//!
//! ```
//! use bitonic::Orientation;
//!
//! let mut numbers = vec![10, 30, 11, 20, 4, 330, 21, 110];
//! bitonic::sort(&mut numbers, Orientation::Ascending);
//! assert_eq!(numbers, vec![4, 10, 11, 20, 21, 30, 110, 330]);
//! ```

#![warn(clippy::cargo, clippy::doc_markdown, missing_docs, rustdoc::all)]

use std::cmp::Ordering;
use std::convert::Infallible;
use std::str::FromStr;

use thiserror::Error;

pub mod bitonic_sorter;
pub mod compare;
pub mod network;
pub mod oblivious;
pub mod utils;

#[cfg(test)]
mod test_utils;

pub use bitonic_sorter::BitonicSorter;
pub use compare::{ByOrdering, ByPartialOrdering, CompareExchange, Recording};
pub use network::{comparator_network, Comparator};
pub use oblivious::{sort_by_keys_oblivious, sort_oblivious};

/// The monotonic direction a sort should produce.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Non-decreasing order.
    #[default]
    Ascending,
    /// Non-increasing order.
    Descending,
}

impl Orientation {
    /// Returns the opposite orientation.
    pub fn reversed(self) -> Self {
        match self {
            Orientation::Ascending => Orientation::Descending,
            Orientation::Descending => Orientation::Ascending,
        }
    }

    /// Returns true if a pair whose lower element compares to its higher element as `ordering`
    /// must be swapped to respect `self`. Equal elements are never out of order.
    pub fn is_violated_by(self, ordering: Ordering) -> bool {
        match self {
            Orientation::Ascending => ordering == Ordering::Greater,
            Orientation::Descending => ordering == Ordering::Less,
        }
    }
}

impl FromStr for Orientation {
    type Err = BitonicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Orientation::Ascending),
            "desc" | "descending" => Ok(Orientation::Descending),
            _ => Err(BitonicError::InvalidOrientation(s.to_string())),
        }
    }
}

/// Errors raised by the fallible sorting entry points.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BitonicError {
    /// Two elements had no defined order relative to each other (e.g. a floating point NaN).
    #[error("elements at positions {left} and {right} are not comparable")]
    IncomparableElements {
        /// Position of the lower element at the time of the comparison.
        left: usize,
        /// Position of the higher element at the time of the comparison.
        right: usize,
    },

    /// A keyed sort was given a payload slice and a key slice of different lengths.
    #[error("cannot sort {items} items by {keys} keys")]
    LengthMismatch {
        /// Number of payload items.
        items: usize,
        /// Number of keys.
        keys: usize,
    },

    /// A string did not name an orientation.
    #[error("unrecognized orientation `{0}` (expected `ascending` or `descending`)")]
    InvalidOrientation(String),
}

pub(crate) fn unreachable_error<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}

/// Sorts `items` in place into `orientation` order.
pub fn sort<T: Ord>(items: &mut [T], orientation: Orientation) {
    sort_by(items, orientation, T::cmp)
}

/// Sorts `items` in place into `orientation` order with respect to `compare`,
/// which must describe a total order.
pub fn sort_by<T, F>(items: &mut [T], orientation: Orientation, compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut sorter = BitonicSorter::new(ByOrdering::new(compare));
    unreachable_error(sorter.sort(items, orientation))
}

/// Sorts `items` in place into `orientation` order of the keys extracted by `key`.
pub fn sort_by_key<T, K, F>(items: &mut [T], orientation: Orientation, mut key: F)
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    sort_by(items, orientation, |a, b| key(a).cmp(&key(b)))
}

/// Returns a sorted copy of `items`, leaving `items` untouched.
pub fn sorted<T: Ord + Clone>(items: &[T], orientation: Orientation) -> Vec<T> {
    let mut result = items.to_vec();
    sort(&mut result, orientation);
    result
}

/// Sorts partially ordered `items` in place into `orientation` order.
///
/// Fails at the first pair of elements that cannot be compared. In that case `items`
/// still holds a permutation of its original contents, in no particular order.
pub fn try_sort<T: PartialOrd>(items: &mut [T], orientation: Orientation) -> Result<(), BitonicError> {
    try_sort_by(items, orientation, T::partial_cmp)
}

/// Like [`try_sort`], with `compare` supplying the partial order.
pub fn try_sort_by<T, F>(
    items: &mut [T],
    orientation: Orientation,
    compare: F,
) -> Result<(), BitonicError>
where
    F: FnMut(&T, &T) -> Option<Ordering>,
{
    let mut sorter = BitonicSorter::new(ByPartialOrdering::new(compare));
    sorter.sort(items, orientation)
}
