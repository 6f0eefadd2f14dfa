// Copyright (c) Meta Platforms, Inc. and affiliates.
//
// This source code is dual-licensed under either the MIT license found in the
// LICENSE-MIT file in the root directory of this source tree or the Apache
// License, Version 2.0 found in the LICENSE-APACHE file in the root directory
// of this source tree. You may select, at your option, one of the above-listed licenses.

//! Utilities.

use crate::Orientation;
use rand::distributions::{Distribution, Standard};
use rand::seq::SliceRandom;
use rand::Rng;

/// Returns true if every adjacent pair of `items` respects `orientation`.
pub fn is_sorted<T: PartialOrd>(items: &[T], orientation: Orientation) -> bool {
    items.windows(2).all(|pair| match orientation {
        Orientation::Ascending => pair[0] <= pair[1],
        Orientation::Descending => pair[0] >= pair[1],
    })
}

/// Returns true if `items` is non-decreasing and then non-increasing,
/// or non-increasing and then non-decreasing. Either run may be empty.
pub fn is_bitonic<T: Ord>(items: &[T]) -> bool {
    is_monotone_then(items, Orientation::Ascending) || is_monotone_then(items, Orientation::Descending)
}

fn is_monotone_then<T: Ord>(items: &[T], first: Orientation) -> bool {
    let turn = items
        .windows(2)
        .position(|pair| first.is_violated_by(pair[0].cmp(&pair[1])))
        .map_or(items.len(), |position| position + 1);
    is_sorted(&items[turn.saturating_sub(1)..], first.reversed())
}

/// Returns a random permutation of 0 through n.
pub fn random_permutation_of_0_through_n_exclusive<R: Rng>(n: u64, rng: &mut R) -> Vec<u64> {
    let mut permuted = Vec::from_iter(0..n);
    permuted.shuffle(rng);
    permuted
}

/// Returns `n` values drawn from the standard distribution of `T`.
pub fn random_vec<T, R: Rng>(n: usize, rng: &mut R) -> Vec<T>
where
    Standard: Distribution<T>,
{
    (0..n).map(|_| rng.gen()).collect()
}
