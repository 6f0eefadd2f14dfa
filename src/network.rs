// Copyright (c) Meta Platforms, Inc. and affiliates.
//
// This source code is dual-licensed under either the MIT license found in the
// LICENSE-MIT file in the root directory of this source tree or the Apache
// License, Version 2.0 found in the LICENSE-APACHE file in the root directory
// of this source tree. You may select, at your option, one of the above-listed licenses.

//! The comparator schedule of bitonic sort, detached from any data.

use crate::compare::{Recording, Skip};
use crate::{unreachable_error, BitonicSorter, Orientation};
use std::cmp::Ordering;

/// One comparator of a sorting network: orders the elements at `low` and `high`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Comparator {
    /// The lower position. Always less than `high`.
    pub low: usize,
    /// The higher position.
    pub high: usize,
    /// The order the pair is put into.
    pub orientation: Orientation,
}

impl Comparator {
    /// Creates a comparator on positions `low < high`.
    pub fn new(low: usize, high: usize, orientation: Orientation) -> Self {
        assert!(low < high);
        Self {
            low,
            high,
            orientation,
        }
    }

    /// Applies this comparator to `items` under the total order `compare`.
    pub fn apply_by<T, F: FnMut(&T, &T) -> Ordering>(&self, items: &mut [T], mut compare: F) {
        if self
            .orientation
            .is_violated_by(compare(&items[self.low], &items[self.high]))
        {
            items.swap(self.low, self.high);
        }
    }

    /// Applies this comparator to `items`.
    pub fn apply<T: Ord>(&self, items: &mut [T]) {
        self.apply_by(items, T::cmp)
    }
}

/// Returns the comparators, in execution order, that sorting `n` elements into `orientation` performs.
///
/// The schedule depends only on `n` and `orientation`. Replaying it with [`Comparator::apply`]
/// on any slice of length `n` sorts that slice.
pub fn comparator_network(n: usize, orientation: Orientation) -> Vec<Comparator> {
    let mut placeholders = vec![(); n];
    let mut sorter = BitonicSorter::new(Recording::new(Skip));
    unreachable_error(sorter.sort(&mut placeholders, orientation));
    sorter.into_inner().comparators
}

/// Returns the largest power of two strictly less than `n`. Requires `n > 1`.
pub(crate) fn partner_distance(n: usize) -> usize {
    debug_assert!(n > 1);
    n.next_power_of_two() >> 1
}
