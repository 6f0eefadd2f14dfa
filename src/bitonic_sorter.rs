// Copyright (c) Meta Platforms, Inc. and affiliates.
//
// This source code is dual-licensed under either the MIT license found in the
// LICENSE-MIT file in the root directory of this source tree or the Apache
// License, Version 2.0 found in the LICENSE-APACHE file in the root directory
// of this source tree. You may select, at your option, one of the above-listed licenses.

//! The recursive bitonic sorting network.
//!
//! The recursion works on index ranges `lo..lo + n` of a single buffer.
//! Merging pairs each element with the one a power of two further along
//! (the largest power of two below `n`), which makes the network correct for every length,
//! as in Hans Werner Lang's [construction](https://hwlang.de/algorithmen/sortieren/bitonic/oddn.htm).
//! On power-of-two lengths it is the classical network.

use crate::compare::CompareExchange;
use crate::network::partner_distance;
use crate::Orientation;

/// Sorts slices with a bitonic sorting network whose comparisons are performed by `C`.
#[derive(Clone, Debug, Default)]
pub struct BitonicSorter<C> {
    exchange: C,
}

impl<C> BitonicSorter<C> {
    /// Returns a sorter that uses `exchange` for every comparator of the network.
    pub fn new(exchange: C) -> Self {
        Self { exchange }
    }

    /// Returns the compare-exchange this sorter was built with.
    pub fn into_inner(self) -> C {
        self.exchange
    }

    /// Sorts `items` in place into `orientation` order.
    ///
    /// The lower half is sorted ascending and the upper half descending, leaving a bitonic range,
    /// which is then merged into `orientation` order.
    /// Stops at, and returns, the first error raised by the compare-exchange.
    pub fn sort<T>(&mut self, items: &mut [T], orientation: Orientation) -> Result<(), C::Error>
    where
        C: CompareExchange<T>,
    {
        log::debug!(
            "BitonicSorter::sort(len = {}, orientation = {:?})",
            items.len(),
            orientation
        );

        self.sort_range(items, 0, items.len(), orientation)
    }

    fn sort_range<T>(
        &mut self,
        items: &mut [T],
        lo: usize,
        n: usize,
        orientation: Orientation,
    ) -> Result<(), C::Error>
    where
        C: CompareExchange<T>,
    {
        if n > 1 {
            let mid = n / 2;
            self.sort_range(items, lo, mid, Orientation::Ascending)?;
            self.sort_range(items, lo + mid, n - mid, Orientation::Descending)?;
            self.merge_bitonic(items, lo, n, orientation)?;
        }
        Ok(())
    }

    /// Merges the bitonic range `lo..lo + n` into `orientation` order.
    /// The range is assumed, not checked, to be bitonic.
    pub(crate) fn merge_bitonic<T>(
        &mut self,
        items: &mut [T],
        lo: usize,
        n: usize,
        orientation: Orientation,
    ) -> Result<(), C::Error>
    where
        C: CompareExchange<T>,
    {
        if n > 1 {
            let distance = self.compare_and_swap(items, lo, n, orientation)?;

            // The block of `distance` elements goes last when ascending and first when descending.
            let first = match orientation {
                Orientation::Ascending => n - distance,
                Orientation::Descending => distance,
            };
            self.merge_bitonic(items, lo, first, orientation)?;
            self.merge_bitonic(items, lo + first, n - first, orientation)?;
        }
        Ok(())
    }

    /// Puts every pair `(i, i + distance)` of the range `lo..lo + n` into `orientation` order and
    /// returns `distance`. For power-of-two `n`, `distance == n / 2`.
    pub(crate) fn compare_and_swap<T>(
        &mut self,
        items: &mut [T],
        lo: usize,
        n: usize,
        orientation: Orientation,
    ) -> Result<usize, C::Error>
    where
        C: CompareExchange<T>,
    {
        let distance = partner_distance(n);
        for i in lo..(lo + n - distance) {
            self.exchange
                .compare_exchange(items, i, i + distance, orientation)?;
        }
        Ok(distance)
    }
}
