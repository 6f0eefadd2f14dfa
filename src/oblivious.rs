// Copyright (c) Meta Platforms, Inc. and affiliates.
//
// This source code is dual-licensed under either the MIT license found in the
// LICENSE-MIT file in the root directory of this source tree or the Apache
// License, Version 2.0 found in the LICENSE-APACHE file in the root directory
// of this source tree. You may select, at your option, one of the above-listed licenses.

//! Oblivious bitonic sort.
//!
//! The comparators of a bitonic network are fixed by the input length, so if each
//! compare-exchange runs in constant time, the whole sort does: neither control flow nor the
//! memory access pattern depends on the values being sorted.

use crate::compare::CompareExchange;
use crate::{unreachable_error, BitonicError, BitonicSorter, Orientation};
use std::convert::Infallible;
use subtle::{Choice, ConditionallySelectable, ConstantTimeGreater, ConstantTimeLess};

/// Returns a `Choice` that is set exactly when `low` and `high` (in that order) violate `orientation`.
fn ct_violates<K: ConstantTimeGreater + ConstantTimeLess>(
    low: &K,
    high: &K,
    orientation: Orientation,
) -> Choice {
    // The orientation is part of the public network, not of the data.
    let ascending: Choice = u8::from(orientation == Orientation::Ascending).into();
    let greater = low.ct_gt(high);
    let less = low.ct_lt(high);
    (ascending & greater) | (!ascending & less)
}

fn conditional_swap_pair<T: ConditionallySelectable>(
    items: &mut [T],
    i: usize,
    j: usize,
    do_swap: Choice,
) {
    let (items_i, items_j) = items.split_at_mut(j);
    T::conditional_swap(&mut items_i[i], &mut items_j[0], do_swap);
}

/// Branch-free compare-exchange.
#[derive(Clone, Copy, Debug, Default)]
pub struct Oblivious;

impl<T> CompareExchange<T> for Oblivious
where
    T: ConditionallySelectable + ConstantTimeGreater + ConstantTimeLess,
{
    type Error = Infallible;

    fn compare_exchange(
        &mut self,
        items: &mut [T],
        i: usize,
        j: usize,
        orientation: Orientation,
    ) -> Result<(), Infallible> {
        let do_swap = ct_violates(&items[i], &items[j], orientation);
        conditional_swap_pair(items, i, j, do_swap);
        Ok(())
    }
}

/// Branch-free compare-exchange on keys that moves a payload slice along with them.
#[derive(Debug)]
pub struct ObliviousByKeys<'a, T> {
    items: &'a mut [T],
}

impl<'a, T> ObliviousByKeys<'a, T> {
    /// Returns a compare-exchange that permutes `items` the same way it permutes the keys.
    pub fn new(items: &'a mut [T]) -> Self {
        Self { items }
    }
}

impl<'a, T, K> CompareExchange<K> for ObliviousByKeys<'a, T>
where
    T: ConditionallySelectable,
    K: ConditionallySelectable + ConstantTimeGreater + ConstantTimeLess,
{
    type Error = Infallible;

    fn compare_exchange(
        &mut self,
        keys: &mut [K],
        i: usize,
        j: usize,
        orientation: Orientation,
    ) -> Result<(), Infallible> {
        let do_swap = ct_violates(&keys[i], &keys[j], orientation);
        conditional_swap_pair(self.items, i, j, do_swap);
        conditional_swap_pair(keys, i, j, do_swap);
        Ok(())
    }
}

/// Sorts `items` in place into `orientation` order, obliviously and in constant time.
pub fn sort_oblivious<T>(items: &mut [T], orientation: Orientation)
where
    T: ConditionallySelectable + ConstantTimeGreater + ConstantTimeLess,
{
    let mut sorter = BitonicSorter::new(Oblivious);
    unreachable_error(sorter.sort(items, orientation))
}

/// Sorts `keys` into `orientation` order and applies the same permutation to `items`,
/// obliviously and in constant time.
pub fn sort_by_keys_oblivious<T, K>(
    items: &mut [T],
    keys: &mut [K],
    orientation: Orientation,
) -> Result<(), BitonicError>
where
    T: ConditionallySelectable,
    K: ConditionallySelectable + ConstantTimeGreater + ConstantTimeLess,
{
    if items.len() != keys.len() {
        return Err(BitonicError::LengthMismatch {
            items: items.len(),
            keys: keys.len(),
        });
    }

    log::debug!("sort_by_keys_oblivious(len = {})", keys.len());

    let mut sorter = BitonicSorter::new(ObliviousByKeys::new(items));
    unreachable_error(sorter.sort(keys, orientation));
    Ok(())
}
