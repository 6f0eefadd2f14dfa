// Copyright (c) Meta Platforms, Inc. and affiliates.
//
// This source code is dual-licensed under either the MIT license found in the
// LICENSE-MIT file in the root directory of this source tree or the Apache
// License, Version 2.0 found in the LICENSE-APACHE file in the root directory
// of this source tree. You may select, at your option, one of the above-listed licenses.

//! Compare-exchange primitives that a [`BitonicSorter`](crate::BitonicSorter) is built on.

use crate::network::Comparator;
use crate::{BitonicError, Orientation};
use std::cmp::Ordering;
use std::convert::Infallible;

/// A single step of a sorting network: puts `items[i]` and `items[j]` into `orientation` order.
pub trait CompareExchange<T> {
    /// The error type of a failed comparison.
    type Error;

    /// Compares `items[i]` with `items[j]` and swaps them if they violate `orientation`.
    /// Callers guarantee `i < j < items.len()`.
    fn compare_exchange(
        &mut self,
        items: &mut [T],
        i: usize,
        j: usize,
        orientation: Orientation,
    ) -> Result<(), Self::Error>;
}

/// Compare-exchange driven by a total order.
#[derive(Clone, Copy, Debug)]
pub struct ByOrdering<F> {
    compare: F,
}

impl<F> ByOrdering<F> {
    /// Wraps `compare`, which must describe a total order.
    pub fn new(compare: F) -> Self {
        Self { compare }
    }
}

impl<T, F: FnMut(&T, &T) -> Ordering> CompareExchange<T> for ByOrdering<F> {
    type Error = Infallible;

    fn compare_exchange(
        &mut self,
        items: &mut [T],
        i: usize,
        j: usize,
        orientation: Orientation,
    ) -> Result<(), Infallible> {
        if orientation.is_violated_by((self.compare)(&items[i], &items[j])) {
            items.swap(i, j);
        }
        Ok(())
    }
}

/// Compare-exchange driven by a partial order. Fails on the first incomparable pair.
#[derive(Clone, Copy, Debug)]
pub struct ByPartialOrdering<F> {
    compare: F,
}

impl<F> ByPartialOrdering<F> {
    /// Wraps `compare`, which returns `None` for incomparable pairs.
    pub fn new(compare: F) -> Self {
        Self { compare }
    }
}

impl<T, F: FnMut(&T, &T) -> Option<Ordering>> CompareExchange<T> for ByPartialOrdering<F> {
    type Error = BitonicError;

    fn compare_exchange(
        &mut self,
        items: &mut [T],
        i: usize,
        j: usize,
        orientation: Orientation,
    ) -> Result<(), BitonicError> {
        let ordering = (self.compare)(&items[i], &items[j])
            .ok_or(BitonicError::IncomparableElements { left: i, right: j })?;
        if orientation.is_violated_by(ordering) {
            items.swap(i, j);
        }
        Ok(())
    }
}

/// Wraps another compare-exchange and records every comparator it is asked to apply.
#[derive(Debug, Default)]
pub struct Recording<C> {
    inner: C,
    /// The comparators applied so far, in order.
    pub comparators: Vec<Comparator>,
}

impl<C> Recording<C> {
    /// Returns a recorder around `inner` with an empty log.
    pub fn new(inner: C) -> Self {
        Self {
            inner,
            comparators: Vec::new(),
        }
    }

    /// Returns the number of comparisons recorded.
    pub fn get_comparison_count(&self) -> usize {
        self.comparators.len()
    }

    /// Returns the wrapped compare-exchange.
    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<T, C: CompareExchange<T>> CompareExchange<T> for Recording<C> {
    type Error = C::Error;

    fn compare_exchange(
        &mut self,
        items: &mut [T],
        i: usize,
        j: usize,
        orientation: Orientation,
    ) -> Result<(), C::Error> {
        log::trace!("Compare-exchange -- {} {} {:?}", i, j, orientation);

        self.comparators.push(Comparator::new(i, j, orientation));
        self.inner.compare_exchange(items, i, j, orientation)
    }
}

/// A compare-exchange that never touches the data. Tracing it yields the network alone.
#[derive(Clone, Copy, Debug, Default)]
pub struct Skip;

impl<T> CompareExchange<T> for Skip {
    type Error = Infallible;

    fn compare_exchange(
        &mut self,
        _: &mut [T],
        _: usize,
        _: usize,
        _: Orientation,
    ) -> Result<(), Infallible> {
        Ok(())
    }
}
