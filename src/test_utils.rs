// Copyright (c) Meta Platforms, Inc. and affiliates.
//
// This source code is dual-licensed under either the MIT license found in the
// LICENSE-MIT file in the root directory of this source tree or the Apache
// License, Version 2.0 found in the LICENSE-APACHE file in the root directory
// of this source tree. You may select, at your option, one of the above-listed licenses.

//! Common test utilities for the sorting tests.

use crate::utils::is_sorted;
use crate::{sort, sorted, Orientation};
use simplelog::{Config, WriteLogger};
use std::fmt::Debug;
use std::sync::Once;

static INIT: Once = Once::new();

// For use in manual testing and inspection.
pub(crate) fn init_logger() {
    INIT.call_once(|| {
        WriteLogger::init(log::LevelFilter::Info, Config::default(), std::io::stdout()).unwrap()
    })
}

/// Checks that sorting `input` in either orientation yields a monotone permutation of it,
/// that sorting is idempotent, and that `sorted` does not touch its argument.
pub(crate) fn check_sort_properties<T: Ord + Clone + Debug>(input: &[T]) {
    init_logger();

    let mut reference = input.to_vec();
    reference.sort();

    for orientation in [Orientation::Ascending, Orientation::Descending] {
        let snapshot = input.to_vec();
        let result = sorted(input, orientation);
        assert_eq!(input, &snapshot[..]);

        assert!(is_sorted(&result, orientation), "{input:?} {orientation:?}");

        let mut permutation = result.clone();
        permutation.sort();
        assert_eq!(permutation, reference, "{input:?} {orientation:?}");

        let mut again = result.clone();
        sort(&mut again, orientation);
        assert_eq!(again, result);
    }
}

macro_rules! create_property_test {
    ($length: expr) => {
        paste::paste! {
            #[test]
            fn [<sort_properties_random_ $length>]() {
                use rand::{rngs::StdRng, SeedableRng};
                let mut rng = StdRng::seed_from_u64($length);
                for _ in 0..10 {
                    let input: Vec<u32> = $crate::utils::random_vec($length, &mut rng);
                    $crate::test_utils::check_sort_properties(&input);
                }
            }

            #[test]
            fn [<sort_properties_few_distinct_ $length>]() {
                use rand::{rngs::StdRng, Rng, SeedableRng};
                let mut rng = StdRng::seed_from_u64($length);
                for _ in 0..10 {
                    let input: Vec<u8> = (0..$length).map(|_| rng.gen_range(0..3)).collect();
                    $crate::test_utils::check_sort_properties(&input);
                }
            }

            #[test]
            fn [<sort_properties_reversed_ $length>]() {
                let input: Vec<usize> = (0..$length).rev().collect();
                $crate::test_utils::check_sort_properties(&input);
            }
        }
    };
}

macro_rules! create_property_tests {
    ($($length: literal),+ $(,)?) => {
        $(
            $crate::test_utils::create_property_test!($length);
        )+
    };
}

pub(crate) use create_property_test;
pub(crate) use create_property_tests;
