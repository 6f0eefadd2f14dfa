// Copyright (c) Meta Platforms, Inc. and affiliates.
//
// This source code is dual-licensed under either the MIT license found in the
// LICENSE-MIT file in the root directory of this source tree or the Apache
// License, Version 2.0 found in the LICENSE-APACHE file in the root directory
// of this source tree. You may select, at your option, one of the above-listed licenses.

//! A very simple demonstration of bitonic sort.

extern crate bitonic;

use bitonic::Orientation;

fn main() {
    let numbers = vec![10, 30, 11, 20, 4, 330, 21, 110];

    let result = bitonic::sorted(&numbers, Orientation::Ascending);

    println!("{:?}", numbers);
    println!("{:?}", result);
}
