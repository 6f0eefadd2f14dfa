// Copyright (c) Meta Platforms, Inc. and affiliates.
//
// This source code is dual-licensed under either the MIT license found in the
// LICENSE-MIT file in the root directory of this source tree or the Apache
// License, Version 2.0 found in the LICENSE-APACHE file in the root directory
// of this source tree. You may select, at your option, one of the above-listed licenses.

//! A simple interactive demonstration of bitonic sort.

use bitonic::{BitonicSorter, ByOrdering, Orientation, Recording};
use rustyline::history::FileHistory;
use rustyline::Editor;
use simplelog::{Config, LevelFilter, SimpleLogger};

fn parse_numbers(
    prompt: &str,
    rl: &mut Editor<(), FileHistory>,
) -> Result<Vec<i64>, Box<dyn std::error::Error>> {
    Ok(loop {
        println!("{}", prompt);
        println!();
        let readline: String = rl.readline("> ")?;
        let numbers_parse: Result<Vec<i64>, _> = readline
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(str::parse::<i64>)
            .collect();
        match numbers_parse {
            Ok(numbers) => break numbers,
            Err(_) => {
                println!("Expected a list of integers. Try again.");
                continue;
            }
        }
    })
}

fn parse_orientation(rl: &mut Editor<(), FileHistory>) -> Result<Orientation, Box<dyn std::error::Error>> {
    Ok(loop {
        println!("Enter an orientation (asc or desc):");
        let readline: String = rl.readline("> ")?;
        match readline.parse::<Orientation>() {
            Ok(orientation) => break orientation,
            Err(e) => {
                println!("{}. Try again.", e);
                continue;
            }
        }
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    SimpleLogger::init(LevelFilter::Debug, Config::default())?;

    let mut rl = Editor::<(), _>::new()?;

    loop {
        let mut numbers = parse_numbers("Which integers would you like to sort?", &mut rl)?;
        let orientation = parse_orientation(&mut rl)?;

        let original = numbers.clone();
        let mut sorter = BitonicSorter::new(Recording::new(ByOrdering::new(i64::cmp)));
        match sorter.sort(&mut numbers, orientation) {
            Ok(()) => {}
            Err(never) => match never {},
        }

        println!("{:?}", original);
        println!("{:?}", numbers);
        println!(
            "Sorted {} integers with {} comparisons.",
            numbers.len(),
            sorter.into_inner().get_comparison_count()
        );
    }
}
