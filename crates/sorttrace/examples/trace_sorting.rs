//! sorttrace Trace Recording Examples
//!
//! This example demonstrates the main ways to use `sorttrace`:
//! - Sorting by algorithm identifier
//! - Comparing trace sizes across all seven algorithms
//! - Configuring merge padding and verification with the builder
//! - Replaying a trace on a renderer with a fixed delay
//! - Running the randomized self-check

use core::time::Duration;
use sorttrace::prelude::*;

fn main() -> Result<(), SortError> {
    println!("{}", "=".repeat(80));
    println!("sorttrace Trace Recording Examples");
    println!("{}", "=".repeat(80));
    println!();

    example_1_sort_by_name()?;
    example_2_compare_algorithms()?;
    example_3_builder()?;
    example_4_replay()?;
    example_5_self_check()?;

    Ok(())
}

/// Example 1: Sort by Name
/// Selects an algorithm by identifier and prints the result summary
fn example_1_sort_by_name() -> Result<(), SortError> {
    println!("Example 1: Sort by Name");
    println!("{}", "-".repeat(80));

    let data = vec![5, 3, 8, 1];
    let result = sort("bubbleSort", Some(data.as_slice()))?;

    println!("{}", result);
    println!("Replays to reference sort: {}", validate(&data, &result));

    match sort("bogoSort", Some(data.as_slice())) {
        Ok(_) => println!("unexpected success"),
        Err(err) => println!("Expected error: {}", err),
    }

    println!();
    Ok(())
}

/// Example 2: Compare Algorithms
/// Records every algorithm on the same input and tabulates event counts
fn example_2_compare_algorithms() -> Result<(), SortError> {
    println!("Example 2: Compare Algorithms");
    println!("{}", "-".repeat(80));

    let data: Vec<i32> = (0..64).map(|i| (i * 29) % 64 - 32).collect();

    println!(
        "{:<16} {:>8} {:>10} {:>9} {:>13}",
        "Algorithm", "Events", "Compares", "Updates", "Placeholders"
    );
    for (name, sort_fn) in registry::<i32>() {
        let stats = sort_fn(&data).stats();
        println!(
            "{:<16} {:>8} {:>10} {:>9} {:>13}",
            name,
            stats.total(),
            stats.compares,
            stats.updates,
            stats.placeholders
        );
    }

    println!();
    Ok(())
}

/// Example 3: Builder
/// Pads merge drains with sentinels and verifies the trace
fn example_3_builder() -> Result<(), SortError> {
    println!("Example 3: Builder");
    println!("{}", "-".repeat(80));

    let data = vec![9, -2, 7, 7, 0, 4];

    let sorter = Tracer::new()
        .algorithm(Merge) // Which algorithm to instrument
        .merge_padding(true) // Two trace slots per element moved
        .verify() // Check against the reference sort before returning
        .build()?;

    let result = sorter.sort(&data)?;
    println!("{}", result);

    println!();
    Ok(())
}

/// Example 4: Replay
/// Drives a console renderer through a quick sort trace
fn example_4_replay() -> Result<(), SortError> {
    println!("Example 4: Replay");
    println!("{}", "-".repeat(80));

    struct Console {
        bars: Vec<i32>,
    }

    impl Renderer<i32> for Console {
        fn highlight(&mut self, at: Duration, bars: [usize; 2], color: &'static str) {
            println!("{:>6?}  compare {:?} ({})", at, bars, color);
        }

        fn resize(&mut self, at: Duration, bar: usize, value: i32) {
            self.bars[bar] = value;
            println!("{:>6?}  set bar {} = {}  {:?}", at, bar, value, self.bars);
        }

        fn finished(&mut self, at: Duration) {
            println!("done at {:?}", at);
        }
    }

    let data = vec![4, 1, 3, 2];
    let result = Quick.sort(&data);

    let mut console = Console { bars: data.clone() };
    ReplayScheduler::new()
        .delay(Duration::from_millis(10))
        .drive(result.trace(), &mut console);

    println!();
    Ok(())
}

/// Example 5: Self-Check
/// Runs every algorithm over seeded random arrays
fn example_5_self_check() -> Result<(), SortError> {
    println!("Example 5: Self-Check");
    println!("{}", "-".repeat(80));

    let report = DifferentialCheck::new().runs(20).length_range(1, 200).run()?;

    println!(
        "{} cases, {} checks, {} failures",
        report.cases,
        report.checks,
        report.failures.len()
    );

    println!();
    Ok(())
}
