#![cfg(feature = "dev")]
//! Tests for the trace executor and result output.
//!
//! These tests verify the execution engine used by every entry point:
//! - Input is copied, never mutated
//! - Recording is deterministic for identical inputs
//! - Verification surfaces trace/reference disagreement
//! - Per-algorithm entry points match the executor
//! - Result summaries format as documented
//!
//! ## Test Organization
//!
//! 1. **Execution** - Copy semantics, determinism, options
//! 2. **Verification** - Verified runs over every algorithm
//! 3. **Entry Points** - `sort_fn` table and free functions
//! 4. **Output** - Accessors and Display formatting

use sorttrace::internals::algorithms::{Algorithm, InstrumentOptions};
use sorttrace::internals::engine::executor::{self, TraceExecutor};

// ============================================================================
// Helper Functions
// ============================================================================

fn sample() -> Vec<i32> {
    vec![12, -7, 3, 3, 0, 45, -7, 19, 2]
}

// ============================================================================
// Execution Tests
// ============================================================================

/// Test execution leaves the caller's array untouched.
#[test]
fn test_execute_does_not_mutate_input() {
    let data = sample();
    let snapshot = data.clone();

    for algorithm in Algorithm::ALL {
        let result = TraceExecutor::execute(algorithm, &data, &InstrumentOptions::default());
        assert_eq!(data, snapshot, "{} mutated its input", algorithm);
        assert_ne!(result.sorted(), data.as_slice());
    }
}

/// Test repeated execution produces identical traces.
#[test]
fn test_execute_is_deterministic() {
    let data = sample();
    for algorithm in Algorithm::ALL {
        let first = TraceExecutor::execute(algorithm, &data, &InstrumentOptions::default());
        let second = TraceExecutor::execute(algorithm, &data, &InstrumentOptions::default());
        assert_eq!(first, second, "{} should be deterministic", algorithm);
    }
}

/// Test options only affect merge sort.
///
/// Verifies padding changes the merge trace but not the sorted output,
/// and leaves every other algorithm's trace untouched.
#[test]
fn test_execute_options_scope() {
    let data = sample();
    let padded = InstrumentOptions { merge_padding: true };

    for algorithm in Algorithm::ALL {
        let plain = TraceExecutor::execute(algorithm, &data, &InstrumentOptions::default());
        let with_padding = TraceExecutor::execute(algorithm, &data, &padded);

        assert_eq!(plain.sorted(), with_padding.sorted());
        if algorithm == Algorithm::Merge {
            assert!(with_padding.trace().len() > plain.trace().len());
            assert_eq!(plain.stats().updates, with_padding.stats().updates);
        } else {
            assert_eq!(plain.trace(), with_padding.trace(), "{}", algorithm);
        }
    }
}

/// Test an executor run on empty input.
#[test]
fn test_run_empty_input() {
    let empty: [i32; 0] = [];
    for algorithm in Algorithm::ALL {
        let result = TraceExecutor::new(algorithm).run(&empty).unwrap();
        assert!(result.trace().is_empty());
        assert!(result.sorted().is_empty());
    }
}

// ============================================================================
// Verification Tests
// ============================================================================

/// Test verified runs succeed for every algorithm.
#[test]
fn test_run_with_verify() {
    let data = sample();
    for algorithm in Algorithm::ALL {
        let executor = TraceExecutor {
            algorithm,
            options: InstrumentOptions { merge_padding: true },
            verify: true,
        };
        let result = executor.run(&data).unwrap();
        assert_eq!(result.sorted(), &[-7, -7, 0, 2, 3, 3, 12, 19, 45]);
    }
}

/// Test the default executor does not verify.
#[test]
fn test_new_executor_defaults() {
    let executor = TraceExecutor::new(Algorithm::Heap);
    assert_eq!(executor.algorithm, Algorithm::Heap);
    assert_eq!(executor.options, InstrumentOptions::default());
    assert!(!executor.verify);
}

// ============================================================================
// Entry Point Tests
// ============================================================================

/// Test each `sort_fn` entry matches direct execution.
#[test]
fn test_sort_fn_matches_execute() {
    let data = sample();
    for algorithm in Algorithm::ALL {
        let via_table = (algorithm.sort_fn::<i32>())(&data);
        let direct = TraceExecutor::execute(algorithm, &data, &InstrumentOptions::default());
        assert_eq!(via_table, direct, "{}", algorithm);
        assert_eq!(via_table.algorithm(), algorithm);
    }
}

/// Test the free per-algorithm functions.
#[test]
fn test_free_functions() {
    let data = vec![3, 1, 2];
    let results = [
        executor::merge_sort(&data),
        executor::quick_sort(&data),
        executor::heap_sort(&data),
        executor::insertion_sort(&data),
        executor::selection_sort(&data),
        executor::bubble_sort(&data),
        executor::cycle_sort(&data),
    ];
    for result in &results {
        assert_eq!(result.sorted(), &[1, 2, 3]);
        assert!(result.validate(&data));
    }
}

// ============================================================================
// Output Tests
// ============================================================================

/// Test result accessors and splitting.
#[test]
fn test_result_accessors() {
    let data = vec![5, 3, 8, 1];
    let result = Algorithm::Bubble.sort(&data);

    let stats = result.stats();
    assert_eq!(stats.compares, 6);
    assert_eq!(stats.updates, 8);
    assert_eq!(stats.placeholders, 0);
    assert_eq!(stats.total(), result.trace().len());

    assert_eq!(result.replay(&data).unwrap(), vec![1, 3, 5, 8]);
    assert!(result.check(&data).is_ok());

    let (trace, sorted) = result.into_parts();
    assert_eq!(trace.len(), 14);
    assert_eq!(sorted, vec![1, 3, 5, 8]);
}

/// Test the summary format.
#[test]
fn test_result_display() {
    let result = Algorithm::Bubble.sort(&[5, 3, 8, 1]);
    let expected = "Summary:\n\
                    \x20 Algorithm:    Bubble Sort (bubbleSort)\n\
                    \x20 Data points:  4\n\
                    \x20 Events:       14\n\
                    \x20 Compares:     6\n\
                    \x20 Updates:      8\n\
                    \n\
                    Sorted Data:\n\
                    \x20 [1, 3, 5, 8]\n";
    assert_eq!(result.to_string(), expected);
}

/// Test the summary lists sentinels only when present.
#[test]
fn test_result_display_placeholders() {
    let result = Algorithm::Cycle.sort(&[2, 2, 1]);
    let text = result.to_string();

    assert!(text.contains("Placeholders: 1"));
    assert!(text.contains("  [1, 2, 2]"));

    let plain = Algorithm::Cycle.sort(&[3, 1, 2]).to_string();
    assert!(!plain.contains("Placeholders"));
}
