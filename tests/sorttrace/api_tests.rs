//! Tests for the high-level API.
//!
//! These tests verify the user-facing entry points:
//! - Name-based sorting and its error kinds
//! - The identifier registry and typed lookup
//! - The fluent builder and its validation
//! - End-to-end correctness scenarios
//!
//! ## Test Organization
//!
//! 1. **Scenarios** - End-to-end behaviour on documented inputs
//! 2. **Errors** - Absent input, unknown names
//! 3. **Registry** - Identifier table and lookup
//! 4. **Builder** - Defaults, configuration, duplicate detection
//! 5. **Independence** - Concurrent sort calls

use sorttrace::prelude::*;

// ============================================================================
// Helper Functions
// ============================================================================

const IDS: [&str; 7] = [
    "mergeSort",
    "quickSort",
    "heapSort",
    "bubbleSort",
    "insertionSort",
    "selectionSort",
    "cycleSort",
];

// ============================================================================
// Scenario Tests
// ============================================================================

/// Test bubble sort on a small array.
///
/// Verifies the sorted output and that the trace replays to it.
#[test]
fn test_bubble_small_array() {
    let data = vec![5, 3, 8, 1];
    let result = sort("bubbleSort", Some(data.as_slice())).unwrap();

    assert_eq!(result.sorted(), &[1, 3, 5, 8]);
    assert_eq!(result.replay(&data).unwrap(), vec![1, 3, 5, 8]);
    assert!(validate(&data, &result));
}

/// Test empty input for every algorithm.
///
/// Verifies an empty trace and an empty result, with no error.
#[test]
fn test_empty_input_every_algorithm() {
    let empty: Vec<i32> = Vec::new();
    for id in IDS {
        let result = sort(id, Some(empty.as_slice())).unwrap();
        assert!(result.trace().is_empty(), "{} trace", id);
        assert!(result.sorted().is_empty(), "{} sorted", id);
    }
}

/// Test quick sort on all-equal input.
///
/// Verifies comparisons are recorded but no updates are.
#[test]
fn test_quick_all_equal() {
    let data = vec![2, 2, 2];
    let result = sort("quickSort", Some(&data[..])).unwrap();

    assert_eq!(result.sorted(), &[2, 2, 2]);
    assert!(result.stats().compares > 0);
    assert_eq!(result.stats().updates, 0);
}

/// Test selection sort on reverse-sorted input.
///
/// Verifies the comparison count is N(N-1)/2.
#[test]
fn test_selection_reverse_sorted() {
    let data = vec![9, 8, 7, 6, 5];
    let result = sort("selectionSort", Some(&data[..])).unwrap();

    assert_eq!(result.sorted(), &[5, 6, 7, 8, 9]);
    assert_eq!(result.trace().compare_count(), 5 * 4 / 2);
}

/// Test every algorithm on the classic shapes via the name-based API.
#[test]
fn test_every_algorithm_every_shape() {
    let shapes: Vec<Vec<i32>> = vec![
        vec![1],
        vec![4, 4, 4, 4],
        vec![1, 2, 3, 4, 5],
        vec![5, 4, 3, 2, 1],
        vec![0, -1, 1, -1, 0, 2, -2],
    ];

    for id in IDS {
        for data in &shapes {
            let result = sort(id, Some(data.as_slice())).unwrap();
            assert!(validate(data, &result), "{} failed on {:?}", id, data);
        }
    }
}

/// Test sorting never mutates the caller's array.
#[test]
fn test_non_mutation() {
    let data = vec![3, -9, 14, 0, 3, 7];
    let snapshot = data.clone();

    for id in IDS {
        let _ = sort(id, Some(data.as_slice())).unwrap();
        assert_eq!(data, snapshot, "{} mutated its input", id);
    }
}

/// Test two identical calls produce identical traces.
#[test]
fn test_trace_determinism() {
    let data = vec![10, 2, 33, 2, -5, 8, 1];
    for id in IDS {
        let first = sort(id, Some(data.as_slice())).unwrap();
        let second = sort(id, Some(data.as_slice())).unwrap();
        assert_eq!(first.trace(), second.trace(), "{}", id);
    }
}

// ============================================================================
// Error Tests
// ============================================================================

/// Test an unknown algorithm name.
///
/// Verifies UnknownAlgorithm is returned and nothing is produced.
#[test]
fn test_unknown_algorithm() {
    let data = vec![3, 2, 1];
    let res = sort("bogoSort", Some(data.as_slice()));

    assert_eq!(res, Err(SortError::UnknownAlgorithm("bogoSort".to_string())));
}

/// Test an absent array.
///
/// Verifies InvalidInput for every algorithm.
#[test]
fn test_absent_array() {
    for id in IDS {
        let res = sort::<i32>(id, None);
        assert!(matches!(res, Err(SortError::InvalidInput(_))), "{}", id);
    }
}

/// Test unknown names win over absent input.
#[test]
fn test_unknown_name_checked_first() {
    let res = sort::<i32>("bogoSort", None);
    assert!(matches!(res, Err(SortError::UnknownAlgorithm(_))));
}

// ============================================================================
// Registry Tests
// ============================================================================

/// Test the registry lists every identifier once.
#[test]
fn test_registry_identifiers() {
    let table = registry::<i32>();
    let names: Vec<_> = table.iter().map(|(name, _)| *name).collect();
    assert_eq!(names, IDS.to_vec());
}

/// Test every registry entry sorts.
#[test]
fn test_registry_entries_sort() {
    let data = vec![7, 1, 7, -3];
    for (name, sort_fn) in registry::<i32>() {
        let result = sort_fn(&data);
        assert_eq!(result.sorted(), &[-3, 1, 7, 7], "{}", name);
        assert_eq!(result.algorithm().id(), name);
    }
}

/// Test lookup by name.
#[test]
fn test_lookup() {
    let heap = lookup::<i64>("heapSort").unwrap();
    assert_eq!(heap(&[2, 1]).algorithm(), Heap);

    assert!(matches!(
        lookup::<i64>("timSort"),
        Err(SortError::UnknownAlgorithm(_))
    ));
}

/// Test identifiers round-trip through parsing and display.
#[test]
fn test_algorithm_names() {
    for algorithm in Algorithm::ALL {
        let parsed: Algorithm = algorithm.id().parse().unwrap();
        assert_eq!(parsed, algorithm);
        assert_eq!(algorithm.to_string(), algorithm.id());
    }
    assert_eq!(Cycle.label(), "Cycle Sort");
}

// ============================================================================
// Builder Tests
// ============================================================================

/// Test builder defaults.
///
/// Verifies merge sort without padding is the default.
#[test]
fn test_builder_defaults() {
    let sorter = Tracer::new().build().unwrap();
    assert_eq!(sorter.algorithm(), Merge);

    let result = sorter.sort(&[2, 1, 3]).unwrap();
    assert_eq!(result.stats().placeholders, 0);
}

/// Test a fully configured builder.
#[test]
fn test_builder_configured() {
    let data = vec![8, 3, 3, 9, -1];
    let sorter = Tracer::new()
        .algorithm(Merge)
        .merge_padding(true)
        .verify()
        .build()
        .unwrap();

    let result = sorter.sort(&data).unwrap();
    assert_eq!(result.sorted(), &[-1, 3, 3, 8, 9]);
    assert!(result.stats().placeholders > 0);
    assert_eq!(result.trace().len(), 2 * result.stats().updates);
}

/// Test the same sorter can be reused across inputs and types.
#[test]
fn test_sorter_reuse() {
    let sorter = Tracer::new().algorithm(Cycle).verify().build().unwrap();

    assert_eq!(sorter.sort(&[3i32, 1, 2]).unwrap().sorted(), &[1, 2, 3]);
    assert_eq!(sorter.sort(&[300u32, 100, 200]).unwrap().sorted(), &[100, 200, 300]);
}

/// Test duplicate parameters are rejected.
#[test]
fn test_builder_duplicate_parameters() {
    let err = Tracer::new().algorithm(Heap).algorithm(Quick).build().unwrap_err();
    assert_eq!(
        err,
        SortError::DuplicateParameter {
            parameter: "algorithm"
        }
    );

    let err = Tracer::new()
        .merge_padding(true)
        .merge_padding(false)
        .build()
        .unwrap_err();
    assert!(matches!(
        err,
        SortError::DuplicateParameter {
            parameter: "merge_padding"
        }
    ));

    let err = Tracer::new().verify().verify().build().unwrap_err();
    assert!(matches!(
        err,
        SortError::DuplicateParameter { parameter: "verify" }
    ));
}

// ============================================================================
// Independence Tests
// ============================================================================

/// Test concurrent sort calls share nothing.
///
/// Verifies each thread gets the same trace it would get alone.
#[test]
fn test_concurrent_sorts() {
    let data: Vec<i32> = (0..200).map(|i| (i * 37) % 101 - 50).collect();
    let input = data.as_slice();
    let expected: Vec<_> = IDS
        .into_iter()
        .map(|id| sort(id, Some(input)).unwrap())
        .collect();

    std::thread::scope(|scope| {
        let handles: Vec<_> = IDS
            .into_iter()
            .map(|id| scope.spawn(move || sort(id, Some(input)).unwrap()))
            .collect();

        for (handle, expected) in handles.into_iter().zip(&expected) {
            assert_eq!(&handle.join().unwrap(), expected);
        }
    });
}
