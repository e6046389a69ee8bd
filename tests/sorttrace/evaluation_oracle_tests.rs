#![cfg(feature = "dev")]
//! Tests for replay, the reference oracle, and the differential self-check.
//!
//! These tests verify the evaluation layer:
//! - Replay applies real updates and ignores sentinels and comparisons
//! - The oracle accepts faithful traces and rejects tampered ones
//! - The differential check is reproducible and reports failures
//!
//! ## Test Organization
//!
//! 1. **Replay** - Update application and bounds errors
//! 2. **Oracle** - Reference sort, validate, check
//! 3. **Differential** - Configuration, reproducibility, reporting

use sorttrace::internals::algorithms::{Algorithm, InstrumentOptions};
use sorttrace::internals::evaluation::differential::DifferentialCheck;
use sorttrace::internals::evaluation::oracle::{check, reference_sort, validate};
use sorttrace::internals::evaluation::replay::{replay, replay_into};
use sorttrace::internals::primitives::errors::SortError;
use sorttrace::internals::primitives::event::{CompareRole, TraceEvent};
use sorttrace::internals::primitives::trace::Trace;

// ============================================================================
// Helper Functions
// ============================================================================

fn trace(events: Vec<TraceEvent<i32>>) -> Trace<i32> {
    Trace::from(events)
}

fn compare(a: usize, b: usize) -> TraceEvent<i32> {
    TraceEvent::Compare {
        role: CompareRole::Primary,
        a,
        b,
    }
}

// ============================================================================
// Replay Tests
// ============================================================================

/// Test replay applies updates in order.
#[test]
fn test_replay_applies_updates() {
    let original = vec![3, 1, 2];
    let t = trace(vec![
        compare(0, 1),
        TraceEvent::update(0, 1),
        TraceEvent::update(1, 3),
        TraceEvent::update(1, 2),
        TraceEvent::update(2, 3),
    ]);

    assert_eq!(replay(&original, &t).unwrap(), vec![1, 2, 3]);
}

/// Test replay ignores sentinel updates.
///
/// Verifies the sentinel value is never written anywhere.
#[test]
fn test_replay_ignores_sentinels() {
    let original = vec![5, 6];
    let t = trace(vec![TraceEvent::placeholder(99), TraceEvent::update(1, 7)]);

    assert_eq!(replay(&original, &t).unwrap(), vec![5, 7]);
}

/// Test replay of an empty trace is the identity.
#[test]
fn test_replay_empty_trace() {
    let original = vec![2, 1];
    assert_eq!(replay(&original, &Trace::default()).unwrap(), original);
}

/// Test replay rejects an out-of-range write.
#[test]
fn test_replay_out_of_range() {
    let mut state = vec![1, 2];
    let t = trace(vec![TraceEvent::update(2, 0)]);

    let res = replay_into(&mut state, &t);
    assert!(matches!(res, Err(SortError::InvalidInput(_))));
}

/// Test replay rejects a negative index that is not the sentinel.
///
/// Only `-1` is a no-op; any other negative write is an error, not a skip.
#[test]
fn test_replay_negative_index() {
    let mut state = vec![1, 2];
    let t = trace(vec![
        TraceEvent::update(0, 5),
        TraceEvent::Update { index: -7, value: 99 },
    ]);

    let res = replay_into(&mut state, &t);
    assert!(matches!(res, Err(SortError::InvalidInput(_))));
    assert!(!validate(&[1, 2], &t, &[1, 2]));

    let stats = t.stats();
    assert_eq!(stats.updates, 1);
    assert_eq!(stats.placeholders, 0);
    assert_eq!(stats.malformed, 1);
    assert_eq!(stats.total(), t.len());
}

/// Test a deserialized trace with a negative non-sentinel index is rejected.
#[cfg(feature = "serde")]
#[test]
fn test_replay_deserialized_negative_index() {
    let t: Trace<i32> =
        serde_json::from_str(r#"[{"kind":"update","index":-7,"value":99}]"#).unwrap();

    assert!(t[0].is_malformed());
    assert_eq!(t[0].target(), None);
    assert_eq!(t.writes().count(), 0);
    assert_eq!(t.stats().updates, 0);
    assert_eq!(t.stats().malformed, 1);

    let res = replay(&[3, 4], &t);
    assert!(matches!(res, Err(SortError::InvalidInput(_))));

    let sentinel: Trace<i32> =
        serde_json::from_str(r#"[{"kind":"update","index":-1,"value":99}]"#).unwrap();
    assert!(!sentinel[0].is_malformed());
    assert_eq!(replay(&[3, 4], &sentinel).unwrap(), vec![3, 4]);
}

/// Test replay of every algorithm's trace reconstructs its output.
#[test]
fn test_replay_every_algorithm() {
    let original = vec![9, -3, 4, 4, 0, 17, -3, 8];
    for algorithm in Algorithm::ALL {
        let result = algorithm.sort(&original);
        assert_eq!(
            replay(&original, result.trace()).unwrap(),
            result.sorted(),
            "{}",
            algorithm
        );
    }
}

// ============================================================================
// Oracle Tests
// ============================================================================

/// Test the reference sort is ascending and leaves its input alone.
#[test]
fn test_reference_sort() {
    let original = vec![4, -1, 4, 0];
    assert_eq!(reference_sort(&original), vec![-1, 0, 4, 4]);
    assert_eq!(original, vec![4, -1, 4, 0]);
}

/// Test the oracle accepts a faithful trace.
#[test]
fn test_validate_faithful_trace() {
    let original = vec![2, 1];
    let t = trace(vec![compare(0, 1), TraceEvent::update(0, 1), TraceEvent::update(1, 2)]);
    assert!(validate(&original, &t, &[1, 2]));
}

/// Test the oracle rejects a trace missing a write.
///
/// Verifies the first diverging position is reported.
#[test]
fn test_check_tampered_trace() {
    let original = vec![2, 1];
    let t = trace(vec![compare(0, 1), TraceEvent::update(0, 1)]);

    assert!(!validate(&original, &t, &[1, 2]));
    assert_eq!(
        check(&original, &t, &[1, 2], "bubbleSort"),
        Err(SortError::ValidationFailure {
            algorithm: "bubbleSort",
            position: 1,
        })
    );
}

/// Test the oracle rejects a wrong sorted array even when replay is right.
#[test]
fn test_check_wrong_sorted_output() {
    let original = vec![2, 1];
    let t = trace(vec![TraceEvent::update(0, 1), TraceEvent::update(1, 2)]);
    assert!(!validate(&original, &t, &[2, 1]));
}

/// Test the oracle reports a replay error as a failure.
#[test]
fn test_check_out_of_range_trace() {
    let original = vec![1];
    let t = trace(vec![TraceEvent::update(4, 1)]);
    assert!(!validate(&original, &t, &[1]));
}

/// Test sorted arrays of different length are mismatches.
#[test]
fn test_check_length_mismatch() {
    let original = vec![1, 2];
    let res = check(&original, &Trace::default(), &[1], "mergeSort");
    assert_eq!(
        res,
        Err(SortError::ValidationFailure {
            algorithm: "mergeSort",
            position: 1,
        })
    );
}

// ============================================================================
// Differential Tests
// ============================================================================

/// Test a small differential run passes for every algorithm.
#[test]
fn test_differential_all_algorithms() {
    let report = DifferentialCheck::new()
        .runs(25)
        .length_range(1, 120)
        .value_range(-20, 20)
        .seed(7)
        .run()
        .unwrap();

    assert_eq!(report.cases, 25);
    assert_eq!(report.checks, 25 * Algorithm::ALL.len());
    assert!(report.passed(), "failures: {:?}", report.failures);
}

/// Test the differential check with merge padding enabled.
#[test]
fn test_differential_with_padding() {
    let report = DifferentialCheck::new()
        .runs(10)
        .length_range(1, 64)
        .algorithms(&[Algorithm::Merge])
        .options(InstrumentOptions { merge_padding: true })
        .run()
        .unwrap();

    assert_eq!(report.checks, 10);
    assert!(report.passed());
}

/// Test generated cases respect their configured ranges.
#[test]
fn test_differential_cases_in_range() {
    let cases = DifferentialCheck::new()
        .runs(50)
        .length_range(3, 9)
        .value_range(-5, 5)
        .seed(123)
        .cases()
        .unwrap();

    assert_eq!(cases.len(), 50);
    for case in &cases {
        assert!((3..=9).contains(&case.len()));
        assert!(case.iter().all(|v| (-5..=5).contains(v)));
    }
}

/// Test the same seed always produces the same cases.
#[test]
fn test_differential_reproducible() {
    let config = DifferentialCheck::new().runs(5).length_range(1, 30).seed(99);
    assert_eq!(config.cases().unwrap(), config.cases().unwrap());

    let other = DifferentialCheck::new().runs(5).length_range(1, 30).seed(100);
    assert_ne!(config.cases().unwrap(), other.cases().unwrap());
}

/// Test a degenerate single-value range.
#[test]
fn test_differential_single_value() {
    let cases = DifferentialCheck::new()
        .runs(3)
        .length_range(4, 4)
        .value_range(7, 7)
        .cases()
        .unwrap();
    assert!(cases.iter().all(|case| case == &vec![7, 7, 7, 7]));
}

/// Test invalid configurations are rejected.
#[test]
fn test_differential_invalid_config() {
    assert_eq!(
        DifferentialCheck::new().runs(0).run(),
        Err(SortError::InvalidRuns(0))
    );
    assert_eq!(
        DifferentialCheck::new().length_range(0, 10).run(),
        Err(SortError::InvalidLengthRange { min: 0, max: 10 })
    );
    assert_eq!(
        DifferentialCheck::new().length_range(10, 5).run(),
        Err(SortError::InvalidLengthRange { min: 10, max: 5 })
    );
    assert_eq!(
        DifferentialCheck::new().value_range(3, -3).run(),
        Err(SortError::InvalidRange { min: 3, max: -3 })
    );
}
