//! Reference-sort oracle for recorded traces.
//!
//! ## Purpose
//!
//! This module checks that a trace is a faithful recording: replaying it over
//! the original array must give exactly what the standard library's sort
//! gives, and so must the sorted array returned alongside the trace.
//!
//! ## Design notes
//!
//! * **Reference**: `slice::sort_unstable`; stability is never assumed.
//! * **Diagnostics**: [`check`] reports the first diverging position.
//!
//! ## Non-goals
//!
//! * This module is not on the visualization hot path; it allocates freely.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::PrimInt;

// Internal dependencies
use crate::evaluation::replay::replay;
use crate::primitives::errors::SortError;
use crate::primitives::trace::Trace;

/// Ascending copy of `original` using the standard library sort.
pub fn reference_sort<T: PrimInt>(original: &[T]) -> Vec<T> {
    let mut reference = original.to_vec();
    reference.sort_unstable();
    reference
}

/// Whether `trace` and `sorted` both agree with the reference sort of `original`.
pub fn validate<T: PrimInt>(original: &[T], trace: &Trace<T>, sorted: &[T]) -> bool {
    check(original, trace, sorted, "trace").is_ok()
}

/// Like [`validate`], but reports where the first disagreement is.
///
/// `algorithm` is only used to label the error.
pub fn check<T: PrimInt>(
    original: &[T],
    trace: &Trace<T>,
    sorted: &[T],
    algorithm: &'static str,
) -> Result<(), SortError> {
    let reference = reference_sort(original);
    let replayed = replay(original, trace)?;

    let position = first_mismatch(&replayed, &reference)
        .or_else(|| first_mismatch(sorted, &reference));

    match position {
        Some(position) => {
            tracing::warn!(algorithm, position, len = original.len(), "trace replay mismatch");
            Err(SortError::ValidationFailure {
                algorithm,
                position,
            })
        }
        None => Ok(()),
    }
}

fn first_mismatch<T: PartialEq>(actual: &[T], expected: &[T]) -> Option<usize> {
    actual
        .iter()
        .zip(expected)
        .position(|(a, e)| a != e)
        .or_else(|| (actual.len() != expected.len()).then_some(actual.len().min(expected.len())))
}
