//! Execution of instrumented sorts.
//!
//! ## Purpose
//!
//! The executor is the single place where a sort actually runs. It copies the
//! caller's array, drives the selected algorithm against a [`Recorder`], and
//! packages the trace with the sorted copy.
//!
//! ## Design notes
//!
//! * **Private copy**: The caller's slice is only read, never written.
//! * **No shared state**: Each run owns its buffer and recorder, so runs on
//!   different threads never interfere.
//! * **Optional verification**: When enabled, the result is checked against
//!   the reference sort before being returned, and a mismatch is an error
//!   rather than a result.
//!
//! ## Key concepts
//!
//! * **Two stages**: The whole trace is generated before anything is replayed;
//!   the executor never interleaves sorting with consumption.
//!
//! ## Invariants
//!
//! * A run either returns a complete [`SortResult`] or an error, never a
//!   partially populated trace.
//! * Runs are deterministic: identical input gives identical traces.
//!
//! ## Non-goals
//!
//! * This module does not schedule or render anything.

// External dependencies
use num_traits::PrimInt;

// Internal dependencies
use crate::algorithms::{Algorithm, InstrumentOptions};
use crate::engine::output::SortResult;
use crate::primitives::errors::SortError;
use crate::primitives::sink::Recorder;

// ============================================================================
// Executor
// ============================================================================

/// Configured runner for one algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceExecutor {
    /// Algorithm to run.
    pub algorithm: Algorithm,

    /// Trace recording options.
    pub options: InstrumentOptions,

    /// Check every result against the reference sort before returning it.
    pub verify: bool,
}

impl TraceExecutor {
    /// Executor with default options and no verification.
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            options: InstrumentOptions::default(),
            verify: false,
        }
    }

    /// Sort a private copy of `input` and record its trace.
    pub fn run<T: PrimInt>(&self, input: &[T]) -> Result<SortResult<T>, SortError> {
        let result = Self::execute(self.algorithm, input, &self.options);

        if self.verify {
            result.check(input)?;
        }

        Ok(result)
    }

    /// Run `algorithm` over a copy of `input`. Infallible: every slice,
    /// including an empty one, can be sorted.
    pub fn execute<T: PrimInt>(
        algorithm: Algorithm,
        input: &[T],
        options: &InstrumentOptions,
    ) -> SortResult<T> {
        let mut working = input.to_vec();
        let mut recorder = Recorder::with_capacity(input.len());

        algorithm.instrument(&mut working, &mut recorder, options);

        let trace = recorder.into_trace();
        let stats = trace.stats();
        tracing::debug!(
            algorithm = algorithm.id(),
            len = input.len(),
            events = stats.total(),
            compares = stats.compares,
            updates = stats.updates,
            placeholders = stats.placeholders,
            "recorded sort trace"
        );

        SortResult::new(algorithm, trace, working)
    }
}

// ============================================================================
// Per-Algorithm Entry Points
// ============================================================================

/// Signature shared by the per-algorithm entry points.
pub type SortFn<T> = fn(&[T]) -> SortResult<T>;

/// Merge sort with default options.
pub fn merge_sort<T: PrimInt>(input: &[T]) -> SortResult<T> {
    TraceExecutor::execute(Algorithm::Merge, input, &InstrumentOptions::default())
}

/// Quick sort.
pub fn quick_sort<T: PrimInt>(input: &[T]) -> SortResult<T> {
    TraceExecutor::execute(Algorithm::Quick, input, &InstrumentOptions::default())
}

/// Heap sort.
pub fn heap_sort<T: PrimInt>(input: &[T]) -> SortResult<T> {
    TraceExecutor::execute(Algorithm::Heap, input, &InstrumentOptions::default())
}

/// Insertion sort.
pub fn insertion_sort<T: PrimInt>(input: &[T]) -> SortResult<T> {
    TraceExecutor::execute(Algorithm::Insertion, input, &InstrumentOptions::default())
}

/// Selection sort.
pub fn selection_sort<T: PrimInt>(input: &[T]) -> SortResult<T> {
    TraceExecutor::execute(Algorithm::Selection, input, &InstrumentOptions::default())
}

/// Bubble sort.
pub fn bubble_sort<T: PrimInt>(input: &[T]) -> SortResult<T> {
    TraceExecutor::execute(Algorithm::Bubble, input, &InstrumentOptions::default())
}

/// Cycle sort.
pub fn cycle_sort<T: PrimInt>(input: &[T]) -> SortResult<T> {
    TraceExecutor::execute(Algorithm::Cycle, input, &InstrumentOptions::default())
}

impl Algorithm {
    /// Entry point for this algorithm with default options.
    pub fn sort_fn<T: PrimInt>(self) -> SortFn<T> {
        match self {
            Self::Merge => merge_sort as SortFn<T>,
            Self::Quick => quick_sort,
            Self::Heap => heap_sort,
            Self::Insertion => insertion_sort,
            Self::Selection => selection_sort,
            Self::Bubble => bubble_sort,
            Self::Cycle => cycle_sort,
        }
    }

    /// Sort a private copy of `input` with default options.
    pub fn sort<T: PrimInt>(self, input: &[T]) -> SortResult<T> {
        TraceExecutor::execute(self, input, &InstrumentOptions::default())
    }
}
