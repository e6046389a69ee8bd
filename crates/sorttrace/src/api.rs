//! High-level API for recording sort traces.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points: a name-based
//! [`sort`] function for callers that select algorithms by identifier, a
//! [`registry`] mapping identifiers to sort functions, and a fluent
//! [`TraceBuilder`] for callers that want to configure recording.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Closed dispatch**: Names resolve to the [`Algorithm`] enum; anything
//!   else is an `UnknownAlgorithm` error.
//! * **Validated**: Parameters are validated when `.build()` is called.
//! * **Type-Safe**: Generic over primitive integer types.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`TraceBuilder`] via `Tracer::new()`.
//! 2. Chain configuration methods (`.algorithm()`, `.merge_padding()`, `.verify()`).
//! 3. Call `.build()` to get a [`TraceSorter`], then `.sort(&data)`.

// External dependencies
use num_traits::PrimInt;

// Internal dependencies
use crate::engine::executor::TraceExecutor;
use crate::engine::validator::Validator;
use crate::evaluation::oracle;

// Publicly re-exported types
pub use crate::adapters::schedule::{Action, Palette, Renderer, ReplayScheduler, ScheduledAction};
pub use crate::algorithms::{Algorithm, InstrumentOptions};
pub use crate::engine::executor::SortFn;
pub use crate::engine::output::SortResult;
pub use crate::evaluation::differential::{DifferentialCheck, DifferentialFailure, DifferentialReport};
pub use crate::primitives::errors::SortError;
pub use crate::primitives::event::{CompareRole, SENTINEL, TraceEvent};
pub use crate::primitives::sink::{Discard, Recorder, TraceSink};
pub use crate::primitives::trace::{Trace, TraceStats};

// ============================================================================
// Name-Based Entry Points
// ============================================================================

/// Sort `input` with the algorithm named `name`.
///
/// `input` is `None` when the caller has no array at all; that is an
/// `InvalidInput` error, while an empty array sorts to an empty result.
pub fn sort<T: PrimInt>(name: &str, input: Option<&[T]>) -> Result<SortResult<T>, SortError> {
    let algorithm = Validator::validate_algorithm(name)?;
    let input = Validator::validate_input(input)?;
    TraceExecutor::new(algorithm).run(input)
}

/// Identifier → sort function table for all seven algorithms.
pub fn registry<T: PrimInt>() -> [(&'static str, SortFn<T>); 7] {
    Algorithm::ALL.map(|algorithm| (algorithm.id(), algorithm.sort_fn::<T>()))
}

/// Look up the sort function for `name`.
pub fn lookup<T: PrimInt>(name: &str) -> Result<SortFn<T>, SortError> {
    Validator::validate_algorithm(name).map(|algorithm| algorithm.sort_fn::<T>())
}

/// Whether replaying `result` over `original` matches the reference sort.
pub fn validate<T: PrimInt>(original: &[T], result: &SortResult<T>) -> bool {
    oracle::validate(original, result.trace(), result.sorted())
}

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring trace recording.
#[derive(Debug, Clone, Default)]
pub struct TraceBuilder {
    /// Algorithm to run (default: merge sort).
    pub algorithm: Option<Algorithm>,

    /// Pad uncompared merge writes with sentinel updates (default: false).
    pub merge_padding: Option<bool>,

    /// Check every result against the reference sort (default: false).
    pub verify: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl TraceBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the algorithm.
    pub fn algorithm(mut self, algorithm: Algorithm) -> Self {
        if self.algorithm.is_some() {
            self.duplicate_param = Some("algorithm");
        }
        self.algorithm = Some(algorithm);
        self
    }

    /// Enable or disable sentinel padding of merge drain writes.
    pub fn merge_padding(mut self, enabled: bool) -> Self {
        if self.merge_padding.is_some() {
            self.duplicate_param = Some("merge_padding");
        }
        self.merge_padding = Some(enabled);
        self
    }

    /// Check every result against the reference sort before returning it.
    pub fn verify(mut self) -> Self {
        if self.verify.is_some() {
            self.duplicate_param = Some("verify");
        }
        self.verify = Some(true);
        self
    }

    /// Validate the configuration and build a sorter.
    pub fn build(self) -> Result<TraceSorter, SortError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let executor = TraceExecutor {
            algorithm: self.algorithm.unwrap_or(Algorithm::Merge),
            options: InstrumentOptions {
                merge_padding: self.merge_padding.unwrap_or(false),
            },
            verify: self.verify.unwrap_or(false),
        };

        Ok(TraceSorter { executor })
    }
}

// ============================================================================
// Sorter
// ============================================================================

/// Configured, reusable trace recorder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceSorter {
    executor: TraceExecutor,
}

impl TraceSorter {
    /// Algorithm this sorter runs.
    pub fn algorithm(&self) -> Algorithm {
        self.executor.algorithm
    }

    /// Sort a private copy of `input` and record its trace.
    pub fn sort<T: PrimInt>(&self, input: &[T]) -> Result<SortResult<T>, SortError> {
        self.executor.run(input)
    }
}
