//! Output types for instrumented sort runs.
//!
//! ## Purpose
//!
//! This module defines [`SortResult`], which pairs the recorded trace with
//! the final sorted array and the algorithm that produced them.
//!
//! ## Design notes
//!
//! * **Immutable**: Fields are read through accessors; a result never changes
//!   after the executor builds it.
//! * **Owned**: Nothing is shared with other calls, so results can move freely
//!   between threads.
//! * **Ergonomics**: Implements `Display` for a human-readable summary.
//!
//! ## Invariants
//!
//! * Replaying the trace over the input reproduces `sorted`.
//! * `sorted` has the same length as the input.
//!
//! ## Non-goals
//!
//! * This module does not sort; it only stores and inspects results.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::PrimInt;

// Internal dependencies
use crate::algorithms::Algorithm;
use crate::evaluation::oracle;
use crate::evaluation::replay::replay;
use crate::primitives::errors::SortError;
use crate::primitives::trace::{Trace, TraceStats};

// ============================================================================
// Result Structure
// ============================================================================

/// Recorded trace and sorted array for one sort call.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SortResult<T> {
    algorithm: Algorithm,
    trace: Trace<T>,
    sorted: Vec<T>,
}

impl<T: PrimInt> SortResult<T> {
    pub(crate) fn new(algorithm: Algorithm, trace: Trace<T>, sorted: Vec<T>) -> Self {
        Self {
            algorithm,
            trace,
            sorted,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Algorithm that produced this result.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Recorded events in temporal order.
    pub fn trace(&self) -> &Trace<T> {
        &self.trace
    }

    /// Final sorted array.
    pub fn sorted(&self) -> &[T] {
        &self.sorted
    }

    /// Split into the trace and the sorted array.
    pub fn into_parts(self) -> (Trace<T>, Vec<T>) {
        (self.trace, self.sorted)
    }

    /// Event counts of the trace.
    pub fn stats(&self) -> TraceStats {
        self.trace.stats()
    }

    // ========================================================================
    // Checks
    // ========================================================================

    /// Replay the trace over `original`.
    pub fn replay(&self, original: &[T]) -> core::result::Result<Vec<T>, SortError> {
        replay(original, &self.trace)
    }

    /// Whether the trace and the sorted array match the reference sort of `original`.
    pub fn validate(&self, original: &[T]) -> bool {
        oracle::validate(original, &self.trace, &self.sorted)
    }

    /// Like [`SortResult::validate`], reporting the first diverging position.
    pub fn check(&self, original: &[T]) -> core::result::Result<(), SortError> {
        oracle::check(original, &self.trace, &self.sorted, self.algorithm.id())
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: PrimInt + Display> Display for SortResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let stats = self.stats();

        writeln!(f, "Summary:")?;
        writeln!(f, "  Algorithm:    {} ({})", self.algorithm.label(), self.algorithm)?;
        writeln!(f, "  Data points:  {}", self.sorted.len())?;
        writeln!(f, "  Events:       {}", stats.total())?;
        writeln!(f, "  Compares:     {}", stats.compares)?;
        writeln!(f, "  Updates:      {}", stats.updates)?;
        if stats.placeholders > 0 {
            writeln!(f, "  Placeholders: {}", stats.placeholders)?;
        }
        if stats.malformed > 0 {
            writeln!(f, "  Malformed:    {}", stats.malformed)?;
        }

        writeln!(f)?;
        writeln!(f, "Sorted Data:")?;
        write!(f, "  [")?;
        for (i, value) in self.sorted.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        writeln!(f, "]")
    }
}
