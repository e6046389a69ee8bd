//! Error types for trace generation and validation.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while selecting an
//! algorithm, recording a trace, or checking a trace against a reference sort.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include the offending values (names, ranges, positions).
//! * **Deferred**: Builder misuse is recorded during configuration and reported by `build()`.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Input errors**: Absent arrays and invalid generation ranges.
//! 2. **Selection errors**: Algorithm identifiers outside the closed set of seven.
//! 3. **Validation errors**: A replayed trace disagrees with the reference sort.
//!
//! ## Invariants
//!
//! * A sort call either returns a complete result or one of these errors, never both.
//! * Sorting is deterministic, so retrying a failed call yields the same error.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or retry strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for trace generation and validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    /// The input array reference was absent, or otherwise unusable.
    InvalidInput(String),

    /// The algorithm identifier is not one of the seven known names.
    UnknownAlgorithm(String),

    /// Replaying the trace did not reproduce the reference ascending sort.
    ValidationFailure {
        /// Identifier of the algorithm that produced the trace.
        algorithm: &'static str,
        /// First position where the replayed array differs from the reference.
        position: usize,
    },

    /// A value range has its lower bound above its upper bound.
    InvalidRange {
        /// Lower bound provided.
        min: i64,
        /// Upper bound provided.
        max: i64,
    },

    /// A length range is empty or has its lower bound above its upper bound.
    InvalidLengthRange {
        /// Minimum length provided.
        min: usize,
        /// Maximum length provided.
        max: usize,
    },

    /// A differential check needs at least one run.
    InvalidRuns(usize),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for SortError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::UnknownAlgorithm(name) => write!(f, "Unknown algorithm: '{name}'"),
            Self::ValidationFailure {
                algorithm,
                position,
            } => {
                write!(
                    f,
                    "Validation failure: {algorithm} trace diverges from the reference sort at position {position}"
                )
            }
            Self::InvalidRange { min, max } => {
                write!(f, "Invalid value range: [{min}, {max}] (min must be <= max)")
            }
            Self::InvalidLengthRange { min, max } => {
                write!(
                    f,
                    "Invalid length range: [{min}, {max}] (min must be >= 1 and <= max)"
                )
            }
            Self::InvalidRuns(runs) => write!(f, "Invalid runs: {runs} (must be at least 1)"),
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for SortError {}
