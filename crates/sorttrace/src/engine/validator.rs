//! Input validation for sort calls and builder configuration.
//!
//! ## Purpose
//!
//! This module checks everything a sort call can be handed before any work
//! starts: the array reference, the algorithm identifier, and the builder's
//! parameter bookkeeping.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Up-front**: All checks run before sorting, so a failed call never
//!   leaves a partial trace behind.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//! * An empty array is valid input.
//!
//! ## Non-goals
//!
//! * This module does not check traces (see the evaluation layer).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::ToString;
#[cfg(feature = "std")]
use std::string::ToString;

// Internal dependencies
use crate::algorithms::Algorithm;
use crate::primitives::errors::SortError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for sort inputs and configuration.
///
/// Provides static methods that return `Result<_, SortError>` and fail fast
/// upon identifying the first violation.
pub struct Validator;

impl Validator {
    /// Require a present array reference.
    ///
    /// `None` models an absent (null) array handed across a language boundary.
    pub fn validate_input<T>(input: Option<&[T]>) -> Result<&[T], SortError> {
        input.ok_or_else(|| SortError::InvalidInput("array reference is absent".to_string()))
    }

    /// Resolve an algorithm identifier.
    pub fn validate_algorithm(name: &str) -> Result<Algorithm, SortError> {
        name.parse()
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), SortError> {
        if let Some(param) = duplicate_param {
            return Err(SortError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
