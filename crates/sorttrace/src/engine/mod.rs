//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer runs one instrumented sort end to end: it validates the input,
//! sorts a private copy, records the trace, optionally verifies it, and
//! packages the outcome as a [`output::SortResult`].
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Evaluation
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives
//! ```

/// Execution of instrumented sorts.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Output types for sort runs.
pub mod output;
