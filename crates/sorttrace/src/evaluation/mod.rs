//! Layer 3: Evaluation
//!
//! # Purpose
//!
//! This layer checks recorded traces after the fact: replaying them over the
//! original array, comparing the outcome with a reference sort, and running
//! seeded differential checks over many generated arrays.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Evaluation ← You are here
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives
//! ```

/// Trace replay.
pub mod replay;

/// Reference-sort oracle.
pub mod oracle;

/// Randomized differential self-check.
pub mod differential;
