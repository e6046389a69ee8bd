//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the shared vocabulary of the crate: trace events, the
//! trace container, event sinks, and error types. It has zero internal
//! dependencies within the crate.
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
//! Layer 3: Evaluation
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Trace event vocabulary.
pub mod event;

/// Ordered trace container.
pub mod trace;

/// Event sinks for instrumented algorithms.
pub mod sink;

/// Shared error types.
pub mod errors;
