//! Layer 5: Adapters
//!
//! # Purpose
//!
//! This layer adapts finished traces for the collaborators that consume them.
//! Today that is the replay scheduler, which maps trace events onto timed
//! actions for an external renderer.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters ← You are here
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Evaluation
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives
//! ```

/// Fixed-delay replay scheduling.
pub mod schedule;
