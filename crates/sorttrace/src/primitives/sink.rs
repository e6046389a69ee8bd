//! Event sinks for instrumented algorithms.
//!
//! ## Purpose
//!
//! Instrumented algorithms never build traces themselves; they report every
//! comparison and write to a [`TraceSink`]. This keeps the algorithms free of
//! any rendering or storage concern and lets callers inject their own sink.
//!
//! ## Design notes
//!
//! * **Injection**: Algorithms are generic over the sink, so a discarding sink
//!   compiles down to the plain algorithm.
//! * **Role alternation**: The sink, not the algorithm, assigns highlight roles.
//!   [`Recorder`] alternates `Primary`/`Secondary` starting at `Primary`.
//!
//! ## Invariants
//!
//! * Events reach the sink in the exact order the algorithm performs them.
//! * A [`Recorder`] never reorders or drops events.
//!
//! ## Non-goals
//!
//! * Sinks do not validate indices; that is the algorithm's contract.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::primitives::event::{CompareRole, TraceEvent};
use crate::primitives::trace::Trace;

// ============================================================================
// Sink Trait
// ============================================================================

/// Receiver of instrumentation events.
pub trait TraceSink<T> {
    /// Positions `a` and `b` are being compared.
    fn compare(&mut self, a: usize, b: usize);

    /// Position `index` now holds `value`.
    fn update(&mut self, index: usize, value: T);

    /// A conceptual step with no visible array change.
    fn placeholder(&mut self, value: T);
}

// ============================================================================
// Recorder
// ============================================================================

/// Sink that records every event into a [`Trace`].
#[derive(Debug, Clone)]
pub struct Recorder<T> {
    events: Vec<TraceEvent<T>>,
    role: CompareRole,
}

impl<T> Default for Recorder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Recorder<T> {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            role: CompareRole::Primary,
        }
    }

    /// Create an empty recorder with room for `capacity` events.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            events: Vec::with_capacity(capacity),
            role: CompareRole::Primary,
        }
    }

    /// Number of events recorded so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether nothing has been recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Finish recording.
    pub fn into_trace(self) -> Trace<T> {
        Trace::from(self.events)
    }
}

impl<T: Copy> TraceSink<T> for Recorder<T> {
    #[inline]
    fn compare(&mut self, a: usize, b: usize) {
        self.events.push(TraceEvent::Compare {
            role: self.role,
            a,
            b,
        });
        self.role = self.role.next();
    }

    #[inline]
    fn update(&mut self, index: usize, value: T) {
        self.events.push(TraceEvent::update(index, value));
    }

    #[inline]
    fn placeholder(&mut self, value: T) {
        self.events.push(TraceEvent::placeholder(value));
    }
}

// ============================================================================
// Discard
// ============================================================================

/// Sink that ignores every event.
///
/// Running an algorithm against `Discard` measures the cost of the sorting
/// logic alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct Discard;

impl<T> TraceSink<T> for Discard {
    #[inline(always)]
    fn compare(&mut self, _a: usize, _b: usize) {}

    #[inline(always)]
    fn update(&mut self, _index: usize, _value: T) {}

    #[inline(always)]
    fn placeholder(&mut self, _value: T) {}
}
