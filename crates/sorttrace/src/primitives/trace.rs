//! Ordered trace container.
//!
//! ## Purpose
//!
//! This module provides [`Trace`], the ordered sequence of events recorded for
//! one sort, and [`TraceStats`], a summary of what the trace contains.
//!
//! ## Invariants
//!
//! * Insertion order is temporal order; a trace is never reordered.
//! * A trace is immutable once recording finishes.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::ops::Deref;
use core::slice::Iter;

// Internal dependencies
use crate::primitives::event::TraceEvent;

// ============================================================================
// Trace
// ============================================================================

/// Ordered recording of every comparison and write performed by a sort.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Trace<T>(Vec<TraceEvent<T>>);

impl<T> Default for Trace<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T> From<Vec<TraceEvent<T>>> for Trace<T> {
    fn from(events: Vec<TraceEvent<T>>) -> Self {
        Self(events)
    }
}

impl<T> Deref for Trace<T> {
    type Target = [TraceEvent<T>];

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'a, T> IntoIterator for &'a Trace<T> {
    type Item = &'a TraceEvent<T>;
    type IntoIter = Iter<'a, TraceEvent<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T: Copy> Trace<T> {
    /// Consume the trace and return the raw events.
    pub fn into_events(self) -> Vec<TraceEvent<T>> {
        self.0
    }

    /// Count comparisons, real updates, and sentinel updates.
    pub fn stats(&self) -> TraceStats {
        let mut stats = TraceStats::default();
        for event in &self.0 {
            if event.is_compare() {
                stats.compares += 1;
            } else if event.is_placeholder() {
                stats.placeholders += 1;
            } else if event.target().is_some() {
                stats.updates += 1;
            } else {
                stats.malformed += 1;
            }
        }
        stats
    }

    /// Number of comparison events.
    pub fn compare_count(&self) -> usize {
        self.0.iter().filter(|e| e.is_compare()).count()
    }

    /// Iterate over the `(index, value)` writes, skipping comparisons and sentinels.
    pub fn writes(&self) -> impl Iterator<Item = (usize, T)> + '_ {
        self.0.iter().filter_map(TraceEvent::target)
    }
}

// ============================================================================
// Statistics
// ============================================================================

/// Event counts for one trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TraceStats {
    /// Comparison events.
    pub compares: usize,

    /// Updates aimed at a real position.
    pub updates: usize,

    /// Sentinel updates.
    pub placeholders: usize,

    /// Updates aimed at a negative index other than the sentinel.
    #[cfg_attr(feature = "serde", serde(default))]
    pub malformed: usize,
}

impl TraceStats {
    /// Total number of events, i.e. the number of replay time slots.
    #[inline]
    pub fn total(&self) -> usize {
        self.compares + self.updates + self.placeholders + self.malformed
    }
}
