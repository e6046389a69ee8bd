//! Layer 2: Algorithms
//!
//! # Purpose
//!
//! This layer provides the seven instrumented sorting algorithms and the closed
//! [`Algorithm`] enum used to select one of them. Every algorithm sorts a
//! mutable slice in place and reports each comparison and write to a
//! [`TraceSink`] in the order it performs them.
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
//! Layer 2: Algorithms ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::ToString;
#[cfg(feature = "std")]
use std::string::ToString;

// External dependencies
use core::fmt::{Display, Formatter, Result as FmtResult};
use core::str::FromStr;
use num_traits::PrimInt;

// Internal dependencies
use crate::primitives::errors::SortError;
use crate::primitives::sink::TraceSink;

/// Top-down buffered merge sort.
pub mod merge;

/// Lomuto quick sort.
pub mod quick;

/// In-place max-heap sort.
pub mod heap;

/// Shifting insertion sort.
pub mod insertion;

/// Selection sort.
pub mod selection;

/// Bubble sort with last-swap bound.
pub mod bubble;

/// Write-minimal cycle sort.
pub mod cycle;

// ============================================================================
// Algorithm Selection
// ============================================================================

/// One of the seven instrumented sorting algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    /// Merge sort (`mergeSort`).
    #[cfg_attr(feature = "serde", serde(rename = "mergeSort"))]
    Merge,

    /// Quick sort (`quickSort`).
    #[cfg_attr(feature = "serde", serde(rename = "quickSort"))]
    Quick,

    /// Heap sort (`heapSort`).
    #[cfg_attr(feature = "serde", serde(rename = "heapSort"))]
    Heap,

    /// Insertion sort (`insertionSort`).
    #[cfg_attr(feature = "serde", serde(rename = "insertionSort"))]
    Insertion,

    /// Selection sort (`selectionSort`).
    #[cfg_attr(feature = "serde", serde(rename = "selectionSort"))]
    Selection,

    /// Bubble sort (`bubbleSort`).
    #[cfg_attr(feature = "serde", serde(rename = "bubbleSort"))]
    Bubble,

    /// Cycle sort (`cycleSort`).
    #[cfg_attr(feature = "serde", serde(rename = "cycleSort"))]
    Cycle,
}

impl Algorithm {
    /// Every algorithm, in the order the visualizer lists them.
    pub const ALL: [Algorithm; 7] = [
        Algorithm::Merge,
        Algorithm::Quick,
        Algorithm::Heap,
        Algorithm::Bubble,
        Algorithm::Insertion,
        Algorithm::Selection,
        Algorithm::Cycle,
    ];

    /// Identifier used to select the algorithm by name.
    pub fn id(self) -> &'static str {
        match self {
            Self::Merge => "mergeSort",
            Self::Quick => "quickSort",
            Self::Heap => "heapSort",
            Self::Insertion => "insertionSort",
            Self::Selection => "selectionSort",
            Self::Bubble => "bubbleSort",
            Self::Cycle => "cycleSort",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Merge => "Merge Sort",
            Self::Quick => "Quick Sort",
            Self::Heap => "Heap Sort",
            Self::Insertion => "Insertion Sort",
            Self::Selection => "Selection Sort",
            Self::Bubble => "Bubble Sort",
            Self::Cycle => "Cycle Sort",
        }
    }

    /// Sort `data` in place, streaming every event into `sink`.
    pub fn instrument<T, S>(self, data: &mut [T], sink: &mut S, options: &InstrumentOptions)
    where
        T: PrimInt,
        S: TraceSink<T>,
    {
        match self {
            Self::Merge => merge::sort(data, sink, options.merge_padding),
            Self::Quick => quick::sort(data, sink),
            Self::Heap => heap::sort(data, sink),
            Self::Insertion => insertion::sort(data, sink),
            Self::Selection => selection::sort(data, sink),
            Self::Bubble => bubble::sort(data, sink),
            Self::Cycle => cycle::sort(data, sink),
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.id())
    }
}

impl FromStr for Algorithm {
    type Err = SortError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.id() == name)
            .ok_or_else(|| SortError::UnknownAlgorithm(name.to_string()))
    }
}

// ============================================================================
// Instrumentation Options
// ============================================================================

/// Knobs that change how a trace is recorded, never how the array is sorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InstrumentOptions {
    /// Precede every uncompared merge write with a sentinel update.
    pub merge_padding: bool,
}

// ============================================================================
// Shared Helpers
// ============================================================================

/// Swap two positions and record both resulting values.
///
/// A swap of a position with itself changes nothing and records nothing.
#[inline]
pub(crate) fn swap<T: PrimInt, S: TraceSink<T>>(data: &mut [T], a: usize, b: usize, sink: &mut S) {
    if a == b {
        return;
    }
    data.swap(a, b);
    sink.update(a, data[a]);
    sink.update(b, data[b]);
}
