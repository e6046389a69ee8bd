//! Trace event vocabulary.
//!
//! ## Purpose
//!
//! This module defines the two recordable operations an instrumented sort can
//! perform: highlighting a pair of positions for a comparison, and writing a
//! new value into one position.
//!
//! ## Design notes
//!
//! * **Closed**: Exactly two event shapes; consumers match exhaustively.
//! * **Untimed**: Events carry no timing; position in the trace is the only clock.
//! * **Sentinel**: A no-op update uses index `-1`, which can never address a bar.
//!
//! ## Key concepts
//!
//! * **Compare**: Two positions were compared. The role alternates between
//!   `Primary` and `Secondary` purely for highlight colouring.
//! * **Update**: Position `index` now holds `value`.
//! * **Placeholder**: An update aimed at [`SENTINEL`]; it occupies a time slot
//!   and changes nothing.
//!
//! ## Invariants
//!
//! * `Compare` positions are valid at the time the comparison occurs.
//! * An `Update` index is either a valid position or exactly [`SENTINEL`].
//!
//! ## Non-goals
//!
//! * This module does not record or replay events (see `sink` and `evaluation`).

/// Reserved update index meaning "no visible change".
pub const SENTINEL: isize = -1;

// ============================================================================
// Compare Role
// ============================================================================

/// Highlight phase attached to a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub enum CompareRole {
    /// First highlight colour.
    #[default]
    Primary,

    /// Second highlight colour.
    Secondary,
}

impl CompareRole {
    /// The role used for the comparison that follows this one.
    #[inline]
    pub fn next(self) -> Self {
        match self {
            Self::Primary => Self::Secondary,
            Self::Secondary => Self::Primary,
        }
    }
}

// ============================================================================
// Trace Event
// ============================================================================

/// A single recorded operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "kind", rename_all = "camelCase")
)]
pub enum TraceEvent<T> {
    /// Positions `a` and `b` were compared.
    Compare {
        /// Cosmetic highlight phase.
        role: CompareRole,
        /// First compared position.
        a: usize,
        /// Second compared position.
        b: usize,
    },

    /// Position `index` now holds `value`; `index == SENTINEL` is a no-op.
    Update {
        /// Target position, or [`SENTINEL`].
        index: isize,
        /// Value written.
        value: T,
    },
}

impl<T: Copy> TraceEvent<T> {
    /// Build an update for a real position.
    #[inline]
    pub fn update(index: usize, value: T) -> Self {
        // Slices never exceed isize::MAX elements.
        Self::Update {
            index: index as isize,
            value,
        }
    }

    /// Build a sentinel update that changes nothing.
    #[inline]
    pub fn placeholder(value: T) -> Self {
        Self::Update {
            index: SENTINEL,
            value,
        }
    }

    /// Whether this event is a comparison.
    #[inline]
    pub fn is_compare(&self) -> bool {
        matches!(self, Self::Compare { .. })
    }

    /// Whether this event is a sentinel update.
    #[inline]
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Update { index, .. } if *index == SENTINEL)
    }

    /// Whether this is an update aimed at a negative index other than [`SENTINEL`].
    ///
    /// Recorders never produce one; it only arrives through hand-built or
    /// deserialized traces.
    #[inline]
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Update { index, .. } if *index < 0 && *index != SENTINEL)
    }

    /// The position and value written by a non-sentinel update.
    ///
    /// Returns `None` for comparisons, sentinel updates and malformed updates.
    #[inline]
    pub fn target(&self) -> Option<(usize, T)> {
        match *self {
            Self::Update { index, value } if index >= 0 => Some((index as usize, value)),
            _ => None,
        }
    }
}
