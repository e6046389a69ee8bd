//! Replay scheduling for a renderer.
//!
//! ## Purpose
//!
//! This module turns a finished trace into timed visual actions. Event `i` is
//! scheduled at `i * delay`: a comparison highlights two bars, a real update
//! resizes one bar. The renderer itself lives outside this crate and is
//! reached through the [`Renderer`] trait.
//!
//! ## Design notes
//!
//! * **Open loop**: Timing is fixed up front from the event index; nothing is
//!   reordered, retried, or checked.
//! * **Sentinels**: A sentinel update keeps its time slot but schedules nothing,
//!   so later events fire exactly when they would have otherwise.
//! * **Palette**: Compare roles map to two highlight colours; the defaults are
//!   the visualizer's blue and tomato.
//!
//! ## Key concepts
//!
//! * **Slot**: One event index, lasting `delay`.
//! * **Completion**: The time at which the last slot fires, `(len - 1) * delay`,
//!   when the collaborator may re-enable its controls.
//!
//! ## Invariants
//!
//! * Scheduled actions are in non-decreasing time order.
//! * No action ever targets the sentinel index.
//!
//! ## Non-goals
//!
//! * This module does not sleep, spawn timers, or draw; it only computes
//!   offsets and forwards them.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::time::Duration;

// Internal dependencies
use crate::primitives::event::{CompareRole, TraceEvent};
use crate::primitives::trace::Trace;

// ============================================================================
// Palette
// ============================================================================

/// Colours used while replaying a trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Highlight for `Primary` comparisons.
    pub comparison_a: &'static str,

    /// Highlight for `Secondary` comparisons.
    pub comparison_b: &'static str,

    /// Resting bar colour.
    pub bar: &'static str,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            comparison_a: "blue",
            comparison_b: "tomato",
            bar: "tomato",
        }
    }
}

impl Palette {
    /// Highlight colour for a comparison role.
    #[inline]
    pub fn for_role(&self, role: CompareRole) -> &'static str {
        match role {
            CompareRole::Primary => self.comparison_a,
            CompareRole::Secondary => self.comparison_b,
        }
    }
}

// ============================================================================
// Actions
// ============================================================================

/// A visual side effect requested from the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action<T> {
    /// Colour two bars.
    Highlight {
        /// Bars to colour.
        bars: [usize; 2],
        /// Colour to apply.
        color: &'static str,
    },

    /// Set one bar's magnitude.
    Resize {
        /// Bar to resize.
        bar: usize,
        /// New magnitude.
        value: T,
    },
}

/// An action and the offset from replay start at which it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledAction<T> {
    /// Offset from the start of the replay.
    pub at: Duration,

    /// Index of the originating trace event.
    pub slot: usize,

    /// What to do.
    pub action: Action<T>,
}

/// Receiver of scheduled actions, implemented by the rendering collaborator.
pub trait Renderer<T> {
    /// Colour `bars` at offset `at`.
    fn highlight(&mut self, at: Duration, bars: [usize; 2], color: &'static str);

    /// Set the magnitude of `bar` at offset `at`.
    fn resize(&mut self, at: Duration, bar: usize, value: T);

    /// The last slot fires at `at`.
    fn finished(&mut self, _at: Duration) {}
}

// ============================================================================
// Scheduler
// ============================================================================

/// Fixed-delay replay scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplayScheduler {
    delay: Duration,
    palette: Palette,
}

impl Default for ReplayScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl ReplayScheduler {
    /// Default per-event delay.
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(2);

    /// Scheduler with a 2 ms delay and the default palette.
    pub fn new() -> Self {
        Self {
            delay: Self::DEFAULT_DELAY,
            palette: Palette::default(),
        }
    }

    /// Set the per-event delay.
    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Set the palette.
    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Configured per-event delay.
    pub fn get_delay(&self) -> Duration {
        self.delay
    }

    /// Offset of trace event `slot`.
    #[inline]
    pub fn offset(&self, slot: usize) -> Duration {
        let nanos = self.delay.as_nanos().saturating_mul(slot as u128);
        let secs = (nanos / 1_000_000_000).min(u128::from(u64::MAX)) as u64;
        Duration::new(secs, (nanos % 1_000_000_000) as u32)
    }

    /// Offset at which the last event fires; zero for an empty trace.
    pub fn completion_time<T>(&self, trace: &Trace<T>) -> Duration {
        self.offset(trace.len().saturating_sub(1))
    }

    /// Compute every action the trace implies, in firing order.
    pub fn schedule<T: Copy>(&self, trace: &Trace<T>) -> Vec<ScheduledAction<T>> {
        trace
            .iter()
            .enumerate()
            .filter_map(|(slot, event)| {
                self.action_for(event).map(|action| ScheduledAction {
                    at: self.offset(slot),
                    slot,
                    action,
                })
            })
            .collect()
    }

    /// Forward every action to `renderer`, then report completion.
    pub fn drive<T: Copy, R: Renderer<T>>(&self, trace: &Trace<T>, renderer: &mut R) {
        for (slot, event) in trace.iter().enumerate() {
            let at = self.offset(slot);
            match self.action_for(event) {
                Some(Action::Highlight { bars, color }) => renderer.highlight(at, bars, color),
                Some(Action::Resize { bar, value }) => renderer.resize(at, bar, value),
                None if event.is_malformed() => {
                    tracing::warn!(slot, "skipping update with a negative index")
                }
                None => tracing::trace!(slot, "skipping sentinel update"),
            }
        }

        if !trace.is_empty() {
            renderer.finished(self.completion_time(trace));
        }
    }

    fn action_for<T: Copy>(&self, event: &TraceEvent<T>) -> Option<Action<T>> {
        match *event {
            TraceEvent::Compare { role, a, b } => Some(Action::Highlight {
                bars: [a, b],
                color: self.palette.for_role(role),
            }),
            TraceEvent::Update { .. } => event
                .target()
                .map(|(bar, value)| Action::Resize { bar, value }),
        }
    }
}
