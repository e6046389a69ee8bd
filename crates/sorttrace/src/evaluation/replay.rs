//! Trace replay.
//!
//! ## Purpose
//!
//! Replay reconstructs array state by applying a trace's updates, in order,
//! to a copy of the array the trace was recorded from.
//!
//! ## Design notes
//!
//! * **Filtering**: Comparisons and sentinel updates are skipped.
//! * **Bounds**: An update aimed past the end of the array means the trace
//!   belongs to a different input; replay reports it instead of panicking.
//!   A negative index other than `SENTINEL` is reported the same way.
//!
//! ## Invariants
//!
//! * Replaying a trace recorded from `original` yields the algorithm's sorted array.
//! * The input slice is never modified.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, vec::Vec};
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::primitives::errors::SortError;
use crate::primitives::event::{SENTINEL, TraceEvent};
use crate::primitives::trace::Trace;

/// Apply every non-sentinel update of `trace` to a copy of `original`.
pub fn replay<T: Copy>(original: &[T], trace: &Trace<T>) -> Result<Vec<T>, SortError> {
    let mut state = original.to_vec();
    replay_into(&mut state, trace)?;
    Ok(state)
}

/// Apply every non-sentinel update of `trace` to `state` in place.
pub fn replay_into<T: Copy>(state: &mut [T], trace: &Trace<T>) -> Result<(), SortError> {
    let n = state.len();
    for event in trace.iter() {
        let TraceEvent::Update { index, value } = *event else {
            continue;
        };
        if index == SENTINEL {
            continue;
        }

        let slot = usize::try_from(index)
            .ok()
            .and_then(|i| state.get_mut(i))
            .ok_or_else(|| {
                SortError::InvalidInput(format!(
                    "trace writes position {index} but the array has {n} elements"
                ))
            })?;
        *slot = value;
    }
    Ok(())
}
