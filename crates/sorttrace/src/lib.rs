//! # sorttrace: Instrumented sorting traces for animation replay
//!
//! Seven classical comparison sorts (merge, quick, heap, insertion, selection,
//! bubble, cycle), each rewritten to emit a faithful, replayable trace of every
//! comparison and write it performs, in the order it performs them.
//!
//! ## What is a trace?
//!
//! A trace is an ordered list of two kinds of event:
//!
//! - `Compare { role, a, b }`: positions `a` and `b` were compared. The role
//!   alternates `Primary`/`Secondary` and only picks a highlight colour.
//! - `Update { index, value }`: position `index` now holds `value`. An index
//!   of [`SENTINEL`](prelude::SENTINEL) (`-1`) is a no-op placeholder.
//!
//! Replaying every non-sentinel update, in order, over the original array
//! reconstructs the sorted array exactly. A renderer replays the same trace
//! open-loop, one event every fixed delay.
//!
//! ## Quick Start
//!
//! ### By name
//!
//! ```rust
//! use sorttrace::prelude::*;
//!
//! let data = vec![5, 3, 8, 1];
//! let result = sort("bubbleSort", Some(data.as_slice()))?;
//!
//! assert_eq!(result.sorted(), &[1, 3, 5, 8]);
//! assert!(validate(&data, &result));
//! println!("{}", result);
//! # Result::<(), SortError>::Ok(())
//! ```
//!
//! ```text
//! Summary:
//!   Algorithm:    Bubble Sort (bubbleSort)
//!   Data points:  4
//!   Events:       14
//!   Compares:     6
//!   Updates:      8
//!
//! Sorted Data:
//!   [1, 3, 5, 8]
//! ```
//!
//! ### Configured
//!
//! ```rust
//! use sorttrace::prelude::*;
//!
//! let data = vec![9, -2, 7, 7, 0, 4];
//!
//! let sorter = Tracer::new()
//!     .algorithm(Merge)      // Which algorithm to instrument
//!     .merge_padding(true)   // Two trace slots per element moved
//!     .verify()              // Check the trace against a reference sort
//!     .build()?;
//!
//! let result = sorter.sort(&data)?;
//! assert_eq!(result.sorted(), &[-2, 0, 4, 7, 7, 9]);
//! # Result::<(), SortError>::Ok(())
//! ```
//!
//! ### Replay
//!
//! ```rust
//! use core::time::Duration;
//! use sorttrace::prelude::*;
//!
//! let result = Quick.sort(&[3, 1, 2]);
//! let scheduler = ReplayScheduler::new().delay(Duration::from_millis(2));
//!
//! for step in scheduler.schedule(result.trace()) {
//!     match step.action {
//!         Action::Highlight { bars, color } => println!("{:?} highlight {:?} {}", step.at, bars, color),
//!         Action::Resize { bar, value } => println!("{:?} resize {} -> {}", step.at, bar, value),
//!     }
//! }
//! ```
//!
//! ## Result and Error Handling
//!
//! Name-based calls return `Result<SortResult<T>, SortError>`:
//!
//! - **`InvalidInput`**: the array reference is absent (`None`).
//! - **`UnknownAlgorithm`**: the name is not one of the seven identifiers.
//! - **`ValidationFailure`**: a requested verification found a trace that does
//!   not replay to the reference sort.
//!
//! An empty array is valid and produces an empty trace.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments with `alloc`:
//!
//! ```toml
//! [dependencies]
//! sorttrace = { version = "0.3", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Layer 1: Primitives - events, traces, sinks, errors.
mod primitives;

// Layer 2: Algorithms - the seven instrumented sorts.
mod algorithms;

// Layer 3: Evaluation - replay, oracle, differential checks.
mod evaluation;

// Layer 4: Engine - execution and validation.
mod engine;

// Layer 5: Adapters - replay scheduling.
mod adapters;

// High-level API.
mod api;

// Standard sorttrace prelude.
pub mod prelude {
    pub use crate::api::{
        Action, Algorithm,
        Algorithm::{Bubble, Cycle, Heap, Insertion, Merge, Quick, Selection},
        CompareRole, DifferentialCheck, DifferentialFailure, DifferentialReport, Discard,
        InstrumentOptions, Palette, Recorder, Renderer, ReplayScheduler, SENTINEL,
        ScheduledAction, SortError, SortFn, SortResult, Trace, TraceBuilder as Tracer,
        TraceEvent, TraceSink, TraceSorter, TraceStats, lookup, registry, sort, validate,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod adapters {
        pub use crate::adapters::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
