//! Randomized differential self-check.
//!
//! ## Purpose
//!
//! This module runs instrumented algorithms over many pseudo-random arrays
//! and checks every recorded trace against the reference sort. It is the
//! correctness self-check the visualizer runs before trusting an algorithm.
//!
//! ## Design notes
//!
//! * **Reproducible**: Arrays come from a seeded LCG; the same seed always
//!   generates the same cases, with or without `std`.
//! * **Exhaustive reporting**: Every failing (case, algorithm) pair is
//!   reported, not just the first.
//!
//! ## Key concepts
//!
//! * **Case**: One generated array, shared by every selected algorithm.
//! * **Check**: One algorithm run on one case, validated by the oracle.
//!
//! ## Invariants
//!
//! * Case lengths lie in `[min_len, max_len]` and values in `[min_value, max_value]`.
//! * Generated arrays are never mutated by the algorithms under test.
//!
//! ## Non-goals
//!
//! * This module does not generate arrays for display.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::algorithms::{Algorithm, InstrumentOptions};
use crate::evaluation::oracle::check;
use crate::primitives::errors::SortError;
use crate::primitives::sink::Recorder;

// ============================================================================
// Internal PRNG
// ============================================================================

/// Minimal PRNG for no-std case generation.
///
/// Uses an LCG (Linear Congruential Generator) with constants from PCG/MQL.
#[derive(Debug, Clone)]
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next_u32(&mut self) -> u32 {
        // LCG constants for 64-bit state
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        (u64::from(self.next_u32()) << 32) | u64::from(self.next_u32())
    }

    /// Uniform-ish draw from the closed interval `[lo, hi]`.
    fn range_i64(&mut self, lo: i64, hi: i64) -> i64 {
        let span = (i128::from(hi) - i128::from(lo) + 1) as u128;
        let offset = u128::from(self.next_u64()) % span;
        (i128::from(lo) + offset as i128) as i64
    }

    fn range_usize(&mut self, lo: usize, hi: usize) -> usize {
        let span = (hi - lo) as u128 + 1;
        lo + (u128::from(self.next_u64()) % span) as usize
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Seeded differential check of instrumented algorithms against the reference sort.
#[derive(Debug, Clone)]
pub struct DifferentialCheck {
    runs: usize,
    min_len: usize,
    max_len: usize,
    min_value: i64,
    max_value: i64,
    seed: u64,
    algorithms: Vec<Algorithm>,
    options: InstrumentOptions,
}

impl Default for DifferentialCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl DifferentialCheck {
    /// 100 cases of length 1–1000 with values in `[-1000, 1000]`, all algorithms.
    pub fn new() -> Self {
        Self {
            runs: 100,
            min_len: 1,
            max_len: 1000,
            min_value: -1000,
            max_value: 1000,
            seed: 0,
            algorithms: Algorithm::ALL.to_vec(),
            options: InstrumentOptions::default(),
        }
    }

    /// Set the number of generated cases.
    pub fn runs(mut self, runs: usize) -> Self {
        self.runs = runs;
        self
    }

    /// Set the inclusive range of case lengths.
    pub fn length_range(mut self, min: usize, max: usize) -> Self {
        self.min_len = min;
        self.max_len = max;
        self
    }

    /// Set the inclusive range of generated values.
    pub fn value_range(mut self, min: i64, max: i64) -> Self {
        self.min_value = min;
        self.max_value = max;
        self
    }

    /// Set the generator seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Restrict the check to the given algorithms.
    pub fn algorithms(mut self, algorithms: &[Algorithm]) -> Self {
        self.algorithms = algorithms.to_vec();
        self
    }

    /// Set the instrumentation options used for every run.
    pub fn options(mut self, options: InstrumentOptions) -> Self {
        self.options = options;
        self
    }

    /// Generate the cases without running anything.
    pub fn cases(&self) -> Result<Vec<Vec<i64>>, SortError> {
        self.validate()?;

        let mut rng = SimpleRng::new(self.seed);
        let cases = (0..self.runs)
            .map(|_| {
                let len = rng.range_usize(self.min_len, self.max_len);
                (0..len)
                    .map(|_| rng.range_i64(self.min_value, self.max_value))
                    .collect()
            })
            .collect();
        Ok(cases)
    }

    /// Run every selected algorithm on every case.
    pub fn run(&self) -> Result<DifferentialReport, SortError> {
        let cases = self.cases()?;
        let mut report = DifferentialReport {
            cases: cases.len(),
            checks: 0,
            failures: Vec::new(),
        };

        for (case, original) in cases.iter().enumerate() {
            for &algorithm in &self.algorithms {
                let mut working = original.clone();
                let mut recorder = Recorder::new();
                algorithm.instrument(&mut working, &mut recorder, &self.options);
                let trace = recorder.into_trace();

                report.checks += 1;
                if let Err(err) = check(original, &trace, &working, algorithm.id()) {
                    let position = match err {
                        SortError::ValidationFailure { position, .. } => position,
                        _ => 0,
                    };
                    report.failures.push(DifferentialFailure {
                        algorithm,
                        case,
                        len: original.len(),
                        position,
                    });
                }
            }
        }

        tracing::debug!(
            cases = report.cases,
            checks = report.checks,
            failures = report.failures.len(),
            seed = self.seed,
            "differential check finished"
        );

        Ok(report)
    }

    fn validate(&self) -> Result<(), SortError> {
        if self.runs == 0 {
            return Err(SortError::InvalidRuns(self.runs));
        }
        if self.min_len == 0 || self.min_len > self.max_len {
            return Err(SortError::InvalidLengthRange {
                min: self.min_len,
                max: self.max_len,
            });
        }
        if self.min_value > self.max_value {
            return Err(SortError::InvalidRange {
                min: self.min_value,
                max: self.max_value,
            });
        }
        Ok(())
    }
}

// ============================================================================
// Report
// ============================================================================

/// Outcome of a differential check.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DifferentialReport {
    /// Number of generated cases.
    pub cases: usize,

    /// Number of (case, algorithm) runs.
    pub checks: usize,

    /// Every run whose trace did not replay to the reference sort.
    pub failures: Vec<DifferentialFailure>,
}

impl DifferentialReport {
    /// Whether every run passed.
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }
}

/// One failing run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DifferentialFailure {
    /// Algorithm under test.
    pub algorithm: Algorithm,

    /// Index of the generated case.
    pub case: usize,

    /// Length of the generated case.
    pub len: usize,

    /// First diverging position.
    pub position: usize,
}
