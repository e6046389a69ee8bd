//! Instrumented quick sort.
//!
//! ## Purpose
//!
//! Quick sort using the Lomuto partition scheme with the last element of each
//! range as pivot.
//!
//! ## Design notes
//!
//! * **Pivot comparisons**: Every element of the range is compared against the
//!   pivot position exactly once per partition.
//! * **Swaps**: A swap records the two resulting values; a swap of a position
//!   with itself is skipped and records nothing.
//! * **Stack depth**: The smaller side is sorted recursively and the larger
//!   side in a loop, bounding recursion depth at `O(log n)`.
//!
//! ## Invariants
//!
//! * Elements equal to the pivot go to the left side (`<=`), so an all-equal
//!   range produces comparisons and no updates.

// External dependencies
use num_traits::PrimInt;

// Internal dependencies
use super::swap;
use crate::primitives::sink::TraceSink;

/// Sort `data` ascending, reporting every comparison and write to `sink`.
pub fn sort<T: PrimInt, S: TraceSink<T>>(data: &mut [T], sink: &mut S) {
    if data.len() < 2 {
        return;
    }

    let hi = data.len() - 1;
    quick(data, 0, hi, sink);
}

fn quick<T: PrimInt, S: TraceSink<T>>(data: &mut [T], mut lo: usize, mut hi: usize, sink: &mut S) {
    while lo < hi {
        let p = partition(data, lo, hi, sink);

        if p - lo < hi - p {
            if p > lo {
                quick(data, lo, p - 1, sink);
            }
            lo = p + 1;
        } else {
            quick(data, p + 1, hi, sink);
            if p == lo {
                break;
            }
            hi = p - 1;
        }
    }
}

fn partition<T: PrimInt, S: TraceSink<T>>(data: &mut [T], lo: usize, hi: usize, sink: &mut S) -> usize {
    let pivot = data[hi];
    let mut store = lo;

    for j in lo..hi {
        sink.compare(j, hi);
        if data[j] <= pivot {
            swap(data, store, j, sink);
            store += 1;
        }
    }

    swap(data, store, hi, sink);
    store
}
