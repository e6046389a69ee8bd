//! Instrumented bubble sort.
//!
//! Adjacent pairs are compared left to right. After each pass the unsorted
//! bound shrinks to the position of the last swap, which also ends the sort
//! as soon as a pass performs no swap.

// External dependencies
use num_traits::PrimInt;

// Internal dependencies
use super::swap;
use crate::primitives::sink::TraceSink;

/// Sort `data` ascending, reporting every comparison and write to `sink`.
pub fn sort<T: PrimInt, S: TraceSink<T>>(data: &mut [T], sink: &mut S) {
    let mut end = data.len();

    while end > 1 {
        let mut last_swap = 0;
        for j in 1..end {
            sink.compare(j - 1, j);
            if data[j - 1] > data[j] {
                swap(data, j - 1, j, sink);
                last_swap = j;
            }
        }
        end = last_swap;
    }
}
