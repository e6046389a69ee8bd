//! Instrumented selection sort.
//!
//! Every pass compares each remaining position against the running minimum,
//! so an array of `n` elements always produces `n (n - 1) / 2` comparisons.
//! The minimum is swapped into place only when it is not already there.

// External dependencies
use num_traits::PrimInt;

// Internal dependencies
use super::swap;
use crate::primitives::sink::TraceSink;

/// Sort `data` ascending, reporting every comparison and write to `sink`.
pub fn sort<T: PrimInt, S: TraceSink<T>>(data: &mut [T], sink: &mut S) {
    let n = data.len();

    for i in 0..n.saturating_sub(1) {
        let mut min = i;
        for j in i + 1..n {
            sink.compare(j, min);
            if data[j] < data[min] {
                min = j;
            }
        }
        swap(data, i, min, sink);
    }
}
