//! Instrumented merge sort.
//!
//! ## Purpose
//!
//! Top-down merge sort that stages each merge through a temporary buffer and
//! writes the merged run back into the working array.
//!
//! ## Design notes
//!
//! * **Buffered merge**: The run `[lo, hi)` is copied into the buffer, then
//!   every output position is rewritten from the buffer in order.
//! * **Drain writes**: Elements copied after one side is exhausted were never
//!   compared, but they are still written and still recorded.
//! * **Padding**: With padding enabled, each drain write is preceded by a
//!   sentinel update so that every element moved costs exactly two trace
//!   slots (compare + update, or placeholder + update).
//!
//! ## Invariants
//!
//! * One `Compare` per candidate comparison, one `Update` per output write.
//! * Compared positions are the original positions of both candidates.
//! * Without padding the trace holds no sentinel updates.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::PrimInt;

// Internal dependencies
use crate::primitives::sink::TraceSink;

/// Sort `data` ascending, reporting every comparison and write to `sink`.
pub fn sort<T: PrimInt, S: TraceSink<T>>(data: &mut [T], sink: &mut S, padding: bool) {
    let n = data.len();
    if n < 2 {
        return;
    }

    let mut buffer: Vec<T> = data.to_vec();
    split(data, &mut buffer, 0, n, sink, padding);
}

fn split<T: PrimInt, S: TraceSink<T>>(
    data: &mut [T],
    buffer: &mut [T],
    lo: usize,
    hi: usize,
    sink: &mut S,
    padding: bool,
) {
    if hi - lo < 2 {
        return;
    }

    let mid = lo + (hi - lo) / 2;
    split(data, buffer, lo, mid, sink, padding);
    split(data, buffer, mid, hi, sink, padding);
    merge(data, buffer, lo, mid, hi, sink, padding);
}

fn merge<T: PrimInt, S: TraceSink<T>>(
    data: &mut [T],
    buffer: &mut [T],
    lo: usize,
    mid: usize,
    hi: usize,
    sink: &mut S,
    padding: bool,
) {
    buffer[lo..hi].copy_from_slice(&data[lo..hi]);

    let (mut i, mut j, mut k) = (lo, mid, lo);

    while i < mid && j < hi {
        sink.compare(i, j);
        let next = if buffer[i] <= buffer[j] {
            i += 1;
            buffer[i - 1]
        } else {
            j += 1;
            buffer[j - 1]
        };
        data[k] = next;
        sink.update(k, next);
        k += 1;
    }

    // Drain whichever half remains.
    for &value in buffer[i..mid].iter().chain(buffer[j..hi].iter()) {
        if padding {
            sink.placeholder(value);
        }
        data[k] = value;
        sink.update(k, value);
        k += 1;
    }
}
