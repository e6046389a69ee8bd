//! Instrumented cycle sort.
//!
//! ## Purpose
//!
//! Cycle sort writes every element directly into its final position, which
//! makes it the write-minimal algorithm of the set.
//!
//! ## Design notes
//!
//! * **Held item**: The element being placed lives outside the array while its
//!   cycle rotates. The cycle's start slot keeps a stale value until the
//!   rotation closes, so scan comparisons are reported against the start slot.
//! * **Position scan**: Every scan comparison is recorded, including scans that
//!   end up moving nothing.
//! * **Duplicate skip**: Landing on a slot that already holds an equal value is
//!   the only non-committal probe; each skip is recorded as one sentinel
//!   update carrying the held value.
//!
//! ## Invariants
//!
//! * Every real write is recorded as exactly one `Update`.
//! * A rotation that returns to its start ends with the write into the start
//!   slot and no trailing sentinel.

// External dependencies
use num_traits::PrimInt;

// Internal dependencies
use crate::primitives::sink::TraceSink;

/// Sort `data` ascending, reporting every comparison and write to `sink`.
pub fn sort<T: PrimInt, S: TraceSink<T>>(data: &mut [T], sink: &mut S) {
    let n = data.len();

    for start in 0..n.saturating_sub(1) {
        let mut item = data[start];

        let mut pos = scan(data, start, item, sink);
        if pos == start {
            continue;
        }
        pos = skip_equal(data, start, pos, item, sink);
        item = place(data, pos, item, sink);

        while pos != start {
            pos = scan(data, start, item, sink);
            pos = skip_equal(data, start, pos, item, sink);
            item = place(data, pos, item, sink);
        }
    }
}

/// Count the elements after `start` that are smaller than `item`.
fn scan<T: PrimInt, S: TraceSink<T>>(data: &[T], start: usize, item: T, sink: &mut S) -> usize {
    let mut pos = start;
    for i in start + 1..data.len() {
        sink.compare(i, start);
        if data[i] < item {
            pos += 1;
        }
    }
    pos
}

/// Advance past slots that already hold a value equal to `item`.
fn skip_equal<T: PrimInt, S: TraceSink<T>>(
    data: &[T],
    start: usize,
    mut pos: usize,
    item: T,
    sink: &mut S,
) -> usize {
    loop {
        sink.compare(pos, start);
        if data[pos] != item {
            return pos;
        }
        sink.placeholder(item);
        pos += 1;
    }
}

/// Write `item` into `pos` and return the value it displaced.
#[inline]
fn place<T: PrimInt, S: TraceSink<T>>(data: &mut [T], pos: usize, item: T, sink: &mut S) -> T {
    let displaced = data[pos];
    data[pos] = item;
    sink.update(pos, item);
    displaced
}
