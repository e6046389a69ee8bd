//! Instrumented insertion sort.
//!
//! Shifting variant: the key is lifted out, larger elements slide one slot
//! right (one `Update` each), and the key is written into the hole. Each test
//! of a candidate against the key emits one `Compare` between the candidate
//! and the hole. A key that never moves is not rewritten.

// External dependencies
use num_traits::PrimInt;

// Internal dependencies
use crate::primitives::sink::TraceSink;

/// Sort `data` ascending, reporting every comparison and write to `sink`.
pub fn sort<T: PrimInt, S: TraceSink<T>>(data: &mut [T], sink: &mut S) {
    for i in 1..data.len() {
        let key = data[i];
        let mut hole = i;

        while hole > 0 {
            sink.compare(hole - 1, hole);
            if data[hole - 1] <= key {
                break;
            }
            data[hole] = data[hole - 1];
            sink.update(hole, data[hole]);
            hole -= 1;
        }

        if hole != i {
            data[hole] = key;
            sink.update(hole, key);
        }
    }
}
