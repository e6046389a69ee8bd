//! Instrumented heap sort.
//!
//! ## Purpose
//!
//! In-place heap sort: builds a max-heap bottom-up, then repeatedly swaps the
//! root to the end of the shrinking heap and restores the heap property.
//!
//! ## Design notes
//!
//! * **Sift-down**: Each level compares the left child, then the right child
//!   (when present), against the current largest candidate.
//! * **Both phases**: Heap construction and extraction are instrumented the
//!   same way.
//!
//! ## Invariants
//!
//! * One `Compare` per parent/child comparison, two `Update`s per swap.

// External dependencies
use num_traits::PrimInt;

// Internal dependencies
use super::swap;
use crate::primitives::sink::TraceSink;

/// Sort `data` ascending, reporting every comparison and write to `sink`.
pub fn sort<T: PrimInt, S: TraceSink<T>>(data: &mut [T], sink: &mut S) {
    let n = data.len();
    if n < 2 {
        return;
    }

    for root in (0..n / 2).rev() {
        sift_down(data, root, n, sink);
    }

    for end in (1..n).rev() {
        swap(data, 0, end, sink);
        sift_down(data, 0, end, sink);
    }
}

fn sift_down<T: PrimInt, S: TraceSink<T>>(data: &mut [T], mut root: usize, len: usize, sink: &mut S) {
    loop {
        let left = 2 * root + 1;
        if left >= len {
            return;
        }

        let mut largest = root;

        sink.compare(left, largest);
        if data[left] > data[largest] {
            largest = left;
        }

        let right = left + 1;
        if right < len {
            sink.compare(right, largest);
            if data[right] > data[largest] {
                largest = right;
            }
        }

        if largest == root {
            return;
        }

        swap(data, root, largest, sink);
        root = largest;
    }
}
