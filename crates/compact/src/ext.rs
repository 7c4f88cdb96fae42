//! Method-call forms of [`compact_slice`] for slices and vectors.

use crate::compactor::compact_slice;

/// Compact a sorted slice in place.
pub trait CompactExt {
    /// Collapse duplicate runs and return the new logical length. Elements
    /// past that length are unspecified.
    fn compact_sorted(&mut self) -> usize;
}

impl<T: PartialEq> CompactExt for [T] {
    fn compact_sorted(&mut self) -> usize {
        compact_slice(self)
    }
}

/// Compact a sorted vector and drop the stale tail.
pub trait CompactVecExt {
    /// Collapse duplicate runs, then truncate to the new length. Capacity is
    /// left as is.
    fn compact_sorted_in_place(&mut self) -> usize;
}

impl<T: PartialEq> CompactVecExt for Vec<T> {
    fn compact_sorted_in_place(&mut self) -> usize {
        let new_len = compact_slice(self.as_mut_slice());
        self.truncate(new_len);
        new_len
    }
}
