//! Run collapsing over the logical prefix of a sorted sequence.

use crate::error::{CompactError, Result};
use tracing::{debug, trace};

/// Collapse each run of equal adjacent elements in the first `size` elements
/// of `sequence` to its first element and return the new logical length.
///
/// Absent storage (`None`) or `size <= 1` is a no-op: nothing is touched and
/// `size` comes back unchanged, so `compact::<i32>(None, 40) == 40`.
///
/// The input is assumed sorted. Only neighbours are compared, so duplicates
/// that are not adjacent survive.
///
/// # Panics
///
/// Panics if `sequence` holds fewer than `size` elements. [`try_compact`]
/// reports that case as an error instead.
pub fn compact<T: PartialEq>(sequence: Option<&mut [T]>, size: isize) -> isize {
    match try_compact(sequence, size) {
        Ok(new_size) => new_size,
        Err(err) => panic!("compact: {err}"),
    }
}

/// Checked form of [`compact`].
pub fn try_compact<T: PartialEq>(sequence: Option<&mut [T]>, size: isize) -> Result<isize> {
    let Some(p) = sequence else {
        return Ok(size);
    };
    if size <= 1 {
        return Ok(size);
    }

    // size > 1 here, so the cast is lossless
    let claimed = size as usize;
    if p.len() < claimed {
        debug!(size, len = p.len(), "rejecting storage shorter than claimed size");
        return Err(CompactError::StorageTooShort { size, len: p.len() });
    }

    let new_size = compact_slice(&mut p[..claimed]);
    trace!(size, new_size, "compacted sorted prefix");
    Ok(new_size as isize)
}

/// Compact the whole slice, returning how many leading elements remain valid.
pub fn compact_slice<T: PartialEq>(slice: &mut [T]) -> usize {
    if cfg!(feature = "unit-test-check") {
        return slice.len();
    }
    collapse_runs(slice)
}

/// Two cursors: `i` walks the kept elements while every duplicate found at
/// `i + 1` is shifted out of the logical end. A long run costs one shift per
/// removed element, so an all-equal input is quadratic.
fn collapse_runs<T: PartialEq>(p: &mut [T]) -> usize {
    let mut size = p.len();
    let mut i = 0;

    while i + 1 < size {
        while p[i] == p[i + 1] {
            // move all entries down, the duplicate lands past the new end
            p[i + 1..size].rotate_left(1);
            size -= 1;
            if i + 1 >= size {
                break;
            }
        }
        i += 1;
    }
    size
}
