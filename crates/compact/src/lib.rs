//! Compact — in-place collapse of duplicate runs in sorted sequences.
//!
//! Every run of equal adjacent elements in the logical prefix of a sequence is
//! reduced to its first element, and the new logical length is returned.
//! Nothing is allocated; elements past the returned length are left stale.

pub mod compactor;
pub mod error;
pub mod ext;

pub use compactor::{compact, compact_slice, try_compact};
pub use error::{CompactError, Result};
pub use ext::{CompactExt, CompactVecExt};
