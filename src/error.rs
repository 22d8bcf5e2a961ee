use thiserror::Error;

/// The requested rank does not address an element of the tree.
///
/// Returned by [`OrderStatisticTree::select()`] when `rank >= len`.
///
/// [`OrderStatisticTree::select()`]: crate::OrderStatisticTree::select
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("rank {rank} is out of range for a tree containing {len} elements")]
pub struct OutOfRange {
    /// The 0-based rank that was requested.
    pub rank: usize,
    /// The number of elements in the tree at the time of the query.
    pub len: usize,
}
