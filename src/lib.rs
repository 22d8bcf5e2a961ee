//! An AVL tree augmented with subtree occurrence counts, providing O(log n)
//! order-statistic (rank / select) queries over a multiset of values.
//!
//! Duplicate values are collapsed into a single node carrying an occurrence
//! count, so the tree height is bounded by the number of *distinct* values,
//! while rank queries count every occurrence individually.
//!
//! ```
//! use osavl::OrderStatisticTree;
//!
//! let mut t = OrderStatisticTree::new();
//! t.extend([5, 1, 5, 3]);
//!
//! // Occurrences in ascending order: 1, 3, 5, 5
//! assert_eq!(t.select(2), Ok(&5));
//! assert_eq!(t.len(), 4);
//!
//! assert!(t.remove(&5));
//! assert_eq!(t.select(2), Ok(&5));
//! assert!(t.select(3).is_err());
//! ```
//!
//! A [`RunningMedian`] maintains the median of a stream of integers on top of
//! the tree.

#![deny(rustdoc::broken_intra_doc_links, rust_2018_idioms)]
#![warn(
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::explicit_iter_loop,
    clippy::todo,
    clippy::use_self,
    missing_debug_implementations,
    unused_crate_dependencies
)]

mod compare;
mod error;
mod median;
mod node;
mod tree;


pub use compare::{ByLess, Comparator, Natural};
pub use error::OutOfRange;
pub use median::{running_medians, RunningMedian};
pub use tree::OrderStatisticTree;

// Dependencies used only by the benchmarks.
#[cfg(test)]
use criterion as _;
#[cfg(test)]
use paste as _;
