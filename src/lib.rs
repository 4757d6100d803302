//! Ordered sets backed by an unbalanced binary search tree.
//!
//! This crate provides [`TreeSet`], an ordered set whose elements are kept in a plain binary search
//! tree ordered by a pluggable [`Compare`] implementation:
//!
//! - [`add`](TreeSet::add) / [`del`](TreeSet::del) / [`contains`](TreeSet::contains) - walk from the
//!   root, O(depth)
//! - [`begin`](TreeSet::begin) / [`end`](TreeSet::end) - stack-based in-order [`Cursor`]s
//! - [`plus`](TreeSet::plus) / [`intersect`](TreeSet::intersect) / [`minus`](TreeSet::minus) - set
//!   algebra producing new sets
//! - [`Display`](core::fmt::Display) - renders as `[1,2,3]`
//!
//! # Example
//!
//! ```
//! use treeset::{Descending, TreeSet};
//!
//! let mut set = TreeSet::new();
//! for value in [4, 1, 3, 2] {
//!     set.add(value);
//! }
//! assert_eq!(set.to_string(), "[1,2,3,4]");
//!
//! let reversed: TreeSet<_, Descending> = set.iter().copied().collect();
//! assert_eq!(reversed.to_string(), "[4,3,2,1]");
//!
//! let other = TreeSet::from([1, 2, 5]);
//! assert_eq!(set.intersect(&other).to_string(), "[1,2]");
//! assert_eq!(set.minus(&other).to_string(), "[3,4]");
//! ```
//!
//! # Implementation
//!
//! The tree is never rebalanced: there are no rotations and no height bookkeeping, so adversarial
//! insertion orders give O(n) operations. Nodes live in an arena and are addressed by index, which lets
//! cursors hold plain handles into the tree they borrow. Deleting a node hangs its left subtree under
//! the leftmost node of its right subtree instead of swapping in a successor value.
//!
//! In debug builds every successful `add` or `del` re-checks the whole tree's ordering and panics on
//! a violation.

#![no_std]
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod raw;

pub mod compare;
pub mod render;
pub mod tree_set;

pub use compare::{Ascending, ByLess, Compare, Descending};
pub use tree_set::TreeSet;
