//! # xyztree
//!
//! `xyztree` is a Rust library for static 3-d trees: a binary space partition
//! over a set of labeled points in R^3, built once and then queried read-only
//! for nearest neighbors under a choice of distance metrics.
//!
//! ## Features
//!
//! - **Balanced construction**: recursive median splits along the widest axis,
//!   stored as a flat pre-order node list without parent pointers.
//! - **Metric choice**: nearest-neighbor queries under the Euclidean, Manhattan
//!   or Chebyshev (Max) metric.
//! - **Deterministic builds**: explicit tie-break rules make the tree identical
//!   across runs for the same input.
//! - **JSON persistence**: export a built tree to JSON (compact or indented)
//!   and import it back with full round-trip fidelity.
//!
//! ## Example
//!
//! ```
//! use xyztree::{PointSet, Tree};
//!
//! let mut points = PointSet::new();
//! points.insert("A".to_string(), [0.0, 0.0, 0.0]);
//! points.insert("B".to_string(), [1.0, 1.0, 1.0]);
//! points.insert("C".to_string(), [5.0, 5.0, 5.0]);
//!
//! let tree = Tree::build(&points).unwrap();
//! let nearest = tree.nearest_by_name(&[0.1, 0.1, 0.1], "Euclidean").unwrap();
//! assert_eq!(nearest.key, "A");
//! ```
//!
//! ## Main Interface
//!
//! The primary entry point is the [`Tree`] struct, which owns the node list and
//! exposes build, search and persistence operations.

mod error;
mod export;
mod metric;
mod partition;
mod search;
mod tree;

pub use error::Error;
pub use metric::Metric;
pub use tree::Node;
pub use tree::Point;
pub use tree::PointSet;
pub use tree::Tree;
