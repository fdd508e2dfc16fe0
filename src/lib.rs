#![warn(rustdoc::missing_crate_level_docs)]
#![deny(rustdoc::invalid_codeblock_attributes)]
#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::private_intra_doc_links)]

//! # kdspace
//!
//! A dynamic, arena-backed k-d tree for k-nearest-neighbour queries.
//!
//! Unlike bulk-loaded spatial indexes, this tree is fully mutable: points can
//! be inserted and removed at any time, with vacated arena slots recycled by
//! later insertions. Coordinate-wise duplicate points are rejected on insert,
//! membership can be tested exactly, and the stored points can be walked in
//! pre-, in- or post-order. Two k-nearest-neighbour searches are provided: a
//! branch-and-bound search that prunes subtrees using the splitting-plane
//! distance, and an exhaustive scan with identical result semantics that
//! serves as its oracle.
//!
//! Queries never return a stored point that is at exactly zero distance from
//! the query point: querying with a stored point's own co-ordinates yields
//! its neighbours, not itself.
//!
//! ## Installation
//!
//! Add `kdspace` to `Cargo.toml`
//! ```toml
//! [dependencies]
//! kdspace = "0.3"
//! ```
//!
//! ## Usage
//! ```rust
//! use kdspace::float::distance::SquaredEuclidean;
//! use kdspace::KdTree;
//!
//! let a: ([f64; 3], u64) = ([0f64, 0f64, 0f64], 0);
//! let b: ([f64; 3], u64) = ([1f64, 0f64, 0f64], 1);
//! let c: ([f64; 3], u64) = ([0f64, 1f64, 0f64], 2);
//! let d: ([f64; 3], u64) = ([5f64, 5f64, 5f64], 3);
//!
//! let mut tree: KdTree<f64, 3> = KdTree::new();
//!
//! tree.insert(&a.0, a.1);
//! tree.insert(&b.0, b.1);
//! tree.insert(&c.0, c.1);
//! tree.insert(&d.0, d.1);
//!
//! assert_eq!(tree.size(), 4);
//!
//! let mut nearest: Vec<_> = tree
//!     .nearest_n::<SquaredEuclidean>(&a.0, 2)
//!     .into_iter()
//!     .map(|n| n.item)
//!     .collect();
//! nearest.sort();
//!
//! // the query point itself is excluded from its own neighbour list
//! assert_eq!(nearest, vec![1, 2]);
//! ```

pub mod float;
pub mod nearest_neighbour;
#[doc(hidden)]
#[cfg(feature = "test_utils")]
pub mod test_utils;
pub mod traits;

pub use crate::float::distance::{Manhattan, SquaredEuclidean};
pub use crate::float::traverse::TraversalOrder;
pub use crate::nearest_neighbour::NearestNeighbour;
pub use crate::traits::DistanceMetric;

/// A convenient alias for the [`float::kdtree::KdTree`] with `u64` items and
/// `u32` arena indices.
pub type KdTree<A, const K: usize> = float::kdtree::KdTree<A, u64, K, u32>;
