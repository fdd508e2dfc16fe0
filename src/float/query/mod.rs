//! Nearest-neighbour queries over the tree.
//!
//! All variants measure distances with a caller-chosen [`DistanceMetric`](crate::traits::DistanceMetric)
//! and share the same candidate semantics: a stored point at exactly zero
//! distance from the query is taken to be the query point itself and is never
//! returned as its own neighbour.

pub mod nearest_n;
pub mod nearest_n_naive;
pub mod nearest_one;
