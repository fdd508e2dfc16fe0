//! Definitions and implementations for the traits that are shared between the tree
//! itself and its query implementations
use az::Cast;
use num_traits::{PrimInt, Unsigned, Zero};
use std::fmt::Debug;

/// Content trait.
///
/// Must be implemented by any type that you want to use to represent the identity
/// of a point stored in a [`KdTree`](crate::float::kdtree::KdTree). Generally this
/// will be `usize`, `u32`, or for trees with fewer than 65536 points, a `u16`.
/// All of these implement `Content` with no extra changes. Start off with `usize`
/// as that's easiest since you won't need to cast to / from `usize` when using
/// query results to index into a `Vec`. Any type satisfying these bounds may be
/// used; the tree never fabricates values of `T` itself.
pub trait Content: PartialEq + Default + Clone + Copy + Ord + Debug + Sync + Send {}
impl<T: PartialEq + Default + Clone + Copy + Ord + Debug + Sync + Send> Content for T {}

/// Implemented on u16 and u32 so that they can be used internally to index the
/// arena `Vec` of tree nodes.
///
/// Allows `u32` or `u16` to be used as the 4th generic parameter of
/// [`float::kdtree::KdTree`](crate::float::kdtree::KdTree). If you will be storing
/// fewer than ~65k points in the tree, selecting `u16` halves the footprint of the
/// child links inside each node, keeping more of the tree in the CPU cache.
///
/// `Index::max()` doubles as the null-child sentinel, so a tree indexed by `IDX`
/// can hold at most `IDX::max() - 1` nodes.
pub trait Index: PrimInt + Unsigned + Zero + Cast<usize> + Sync {
    #[doc(hidden)]
    type T: Cast<usize>;
    #[doc(hidden)]
    fn max() -> Self;
    #[doc(hidden)]
    fn min() -> Self;
}

impl Index for u32 {
    type T = u32;
    fn max() -> u32 {
        u32::MAX
    }
    fn min() -> u32 {
        0u32
    }
}

impl Index for u16 {
    type T = u16;
    fn max() -> u16 {
        u16::MAX
    }
    fn min() -> u16 {
        0u16
    }
}

/// Trait that needs to be implemented by any potential distance
/// metric to be used within queries
pub trait DistanceMetric<A, const K: usize> {
    /// returns the distance between two K-d points, as measured
    /// by a particular distance metric
    fn dist(a: &[A; K], b: &[A; K]) -> A;

    /// returns the distance between two points along a single axis,
    /// as measured by a particular distance metric.
    ///
    /// (needs to be implemented as it is used by the NN query implementations
    /// to measure the distance from the query point to a node's splitting
    /// plane when deciding whether the far subtree can be pruned)
    fn dist1(a: A, b: A) -> A;
}

#[cfg(test)]
mod tests {
    use crate::traits::Index;

    #[test]
    fn test_u16() {
        assert_eq!(<u16 as Index>::max(), u16::MAX);
        assert_eq!(<u16 as Index>::min(), 0u16);
    }

    #[test]
    fn test_u32() {
        assert_eq!(<u32 as Index>::max(), u32::MAX);
        assert_eq!(<u32 as Index>::min(), 0u32);
    }
}
