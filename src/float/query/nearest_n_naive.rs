use az::{Az, Cast};
use sorted_vec::SortedVec;

use crate::float::kdtree::{Axis, KdTree};
use crate::float::result_collection::ResultCollection;
use crate::nearest_neighbour::NearestNeighbour;
use crate::traits::{Content, DistanceMetric, Index};

impl<A: Axis, T: Content, const K: usize, IDX: Index<T = IDX>> KdTree<A, T, K, IDX>
where
    usize: Cast<IDX>,
{
    /// Finds the nearest `qty` points to `query` by exhaustively visiting
    /// every stored point.
    ///
    /// Candidate semantics are identical to [`nearest_n`](KdTree::nearest_n):
    /// zero-distance points are excluded, boundary ties keep the
    /// earlier-visited point, and results come back sorted by ascending
    /// distance. Costs O(n·log qty) regardless of tree shape; it exists as
    /// the oracle the pruned search is checked against, and as the safer
    /// choice for pathologically-shaped trees.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kdspace::float::distance::SquaredEuclidean;
    /// use kdspace::KdTree;
    ///
    /// let mut tree: KdTree<f64, 3> = KdTree::new();
    /// tree.insert(&[1.0, 2.0, 5.0], 100);
    /// tree.insert(&[2.0, 3.0, 6.0], 101);
    ///
    /// let nearest = tree.nearest_n_naive::<SquaredEuclidean>(&[1.0, 2.0, 5.1], 1);
    ///
    /// assert_eq!(nearest.len(), 1);
    /// assert_eq!(nearest[0].item, 100);
    /// ```
    #[inline]
    pub fn nearest_n_naive<D>(&self, query: &[A; K], qty: usize) -> Vec<NearestNeighbour<A, T>>
    where
        D: DistanceMetric<A, K>,
    {
        if qty == 0 {
            return Vec::new();
        }

        let mut results: SortedVec<NearestNeighbour<A, T>> =
            ResultCollection::new_with_capacity(qty);

        self.nearest_n_naive_recurse::<D>(query, self.root_index, qty, &mut results);

        ResultCollection::into_sorted_vec(results)
    }

    fn nearest_n_naive_recurse<D>(
        &self,
        query: &[A; K],
        curr_node_idx: IDX,
        qty: usize,
        results: &mut SortedVec<NearestNeighbour<A, T>>,
    ) where
        D: DistanceMetric<A, K>,
    {
        if curr_node_idx == <IDX as Index>::max() {
            return;
        }

        let node = &self.nodes[curr_node_idx.az::<usize>()];

        self.nearest_n_naive_recurse::<D>(query, node.left, qty, results);

        let distance = D::dist(query, &node.point);
        if distance > A::zero() {
            results.add(
                NearestNeighbour {
                    distance,
                    item: node.item,
                },
                qty,
            );
        }

        self.nearest_n_naive_recurse::<D>(query, node.right, qty, results);
    }
}
