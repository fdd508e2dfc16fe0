use az::{Az, Cast};
use std::ops::Rem;

use crate::float::kdtree::{Axis, KdTree};
use crate::nearest_neighbour::NearestNeighbour;
use crate::traits::{Content, DistanceMetric, Index};

impl<A: Axis, T: Content, const K: usize, IDX: Index<T = IDX>> KdTree<A, T, K, IDX>
where
    usize: Cast<IDX>,
{
    /// Finds the single nearest point to `query`, using the specified
    /// distance metric.
    ///
    /// Returns `None` for an empty tree, or when the only stored point sits
    /// at exactly zero distance from the query (a point is never its own
    /// nearest neighbour). Cheaper than `nearest_n(query, 1)` as no
    /// candidate collection is maintained.
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
    /// let nearest = tree.nearest_one::<SquaredEuclidean>(&[1.0, 2.0, 5.1]).unwrap();
    ///
    /// assert!((nearest.distance - 0.01f64).abs() < f64::EPSILON);
    /// assert_eq!(nearest.item, 100);
    /// ```
    #[inline]
    pub fn nearest_one<D>(&self, query: &[A; K]) -> Option<NearestNeighbour<A, T>>
    where
        D: DistanceMetric<A, K>,
    {
        let mut best: Option<NearestNeighbour<A, T>> = None;
        self.nearest_one_recurse::<D>(query, self.root_index, 0, &mut best);
        best
    }

    fn nearest_one_recurse<D>(
        &self,
        query: &[A; K],
        curr_node_idx: IDX,
        split_dim: usize,
        best: &mut Option<NearestNeighbour<A, T>>,
    ) where
        D: DistanceMetric<A, K>,
    {
        if curr_node_idx == <IDX as Index>::max() {
            return;
        }

        let node = &self.nodes[curr_node_idx.az::<usize>()];

        let distance = D::dist(query, &node.point);
        if distance > A::zero() && best.map_or(true, |b| distance < b.distance) {
            *best = Some(NearestNeighbour {
                distance,
                item: node.item,
            });
        }

        let [closer_node_idx, further_node_idx] = if query[split_dim] < node.point[split_dim] {
            [node.left, node.right]
        } else {
            [node.right, node.left]
        };
        let next_split_dim = (split_dim + 1).rem(K);

        self.nearest_one_recurse::<D>(query, closer_node_idx, next_split_dim, best);

        let plane_dist = D::dist1(query[split_dim], node.point[split_dim]);
        if best.map_or(A::infinity(), |b| b.distance) > plane_dist {
            self.nearest_one_recurse::<D>(query, further_node_idx, next_split_dim, best);
        }
    }
}
