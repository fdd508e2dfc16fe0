use az::{Az, Cast};
use std::collections::BinaryHeap;
use std::ops::Rem;

use crate::float::kdtree::{Axis, KdTree};
use crate::float::result_collection::ResultCollection;
use crate::nearest_neighbour::NearestNeighbour;
use crate::traits::{Content, DistanceMetric, Index};

impl<A: Axis, T: Content, const K: usize, IDX: Index<T = IDX>> KdTree<A, T, K, IDX>
where
    usize: Cast<IDX>,
{
    /// Finds the nearest `qty` points to `query`, using the specified
    /// distance metric, pruning subtrees on the way down.
    ///
    /// At each node the near subtree (the one the insertion routing rule
    /// would pick for `query`) is searched first; the far subtree is only
    /// entered while the candidate set is not yet full, or while its
    /// splitting plane lies closer than the current worst candidate. A stored
    /// point at exactly zero distance is excluded, as is any entry beyond the
    /// `qty` nearest. Results are sorted by ascending distance.
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
    /// let nearest = tree.nearest_n::<SquaredEuclidean>(&[1.0, 2.0, 5.1], 1);
    ///
    /// assert_eq!(nearest.len(), 1);
    /// assert!((nearest[0].distance - 0.01f64).abs() < f64::EPSILON);
    /// assert_eq!(nearest[0].item, 100);
    /// ```
    #[inline]
    pub fn nearest_n<D>(&self, query: &[A; K], qty: usize) -> Vec<NearestNeighbour<A, T>>
    where
        D: DistanceMetric<A, K>,
    {
        if qty == 0 {
            return Vec::new();
        }

        let mut results: BinaryHeap<NearestNeighbour<A, T>> =
            ResultCollection::new_with_capacity(qty);

        self.nearest_n_recurse::<D>(query, self.root_index, 0, qty, &mut results);

        ResultCollection::into_sorted_vec(results)
    }

    fn nearest_n_recurse<D>(
        &self,
        query: &[A; K],
        curr_node_idx: IDX,
        split_dim: usize,
        qty: usize,
        results: &mut BinaryHeap<NearestNeighbour<A, T>>,
    ) where
        D: DistanceMetric<A, K>,
    {
        if curr_node_idx == <IDX as Index>::max() {
            return;
        }

        let node = &self.nodes[curr_node_idx.az::<usize>()];

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

        let [closer_node_idx, further_node_idx] = if query[split_dim] < node.point[split_dim] {
            [node.left, node.right]
        } else {
            [node.right, node.left]
        };
        let next_split_dim = (split_dim + 1).rem(K);

        self.nearest_n_recurse::<D>(query, closer_node_idx, next_split_dim, qty, results);

        // the far side can only hold a winner if the splitting plane itself
        // is closer than the worst candidate kept so far
        let plane_dist = D::dist1(query[split_dim], node.point[split_dim]);
        if results.max_dist(qty) > plane_dist {
            self.nearest_n_recurse::<D>(query, further_node_idx, next_split_dim, qty, results);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::float::distance::SquaredEuclidean;
    use crate::float::kdtree::{Axis, KdTree};
    use crate::traits::DistanceMetric;
    use rand::Rng;

    type AX = f32;

    #[test]
    fn can_query_nearest_n_items() {
        let mut tree: KdTree<AX, u32, 3, u32> = KdTree::new();

        let content_to_add: [([AX; 3], u32); 16] = [
            ([0.9f32, 0.0f32, 0.9f32], 9),
            ([0.4f32, 0.5f32, 0.4f32], 4),
            ([0.12f32, 0.3f32, 0.12f32], 12),
            ([0.7f32, 0.2f32, 0.7f32], 7),
            ([0.13f32, 0.4f32, 0.13f32], 13),
            ([0.6f32, 0.3f32, 0.6f32], 6),
            ([0.2f32, 0.7f32, 0.2f32], 2),
            ([0.14f32, 0.5f32, 0.14f32], 14),
            ([0.3f32, 0.6f32, 0.3f32], 3),
            ([0.10f32, 0.1f32, 0.10f32], 10),
            ([0.16f32, 0.7f32, 0.16f32], 16),
            ([0.1f32, 0.8f32, 0.1f32], 1),
            ([0.15f32, 0.6f32, 0.15f32], 15),
            ([0.5f32, 0.4f32, 0.5f32], 5),
            ([0.8f32, 0.1f32, 0.8f32], 8),
            ([0.11f32, 0.2f32, 0.11f32], 11),
        ];

        for (point, item) in content_to_add {
            tree.insert(&point, item);
        }

        assert_eq!(tree.size(), 16);

        let qty = 10;
        let mut rng = rand::thread_rng();
        for _i in 0..1000 {
            let query_point = [
                rng.gen_range(0f32..1f32),
                rng.gen_range(0f32..1f32),
                rng.gen_range(0f32..1f32),
            ];
            let expected = linear_search(&content_to_add, qty, &query_point);

            let result: Vec<_> = tree
                .nearest_n::<SquaredEuclidean>(&query_point, qty)
                .into_iter()
                .map(|n| (n.distance, n.item))
                .collect();

            let result_dists: Vec<_> = result.iter().map(|(d, _)| d).collect();
            let expected_dists: Vec<_> = expected.iter().map(|(d, _)| d).collect();

            assert_eq!(result_dists, expected_dists);
        }
    }

    #[test]
    fn can_query_nearest_10_items_large_scale() {
        const TREE_SIZE: usize = 100_000;
        const NUM_QUERIES: usize = 100;
        const N: usize = 10;

        let content_to_add: Vec<([f32; 3], u32)> = (0..TREE_SIZE)
            .map(|_| rand::random::<([f32; 3], u32)>())
            .collect();

        let mut tree: KdTree<AX, u32, 3, u32> = KdTree::with_capacity(TREE_SIZE);
        content_to_add
            .iter()
            .for_each(|(point, content)| {
                tree.insert(point, *content);
            });

        let query_points: Vec<[f32; 3]> = (0..NUM_QUERIES)
            .map(|_| rand::random::<[f32; 3]>())
            .collect();

        for query_point in query_points {
            let expected = linear_search(&content_to_add, N, &query_point);

            let result: Vec<_> = tree
                .nearest_n::<SquaredEuclidean>(&query_point, N)
                .into_iter()
                .map(|n| (n.distance, n.item))
                .collect();

            let result_dists: Vec<_> = result.iter().map(|(d, _)| d).collect();
            let expected_dists: Vec<_> = expected.iter().map(|(d, _)| d).collect();

            assert_eq!(result_dists, expected_dists);
        }
    }

    #[test]
    fn excludes_the_query_point_itself() {
        let mut tree: KdTree<f64, u32, 3, u32> = KdTree::new();
        tree.insert(&[0.0, 0.0, 0.0], 1);
        tree.insert(&[1.0, 0.0, 0.0], 2);
        tree.insert(&[0.0, 1.0, 0.0], 3);
        tree.insert(&[5.0, 5.0, 5.0], 4);

        let mut result: Vec<_> = tree
            .nearest_n::<SquaredEuclidean>(&[0.0, 0.0, 0.0], 2)
            .into_iter()
            .map(|n| n.item)
            .collect();
        result.sort();
        assert_eq!(result, vec![2, 3]);
    }

    #[test]
    fn empty_tree_returns_no_neighbours() {
        let tree: KdTree<f64, u32, 3, u32> = KdTree::new();

        assert!(tree
            .nearest_n::<SquaredEuclidean>(&[0.0, 0.0, 0.0], 5)
            .is_empty());
    }

    #[test]
    fn qty_zero_returns_no_neighbours() {
        let mut tree: KdTree<f64, u32, 3, u32> = KdTree::new();
        tree.insert(&[1.0, 1.0, 1.0], 1);

        assert!(tree
            .nearest_n::<SquaredEuclidean>(&[0.0, 0.0, 0.0], 0)
            .is_empty());
    }

    fn linear_search<A: Axis, const K: usize>(
        content: &[([A; K], u32)],
        qty: usize,
        query_point: &[A; K],
    ) -> Vec<(A, u32)> {
        let mut results = vec![];

        for &(p, item) in content {
            let dist = SquaredEuclidean::dist(query_point, &p);
            if dist <= A::zero() {
                continue;
            }
            if results.len() < qty {
                results.push((dist, item));
                results.sort_by(|(a_dist, _), (b_dist, _)| a_dist.partial_cmp(b_dist).unwrap());
            } else if dist < results[qty - 1].0 {
                results[qty - 1] = (dist, item);
                results.sort_by(|(a_dist, _), (b_dist, _)| a_dist.partial_cmp(b_dist).unwrap());
            }
        }

        results
    }
}
