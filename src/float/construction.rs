use az::{Az, Cast};
use std::ops::Rem;

#[cfg(feature = "tracing")]
use tracing::{event, Level};

use crate::float::kdtree::{Axis, KdTree};
use crate::traits::{Content, Index};

impl<A: Axis, T: Content, const K: usize, IDX: Index<T = IDX>> KdTree<A, T, K, IDX>
where
    usize: Cast<IDX>,
{
    /// Adds a point to the tree, descending by the cycling-axis rule until an
    /// empty child slot is found.
    ///
    /// Returns `false`, leaving the tree untouched, if a coordinate-wise equal
    /// point is already stored (the item is not consulted: two points that
    /// agree on every axis are the same point). Returns `true` otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kdspace::KdTree;
    ///
    /// let mut tree: KdTree<f64, 3> = KdTree::new();
    ///
    /// assert!(tree.insert(&[1.0, 2.0, 5.0], 100));
    /// assert!(!tree.insert(&[1.0, 2.0, 5.0], 101));
    ///
    /// assert_eq!(tree.size(), 1);
    /// ```
    #[inline]
    pub fn insert(&mut self, query: &[A; K], item: T) -> bool {
        if self.contains(query) {
            return false;
        }

        let new_idx = self.alloc_node(query, item);

        if self.root_index == <IDX as Index>::max() {
            self.root_index = new_idx;
        } else {
            let mut idx = self.root_index;
            let mut split_dim = 0;

            loop {
                let node = &self.nodes[idx.az::<usize>()];
                let go_left = query[split_dim] < node.point[split_dim];
                let next = if go_left { node.left } else { node.right };

                if next == <IDX as Index>::max() {
                    let node = &mut self.nodes[idx.az::<usize>()];
                    if go_left {
                        node.left = new_idx;
                    } else {
                        node.right = new_idx;
                    }
                    break;
                }

                idx = next;
                split_dim = (split_dim + 1).rem(K);
            }
        }

        self.size += 1;
        #[cfg(feature = "tracing")]
        event!(Level::TRACE, size = self.size, "inserted point");
        true
    }

    /// Tests whether a coordinate-wise equal point is stored in the tree.
    ///
    /// Routing follows the single splitting axis at each depth, but a match is
    /// only declared on equality across all `K` axes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kdspace::KdTree;
    ///
    /// let mut tree: KdTree<f64, 3> = KdTree::new();
    /// tree.insert(&[1.0, 2.0, 5.0], 100);
    ///
    /// assert!(tree.contains(&[1.0, 2.0, 5.0]));
    /// assert!(!tree.contains(&[1.0, 2.0, 5.1]));
    /// ```
    #[inline]
    pub fn contains(&self, query: &[A; K]) -> bool {
        let mut idx = self.root_index;
        let mut split_dim = 0;

        while idx != <IDX as Index>::max() {
            let node = &self.nodes[idx.az::<usize>()];

            if node.point == *query {
                return true;
            }

            idx = if query[split_dim] < node.point[split_dim] {
                node.left
            } else {
                node.right
            };
            split_dim = (split_dim + 1).rem(K);
        }

        false
    }

    /// Removes the point that is coordinate-wise equal to `query`.
    ///
    /// Returns `false` without mutating the tree when no such point is stored.
    /// Removal preserves the k-d partition invariant: a node with descendants
    /// is replaced by the minimum point along its own splitting axis taken
    /// from its right subtree (or, lacking one, from its left subtree, whose
    /// remainder is then re-hung as the right child), and that replacement is
    /// in turn removed from the subtree it came from. Vacated arena slots are
    /// recycled by subsequent insertions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kdspace::KdTree;
    ///
    /// let mut tree: KdTree<f64, 3> = KdTree::new();
    /// tree.insert(&[1.0, 2.0, 5.0], 100);
    ///
    /// assert!(tree.remove(&[1.0, 2.0, 5.0]));
    /// assert!(!tree.remove(&[1.0, 2.0, 5.0]));
    /// assert_eq!(tree.size(), 0);
    /// ```
    #[inline]
    pub fn remove(&mut self, query: &[A; K]) -> bool {
        if !self.contains(query) {
            return false;
        }

        self.root_index = self.remove_recurse(self.root_index, query, 0);
        self.size -= 1;
        #[cfg(feature = "tracing")]
        event!(Level::TRACE, size = self.size, "removed point");
        true
    }

    fn remove_recurse(&mut self, idx: IDX, query: &[A; K], split_dim: usize) -> IDX {
        if idx == <IDX as Index>::max() {
            return idx;
        }

        let node = self.nodes[idx.az::<usize>()];
        let next_split_dim = (split_dim + 1).rem(K);

        if node.point == *query {
            if node.right != <IDX as Index>::max() {
                let min_idx = self.min_in_subtree(node.right, split_dim, next_split_dim);
                let replacement = self.nodes[min_idx.az::<usize>()];
                let new_right = self.remove_recurse(node.right, &replacement.point, next_split_dim);

                let node = &mut self.nodes[idx.az::<usize>()];
                node.point = replacement.point;
                node.item = replacement.item;
                node.right = new_right;
            } else if node.left != <IDX as Index>::max() {
                let min_idx = self.min_in_subtree(node.left, split_dim, next_split_dim);
                let replacement = self.nodes[min_idx.az::<usize>()];
                let new_right = self.remove_recurse(node.left, &replacement.point, next_split_dim);

                // everything left of the old node is >= the replacement on
                // this node's axis, so the remainder becomes the right child
                let node = &mut self.nodes[idx.az::<usize>()];
                node.point = replacement.point;
                node.item = replacement.item;
                node.left = <IDX as Index>::max();
                node.right = new_right;
            } else {
                self.free.push(idx);
                return <IDX as Index>::max();
            }
        } else if query[split_dim] < node.point[split_dim] {
            let new_left = self.remove_recurse(node.left, query, next_split_dim);
            self.nodes[idx.az::<usize>()].left = new_left;
        } else {
            let new_right = self.remove_recurse(node.right, query, next_split_dim);
            self.nodes[idx.az::<usize>()].right = new_right;
        }

        idx
    }

    /// Finds the node with the minimum coordinate along `axis` within the
    /// subtree rooted at `idx`. When the subtree's own splitting axis equals
    /// `axis`, nothing smaller can sit in its right child; otherwise both
    /// children must be scanned.
    fn min_in_subtree(&self, idx: IDX, axis: usize, split_dim: usize) -> IDX {
        let node = &self.nodes[idx.az::<usize>()];
        let next_split_dim = (split_dim + 1).rem(K);

        let mut best = idx;

        if node.left != <IDX as Index>::max() {
            let candidate = self.min_in_subtree(node.left, axis, next_split_dim);
            if self.nodes[candidate.az::<usize>()].point[axis]
                < self.nodes[best.az::<usize>()].point[axis]
            {
                best = candidate;
            }
        }

        if split_dim != axis && node.right != <IDX as Index>::max() {
            let candidate = self.min_in_subtree(node.right, axis, next_split_dim);
            if self.nodes[candidate.az::<usize>()].point[axis]
                < self.nodes[best.az::<usize>()].point[axis]
            {
                best = candidate;
            }
        }

        best
    }
}

#[cfg(test)]
mod tests {
    use crate::float::kdtree::KdTree;
    use rand::Rng;

    type FLT = f64;

    #[test]
    fn can_insert_a_point() {
        let mut tree: KdTree<FLT, u32, 3, u32> = KdTree::new();

        let point: [FLT; 3] = [0.1, 0.2, 0.3];
        let item = 123;

        assert!(tree.insert(&point, item));

        assert_eq!(tree.size(), 1);
        assert!(tree.contains(&point));
    }

    #[test]
    fn duplicate_insert_is_rejected() {
        let mut tree: KdTree<FLT, u32, 3, u32> = KdTree::new();

        assert!(tree.insert(&[1.0, 1.0, 1.0], 9));
        assert!(!tree.insert(&[1.0, 1.0, 1.0], 10));

        assert_eq!(tree.size(), 1);
    }

    #[test]
    fn contains_does_not_mutate() {
        let mut tree: KdTree<FLT, u32, 3, u32> = KdTree::new();
        tree.insert(&[0.5, 0.5, 0.5], 1);
        tree.insert(&[0.25, 0.75, 0.5], 2);

        for _ in 0..10 {
            assert!(tree.contains(&[0.25, 0.75, 0.5]));
            assert!(!tree.contains(&[0.25, 0.75, 0.51]));
        }

        assert_eq!(tree.size(), 2);
        assert_eq!(tree.height(), 1);
    }

    #[test]
    fn can_remove_a_point() {
        let mut tree: KdTree<FLT, u32, 3, u32> = KdTree::new();

        let content_to_add: [([FLT; 3], u32); 8] = [
            ([0.9, 0.0, 0.9], 9),
            ([0.4, 0.5, 0.4], 4),
            ([0.12, 0.3, 0.12], 12),
            ([0.7, 0.2, 0.7], 7),
            ([0.13, 0.4, 0.13], 13),
            ([0.6, 0.3, 0.6], 6),
            ([0.2, 0.7, 0.2], 2),
            ([0.14, 0.5, 0.14], 14),
        ];

        for (point, item) in content_to_add {
            tree.insert(&point, item);
        }
        assert_eq!(tree.size(), 8);

        assert!(tree.remove(&[0.4, 0.5, 0.4]));

        assert_eq!(tree.size(), 7);
        assert!(!tree.contains(&[0.4, 0.5, 0.4]));
        for (point, _) in content_to_add {
            if point != [0.4, 0.5, 0.4] {
                assert!(tree.contains(&point));
            }
        }
    }

    #[test]
    fn removing_an_absent_point_is_a_no_op() {
        let mut tree: KdTree<FLT, u32, 3, u32> = KdTree::new();
        tree.insert(&[0.1, 0.2, 0.3], 1);

        assert!(!tree.remove(&[0.9, 0.9, 0.9]));
        assert_eq!(tree.size(), 1);
    }

    #[test]
    fn can_remove_the_root() {
        let mut tree: KdTree<FLT, u32, 3, u32> = KdTree::new();
        tree.insert(&[0.5, 0.5, 0.5], 1);
        tree.insert(&[0.25, 0.75, 0.5], 2);
        tree.insert(&[0.75, 0.25, 0.5], 3);

        assert!(tree.remove(&[0.5, 0.5, 0.5]));

        assert_eq!(tree.size(), 2);
        assert!(!tree.contains(&[0.5, 0.5, 0.5]));
        assert!(tree.contains(&[0.25, 0.75, 0.5]));
        assert!(tree.contains(&[0.75, 0.25, 0.5]));
    }

    #[test]
    fn removal_keeps_remaining_points_reachable() {
        let mut rng = rand::thread_rng();
        let mut tree: KdTree<FLT, usize, 3, u32> = KdTree::new();

        let points: Vec<[FLT; 3]> = (0..200)
            .map(|_| {
                [
                    rng.gen_range(0.0..1.0),
                    rng.gen_range(0.0..1.0),
                    rng.gen_range(0.0..1.0),
                ]
            })
            .collect();

        for (i, point) in points.iter().enumerate() {
            tree.insert(point, i);
        }
        assert_eq!(tree.size(), points.len());

        // remove every third point, then check routing still finds the rest
        for point in points.iter().step_by(3) {
            assert!(tree.remove(point));
        }
        for (i, point) in points.iter().enumerate() {
            assert_eq!(tree.contains(point), i % 3 != 0);
        }
    }

    #[test]
    fn vacated_slots_are_recycled() {
        let mut tree: KdTree<FLT, u32, 3, u32> = KdTree::new();
        tree.insert(&[0.1, 0.1, 0.1], 1);
        tree.insert(&[0.2, 0.2, 0.2], 2);
        tree.remove(&[0.2, 0.2, 0.2]);

        let slots_before = tree.nodes.len();
        tree.insert(&[0.3, 0.3, 0.3], 3);

        assert_eq!(tree.nodes.len(), slots_before);
        assert_eq!(tree.size(), 2);
    }
}
