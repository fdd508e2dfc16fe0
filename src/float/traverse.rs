//! Structural traversals over the stored points.
//!
//! These orders reflect the shape the tree happens to have taken from its
//! insertion history; none of them is related to spatial proximity. They are
//! intended for whole-tree enumeration and export rather than search.

use az::{Az, Cast};

use crate::float::kdtree::{Axis, KdTree};
use crate::traits::{Content, Index};

/// The order in which [`KdTree::traverse`] visits a node's own point relative
/// to its two subtrees.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TraversalOrder {
    /// visit, then left subtree, then right subtree
    PreOrder,
    /// left subtree, then visit, then right subtree
    InOrder,
    /// left subtree, then right subtree, then visit
    PostOrder,
}

impl<A: Axis, T: Content, const K: usize, IDX: Index<T = IDX>> KdTree<A, T, K, IDX>
where
    usize: Cast<IDX>,
{
    /// Applies `visitor` to every stored point exactly once, in the requested
    /// structural order. An empty tree results in no calls.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kdspace::{KdTree, TraversalOrder};
    ///
    /// let mut tree: KdTree<f64, 3> = KdTree::new();
    /// tree.insert(&[5.0, 5.0, 5.0], 1);
    /// tree.insert(&[2.0, 9.0, 9.0], 2);
    /// tree.insert(&[8.0, 1.0, 1.0], 3);
    ///
    /// let mut items = Vec::new();
    /// tree.traverse(TraversalOrder::InOrder, |item, _point| items.push(item));
    ///
    /// assert_eq!(items, vec![2, 1, 3]);
    /// ```
    pub fn traverse<F>(&self, order: TraversalOrder, mut visitor: F)
    where
        F: FnMut(T, &[A; K]),
    {
        self.traverse_recurse(self.root_index, order, &mut visitor);
    }

    fn traverse_recurse<F>(&self, idx: IDX, order: TraversalOrder, visitor: &mut F)
    where
        F: FnMut(T, &[A; K]),
    {
        if idx == <IDX as Index>::max() {
            return;
        }

        let node = &self.nodes[idx.az::<usize>()];
        match order {
            TraversalOrder::PreOrder => {
                visitor(node.item, &node.point);
                self.traverse_recurse(node.left, order, visitor);
                self.traverse_recurse(node.right, order, visitor);
            }
            TraversalOrder::InOrder => {
                self.traverse_recurse(node.left, order, visitor);
                visitor(node.item, &node.point);
                self.traverse_recurse(node.right, order, visitor);
            }
            TraversalOrder::PostOrder => {
                self.traverse_recurse(node.left, order, visitor);
                self.traverse_recurse(node.right, order, visitor);
                visitor(node.item, &node.point);
            }
        }
    }
}
