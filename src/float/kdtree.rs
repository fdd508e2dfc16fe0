//! Floating point k-d tree, for use when the co-ordinates of the points being stored in the tree
//! are floats. f64 or f32 are supported currently.

use az::{Az, Cast};
use num_traits::float::FloatCore;
use std::fmt::Debug;

use crate::traits::{Content, Index};

/// Axis trait represents the traits that must be implemented
/// by the type that is used as the first generic parameter, `A`,
/// on the float [`KdTree`]. This will be [`f64`] or [`f32`].
pub trait Axis: FloatCore + Default + Debug + Copy + Sync + Send {}
impl<T: FloatCore + Default + Debug + Copy + Sync + Send> Axis for T {}

/// Floating point k-d tree
///
/// A dynamic tree that can be mutated after construction: points can be
/// inserted and removed at any time, at the cost of the tree's shape being an
/// artifact of the order of insertion (sorted input degrades all operations
/// towards linear). Nodes live in an arena `Vec`, addressed by `IDX`-typed
/// indices, with a free-list recycling the slots vacated by removals.
///
/// A convenient type alias exists for KdTree with some sensible defaults set: [`kdspace::KdTree`](`crate::KdTree`).
#[derive(Clone, Debug, PartialEq)]
pub struct KdTree<A: Copy + Default, T: Copy + Default, const K: usize, IDX> {
    pub(crate) nodes: Vec<Node<A, T, K, IDX>>,
    pub(crate) free: Vec<IDX>,
    pub(crate) root_index: IDX,
    pub(crate) size: usize,
}

#[doc(hidden)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Node<A: Copy + Default, T: Copy + Default, const K: usize, IDX> {
    pub(crate) point: [A; K],
    pub(crate) item: T,
    pub(crate) left: IDX,
    pub(crate) right: IDX,
}

impl<A: Copy + Default, T: Copy + Default, const K: usize, IDX> Node<A, T, K, IDX>
where
    A: Axis,
    T: Content,
    IDX: Index<T = IDX>,
{
    pub(crate) fn new(point: [A; K], item: T) -> Self {
        Self {
            point,
            item,
            left: <IDX as Index>::max(),
            right: <IDX as Index>::max(),
        }
    }
}

impl<A, T, const K: usize, IDX> Default for KdTree<A, T, K, IDX>
where
    A: Axis,
    T: Content,
    IDX: Index<T = IDX>,
    usize: Cast<IDX>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<A, T, const K: usize, IDX> KdTree<A, T, K, IDX>
where
    A: Axis,
    T: Content,
    IDX: Index<T = IDX>,
    usize: Cast<IDX>,
{
    /// Creates a new float KdTree.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kdspace::KdTree;
    ///
    /// let mut tree: KdTree<f64, 3> = KdTree::new();
    ///
    /// tree.insert(&[1.0, 2.0, 5.0], 100);
    ///
    /// assert_eq!(tree.size(), 1);
    /// ```
    #[inline]
    pub fn new() -> Self {
        KdTree::with_capacity(16)
    }

    /// Creates a new float KdTree and reserve capacity for a specific number of points.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kdspace::KdTree;
    ///
    /// let mut tree: KdTree<f64, 3> = KdTree::with_capacity(1_000_000);
    ///
    /// tree.insert(&[1.0, 2.0, 5.0], 100);
    ///
    /// assert_eq!(tree.size(), 1);
    /// ```
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity < <IDX as Index>::max().az::<usize>());
        Self {
            nodes: Vec::with_capacity(capacity),
            free: Vec::new(),
            root_index: <IDX as Index>::max(),
            size: 0,
        }
    }

    /// Returns the current number of points stored in the tree
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kdspace::KdTree;
    ///
    /// let mut tree: KdTree<f64, 3> = KdTree::new();
    ///
    /// tree.insert(&[1.0, 2.0, 5.0], 100);
    /// tree.insert(&[1.1, 2.1, 5.1], 101);
    ///
    /// assert_eq!(tree.size(), 2);
    /// ```
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the tree currently holds no points
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the height of the tree, counting edges from the root to the
    /// deepest leaf: `-1` for an empty tree, `0` for a single-node tree.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kdspace::KdTree;
    ///
    /// let mut tree: KdTree<f64, 3> = KdTree::new();
    /// assert_eq!(tree.height(), -1);
    ///
    /// tree.insert(&[1.0, 2.0, 5.0], 100);
    /// assert_eq!(tree.height(), 0);
    /// ```
    pub fn height(&self) -> i32 {
        self.height_of(self.root_index)
    }

    fn height_of(&self, idx: IDX) -> i32 {
        if idx == <IDX as Index>::max() {
            return -1;
        }
        let node = &self.nodes[idx.az::<usize>()];
        1 + self.height_of(node.left).max(self.height_of(node.right))
    }

    /// Iterate over all `(item, point)` tuples in arbitrary order.
    ///
    /// ```
    /// use kdspace::KdTree;
    ///
    /// let point = [1.0f64, 2.0f64, 3.0f64];
    /// let mut tree: KdTree<f64, 3> = KdTree::new();
    /// tree.insert(&point, 10);
    ///
    /// let mut pairs: Vec<_> = tree.iter().collect();
    /// assert_eq!(pairs.pop(), Some((10, point)));
    /// ```
    pub fn iter(&self) -> impl Iterator<Item = (T, [A; K])> + '_ {
        TreeIter::new(self)
    }

    pub(crate) fn alloc_node(&mut self, point: &[A; K], item: T) -> IDX {
        if let Some(idx) = self.free.pop() {
            self.nodes[idx.az::<usize>()] = Node::new(*point, item);
            idx
        } else {
            self.nodes.push(Node::new(*point, item));
            (self.nodes.len() - 1).az::<IDX>()
        }
    }
}

impl<A: Axis, T: Content, const K: usize, IDX: Index<T = IDX>> From<&Vec<[A; K]>>
    for KdTree<A, T, K, IDX>
where
    usize: Cast<IDX>,
    usize: Cast<T>,
{
    /// Builds a tree from a `Vec` of points, using each point's position in
    /// the `Vec` as its item. Coordinate-wise duplicate points are stored
    /// only once.
    fn from(vec: &Vec<[A; K]>) -> Self {
        let mut tree: KdTree<A, T, K, IDX> = KdTree::with_capacity(vec.len());

        vec.iter().enumerate().for_each(|(idx, point)| {
            tree.insert(point, idx.az::<T>());
        });

        tree
    }
}

/// Iterator over the `(item, point)` pairs of a [`KdTree`], in arbitrary
/// (pre-order) order.
#[derive(Debug)]
pub struct TreeIter<'a, A: Copy + Default, T: Copy + Default, const K: usize, IDX> {
    tree: &'a KdTree<A, T, K, IDX>,
    stack: Vec<IDX>,
}

impl<'a, A, T, const K: usize, IDX> TreeIter<'a, A, T, K, IDX>
where
    A: Axis,
    T: Content,
    IDX: Index<T = IDX>,
{
    pub(crate) fn new(tree: &'a KdTree<A, T, K, IDX>) -> Self {
        let mut stack = Vec::new();
        if tree.root_index != <IDX as Index>::max() {
            stack.push(tree.root_index);
        }
        Self { tree, stack }
    }
}

impl<'a, A, T, const K: usize, IDX> Iterator for TreeIter<'a, A, T, K, IDX>
where
    A: Axis,
    T: Content,
    IDX: Index<T = IDX>,
{
    type Item = (T, [A; K]);

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.stack.pop()?;
        let node = &self.tree.nodes[idx.az::<usize>()];
        if node.right != <IDX as Index>::max() {
            self.stack.push(node.right);
        }
        if node.left != <IDX as Index>::max() {
            self.stack.push(node.left);
        }
        Some((node.item, node.point))
    }
}
