use crate::float::kdtree::Axis;
use crate::nearest_neighbour::NearestNeighbour;
use crate::traits::Content;
use sorted_vec::SortedVec;
use std::collections::BinaryHeap;

/// The bounded closest-so-far working set shared by the neighbour queries.
///
/// At most `qty` entries are retained. While not yet full, every offered entry
/// is kept; once full, an entry only displaces the current worst when its
/// distance is strictly smaller, so boundary ties resolve in favour of the
/// earlier-visited point.
pub(crate) trait ResultCollection<A: Axis, T: Content> {
    fn new_with_capacity(capacity: usize) -> Self;
    fn add(&mut self, entry: NearestNeighbour<A, T>, qty: usize);
    fn max_dist(&self, qty: usize) -> A;
    fn into_sorted_vec(self) -> Vec<NearestNeighbour<A, T>>;
}

impl<A: Axis, T: Content> ResultCollection<A, T> for BinaryHeap<NearestNeighbour<A, T>> {
    fn new_with_capacity(capacity: usize) -> Self {
        BinaryHeap::with_capacity(capacity)
    }

    fn add(&mut self, entry: NearestNeighbour<A, T>, qty: usize) {
        if self.len() < qty {
            self.push(entry);
        } else if let Some(mut max_heap_value) = self.peek_mut() {
            if entry < *max_heap_value {
                *max_heap_value = entry;
            }
        }
    }

    fn max_dist(&self, qty: usize) -> A {
        if self.len() < qty {
            A::infinity()
        } else {
            self.peek().map_or(A::infinity(), |n| n.distance)
        }
    }

    fn into_sorted_vec(self) -> Vec<NearestNeighbour<A, T>> {
        BinaryHeap::into_sorted_vec(self)
    }
}

impl<A: Axis, T: Content> ResultCollection<A, T> for SortedVec<NearestNeighbour<A, T>> {
    fn new_with_capacity(capacity: usize) -> Self {
        SortedVec::with_capacity(capacity)
    }

    fn add(&mut self, entry: NearestNeighbour<A, T>, qty: usize) {
        if self.len() < qty {
            self.insert(entry);
        } else if let Some(last) = self.last() {
            if entry < *last {
                self.pop();
                self.insert(entry);
            }
        }
    }

    fn max_dist(&self, qty: usize) -> A {
        if self.len() < qty {
            A::infinity()
        } else {
            self.last().map_or(A::infinity(), |n| n.distance)
        }
    }

    fn into_sorted_vec(self) -> Vec<NearestNeighbour<A, T>> {
        self.into_vec()
    }
}
