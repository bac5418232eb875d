use std::fmt::Debug;
use std::slice;
use num_traits::{Float, Zero};

use crate::graph::WeightedPath;

/// A priority queue of weighted paths where the minimum weight path comes out first.
///
/// Backed by an array binary heap: for every index `i > 0`,
/// `heap[i].weight() >= heap[(i - 1) / 2].weight()`. Paths are compared by weight
/// only, so paths of equal weight come out in no particular order.
#[derive(Debug)]
pub struct PathHeapQueue<V, W>
where
    W: Float + Zero + Debug + Copy,
{
    /// The heap array
    heap: Vec<WeightedPath<V, W>>,
}

/// Index of the parent of `index`, or `None` for the root
fn parent(index: usize) -> Option<usize> {
    if index == 0 {
        None
    } else {
        Some((index - 1) / 2)
    }
}

/// Index of the left child of `index`; the right child is one greater
fn child(index: usize) -> usize {
    2 * index + 1
}

impl<V, W> PathHeapQueue<V, W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        PathHeapQueue { heap: Vec::new() }
    }

    /// Creates an empty priority queue with space for `capacity` paths
    pub fn with_capacity(capacity: usize) -> Self {
        PathHeapQueue {
            heap: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of paths in the queue
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns true if the queue holds no paths
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Adds a path to the queue.
    ///
    /// The path is appended and moved toward the root while it is strictly
    /// lighter than its parent. Paths ending at the same vertex may coexist.
    pub fn insert(&mut self, path: WeightedPath<V, W>) {
        let weight = path.weight();
        self.heap.push(path);

        let mut index = self.heap.len() - 1;
        while let Some(parent_index) = parent(index) {
            if weight < self.heap[parent_index].weight() {
                self.heap.swap(index, parent_index);
                index = parent_index;
            } else {
                break;
            }
        }

        debug_assert!(self.settled_at(index), "invariant broken by insert()");
    }

    /// Same as [`insert`](Self::insert)
    pub fn offer(&mut self, path: WeightedPath<V, W>) {
        self.insert(path);
    }

    /// Returns the minimum weight path without removing it
    pub fn peek_min(&self) -> Option<&WeightedPath<V, W>> {
        self.heap.first()
    }

    /// Same as [`peek_min`](Self::peek_min)
    pub fn peek(&self) -> Option<&WeightedPath<V, W>> {
        self.peek_min()
    }

    /// Removes and returns the minimum weight path.
    ///
    /// The last path takes the root slot and moves down, swapping with the
    /// lighter child while it is strictly heavier than that child. When both
    /// children weigh the same the left one is used.
    pub fn remove_min(&mut self) -> Option<WeightedPath<V, W>> {
        if self.heap.is_empty() {
            return None;
        }
        let removed = self.heap.swap_remove(0);

        let size = self.heap.len();
        let mut focus = 0;
        loop {
            let left = child(focus);
            let right = left + 1;
            if left >= size {
                break;
            }

            let lighter = if right < size && self.heap[right].weight() < self.heap[left].weight() {
                right
            } else {
                left
            };

            if self.heap[focus].weight() > self.heap[lighter].weight() {
                self.heap.swap(focus, lighter);
                focus = lighter;
            } else {
                break;
            }
        }

        debug_assert!(
            size == 0 || self.settled_at(focus),
            "invariant broken by remove_min()"
        );
        Some(removed)
    }

    /// Same as [`remove_min`](Self::remove_min)
    pub fn poll(&mut self) -> Option<WeightedPath<V, W>> {
        self.remove_min()
    }

    /// Read-only view of the queued paths in heap array order.
    ///
    /// The order is not sorted by weight; only the first item is guaranteed to
    /// be a minimum.
    pub fn iter(&self) -> slice::Iter<'_, WeightedPath<V, W>> {
        self.heap.iter()
    }

    /// Removes all paths
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    /// Drains the queue into a vector ordered by non-decreasing weight
    pub fn into_sorted_vec(mut self) -> Vec<WeightedPath<V, W>> {
        let mut sorted = Vec::with_capacity(self.heap.len());
        while let Some(path) = self.remove_min() {
            sorted.push(path);
        }
        sorted
    }

    /// Checks the path at `index` against its parent and children
    fn settled_at(&self, index: usize) -> bool {
        let weight = self.heap[index].weight();
        if let Some(parent_index) = parent(index) {
            let parent_weight = self.heap[parent_index].weight();
            if weight < parent_weight {
                return report(&format!(
                    "path at {} weighs {:?}, less than its parent at {} ({:?})",
                    index, weight, parent_index, parent_weight
                ));
            }
        }
        let left = child(index);
        for child_index in [left, left + 1] {
            if child_index < self.heap.len() && self.heap[child_index].weight() < weight {
                return report(&format!(
                    "path at {} weighs {:?}, more than its child at {} ({:?})",
                    index,
                    weight,
                    child_index,
                    self.heap[child_index].weight()
                ));
            }
        }
        true
    }

    /// Checks the whole heap invariant, reporting the first violation found.
    ///
    /// Scans every path, so it is meant for tests and diagnostics only.
    pub fn is_well_formed(&self) -> bool {
        for index in 1..self.heap.len() {
            let parent_index = (index - 1) / 2;
            let weight = self.heap[index].weight();
            let parent_weight = self.heap[parent_index].weight();
            if weight < parent_weight {
                return report(&format!(
                    "path at {} weighs {:?}, less than its parent at {} ({:?})",
                    index, weight, parent_index, parent_weight
                ));
            }
        }
        true
    }
}

/// Logs a broken heap invariant; always returns false
fn report(error: &str) -> bool {
    log::error!("Invariant error: {}", error);
    false
}

impl<V, W> Default for PathHeapQueue<V, W>
where
    W: Float + Zero + Debug + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, W> Extend<WeightedPath<V, W>> for PathHeapQueue<V, W>
where
    W: Float + Zero + Debug + Copy,
{
    fn extend<I: IntoIterator<Item = WeightedPath<V, W>>>(&mut self, iter: I) {
        for path in iter {
            self.insert(path);
        }
    }
}

impl<V, W> FromIterator<WeightedPath<V, W>> for PathHeapQueue<V, W>
where
    W: Float + Zero + Debug + Copy,
{
    fn from_iter<I: IntoIterator<Item = WeightedPath<V, W>>>(iter: I) -> Self {
        let mut queue = PathHeapQueue::new();
        queue.extend(iter);
        queue
    }
}

impl<'a, V, W> IntoIterator for &'a PathHeapQueue<V, W>
where
    W: Float + Zero + Debug + Copy,
{
    type Item = &'a WeightedPath<V, W>;
    type IntoIter = slice::Iter<'a, WeightedPath<V, W>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
