use std::fmt::{self, Debug, Display};
use std::hash::Hash;
use std::time::Duration;
use num_traits::{Float, Zero};

use crate::graph::{Graph, WeightedPath};
use crate::Result;

/// Counters collected during one point-to-point search
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Vertices whose shortest path was fixed, including the start vertex
    pub vertices_finalized: usize,

    /// Paths pushed onto the frontier
    pub paths_queued: usize,

    /// Largest frontier size seen
    pub peak_frontier: usize,

    /// Wall-clock time of the search
    pub duration: Duration,
}

impl Display for SearchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} vertices finalized, {} paths queued (peak frontier {}) in {:?}",
            self.vertices_finalized, self.paths_queued, self.peak_frontier, self.duration
        )
    }
}

/// Trait for point-to-point shortest path algorithms
pub trait PathFindingAlgorithm<V, W, G>
where
    V: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
    G: Graph<V, W>,
{
    /// Compute a minimum weight path from `start` to `target`.
    ///
    /// Fails with [`Error::InvalidArgument`](crate::Error::InvalidArgument) if either
    /// vertex is missing from the graph and [`Error::NotFound`](crate::Error::NotFound)
    /// if `target` cannot be reached.
    fn shortest_path(&self, graph: &G, start: &V, target: &V) -> Result<WeightedPath<V, W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
