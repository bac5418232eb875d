use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;
use std::time::Instant;
use log::{debug, trace};
use num_traits::{Float, Zero};

use crate::algorithm::{PathFindingAlgorithm, SearchStats};
use crate::data_structures::PathHeapQueue;
use crate::graph::{Graph, WeightedPath};
use crate::{Error, Result};

/// Point-to-point shortest path search over a frontier of whole paths.
///
/// A Dijkstra variant: instead of a distance table and predecessor map, the
/// frontier holds complete [`WeightedPath`]s in a [`PathHeapQueue`]. The search
/// stops as soon as a path ending at the target is the lightest in the queue,
/// and that path is the answer. Requires non-negative edge weights.
#[derive(Debug, Default)]
pub struct FindPath {
    /// Initial capacity reserved for the frontier queue
    queue_capacity: usize,
}

impl FindPath {
    /// Creates a new search with default settings
    pub fn new() -> Self {
        FindPath { queue_capacity: 0 }
    }

    /// Reserve room for `capacity` frontier paths up front
    pub fn with_queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = capacity;
        self
    }

    /// Finds a minimum weight path from `start` to `target` and reports search counters.
    ///
    /// Both vertices must be in the graph. When they are equal the empty path is
    /// returned without looking at any edges.
    pub fn search<V, W, G>(
        &self,
        graph: &G,
        start: &V,
        target: &V,
    ) -> Result<(WeightedPath<V, W>, SearchStats)>
    where
        V: Eq + Hash + Clone + Debug,
        W: Float + Zero + Debug + Copy,
        G: Graph<V, W>,
    {
        if !graph.has_vertex(target) {
            return Err(Error::InvalidArgument(format!("{:?}", target)));
        }
        if !graph.has_vertex(start) {
            return Err(Error::InvalidArgument(format!("{:?}", start)));
        }

        let timer = Instant::now();
        let mut stats = SearchStats::default();

        if start == target {
            stats.duration = timer.elapsed();
            return Ok((WeightedPath::empty(start.clone()), stats));
        }

        debug!("Searching for shortest path from {:?} to {:?}", start, target);

        let mut queue = PathHeapQueue::with_capacity(self.queue_capacity);
        let mut not_yet_finalized: HashSet<V> = graph.vertices().cloned().collect();

        let origin = WeightedPath::empty(start.clone());
        queue_extensions(graph, &origin, &not_yet_finalized, &mut queue, &mut stats);
        not_yet_finalized.remove(start);
        stats.vertices_finalized += 1;

        while !not_yet_finalized.is_empty() {
            // Take the lightest path off the frontier before expanding it
            let Some(current) = queue.remove_min() else {
                break;
            };

            if current.terminal() == target {
                stats.duration = timer.elapsed();
                debug!(
                    "Found path to {:?} with {} edges, weight {:?}: {}",
                    target,
                    current.len(),
                    current.weight(),
                    stats
                );
                return Ok((current, stats));
            }

            queue_extensions(graph, &current, &not_yet_finalized, &mut queue, &mut stats);
            if not_yet_finalized.remove(current.terminal()) {
                stats.vertices_finalized += 1;
                trace!("Finalized {:?} at weight {:?}", current.terminal(), current.weight());
            }
        }

        stats.duration = timer.elapsed();
        debug!("No path from {:?} to {:?}: {}", start, target, stats);
        Err(Error::NotFound {
            from: format!("{:?}", start),
            to: format!("{:?}", target),
        })
    }
}

/// Queue `path` extended by every outgoing edge of its terminal that leads to
/// a vertex not yet finalized
fn queue_extensions<V, W, G>(
    graph: &G,
    path: &WeightedPath<V, W>,
    not_yet_finalized: &HashSet<V>,
    queue: &mut PathHeapQueue<V, W>,
    stats: &mut SearchStats,
) where
    V: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
    G: Graph<V, W>,
{
    for edge in graph.outgoing_edges(path.terminal()) {
        if not_yet_finalized.contains(edge.sink()) {
            queue.insert(path.extend(edge));
            stats.paths_queued += 1;
        }
    }
    stats.peak_frontier = stats.peak_frontier.max(queue.len());
}

impl<V, W, G> PathFindingAlgorithm<V, W, G> for FindPath
where
    V: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
    G: Graph<V, W>,
{
    fn name(&self) -> &'static str {
        "FindPath"
    }

    fn shortest_path(&self, graph: &G, start: &V, target: &V) -> Result<WeightedPath<V, W>> {
        self.search(graph, start, target).map(|(path, _)| path)
    }
}

/// Computes a minimum weight path from `start` to `target` with default settings
pub fn compute_shortest_path<V, W, G>(graph: &G, start: &V, target: &V) -> Result<WeightedPath<V, W>>
where
    V: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
    G: Graph<V, W>,
{
    FindPath::new().shortest_path(graph, start, target)
}
