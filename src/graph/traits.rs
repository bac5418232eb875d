use std::fmt::Debug;
use std::hash::Hash;
use num_traits::{Float, Zero};

use crate::graph::WeightedEdge;

/// Trait representing a weighted directed graph.
///
/// This is the read-only view the path search consumes: vertex membership,
/// the full vertex set, and the outgoing edges of a vertex.
pub trait Graph<V, W>: Debug
where
    V: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over every vertex in the graph
    fn vertices(&self) -> Box<dyn Iterator<Item = &V> + '_>;

    /// Returns an iterator over the outgoing edges from a vertex
    fn outgoing_edges(&self, vertex: &V) -> Box<dyn Iterator<Item = &WeightedEdge<V, W>> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: &V) -> bool;

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: &V, to: &V) -> bool {
        self.outgoing_edges(from).any(|edge| edge.sink() == to)
    }

    /// Gets the weight of an edge if it exists
    fn get_edge_weight(&self, from: &V, to: &V) -> Option<W> {
        self.outgoing_edges(from)
            .find(|edge| edge.sink() == to)
            .map(|edge| edge.weight())
    }
}

/// Trait for mutable graph operations
pub trait MutableGraph<V, W>: Graph<V, W>
where
    V: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    /// Adds a vertex to the graph; returns false if it was already present
    fn add_vertex(&mut self, vertex: V) -> bool;

    /// Removes a vertex and its connected edges from the graph
    fn remove_vertex(&mut self, vertex: &V) -> bool;

    /// Adds a directed edge between vertices with the given weight
    fn add_edge(&mut self, from: &V, to: &V, weight: W) -> bool;

    /// Removes an edge from the graph
    fn remove_edge(&mut self, from: &V, to: &V) -> bool;

    /// Updates the weight of an existing edge
    fn update_edge_weight(&mut self, from: &V, to: &V, weight: W) -> bool;
}
