use crate::graph::traits::{Graph, MutableGraph};
use crate::graph::WeightedEdge;
use num_traits::{Float, Zero};
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// A directed graph implementation using adjacency lists
#[derive(Debug, Clone)]
pub struct DirectedGraph<V, W>
where
    V: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    /// Vertices in insertion order
    vertices: Vec<V>,

    /// Outgoing edges for each vertex: vertex -> [edge to sink]
    outgoing_edges: HashMap<V, Vec<WeightedEdge<V, W>>>,
}

impl<V, W> DirectedGraph<V, W>
where
    V: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        DirectedGraph {
            vertices: Vec::new(),
            outgoing_edges: HashMap::new(),
        }
    }

    /// Creates a new empty directed graph with room for `vertices` vertices
    pub fn with_capacity(vertices: usize) -> Self {
        DirectedGraph {
            vertices: Vec::with_capacity(vertices),
            outgoing_edges: HashMap::with_capacity(vertices),
        }
    }

    /// Builds a graph from `(from, to, weight)` triples, adding vertices as needed.
    /// Triples with a negative weight are skipped.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (V, V, W)>,
    {
        let mut graph = DirectedGraph::new();
        for (from, to, weight) in edges {
            graph.add_vertex(from.clone());
            graph.add_vertex(to.clone());
            graph.add_edge(&from, &to, weight);
        }
        graph
    }

    /// Validate that the graph doesn't have negative weights
    pub fn validate_non_negative(&self) -> bool {
        self.outgoing_edges
            .values()
            .flatten()
            .all(|edge| edge.weight() >= W::zero())
    }
}

impl<V, W> Default for DirectedGraph<V, W>
where
    V: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, W> Graph<V, W> for DirectedGraph<V, W>
where
    V: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.outgoing_edges.values().map(|edges| edges.len()).sum()
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = &V> + '_> {
        Box::new(self.vertices.iter())
    }

    fn outgoing_edges(&self, vertex: &V) -> Box<dyn Iterator<Item = &WeightedEdge<V, W>> + '_> {
        if let Some(edges) = self.outgoing_edges.get(vertex) {
            Box::new(edges.iter())
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn has_vertex(&self, vertex: &V) -> bool {
        self.outgoing_edges.contains_key(vertex)
    }
}

impl<V, W> MutableGraph<V, W> for DirectedGraph<V, W>
where
    V: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    fn add_vertex(&mut self, vertex: V) -> bool {
        if self.has_vertex(&vertex) {
            return false;
        }
        self.outgoing_edges.insert(vertex.clone(), Vec::new());
        self.vertices.push(vertex);
        true
    }

    fn remove_vertex(&mut self, vertex: &V) -> bool {
        if self.outgoing_edges.remove(vertex).is_none() {
            return false;
        }

        self.vertices.retain(|v| v != vertex);

        // Remove every edge pointing at the vertex
        for edges in self.outgoing_edges.values_mut() {
            edges.retain(|edge| edge.sink() != vertex);
        }

        true
    }

    fn add_edge(&mut self, from: &V, to: &V, weight: W) -> bool {
        if !self.has_vertex(from) || !self.has_vertex(to) || weight < W::zero() {
            return false;
        }

        let Some(outgoing) = self.outgoing_edges.get_mut(from) else {
            return false;
        };

        // Check if edge already exists and update it if it does
        if let Some(edge) = outgoing.iter_mut().find(|edge| edge.sink() == to) {
            edge.set_weight(weight);
        } else {
            outgoing.push(WeightedEdge::new(to.clone(), weight));
        }

        true
    }

    fn remove_edge(&mut self, from: &V, to: &V) -> bool {
        if let Some(outgoing) = self.outgoing_edges.get_mut(from) {
            let len_before = outgoing.len();
            outgoing.retain(|edge| edge.sink() != to);
            len_before > outgoing.len()
        } else {
            false
        }
    }

    fn update_edge_weight(&mut self, from: &V, to: &V, weight: W) -> bool {
        if weight < W::zero() {
            return false;
        }

        match self
            .outgoing_edges
            .get_mut(from)
            .and_then(|edges| edges.iter_mut().find(|edge| edge.sink() == to))
        {
            Some(edge) => {
                edge.set_weight(weight);
                true
            }
            None => false,
        }
    }
}
