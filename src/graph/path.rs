use std::fmt::{self, Debug, Display};
use std::rc::Rc;
use num_traits::{Float, Zero};

use crate::graph::WeightedEdge;

/// A node in the predecessor chain of a path
struct PathNode<V, W> {
    /// Path this one extends; `None` only for the empty path
    predecessor: Option<Rc<PathNode<V, W>>>,
    /// End vertex (the start vertex for the empty path)
    terminal: V,
    /// Weight of the final edge, zero for the empty path
    edge_weight: W,
    /// Total weight of the path
    weight: W,
    /// Number of edges
    len: usize,
}

/// An immutable, persistent sequence of edges starting at a fixed vertex.
///
/// Extending a path allocates one node that points at its predecessor, so
/// extension is O(1) and every prefix is shared between the paths built on it.
/// Cloning is a reference count bump.
pub struct WeightedPath<V, W>
where
    W: Float + Zero + Debug + Copy,
{
    node: Rc<PathNode<V, W>>,
}

impl<V, W> WeightedPath<V, W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Creates the empty path sitting at `start`
    pub fn empty(start: V) -> Self {
        WeightedPath {
            node: Rc::new(PathNode {
                predecessor: None,
                terminal: start,
                edge_weight: W::zero(),
                weight: W::zero(),
                len: 0,
            }),
        }
    }

    /// Returns a new path that follows this one and then `edge`.
    ///
    /// The new path's weight is this path's weight plus the edge weight.
    pub fn extend(&self, edge: &WeightedEdge<V, W>) -> Self
    where
        V: Clone,
    {
        WeightedPath {
            node: Rc::new(PathNode {
                predecessor: Some(Rc::clone(&self.node)),
                terminal: edge.sink().clone(),
                edge_weight: edge.weight(),
                weight: self.node.weight + edge.weight(),
                len: self.node.len + 1,
            }),
        }
    }

    /// The vertex the path ends at
    pub fn terminal(&self) -> &V {
        &self.node.terminal
    }

    /// The vertex the path starts from
    pub fn start(&self) -> &V {
        let mut node: &PathNode<V, W> = &self.node;
        while let Some(predecessor) = &node.predecessor {
            node = predecessor;
        }
        &node.terminal
    }

    /// Total weight of all edges in the path
    pub fn weight(&self) -> W {
        self.node.weight
    }

    /// Number of edges in the path
    pub fn len(&self) -> usize {
        self.node.len
    }

    pub fn is_empty(&self) -> bool {
        self.node.len == 0
    }

    /// Vertices visited by the path, start first
    pub fn vertices(&self) -> Vec<&V> {
        let mut vertices = Vec::with_capacity(self.node.len + 1);
        let mut node: &PathNode<V, W> = &self.node;
        loop {
            vertices.push(&node.terminal);
            match &node.predecessor {
                Some(predecessor) => node = predecessor,
                None => break,
            }
        }
        vertices.reverse();
        vertices
    }

    /// Edges of the path in traversal order
    pub fn edges(&self) -> Vec<WeightedEdge<V, W>>
    where
        V: Clone,
    {
        let mut edges = Vec::with_capacity(self.node.len);
        let mut node: &PathNode<V, W> = &self.node;
        while let Some(predecessor) = &node.predecessor {
            edges.push(WeightedEdge::new(node.terminal.clone(), node.edge_weight));
            node = predecessor;
        }
        edges.reverse();
        edges
    }

    /// Returns true if both values are the same shared path node
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.node, &other.node)
    }
}

impl<V, W> Clone for WeightedPath<V, W>
where
    W: Float + Zero + Debug + Copy,
{
    fn clone(&self) -> Self {
        WeightedPath {
            node: Rc::clone(&self.node),
        }
    }
}

// Unlink uniquely owned predecessors one at a time so dropping a long path
// does not recurse once per edge.
impl<V, W> Drop for WeightedPath<V, W>
where
    W: Float + Zero + Debug + Copy,
{
    fn drop(&mut self) {
        let mut next = match Rc::get_mut(&mut self.node) {
            Some(node) => node.predecessor.take(),
            None => return,
        };
        while let Some(node) = next {
            next = match Rc::try_unwrap(node) {
                Ok(mut node) => node.predecessor.take(),
                Err(_) => None,
            };
        }
    }
}

impl<V, W> Debug for WeightedPath<V, W>
where
    V: Debug,
    W: Float + Zero + Debug + Copy,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeightedPath")
            .field("vertices", &self.vertices())
            .field("weight", &self.weight())
            .finish()
    }
}

impl<V, W> Display for WeightedPath<V, W>
where
    V: Display,
    W: Float + Zero + Debug + Copy + Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, vertex) in self.vertices().into_iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{}", vertex)?;
        }
        write!(f, " ({})", self.weight())
    }
}
