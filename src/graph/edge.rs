use std::fmt::{self, Debug, Display};
use num_traits::{Float, Zero};

/// An outgoing edge of a directed graph.
///
/// The source vertex is implied by the adjacency list the edge lives in, so only
/// the sink and the weight are stored. Weights are expected to be non-negative.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedEdge<V, W>
where
    W: Float + Zero + Debug + Copy,
{
    sink: V,
    weight: W,
}

impl<V, W> WeightedEdge<V, W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Creates an edge pointing at `sink`
    pub fn new(sink: V, weight: W) -> Self {
        WeightedEdge { sink, weight }
    }

    /// The vertex this edge leads to
    pub fn sink(&self) -> &V {
        &self.sink
    }

    /// The cost of traversing this edge
    pub fn weight(&self) -> W {
        self.weight
    }

    pub(crate) fn set_weight(&mut self, weight: W) {
        self.weight = weight;
    }
}

impl<V, W> Display for WeightedEdge<V, W>
where
    V: Display,
    W: Float + Zero + Debug + Copy + Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "-({})-> {}", self.weight, self.sink)
    }
}
