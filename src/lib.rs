//! Path Heap - point-to-point shortest paths over a heap of weighted paths
//!
//! The search expands the frontier outward from a start vertex until the target
//! is dequeued. Frontier candidates are whole paths, structurally shared with
//! their predecessors, kept in a min-heap ordered by total weight. The first
//! path to the target that reaches the top of the heap is the answer, so no
//! predecessor table or reconstruction pass is needed.
//!
//! Edge weights must be non-negative; negative weights give unspecified results.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    find_path::{compute_shortest_path, FindPath},
    PathFindingAlgorithm, SearchStats,
};
pub use data_structures::PathHeapQueue;
/// Re-export main types for convenient use
pub use graph::{DirectedGraph, WeightedEdge, WeightedPath};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Vertex not in graph: {0}")]
    InvalidArgument(String),

    #[error("No path found from {from} to {to}")]
    NotFound { from: String, to: String },
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
