//! GraphNexus — a weighted, undirected graph engine.
//!
//! Loads a graph keyed by string vertex labels and answers four analyses over
//! it: minimum spanning tree (Prim), single-source shortest paths (Dijkstra),
//! adjacency/existence queries, and a report of which vertices a candidate
//! subgraph reaches at their true shortest distance.

pub mod cli;
pub mod config;
pub mod engine;
pub mod format;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use config::{NexusConfig, OutputFormat};
pub use format::{GraphReader, ReaderOptions};
pub use graph::{AdjacencyGraph, Graph, GraphBuilder, GraphStats};
pub use types::{
    edge_pairs, Distance, GraphError, GraphResult, Weight, WeightedEdge, NO_EDGE, UNREACHABLE,
};
