//! Core value types shared by the graph, the loaders, and the algorithms.

pub mod edge;
pub mod error;

pub use edge::{edge_pairs, WeightedEdge};
pub use error::{GraphError, GraphResult};

/// Edge weight. Always non-negative once stored.
pub type Weight = u64;

/// Shortest-path distance from a source vertex.
pub type Distance = u64;

/// Returned by [`weight_or_sentinel`](crate::graph::AdjacencyGraph::weight_or_sentinel)
/// when the requested edge does not exist.
pub const NO_EDGE: i64 = -1;

/// Distance assigned to vertices that cannot be reached from the source.
pub const UNREACHABLE: Distance = Distance::MAX;
