//! Weighted edge struct and helpers for flattened edge sequences.

use serde::Serialize;

use super::Weight;

/// An undirected, weighted connection between two vertices.
///
/// `from` and `to` carry the orientation in which an algorithm discovered the
/// edge (for example, Prim's extraction order); the graph itself stores the
/// edge symmetrically.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct WeightedEdge {
    /// Endpoint the edge was reached from.
    pub from: String,
    /// Endpoint the edge leads to.
    pub to: String,
    /// Non-negative edge weight.
    pub weight: Weight,
}

impl WeightedEdge {
    /// Create a new edge.
    pub fn new(from: impl Into<String>, to: impl Into<String>, weight: Weight) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }
}

/// Iterate a flattened pair sequence (`[u0, v0, u1, v1, ...]`) as edges.
///
/// A trailing unpaired element is ignored, so the single-vertex encoding
/// produced by `mst()` yields no pairs.
pub fn edge_pairs<S: AsRef<str>>(flat: &[S]) -> impl Iterator<Item = (&str, &str)> {
    flat.chunks_exact(2)
        .map(|pair| (pair[0].as_ref(), pair[1].as_ref()))
}
