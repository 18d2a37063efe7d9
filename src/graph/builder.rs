//! Fluent API for building AdjacencyGraph instances.
//!
//! Both load paths populate a builder first and only hand the finished graph
//! over on success, so a failed load never leaves partial adjacency behind.

use crate::types::{GraphError, GraphResult, Weight};

use super::AdjacencyGraph;

/// Fluent builder for constructing an AdjacencyGraph.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    graph: AdjacencyGraph,
}

impl GraphBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from parallel edge/weight lists, validating both.
    pub fn from_lists<S: AsRef<str>>(edges: &[S], weights: &[i64]) -> GraphResult<Self> {
        if edges.len() != 2 * weights.len() {
            return Err(GraphError::SizeMismatch {
                edges: edges.len(),
                weights: weights.len(),
            });
        }
        let mut builder = Self::new();
        for (pair, &weight) in edges.chunks_exact(2).zip(weights) {
            builder.insert(pair[0].as_ref(), pair[1].as_ref(), weight)?;
        }
        Ok(builder)
    }

    /// Register a vertex without any edges.
    pub fn add_vertex(&mut self, v: &str) -> &mut Self {
        self.graph.intern(v);
        self
    }

    /// Add an edge with an already validated weight.
    ///
    /// A zero-weight self-loop only registers the vertex. Any other self-loop
    /// becomes a single `u -> u` entry. Re-adding a pair overwrites its weight.
    pub fn link(&mut self, u: &str, v: &str, weight: Weight) -> &mut Self {
        if u == v && weight == 0 {
            return self.add_vertex(u);
        }
        let ui = self.graph.intern(u);
        let vi = self.graph.intern(v);
        self.graph.set_edge(ui, vi, weight);
        self
    }

    /// Add an edge from raw input, rejecting negative weights.
    pub fn insert(&mut self, u: &str, v: &str, weight: i64) -> GraphResult<&mut Self> {
        let checked = Weight::try_from(weight).map_err(|_| GraphError::InvalidWeight {
            u: u.to_string(),
            v: v.to_string(),
            weight,
        })?;
        Ok(self.link(u, v, checked))
    }

    /// Number of distinct vertices registered so far.
    pub fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }

    /// Build the final AdjacencyGraph.
    pub fn build(self) -> AdjacencyGraph {
        self.graph
    }
}
