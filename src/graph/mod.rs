//! In-memory graph operations — the core data structure and its capability trait.

pub mod adjacency;
pub mod builder;

use std::collections::{HashMap, HashSet};
use std::path::Path;

pub use adjacency::{AdjacencyGraph, GraphStats};
pub use builder::GraphBuilder;

use crate::types::{Distance, GraphResult};

/// The full capability set of a weighted undirected graph: loading, queries,
/// and the three analyses.
///
/// Weights cross this boundary in their numeric-sentinel form: [`Graph::weight`]
/// returns `-1` for a missing edge and [`Graph::shortest_paths`] maps
/// unreachable vertices to `u64::MAX`.
pub trait Graph {
    /// Replace the contents from a text file.
    fn load_file(&mut self, path: &Path) -> GraphResult<()>;

    /// Replace the contents from parallel edge/weight lists.
    fn load_lists(&mut self, edges: &[String], weights: &[i64]) -> GraphResult<()>;

    fn vertex_count(&self) -> usize;

    fn has_vertex(&self, v: &str) -> bool;

    fn vertices(&self) -> Vec<String>;

    fn edge_count(&self) -> usize;

    fn has_edge(&self, u: &str, v: &str) -> bool;

    /// Edge weight, or `-1` if the edge does not exist.
    fn weight(&self, u: &str, v: &str) -> i64;

    fn adjacent(&self, u: &str) -> Vec<String>;

    /// Flattened MST pairs; see [`AdjacencyGraph::mst`].
    fn mst(&self) -> Vec<String>;

    fn shortest_paths(&self, source: &str) -> HashMap<String, Distance>;

    /// `None` if `source` is not a vertex of this graph.
    fn report(&self, source: &str, subgraph: &[String]) -> Option<HashSet<String>>;
}

impl Graph for AdjacencyGraph {
    fn load_file(&mut self, path: &Path) -> GraphResult<()> {
        AdjacencyGraph::load_file(self, path)
    }

    fn load_lists(&mut self, edges: &[String], weights: &[i64]) -> GraphResult<()> {
        AdjacencyGraph::load_lists(self, edges, weights)
    }

    fn vertex_count(&self) -> usize {
        AdjacencyGraph::vertex_count(self)
    }

    fn has_vertex(&self, v: &str) -> bool {
        AdjacencyGraph::has_vertex(self, v)
    }

    fn vertices(&self) -> Vec<String> {
        AdjacencyGraph::vertices(self)
    }

    fn edge_count(&self) -> usize {
        AdjacencyGraph::edge_count(self)
    }

    fn has_edge(&self, u: &str, v: &str) -> bool {
        AdjacencyGraph::has_edge(self, u, v)
    }

    fn weight(&self, u: &str, v: &str) -> i64 {
        self.weight_or_sentinel(u, v)
    }

    fn adjacent(&self, u: &str) -> Vec<String> {
        AdjacencyGraph::adjacent(self, u)
    }

    fn mst(&self) -> Vec<String> {
        AdjacencyGraph::mst(self)
    }

    fn shortest_paths(&self, source: &str) -> HashMap<String, Distance> {
        AdjacencyGraph::shortest_paths(self, source)
    }

    fn report(&self, source: &str, subgraph: &[String]) -> Option<HashSet<String>> {
        AdjacencyGraph::report(self, source, subgraph)
    }
}
