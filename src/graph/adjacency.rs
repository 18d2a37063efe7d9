//! Core graph structure: interned vertex labels with symmetric weighted adjacency.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::io::BufRead;
use std::path::Path;

use serde::Serialize;

use crate::engine::{paths, report, spanning};
use crate::format::{GraphReader, ReaderOptions};
use crate::types::{edge_pairs, Distance, GraphResult, Weight, WeightedEdge, NO_EDGE};

use super::GraphBuilder;

/// A weighted, undirected graph keyed by string labels.
///
/// Vertices are interned into dense indices in order of first appearance.
/// Every undirected edge `{u, v}` is stored as the two directed entries
/// `u -> v` and `v -> u` with the same weight.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyGraph {
    /// Vertex labels, indexed by dense vertex index.
    labels: Vec<String>,
    /// Label -> dense vertex index.
    index: HashMap<String, usize>,
    /// Neighbor weights per vertex, keyed by neighbor index.
    adjacency: Vec<BTreeMap<usize, Weight>>,
}

/// Summary counts for a loaded graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    pub vertex_count: usize,
    pub edge_count: usize,
    /// Vertices with no adjacency entries at all.
    pub isolated_vertices: usize,
    /// Sum of all undirected edge weights, each edge counted once.
    pub total_weight: Weight,
}

impl AdjacencyGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every vertex and edge.
    pub fn clear(&mut self) {
        self.labels.clear();
        self.index.clear();
        self.adjacency.clear();
    }

    /// Replace the contents from parallel edge/weight lists.
    ///
    /// Edge `i` is `(edges[2i], edges[2i + 1])` with weight `weights[i]`.
    /// On error the graph is left empty.
    pub fn load_lists<S: AsRef<str>>(&mut self, edges: &[S], weights: &[i64]) -> GraphResult<()> {
        self.clear();
        *self = GraphBuilder::from_lists(edges, weights)?.build();
        log::debug!(
            "Loaded {} vertices and {} edges from lists",
            self.vertex_count(),
            self.edge_count()
        );
        Ok(())
    }

    /// Replace the contents from a text file using the default reader options.
    /// On error the graph is left empty.
    pub fn load_file(&mut self, path: &Path) -> GraphResult<()> {
        self.load_file_with(path, ReaderOptions::default())
    }

    /// Replace the contents from a text file. On error the graph is left empty.
    pub fn load_file_with(&mut self, path: &Path, options: ReaderOptions) -> GraphResult<()> {
        self.clear();
        *self = GraphReader::read_from_file(path, options)?;
        Ok(())
    }

    /// Replace the contents from any buffered text source.
    pub fn load_reader(&mut self, reader: impl BufRead, options: ReaderOptions) -> GraphResult<()> {
        self.clear();
        *self = GraphReader::read_from(reader, options)?;
        Ok(())
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.labels.len()
    }

    /// Number of undirected edges (directed entries halved).
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(BTreeMap::len).sum::<usize>() / 2
    }

    pub fn has_vertex(&self, v: &str) -> bool {
        self.index.contains_key(v)
    }

    /// All vertex labels in order of first appearance.
    pub fn vertices(&self) -> Vec<String> {
        self.labels.clone()
    }

    pub fn has_edge(&self, u: &str, v: &str) -> bool {
        self.edge_weight(u, v).is_some()
    }

    /// Weight of edge `(u, v)`, if present.
    pub fn edge_weight(&self, u: &str, v: &str) -> Option<Weight> {
        let u = self.index_of(u)?;
        let v = self.index_of(v)?;
        self.adjacency[u].get(&v).copied()
    }

    /// Weight of edge `(u, v)`, or [`NO_EDGE`] (-1) if absent.
    pub fn weight_or_sentinel(&self, u: &str, v: &str) -> i64 {
        match self.edge_weight(u, v) {
            Some(w) => i64::try_from(w).unwrap_or(i64::MAX),
            None => NO_EDGE,
        }
    }

    /// Neighbors of `u`, ordered by their first appearance. Empty for an unknown vertex.
    pub fn adjacent(&self, u: &str) -> Vec<String> {
        match self.index_of(u) {
            Some(idx) => self
                .neighbors(idx)
                .map(|(v, _)| self.labels[v].clone())
                .collect(),
            None => Vec::new(),
        }
    }

    /// Minimum spanning tree of the start vertex's component, as flattened pairs.
    ///
    /// An empty graph yields an empty vector; a single-vertex graph yields a
    /// vector holding only that vertex.
    pub fn mst(&self) -> Vec<String> {
        match self.vertex_count() {
            0 => Vec::new(),
            1 => vec![self.labels[0].clone()],
            _ => flatten(&spanning::prim(self)),
        }
    }

    /// MST edges with their weights, in extraction order.
    pub fn mst_edges(&self) -> Vec<WeightedEdge> {
        spanning::prim(self)
    }

    /// Spanning trees of every component, concatenated as flattened pairs.
    pub fn spanning_forest(&self) -> Vec<String> {
        flatten(&spanning::prim_forest(self))
    }

    /// Spanning forest edges with their weights.
    pub fn spanning_forest_edges(&self) -> Vec<WeightedEdge> {
        spanning::prim_forest(self)
    }

    /// Shortest distance from `source` to every vertex. Unreachable vertices map
    /// to [`UNREACHABLE`](crate::types::UNREACHABLE); an unknown source yields an empty map.
    pub fn shortest_paths(&self, source: &str) -> HashMap<String, Distance> {
        paths::shortest_paths(self, source)
    }

    /// Vertices whose distance from `source` through `subgraph` matches their
    /// true shortest distance. `None` if `source` is not a vertex.
    pub fn report<S: AsRef<str>>(&self, source: &str, subgraph: &[S]) -> Option<HashSet<String>> {
        report::report(self, source, subgraph)
    }

    /// Sum of the weights of a flattened pair sequence. `None` if any pair is
    /// not an edge of this graph.
    pub fn total_weight<S: AsRef<str>>(&self, flat: &[S]) -> Option<Weight> {
        edge_pairs(flat).try_fold(0 as Weight, |acc, (u, v)| {
            self.edge_weight(u, v).map(|w| acc.saturating_add(w))
        })
    }

    /// Summary counts.
    pub fn stats(&self) -> GraphStats {
        let total_weight = self
            .adjacency
            .iter()
            .enumerate()
            .flat_map(|(u, nbrs)| nbrs.range(u..).map(|(_, &w)| w))
            .fold(0 as Weight, Weight::saturating_add);
        GraphStats {
            vertex_count: self.vertex_count(),
            edge_count: self.edge_count(),
            isolated_vertices: self.adjacency.iter().filter(|n| n.is_empty()).count(),
            total_weight,
        }
    }

    pub(crate) fn index_of(&self, label: &str) -> Option<usize> {
        self.index.get(label).copied()
    }

    pub(crate) fn label(&self, idx: usize) -> &str {
        &self.labels[idx]
    }

    pub(crate) fn labels(&self) -> &[String] {
        &self.labels
    }

    pub(crate) fn neighbors(&self, idx: usize) -> impl Iterator<Item = (usize, Weight)> + '_ {
        self.adjacency[idx].iter().map(|(&v, &w)| (v, w))
    }

    /// Intern `label`, returning its dense index.
    pub(crate) fn intern(&mut self, label: &str) -> usize {
        if let Some(&idx) = self.index.get(label) {
            return idx;
        }
        let idx = self.labels.len();
        self.labels.push(label.to_string());
        self.index.insert(label.to_string(), idx);
        self.adjacency.push(BTreeMap::new());
        idx
    }

    /// Insert or overwrite the symmetric entries for `{u, v}`.
    pub(crate) fn set_edge(&mut self, u: usize, v: usize, weight: Weight) {
        self.adjacency[u].insert(v, weight);
        self.adjacency[v].insert(u, weight);
    }
}

fn flatten(edges: &[WeightedEdge]) -> Vec<String> {
    edges
        .iter()
        .flat_map(|e| [e.from.clone(), e.to.clone()])
        .collect()
}
