//! Dijkstra single-source shortest paths.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use crate::graph::AdjacencyGraph;
use crate::types::{Distance, UNREACHABLE};

/// Shortest distance from `source` to every vertex, keyed by label.
///
/// Unreachable vertices map to [`UNREACHABLE`]. An unknown source yields an
/// empty map.
pub fn shortest_paths(graph: &AdjacencyGraph, source: &str) -> HashMap<String, Distance> {
    let Some(src) = graph.index_of(source) else {
        log::debug!("Shortest paths requested from unknown vertex {:?}", source);
        return HashMap::new();
    };
    graph
        .labels()
        .iter()
        .cloned()
        .zip(distances_from(graph, src))
        .collect()
}

/// Shortest distances indexed by dense vertex index.
pub(crate) fn distances_from(graph: &AdjacencyGraph, src: usize) -> Vec<Distance> {
    let mut dist = vec![UNREACHABLE; graph.vertex_count()];
    let mut heap = BinaryHeap::new();
    dist[src] = 0;
    heap.push(Reverse((0 as Distance, src)));

    while let Some(Reverse((d, u))) = heap.pop() {
        // Superseded entry
        if d > dist[u] {
            continue;
        }
        for (v, w) in graph.neighbors(u) {
            let candidate = d.saturating_add(w);
            if candidate < dist[v] {
                dist[v] = candidate;
                heap.push(Reverse((candidate, v)));
            }
        }
    }

    dist
}
