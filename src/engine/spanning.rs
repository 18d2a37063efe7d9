//! Prim's minimum spanning tree.
//!
//! The frontier is a min-heap of `(weight, sequence, from, to)` candidates.
//! Equal weights are extracted in the order they were pushed.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::graph::AdjacencyGraph;
use crate::types::{Weight, WeightedEdge};

type Frontier = BinaryHeap<Reverse<(Weight, u64, usize, usize)>>;

/// Spanning tree of the component containing the first vertex.
///
/// Vertices outside that component are not covered.
pub fn prim(graph: &AdjacencyGraph) -> Vec<WeightedEdge> {
    let n = graph.vertex_count();
    let mut tree = Vec::new();
    if n == 0 {
        return tree;
    }
    let mut visited = vec![false; n];
    let mut visited_count = 0;
    grow_tree(graph, 0, &mut visited, &mut visited_count, &mut tree);
    if visited_count < n {
        log::debug!(
            "MST covers {} of {} vertices; graph is disconnected",
            visited_count,
            n
        );
    }
    tree
}

/// Spanning trees of every component, started from each unvisited vertex in
/// first-appearance order and concatenated.
pub fn prim_forest(graph: &AdjacencyGraph) -> Vec<WeightedEdge> {
    let n = graph.vertex_count();
    let mut forest = Vec::new();
    let mut visited = vec![false; n];
    let mut visited_count = 0;
    let mut components = 0;
    for start in 0..n {
        if !visited[start] {
            grow_tree(graph, start, &mut visited, &mut visited_count, &mut forest);
            components += 1;
        }
    }
    log::debug!("Spanning forest has {} components", components);
    forest
}

fn grow_tree(
    graph: &AdjacencyGraph,
    start: usize,
    visited: &mut [bool],
    visited_count: &mut usize,
    tree: &mut Vec<WeightedEdge>,
) {
    let mut frontier = Frontier::new();
    let mut sequence = 0u64;

    visited[start] = true;
    *visited_count += 1;
    push_candidates(graph, start, visited, &mut frontier, &mut sequence);

    while *visited_count < visited.len() {
        let Some(Reverse((weight, _, from, to))) = frontier.pop() else {
            break;
        };
        if visited[to] {
            continue;
        }
        visited[to] = true;
        *visited_count += 1;
        tree.push(WeightedEdge::new(graph.label(from), graph.label(to), weight));
        push_candidates(graph, to, visited, &mut frontier, &mut sequence);
    }
}

fn push_candidates(
    graph: &AdjacencyGraph,
    from: usize,
    visited: &[bool],
    frontier: &mut Frontier,
    sequence: &mut u64,
) {
    for (to, weight) in graph.neighbors(from) {
        if !visited[to] {
            frontier.push(Reverse((weight, *sequence, from, to)));
            *sequence += 1;
        }
    }
}
