//! Shortest-path reconciliation of a candidate subgraph against the full graph.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::graph::AdjacencyGraph;
use crate::types::{edge_pairs, Distance};

use super::paths::distances_from;

/// Vertices whose distance from `source` inside `subgraph` equals their true
/// shortest distance in `graph`.
///
/// The subgraph is a flattened pair sequence. It is walked breadth-first from
/// `source`; every first visit adds the full graph's weight for that hop. A
/// subgraph edge missing from the full graph is not traversable.
///
/// Returns `None` if `source` is not a vertex of `graph`, and `{source}` for
/// an empty subgraph.
pub fn report<S: AsRef<str>>(
    graph: &AdjacencyGraph,
    source: &str,
    subgraph: &[S],
) -> Option<HashSet<String>> {
    let src = graph.index_of(source)?;
    if subgraph.is_empty() {
        return Some(HashSet::from([source.to_string()]));
    }

    let shortest = distances_from(graph, src);
    let sub_adjacency = subgraph_adjacency(subgraph);

    let mut sub_dist: HashMap<&str, Distance> = HashMap::new();
    let mut queue: VecDeque<&str> = VecDeque::new();
    sub_dist.insert(source, 0);
    queue.push_back(source);

    while let Some(u) = queue.pop_front() {
        let du = sub_dist[u];
        let Some(neighbors) = sub_adjacency.get(u) else {
            continue;
        };
        for &v in neighbors {
            if sub_dist.contains_key(v) {
                continue;
            }
            match graph.edge_weight(u, v) {
                Some(w) => {
                    sub_dist.insert(v, du.saturating_add(w));
                    queue.push_back(v);
                }
                None => {
                    log::warn!("Subgraph edge ({}, {}) is not in the graph; skipping", u, v);
                }
            }
        }
    }

    let matched: HashSet<String> = sub_dist
        .into_iter()
        .filter(|(v, d)| {
            graph
                .index_of(v)
                .is_some_and(|idx| shortest[idx] == *d)
        })
        .map(|(v, _)| v.to_string())
        .collect();

    log::debug!(
        "Report from {:?}: {} of {} vertices keep their shortest distance",
        source,
        matched.len(),
        graph.vertex_count()
    );
    Some(matched)
}

/// Undirected adjacency lists for the subgraph, in pair order, without duplicates.
fn subgraph_adjacency<S: AsRef<str>>(subgraph: &[S]) -> HashMap<&str, Vec<&str>> {
    let mut adjacency: HashMap<&str, Vec<&str>> = HashMap::new();
    let mut seen: HashSet<(&str, &str)> = HashSet::new();
    for (u, v) in edge_pairs(subgraph) {
        for (a, b) in [(u, v), (v, u)] {
            if seen.insert((a, b)) {
                adjacency.entry(a).or_default().push(b);
            }
        }
    }
    adjacency
}
