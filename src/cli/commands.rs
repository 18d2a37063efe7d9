//! CLI command implementations.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::config::{NexusConfig, OutputFormat};
use crate::format::{GraphReader, ReaderOptions};
use crate::graph::AdjacencyGraph;
use crate::types::{Distance, GraphError, GraphResult, Weight, WeightedEdge, UNREACHABLE};

/// Settings shared by every command.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandContext {
    pub json: bool,
    pub pretty: bool,
    pub reader: ReaderOptions,
}

impl From<&NexusConfig> for CommandContext {
    fn from(config: &NexusConfig) -> Self {
        Self {
            json: config.format == OutputFormat::Json,
            pretty: config.pretty,
            reader: config.reader,
        }
    }
}

impl CommandContext {
    fn print_json(&self, value: &serde_json::Value) {
        let text = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        println!("{}", text.unwrap_or_default());
    }
}

fn load(path: &Path, ctx: &CommandContext) -> GraphResult<AdjacencyGraph> {
    GraphReader::read_from_file(path, ctx.reader)
}

/// The requested source, or the first vertex when none is given.
fn pick_source(graph: &AdjacencyGraph, source: Option<&str>) -> GraphResult<String> {
    match source {
        Some(s) if graph.has_vertex(s) => Ok(s.to_string()),
        Some(s) => Err(GraphError::UnknownVertex(s.to_string())),
        None => graph
            .vertices()
            .into_iter()
            .next()
            .ok_or_else(|| GraphError::UnknownVertex(String::new())),
    }
}

fn format_distance(d: Distance) -> String {
    if d == UNREACHABLE {
        "inf".to_string()
    } else {
        d.to_string()
    }
}

fn distance_json(d: Distance) -> serde_json::Value {
    if d == UNREACHABLE {
        serde_json::Value::Null
    } else {
        serde_json::json!(d)
    }
}

/// Display summary information about a graph file.
pub fn cmd_info(path: &Path, ctx: &CommandContext) -> GraphResult<()> {
    let graph = load(path, ctx)?;
    print_info(path, &graph, ctx);
    Ok(())
}

fn print_info(path: &Path, graph: &AdjacencyGraph, ctx: &CommandContext) {
    let stats = graph.stats();

    if ctx.json {
        ctx.print_json(&serde_json::json!({
            "file": path.display().to_string(),
            "vertices": stats.vertex_count,
            "edges": stats.edge_count,
            "isolated_vertices": stats.isolated_vertices,
            "total_weight": stats.total_weight,
        }));
    } else {
        println!("File: {}", path.display());
        println!("Vertices: {}", stats.vertex_count);
        println!("Edges: {}", stats.edge_count);
        println!("Isolated vertices: {}", stats.isolated_vertices);
        println!("Total weight: {}", stats.total_weight);
    }
}

/// Print the minimum spanning tree (or spanning forest) of a graph file.
pub fn cmd_mst(path: &Path, forest: bool, ctx: &CommandContext) -> GraphResult<()> {
    let graph = load(path, ctx)?;
    print_mst(&graph, forest, ctx);
    Ok(())
}

fn print_mst(graph: &AdjacencyGraph, forest: bool, ctx: &CommandContext) {
    let edges: Vec<WeightedEdge> = if forest {
        graph.spanning_forest_edges()
    } else {
        graph.mst_edges()
    };
    let total = edges
        .iter()
        .fold(0 as Weight, |acc, e| acc.saturating_add(e.weight));
    let covered = if forest || graph.vertex_count() <= 1 {
        graph.vertex_count()
    } else {
        edges.len() + 1
    };

    if ctx.json {
        ctx.print_json(&serde_json::json!({
            "edges": edges,
            "total_weight": total,
            "vertices_covered": covered,
            "vertex_count": graph.vertex_count(),
        }));
    } else {
        let label = if forest { "Spanning forest" } else { "Minimum spanning tree" };
        println!("{} ({} edges, total weight {}):", label, edges.len(), total);
        for e in &edges {
            println!("  {} - {} ({})", e.from, e.to, e.weight);
        }
        if covered < graph.vertex_count() {
            println!(
                "  Covers {} of {} vertices (graph is disconnected)",
                covered,
                graph.vertex_count()
            );
        }
    }
}

/// Print shortest distances from a source vertex.
pub fn cmd_paths(path: &Path, source: Option<&str>, ctx: &CommandContext) -> GraphResult<()> {
    let graph = load(path, ctx)?;
    print_paths(&graph, source, ctx)
}

fn print_paths(
    graph: &AdjacencyGraph,
    source: Option<&str>,
    ctx: &CommandContext,
) -> GraphResult<()> {
    let source = pick_source(graph, source)?;
    let distances = graph.shortest_paths(&source);

    if ctx.json {
        let map: serde_json::Map<String, serde_json::Value> = graph
            .vertices()
            .into_iter()
            .map(|v| {
                let d = distances.get(&v).copied().unwrap_or(UNREACHABLE);
                (v, distance_json(d))
            })
            .collect();
        ctx.print_json(&serde_json::json!({ "source": source, "distances": map }));
    } else {
        println!("Shortest paths from {:?}:", source);
        for v in graph.vertices() {
            let d = distances.get(&v).copied().unwrap_or(UNREACHABLE);
            println!("  {}: {}", v, format_distance(d));
        }
    }
    Ok(())
}

/// Report which vertices keep their shortest distance inside the graph's own MST.
pub fn cmd_report(path: &Path, source: Option<&str>, ctx: &CommandContext) -> GraphResult<()> {
    let graph = load(path, ctx)?;
    print_report(&graph, source, ctx)
}

fn print_report(
    graph: &AdjacencyGraph,
    source: Option<&str>,
    ctx: &CommandContext,
) -> GraphResult<()> {
    let source = pick_source(graph, source)?;
    let mst = graph.mst();
    let matched = graph
        .report(&source, &mst)
        .ok_or_else(|| GraphError::UnknownVertex(source.clone()))?;
    let ordered = in_graph_order(graph, &matched);

    if ctx.json {
        ctx.print_json(&serde_json::json!({
            "source": source,
            "matched": ordered,
            "vertex_count": graph.vertex_count(),
        }));
    } else {
        println!(
            "Vertices whose MST path from {:?} is a shortest path ({} of {}):",
            source,
            ordered.len(),
            graph.vertex_count()
        );
        for v in &ordered {
            println!("  {}", v);
        }
    }
    Ok(())
}

/// Run every analysis on each file, loading it once. Failures are reported
/// per file and processing continues; the first error is returned at the end.
pub fn cmd_analyze(paths: &[PathBuf], ctx: &CommandContext) -> GraphResult<()> {
    let mut first_error = None;
    for path in paths {
        if !ctx.json {
            println!("== {}", path.display());
        }
        let result = load(path, ctx).and_then(|graph| {
            print_info(path, &graph, ctx);
            print_paths(&graph, None, ctx)?;
            print_mst(&graph, false, ctx);
            print_report(&graph, None, ctx)
        });
        if let Err(e) = result {
            eprintln!("Error processing {}: {}", path.display(), e);
            first_error.get_or_insert(e);
        }
    }
    match first_error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

fn in_graph_order(graph: &AdjacencyGraph, set: &HashSet<String>) -> Vec<String> {
    graph
        .vertices()
        .into_iter()
        .filter(|v| set.contains(v))
        .collect()
}
