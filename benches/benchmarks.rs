//! Criterion benchmarks for GraphNexus.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use graph_nexus::graph::AdjacencyGraph;

/// A star rooted at "0" (so the graph is connected) plus `2 * size` random
/// edges with weights in 1..=100.
fn make_edge_lists(size: usize) -> (Vec<String>, Vec<i64>) {
    let mut rng = StdRng::seed_from_u64(42);
    let mut edges = Vec::with_capacity(6 * size);
    let mut weights = Vec::with_capacity(3 * size);

    for i in 1..size {
        edges.push("0".to_string());
        edges.push(i.to_string());
        weights.push(i as i64);
    }
    for _ in 0..size * 2 {
        let u = rng.gen_range(0..size);
        let v = rng.gen_range(0..size);
        if u != v {
            edges.push(u.to_string());
            edges.push(v.to_string());
            weights.push(rng.gen_range(1..=100));
        }
    }
    (edges, weights)
}

fn make_graph(size: usize) -> AdjacencyGraph {
    let (edges, weights) = make_edge_lists(size);
    let mut graph = AdjacencyGraph::new();
    graph.load_lists(&edges, &weights).unwrap();
    graph
}

fn bench_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("load_lists");
    for size in [100, 1_000, 10_000] {
        let (edges, weights) = make_edge_lists(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                let mut graph = AdjacencyGraph::new();
                graph.load_lists(&edges, &weights).unwrap();
                graph
            })
        });
    }
    group.finish();
}

fn bench_queries(c: &mut Criterion) {
    let graph = make_graph(10_000);
    let mut rng = StdRng::seed_from_u64(7);
    c.bench_function("has_edge_10k", |b| {
        b.iter(|| {
            let u = rng.gen_range(0..10_000).to_string();
            let v = rng.gen_range(0..10_000).to_string();
            graph.has_edge(&u, &v)
        })
    });
    c.bench_function("adjacent_10k", |b| b.iter(|| graph.adjacent("0").len()));
}

fn bench_algorithms(c: &mut Criterion) {
    let mut group = c.benchmark_group("algorithms");
    for size in [100, 1_000, 10_000] {
        let graph = make_graph(size);
        group.bench_with_input(BenchmarkId::new("mst", size), &graph, |b, g| {
            b.iter(|| g.mst())
        });
        group.bench_with_input(BenchmarkId::new("shortest_paths", size), &graph, |b, g| {
            b.iter(|| g.shortest_paths("0"))
        });
        let mst = graph.mst();
        group.bench_with_input(BenchmarkId::new("report", size), &graph, |b, g| {
            b.iter(|| g.report("0", &mst))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_load, bench_queries, bench_algorithms);
criterion_main!(benches);
