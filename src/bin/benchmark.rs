use std::env;
use std::time::{Duration, Instant};
use ordered_float::OrderedFloat;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use path_heap::graph::generators::generate_random_graph;
use path_heap::graph::{DirectedGraph, Graph};
use path_heap::{Error, FindPath};

/// Totals for one batch of queries on a single graph
struct QueryReport {
    found: usize,
    unreachable: usize,
    vertices_finalized: usize,
    total: Duration,
}

// Run `queries` random point-to-point searches on the graph
fn run_queries<R: Rng>(
    finder: &FindPath,
    graph: &DirectedGraph<usize, OrderedFloat<f64>>,
    queries: usize,
    rng: &mut R,
) -> QueryReport {
    let n = graph.vertex_count();
    let mut report = QueryReport {
        found: 0,
        unreachable: 0,
        vertices_finalized: 0,
        total: Duration::ZERO,
    };

    for _ in 0..queries {
        let source = rng.gen_range(0..n);
        let target = rng.gen_range(0..n);

        let start = Instant::now();
        let outcome = finder.search(graph, &source, &target);
        report.total += start.elapsed();

        match outcome {
            Ok((_, stats)) => {
                report.found += 1;
                report.vertices_finalized += stats.vertices_finalized;
            }
            Err(Error::NotFound { .. }) => report.unreachable += 1,
            Err(e) => log::warn!("Query {} -> {} failed: {}", source, target, e),
        }
    }

    report
}

fn main() {
    env_logger::init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    let max_vertices = if args.len() > 1 {
        args[1].parse().unwrap_or(100_000)
    } else {
        100_000
    };
    let queries = if args.len() > 2 {
        args[2].parse().unwrap_or(100)
    } else {
        100
    };

    // Edge factor: average number of edges per vertex
    let edge_factor = 4.0;

    println!("=====================================================");
    println!("Benchmark: FindPath point-to-point queries");
    println!("Edge factor: {} edges per vertex (on average)", edge_factor);
    println!("Queries per graph: {}", queries);
    println!("=====================================================");

    let mut rng = StdRng::seed_from_u64(42);
    let finder = FindPath::new();
    let mut results = Vec::new();

    let mut size = 1_000;
    while size <= max_vertices {
        println!("\nGenerating random graph with {} vertices...", size);
        let graph = generate_random_graph(size, edge_factor, &mut rng);
        println!("Graph has {} vertices and {} edges", graph.vertex_count(), graph.edge_count());

        let report = run_queries(&finder, &graph, queries, &mut rng);
        println!(
            "  - {} found, {} unreachable in {:?}",
            report.found, report.unreachable, report.total
        );

        results.push((size, report));
        size *= 10;
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!(
        "{:<10} | {:<10} | {:<12} | {:<15} | {:<15}",
        "Vertices", "Found", "Unreachable", "Avg query (us)", "Avg finalized"
    );
    println!("-----------------------------------------------------");

    for (size, report) in &results {
        let avg_micros = report.total.as_micros() as f64 / queries.max(1) as f64;
        let avg_finalized = report.vertices_finalized as f64 / report.found.max(1) as f64;
        println!(
            "{:<10} | {:<10} | {:<12} | {:<15.2} | {:<15.1}",
            size, report.found, report.unreachable, avg_micros, avg_finalized
        );
    }
}
