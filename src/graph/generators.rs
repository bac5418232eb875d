use crate::graph::{DirectedGraph, Graph, MutableGraph};
use ordered_float::OrderedFloat;
use rand::prelude::*;
use std::collections::HashSet;

/// Generates a random directed graph with `n` vertices and about `edge_factor * n` edges.
/// Self-loops are skipped and weights are drawn from `1.0..100.0`.
pub fn generate_random_graph<R: Rng>(
    n: usize,
    edge_factor: f64,
    rng: &mut R,
) -> DirectedGraph<usize, OrderedFloat<f64>> {
    let mut graph = DirectedGraph::with_capacity(n);
    for v in 0..n {
        graph.add_vertex(v);
    }
    if n < 2 {
        return graph;
    }

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            let weight = OrderedFloat(rng.gen_range(1.0..100.0));
            graph.add_edge(&u, &v, weight);
        }
    }

    graph
}

/// Generates a `width` x `height` grid with edges in both directions between
/// horizontally and vertically adjacent cells, all of weight 1.
/// Vertex `y * width + x` is the cell at `(x, y)`.
pub fn generate_grid(width: usize, height: usize) -> DirectedGraph<usize, OrderedFloat<f64>> {
    let mut graph = DirectedGraph::with_capacity(width * height);
    for v in 0..(width * height) {
        graph.add_vertex(v);
    }

    let index = |x: usize, y: usize| -> usize { y * width + x };
    let weight = OrderedFloat(1.0);

    for y in 0..height {
        for x in 0..width {
            let current = index(x, y);
            if x > 0 {
                graph.add_edge(&current, &index(x - 1, y), weight);
            }
            if x + 1 < width {
                graph.add_edge(&current, &index(x + 1, y), weight);
            }
            if y > 0 {
                graph.add_edge(&current, &index(x, y - 1), weight);
            }
            if y + 1 < height {
                graph.add_edge(&current, &index(x, y + 1), weight);
            }
        }
    }

    graph
}

/// Generates a Barabási-Albert scale-free graph with n vertices and m edges per new vertex
pub fn generate_barabasi_albert<R: Rng>(
    n: usize,
    m: usize,
    rng: &mut R,
) -> DirectedGraph<usize, OrderedFloat<f64>> {
    assert!(m > 0, "m must be positive");
    assert!(n > m, "n must be greater than m");

    let mut graph = DirectedGraph::with_capacity(n);

    // Connect initial vertices (complete graph)
    for v in 0..m {
        graph.add_vertex(v);
    }
    for i in 0..m {
        for j in 0..m {
            if i != j && !graph.has_edge(&i, &j) {
                let weight = OrderedFloat(rng.gen_range(1.0..100.0));
                graph.add_edge(&i, &j, weight);
            }
        }
    }

    // Degree of each vertex for preferential attachment
    let mut degrees = vec![m - 1; m];
    let mut total_degree = m * (m - 1);

    for i in m..n {
        graph.add_vertex(i);
        let mut added_edges = HashSet::new();

        while added_edges.len() < m {
            let mut target_value = rng.gen_range(0..total_degree.max(1));
            let mut target = 0;

            while target < i && target_value >= degrees[target] {
                target_value -= degrees[target];
                target += 1;
            }

            // No degree mass left to sample from
            if target >= i {
                target = rng.gen_range(0..i);
            }

            if added_edges.insert(target) {
                let weight = OrderedFloat(rng.gen_range(1.0..100.0));
                graph.add_edge(&i, &target, weight);
                degrees[target] += 1;
                total_degree += 1;
            }
        }

        degrees.push(m);
        total_degree += m;
    }

    graph
}
