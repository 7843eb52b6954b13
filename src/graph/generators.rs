use log::debug;
use rand::prelude::*;

use crate::graph::{DirectedGraph, Graph, MutableGraph};
use crate::{Error, Result, Weight};

/// Smallest edge weight the generator emits
pub const MIN_WEIGHT: Weight = 1;

/// Largest edge weight the generator emits
pub const MAX_WEIGHT: Weight = 20;

/// Number of densification attempts for a graph with `n` vertices
pub fn extra_edge_attempts(n: usize) -> usize {
    (n / 2).max(1)
}

/// Generates a random weighted directed graph with `n` vertices using the
/// thread-local RNG.
///
/// See [`generate_graph_with_rng`] for the construction.
pub fn generate_graph(n: usize) -> Result<DirectedGraph> {
    let mut rng = rand::thread_rng();
    generate_graph_with_rng(n, &mut rng)
}

/// Generates a random weighted directed graph with `n` vertices.
///
/// First a random spanning tree rooted at vertex 0 is built: every vertex `i`
/// gets one incoming edge from a vertex picked uniformly in `[0, i)`, so all
/// vertices are reachable from 0. Then `max(1, n / 2)` extra edges are
/// attempted between uniformly drawn pairs; attempts that would create a
/// self-loop or repeat an existing `(source, target)` pair are dropped.
/// Weights are uniform in `[1, 20]`.
pub fn generate_graph_with_rng<R: Rng>(n: usize, rng: &mut R) -> Result<DirectedGraph> {
    if n == 0 {
        return Err(Error::InvalidSize(0));
    }

    let mut graph = DirectedGraph::with_capacity(n);

    // Spanning tree: edges always point from a lower to a higher index
    for target in 1..n {
        let source = rng.gen_range(0..target);
        let weight = rng.gen_range(MIN_WEIGHT..=MAX_WEIGHT);
        graph.add_edge(source, target, weight);
    }

    let attempts = extra_edge_attempts(n);
    let mut added = 0;
    for _ in 0..attempts {
        let source = rng.gen_range(0..n);
        let target = rng.gen_range(0..n);
        if source == target {
            continue;
        }
        let weight = rng.gen_range(MIN_WEIGHT..=MAX_WEIGHT);
        if graph.add_edge(source, target, weight) {
            added += 1;
        }
    }

    debug!(
        "generated graph: {} vertices, {} edges ({} of {} extra edges kept)",
        n,
        graph.edge_count(),
        added,
        attempts
    );

    Ok(graph)
}
