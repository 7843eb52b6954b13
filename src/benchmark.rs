//! Size sweeps timing Dijkstra against Bellman-Ford.

use std::time::Duration;

use log::{debug, info};

use crate::algorithm::{BellmanFord, Dijkstra, RelaxationMode, ShortestPathAlgorithm};
use crate::graph::{generate_graph, Graph};
use crate::{Error, Result};

/// Timings for one sampled graph size
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkSample {
    pub node_count: usize,
    pub edge_count: usize,
    pub dijkstra_time: Duration,
    pub bellman_ford_time: Duration,
}

/// Distance between sampled sizes for a sweep up to `max_nodes`
pub fn step_for(max_nodes: usize) -> usize {
    match max_nodes {
        0..=200 => 5,
        201..=1_000 => 20,
        1_001..=10_000 => 200,
        _ => 1_000,
    }
}

/// Every multiple of the step up to `max_nodes`, then `max_nodes` itself if
/// it was not already the last one
pub fn sample_sizes(max_nodes: usize) -> Vec<usize> {
    let step = step_for(max_nodes);
    let mut sizes: Vec<usize> = (step..=max_nodes).step_by(step).collect();
    if sizes.last() != Some(&max_nodes) {
        sizes.push(max_nodes);
    }
    sizes
}

/// Runs size sweeps, generating a fresh graph for every sampled size.
///
/// Both algorithms are timed on the same graph at each size, so the two
/// timings of a sample always describe one topology.
#[derive(Debug, Clone, Copy, Default)]
pub struct BenchmarkDriver {
    relaxation_mode: RelaxationMode,
}

impl BenchmarkDriver {
    pub fn new() -> Self {
        BenchmarkDriver::default()
    }

    /// Control flow used for the Bellman-Ford timings
    pub fn with_relaxation_mode(mut self, mode: RelaxationMode) -> Self {
        self.relaxation_mode = mode;
        self
    }

    /// Times both algorithms from vertex 0 at every size of [`sample_sizes`]
    pub fn run(&self, max_nodes: usize) -> Result<Vec<BenchmarkSample>> {
        if max_nodes == 0 {
            return Err(Error::InvalidSize(0));
        }

        let sizes = sample_sizes(max_nodes);
        info!(
            "benchmark sweep up to {} nodes: {} sizes, step {}",
            max_nodes,
            sizes.len(),
            step_for(max_nodes)
        );

        let dijkstra = Dijkstra::new();
        let bellman_ford = BellmanFord::new().with_mode(self.relaxation_mode);

        let mut samples = Vec::with_capacity(sizes.len());
        for node_count in sizes {
            let graph = generate_graph(node_count)?;
            let source = 0;

            let dijkstra_result = dijkstra.compute_shortest_paths(&graph, source)?;
            let bellman_ford_result = bellman_ford.compute_shortest_paths(&graph, source)?;

            debug!(
                "n={} e={}: dijkstra {:?}, bellman-ford {:?}",
                node_count,
                graph.edge_count(),
                dijkstra_result.elapsed,
                bellman_ford_result.elapsed
            );

            samples.push(BenchmarkSample {
                node_count,
                edge_count: graph.edge_count(),
                dijkstra_time: dijkstra_result.elapsed,
                bellman_ford_time: bellman_ford_result.elapsed,
            });
        }

        Ok(samples)
    }
}

/// Benchmark sweep with the default (recursive) Bellman-Ford
pub fn run_benchmark(max_nodes: usize) -> Result<Vec<BenchmarkSample>> {
    BenchmarkDriver::new().run(max_nodes)
}
