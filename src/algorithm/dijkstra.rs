use std::time::Instant;

use log::debug;

use crate::algorithm::{check_source, ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::MinQueue;
use crate::graph::Graph;
use crate::{Distance, Result};

/// Classic Dijkstra's algorithm with a binary heap and lazy deletion
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<G> ShortestPathAlgorithm<G> for Dijkstra
where
    G: Graph,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult> {
        check_source(graph, source)?;

        let start = Instant::now();
        let mut result = ShortestPathResult::init(graph.vertex_count(), source);

        let mut queue: MinQueue<usize, Distance> = MinQueue::with_capacity(graph.vertex_count());
        queue.push(source, 0);
        result.metrics.heap_pushes += 1;

        while let Some((u, dist_u)) = queue.pop() {
            // Every queued vertex already has a distance; a larger one means the
            // entry was superseded after it was pushed
            match result.distances[u] {
                Some(current) if dist_u > current => {
                    result.metrics.stale_entries_skipped += 1;
                    continue;
                }
                _ => {}
            }

            for (v, weight) in graph.outgoing_edges(u) {
                let candidate = dist_u + Distance::from(weight);
                if result.relax(u, v, candidate) {
                    queue.push(v, candidate);
                    result.metrics.heap_pushes += 1;
                }
            }
        }

        result.elapsed = start.elapsed();
        debug!(
            "dijkstra from {}: {} reachable, {} pushes, {} stale, {:?}",
            source,
            result.reachable_count(),
            result.metrics.heap_pushes,
            result.metrics.stale_entries_skipped,
            result.elapsed
        );

        Ok(result)
    }
}
