pub mod traits;
pub mod dijkstra;
pub mod bellman_ford;

pub use bellman_ford::{BellmanFord, RelaxationMode};
pub use dijkstra::Dijkstra;
pub use traits::{RunMetrics, ShortestPathAlgorithm, ShortestPathResult};

use crate::graph::{DirectedGraph, Graph};
use crate::{Error, Result};

/// Fails with `InvalidSource` unless `source` is a vertex of `graph`
pub(crate) fn check_source<G: Graph>(graph: &G, source: usize) -> Result<()> {
    if graph.has_vertex(source) {
        Ok(())
    } else {
        Err(Error::InvalidSource {
            vertex: source,
            vertex_count: graph.vertex_count(),
        })
    }
}

/// Shortest paths from `source` with Dijkstra over the adjacency list
pub fn shortest_path_priority_queue(
    graph: &DirectedGraph,
    source: usize,
) -> Result<ShortestPathResult> {
    Dijkstra::new().compute_shortest_paths(graph, source)
}

/// Shortest paths from `source` with Bellman-Ford over the edge list
pub fn shortest_path_relaxation(
    graph: &DirectedGraph,
    source: usize,
    mode: RelaxationMode,
) -> Result<ShortestPathResult> {
    BellmanFord::new()
        .with_mode(mode)
        .compute_shortest_paths(graph, source)
}
