use log::debug;

use crate::algorithm::{shortest_path_priority_queue, shortest_path_relaxation, RelaxationMode};
use crate::algorithm::ShortestPathResult;
use crate::graph::{generate_graph, DirectedGraph, Graph};
use crate::Result;

/// Both algorithms run on one freshly generated graph
#[derive(Debug, Clone)]
pub struct Comparison {
    pub graph: DirectedGraph,
    pub source: usize,
    pub relaxation_mode: RelaxationMode,
    pub dijkstra: ShortestPathResult,
    pub bellman_ford: ShortestPathResult,
}

impl Comparison {
    /// True when both algorithms found the same distance for every vertex
    pub fn distances_agree(&self) -> bool {
        self.dijkstra.distances == self.bellman_ford.distances
    }
}

/// Generates a graph with `node_count` vertices and runs both algorithms from
/// `source`, which must be a vertex of that graph
pub fn compare(node_count: usize, source: usize, mode: RelaxationMode) -> Result<Comparison> {
    let graph = generate_graph(node_count)?;
    compare_on(graph, source, mode)
}

/// Runs both algorithms on an existing graph
pub fn compare_on(graph: DirectedGraph, source: usize, mode: RelaxationMode) -> Result<Comparison> {
    let dijkstra = shortest_path_priority_queue(&graph, source)?;
    let bellman_ford = shortest_path_relaxation(&graph, source, mode)?;

    debug!(
        "compared on {} vertices / {} edges from {}: dijkstra {:?}, bellman-ford {:?}",
        graph.vertex_count(),
        graph.edge_count(),
        source,
        dijkstra.elapsed,
        bellman_ford.elapsed
    );

    Ok(Comparison {
        graph,
        source,
        relaxation_mode: mode,
        dijkstra,
        bellman_ford,
    })
}
