//! SSSP Compare - Dijkstra vs Bellman-Ford on random directed graphs
//!
//! This library generates random weighted directed graphs and runs two classic
//! single-source shortest path algorithms on them: a binary-heap Dijkstra with
//! lazy deletion and an early-terminating Bellman-Ford (iterative or recursive).
//! Every run reports distances, predecessors and its wall-clock time so the two
//! engines can be compared on the same topology.

pub mod algorithm;
pub mod benchmark;
pub mod comparison;
pub mod data_structures;
pub mod graph;
pub mod web;

/// Re-export main types for convenient use
pub use algorithm::{
    bellman_ford::{BellmanFord, RelaxationMode},
    dijkstra::Dijkstra,
    shortest_path_priority_queue, shortest_path_relaxation, RunMetrics, ShortestPathAlgorithm,
    ShortestPathResult,
};
pub use benchmark::{run_benchmark, BenchmarkDriver, BenchmarkSample};
pub use comparison::{compare, Comparison};
pub use graph::{generate_graph, DirectedGraph, Edge};

/// Weight of a single edge
pub type Weight = u32;

/// Accumulated path length; wide enough that summing edge weights never overflows
pub type Distance = u64;

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid graph size: {0} (a graph needs at least one node)")]
    InvalidSize(i64),

    #[error("Invalid source vertex {vertex}: graph has {vertex_count} vertices")]
    InvalidSource { vertex: usize, vertex_count: usize },
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
