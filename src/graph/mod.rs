pub mod traits;
pub mod directed;
pub mod generators;

pub use traits::{Graph, MutableGraph};
pub use directed::{DirectedGraph, Edge};
pub use generators::{generate_graph, generate_graph_with_rng};
