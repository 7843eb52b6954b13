use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::algorithm::ShortestPathResult;
use crate::benchmark::BenchmarkSample;
use crate::graph::DirectedGraph;

/// Display label of a vertex, `V<index>`
pub fn node_label(index: usize) -> String {
    format!("V{}", index)
}

/// Parses a `V<index>` label, falling back to vertex 0 when the label is
/// malformed or outside `[0, vertex_count)`
pub fn parse_node_label(label: &str, vertex_count: usize) -> usize {
    match label.replace('V', "").trim().parse::<i64>() {
        Ok(index) if index >= 0 && (index as u64) < vertex_count as u64 => index as usize,
        _ => 0,
    }
}

/// Parameters for a side-by-side run
#[derive(Debug, Deserialize)]
pub struct CompareRequest {
    #[serde(default = "default_num_nodes")]
    pub num_nodes: i64,
    #[serde(default = "default_start_node")]
    pub start_node: String,
    #[serde(default)]
    pub relaxation_mode: Option<String>,
}

fn default_num_nodes() -> i64 {
    10
}

fn default_start_node() -> String {
    node_label(0)
}

/// Parameters for a size sweep
#[derive(Debug, Deserialize)]
pub struct BenchmarkRequest {
    #[serde(default = "default_max_nodes")]
    pub max_nodes: i64,
    #[serde(default)]
    pub relaxation_mode: Option<String>,
}

fn default_max_nodes() -> i64 {
    200
}

/// Distance and predecessor of a single vertex
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NodeResult {
    pub node: String,
    /// -1 for unreachable vertices
    pub distance: i64,
    pub previous: Option<String>,
}

/// One algorithm's output with its running time in milliseconds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlgorithmReport {
    pub results: Vec<NodeResult>,
    pub execution_time: f64,
}

impl From<&ShortestPathResult> for AlgorithmReport {
    fn from(result: &ShortestPathResult) -> Self {
        let results = result
            .distances
            .iter()
            .zip(&result.predecessors)
            .enumerate()
            .map(|(i, (distance, previous))| NodeResult {
                node: node_label(i),
                distance: distance.map_or(-1, |d| d as i64),
                previous: previous.map(node_label),
            })
            .collect();

        AlgorithmReport {
            results,
            execution_time: result.elapsed_ms(),
        }
    }
}

/// A labeled edge for visualization
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WebEdge {
    pub source: String,
    pub target: String,
    pub weight: u32,
}

/// Response of `/api/compare`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompareResponse {
    pub comparison_id: Uuid,
    pub dijkstra: AlgorithmReport,
    pub bellman_ford: AlgorithmReport,
    pub graph: BTreeMap<String, Vec<(String, u32)>>,
    pub nodes: Vec<String>,
    pub edges: Vec<WebEdge>,
}

/// Adjacency view keyed by vertex label
pub fn web_adjacency(graph: &DirectedGraph) -> BTreeMap<String, Vec<(String, u32)>> {
    graph
        .adjacency()
        .iter()
        .enumerate()
        .map(|(u, targets)| {
            let targets = targets
                .iter()
                .map(|&(v, weight)| (node_label(v), weight))
                .collect();
            (node_label(u), targets)
        })
        .collect()
}

/// Edge list view with labeled endpoints
pub fn web_edges(graph: &DirectedGraph) -> Vec<WebEdge> {
    graph
        .edge_list()
        .iter()
        .map(|edge| WebEdge {
            source: node_label(edge.source),
            target: node_label(edge.target),
            weight: edge.weight,
        })
        .collect()
}

/// One sampled size, times in milliseconds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkEntry {
    pub num_nodes: usize,
    pub num_edges: usize,
    pub dijkstra_time: f64,
    pub bellman_ford_time: f64,
}

impl From<&BenchmarkSample> for BenchmarkEntry {
    fn from(sample: &BenchmarkSample) -> Self {
        BenchmarkEntry {
            num_nodes: sample.node_count,
            num_edges: sample.edge_count,
            dijkstra_time: sample.dijkstra_time.as_secs_f64() * 1000.0,
            bellman_ford_time: sample.bellman_ford_time.as_secs_f64() * 1000.0,
        }
    }
}

/// Response of `/api/benchmark`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkResponse {
    pub benchmark_id: Uuid,
    pub results: Vec<BenchmarkEntry>,
}

/// Error response for API
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}
