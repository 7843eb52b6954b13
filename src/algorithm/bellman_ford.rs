use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use log::debug;

use crate::algorithm::{check_source, ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::Graph;
use crate::{Distance, Result};

/// How Bellman-Ford drives its relaxation rounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RelaxationMode {
    /// Bounded loop over rounds
    Iterative,
    /// One recursive call per round
    #[default]
    Recursive,
}

impl RelaxationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RelaxationMode::Iterative => "iterative",
            RelaxationMode::Recursive => "recursive",
        }
    }
}

impl fmt::Display for RelaxationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RelaxationMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "iterative" => Ok(RelaxationMode::Iterative),
            "recursive" => Ok(RelaxationMode::Recursive),
            other => Err(format!("unknown relaxation mode: {}", other)),
        }
    }
}

/// Bellman-Ford over the graph's edge list with early termination.
///
/// Runs at most `n - 1` rounds. Each round scans every edge in insertion order;
/// the first round that lowers no distance ends the run. Negative cycles are
/// not detected, so the graph must not contain one reachable from the source.
#[derive(Debug, Default, Clone, Copy)]
pub struct BellmanFord {
    mode: RelaxationMode,
}

impl BellmanFord {
    pub fn new() -> Self {
        BellmanFord::default()
    }

    pub fn with_mode(mut self, mode: RelaxationMode) -> Self {
        self.mode = mode;
        self
    }
}

impl<G> ShortestPathAlgorithm<G> for BellmanFord
where
    G: Graph,
{
    fn name(&self) -> &'static str {
        match self.mode {
            RelaxationMode::Iterative => "Bellman-Ford (iterative)",
            RelaxationMode::Recursive => "Bellman-Ford (recursive)",
        }
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult> {
        check_source(graph, source)?;

        let start = Instant::now();
        let mut result = ShortestPathResult::init(graph.vertex_count(), source);
        let max_rounds = graph.vertex_count().saturating_sub(1);

        match self.mode {
            RelaxationMode::Iterative => relax_iteratively(graph, &mut result, max_rounds),
            RelaxationMode::Recursive => relax_recursively(graph, &mut result, 0, max_rounds),
        }

        result.elapsed = start.elapsed();
        debug!(
            "bellman-ford ({}) from {}: {} reachable, {} of {} rounds, {:?}",
            self.mode,
            source,
            result.reachable_count(),
            result.metrics.rounds,
            max_rounds,
            result.elapsed
        );

        Ok(result)
    }
}

fn relax_iteratively<G: Graph>(graph: &G, result: &mut ShortestPathResult, max_rounds: usize) {
    for _ in 0..max_rounds {
        if !relax_round(graph, result) {
            break;
        }
    }
}

fn relax_recursively<G: Graph>(
    graph: &G,
    result: &mut ShortestPathResult,
    round: usize,
    max_rounds: usize,
) {
    if round >= max_rounds {
        return;
    }
    if relax_round(graph, result) {
        relax_recursively(graph, result, round + 1, max_rounds);
    }
}

/// One pass over the edge list. Returns true if any distance changed.
fn relax_round<G: Graph>(graph: &G, result: &mut ShortestPathResult) -> bool {
    result.metrics.rounds += 1;

    let mut changed = false;
    for edge in graph.edges() {
        if let Some(dist_u) = result.distances[edge.source] {
            let candidate = dist_u + Distance::from(edge.weight);
            if result.relax(edge.source, edge.target, candidate) {
                changed = true;
            }
        }
    }
    changed
}
