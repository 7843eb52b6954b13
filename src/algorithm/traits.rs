use std::collections::HashSet;
use std::time::Duration;

use log::warn;

use crate::graph::Graph;
use crate::{Distance, Result};

/// Counters collected while an algorithm runs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunMetrics {
    /// Entries pushed onto the priority queue
    pub heap_pushes: usize,
    /// Popped queue entries discarded because a shorter distance was already known
    pub stale_entries_skipped: usize,
    /// Relaxations that lowered a distance
    pub edges_relaxed: usize,
    /// Full passes over the edge list
    pub rounds: usize,
}

/// Result of a shortest path algorithm execution
#[derive(Debug, Clone)]
pub struct ShortestPathResult {
    /// Distances from source to each vertex; `None` for unreachable vertices
    pub distances: Vec<Option<Distance>>,

    /// Predecessor vertices in the shortest path tree
    pub predecessors: Vec<Option<usize>>,

    /// Source vertex ID
    pub source: usize,

    /// Wall-clock time spent inside the algorithm
    pub elapsed: Duration,

    pub metrics: RunMetrics,
}

impl ShortestPathResult {
    /// Fresh tables for a run from `source`: only the source has a distance
    pub(crate) fn init(vertex_count: usize, source: usize) -> Self {
        let mut distances = vec![None; vertex_count];
        distances[source] = Some(0);
        ShortestPathResult {
            distances,
            predecessors: vec![None; vertex_count],
            source,
            elapsed: Duration::ZERO,
            metrics: RunMetrics::default(),
        }
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }

    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_some()).count()
    }

    /// Lowers the distance of `target` to `candidate` if that is an improvement
    pub(crate) fn relax(&mut self, from: usize, target: usize, candidate: Distance) -> bool {
        let improves = match self.distances[target] {
            None => true,
            Some(current) => candidate < current,
        };
        if improves {
            self.distances[target] = Some(candidate);
            self.predecessors[target] = Some(from);
            self.metrics.edges_relaxed += 1;
        }
        improves
    }

    /// Shortest path from the source to `target` as a sequence of vertices
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        if target >= self.predecessors.len() || self.distances[target].is_none() {
            return None;
        }

        let mut path = Vec::new();
        let mut current = target;
        let mut visited = HashSet::new();

        while current != self.source {
            if !visited.insert(current) {
                warn!("cycle in predecessor chain at vertex {}", current);
                return None;
            }

            path.push(current);
            current = match self.predecessors[current] {
                Some(pred) => pred,
                None => {
                    warn!("vertex {} has a distance but no predecessor", current);
                    return None;
                }
            };
        }

        path.push(self.source);
        path.reverse();

        Some(path)
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<G>
where
    G: Graph,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
