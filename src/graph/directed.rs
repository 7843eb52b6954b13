use std::collections::VecDeque;

use crate::graph::traits::{Graph, MutableGraph};
use crate::Weight;

/// A directed, weighted edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub source: usize,
    pub target: usize,
    pub weight: Weight,
}

impl Edge {
    pub fn new(source: usize, target: usize, weight: Weight) -> Self {
        Edge { source, target, weight }
    }
}

/// A directed graph holding both an adjacency list and a flat edge list.
///
/// Both views are only ever written together by `add_edge`, so they always
/// describe the same edge set. Dijkstra walks the adjacency list, Bellman-Ford
/// scans the edge list.
#[derive(Debug, Clone, Default)]
pub struct DirectedGraph {
    /// Outgoing edges for each vertex: vertex_id -> [(target_vertex, weight)]
    adjacency: Vec<Vec<(usize, Weight)>>,

    /// Every edge in creation order
    edges: Vec<Edge>,
}

impl DirectedGraph {
    /// Creates a new directed graph with the specified number of vertices and no edges
    pub fn with_capacity(vertices: usize) -> Self {
        DirectedGraph {
            adjacency: vec![Vec::new(); vertices],
            edges: Vec::new(),
        }
    }

    /// Builds a graph from an edge list, skipping edges `add_edge` would reject
    pub fn from_edges(vertices: usize, edges: &[(usize, usize, Weight)]) -> Self {
        let mut graph = DirectedGraph::with_capacity(vertices);
        for &(from, to, weight) in edges {
            graph.add_edge(from, to, weight);
        }
        graph
    }

    /// Adjacency view: `adjacency()[u]` lists `(v, w)` for every edge `u -> v`
    pub fn adjacency(&self) -> &[Vec<(usize, Weight)>] {
        &self.adjacency
    }

    /// Edge list view, in creation order
    pub fn edge_list(&self) -> &[Edge] {
        &self.edges
    }

    /// Maps an out-of-range source to vertex 0.
    ///
    /// Lenient counterpart of the `InvalidSource` check done by the algorithms,
    /// for callers that prefer a default over an error.
    pub fn clamp_source(&self, source: usize) -> usize {
        if self.has_vertex(source) {
            source
        } else {
            0
        }
    }

    /// Validate that every edge weight is strictly positive
    pub fn validate_positive_weights(&self) -> bool {
        self.edges.iter().all(|edge| edge.weight > 0)
    }

    /// Marks every vertex reachable from `source` by following edge direction
    pub fn reachable_from(&self, source: usize) -> Vec<bool> {
        let mut seen = vec![false; self.vertex_count()];
        if !self.has_vertex(source) {
            return seen;
        }

        let mut queue = VecDeque::new();
        seen[source] = true;
        queue.push_back(source);

        while let Some(u) = queue.pop_front() {
            for &(v, _) in &self.adjacency[u] {
                if !seen[v] {
                    seen[v] = true;
                    queue.push_back(v);
                }
            }
        }

        seen
    }
}

impl Graph for DirectedGraph {
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, Weight)> + '_> {
        match self.adjacency.get(vertex) {
            Some(edges) => Box::new(edges.iter().copied()),
            None => Box::new(std::iter::empty()),
        }
    }

    fn edges(&self) -> Box<dyn Iterator<Item = Edge> + '_> {
        Box::new(self.edges.iter().copied())
    }
}

impl MutableGraph for DirectedGraph {
    fn add_vertex(&mut self) -> usize {
        self.adjacency.push(Vec::new());
        self.adjacency.len() - 1
    }

    fn add_edge(&mut self, from: usize, to: usize, weight: Weight) -> bool {
        if !self.has_vertex(from) || !self.has_vertex(to) || from == to || weight == 0 {
            return false;
        }

        let outgoing = &mut self.adjacency[from];
        if outgoing.iter().any(|&(target, _)| target == to) {
            return false;
        }

        outgoing.push((to, weight));
        self.edges.push(Edge::new(from, to, weight));
        true
    }
}
