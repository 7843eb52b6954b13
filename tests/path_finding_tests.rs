use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sssp_compare::algorithm::{BellmanFord, Dijkstra, RelaxationMode, ShortestPathAlgorithm};
use sssp_compare::data_structures::MinQueue;
use sssp_compare::graph::generators::generate_graph_with_rng;
use sssp_compare::graph::{DirectedGraph, Graph};
use sssp_compare::{shortest_path_priority_queue, shortest_path_relaxation, Distance, Error, ShortestPathResult};

const MODES: [RelaxationMode; 2] = [RelaxationMode::Iterative, RelaxationMode::Recursive];

// 0 -5-> 1, 0 -3-> 2, 2 -1-> 1, 1 -2-> 3
fn small_graph() -> DirectedGraph {
    DirectedGraph::from_edges(4, &[(0, 1, 5), (0, 2, 3), (2, 1, 1), (1, 3, 2)])
}

/// Path 0 -> 1 -> ... -> n-1 with unit weights, edges listed in the given order
fn chain(n: usize, reversed: bool) -> DirectedGraph {
    let mut edges: Vec<(usize, usize, u32)> = (0..n - 1).map(|i| (i, i + 1, 1)).collect();
    if reversed {
        edges.reverse();
    }
    DirectedGraph::from_edges(n, &edges)
}

fn run_all(graph: &DirectedGraph, source: usize) -> Vec<ShortestPathResult> {
    let mut results = vec![shortest_path_priority_queue(graph, source).unwrap()];
    for mode in MODES {
        results.push(shortest_path_relaxation(graph, source, mode).unwrap());
    }
    results
}

// Checks the predecessor tree against the distances it claims
fn assert_consistent_tree(graph: &DirectedGraph, result: &ShortestPathResult) {
    let n = graph.vertex_count();
    for v in 0..n {
        match result.distances[v] {
            None => {
                assert_eq!(result.predecessors[v], None, "unreachable vertex {} has a predecessor", v);
                assert!(result.path_to(v).is_none());
            }
            Some(distance) => {
                let path = result.path_to(v).expect("reachable vertex must have a path");
                assert_eq!(path[0], result.source, "path should start at source");
                assert_eq!(*path.last().unwrap(), v, "path should end at target");
                assert!(path.len() - 1 <= n - 1, "path to {} has too many hops", v);

                let mut total: Distance = 0;
                for hop in path.windows(2) {
                    let weight = graph
                        .get_edge_weight(hop[0], hop[1])
                        .expect("path uses a missing edge");
                    total += Distance::from(weight);
                }
                assert_eq!(total, distance, "path weight to {} disagrees with distance", v);
            }
        }
    }
    assert_eq!(result.distances[result.source], Some(0));
    assert_eq!(result.predecessors[result.source], None);
}

#[test]
fn test_small_graph_known_distances() {
    let graph = small_graph();

    for result in run_all(&graph, 0) {
        assert_eq!(result.distances, vec![Some(0), Some(4), Some(3), Some(6)]);
        assert_eq!(result.predecessors, vec![None, Some(2), Some(0), Some(1)]);
        assert_eq!(result.source, 0);
        assert_eq!(result.path_to(3), Some(vec![0, 2, 1, 3]));
    }
}

#[test]
fn test_dijkstra_discards_stale_entries() {
    let result = Dijkstra::new().compute_shortest_paths(&small_graph(), 0).unwrap();

    // Vertex 1 is queued at 5 and then improved to 4; the 5 entry is stale
    assert_eq!(result.metrics.heap_pushes, 5);
    assert_eq!(result.metrics.stale_entries_skipped, 1);
    assert_eq!(result.metrics.edges_relaxed, 4);
}

#[test]
fn test_bellman_ford_stops_after_quiet_round() {
    for mode in MODES {
        let result = BellmanFord::new()
            .with_mode(mode)
            .compute_shortest_paths(&small_graph(), 0)
            .unwrap();
        // One round finds everything, the second confirms nothing changes
        assert_eq!(result.metrics.rounds, 2, "{} mode", mode);
    }
}

#[test]
fn test_single_vertex_graph() {
    let graph = DirectedGraph::with_capacity(1);

    for result in run_all(&graph, 0) {
        assert_eq!(result.distances, vec![Some(0)]);
        assert_eq!(result.predecessors, vec![None]);
        assert_eq!(result.metrics.rounds, 0);
    }
}

#[test]
fn test_invalid_source_is_rejected() {
    let graph = small_graph();
    let expected = Error::InvalidSource { vertex: 4, vertex_count: 4 };

    assert_eq!(shortest_path_priority_queue(&graph, 4).unwrap_err(), expected);
    for mode in MODES {
        assert_eq!(shortest_path_relaxation(&graph, 4, mode).unwrap_err(), expected);
    }

    // The lenient path maps the bad source to vertex 0 instead
    let source = graph.clamp_source(4);
    assert_eq!(shortest_path_priority_queue(&graph, source).unwrap().source, 0);
}

#[test]
fn test_unreachable_vertices_keep_sentinel() {
    // 2 only has an edge out, nothing leads into it
    let graph = DirectedGraph::from_edges(4, &[(0, 1, 2), (2, 3, 1), (1, 3, 6)]);

    for result in run_all(&graph, 0) {
        assert_eq!(result.distances, vec![Some(0), Some(2), None, Some(8)]);
        assert_eq!(result.predecessors, vec![None, Some(0), None, Some(1)]);
        assert_consistent_tree(&graph, &result);
    }
}

#[test]
fn test_chain_in_edge_order_converges_in_one_round() {
    let graph = chain(10, false);
    for mode in MODES {
        let result = shortest_path_relaxation(&graph, 0, mode).unwrap();
        assert_eq!(result.distances[9], Some(9));
        assert_eq!(result.metrics.rounds, 2);
    }
}

#[test]
fn test_reversed_chain_needs_every_round() {
    let n = 10;
    let graph = chain(n, true);
    for mode in MODES {
        let result = shortest_path_relaxation(&graph, 0, mode).unwrap();
        let expected: Vec<Option<Distance>> = (0..n as Distance).map(Some).collect();
        assert_eq!(result.distances, expected);
        // Each round reaches one more vertex; the n-1 bound ends the run
        assert_eq!(result.metrics.rounds, n - 1);
    }
}

#[test]
fn test_early_exit_within_one_round_of_convergence() {
    // Reversed chain of length k+1 followed by edges that are already final:
    // the last change happens in round k, so at most k+1 rounds run
    for k in 1..6 {
        let n = 12;
        let mut edges: Vec<(usize, usize, u32)> = (0..k).rev().map(|i| (i, i + 1, 1)).collect();
        edges.extend((k..n - 1).map(|i| (i, i + 1, 1)));
        let graph = DirectedGraph::from_edges(n, &edges);

        for mode in MODES {
            let result = shortest_path_relaxation(&graph, 0, mode).unwrap();
            assert!(result.metrics.rounds <= k + 1, "k={} mode={} rounds={}", k, mode, result.metrics.rounds);
            assert_eq!(result.distances[n - 1], Some((n - 1) as Distance));
        }
    }
}

#[test]
fn test_algorithms_agree_on_random_graphs() {
    let mut rng = StdRng::seed_from_u64(2024);

    for _ in 0..40 {
        let n = rng.gen_range(1..150);
        let graph = generate_graph_with_rng(n, &mut rng).unwrap();
        let source = rng.gen_range(0..n);

        let dijkstra = shortest_path_priority_queue(&graph, source).unwrap();
        let iterative = shortest_path_relaxation(&graph, source, RelaxationMode::Iterative).unwrap();
        let recursive = shortest_path_relaxation(&graph, source, RelaxationMode::Recursive).unwrap();

        assert_eq!(dijkstra.distances, iterative.distances, "n={} source={}", n, source);
        assert_eq!(iterative.distances, recursive.distances);
        // Same edge order, same control decisions: the tables match exactly
        assert_eq!(iterative.predecessors, recursive.predecessors);
        assert_eq!(iterative.metrics, recursive.metrics);

        assert_consistent_tree(&graph, &dijkstra);
        assert_consistent_tree(&graph, &iterative);
    }
}

#[test]
fn test_everything_reachable_from_zero_on_generated_graphs() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..10 {
        let graph = generate_graph_with_rng(80, &mut rng).unwrap();
        for result in run_all(&graph, 0) {
            assert_eq!(result.reachable_count(), 80);
        }
    }
}

#[test]
fn test_repeated_runs_are_identical() {
    let mut rng = StdRng::seed_from_u64(5);
    let graph = generate_graph_with_rng(60, &mut rng).unwrap();

    let first = run_all(&graph, 3);
    let second = run_all(&graph, 3);
    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.distances, b.distances);
        assert_eq!(a.predecessors, b.predecessors);
        assert_eq!(a.metrics, b.metrics);
    }
}

#[test]
fn test_algorithm_names() {
    let dijkstra = Dijkstra::new();
    let recursive = BellmanFord::new();
    let iterative = BellmanFord::new().with_mode(RelaxationMode::Iterative);

    assert_eq!(<Dijkstra as ShortestPathAlgorithm<DirectedGraph>>::name(&dijkstra), "Dijkstra");
    assert_eq!(<BellmanFord as ShortestPathAlgorithm<DirectedGraph>>::name(&recursive), "Bellman-Ford (recursive)");
    assert_eq!(<BellmanFord as ShortestPathAlgorithm<DirectedGraph>>::name(&iterative), "Bellman-Ford (iterative)");
}

#[test]
fn test_relaxation_mode_parsing() {
    assert_eq!("iterative".parse::<RelaxationMode>(), Ok(RelaxationMode::Iterative));
    assert_eq!(" Recursive ".parse::<RelaxationMode>(), Ok(RelaxationMode::Recursive));
    assert!("sideways".parse::<RelaxationMode>().is_err());
    assert_eq!(RelaxationMode::default(), RelaxationMode::Recursive);
}

#[test]
fn test_elapsed_seconds_match_duration() {
    for result in run_all(&small_graph(), 0) {
        assert!(result.elapsed_secs() >= 0.0);
        assert_eq!(result.elapsed_secs(), result.elapsed.as_secs_f64());
        assert_eq!(result.elapsed_ms(), result.elapsed.as_secs_f64() * 1000.0);
    }
}

#[test]
fn test_min_queue_pops_smallest_priority_first() {
    let mut queue: MinQueue<usize, Distance> = MinQueue::with_capacity(3);
    queue.push(1, 5);
    queue.push(2, 3);
    queue.push(0, 3);

    // Equal priorities come out in vertex order
    assert_eq!(queue.pop(), Some((0, 3)));
    assert_eq!(queue.pop(), Some((2, 3)));
    assert_eq!(queue.pop(), Some((1, 5)));
    assert_eq!(queue.pop(), None);
}
