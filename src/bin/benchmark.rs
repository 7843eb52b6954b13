use std::env;
use std::time::Duration;

use sssp_compare::benchmark::{sample_sizes, step_for, BenchmarkDriver};
use sssp_compare::RelaxationMode;

fn millis(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}

fn main() {
    env_logger::init();

    // Usage: benchmark [max_nodes] [iterative|recursive]
    let mut args = env::args().skip(1);
    let max_nodes: usize = args.next().and_then(|arg| arg.parse().ok()).unwrap_or(200);
    let mode: RelaxationMode = args
        .next()
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_default();

    println!("=====================================================");
    println!("Benchmark: Dijkstra vs Bellman-Ford ({})", mode);
    println!(
        "Sizes: {} samples up to {} nodes (step {})",
        sample_sizes(max_nodes).len(),
        max_nodes,
        step_for(max_nodes)
    );
    println!("=====================================================");

    // Recursive mode recurses once per round, so run the sweep with room to spare
    let sweep = std::thread::Builder::new()
        .name("benchmark".to_string())
        .stack_size(64 * 1024 * 1024)
        .spawn(move || BenchmarkDriver::new().with_relaxation_mode(mode).run(max_nodes));

    let samples = match sweep.map(|handle| handle.join()) {
        Ok(Ok(Ok(samples))) => samples,
        Ok(Ok(Err(err))) => {
            eprintln!("benchmark failed: {}", err);
            std::process::exit(1);
        }
        _ => {
            eprintln!("benchmark thread failed");
            std::process::exit(1);
        }
    };

    println!(
        "{:<10} | {:<10} | {:<15} | {:<17} | {:<10}",
        "Vertices", "Edges", "Dijkstra (ms)", "Bellman-Ford (ms)", "Ratio"
    );
    println!("-----------------------------------------------------");

    for sample in &samples {
        let dijkstra = millis(sample.dijkstra_time);
        let bellman_ford = millis(sample.bellman_ford_time);
        let ratio = if dijkstra > 0.0 { bellman_ford / dijkstra } else { 0.0 };

        println!(
            "{:<10} | {:<10} | {:<15.3} | {:<17.3} | {:<10.2}",
            sample.node_count, sample.edge_count, dijkstra, bellman_ford, ratio
        );
    }
}
