use sssp_compare::web::server::{start_server, ServerConfig};
use std::env;

/// Worker stack size; the recursive Bellman-Ford recurses once per round
const WORKER_STACK_BYTES: usize = 64 * 1024 * 1024;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    let mut config = ServerConfig::from_env();

    // A port given on the command line wins over PORT
    if let Some(port) = env::args().nth(1).and_then(|arg| arg.parse().ok()) {
        config.port = port;
    }

    println!("🔧 Starting graph comparison server...");
    println!("⚙️  Configuration:");
    println!("   📡 Address: {}", config.socket_addr());
    println!("   🌐 CORS origin: {}", config.frontend_url);
    println!();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_stack_size(WORKER_STACK_BYTES)
        .build()?;

    runtime.block_on(start_server(config))
}
