use axum::{
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use log::{error, info};
use uuid::Uuid;

use crate::algorithm::RelaxationMode;
use crate::benchmark::BenchmarkDriver;
use crate::comparison::compare;
use crate::web::models::*;
use crate::Error;

type ApiError = (StatusCode, Json<ErrorResponse>);

/// Create the API router
pub fn create_router() -> Router {
    Router::new()
        .route("/", get(root))
        .route("/api/compare", post(compare_algorithms))
        .route("/api/benchmark", post(run_benchmark))
        .route("/api/health", get(health_check))
}

pub async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Graph Algorithm Comparison API",
        "status": "running"
    }))
}

/// Run Dijkstra and Bellman-Ford on one random graph
pub async fn compare_algorithms(
    Json(request): Json<CompareRequest>,
) -> Result<Json<CompareResponse>, ApiError> {
    let num_nodes = node_count(request.num_nodes)?;
    let source = parse_node_label(&request.start_node, num_nodes);
    let mode = relaxation_mode(request.relaxation_mode.as_deref())?;

    info!("compare: {} nodes from {} ({})", num_nodes, node_label(source), mode);

    let comparison = tokio::task::spawn_blocking(move || compare(num_nodes, source, mode))
        .await
        .map_err(task_failed)?
        .map_err(core_error)?;

    Ok(Json(CompareResponse {
        comparison_id: Uuid::new_v4(),
        dijkstra: AlgorithmReport::from(&comparison.dijkstra),
        bellman_ford: AlgorithmReport::from(&comparison.bellman_ford),
        graph: web_adjacency(&comparison.graph),
        nodes: (0..num_nodes).map(node_label).collect(),
        edges: web_edges(&comparison.graph),
    }))
}

/// Time both algorithms across a sweep of graph sizes
pub async fn run_benchmark(
    Json(request): Json<BenchmarkRequest>,
) -> Result<Json<BenchmarkResponse>, ApiError> {
    let max_nodes = node_count(request.max_nodes)?;
    let mode = relaxation_mode(request.relaxation_mode.as_deref())?;

    info!("benchmark: up to {} nodes ({})", max_nodes, mode);

    let samples = tokio::task::spawn_blocking(move || {
        BenchmarkDriver::new().with_relaxation_mode(mode).run(max_nodes)
    })
    .await
    .map_err(task_failed)?
    .map_err(core_error)?;

    Ok(Json(BenchmarkResponse {
        benchmark_id: Uuid::new_v4(),
        results: samples.iter().map(BenchmarkEntry::from).collect(),
    }))
}

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

// Helper functions

fn node_count(requested: i64) -> Result<usize, ApiError> {
    match usize::try_from(requested) {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(core_error(Error::InvalidSize(requested))),
    }
}

fn relaxation_mode(requested: Option<&str>) -> Result<RelaxationMode, ApiError> {
    match requested {
        None => Ok(RelaxationMode::default()),
        Some(raw) => raw.parse::<RelaxationMode>().map_err(|message: String| {
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "invalid_relaxation_mode".to_string(),
                    message,
                    details: Some(serde_json::json!({ "allowed": ["iterative", "recursive"] })),
                }),
            )
        }),
    }
}

fn core_error(err: Error) -> ApiError {
    let code = match err {
        Error::InvalidSize(_) => "invalid_size",
        Error::InvalidSource { .. } => "invalid_source",
    };
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: code.to_string(),
            message: err.to_string(),
            details: None,
        }),
    )
}

fn task_failed(err: tokio::task::JoinError) -> ApiError {
    error!("worker task failed: {}", err);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: "algorithm_execution_failed".to_string(),
            message: format!("Algorithm execution failed: {}", err),
            details: None,
        }),
    )
}
