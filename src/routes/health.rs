use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use prometheus::{Encoder, TextEncoder};
use serde::Serialize;
use std::sync::Arc;

use crate::AppState;

/// Root endpoint - basic status
pub async fn root() -> impl IntoResponse {
    Json(serde_json::json!({
        "name": "Seller Desk Server",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running"
    }))
}

/// Health check response
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HealthResponse {
    status: String,
    uptime: u64,
    environment: String,
    host_count: usize,
    selected_host: String,
}

/// GET /health
pub async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        uptime: state.start_time.elapsed().as_secs(),
        environment: state.config.node_env.clone(),
        host_count: state.hosts.hosts().len(),
        selected_host: state.hosts.selected().await,
    })
}

/// GET /metrics - Prometheus metrics
pub async fn metrics() -> impl IntoResponse {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();

    let mut buffer = Vec::new();
    match encoder.encode(&metric_families, &mut buffer) {
        Ok(_) => (
            StatusCode::OK,
            [("content-type", "text/plain; version=0.0.4; charset=utf-8")],
            buffer,
        ),
        Err(e) => {
            tracing::error!("Failed to encode metrics: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                [("content-type", "text/plain")],
                b"Internal Server Error".to_vec(),
            )
        }
    }
}

/// Readiness probe (for Kubernetes)
pub async fn ready(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    if state.hosts.can_persist().await {
        (StatusCode::OK, "ready")
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            "not ready - selected host file directory missing",
        )
    }
}

/// Liveness probe (for Kubernetes)
pub async fn live() -> impl IntoResponse {
    (StatusCode::OK, "alive")
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{send_json, test_router, test_router_with_state_file};
    use axum::http::Method;

    #[tokio::test]
    async fn test_health_reports_selection() {
        let app = test_router();
        let (status, body) = send_json(&app, Method::GET, "/health", None).await;

        assert_eq!(status, 200);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["hostCount"], 2);
        assert_eq!(body["selectedHost"], "http://sharkvpn.unilafour.xyz");
    }

    #[tokio::test]
    async fn test_ready_and_live() {
        let app = test_router();
        let (status, _) = send_json(&app, Method::GET, "/ready", None).await;
        assert_eq!(status, 200);
        let (status, _) = send_json(&app, Method::GET, "/live", None).await;
        assert_eq!(status, 200);
    }

    #[tokio::test]
    async fn test_not_ready_when_state_dir_missing() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_router_with_state_file(dir.path().join("missing").join("host.json"));
        let (status, _) = send_json(&app, Method::GET, "/ready", None).await;
        assert_eq!(status, 503);
    }
}
