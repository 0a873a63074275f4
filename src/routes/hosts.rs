use axum::{extract::State, response::IntoResponse, Json};
use std::sync::Arc;

use super::ApiError;
use crate::models::{HostsResponse, SelectHostRequest};
use crate::AppState;

async fn snapshot(state: &AppState) -> HostsResponse {
    HostsResponse {
        hosts: state.hosts.hosts().to_vec(),
        selected: state.hosts.selected().await,
    }
}

/// GET /api/hosts - VPS list and current selection
pub async fn list_hosts(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(snapshot(&state).await)
}

/// PUT /api/hosts/selected - Switch the target host
pub async fn select_host(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SelectHostRequest>,
) -> Result<impl IntoResponse, ApiError> {
    state.hosts.select(&req.host).await?;
    Ok(Json(snapshot(&state).await))
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{send_json, test_router, test_router_with_state_file};
    use axum::http::Method;
    use serde_json::json;

    #[tokio::test]
    async fn test_list_hosts() {
        let app = test_router();
        let (status, body) = send_json(&app, Method::GET, "/api/hosts", None).await;

        assert_eq!(status, 200);
        assert_eq!(body["hosts"].as_array().unwrap().len(), 2);
        assert_eq!(body["selected"], "http://sharkvpn.unilafour.xyz");
    }

    #[tokio::test]
    async fn test_select_then_rewrite() {
        let app = test_router();
        let (status, body) = send_json(
            &app,
            Method::PUT,
            "/api/hosts/selected",
            Some(json!({ "host": "http://sharkvpn.unicrnh.xyz/" })),
        )
        .await;
        assert_eq!(status, 200);
        assert_eq!(body["selected"], "http://sharkvpn.unicrnh.xyz/");

        let (_, body) = send_json(
            &app,
            Method::POST,
            "/api/url/rewrite",
            Some(json!({ "url": "http://old.example/get.php?username=a&password=b" })),
        )
        .await;
        assert_eq!(
            body["url"],
            "http://sharkvpn.unicrnh.xyz/get.php?username=a&password=b"
        );
    }

    #[tokio::test]
    async fn test_select_unknown_host() {
        let app = test_router();
        let (status, body) = send_json(
            &app,
            Method::PUT,
            "/api/hosts/selected",
            Some(json!({ "host": "http://unknown.example" })),
        )
        .await;

        assert_eq!(status, 400);
        assert!(body["error"].as_str().unwrap().contains("http://unknown.example"));
    }

    #[tokio::test]
    async fn test_select_save_failure() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_router_with_state_file(dir.path().join("missing").join("host.json"));
        let (status, body) = send_json(
            &app,
            Method::PUT,
            "/api/hosts/selected",
            Some(json!({ "host": "http://sharkvpn.unicrnh.xyz/" })),
        )
        .await;
        assert_eq!(status, 500);
        assert_eq!(body["error"], "Internal error");

        let (_, body) = send_json(&app, Method::GET, "/api/hosts", None).await;
        assert_eq!(body["selected"], "http://sharkvpn.unilafour.xyz");
    }
}
