pub mod health;
pub mod hosts;
pub mod url_tools;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::services::host_catalog::HostCatalogError;

/// Errors returned by route handlers as `{"error": "..."}`
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("Internal error")]
    Internal,
}

impl From<HostCatalogError> for ApiError {
    fn from(err: HostCatalogError) -> Self {
        match err {
            HostCatalogError::UnknownHost(_) => ApiError::BadRequest(err.to_string()),
            other => {
                tracing::error!("{}", other);
                ApiError::Internal
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use axum::{
        body::{to_bytes, Body},
        http::{Method, Request},
        Router,
    };
    use std::path::PathBuf;
    use std::sync::Arc;
    use std::time::Instant;
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::services::host_catalog::HostCatalog;
    use crate::{build_router, AppState};

    pub fn test_router() -> Router {
        router_with(None)
    }

    /// Router whose host selection is saved to `path`
    pub fn test_router_with_state_file(path: PathBuf) -> Router {
        router_with(Some(path))
    }

    fn router_with(state_file: Option<PathBuf>) -> Router {
        let config = Config {
            vps_hosts: vec![
                "http://sharkvpn.unilafour.xyz".to_string(),
                "http://sharkvpn.unicrnh.xyz/".to_string(),
            ],
            selected_host_file: state_file,
            ..Config::default()
        };
        let hosts =
            HostCatalog::new(config.vps_hosts.clone(), config.selected_host_file.clone()).unwrap();
        build_router(Arc::new(AppState {
            config,
            hosts,
            start_time: Instant::now(),
        }))
    }

    /// Send a request and return status plus parsed JSON body
    pub async fn send_json(
        app: &Router,
        method: Method,
        uri: &str,
        body: Option<serde_json::Value>,
    ) -> (u16, serde_json::Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header("content-type", "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = app
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status().as_u16();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, json)
    }
}
