//! URL Tool Routes
//!
//! JSON wrappers around the playlist URL transforms. A URL that does not
//! parse is reported in the body, never as an HTTP error.

use axum::{extract::State, response::IntoResponse, Json};
use std::sync::Arc;

use crate::metrics;
use crate::models::{
    CredentialsRequest, CredentialsResponse, PlaylistRequest, PlaylistResponse, RewriteRequest,
    RewriteResponse,
};
use crate::services::url_tools::{build_m3u, extract_credentials, playlist_bundle, replace_base_url};
use crate::AppState;

/// Explicit host from the request, or the current selection
async fn target_host(state: &AppState, requested: Option<String>) -> String {
    match requested.filter(|h| !h.trim().is_empty()) {
        Some(host) => host,
        None => state.hosts.selected().await,
    }
}

/// POST /api/url/rewrite
pub async fn rewrite_url(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RewriteRequest>,
) -> impl IntoResponse {
    let host = target_host(&state, req.host).await;
    let url = replace_base_url(&req.url, &host);
    let credentials = extract_credentials(&req.url);

    metrics::record("rewrite", url.is_some());
    if url.is_none() && !req.url.is_empty() {
        tracing::debug!("Rewrite produced no result for input of {} bytes", req.url.len());
    }

    Json(RewriteResponse {
        valid: url.is_some(),
        url,
        host,
        credentials,
    })
}

/// POST /api/url/credentials
pub async fn credentials(Json(req): Json<CredentialsRequest>) -> impl IntoResponse {
    let credentials = extract_credentials(&req.url);
    let found = !credentials.is_empty();
    metrics::record("credentials", found);

    Json(CredentialsResponse { credentials, found })
}

/// POST /api/url/playlist
pub async fn playlist(
    State(state): State<Arc<AppState>>,
    Json(req): Json<PlaylistRequest>,
) -> impl IntoResponse {
    let host = target_host(&state, req.host).await;
    let bundle = playlist_bundle(&host, &req.username, &req.password);
    let url = req
        .output
        .map(|output| build_m3u(&host, &req.username, &req.password, output));
    metrics::record("playlist", true);

    Json(PlaylistResponse {
        host,
        m3u_ts: bundle.m3u_ts,
        m3u8: bundle.m3u8,
        access_lines: bundle.access_lines,
        xtream_lines: bundle.xtream_lines,
        url,
    })
}
