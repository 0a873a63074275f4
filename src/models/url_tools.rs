use serde::{Deserialize, Serialize};

use crate::services::url_tools::{OutputFormat, PlaylistCredentials};

/// Request to move a playlist URL onto another host
#[derive(Debug, Deserialize)]
pub struct RewriteRequest {
    pub url: String,
    /// Target host; the selected host when omitted
    #[serde(default)]
    pub host: Option<String>,
}

/// Rewritten URL, or `null` with `valid: false` when the input did not parse
#[derive(Debug, Serialize)]
pub struct RewriteResponse {
    pub url: Option<String>,
    pub valid: bool,
    pub host: String,
    pub credentials: PlaylistCredentials,
}

/// Request to read credentials out of a URL
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct CredentialsResponse {
    #[serde(flatten)]
    pub credentials: PlaylistCredentials,
    pub found: bool,
}

/// Request to compose playlist links for an account
#[derive(Debug, Deserialize)]
pub struct PlaylistRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub output: Option<OutputFormat>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistResponse {
    pub host: String,
    pub m3u_ts: String,
    pub m3u8: String,
    pub access_lines: String,
    pub xtream_lines: String,
    /// Link for the requested output, when one was given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}
