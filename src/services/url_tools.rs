//! Playlist URL Tools
//!
//! Pure string transforms used by the seller desk to move a customer's
//! playlist URL onto another VPS host and to compose `get.php` links.
//!
//! Xtream-style playlist URLs look like:
//! ```text
//! http://server:port/get.php?username=X&password=Y&type=m3u_plus&output=ts
//! ```
//!
//! Nothing here touches the network or shared state.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;
use url::Url;

/// Playlist type requested from `get.php`
const PLAYLIST_TYPE: &str = "m3u_plus";

/// Stream container requested by a playlist link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// MPEG-TS streams
    Ts,
    /// HLS streams
    M3u8,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Ts => "ts",
            OutputFormat::M3u8 => "m3u8",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Credentials found in a playlist URL. Either field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PlaylistCredentials {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl PlaylistCredentials {
    /// True when neither key was present
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.password.is_none()
    }
}

/// Everything the credentials tab hands to a seller for one account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistBundle {
    pub m3u_ts: String,
    pub m3u8: String,
    pub access_lines: String,
    pub xtream_lines: String,
}

/// Drop exactly one trailing `/` from a base URL
pub fn normalize_base_url(base: &str) -> &str {
    base.strip_suffix('/').unwrap_or(base)
}

/// Move `original_url` onto `new_base`, keeping its path and query.
///
/// Returns `None` when `original_url` is not an absolute URL. The fragment,
/// if any, is dropped.
pub fn replace_base_url(original_url: &str, new_base: &str) -> Option<String> {
    let parsed = match Url::parse(original_url) {
        Ok(url) => url,
        Err(e) => {
            debug!("Cannot rewrite unparseable URL: {}", e);
            return None;
        }
    };

    let mut rewritten = String::from(normalize_base_url(new_base));
    rewritten.push_str(parsed.path());
    if let Some(query) = parsed.query().filter(|q| !q.is_empty()) {
        rewritten.push('?');
        rewritten.push_str(query);
    }

    Some(rewritten)
}

/// Read `username` and `password` query parameters from a URL.
///
/// Keys are matched exactly; the first occurrence wins. Input that does not
/// parse yields empty credentials.
pub fn extract_credentials(input: &str) -> PlaylistCredentials {
    let parsed = match Url::parse(input) {
        Ok(url) => url,
        Err(e) => {
            debug!("No credentials in unparseable URL: {}", e);
            return PlaylistCredentials::default();
        }
    };

    let mut creds = PlaylistCredentials::default();
    for (key, value) in parsed.query_pairs() {
        match key.as_ref() {
            "username" if creds.username.is_none() => creds.username = Some(value.into_owned()),
            "password" if creds.password.is_none() => creds.password = Some(value.into_owned()),
            _ => {}
        }
    }

    creds
}

/// Compose a `get.php` playlist link.
///
/// Credentials are inserted as-is. Existing playlist clients expect the
/// literal form, so no percent-encoding is applied.
pub fn build_m3u(host: &str, username: &str, password: &str, output: OutputFormat) -> String {
    format!(
        "{}/get.php?username={}&password={}&type={}&output={}",
        normalize_base_url(host),
        username,
        password,
        PLAYLIST_TYPE,
        output
    )
}

/// "Access data" copy block
pub fn access_lines(host: &str, username: &str, password: &str) -> String {
    format!("Username: {}\nPassword: {}\nURL: {}", username, password, host)
}

/// Copy block for Xtream Codes player apps
pub fn xtream_lines(host: &str, username: &str, password: &str) -> String {
    format!("Server: {}\nUsername: {}\nPassword: {}", host, username, password)
}

/// Build both playlist links and both copy blocks for one account
pub fn playlist_bundle(host: &str, username: &str, password: &str) -> PlaylistBundle {
    PlaylistBundle {
        m3u_ts: build_m3u(host, username, password, OutputFormat::Ts),
        m3u8: build_m3u(host, username, password, OutputFormat::M3u8),
        access_lines: access_lines(host, username, password),
        xtream_lines: xtream_lines(host, username, password),
    }
}
