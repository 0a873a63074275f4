use serde::{Deserialize, Serialize};

/// Host list with current selection
#[derive(Debug, Serialize)]
pub struct HostsResponse {
    pub hosts: Vec<String>,
    pub selected: String,
}

#[derive(Debug, Deserialize)]
pub struct SelectHostRequest {
    pub host: String,
}
