use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;
use tokio::sync::RwLock;

use crate::config::Config;

#[derive(Debug, Error)]
pub enum HostCatalogError {
    #[error("Host is not in the VPS list: {0}")]
    UnknownHost(String),
    #[error("Failed to persist selected host: {0}")]
    Persist(#[from] std::io::Error),
    #[error("Failed to encode selection record: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Last selected host, as stored on disk
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SelectionRecord {
    host: String,
    updated_at: DateTime<Utc>,
}

/// VPS hosts the desk can rewrite onto, plus the current selection
pub struct HostCatalog {
    hosts: Vec<String>,
    selected: RwLock<String>,
    state_file: Option<PathBuf>,
}

impl HostCatalog {
    /// Build a catalog starting on the first host. `hosts` must not be empty.
    pub fn new(hosts: Vec<String>, state_file: Option<PathBuf>) -> anyhow::Result<Self> {
        let first = hosts
            .first()
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("VPS host list is empty"))?;

        Ok(Self {
            hosts,
            selected: RwLock::new(first),
            state_file,
        })
    }

    /// Build the catalog from config and restore a previously saved selection
    pub async fn load(config: &Config) -> anyhow::Result<Self> {
        let catalog = Self::new(config.vps_hosts.clone(), config.selected_host_file.clone())?;

        if let Some(path) = &catalog.state_file {
            if let Some(saved) = read_record(path).await {
                if catalog.contains(&saved.host) {
                    tracing::info!(
                        "Restored selected host {} (saved {})",
                        saved.host,
                        saved.updated_at
                    );
                    *catalog.selected.write().await = saved.host;
                } else {
                    tracing::warn!("Ignoring saved host no longer in VPS list: {}", saved.host);
                }
            }
        }

        Ok(catalog)
    }

    pub fn hosts(&self) -> &[String] {
        &self.hosts
    }

    pub fn contains(&self, host: &str) -> bool {
        self.hosts.iter().any(|h| h == host)
    }

    /// False when a state file is configured but its directory is missing
    pub async fn can_persist(&self) -> bool {
        let Some(path) = &self.state_file else {
            return true;
        };
        match path.parent().filter(|p| !p.as_os_str().is_empty()) {
            Some(dir) => fs::metadata(dir).await.map(|m| m.is_dir()).unwrap_or(false),
            None => true,
        }
    }

    pub async fn selected(&self) -> String {
        self.selected.read().await.clone()
    }

    /// Switch to `host`. Unknown hosts are rejected and leave the selection as is.
    pub async fn select(&self, host: &str) -> Result<(), HostCatalogError> {
        if !self.contains(host) {
            return Err(HostCatalogError::UnknownHost(host.to_string()));
        }

        // Hold the write lock across the file write so saves land in order
        let mut selected = self.selected.write().await;
        if let Some(path) = &self.state_file {
            write_record(path, host).await?;
        }
        *selected = host.to_string();

        tracing::info!("Selected host changed to {}", host);
        Ok(())
    }
}

async fn read_record(path: &Path) -> Option<SelectionRecord> {
    let raw = match fs::read_to_string(path).await {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
        Err(e) => {
            tracing::warn!("Failed to read {}: {}", path.display(), e);
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(record) => Some(record),
        Err(e) => {
            tracing::warn!("Malformed selection record in {}: {}", path.display(), e);
            None
        }
    }
}

async fn write_record(path: &Path, host: &str) -> Result<(), HostCatalogError> {
    let record = SelectionRecord {
        host: host.to_string(),
        updated_at: Utc::now(),
    };
    let data = serde_json::to_vec_pretty(&record)?;

    // Atomic replace: write temp file then rename
    let tmp_path = path.with_extension("tmp");
    fs::write(&tmp_path, &data).await?;
    fs::rename(&tmp_path, path).await?;

    Ok(())
}
