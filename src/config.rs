use std::env;
use std::path::PathBuf;

/// VPS hosts offered when `VPS_HOSTS` is not set
const DEFAULT_VPS_HOSTS: [&str; 4] = [
    "http://sharkvpn.unilafour.xyz",
    "http://sharkvpn.unicrnh.xyz",
    "http://sharkvpn.unilasix.xyz",
    "http://sharkvpn.unilaseven.xyz",
];

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub port: u16,
    pub node_env: String,

    // Hosts
    pub vps_hosts: Vec<String>,
    pub selected_host_file: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        Self {
            // Server
            port: env::var("PORT")
                .unwrap_or_else(|_| "3001".to_string())
                .parse()
                .unwrap_or(3001),
            node_env: env::var("NODE_ENV").unwrap_or_else(|_| "development".to_string()),

            // Hosts
            vps_hosts: env::var("VPS_HOSTS")
                .ok()
                .map(|v| parse_host_list(&v))
                .filter(|hosts| !hosts.is_empty())
                .unwrap_or_else(|| DEFAULT_VPS_HOSTS.iter().map(|h| h.to_string()).collect()),

            // Empty value disables persistence
            selected_host_file: match env::var("SELECTED_HOST_FILE") {
                Ok(v) if v.trim().is_empty() => None,
                Ok(v) => Some(PathBuf::from(v)),
                Err(_) => Some(PathBuf::from(".selected-host.json")),
            },
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Split a comma-separated host list, dropping blanks
fn parse_host_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|h| !h.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_host_list() {
        let hosts = parse_host_list(" http://a.xyz , ,http://b.xyz:8080,");
        assert_eq!(hosts, vec!["http://a.xyz", "http://b.xyz:8080"]);
    }

    #[test]
    fn test_parse_host_list_empty() {
        assert!(parse_host_list(" , ").is_empty());
    }
}
