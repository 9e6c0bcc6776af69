//! Configuration loading for serper-mcp
//!
//! Configuration is loaded from:
//! 1. Environment variable SERPER_API_KEY (required)
//! 2. Environment variables SERPER_SEARCH_URL / SERPER_SCRAPE_URL
//! 3. File at SERPER_MCP_CONFIG_PATH, or ~/.config/serper-mcp.toml
//! 4. Default values

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Serper API key; only ever read from the environment, never from file
    #[serde(skip)]
    pub api_key: String,
    /// Base URL for the search API (no trailing slash)
    #[serde(default = "default_search_base_url")]
    pub search_base_url: String,
    /// Full URL of the scrape endpoint
    #[serde(default = "default_scrape_url")]
    pub scrape_url: String,
    /// HTTP request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

// Default value functions
fn default_search_base_url() -> String {
    "https://google.serper.dev".to_string()
}

fn default_scrape_url() -> String {
    "https://scrape.serper.dev".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            search_base_url: default_search_base_url(),
            scrape_url: default_scrape_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    /// Load configuration from file, environment, and defaults.
    ///
    /// A missing or empty `SERPER_API_KEY` is fatal: the server refuses to
    /// start without a credential.
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_path();

        let mut config = if let Some(path) = config_path {
            if path.exists() {
                tracing::info!("Loading config from: {}", path.display());
                let content = std::fs::read_to_string(&path)?;
                toml::from_str(&content)?
            } else {
                tracing::info!("Config file not found, using defaults");
                Self::default()
            }
        } else {
            tracing::info!("No config path available, using defaults");
            Self::default()
        };

        // Endpoint overrides from environment (highest priority)
        if let Ok(url) = std::env::var("SERPER_SEARCH_URL") {
            config.search_base_url = url;
        }
        if let Ok(url) = std::env::var("SERPER_SCRAPE_URL") {
            config.scrape_url = url;
        }

        match std::env::var("SERPER_API_KEY") {
            Ok(key) if !key.trim().is_empty() => config.api_key = key,
            _ => bail!("SERPER_API_KEY environment variable is required"),
        }

        Ok(config)
    }

    /// Find the configuration file path
    fn find_config_path() -> Option<PathBuf> {
        // 1. Check environment variable
        if let Ok(path) = std::env::var("SERPER_MCP_CONFIG_PATH") {
            return Some(PathBuf::from(path));
        }

        // 2. Check ~/.config/serper-mcp.toml
        if let Ok(home) = std::env::var("HOME") {
            let path = PathBuf::from(home).join(".config").join("serper-mcp.toml");
            return Some(path);
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_serper() {
        let config = Config::default();
        assert_eq!(config.search_base_url, "https://google.serper.dev");
        assert_eq!(config.scrape_url, "https://scrape.serper.dev");
        assert_eq!(config.timeout_secs, 30);
        assert!(config.api_key.is_empty());
    }

    #[test]
    fn file_values_fill_missing_fields_with_defaults() {
        let config: Config = toml::from_str("search_base_url = \"http://localhost:9000\"").unwrap();
        assert_eq!(config.search_base_url, "http://localhost:9000");
        assert_eq!(config.scrape_url, "https://scrape.serper.dev");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn api_key_is_never_serialized() {
        let config = Config {
            api_key: "secret".to_string(),
            ..Config::default()
        };
        let serialized = toml::to_string(&config).unwrap();
        assert!(!serialized.contains("secret"));
    }
}
