//! Configuration loading for the metadata lister.
//!
//! Values come from an optional YAML file; command line flags override them.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::ValueEnum;
use metadata_client::FetcherConfig;
use serde::Deserialize;
use tracing::debug;

/// Output rendering for the resolved layer list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Indented plain-text tree
    #[default]
    Text,
    /// Nested `<ul>` list
    Html,
    /// JSON array, one entry per layer
    Json,
}

/// Lister configuration file contents.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ListerConfig {
    /// User-Agent header for map service requests
    pub user_agent: Option<String>,
    /// Overall request timeout; unset waits as long as the transport allows
    pub request_timeout_secs: Option<u64>,
    pub connect_timeout_secs: u64,
    /// Layers resolved at the same time
    pub max_concurrent: usize,
    pub format: OutputFormat,
}

impl Default for ListerConfig {
    fn default() -> Self {
        Self {
            user_agent: None,
            request_timeout_secs: None,
            connect_timeout_secs: 30,
            max_concurrent: 4,
            format: OutputFormat::Text,
        }
    }
}

impl ListerConfig {
    /// Load a configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: ListerConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        debug!(path = %path.display(), "Loaded lister config");
        Ok(config)
    }

    /// Load from `path` if given, otherwise use defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// HTTP settings for the map service fetcher.
    pub fn fetcher_config(&self) -> FetcherConfig {
        let mut config = FetcherConfig {
            request_timeout: self.request_timeout_secs.map(Duration::from_secs),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            ..FetcherConfig::default()
        };
        if let Some(user_agent) = &self.user_agent {
            config.user_agent = user_agent.clone();
        }
        config
    }
}
