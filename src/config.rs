use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use serde::Deserialize;

use crate::client::{ClientConfig, DEFAULT_ENDPOINT, DEFAULT_USER_AGENT};

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerSection,
}

#[derive(Debug, Default, Deserialize)]
pub struct ServerSection {
    pub endpoint: Option<String>,
    pub timeout_secs: Option<u64>,
    pub user_agent: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        for path in config_paths() {
            if path.exists() {
                let content = std::fs::read_to_string(&path)?;
                let config: Config = toml::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Config::default())
    }

    /// Resolve connection settings: CLI flag (with its env var, via clap)
    /// beats the config file, which beats the built-in default.
    pub fn build_client_config(
        &self,
        endpoint: Option<&str>,
        timeout_secs: Option<u64>,
    ) -> ClientConfig {
        let base_url = endpoint
            .map(String::from)
            .or_else(|| self.server.endpoint.clone())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        let timeout = timeout_secs
            .or(self.server.timeout_secs)
            .map(Duration::from_secs);

        let user_agent = self
            .server
            .user_agent
            .clone()
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());

        ClientConfig {
            base_url,
            user_agent,
            timeout,
        }
    }
}

fn config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(".hashdb.toml"));
    }

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("hashdb").join("config.toml"));
    }

    paths
}
