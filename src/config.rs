use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::client::DEFAULT_API_URL;
use crate::fetch::{HttpFetcher, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};

/// Root configuration structure, deserialized from `.gh-org-repos/config.toml`.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// HTTP transport settings.
    #[serde(default)]
    pub api: ApiConfig,
}

/// Where the API lives and how requests are sent.
#[derive(Debug, Deserialize)]
pub struct ApiConfig {
    /// API root; `https://api.github.com` unless pointed at GitHub Enterprise.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Value of the `User-Agent` header GitHub requires.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ApiConfig {
    /// Build the HTTP fetcher these settings describe.
    pub fn fetcher(&self) -> Result<HttpFetcher> {
        HttpFetcher::with_settings(&self.user_agent, Duration::from_secs(self.timeout_secs))
            .context("failed to build HTTP client")
    }
}

/// Load the configuration, searching in order:
///
/// 1. `config_override` — path passed via `--config`
/// 2. `<working_dir>/.gh-org-repos/config.toml`
/// 3. `~/.config/gh-org-repos/config.toml`
/// 4. Built-in [`Config::default`]
pub fn load_config(working_dir: &Path, config_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_override {
        return read_config(path);
    }

    let local_config = working_dir.join(".gh-org-repos").join("config.toml");
    if local_config.exists() {
        return read_config(&local_config);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home.join(".config").join("gh-org-repos").join("config.toml");
        if home_config.exists() {
            return read_config(&home_config);
        }
    }

    Ok(Config::default())
}

fn read_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("invalid config {}", path.display()))
}
