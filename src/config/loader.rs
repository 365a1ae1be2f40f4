//! Configuration file loading

use super::validation;
use crate::constants::github::{API_BASE, BASE_URL_ENV_VAR, TOKEN_ENV_VAR};
use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Connection settings for a GitHub (or GitHub Enterprise) API
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct GitHubConfig {
    /// API root, always ending in `/` once normalized
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Personal access token
    #[serde(default)]
    pub token: String,
    /// Per-request timeout applied to the HTTP transport
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    API_BASE.to_string()
}

impl GitHubConfig {
    /// Configuration for github.com with the given token
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            base_url: default_base_url(),
            token: token.into(),
            timeout_secs: None,
        }
    }

    /// Point the configuration at another API root, e.g. a GitHub Enterprise server
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self.normalize();
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = Some(timeout_secs);
        self
    }

    /// Load configuration from a YAML file
    ///
    /// A file without a token falls back to the `GITHUB_TOKEN` environment variable.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let mut config: GitHubConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        if config.token.trim().is_empty()
            && let Ok(token) = std::env::var(TOKEN_ENV_VAR)
        {
            config.token = token;
        }

        config.normalize();
        config.validate()?;

        Ok(config)
    }

    /// Build configuration from `GITHUB_TOKEN` and the optional `GITHUB_BASE_URL`
    pub fn from_env() -> Result<Self> {
        let token = std::env::var(TOKEN_ENV_VAR)
            .map_err(|_| anyhow!("{} environment variable is not set", TOKEN_ENV_VAR))?;

        let mut config = Self::new(token);
        if let Ok(base_url) = std::env::var(BASE_URL_ENV_VAR) {
            config = config.with_base_url(base_url);
        }

        config.validate()?;
        Ok(config)
    }

    /// Append the trailing slash path segments are concatenated onto
    pub fn normalize(&mut self) {
        let trimmed = self.base_url.trim();
        self.base_url = if trimmed.ends_with('/') {
            trimmed.to_string()
        } else {
            format!("{}/", trimmed)
        };
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        validation::validate_config(self).map_err(validation::validation_errors_to_anyhow)
    }
}

impl std::fmt::Debug for GitHubConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubConfig")
            .field("base_url", &self.base_url)
            .field("token", &"<redacted>")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
