use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::dirs;

/// Base URL of the public GitHub REST API.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Interactive attempts allowed before authentication gives up.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Top-level configuration for gh-dispatch.
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// GitHub API settings.
    #[serde(default)]
    pub github: GitHubConfig,

    /// Credential acquisition settings.
    #[serde(default)]
    pub auth: AuthConfig,
}

/// GitHub API configuration.
#[derive(Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct GitHubConfig {
    /// REST API base URL (default: "https://api.github.com").
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
        }
    }
}

/// Credential acquisition configuration.
#[derive(Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct AuthConfig {
    /// Credentials file (default: ~/.netrc). A leading `~/` is expanded.
    #[serde(default)]
    pub netrc_path: Option<String>,

    /// Interactive prompt attempts before giving up (default: 3).
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            netrc_path: None,
            max_attempts: default_max_attempts(),
        }
    }
}

impl AuthConfig {
    /// Resolved credentials file path, if one can be determined.
    pub fn netrc_path(&self) -> Option<PathBuf> {
        match &self.netrc_path {
            Some(path) => Some(dirs::expand_tilde(path)),
            None => dirs::netrc_path(),
        }
    }
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_max_attempts() -> u32 {
    DEFAULT_MAX_ATTEMPTS
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read config file (permission error, etc.)
    #[error("Failed to read config file {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// YAML parse error
    #[error("Invalid config file {path}: {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("Invalid config file {path}: auth.max_attempts must be at least 1")]
    ZeroAttempts { path: PathBuf },
}

/// Load configuration from ~/.config/gh-dispatch/config.ya?ml.
/// Returns Config::default() if no config file exists.
pub fn load_config() -> anyhow::Result<Config> {
    let Some(dir) = dirs::config_dir() else {
        return Ok(Config::default());
    };
    load_config_from_dir(&dir.join("gh-dispatch"))
}

/// Load configuration from a specific directory.
/// Searches for config.yaml, then config.yml in the given directory.
/// Returns Config::default() if neither file exists.
pub fn load_config_from_dir(dir: &Path) -> anyhow::Result<Config> {
    for filename in &["config.yaml", "config.yml"] {
        let path = dir.join(filename);
        match std::fs::read_to_string(&path) {
            Ok(content) => return parse_config(&content, &path),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
            Err(e) => return Err(ConfigError::ReadError { path, source: e }.into()),
        }
    }

    Ok(Config::default())
}

/// Parse YAML content into Config.
fn parse_config(content: &str, path: &Path) -> anyhow::Result<Config> {
    let config: Config = serde_yaml::from_str(content).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    if config.auth.max_attempts == 0 {
        return Err(ConfigError::ZeroAttempts {
            path: path.to_path_buf(),
        }
        .into());
    }

    Ok(config)
}
