//! GitHub API client implementation using octocrab.

use octocrab::service::middleware::retry::RetryConfig;

use super::error::Result;

/// Production implementation using octocrab.
pub struct OctocrabClient {
    pub(crate) client: octocrab::Octocrab,
}

impl OctocrabClient {
    /// Create a client authenticated with `token` against the REST API at
    /// `base_url` (e.g. `https://api.github.com`).
    ///
    /// Requests are sent once; octocrab's retry middleware is disabled.
    /// Must be called from within a tokio runtime.
    pub fn with_base_url(base_url: &str, token: &str) -> Result<Self> {
        let client = octocrab::Octocrab::builder()
            .base_uri(base_url)?
            .personal_token(token.to_string())
            .add_retry_config(RetryConfig::None)
            .build()?;
        Ok(Self { client })
    }
}
