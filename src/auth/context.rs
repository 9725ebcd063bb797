//! The authenticated GitHub client, created once per context.

use std::path::PathBuf;

use tokio::sync::OnceCell;
use tracing::{info, warn};

use super::TOKEN_HOSTS;
use super::error::{AuthError, Result, StoredTokenError};
use super::prompt::{CredentialPrompt, Prompter, TerminalPrompter};
use crate::infra::github::{OctocrabClient, validate_token};
use crate::infra::netrc::{Machine, Netrc, NetrcStore};
use crate::shared::config::{Config, DEFAULT_API_URL, DEFAULT_MAX_ATTEMPTS};

/// Everything needed to obtain an authenticated client, plus the client
/// itself once obtained.
///
/// Construct one per process and pass it by reference. The first call to
/// [`GitHubContext::client`] runs the credential flow; later calls return
/// the same client without re-validating it.
pub struct GitHubContext {
    api_url: String,
    store: NetrcStore,
    max_attempts: u32,
    prompter: Box<dyn Prompter>,
    client: OnceCell<OctocrabClient>,
}

impl GitHubContext {
    pub fn new(api_url: impl Into<String>, store: NetrcStore, prompter: Box<dyn Prompter>) -> Self {
        Self {
            api_url: api_url.into(),
            store,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            prompter,
            client: OnceCell::new(),
        }
    }

    /// Context for public GitHub, `~/.netrc`, and terminal prompts.
    pub fn from_home() -> Self {
        Self::new(
            DEFAULT_API_URL,
            NetrcStore::from_home(),
            Box::new(TerminalPrompter),
        )
    }

    /// Context from loaded configuration; `netrc` overrides the configured
    /// credentials file.
    pub fn from_config(config: &Config, netrc: Option<PathBuf>) -> Self {
        let store = match netrc.or_else(|| config.auth.netrc_path()) {
            Some(path) => NetrcStore::new(path),
            None => NetrcStore::from_home(),
        };
        Self::new(&config.github.api_url, store, Box::new(TerminalPrompter))
            .with_max_attempts(config.auth.max_attempts)
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn store(&self) -> &NetrcStore {
        &self.store
    }

    /// The authenticated client, running the credential flow on first use.
    ///
    /// A failed flow is not cached; the next call starts over.
    pub async fn client(&self) -> Result<&OctocrabClient> {
        self.client
            .get_or_try_init(|| async {
                let token = self.resolve_token().await?;
                Ok::<_, AuthError>(OctocrabClient::with_base_url(&self.api_url, &token)?)
            })
            .await
    }

    async fn resolve_token(&self) -> Result<String> {
        let netrc = self.store.load();
        let reason = match stored_token(&netrc) {
            Some(token) => {
                if validate_token(&self.api_url, token).await {
                    return Ok(token.to_string());
                }
                StoredTokenError::InvalidCredential
            }
            None => StoredTokenError::NoTokenAvailable,
        };

        match reason {
            StoredTokenError::NoTokenAvailable => info!("{reason}"),
            StoredTokenError::InvalidCredential => warn!("{reason}"),
        }

        CredentialPrompt {
            prompter: self.prompter.as_ref(),
            store: &self.store,
            api_url: &self.api_url,
            max_attempts: self.max_attempts,
        }
        .run()
        .await
    }
}

/// Password of the first GitHub host entry that has one.
pub fn stored_token(netrc: &Netrc) -> Option<&str> {
    TOKEN_HOSTS
        .iter()
        .find_map(|host| netrc.get(host).and_then(Machine::token))
}
