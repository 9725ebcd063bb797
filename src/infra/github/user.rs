//! Authenticated-user lookup, used to check whether a token works.

use serde::Deserialize;
use tracing::{debug, warn};

use super::client::OctocrabClient;
use super::error::Result;

#[derive(Debug, Deserialize)]
struct AuthenticatedUser {
    login: String,
}

/// Trait for identity operations.
#[async_trait::async_trait]
pub trait UserClient: Send + Sync {
    /// Login of the user the client's token belongs to.
    async fn authenticated_login(&self) -> Result<String>;
}

#[async_trait::async_trait]
impl UserClient for OctocrabClient {
    async fn authenticated_login(&self) -> Result<String> {
        let user: AuthenticatedUser = self.client.get("/user", None::<&()>).await?;
        Ok(user.login)
    }
}

/// Check `token` against `GET /user`.
///
/// Never fails: any error (network, 401, unexpected body) is reported as a
/// warning and yields `false`.
pub async fn validate_token(base_url: &str, token: &str) -> bool {
    let result = match OctocrabClient::with_base_url(base_url, token) {
        Ok(client) => client.authenticated_login().await,
        Err(e) => Err(e),
    };

    match result {
        Ok(login) => {
            debug!(%login, "token accepted");
            true
        }
        Err(e) => {
            warn!("GitHub token was not accepted: {e}");
            false
        }
    }
}
