//! Repository dispatch events.

use serde::Serialize;

use super::client::OctocrabClient;
use super::error::Result;
use crate::models::RepositoryRef;

#[derive(Debug, Serialize)]
struct DispatchRequest<'a> {
    event_type: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    client_payload: Option<&'a serde_json::Value>,
}

/// Trait for repository dispatch operations.
#[async_trait::async_trait]
pub trait DispatchClient: Send + Sync {
    /// Fire a `repository_dispatch` event named `event_type`.
    async fn create_dispatch_event(
        &self,
        repository: &RepositoryRef,
        event_type: &str,
        client_payload: Option<&serde_json::Value>,
    ) -> Result<()>;
}

#[async_trait::async_trait]
impl DispatchClient for OctocrabClient {
    async fn create_dispatch_event(
        &self,
        repository: &RepositoryRef,
        event_type: &str,
        client_payload: Option<&serde_json::Value>,
    ) -> Result<()> {
        let route = format!(
            "/repos/{}/{}/dispatches",
            repository.owner(),
            repository.repo()
        );
        let body = DispatchRequest {
            event_type,
            client_payload,
        };

        // GitHub answers 204 with an empty body, so skip deserialization.
        let response = self.client._post(route, Some(&body)).await?;
        octocrab::map_github_error(response).await?;
        Ok(())
    }
}
