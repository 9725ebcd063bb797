mod error;

pub use error::{DispatchError, Result};

use std::path::PathBuf;

use clap::Args;
use tracing::info;

use crate::auth::GitHubContext;
use crate::infra::git::resolve_github_project;
use crate::infra::github::DispatchClient;
use crate::models::{RepositoryDescription, RepositoryRef};

#[derive(Args, Clone, PartialEq, Eq, Debug)]
pub struct DispatchArgs {
    /// Event type delivered to `repository_dispatch` workflows
    pub event_type: String,

    /// Target repository as OWNER/REPO (default: upstream of the current branch)
    #[arg(long, short = 'R', value_name = "OWNER/REPO", conflicts_with = "dir")]
    pub repo: Option<RepositoryRef>,

    /// Resolve the target repository from this checkout instead of the current directory
    #[arg(long, short = 'C', value_name = "PATH")]
    pub dir: Option<PathBuf>,

    /// JSON object sent as `client_payload`
    #[arg(long, value_name = "JSON", value_parser = parse_payload)]
    pub payload: Option<serde_json::Value>,
}

impl DispatchArgs {
    fn target(&self) -> DispatchTarget {
        match (&self.repo, &self.dir) {
            (Some(repo), _) => DispatchTarget::Repo(repo.clone()),
            (None, Some(dir)) => DispatchTarget::Path(dir.clone()),
            (None, None) => DispatchTarget::Path(PathBuf::from(".")),
        }
    }
}

fn parse_payload(raw: &str) -> std::result::Result<serde_json::Value, String> {
    match serde_json::from_str(raw) {
        Ok(value @ serde_json::Value::Object(_)) => Ok(value),
        Ok(_) => Err("client payload must be a JSON object".to_string()),
        Err(e) => Err(format!("invalid JSON: {e}")),
    }
}

/// Where to send the event: a checkout to resolve, or a known repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchTarget {
    Path(PathBuf),
    Repo(RepositoryRef),
}

impl From<RepositoryRef> for DispatchTarget {
    fn from(repo: RepositoryRef) -> Self {
        Self::Repo(repo)
    }
}

impl From<PathBuf> for DispatchTarget {
    fn from(path: PathBuf) -> Self {
        Self::Path(path)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchOutcome {
    pub repository: RepositoryDescription,
    pub event_type: String,
    pub message: String,
}

pub async fn run(args: &DispatchArgs, ctx: &GitHubContext) -> anyhow::Result<()> {
    let outcome = dispatch_event(
        ctx,
        args.target(),
        &args.event_type,
        args.payload.as_ref(),
    )
    .await?;
    println!("{}", outcome.message);
    Ok(())
}

/// Fire a `repository_dispatch` event at `target`.
///
/// A path target is resolved from the upstream of its current branch
/// before any credentials are looked at.
pub async fn dispatch_event(
    ctx: &GitHubContext,
    target: DispatchTarget,
    event_type: &str,
    client_payload: Option<&serde_json::Value>,
) -> Result<DispatchOutcome> {
    if event_type.is_empty() {
        return Err(DispatchError::EmptyEventType);
    }

    let repository = match target {
        DispatchTarget::Path(dir) => resolve_github_project(&dir)?,
        DispatchTarget::Repo(repo) => repo.describe(),
    };

    let client = ctx.client().await?;
    dispatch_with_client(client, repository, event_type, client_payload).await
}

async fn dispatch_with_client(
    client: &impl DispatchClient,
    repository: RepositoryDescription,
    event_type: &str,
    client_payload: Option<&serde_json::Value>,
) -> Result<DispatchOutcome> {
    client
        .create_dispatch_event(repository.repository(), event_type, client_payload)
        .await?;
    info!(repo = %repository, %event_type, "dispatched");

    let message = format!("Dispatched '{event_type}' to {}", repository.repo_id());
    Ok(DispatchOutcome {
        repository,
        event_type: event_type.to_string(),
        message,
    })
}
