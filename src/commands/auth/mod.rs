use clap::Subcommand;

use crate::auth::GitHubContext;
use crate::infra::github::UserClient;

/// Credential commands.
#[derive(Subcommand, Clone, PartialEq, Eq, Debug)]
pub enum AuthCommands {
    /// Show which GitHub account the stored credentials belong to (prompts to log in if needed)
    Status,
}

impl AuthCommands {
    pub async fn run(&self, ctx: &GitHubContext) -> anyhow::Result<()> {
        match self {
            Self::Status => {
                println!("{}", status(ctx).await?);
                Ok(())
            }
        }
    }
}

async fn status(ctx: &GitHubContext) -> anyhow::Result<String> {
    let client = ctx.client().await?;
    let login = client.authenticated_login().await?;
    Ok(format!("Logged in to {} as {login}", ctx.api_url()))
}
