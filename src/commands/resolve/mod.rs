use std::path::PathBuf;

use clap::Args;

use crate::infra::git::resolve_github_project;
use crate::models::RepositoryDescription;

#[derive(Args, Clone, PartialEq, Eq, Debug)]
pub struct ResolveArgs {
    /// Checkout to inspect (default: current directory)
    pub dir: Option<PathBuf>,

    /// Print owner, repo and repo_id as JSON
    #[arg(long)]
    pub json: bool,
}

impl ResolveArgs {
    pub fn run(&self) -> anyhow::Result<()> {
        let dir = self.dir.clone().unwrap_or_else(|| PathBuf::from("."));
        let description = resolve_github_project(&dir)?;
        println!("{}", format_description(&description, self.json)?);
        Ok(())
    }
}

fn format_description(description: &RepositoryDescription, json: bool) -> anyhow::Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(description)?)
    } else {
        Ok(description.repo_id().to_string())
    }
}
