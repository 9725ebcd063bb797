//! GitHub remote URL parsing.

use lazy_regex::regex_captures;

use super::error::{GitError, Result};
use crate::models::RepositoryRef;

/// Parse owner and repo from a GitHub URL.
/// Supports both SSH (git@github.com:owner/repo.git) and HTTPS formats.
pub fn parse_github_url(url: &str) -> Result<RepositoryRef> {
    let not_github = || GitError::NotGitHubRemote {
        url: url.to_string(),
    };

    let (_, owner, repo) = regex_captures!(
        r"^(?:[a-z][a-z0-9+.-]*://)?(?:[^@/]+@)?github\.com(?::\d+)?[:/]([^/]+)/([^/]+?)(?:\.git)?/?$",
        url.trim()
    )
    .ok_or_else(not_github)?;

    RepositoryRef::new(owner, repo).map_err(|_| not_github())
}
