//! Repository inspection.

use git2::{Repository, RepositoryOpenFlags};
use std::path::Path;
use tracing::debug;

use super::error::{GitError, Result};
use super::github::parse_github_url;
use crate::models::RepositoryDescription;

const HEADS_PREFIX: &str = "refs/heads/";
const REMOTES_PREFIX: &str = "refs/remotes/";

/// Open a git repository at `path` or any of its parents.
pub fn open_repo_at(path: &Path) -> Result<Repository> {
    Repository::open_ext(
        path,
        RepositoryOpenFlags::empty(),
        std::iter::empty::<&Path>(),
    )
    .map_err(|e| GitError::NotInRepo(format!("{}: {}", path.display(), e.message())))
}

/// Get the current branch name.
///
/// Works on unborn branches (no commits yet); fails on a detached HEAD.
pub fn current_branch(repo: &Repository) -> Result<String> {
    let head = repo.find_reference("HEAD")?;
    head.symbolic_target()
        .and_then(|target| target.strip_prefix(HEADS_PREFIX))
        .map(str::to_string)
        .ok_or(GitError::DetachedHead)
}

/// Name of the remote the branch's upstream lives on.
///
/// `branch.<name>.remote` must name an existing remote. The upstream ref
/// (e.g. `refs/remotes/origin/main`) is then shortened to `origin/main` and
/// the segment before the first `/` is the remote name.
pub fn upstream_remote(repo: &Repository, branch: &str) -> Result<String> {
    let no_upstream = || GitError::NoUpstream {
        branch: branch.to_string(),
    };

    let configured = repo
        .config()?
        .get_string(&format!("branch.{branch}.remote"))
        .map_err(|_| no_upstream())?;
    // "." means the branch tracks a local branch.
    if configured != "." && repo.find_remote(&configured).is_err() {
        return Err(GitError::RemoteNotFound { remote: configured });
    }

    let upstream = repo
        .branch_upstream_name(&format!("{HEADS_PREFIX}{branch}"))
        .map_err(|e| {
            debug!("upstream lookup for {branch} failed: {}", e.message());
            no_upstream()
        })?;
    let upstream = upstream.as_str().ok_or_else(no_upstream)?;

    // A branch tracking another local branch has no remote.
    upstream
        .strip_prefix(REMOTES_PREFIX)
        .and_then(|short| short.split_once('/'))
        .map(|(remote, _)| remote.to_string())
        .filter(|remote| !remote.is_empty())
        .ok_or_else(no_upstream)
}

/// Fetch URL of the named remote.
pub fn remote_url(repo: &Repository, remote: &str) -> Result<String> {
    let not_found = || GitError::RemoteNotFound {
        remote: remote.to_string(),
    };
    let found = repo.find_remote(remote).map_err(|_| not_found())?;
    found.url().map(str::to_string).ok_or_else(not_found)
}

/// Resolve the GitHub repository that the current branch of `dir` tracks.
pub fn resolve_github_project(dir: &Path) -> Result<RepositoryDescription> {
    let repo = open_repo_at(dir)?;
    resolve_in_repo(&repo)
}

fn resolve_in_repo(repo: &Repository) -> Result<RepositoryDescription> {
    let branch = current_branch(repo)?;
    let remote = upstream_remote(repo, &branch)?;
    let url = remote_url(repo, &remote)?;
    debug!(%branch, %remote, %url, "resolved upstream remote");
    Ok(parse_github_url(&url)?.describe())
}
