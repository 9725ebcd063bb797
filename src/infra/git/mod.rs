//! Git operations using git2 (libgit2).
//!
//! Resolves the GitHub repository a local checkout tracks without
//! spawning external git processes.

mod error;
mod github;
mod repo;
#[cfg(test)]
pub mod test_utils;

pub use error::GitError;
pub use github::parse_github_url;
pub use repo::{current_branch, open_repo_at, remote_url, resolve_github_project, upstream_remote};
