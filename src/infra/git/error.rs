//! Git error types.

use thiserror::Error;

/// Why a directory could not be resolved to a GitHub repository.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Not in a git repository: {0}")]
    NotInRepo(String),

    #[error("HEAD is detached; check out a branch with an upstream")]
    DetachedHead,

    #[error("Branch '{branch}' has no upstream configured")]
    NoUpstream { branch: String },

    #[error("Remote '{remote}' not found")]
    RemoteNotFound { remote: String },

    #[error("Remote URL is not a GitHub repository: {url}")]
    NotGitHubRemote { url: String },

    #[error("Git error: {0}")]
    Git2(#[from] git2::Error),
}

pub type Result<T> = std::result::Result<T, GitError>;
