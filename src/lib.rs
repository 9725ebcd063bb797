//! Fire GitHub `repository_dispatch` events.
//!
//! The library surface is small: a [`GitHubContext`] that hands out one
//! authenticated client per process, [`dispatch_event`], and
//! [`resolve_github_project`] for mapping a checkout to `owner/repo`.

pub mod auth;
pub mod cli;
pub mod commands;
pub mod infra;
pub mod models;
pub mod shared;

pub use auth::{AuthError, GitHubContext};
pub use commands::dispatch::{DispatchError, DispatchOutcome, DispatchTarget, dispatch_event};
pub use infra::git::{GitError, resolve_github_project};
pub use models::{RepositoryDescription, RepositoryRef};
