//! GitHub API client module using octocrab.
//!
//! Provides OctocrabClient and the two operations this tool needs:
//! identity lookup (token validation) and repository dispatch.

mod client;
mod dispatch;
mod error;
#[cfg(test)]
pub mod mock;
mod user;

pub use client::OctocrabClient;
pub use dispatch::DispatchClient;
pub use error::GitHubError;
pub use user::{UserClient, validate_token};
