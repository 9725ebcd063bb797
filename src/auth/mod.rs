//! GitHub credential acquisition.
//!
//! Tokens come from `.netrc`, are checked against the API, and fall back to
//! a bounded interactive prompt whose result may be saved back to `.netrc`.

mod context;
mod error;
mod prompt;

pub use context::{GitHubContext, stored_token};
pub use error::AuthError;
pub use prompt::{CredentialPrompt, Credentials, Prompter, TerminalPrompter};

/// Host key new credentials are saved under.
pub const GITHUB_HOST: &str = "github.com";

/// Host keys searched for a stored token, in order.
pub const TOKEN_HOSTS: [&str; 2] = [GITHUB_HOST, "api.github.com"];
