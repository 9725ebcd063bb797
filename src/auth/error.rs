use std::io;

use thiserror::Error;

use crate::infra::github::GitHubError;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Giving up after {attempts} failed authentication attempts")]
    TooManyAttempts { attempts: u32 },

    #[error("Failed to read credentials from the terminal: {0}")]
    Prompt(#[source] io::Error),

    #[error("Failed to build GitHub client: {0}")]
    Client(#[from] GitHubError),
}

/// Why the stored credentials could not be used. Handled by prompting and
/// never returned to callers.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StoredTokenError {
    #[error("no GitHub token found in the credentials file")]
    NoTokenAvailable,

    #[error("the stored GitHub token was rejected")]
    InvalidCredential,
}

pub type Result<T> = std::result::Result<T, AuthError>;
