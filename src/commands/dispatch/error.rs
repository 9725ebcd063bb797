use thiserror::Error;

use crate::auth::AuthError;
use crate::infra::git::GitError;
use crate::infra::github::GitHubError;

#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("Event type must not be empty")]
    EmptyEventType,

    #[error("Could not determine the GitHub repository: {0}")]
    Resolve(#[from] GitError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Api(#[from] GitHubError),
}

pub type Result<T> = std::result::Result<T, DispatchError>;
