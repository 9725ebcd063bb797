use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RepositoryRefError {
    #[error("Repository owner must not be empty")]
    EmptyOwner,

    #[error("Repository name must not be empty")]
    EmptyRepo,

    #[error("Repository owner and name must not contain '/': {0}")]
    ContainsSlash(String),

    #[error("Invalid repository format: {0}. Expected owner/repo")]
    InvalidFormat(String),
}

/// A GitHub repository identified by owner and name.
///
/// Both parts are guaranteed non-empty and free of `/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawRepositoryRef")]
pub struct RepositoryRef {
    owner: String,
    repo: String,
}

#[derive(Deserialize)]
struct RawRepositoryRef {
    owner: String,
    repo: String,
}

impl TryFrom<RawRepositoryRef> for RepositoryRef {
    type Error = RepositoryRefError;

    fn try_from(raw: RawRepositoryRef) -> Result<Self, Self::Error> {
        Self::new(raw.owner, raw.repo)
    }
}

impl RepositoryRef {
    pub fn new(
        owner: impl Into<String>,
        repo: impl Into<String>,
    ) -> Result<Self, RepositoryRefError> {
        let owner = owner.into();
        let repo = repo.into();
        if owner.is_empty() {
            return Err(RepositoryRefError::EmptyOwner);
        }
        if repo.is_empty() {
            return Err(RepositoryRefError::EmptyRepo);
        }
        if let Some(part) = [&owner, &repo].into_iter().find(|p| p.contains('/')) {
            return Err(RepositoryRefError::ContainsSlash(part.clone()));
        }
        Ok(Self { owner, repo })
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn repo(&self) -> &str {
        &self.repo
    }

    /// `owner/repo`.
    pub fn repo_id(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }

    pub fn describe(self) -> RepositoryDescription {
        RepositoryDescription::from(self)
    }
}

/// Parses `owner/repo`; exactly one slash is accepted.
impl FromStr for RepositoryRef {
    type Err = RepositoryRefError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (owner, repo) = s
            .split_once('/')
            .ok_or_else(|| RepositoryRefError::InvalidFormat(s.to_string()))?;
        Self::new(owner, repo).map_err(|_| RepositoryRefError::InvalidFormat(s.to_string()))
    }
}

impl fmt::Display for RepositoryRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// A repository reference together with its display identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositoryDescription {
    #[serde(flatten)]
    repository: RepositoryRef,
    repo_id: String,
}

impl RepositoryDescription {
    pub fn owner(&self) -> &str {
        self.repository.owner()
    }

    pub fn repo(&self) -> &str {
        self.repository.repo()
    }

    pub fn repo_id(&self) -> &str {
        &self.repo_id
    }

    pub fn repository(&self) -> &RepositoryRef {
        &self.repository
    }
}

impl From<RepositoryRef> for RepositoryDescription {
    fn from(repository: RepositoryRef) -> Self {
        let repo_id = repository.repo_id();
        Self {
            repository,
            repo_id,
        }
    }
}

impl fmt::Display for RepositoryDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.repo_id)
    }
}
