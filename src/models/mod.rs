mod repository;

pub use repository::{RepositoryDescription, RepositoryRef, RepositoryRefError};
