use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NetrcError {
    #[error("netrc line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Failed to read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("Failed to write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },

    #[error("No credentials file location: HOME is not set")]
    NoLocation,
}

pub type Result<T> = std::result::Result<T, NetrcError>;
