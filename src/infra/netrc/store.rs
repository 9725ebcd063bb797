//! Reading and rewriting the credentials file.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use super::error::{NetrcError, Result};
use super::parse::Netrc;

/// The credentials file at a fixed location.
#[derive(Debug, Clone)]
pub struct NetrcStore {
    path: Option<PathBuf>,
}

impl NetrcStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// Store at `~/.netrc`, or a store with no location when HOME is unset.
    pub fn from_home() -> Self {
        Self {
            path: crate::shared::dirs::netrc_path(),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Read the credentials file. A missing, unreadable, or malformed file
    /// yields an empty set of records.
    pub fn load(&self) -> Netrc {
        match self.read() {
            Ok(netrc) => netrc,
            Err(e) => {
                debug!("ignoring credentials file: {e}");
                Netrc::default()
            }
        }
    }

    /// Read the credentials file strictly. A missing file is empty.
    pub fn read(&self) -> Result<Netrc> {
        let path = self.path.as_deref().ok_or(NetrcError::NoLocation)?;
        match std::fs::read_to_string(path) {
            Ok(content) => Netrc::parse(&content),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Netrc::default()),
            Err(source) => Err(NetrcError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Replace the file contents with `netrc`.
    ///
    /// Writes a sibling temp file (mode 0600 on Unix) and renames it over
    /// the original so readers never see a partial file.
    pub fn save(&self, netrc: &Netrc) -> Result<()> {
        let path = self.path.as_deref().ok_or(NetrcError::NoLocation)?;
        let write_err = |source| NetrcError::Write {
            path: path.to_path_buf(),
            source,
        };

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut file = NamedTempFile::new_in(dir).map_err(write_err)?;
        file.write_all(netrc.to_string().as_bytes())
            .map_err(write_err)?;
        file.as_file().sync_all().map_err(write_err)?;
        file.persist(path).map_err(|e| write_err(e.error))?;

        debug!(path = %path.display(), "saved credentials");
        Ok(())
    }

    /// Set login and password for `host` in the file on disk, keeping every
    /// other entry. Refuses to touch a file it cannot parse.
    pub fn save_credentials(&self, host: &str, login: &str, password: &str) -> Result<()> {
        let mut netrc = self.read()?;
        netrc.set_credentials(host, login, password);
        self.save(&netrc)
    }
}
