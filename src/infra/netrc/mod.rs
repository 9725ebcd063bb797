//! `.netrc` credential storage.
//!
//! The file format is the long-standing convention used by ftp, curl and
//! git: `machine <host>` entries with `login`, `password`, `account` and
//! `macdef` fields, plus an optional trailing `default` entry.

mod error;
mod parse;
mod store;

pub use error::NetrcError;
pub use parse::{Machine, Netrc};
pub use store::NetrcStore;
