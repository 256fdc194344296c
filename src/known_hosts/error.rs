// ABOUTME: known_hosts loading, parsing and checking errors.
// ABOUTME: Line errors are skip reasons; only file access and check errors surface.

use russh::keys::ssh_key;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read known hosts file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot check an empty host name")]
    EmptyHost,

    #[error("cannot check an empty host key")]
    EmptyKey,
}

pub type Result<T> = std::result::Result<T, Error>;

/// Why a known_hosts line was skipped.
#[derive(Debug, Error)]
pub enum LineError {
    #[error("malformed entry: {0}")]
    Syntax(#[source] ssh_key::Error),

    #[error("cannot encode recorded key: {0}")]
    KeyEncoding(#[source] ssh_key::Error),
}
