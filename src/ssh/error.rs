// ABOUTME: SSH handshake error types.
// ABOUTME: Each variant names the stage of the handshake that failed.

use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("SSH handshake failed: {0}")]
    Handshake(#[source] russh::Error),

    #[error("SSH handshake timed out after {0:?}")]
    Timeout(Duration),

    #[error("SSH handshake completed without a host key")]
    HostKeyMissing,

    #[error("failed to encode host key: {0}")]
    HostKeyEncoding(#[from] russh::keys::ssh_key::Error),

    #[error("SSH disconnect failed: {0}")]
    Disconnect(#[source] russh::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
