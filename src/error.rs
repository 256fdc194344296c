// ABOUTME: Fatal errors that stop an audit before a verdict is reached.
// ABOUTME: Uses thiserror and maps each error to its process exit code.

use crate::{exit, known_hosts, net, ssh};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Net(#[from] net::Error),

    #[error(transparent)]
    Ssh(#[from] ssh::Error),

    #[error(transparent)]
    KnownHosts(#[from] known_hosts::Error),

    #[error("failed to restrict process privileges: {0}")]
    Sandbox(#[source] std::io::Error),
}

impl Error {
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::Net(e) if e.is_network_failure() => exit::NETFAIL,
            _ => exit::ERROR,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
