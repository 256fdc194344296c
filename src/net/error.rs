// ABOUTME: Resolution and connection error types.
// ABOUTME: Distinguishes setup failures from exhausting every candidate address.

use crate::config::AddressFamily;
use std::fmt;
use thiserror::Error;

/// Why the last candidate address was abandoned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureReason {
    /// The socket for the candidate's family could not be allocated.
    Socket,
    /// The socket was created but the connection attempt failed.
    Connect,
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureReason::Socket => write!(f, "socket failed"),
            FailureReason::Connect => write!(f, "connect failed"),
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid port: {0:?}")]
    InvalidPort(String),

    #[error("name resolution failed: {0} is not a numeric address")]
    NotNumeric(String),

    #[error("name resolution failed for {host}: {source}")]
    Lookup {
        host: String,
        #[source]
        source: std::io::Error,
    },

    #[error("name resolution failed: no usable address for {host} (family: {family})")]
    NoAddress { host: String, family: AddressFamily },

    #[error("no candidate addresses to connect to")]
    NoCandidates,

    #[error("{reason}: {source}")]
    Unreachable {
        reason: FailureReason,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// True when every candidate was tried and none connected.
    pub fn is_network_failure(&self) -> bool {
        matches!(self, Error::NoCandidates | Error::Unreachable { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
