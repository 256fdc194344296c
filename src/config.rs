// ABOUTME: Audit configuration built from the command line.
// ABOUTME: Target host, address family constraint, known_hosts path and timeout.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_PORT: &str = "22";

/// Address family constraint applied during resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AddressFamily {
    #[default]
    Any,
    Ipv4,
    Ipv6,
}

impl AddressFamily {
    /// Whether a resolved address satisfies this constraint.
    pub fn allows(self, addr: &std::net::SocketAddr) -> bool {
        match self {
            AddressFamily::Any => true,
            AddressFamily::Ipv4 => addr.is_ipv4(),
            AddressFamily::Ipv6 => addr.is_ipv6(),
        }
    }
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressFamily::Any => write!(f, "any"),
            AddressFamily::Ipv4 => write!(f, "IPv4"),
            AddressFamily::Ipv6 => write!(f, "IPv6"),
        }
    }
}

/// The host being audited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// Host name or address literal, also used for the known_hosts lookup.
    pub host: String,
    /// Port as given on the command line (default: "22").
    pub port: String,
    pub family: AddressFamily,
    /// Skip name lookup; `host` must be an address literal.
    pub numeric_only: bool,
}

impl Target {
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: DEFAULT_PORT.to_string(),
            family: AddressFamily::Any,
            numeric_only: false,
        }
    }

    /// Set the port. An empty value keeps the default.
    pub fn port(mut self, port: impl Into<String>) -> Self {
        let port = port.into();
        self.port = if port.is_empty() {
            DEFAULT_PORT.to_string()
        } else {
            port
        };
        self
    }

    pub fn family(mut self, family: AddressFamily) -> Self {
        self.family = family;
        self
    }

    pub fn numeric_only(mut self, numeric_only: bool) -> Self {
        self.numeric_only = numeric_only;
        self
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// Everything one audit run needs.
#[derive(Debug, Clone)]
pub struct AuditConfig {
    pub target: Target,
    /// known_hosts file in OpenSSH format. Never written.
    pub known_hosts: PathBuf,
    /// Bound on each connect attempt and on the handshake. None waits forever.
    pub timeout: Option<Duration>,
}

impl AuditConfig {
    pub fn new(known_hosts: impl Into<PathBuf>, target: Target) -> Self {
        Self {
            target,
            known_hosts: known_hosts.into(),
            timeout: None,
        }
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}
