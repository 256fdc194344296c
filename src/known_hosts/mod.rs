// ABOUTME: Read-only OpenSSH known_hosts database and host key checking.
// ABOUTME: Malformed lines are skipped; only an unreadable file is fatal.

mod entry;
mod error;
mod pattern;

pub use entry::Entry;
pub use error::{Error, LineError, Result};
pub use pattern::{host_matches, lookup_name};
pub use russh::keys::ssh_key::known_hosts::{HostPatterns, Marker};

use std::path::Path;

/// Outcome of checking a presented host key against the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    /// An entry for the host holds exactly this key.
    Match { line: usize },
    /// Entries exist for the host, none with this key. `line` is the first of them.
    Mismatch { line: usize },
    /// No entry covers the host.
    NotFound,
    /// The key is listed as `@revoked` for the host.
    Revoked { line: usize },
}

/// known_hosts entries loaded in file order.
#[derive(Debug, Clone, Default)]
pub struct KnownHosts {
    entries: Vec<Entry>,
}

impl KnownHosts {
    /// Load and parse a known_hosts file.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await.map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let known_hosts = Self::parse(&String::from_utf8_lossy(&bytes));
        tracing::debug!(
            path = %path.display(),
            entries = known_hosts.len(),
            "loaded known hosts"
        );
        Ok(known_hosts)
    }

    pub fn parse(text: &str) -> Self {
        let mut entries = Vec::new();
        for (index, line) in text.lines().enumerate() {
            match Entry::parse(index + 1, line) {
                Ok(Some(entry)) => entries.push(entry),
                Ok(None) => {}
                Err(e) => {
                    tracing::debug!(line = index + 1, error = %e, "skipping known hosts line");
                }
            }
        }
        Self { entries }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check `key` (SSH wire encoding) for `host` on `port`.
    ///
    /// Keys compare byte for byte, so the key type is part of the
    /// comparison. A revoked listing wins over everything, then a match,
    /// then a mismatch.
    pub fn check(&self, host: &str, port: u16, key: &[u8]) -> Result<Check> {
        if host.is_empty() {
            return Err(Error::EmptyHost);
        }
        if key.is_empty() {
            return Err(Error::EmptyKey);
        }

        let name = lookup_name(host, port);
        let mut matched = None;
        let mut mismatched = None;

        for entry in &self.entries {
            if matches!(entry.marker(), Some(Marker::CertAuthority))
                || !host_matches(entry.hosts(), &name)
            {
                continue;
            }
            let same_key = entry.key.as_slice() == key;
            match entry.marker() {
                Some(Marker::Revoked) => {
                    if same_key {
                        return Ok(Check::Revoked { line: entry.line });
                    }
                }
                _ if same_key => {
                    matched.get_or_insert(entry.line);
                }
                _ => {
                    mismatched.get_or_insert(entry.line);
                }
            }
        }

        Ok(match (matched, mismatched) {
            (Some(line), _) => Check::Match { line },
            (None, Some(line)) => Check::Mismatch { line },
            (None, None) => Check::NotFound,
        })
    }
}
