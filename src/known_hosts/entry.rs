// ABOUTME: A single parsed known_hosts line with its line number.
// ABOUTME: Parsing is done by ssh-key; this keeps the key's wire encoding for matching.

use super::error::LineError;
use russh::keys::ssh_key::known_hosts::{self, HostPatterns, Marker};
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct Entry {
    /// 1-based line number in the source file.
    pub line: usize,
    /// Recorded key in SSH wire encoding.
    pub key: Vec<u8>,
    parsed: known_hosts::Entry,
}

impl Entry {
    /// Parse one line. Blank lines and comments yield `Ok(None)`.
    pub fn parse(line: usize, text: &str) -> Result<Option<Self>, LineError> {
        let text = text.trim();
        if text.is_empty() || text.starts_with('#') {
            return Ok(None);
        }

        // ssh-key splits fields on single spaces; OpenSSH accepts any run of blanks.
        let normalized = text.split_whitespace().collect::<Vec<_>>().join(" ");
        let parsed = known_hosts::Entry::from_str(&normalized).map_err(LineError::Syntax)?;
        let key = parsed.public_key().to_bytes().map_err(LineError::KeyEncoding)?;

        Ok(Some(Self { line, key, parsed }))
    }

    pub fn marker(&self) -> Option<&Marker> {
        self.parsed.marker()
    }

    pub fn hosts(&self) -> &HostPatterns {
        self.parsed.host_patterns()
    }

    /// Key type tag, e.g. `ssh-ed25519`.
    pub fn key_type(&self) -> String {
        self.parsed.public_key().algorithm().as_str().to_owned()
    }
}
