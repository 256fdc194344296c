// ABOUTME: Host key presented by the server during key exchange.
// ABOUTME: Keeps the parsed key alongside its wire encoding for byte-exact matching.

use russh::keys::ssh_key::{self, Fingerprint, HashAlg, PublicKey};

/// A server host key as seen on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostKey {
    key: PublicKey,
    /// SSH wire encoding: algorithm name followed by the key material.
    bytes: Vec<u8>,
}

impl HostKey {
    pub fn new(key: PublicKey) -> Result<Self, ssh_key::Error> {
        let bytes = key.to_bytes()?;
        Ok(Self { key, bytes })
    }

    /// Key type tag, e.g. `ssh-ed25519`.
    pub fn algorithm(&self) -> String {
        self.key.algorithm().as_str().to_string()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn fingerprint(&self) -> Fingerprint {
        self.key.fingerprint(HashAlg::Sha256)
    }
}
