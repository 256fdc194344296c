// ABOUTME: Key-exchange-only SSH client built on russh.
// ABOUTME: Captures the server host key and disconnects without authenticating.

use super::error::{Error, Result};
use super::host_key::HostKey;
use parking_lot::Mutex;
use russh::Disconnect;
use russh::client::{self, Config, Handle};
use russh::keys::ssh_key;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpStream;

/// How long to wait for the disconnect to be flushed when no timeout is configured.
const DISCONNECT_GRACE: Duration = Duration::from_secs(5);

/// russh handler that records the presented host key.
///
/// The key is accepted so that key exchange runs to completion; the
/// decision about whether it is trusted is made later against known_hosts.
pub(crate) struct KeyCapture {
    presented: Arc<Mutex<Option<ssh_key::PublicKey>>>,
}

impl client::Handler for KeyCapture {
    type Error = russh::Error;

    async fn check_server_key(
        &mut self,
        server_public_key: &ssh_key::PublicKey,
    ) -> std::result::Result<bool, Self::Error> {
        tracing::debug!(
            algorithm = %server_public_key.algorithm(),
            "server presented host key"
        );
        *self.presented.lock() = Some(server_public_key.clone());
        Ok(true)
    }
}

/// A completed SSH transport handshake.
pub struct Handshake {
    handle: Handle<KeyCapture>,
    host_key: HostKey,
    timeout: Option<Duration>,
}

impl std::fmt::Debug for Handshake {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Handshake")
            .field("handle", &"<russh::Handle>")
            .field("host_key", &self.host_key)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Run the SSH transport handshake over an already connected stream.
///
/// Returns once key exchange has finished. With a timeout, the whole
/// exchange must complete within it.
pub async fn handshake(stream: TcpStream, timeout: Option<Duration>) -> Result<Handshake> {
    let config = Arc::new(Config {
        inactivity_timeout: timeout,
        ..Default::default()
    });

    let presented = Arc::new(Mutex::new(None));
    let handler = KeyCapture {
        presented: Arc::clone(&presented),
    };

    let exchange = client::connect_stream(config, stream, handler);
    let handle = match timeout {
        Some(limit) => tokio::time::timeout(limit, exchange)
            .await
            .map_err(|_| Error::Timeout(limit))?,
        None => exchange.await,
    }
    .map_err(Error::Handshake)?;

    let key = presented.lock().take().ok_or(Error::HostKeyMissing)?;
    let host_key = HostKey::new(key)?;

    Ok(Handshake {
        handle,
        host_key,
        timeout,
    })
}

impl Handshake {
    pub fn host_key(&self) -> &HostKey {
        &self.host_key
    }

    /// Send a disconnect notification and wait for the session to close.
    ///
    /// The notification is only queued by `Handle::disconnect`; awaiting the
    /// handle lets the session task write it before the runtime goes away.
    pub async fn disconnect(self) -> Result<()> {
        self.handle
            .disconnect(Disconnect::ByApplication, "shutdown", "en")
            .await
            .map_err(Error::Disconnect)?;

        let limit = self.timeout.unwrap_or(DISCONNECT_GRACE);
        tokio::time::timeout(limit, self.handle)
            .await
            .map_err(|_| Error::Timeout(limit))?
            .map_err(Error::Disconnect)
    }
}
