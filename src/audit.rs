// ABOUTME: The audit pipeline: resolve, connect, handshake, check known_hosts.
// ABOUTME: Stops at the first failing stage; nothing is retried.

use crate::config::AuditConfig;
use crate::error::Result;
use crate::known_hosts::KnownHosts;
use crate::net;
use crate::ssh::{self, HostKey};
use crate::verdict::Verdict;

/// Audit one host and return its verdict.
///
/// Resolution, connection, handshake and known_hosts loading failures are
/// returned as errors. The SSH session is disconnected before returning
/// once the handshake has succeeded, whatever happens afterwards.
pub async fn audit(config: &AuditConfig) -> Result<Verdict> {
    let candidates = net::resolve(&config.target).await?;
    let connection = net::connect(&candidates, config.timeout).await?;
    tracing::debug!(peer = %connection.peer, "starting SSH handshake");

    let port = connection.port;
    let session = ssh::handshake(connection.stream, config.timeout).await?;

    let verdict = verify(config, port, session.host_key()).await;

    if let Err(e) = session.disconnect().await {
        tracing::warn!("failed to disconnect cleanly: {e}");
    }

    verdict
}

async fn verify(config: &AuditConfig, port: u16, host_key: &HostKey) -> Result<Verdict> {
    let known_hosts = KnownHosts::load(&config.known_hosts).await?;

    tracing::debug!(
        algorithm = %host_key.algorithm(),
        fingerprint = %host_key.fingerprint(),
        len = host_key.len(),
        "checking host key"
    );

    let check = known_hosts.check(&config.target.host, port, host_key.as_bytes());
    let verdict = Verdict::from(check);
    tracing::debug!(?verdict, host = %config.target.host, port, "verdict");
    Ok(verdict)
}
