// ABOUTME: Turns a target host and port into an ordered list of candidate addresses.
// ABOUTME: Honors the address family constraint and the numeric-only flag.

use super::error::{Error, Result};
use crate::config::Target;
use std::net::{IpAddr, SocketAddr};
use tokio::net::lookup_host;

/// Resolve `target` to candidate socket addresses, in resolver order.
///
/// With `numeric_only` set the host must already be an IPv4 or IPv6
/// literal and no lookup is performed. The family constraint filters the
/// result; an empty list is an error rather than something to connect to.
pub async fn resolve(target: &Target) -> Result<Vec<SocketAddr>> {
    let port: u16 = target
        .port
        .parse()
        .map_err(|_| Error::InvalidPort(target.port.clone()))?;

    let resolved: Vec<SocketAddr> = if target.numeric_only {
        let ip: IpAddr = target
            .host
            .parse()
            .map_err(|_| Error::NotNumeric(target.host.clone()))?;
        vec![SocketAddr::new(ip, port)]
    } else {
        lookup_host((target.host.as_str(), port))
            .await
            .map_err(|source| Error::Lookup {
                host: target.host.clone(),
                source,
            })?
            .collect()
    };

    let candidates: Vec<SocketAddr> = resolved
        .into_iter()
        .filter(|addr| target.family.allows(addr))
        .collect();

    if candidates.is_empty() {
        return Err(Error::NoAddress {
            host: target.host.clone(),
            family: target.family,
        });
    }

    tracing::debug!(
        host = %target.host,
        count = candidates.len(),
        "resolved candidate addresses"
    );
    Ok(candidates)
}
