// ABOUTME: Sequential TCP connection over resolved candidate addresses.
// ABOUTME: Records why each candidate failed and keeps the last reason.

use super::error::{Error, FailureReason, Result};
use std::io;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::{TcpSocket, TcpStream};

/// A live connection to one candidate address.
#[derive(Debug)]
pub struct Connection {
    pub stream: TcpStream,
    /// The candidate that accepted the connection.
    pub peer: SocketAddr,
    /// Port taken from the connected candidate, used for the known_hosts lookup.
    pub port: u16,
}

/// Try each candidate in order and return the first that connects.
///
/// A candidate whose socket cannot be created or whose connect fails is
/// abandoned and the next one is tried. Once every candidate has failed the
/// error carries the last failure reason and its OS error.
pub async fn connect(candidates: &[SocketAddr], timeout: Option<Duration>) -> Result<Connection> {
    let mut last_failure: Option<(FailureReason, io::Error)> = None;

    for &addr in candidates {
        let socket = match open_socket(&addr) {
            Ok(socket) => socket,
            Err(e) => {
                tracing::debug!(%addr, error = %e, "socket failed");
                last_failure = Some((FailureReason::Socket, e));
                continue;
            }
        };

        match attempt(socket, addr, timeout).await {
            Ok(stream) => {
                tracing::debug!(%addr, "connected");
                return Ok(Connection {
                    stream,
                    peer: addr,
                    port: port_of(&addr),
                });
            }
            Err(e) => {
                tracing::debug!(%addr, error = %e, "connect failed");
                last_failure = Some((FailureReason::Connect, e));
            }
        }
    }

    match last_failure {
        Some((reason, source)) => Err(Error::Unreachable { reason, source }),
        None => Err(Error::NoCandidates),
    }
}

/// Port number of a candidate address, read from its family's own record.
pub fn port_of(addr: &SocketAddr) -> u16 {
    match addr {
        SocketAddr::V4(v4) => v4.port(),
        SocketAddr::V6(v6) => v6.port(),
    }
}

fn open_socket(addr: &SocketAddr) -> io::Result<TcpSocket> {
    match addr {
        SocketAddr::V4(_) => TcpSocket::new_v4(),
        SocketAddr::V6(_) => TcpSocket::new_v6(),
    }
}

// The socket is consumed here, so a failed attempt closes it.
async fn attempt(
    socket: TcpSocket,
    addr: SocketAddr,
    timeout: Option<Duration>,
) -> io::Result<TcpStream> {
    let connecting = socket.connect(addr);
    match timeout {
        Some(limit) => match tokio::time::timeout(limit, connecting).await {
            Ok(result) => result,
            Err(_) => Err(io::Error::new(
                io::ErrorKind::TimedOut,
                format!("no answer within {limit:?}"),
            )),
        },
        None => connecting.await,
    }
}
