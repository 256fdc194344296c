// ABOUTME: Shared helpers for integration tests.
// ABOUTME: Loopback SSH server and known_hosts fixtures.

#![allow(dead_code)]

pub mod ssh_server;

use std::io::Write;
use std::net::SocketAddr;
use tempfile::NamedTempFile;

/// Write `contents` to a fresh known_hosts file.
pub fn known_hosts_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file should be created");
    file.write_all(contents.as_bytes())
        .expect("known_hosts fixture should be written");
    file
}

/// A loopback address nothing is listening on.
pub fn refused_addr() -> SocketAddr {
    let listener =
        std::net::TcpListener::bind("127.0.0.1:0").expect("ephemeral port should bind");
    listener.local_addr().expect("listener should have an address")
}
