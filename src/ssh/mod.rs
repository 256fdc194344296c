// ABOUTME: SSH transport handshake used to read a server's host key.
// ABOUTME: Runs key exchange only; never authenticates or opens channels.

mod client;
mod error;
mod host_key;

pub use client::{Handshake, handshake};
pub use error::{Error, Result};
pub use host_key::HostKey;
