// ABOUTME: Address resolution and TCP connection to the audited host.
// ABOUTME: Candidates are tried in resolver order; the first live connection wins.

mod connect;
mod error;
mod resolve;

pub use connect::{Connection, connect, port_of};
pub use error::{Error, FailureReason, Result};
pub use resolve::resolve;
