// ABOUTME: Process exit codes reported by ssh-hkaudit.
// ABOUTME: Scripts branch on these values, so they never change.

/// Host key matched a known_hosts entry.
pub const OKAY: u8 = 0;
/// Resolution, handshake, known_hosts loading or other internal failure.
pub const ERROR: u8 = 1;
/// No candidate address accepted a connection.
pub const NETFAIL: u8 = 7;
pub const MISMATCH: u8 = 10;
pub const NOT_FOUND: u8 = 11;
pub const CHECK_FAILURE: u8 = 12;
pub const UNKNOWN: u8 = 13;
/// Bad invocation (sysexits `EX_USAGE`).
pub const USAGE: u8 = 64;
