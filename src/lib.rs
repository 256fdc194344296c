// ABOUTME: Library root for ssh-hkaudit - exposes the audit pipeline for testing.
// ABOUTME: The main binary is in main.rs.

pub mod audit;
pub mod config;
pub mod error;
pub mod exit;
pub mod known_hosts;
pub mod net;
pub mod sandbox;
pub mod ssh;
pub mod verdict;

pub use audit::audit;
pub use config::{AddressFamily, AuditConfig, Target};
pub use verdict::Verdict;
