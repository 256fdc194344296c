// ABOUTME: Command-line interface definition using clap derive macros.
// ABOUTME: Flags mirror the classic getopt interface: -4, -6, -n, -h, -?.

use clap::builder::NonEmptyStringValueParser;
use clap::{ArgAction, Parser};
use ssh_hkaudit::{AddressFamily, AuditConfig, Target};
use std::time::Duration;

#[derive(Debug, Parser)]
#[command(name = "ssh-hkaudit")]
#[command(about = "Check that a host's live SSH host key is listed in a known_hosts file")]
#[command(version, disable_help_flag = true)]
#[command(override_usage = "ssh-hkaudit [-4|-6] [-n] [-v] [-t SECONDS] known-hosts-file host [port]")]
pub struct Cli {
    /// Connect over IPv4 only
    #[arg(short = '4', conflicts_with = "ipv6")]
    pub ipv4: bool,

    /// Connect over IPv6 only
    #[arg(short = '6')]
    pub ipv6: bool,

    /// Host is a numeric address; do not look it up
    #[arg(short = 'n')]
    pub numeric: bool,

    /// Give up on each connect attempt and on the handshake after SECONDS
    #[arg(short = 't', long, value_name = "SECONDS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Log progress to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Print help
    #[arg(short = 'h', long = "help", short_alias = '?', action = ArgAction::Help)]
    _help: Option<bool>,

    /// known_hosts file in OpenSSH format
    #[arg(value_name = "KNOWN_HOSTS", value_parser = NonEmptyStringValueParser::new())]
    pub known_hosts: String,

    /// Host to audit, also the name looked up in known_hosts
    #[arg(value_parser = NonEmptyStringValueParser::new())]
    pub host: String,

    /// Port to connect to [default: 22]
    pub port: Option<String>,
}

impl Cli {
    pub fn family(&self) -> AddressFamily {
        if self.ipv4 {
            AddressFamily::Ipv4
        } else if self.ipv6 {
            AddressFamily::Ipv6
        } else {
            AddressFamily::Any
        }
    }

    pub fn audit_config(&self) -> AuditConfig {
        let mut target = Target::new(&self.host)
            .family(self.family())
            .numeric_only(self.numeric);
        if let Some(port) = &self.port {
            target = target.port(port);
        }

        let config = AuditConfig::new(&self.known_hosts, target);
        match self.timeout {
            Some(secs) => config.timeout(Duration::from_secs(secs)),
            None => config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("ssh-hkaudit").chain(args.iter().copied()))
    }

    #[test]
    fn defaults() {
        let cli = parse(&["kh", "example.com"]).unwrap();
        let config = cli.audit_config();
        assert_eq!(config.target.host, "example.com");
        assert_eq!(config.target.port, "22");
        assert_eq!(config.target.family, AddressFamily::Any);
        assert!(!config.target.numeric_only);
        assert_eq!(config.known_hosts.to_str(), Some("kh"));
        assert_eq!(config.timeout, None);
    }

    #[test]
    fn family_flags_select_distinct_families() {
        assert_eq!(parse(&["-4", "kh", "h"]).unwrap().family(), AddressFamily::Ipv4);
        assert_eq!(parse(&["-6", "kh", "h"]).unwrap().family(), AddressFamily::Ipv6);
    }

    #[test]
    fn family_flags_conflict() {
        let err = parse(&["-4", "-6", "kh", "h"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn numeric_port_and_timeout() {
        let cli = parse(&["-n", "-t", "5", "kh", "192.0.2.1", "2222"]).unwrap();
        let config = cli.audit_config();
        assert!(config.target.numeric_only);
        assert_eq!(config.target.port, "2222");
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn empty_port_means_default() {
        let cli = parse(&["kh", "h", ""]).unwrap();
        assert_eq!(cli.audit_config().target.port, "22");
    }

    #[test]
    fn help_flags_request_help() {
        for flag in ["-h", "-?", "--help"] {
            let err = parse(&[flag]).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::DisplayHelp, "{flag}");
        }
    }

    #[test]
    fn missing_or_empty_positionals_are_rejected() {
        assert!(parse(&[]).is_err());
        assert!(parse(&["kh"]).is_err());
        assert!(parse(&["", "h"]).is_err());
        assert!(parse(&["kh", ""]).is_err());
    }
}
