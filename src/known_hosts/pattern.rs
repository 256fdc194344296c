// ABOUTME: Host matching over the host pattern field of a known_hosts line.
// ABOUTME: Plain comma-separated globs with negation, or a salted HMAC-SHA1 hash.

use hmac::{Hmac, Mac};
use russh::keys::ssh_key::known_hosts::HostPatterns;
use sha1::Sha1;

type HmacSha1 = Hmac<Sha1>;

/// Whether `name` (a host, or `[host]:port`) is covered by `hosts`.
///
/// A matching negated pattern rejects the name even if another pattern
/// accepts it.
pub fn host_matches(hosts: &HostPatterns, name: &str) -> bool {
    let name = name.to_ascii_lowercase();
    match hosts {
        HostPatterns::Patterns(patterns) => {
            let mut matched = false;
            for pattern in patterns {
                let (negated, glob) = match pattern.strip_prefix('!') {
                    Some(rest) => (true, rest),
                    None => (false, pattern.as_str()),
                };
                if wildcard_match(glob.to_ascii_lowercase().as_bytes(), name.as_bytes()) {
                    if negated {
                        return false;
                    }
                    matched = true;
                }
            }
            matched
        }
        HostPatterns::HashedName { salt, hash } => {
            let Ok(mut mac) = HmacSha1::new_from_slice(salt) else {
                return false;
            };
            mac.update(name.as_bytes());
            mac.verify_slice(&hash[..]).is_ok()
        }
    }
}

/// Name under which a host is recorded: bare for port 22, `[host]:port` otherwise.
pub fn lookup_name(host: &str, port: u16) -> String {
    if port == 22 {
        host.to_string()
    } else {
        format!("[{host}]:{port}")
    }
}

/// `*` matches any run of bytes, `?` exactly one.
fn wildcard_match(pattern: &[u8], text: &[u8]) -> bool {
    let (mut p, mut t) = (0, 0);
    let mut backtrack: Option<(usize, usize)> = None;

    while t < text.len() {
        if p < pattern.len() && (pattern[p] == b'?' || pattern[p] == text[t]) {
            p += 1;
            t += 1;
        } else if p < pattern.len() && pattern[p] == b'*' {
            backtrack = Some((p, t));
            p += 1;
        } else if let Some((star, resume)) = backtrack {
            p = star + 1;
            t = resume + 1;
            backtrack = Some((star, resume + 1));
        } else {
            return false;
        }
    }

    pattern[p..].iter().all(|&c| c == b'*')
}
