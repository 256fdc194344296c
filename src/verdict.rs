// ABOUTME: Verification verdict derived from a known_hosts check.
// ABOUTME: Each verdict has one exit code and at most one line of output.

use crate::exit;
use crate::known_hosts::{self, Check};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Match,
    Mismatch,
    NotFound,
    /// The check itself could not be carried out.
    CheckFailure,
    /// The check reported an outcome this tool has no verdict for.
    Unknown,
}

impl Verdict {
    pub const ALL: [Verdict; 5] = [
        Verdict::Match,
        Verdict::Mismatch,
        Verdict::NotFound,
        Verdict::CheckFailure,
        Verdict::Unknown,
    ];

    pub fn exit_code(self) -> u8 {
        match self {
            Verdict::Match => exit::OKAY,
            Verdict::Mismatch => exit::MISMATCH,
            Verdict::NotFound => exit::NOT_FOUND,
            Verdict::CheckFailure => exit::CHECK_FAILURE,
            Verdict::Unknown => exit::UNKNOWN,
        }
    }

    /// Line printed to stdout; a match prints nothing.
    pub fn message(self) -> Option<&'static str> {
        match self {
            Verdict::Match => None,
            Verdict::Mismatch => Some("mismatch"),
            Verdict::NotFound => Some("not found"),
            Verdict::CheckFailure => Some("check failure"),
            Verdict::Unknown => Some("unknown??"),
        }
    }
}

impl From<known_hosts::Result<Check>> for Verdict {
    fn from(result: known_hosts::Result<Check>) -> Self {
        match result {
            Ok(Check::Match { .. }) => Verdict::Match,
            Ok(Check::Mismatch { .. }) => Verdict::Mismatch,
            Ok(Check::NotFound) => Verdict::NotFound,
            Err(e) => {
                tracing::debug!(error = %e, "known hosts check failed");
                Verdict::CheckFailure
            }
            Ok(other) => {
                tracing::debug!(?other, "known hosts check outside the verdict set");
                Verdict::Unknown
            }
        }
    }
}
