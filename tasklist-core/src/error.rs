//! Validation errors raised by a commit, and the policy that dismisses them.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons a commit can be rejected.
///
/// Both are recoverable: the store keeps its tasks untouched and shows the
/// message until the next successful commit or the auto-clear fires.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum CommitError {
    /// The input is empty or whitespace-only.
    #[error("Please enter a task.")]
    Empty,
    /// Another task already has exactly this text.
    #[error("This task already exists.")]
    Duplicate,
}

/// Decides which expiring timers may clear the current error message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorClearPolicy {
    /// Only the timer started by the most recent error clears it.
    #[default]
    Latest,
    /// Every timer clears whatever message is showing when it fires.
    Unconditional,
}

impl std::fmt::Display for ErrorClearPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Latest => write!(f, "latest"),
            Self::Unconditional => write!(f, "unconditional"),
        }
    }
}

impl std::str::FromStr for ErrorClearPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "latest" => Ok(Self::Latest),
            "unconditional" => Ok(Self::Unconditional),
            other => Err(format!(
                "unknown error clear policy '{other}' (expected 'latest' or 'unconditional')"
            )),
        }
    }
}
