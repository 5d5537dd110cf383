//! Error types for the scanner

use crate::core::types::{CheckKind, RunState};
use thiserror::Error;

/// Result type alias for the scanner
pub type Result<T> = std::result::Result<T, SentinelError>;

/// Main error type for the scanner
#[derive(Error, Debug)]
pub enum SentinelError {
    /// Configuration errors, rejected synchronously before any run starts
    #[error("Configuration error: {0}")]
    Config(String),

    /// Illegal lifecycle call, e.g. `start` while already running
    #[error("Invalid state transition: cannot {action} while {state}")]
    InvalidState {
        /// The operation that was attempted
        action: &'static str,
        /// The state the scanner was in
        state: RunState,
    },

    /// A probe attempt exceeded its per-attempt budget
    #[error("Check timed out: {kind}")]
    CheckTimeout {
        /// The probe that timed out
        kind: CheckKind,
    },

    /// A probe raised an error it was not supposed to
    #[error("Probe failure in {kind}: {message}")]
    Probe {
        /// The probe that failed
        kind: CheckKind,
        /// What the probe reported
        message: String,
    },

    /// A capability provider failed mid-call
    #[error("Capability error: {0}")]
    Capability(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl SentinelError {
    /// Whether the retry policy may recover from this error.
    ///
    /// Only transient infrastructure failures qualify; lifecycle and
    /// configuration errors never do.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            SentinelError::CheckTimeout { .. }
                | SentinelError::Probe { .. }
                | SentinelError::Capability(_)
        )
    }
}
