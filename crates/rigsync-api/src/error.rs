use thiserror::Error;

use crate::gateway::Method;

/// Top-level error type for the `rigsync-api` crate.
///
/// Covers every way a single remote call can fail. `rigsync-core` maps
/// these into the reconciler-facing taxonomy.
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// The call did not complete within its timeout class.
    #[error("{method} timed out after {timeout_ms}ms")]
    Timeout { method: Method, timeout_ms: u64 },

    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The gateway could not reach the device at all.
    #[error("Gateway unavailable: {0}")]
    Unavailable(String),

    /// The transport settings cannot be turned into a client.
    #[error("Invalid transport configuration: {0}")]
    InvalidConfig(String),

    // ── Device responses ────────────────────────────────────────────
    /// The device refused the arguments (validation failure).
    #[error("{method} rejected by device: {message}")]
    Rejected { method: Method, message: String },

    /// The device answered with a non-validation failure.
    #[error("{method} failed on device (status {status}): {message}")]
    Remote {
        method: Method,
        status: u16,
        message: String,
    },

    // ── Data ────────────────────────────────────────────────────────
    /// Argument or result (de)serialization failed.
    #[error("Deserialization error in {method}: {message}")]
    Deserialization {
        method: Method,
        message: String,
        body: String,
    },
}

impl Error {
    /// Returns `true` if the call ran out of time, whichever layer noticed.
    pub fn is_timeout(&self) -> bool {
        match self {
            Self::Timeout { .. } => true,
            Self::Transport(e) => e.is_timeout(),
            _ => false,
        }
    }

    /// Returns `true` if the device validated and refused the request.
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }

    /// The remote method this error is attributed to, when known.
    pub fn method(&self) -> Option<Method> {
        match self {
            Self::Timeout { method, .. }
            | Self::Rejected { method, .. }
            | Self::Remote { method, .. }
            | Self::Deserialization { method, .. } => Some(*method),
            _ => None,
        }
    }
}

impl Error {
    pub(crate) fn timeout(method: Method, timeout: std::time::Duration) -> Self {
        Self::Timeout {
            method,
            timeout_ms: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
        }
    }
}
