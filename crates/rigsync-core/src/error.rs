// ── Core error types ──
//
// Reconciler-facing errors. Consumers never see HTTP status codes or
// JSON parse failures directly; the `From<rigsync_api::Error>` impl
// folds transport-layer errors into the three classes the engine cares
// about: transport/timeout, remote validation, and everything else.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Lifecycle errors ─────────────────────────────────────────────
    #[error("Engine initialization failed: {message}")]
    Initialization { message: String },

    // ── Transport errors ─────────────────────────────────────────────
    #[error("{operation} timed out after {timeout_ms}ms")]
    Timeout { operation: String, timeout_ms: u64 },

    #[error("Cannot reach device: {reason}")]
    ConnectionFailed { reason: String },

    #[error("Invalid device configuration: {message}")]
    InvalidConfig { message: String },

    // ── Device errors ────────────────────────────────────────────────
    #[error("Validation failed: {message}")]
    ValidationFailed { message: String },

    #[error("Operation failed on device: {message}")]
    Remote {
        message: String,
        /// Status reported by the device, if any.
        status: Option<u16>,
    },

    #[error("Unexpected response from device: {message}")]
    Decode { message: String },

    // ── Dispatch errors ──────────────────────────────────────────────
    #[error("Unknown action: {name}")]
    UnknownAction { name: String },

    #[error("Invalid payload for {action}: {message}")]
    InvalidPayload { action: String, message: String },
}

impl CoreError {
    /// The device validated the request and refused it.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationFailed { .. })
    }

    /// The call ran out of time.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<rigsync_api::Error> for CoreError {
    fn from(err: rigsync_api::Error) -> Self {
        use rigsync_api::Error as Api;

        match err {
            Api::Timeout { method, timeout_ms } => Self::Timeout {
                operation: method.to_string(),
                timeout_ms,
            },
            Api::Transport(e) if e.is_timeout() => Self::Timeout {
                operation: e
                    .url()
                    .map_or_else(|| "request".into(), |u| u.path().to_string()),
                timeout_ms: 0,
            },
            Api::Transport(e) => Self::ConnectionFailed {
                reason: e.to_string(),
            },
            Api::InvalidUrl(e) => Self::ConnectionFailed {
                reason: format!("invalid URL: {e}"),
            },
            Api::Unavailable(reason) => Self::ConnectionFailed { reason },
            Api::InvalidConfig(message) => Self::InvalidConfig { message },
            Api::Rejected { message, .. } => Self::ValidationFailed { message },
            Api::Remote {
                method,
                status,
                message,
            } => Self::Remote {
                message: format!("{method}: {message}"),
                status: Some(status),
            },
            Api::Deserialization {
                method, message, ..
            } => Self::Decode {
                message: format!("{method}: {message}"),
            },
        }
    }
}
