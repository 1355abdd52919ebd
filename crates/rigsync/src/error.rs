//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` into user-facing errors with
//! actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use rigsync_config::ConfigError;
use rigsync_core::CoreError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not bring up a session with the device at {url}: {reason}")]
    #[diagnostic(
        code(rigsync::connection_failed),
        help(
            "Check that the rig is powered and reachable.\n\
             URL: {url}\n\
             Override with --device or RIGSYNC_DEVICE."
        )
    )]
    ConnectionFailed { url: String, reason: String },

    #[error("{operation} timed out after {timeout_ms}ms")]
    #[diagnostic(
        code(rigsync::timeout),
        help("Raise the timeouts in your config file, e.g. [timeouts] mid_secs = 60")
    )]
    Timeout { operation: String, timeout_ms: u64 },

    // ── Dispatch ─────────────────────────────────────────────────────
    #[error("Unknown action: {name}")]
    #[diagnostic(code(rigsync::unknown_action), help("Run: rigsync actions"))]
    UnknownAction { name: String },

    #[error("Invalid payload for {action}")]
    #[diagnostic(
        code(rigsync::invalid_payload),
        help("{reason}\nPass the payload as JSON with --payload '<json>'.")
    )]
    InvalidPayload { action: String, reason: String },

    #[error("{action} reported {failures} error(s)")]
    #[diagnostic(code(rigsync::action_failed))]
    ActionFailed { action: String, failures: usize },

    // ── Config ───────────────────────────────────────────────────────
    #[error("Configuration error: {0}")]
    #[diagnostic(
        code(rigsync::config),
        help("Run: rigsync config path  to locate the file being loaded")
    )]
    Config(#[from] ConfigError),

    // ── Pass-through ─────────────────────────────────────────────────
    #[error(transparent)]
    #[diagnostic(code(rigsync::core))]
    Core(CoreError),

    #[error(transparent)]
    #[diagnostic(code(rigsync::io))]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    #[diagnostic(code(rigsync::json))]
    Json(#[from] serde_json::Error),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::Timeout { .. } => exit_code::TIMEOUT,
            Self::UnknownAction { .. } | Self::InvalidPayload { .. } => exit_code::USAGE,
            Self::ActionFailed { .. }
            | Self::Config(_)
            | Self::Core(_)
            | Self::Io(_)
            | Self::Json(_) => exit_code::GENERAL,
        }
    }
}

// ── CoreError -> CliError mapping ────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Timeout {
                operation,
                timeout_ms,
            } => Self::Timeout {
                operation,
                timeout_ms,
            },
            CoreError::UnknownAction { name } => Self::UnknownAction { name },
            CoreError::InvalidPayload { action, message } => Self::InvalidPayload {
                action,
                reason: message,
            },
            other => Self::Core(other),
        }
    }
}

impl From<rigsync_api::Error> for CliError {
    fn from(err: rigsync_api::Error) -> Self {
        CoreError::from(err).into()
    }
}
