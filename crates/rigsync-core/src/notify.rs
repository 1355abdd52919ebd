// ── Notification reporting ──
//
// Reconcilers signal user-facing outcomes through an injected reporter.
// Reporting is fire-and-forget: nothing flows back to the reconciler.

use serde::Serialize;
use strum::Display;
use tokio::sync::mpsc;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
}

/// Where the console shows the toast.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    #[default]
    Top,
    Bottom,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub severity: Severity,
    pub title: String,
    pub detail: String,
    pub placement: Placement,
}

impl Notification {
    pub fn success(title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            severity: Severity::Success,
            title: title.into(),
            detail: detail.into(),
            placement: Placement::Top,
        }
    }

    pub fn error(title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            title: title.into(),
            detail: detail.into(),
            placement: Placement::Top,
        }
    }

    #[must_use]
    pub fn at(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// Sink for success/error events raised by reconcilers.
pub trait NotificationReporter: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Writes notifications to the `tracing` log.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl NotificationReporter for TracingReporter {
    fn notify(&self, n: Notification) {
        match n.severity {
            Severity::Success => info!(title = %n.title, detail = %n.detail, "notification"),
            Severity::Error => warn!(title = %n.title, detail = %n.detail, "notification"),
        }
    }
}

/// Forwards notifications to an unbounded channel.
///
/// Sends after the receiver is dropped are discarded.
#[derive(Debug, Clone)]
pub struct ChannelReporter {
    tx: mpsc::UnboundedSender<Notification>,
}

impl ChannelReporter {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Notification>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl NotificationReporter for ChannelReporter {
    fn notify(&self, notification: Notification) {
        let _ = self.tx.send(notification);
    }
}
