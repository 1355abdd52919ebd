//! Shared session setup for commands that talk to a device.

use std::sync::Arc;

use tokio::sync::mpsc::UnboundedReceiver;

use rigsync_api::HttpGateway;
use rigsync_config::Config;
use rigsync_core::{ChannelReporter, CoreError, Engine, Notification};

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

/// Load the config file named by `--config` (or the default location),
/// then apply `--device`.
pub fn resolve_config(global: &GlobalOpts) -> Result<Config, CliError> {
    let path = global
        .config
        .clone()
        .unwrap_or_else(rigsync_config::config_path);
    let mut cfg = rigsync_config::load_config_from(&path)?;

    if let Some(ref device) = global.device {
        cfg.device.url.clone_from(device);
        cfg.validate()?;
    }
    Ok(cfg)
}

/// A started engine plus the notifications it reports.
pub struct Session {
    pub engine: Engine,
    notifications: UnboundedReceiver<Notification>,
    color: bool,
    quiet: bool,
}

impl Session {
    /// Start an engine against the configured device.
    ///
    /// Initialization failures become connection errors carrying the URL.
    pub async fn connect(global: &GlobalOpts) -> Result<Self, CliError> {
        let cfg = resolve_config(global)?;
        let transport = cfg.transport_config()?;
        let url = transport.base_url.to_string();
        let gateway = HttpGateway::new(&transport)?;
        let (reporter, notifications) = ChannelReporter::new();

        tracing::debug!(%url, "starting engine");
        let engine = Engine::start(cfg.engine_config(), Arc::new(gateway), Arc::new(reporter))
            .await
            .map_err(|e| match e {
                CoreError::Initialization { message } => CliError::ConnectionFailed {
                    url: url.clone(),
                    reason: message,
                },
                other => other.into(),
            })?;

        Ok(Self {
            engine,
            notifications,
            color: output::should_color(global.color),
            quiet: global.quiet,
        })
    }

    /// Wait for in-flight actions, print what they reported, and return
    /// how many errors were among it.
    pub async fn settle(&mut self) -> usize {
        self.engine.settle().await;
        let mut errors = 0;
        while let Ok(n) = self.notifications.try_recv() {
            if n.is_error() {
                errors += 1;
            }
            self.print(&n);
        }
        errors
    }

    /// Next notification, or `None` once the engine is gone.
    pub async fn next_notification(&mut self) -> Option<Notification> {
        self.notifications.recv().await
    }

    pub fn print(&self, n: &Notification) {
        output::print_notification(n, self.color, self.quiet);
    }

    pub async fn close(self) {
        self.engine.shutdown().await;
    }
}
