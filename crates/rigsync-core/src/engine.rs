// ── Engine ──
//
// Explicitly constructed facade over one device session. Owns the
// state tree, the device client and the notification reporter, and
// runs every dispatched action as a tracked background task.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;
use tracing::{debug, info, warn};

use rigsync_api::{DeviceClient, RemoteGateway};

use crate::action::Action;
use crate::config::{EngineConfig, TimeoutClass};
use crate::error::CoreError;
use crate::notify::{Notification, NotificationReporter};
use crate::reconcile;
use crate::store::{Mutation, StateTree};

/// The main entry point for consumers.
///
/// Cheaply cloneable via `Arc<EngineInner>`. Dispatch is fire-and-forget:
/// outcomes surface only through the state tree and the reporter.
#[derive(Clone)]
pub struct Engine {
    inner: Arc<EngineInner>,
}

struct EngineInner {
    config: EngineConfig,
    state: Arc<StateTree>,
    client: DeviceClient,
    reporter: Arc<dyn NotificationReporter>,
    tasks: TaskTracker,
    cancel: CancellationToken,
}

impl Engine {
    fn new(
        config: EngineConfig,
        gateway: Arc<dyn RemoteGateway>,
        reporter: Arc<dyn NotificationReporter>,
    ) -> Self {
        Self {
            inner: Arc::new(EngineInner {
                config,
                state: Arc::new(StateTree::new()),
                client: DeviceClient::new(gateway),
                reporter,
                tasks: TaskTracker::new(),
                cancel: CancellationToken::new(),
            }),
        }
    }

    // ── Lifecycle ────────────────────────────────────────────────────

    /// Build an engine and bring it up against the device.
    ///
    /// Fetches the Ethernet interface settings first; if that fails no
    /// engine is returned. Then kicks off the gadget settings, running
    /// jobs and WiFi state refreshes without waiting for them.
    pub async fn start(
        config: EngineConfig,
        gateway: Arc<dyn RemoteGateway>,
        reporter: Arc<dyn NotificationReporter>,
    ) -> Result<Self, CoreError> {
        let engine = Self::new(config, gateway, reporter);

        let interfaces = engine
            .client()
            .get_all_deployed_ethernet_interface_settings(engine.timeout(TimeoutClass::Short))
            .await
            .map_err(|e| CoreError::Initialization {
                message: format!(
                    "fetching ethernet interface settings: {}",
                    CoreError::from(e)
                ),
            })?;

        info!(interfaces = interfaces.len(), "engine started");
        engine.commit(Mutation::SetInterfaceSettings(interfaces));

        engine.dispatch(Action::UpdateCurrentGadgetSettingsFromDeployed);
        engine.dispatch(Action::UpdateRunningHidJobs);
        engine.dispatch(Action::UpdateCurrentWifiSettingsFromDeployed);

        Ok(engine)
    }

    /// Start, wait for the initial refreshes, run `f`, shut down.
    pub async fn oneshot<F, Fut, T>(
        config: EngineConfig,
        gateway: Arc<dyn RemoteGateway>,
        reporter: Arc<dyn NotificationReporter>,
        f: F,
    ) -> Result<T, CoreError>
    where
        F: FnOnce(Engine) -> Fut,
        Fut: Future<Output = Result<T, CoreError>>,
    {
        let engine = Self::start(config, gateway, reporter).await?;
        engine.settle().await;
        let result = f(engine.clone()).await;
        engine.shutdown().await;
        result
    }

    /// Wait until every in-flight action has finished, including
    /// refreshes that finished actions dispatched on their way out.
    ///
    /// Meant for tests and one-shot callers; concurrent `settle` calls
    /// from different tasks may return early.
    pub async fn settle(&self) {
        self.inner.tasks.close();
        self.inner.tasks.wait().await;
        self.inner.tasks.reopen();
    }

    /// Cancel outstanding actions and wait for them to unwind.
    ///
    /// Deploy guards still clear their flags. Later dispatches are
    /// ignored.
    pub async fn shutdown(&self) {
        self.inner.cancel.cancel();
        self.inner.tasks.close();
        self.inner.tasks.wait().await;
        info!("engine stopped");
    }

    pub fn is_stopped(&self) -> bool {
        self.inner.cancel.is_cancelled()
    }

    // ── Dispatch ─────────────────────────────────────────────────────

    /// Launch `action` as a background task and return immediately.
    pub fn dispatch(&self, action: Action) {
        let name = action.name();
        if self.is_stopped() {
            warn!(action = %name, "dispatch after shutdown ignored");
            return;
        }

        debug!(action = %name, "dispatch");
        let engine = self.clone();
        let cancel = self.inner.cancel.clone();
        self.inner.tasks.spawn(async move {
            tokio::select! {
                biased;
                () = cancel.cancelled() => debug!(action = %name, "action cancelled"),
                () = reconcile::run(&engine, action) => {}
            }
        });
    }

    /// Dispatch by wire name with an optional JSON payload.
    ///
    /// Unknown names and undecodable payloads are logged and dropped.
    pub fn dispatch_named(&self, name: &str, payload: Option<Value>) {
        match Action::from_named(name, payload) {
            Ok(action) => self.dispatch(action),
            Err(e) => warn!(action = name, error = %e, "dispatch ignored"),
        }
    }

    /// Apply a mutation through the committer.
    ///
    /// For collaborators outside the engine (live job events, the
    /// connection watchdog); reconcilers commit through the same path.
    pub fn commit(&self, mutation: Mutation) {
        self.inner.state.commit(mutation);
    }

    // ── Accessors ────────────────────────────────────────────────────

    pub fn state(&self) -> &Arc<StateTree> {
        &self.inner.state
    }

    pub fn config(&self) -> &EngineConfig {
        &self.inner.config
    }

    // ── Reconciler helpers ───────────────────────────────────────────

    pub(crate) fn client(&self) -> &DeviceClient {
        &self.inner.client
    }

    pub(crate) fn timeout(&self, class: TimeoutClass) -> Duration {
        self.inner.config.timeouts.get(class)
    }

    pub(crate) fn notify(&self, notification: Notification) {
        self.inner.reporter.notify(notification);
    }
}
