// Shared fixtures for engine integration tests: a scripted in-memory
// gateway and a reporter that records what it was told.
#![allow(dead_code, clippy::unwrap_used)]

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, OnceLock};
use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use rigsync_api::types::{EthernetInterfaceSettings, GadgetSettings, WifiState};
use rigsync_api::{Error, Method, RemoteGateway};
use rigsync_core::{Engine, EngineConfig, Flags, Notification, NotificationReporter, StateTree};

// ── Scripted gateway ────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub enum Reply {
    Ok(Value),
    /// Device-side validation failure.
    Reject(String),
    /// Device-side server error.
    Fail(String),
    /// Never answers.
    Stall,
    Delayed(Duration, Value),
}

pub fn ok(value: impl Serialize) -> Reply {
    Reply::Ok(serde_json::to_value(value).unwrap())
}

/// Answers each method from its own queue. The last queued reply for a
/// method repeats; unscripted methods fail.
#[derive(Default)]
pub struct ScriptedGateway {
    replies: Mutex<HashMap<Method, VecDeque<Reply>>>,
    calls: Mutex<Vec<(Method, Value)>>,
}

impl ScriptedGateway {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// A device that starts cleanly: one interface, default gadget and
    /// WiFi state, no running jobs.
    pub fn healthy() -> Arc<Self> {
        let gw = Self::new();
        gw.script(
            Method::GetAllDeployedEthernetInterfaceSettings,
            ok(vec![EthernetInterfaceSettings {
                name: "usb0".into(),
                enabled: true,
                ..EthernetInterfaceSettings::default()
            }]),
        );
        gw.script(Method::GetDeployedGadgetSettings, ok(GadgetSettings::default()));
        gw.script(Method::GetWifiState, ok(WifiState::default()));
        gw.script(Method::GetRunningHidJobStates, ok(Vec::<Value>::new()));
        gw
    }

    /// Queue `reply` for `method`.
    pub fn script(&self, method: Method, reply: Reply) -> &Self {
        self.replies
            .lock()
            .unwrap()
            .entry(method)
            .or_default()
            .push_back(reply);
        self
    }

    /// Drop anything queued for `method`, then queue `reply`.
    pub fn rescript(&self, method: Method, reply: Reply) -> &Self {
        self.replies.lock().unwrap().remove(&method);
        self.script(method, reply)
    }

    pub fn calls(&self) -> Vec<(Method, Value)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn methods(&self) -> Vec<Method> {
        self.calls().into_iter().map(|(m, _)| m).collect()
    }

    pub fn calls_to(&self, method: Method) -> Vec<Value> {
        self.calls()
            .into_iter()
            .filter(|(m, _)| *m == method)
            .map(|(_, args)| args)
            .collect()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    fn next_reply(&self, method: Method) -> Option<Reply> {
        let mut replies = self.replies.lock().unwrap();
        let queue = replies.get_mut(&method)?;
        if queue.len() > 1 {
            queue.pop_front()
        } else {
            queue.front().cloned()
        }
    }
}

#[async_trait]
impl RemoteGateway for ScriptedGateway {
    async fn call(&self, method: Method, args: Value, _timeout: Duration) -> Result<Value, Error> {
        self.calls.lock().unwrap().push((method, args));

        match self.next_reply(method) {
            None => Err(Error::Unavailable(format!("no reply scripted for {method}"))),
            Some(Reply::Ok(value)) => Ok(value),
            Some(Reply::Reject(message)) => Err(Error::Rejected { method, message }),
            Some(Reply::Fail(message)) => Err(Error::Remote {
                method,
                status: 500,
                message,
            }),
            Some(Reply::Stall) => std::future::pending().await,
            Some(Reply::Delayed(delay, value)) => {
                tokio::time::sleep(delay).await;
                Ok(value)
            }
        }
    }
}

// ── Recording reporter ──────────────────────────────────────────────

/// A notification together with the flags in force when it was raised.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub notification: Notification,
    pub flags: Option<Flags>,
}

#[derive(Default)]
pub struct RecordingReporter {
    seen: Mutex<Vec<Recorded>>,
    attached_state: OnceLock<Arc<StateTree>>,
}

impl RecordingReporter {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Sample `state`'s flags on every notification from now on.
    pub fn attach(&self, state: &Arc<StateTree>) {
        let _ = self.attached_state.set(Arc::clone(state));
    }

    pub fn recorded(&self) -> Vec<Recorded> {
        self.seen.lock().unwrap().clone()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.recorded().into_iter().map(|r| r.notification).collect()
    }

    pub fn titles(&self) -> Vec<String> {
        self.notifications().into_iter().map(|n| n.title).collect()
    }

    pub fn clear(&self) {
        self.seen.lock().unwrap().clear();
    }
}

impl NotificationReporter for RecordingReporter {
    fn notify(&self, notification: Notification) {
        let flags = self.attached_state.get().map(|state| state.flags());
        self.seen
            .lock()
            .unwrap()
            .push(Recorded { notification, flags });
    }
}

// ── Engine bring-up ─────────────────────────────────────────────────

/// Start an engine, let the initial refreshes finish, and reset the
/// call log and notifications so tests see only their own traffic.
pub async fn started(
    gateway: &Arc<ScriptedGateway>,
    reporter: &Arc<RecordingReporter>,
    config: EngineConfig,
) -> Engine {
    let engine = Engine::start(config, gateway.clone(), reporter.clone())
        .await
        .unwrap();
    reporter.attach(engine.state());
    engine.settle().await;
    gateway.clear_calls();
    reporter.clear();
    engine
}
