//! Client-side state reconciliation for rigsync device consoles.
//!
//! This crate mirrors the device's authoritative configuration into a
//! single observable state tree and keeps it in sync over `rigsync-api`:
//!
//! - **[`Engine`]** — Explicitly constructed facade holding the state tree,
//!   the gateway and the notification reporter.
//!   [`start()`](Engine::start) fetches interface settings (fatal on
//!   failure), then kicks off the initial refreshes.
//!   [`dispatch()`](Engine::dispatch) launches an [`Action`] as a tracked
//!   background task and returns immediately.
//!
//! - **[`StateTree`]** — Reactive root built on `tokio::sync::watch`
//!   channels. Readers take cheap `Arc` snapshots or subscribe through
//!   [`StateStream`]; only the engine's committer writes.
//!
//! - **[`Mutation`]** — Named, synchronous, infallible state updates.
//!   Every write to the tree is one of these.
//!
//! - **Reconcilers** — one module per domain (gadget, WiFi, trigger
//!   actions, HID jobs, stored lists, script source) pairing remote calls
//!   with commits and notifications.
//!
//! - **[`NotificationReporter`]** — injected sink for success/error
//!   toasts; fire-and-forget.

pub mod action;
pub mod config;
pub mod convert;
pub mod engine;
pub mod error;
pub mod model;
pub mod notify;
mod reconcile;
pub mod store;
pub mod stream;

// ── Primary re-exports ──────────────────────────────────────────────
pub use action::{Action, ActionName};
pub use config::{EngineConfig, JobStatusMode, TimeoutClass, Timeouts};
pub use engine::Engine;
pub use error::CoreError;
pub use notify::{
    ChannelReporter, Notification, NotificationReporter, Placement, Severity, TracingReporter,
};
pub use store::{Mutation, StateSnapshot, StateTree};
pub use stream::StateStream;

pub use model::{
    DeployTarget, Flags, JobState, LoadScriptRequest, ScriptLoadMode, StoredListKind,
};

/// Wire types shared with the gateway, re-exported for consumers.
pub use rigsync_api::types::{
    EthernetInterfaceSettings, GadgetSettings, TriggerAction, TriggerActionSet, WifiSettings,
    WifiSettingsStorageRequest, WifiState,
};
pub use rigsync_api::{Method, RemoteGateway};
