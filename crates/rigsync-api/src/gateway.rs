// ── Remote gateway contract ──
//
// One RPC per call, caller-supplied timeout, value or error back.
// Implementations must not retry or queue; the core treats every
// failure (including timeouts) as final for that call.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::error::Error;

/// Every remote operation the device console can invoke.
///
/// The PascalCase string form is the method identifier on the wire.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "PascalCase")]
pub enum Method {
    // ── USB gadget ───────────────────────────────────────────────────
    GetDeployedGadgetSettings,
    SetGadgetSettings,
    DeployGadgetSettings,

    // ── Ethernet interfaces ─────────────────────────────────────────
    GetAllDeployedEthernetInterfaceSettings,
    DeployEthernetInterfaceSettings,

    // ── WiFi ─────────────────────────────────────────────────────────
    GetWifiState,
    DeployWifiSettings,
    StoreWifiSettings,
    GetStoredWifiSettings,
    ListStoredWifiSettings,

    // ── HID jobs ─────────────────────────────────────────────────────
    GetRunningHidJobStates,

    // ── Trigger actions ──────────────────────────────────────────────
    GetDeployedTriggerActionSet,
    DeployTriggerActionSetReplace,
    DeployTriggerActionSetAdd,
    DeployTriggerActionSetRemove,
    DeployStoredTriggerActionSetReplace,
    DeployStoredTriggerActionSetAdd,
    StoreTriggerActionSet,
    ListStoredTriggerActionSets,

    // ── Stored scripts ───────────────────────────────────────────────
    ListStoredBashScripts,
    ListStoredHidScripts,

    // ── File transfer ────────────────────────────────────────────────
    DownloadFile,
    UploadFile,
}

/// Executes exactly one remote call.
///
/// `args` is the JSON encoding of the method's request (or `null` for
/// argument-less methods); the returned value is the JSON encoding of the
/// result (or `null` for methods without one). `timeout` is advisory for
/// the transport; [`DeviceClient`](crate::DeviceClient) enforces it as well.
#[async_trait]
pub trait RemoteGateway: Send + Sync {
    async fn call(&self, method: Method, args: Value, timeout: Duration) -> Result<Value, Error>;
}
