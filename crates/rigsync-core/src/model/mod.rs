// ── Domain model ──
//
// Local value shapes held by the state tree. Wire types that need no
// reshaping (gadget settings, WiFi state, trigger actions) are used
// as-is from `rigsync_api::types`.

pub mod hid_job;
pub mod script;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

pub use hid_job::JobState;
pub use script::{LoadScriptRequest, ScriptLoadMode};

/// UI-facing status flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flags {
    pub deploying_gadget: bool,
    pub deploying_wifi: bool,
    pub modal_open: bool,
    pub connected: bool,
    pub failed_connection_attempts: u32,
}

/// Deployable resources that carry a guard flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
pub enum DeployTarget {
    Gadget,
    Wifi,
}

/// The four name lists mirrored from the device's stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
pub enum StoredListKind {
    WifiSettings,
    TriggerActionSets,
    BashScripts,
    HidScripts,
}
