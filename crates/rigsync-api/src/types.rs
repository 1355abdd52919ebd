// ── Wire types ──
//
// Request and result shapes exchanged with the device. Only the fields
// the console reconciles on are modelled strictly; everything else rides
// along untouched via `#[serde(default)]`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ── USB gadget ─────────────────────────────────────────────────────

/// USB gadget profile as deployed on (or proposed to) the device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GadgetSettings {
    pub enabled: bool,
    pub vid: String,
    pub pid: String,
    pub manufacturer: String,
    pub product: String,
    pub serial: String,
    pub use_cdc_ecm: bool,
    pub use_rndis: bool,
    pub use_hid_keyboard: bool,
    pub use_hid_mouse: bool,
    pub use_hid_raw: bool,
    pub use_ums: bool,
    pub use_serial: bool,
    pub rndis_settings: EthernetGadgetSettings,
    pub cdc_ecm_settings: EthernetGadgetSettings,
    pub ums_settings: UmsSettings,
}

impl Default for GadgetSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            vid: "0x1d6b".into(),
            pid: "0x1347".into(),
            manufacturer: String::new(),
            product: String::new(),
            serial: String::new(),
            use_cdc_ecm: false,
            use_rndis: false,
            use_hid_keyboard: false,
            use_hid_mouse: false,
            use_hid_raw: false,
            use_ums: false,
            use_serial: false,
            rndis_settings: EthernetGadgetSettings::default(),
            cdc_ecm_settings: EthernetGadgetSettings::default(),
            ums_settings: UmsSettings::default(),
        }
    }
}

/// MAC addresses of a virtual USB Ethernet function.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EthernetGadgetSettings {
    pub host_addr: String,
    pub dev_addr: String,
}

/// USB mass-storage function backing image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UmsSettings {
    pub cdrom: bool,
    pub file: String,
}

// ── Ethernet interfaces ────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterfaceMode {
    #[default]
    Unmanaged,
    Manual,
    DhcpClient,
    DhcpServer,
}

/// Settings of one network interface on the device.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EthernetInterfaceSettings {
    pub name: String,
    pub enabled: bool,
    pub mode: InterfaceMode,
    pub ipv4_address: String,
    pub netmask: String,
    /// DHCP server block, kept opaque.
    pub dhcp_server_settings: Option<Value>,
}

// ── WiFi ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WifiWorkingMode {
    #[default]
    Unknown,
    AccessPoint,
    Station,
    StationFailoverAccessPoint,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WifiAuthMode {
    #[default]
    Wpa2Psk,
    Open,
}

/// One BSS definition (the AP we serve, or a network we join).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WifiBss {
    pub ssid: String,
    pub psk: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WifiSettings {
    pub name: String,
    pub disabled: bool,
    pub regulatory: String,
    pub working_mode: WifiWorkingMode,
    pub auth_mode: WifiAuthMode,
    pub channel: u32,
    pub hide_ssid: bool,
    pub access_point: WifiBss,
    pub client_networks: Vec<WifiBss>,
    pub nexmon: bool,
}

/// Live WiFi state reported by the device.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WifiState {
    pub working_mode: WifiWorkingMode,
    pub channel: u32,
    pub ssid: String,
    pub current_settings: WifiSettings,
}

/// Request to save WiFi settings under a template name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WifiSettingsStorageRequest {
    pub template_name: String,
    pub settings: WifiSettings,
}

// ── HID jobs ───────────────────────────────────────────────────────

/// A HID script job the device reports as running.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunningHidJob {
    pub id: i64,
    pub vm_id: i64,
    pub source: String,
}

// ── Trigger actions ────────────────────────────────────────────────

/// A `{type, options}` pair, used for both the trigger and the action
/// half of a rule. Option schemas vary per type and stay opaque here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypedOptions {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub options: Map<String, Value>,
}

impl TypedOptions {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            options: Map::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriggerAction {
    pub id: u32,
    pub is_active: bool,
    pub immutable: bool,
    pub trigger: TypedOptions,
    pub action: TypedOptions,
}

impl Default for TriggerAction {
    fn default() -> Self {
        Self {
            id: 0,
            is_active: true,
            immutable: false,
            trigger: TypedOptions::new("service_started"),
            action: TypedOptions::new("log"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriggerActionSet {
    pub name: String,
    pub trigger_actions: Vec<TriggerAction>,
}

// ── File transfer ──────────────────────────────────────────────────

/// Logical folder namespaces the device exposes for file transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessibleFolder {
    HidScripts,
    BashScripts,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDownloadRequest {
    pub folder: AccessibleFolder,
    pub filename: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileUploadRequest {
    pub folder: AccessibleFolder,
    pub filename: String,
    pub content: String,
    pub allow_overwrite: bool,
}

/// A single string argument (stored-set names, template names).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringMessage {
    pub msg: String,
}

impl From<&str> for StringMessage {
    fn from(msg: &str) -> Self {
        Self { msg: msg.into() }
    }
}
