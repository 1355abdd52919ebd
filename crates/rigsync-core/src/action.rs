// ── Dispatch vocabulary ──
//
// Every operation a console can request, by name and with its payload.
// Names are the camelCase strings consoles send over the wire.

use serde::de::DeserializeOwned;
use serde_json::Value;
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use rigsync_api::types::{
    EthernetInterfaceSettings, TriggerActionSet, WifiSettings, WifiSettingsStorageRequest,
};

use crate::error::CoreError;
use crate::model::LoadScriptRequest;

/// Name of a dispatchable action.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr,
)]
#[strum(serialize_all = "camelCase")]
pub enum ActionName {
    UpdateRunningHidJobs,
    DeployCurrentGadgetSettings,
    UpdateCurrentGadgetSettingsFromDeployed,
    DeployEthernetInterfaceSettings,
    UpdateCurrentWifiSettingsFromDeployed,
    DeployWifiSettings,
    UpdateStoredWifiSettingsList,
    StoreWifiSettings,
    LoadWifiSettings,
    UpdateCurrentTriggerActionsFromServer,
    AddTriggerAction,
    RemoveTriggerActions,
    StoreTriggerActionSet,
    UpdateStoredTriggerActionSetsList,
    DeployStoredTriggerActionSetReplace,
    DeployStoredTriggerActionSetAdd,
    DeployCurrentTriggerActionSetReplace,
    DeployCurrentTriggerActionSetAdd,
    UpdateStoredBashScriptsList,
    #[strum(serialize = "updateStoredHIDScriptsList")]
    UpdateStoredHidScriptsList,
    UpdateCurrentHidScriptSourceFromRemoteFile,
    StoreCurrentHidScriptSourceToRemoteFile,
}

impl ActionName {
    /// Whether the action requires a payload.
    pub fn takes_payload(self) -> bool {
        matches!(
            self,
            Self::DeployEthernetInterfaceSettings
                | Self::DeployWifiSettings
                | Self::StoreWifiSettings
                | Self::LoadWifiSettings
                | Self::RemoveTriggerActions
                | Self::StoreTriggerActionSet
                | Self::DeployStoredTriggerActionSetReplace
                | Self::DeployStoredTriggerActionSetAdd
                | Self::DeployCurrentTriggerActionSetReplace
                | Self::DeployCurrentTriggerActionSetAdd
                | Self::UpdateCurrentHidScriptSourceFromRemoteFile
                | Self::StoreCurrentHidScriptSourceToRemoteFile
        )
    }
}

/// A dispatchable action together with its payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    UpdateRunningHidJobs,
    /// Deploys the gadget settings currently held in the state tree.
    DeployCurrentGadgetSettings,
    UpdateCurrentGadgetSettingsFromDeployed,
    DeployEthernetInterfaceSettings(EthernetInterfaceSettings),
    UpdateCurrentWifiSettingsFromDeployed,
    DeployWifiSettings(WifiSettings),
    UpdateStoredWifiSettingsList,
    StoreWifiSettings(WifiSettingsStorageRequest),
    /// Name of the stored WiFi settings to load.
    LoadWifiSettings(String),
    UpdateCurrentTriggerActionsFromServer,
    AddTriggerAction,
    RemoveTriggerActions(TriggerActionSet),
    StoreTriggerActionSet(TriggerActionSet),
    UpdateStoredTriggerActionSetsList,
    DeployStoredTriggerActionSetReplace(String),
    DeployStoredTriggerActionSetAdd(String),
    DeployCurrentTriggerActionSetReplace(TriggerActionSet),
    DeployCurrentTriggerActionSetAdd(TriggerActionSet),
    UpdateStoredBashScriptsList,
    UpdateStoredHidScriptsList,
    UpdateCurrentHidScriptSourceFromRemoteFile(LoadScriptRequest),
    /// Target filename; the current script source is uploaded.
    StoreCurrentHidScriptSourceToRemoteFile(String),
}

impl Action {
    pub fn name(&self) -> ActionName {
        match self {
            Self::UpdateRunningHidJobs => ActionName::UpdateRunningHidJobs,
            Self::DeployCurrentGadgetSettings => ActionName::DeployCurrentGadgetSettings,
            Self::UpdateCurrentGadgetSettingsFromDeployed => {
                ActionName::UpdateCurrentGadgetSettingsFromDeployed
            }
            Self::DeployEthernetInterfaceSettings(_) => ActionName::DeployEthernetInterfaceSettings,
            Self::UpdateCurrentWifiSettingsFromDeployed => {
                ActionName::UpdateCurrentWifiSettingsFromDeployed
            }
            Self::DeployWifiSettings(_) => ActionName::DeployWifiSettings,
            Self::UpdateStoredWifiSettingsList => ActionName::UpdateStoredWifiSettingsList,
            Self::StoreWifiSettings(_) => ActionName::StoreWifiSettings,
            Self::LoadWifiSettings(_) => ActionName::LoadWifiSettings,
            Self::UpdateCurrentTriggerActionsFromServer => {
                ActionName::UpdateCurrentTriggerActionsFromServer
            }
            Self::AddTriggerAction => ActionName::AddTriggerAction,
            Self::RemoveTriggerActions(_) => ActionName::RemoveTriggerActions,
            Self::StoreTriggerActionSet(_) => ActionName::StoreTriggerActionSet,
            Self::UpdateStoredTriggerActionSetsList => ActionName::UpdateStoredTriggerActionSetsList,
            Self::DeployStoredTriggerActionSetReplace(_) => {
                ActionName::DeployStoredTriggerActionSetReplace
            }
            Self::DeployStoredTriggerActionSetAdd(_) => ActionName::DeployStoredTriggerActionSetAdd,
            Self::DeployCurrentTriggerActionSetReplace(_) => {
                ActionName::DeployCurrentTriggerActionSetReplace
            }
            Self::DeployCurrentTriggerActionSetAdd(_) => {
                ActionName::DeployCurrentTriggerActionSetAdd
            }
            Self::UpdateStoredBashScriptsList => ActionName::UpdateStoredBashScriptsList,
            Self::UpdateStoredHidScriptsList => ActionName::UpdateStoredHidScriptsList,
            Self::UpdateCurrentHidScriptSourceFromRemoteFile(_) => {
                ActionName::UpdateCurrentHidScriptSourceFromRemoteFile
            }
            Self::StoreCurrentHidScriptSourceToRemoteFile(_) => {
                ActionName::StoreCurrentHidScriptSourceToRemoteFile
            }
        }
    }

    /// Resolve a wire name and optional JSON payload into an action.
    ///
    /// Payloads on actions that take none are ignored.
    pub fn from_named(name: &str, payload: Option<Value>) -> Result<Self, CoreError> {
        let action: ActionName = name.parse().map_err(|_| CoreError::UnknownAction {
            name: name.to_owned(),
        })?;

        let p = Payload { action, payload };
        Ok(match action {
            ActionName::UpdateRunningHidJobs => Self::UpdateRunningHidJobs,
            ActionName::DeployCurrentGadgetSettings => Self::DeployCurrentGadgetSettings,
            ActionName::UpdateCurrentGadgetSettingsFromDeployed => {
                Self::UpdateCurrentGadgetSettingsFromDeployed
            }
            ActionName::DeployEthernetInterfaceSettings => {
                Self::DeployEthernetInterfaceSettings(p.decode()?)
            }
            ActionName::UpdateCurrentWifiSettingsFromDeployed => {
                Self::UpdateCurrentWifiSettingsFromDeployed
            }
            ActionName::DeployWifiSettings => Self::DeployWifiSettings(p.decode()?),
            ActionName::UpdateStoredWifiSettingsList => Self::UpdateStoredWifiSettingsList,
            ActionName::StoreWifiSettings => Self::StoreWifiSettings(p.decode()?),
            ActionName::LoadWifiSettings => Self::LoadWifiSettings(p.decode()?),
            ActionName::UpdateCurrentTriggerActionsFromServer => {
                Self::UpdateCurrentTriggerActionsFromServer
            }
            ActionName::AddTriggerAction => Self::AddTriggerAction,
            ActionName::RemoveTriggerActions => Self::RemoveTriggerActions(p.decode()?),
            ActionName::StoreTriggerActionSet => Self::StoreTriggerActionSet(p.decode()?),
            ActionName::UpdateStoredTriggerActionSetsList => Self::UpdateStoredTriggerActionSetsList,
            ActionName::DeployStoredTriggerActionSetReplace => {
                Self::DeployStoredTriggerActionSetReplace(p.decode()?)
            }
            ActionName::DeployStoredTriggerActionSetAdd => {
                Self::DeployStoredTriggerActionSetAdd(p.decode()?)
            }
            ActionName::DeployCurrentTriggerActionSetReplace => {
                Self::DeployCurrentTriggerActionSetReplace(p.decode()?)
            }
            ActionName::DeployCurrentTriggerActionSetAdd => {
                Self::DeployCurrentTriggerActionSetAdd(p.decode()?)
            }
            ActionName::UpdateStoredBashScriptsList => Self::UpdateStoredBashScriptsList,
            ActionName::UpdateStoredHidScriptsList => Self::UpdateStoredHidScriptsList,
            ActionName::UpdateCurrentHidScriptSourceFromRemoteFile => {
                Self::UpdateCurrentHidScriptSourceFromRemoteFile(p.decode()?)
            }
            ActionName::StoreCurrentHidScriptSourceToRemoteFile => {
                Self::StoreCurrentHidScriptSourceToRemoteFile(p.decode()?)
            }
        })
    }
}

struct Payload {
    action: ActionName,
    payload: Option<Value>,
}

impl Payload {
    fn decode<T: DeserializeOwned>(self) -> Result<T, CoreError> {
        let value = self.payload.ok_or_else(|| CoreError::InvalidPayload {
            action: self.action.to_string(),
            message: "payload required".into(),
        })?;
        serde_json::from_value(value).map_err(|e| CoreError::InvalidPayload {
            action: self.action.to_string(),
            message: e.to_string(),
        })
    }
}
