// ── Committer ──
//
// The only write path into the state tree. Each mutation is named,
// synchronous and infallible: it touches exactly one node, publishes
// it, then bumps the revision counter.

use rigsync_api::types::{
    EthernetInterfaceSettings, GadgetSettings, TriggerAction, WifiSettings, WifiState,
};
use strum::IntoStaticStr;
use tracing::debug;

use super::state_tree::StateTree;
use crate::model::{DeployTarget, JobState, StoredListKind};

/// Named state update.
///
/// `&'static str` conversion yields the mutation name as it appears in
/// logs (`setCurrentGadgetSettings`, ...).
#[derive(Debug, Clone, PartialEq, IntoStaticStr)]
#[strum(serialize_all = "camelCase")]
pub enum Mutation {
    SetModalEnabled(bool),
    SetCurrentHidScriptSource(String),
    SetCurrentGadgetSettings(GadgetSettings),
    SetWifiState(WifiState),
    SetCurrentWifiSettings(WifiSettings),
    SetStoredWifiSettingsList(Vec<String>),
    SetStoredBashScriptsList(Vec<String>),
    SetStoredHidScriptsList(Vec<String>),
    SetStoredTriggerActionSetsList(Vec<String>),
    SetInterfaceSettings(Vec<EthernetInterfaceSettings>),
    SetDeploying { target: DeployTarget, active: bool },
    UpsertHidJob(JobState),
    ReplaceTriggerActions(Vec<TriggerAction>),
    SetConnectionStatus { connected: bool, failed_attempts: u32 },
}

impl Mutation {
    pub fn name(&self) -> &'static str {
        self.into()
    }

    /// List mutation matching a stored-list kind.
    pub fn stored_list(kind: StoredListKind, names: Vec<String>) -> Self {
        match kind {
            StoredListKind::WifiSettings => Self::SetStoredWifiSettingsList(names),
            StoredListKind::TriggerActionSets => Self::SetStoredTriggerActionSetsList(names),
            StoredListKind::BashScripts => Self::SetStoredBashScriptsList(names),
            StoredListKind::HidScripts => Self::SetStoredHidScriptsList(names),
        }
    }
}

impl StateTree {
    pub(crate) fn commit(&self, mutation: Mutation) {
        debug!(mutation = mutation.name(), "commit");

        match mutation {
            Mutation::SetModalEnabled(open) => self.flags.modify(|f| f.modal_open = open),
            Mutation::SetCurrentHidScriptSource(source) => self.script_source.set(source),
            Mutation::SetCurrentGadgetSettings(settings) => self.gadget_settings.set(settings),
            Mutation::SetWifiState(state) => self.wifi_state.set(state),
            Mutation::SetCurrentWifiSettings(settings) => {
                self.wifi_state.modify(|s| s.current_settings = settings);
            }
            Mutation::SetStoredWifiSettingsList(names) => {
                self.stored.get(StoredListKind::WifiSettings).set(names);
            }
            Mutation::SetStoredBashScriptsList(names) => {
                self.stored.get(StoredListKind::BashScripts).set(names);
            }
            Mutation::SetStoredHidScriptsList(names) => {
                self.stored.get(StoredListKind::HidScripts).set(names);
            }
            Mutation::SetStoredTriggerActionSetsList(names) => {
                self.stored.get(StoredListKind::TriggerActionSets).set(names);
            }
            Mutation::SetInterfaceSettings(settings) => self.interface_settings.set(settings),
            Mutation::SetDeploying { target, active } => self.flags.modify(|f| match target {
                DeployTarget::Gadget => f.deploying_gadget = active,
                DeployTarget::Wifi => f.deploying_wifi = active,
            }),
            Mutation::UpsertHidJob(job) => {
                self.hid_jobs.upsert(job.id.clone(), job);
            }
            Mutation::ReplaceTriggerActions(actions) => self
                .trigger_actions
                .replace_all(actions.into_iter().map(|ta| (ta.id.to_string(), ta))),
            Mutation::SetConnectionStatus {
                connected,
                failed_attempts,
            } => self.flags.modify(|f| {
                f.connected = connected;
                f.failed_connection_attempts = failed_attempts;
            }),
        }

        self.revision.send_modify(|rev| *rev += 1);
    }
}
