// ── State tree ──
//
// Owns every domain sub-state. Readers take `Arc` snapshots or
// subscribe; writes happen only through `commit` in the sibling module.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::watch;

use rigsync_api::types::{
    EthernetInterfaceSettings, GadgetSettings, TriggerAction, WifiState,
};

use super::collection::{CollectionSnapshot, KeyedCollection};
use super::observable::Observable;
use crate::model::script::DEFAULT_SCRIPT_SOURCE;
use crate::model::{Flags, JobState, StoredListKind};
use crate::stream::StateStream;

/// Name lists mirrored from the device's stores, each replaced wholesale.
pub(crate) struct NamedLists {
    pub(crate) wifi_settings: Observable<Vec<String>>,
    pub(crate) trigger_action_sets: Observable<Vec<String>>,
    pub(crate) bash_scripts: Observable<Vec<String>>,
    pub(crate) hid_scripts: Observable<Vec<String>>,
}

impl NamedLists {
    fn new() -> Self {
        Self {
            wifi_settings: Observable::new(Vec::new()),
            trigger_action_sets: Observable::new(Vec::new()),
            bash_scripts: Observable::new(Vec::new()),
            hid_scripts: Observable::new(Vec::new()),
        }
    }

    pub(crate) fn get(&self, kind: StoredListKind) -> &Observable<Vec<String>> {
        match kind {
            StoredListKind::WifiSettings => &self.wifi_settings,
            StoredListKind::TriggerActionSets => &self.trigger_action_sets,
            StoredListKind::BashScripts => &self.bash_scripts,
            StoredListKind::HidScripts => &self.hid_scripts,
        }
    }
}

/// The single observable root for one engine session.
///
/// Cheap to read from any thread. Only the engine's committer writes,
/// and each commit bumps [`revision`](Self::revision) exactly once.
pub struct StateTree {
    pub(crate) gadget_settings: Observable<GadgetSettings>,
    pub(crate) interface_settings: Observable<Vec<EthernetInterfaceSettings>>,
    pub(crate) wifi_state: Observable<WifiState>,
    pub(crate) script_source: Observable<String>,
    pub(crate) flags: Observable<Flags>,
    pub(crate) hid_jobs: KeyedCollection<JobState>,
    pub(crate) trigger_actions: KeyedCollection<TriggerAction>,
    pub(crate) stored: NamedLists,
    pub(crate) revision: watch::Sender<u64>,
}

impl StateTree {
    pub(crate) fn new() -> Self {
        let (revision, _) = watch::channel(0u64);

        Self {
            gadget_settings: Observable::new(GadgetSettings::default()),
            interface_settings: Observable::new(Vec::new()),
            wifi_state: Observable::new(WifiState::default()),
            script_source: Observable::new(DEFAULT_SCRIPT_SOURCE.to_owned()),
            flags: Observable::new(Flags::default()),
            hid_jobs: KeyedCollection::new(),
            trigger_actions: KeyedCollection::new(),
            stored: NamedLists::new(),
            revision,
        }
    }

    // ── Snapshot accessors ───────────────────────────────────────────

    pub fn gadget_settings(&self) -> Arc<GadgetSettings> {
        self.gadget_settings.get()
    }

    pub fn interface_settings(&self) -> Arc<Vec<EthernetInterfaceSettings>> {
        self.interface_settings.get()
    }

    pub fn wifi_state(&self) -> Arc<WifiState> {
        self.wifi_state.get()
    }

    pub fn script_source(&self) -> Arc<String> {
        self.script_source.get()
    }

    pub fn flags(&self) -> Flags {
        *self.flags.get()
    }

    pub fn stored_list(&self, kind: StoredListKind) -> Arc<Vec<String>> {
        self.stored.get(kind).get()
    }

    /// Number of commits applied so far.
    pub fn revision(&self) -> u64 {
        *self.revision.borrow()
    }

    // ── Trigger actions ──────────────────────────────────────────────

    /// Deployed trigger actions in server order.
    pub fn trigger_actions(&self) -> Vec<Arc<TriggerAction>> {
        self.trigger_actions.values()
    }

    pub fn trigger_action(&self, id: u32) -> Option<Arc<TriggerAction>> {
        self.trigger_actions.get(&id.to_string())
    }

    pub fn trigger_action_ids(&self) -> Vec<String> {
        self.trigger_actions.keys()
    }

    // ── HID jobs ─────────────────────────────────────────────────────

    pub fn hid_jobs(&self) -> Vec<Arc<JobState>> {
        self.hid_jobs.values()
    }

    pub fn hid_job(&self, id: &str) -> Option<Arc<JobState>> {
        self.hid_jobs.get(id)
    }

    pub fn hid_job_count(&self) -> usize {
        self.hid_jobs.len()
    }

    /// Jobs that have neither succeeded nor failed.
    pub fn running_hid_jobs(&self) -> Vec<Arc<JobState>> {
        self.filter_jobs(|job| job.is_pending())
    }

    pub fn failed_hid_jobs(&self) -> Vec<Arc<JobState>> {
        self.filter_jobs(|job| job.has_failed)
    }

    pub fn succeeded_hid_jobs(&self) -> Vec<Arc<JobState>> {
        self.filter_jobs(|job| job.has_succeeded)
    }

    fn filter_jobs(&self, keep: impl Fn(&JobState) -> bool) -> Vec<Arc<JobState>> {
        self.hid_jobs
            .values()
            .into_iter()
            .filter(|job| keep(job))
            .collect()
    }

    // ── Subscriptions ────────────────────────────────────────────────

    /// Revision counter, bumped once per commit.
    pub fn subscribe(&self) -> StateStream<u64> {
        StateStream::new(self.revision.subscribe())
    }

    pub fn subscribe_gadget_settings(&self) -> StateStream<Arc<GadgetSettings>> {
        self.gadget_settings.subscribe()
    }

    pub fn subscribe_interface_settings(&self) -> StateStream<Arc<Vec<EthernetInterfaceSettings>>> {
        self.interface_settings.subscribe()
    }

    pub fn subscribe_wifi_state(&self) -> StateStream<Arc<WifiState>> {
        self.wifi_state.subscribe()
    }

    pub fn subscribe_script_source(&self) -> StateStream<Arc<String>> {
        self.script_source.subscribe()
    }

    pub fn subscribe_flags(&self) -> StateStream<Arc<Flags>> {
        self.flags.subscribe()
    }

    pub fn subscribe_stored_list(&self, kind: StoredListKind) -> StateStream<Arc<Vec<String>>> {
        self.stored.get(kind).subscribe()
    }

    pub fn subscribe_hid_jobs(&self) -> StateStream<CollectionSnapshot<JobState>> {
        self.hid_jobs.subscribe()
    }

    pub fn subscribe_trigger_actions(&self) -> StateStream<CollectionSnapshot<TriggerAction>> {
        self.trigger_actions.subscribe()
    }

    /// Serializable copy of the whole tree.
    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            revision: self.revision(),
            gadget_settings: self.gadget_settings(),
            interface_settings: self.interface_settings(),
            wifi_state: self.wifi_state(),
            trigger_actions: self.trigger_actions(),
            hid_jobs: self.hid_jobs(),
            stored_lists: StoredLists {
                wifi: self.stored_list(StoredListKind::WifiSettings),
                trigger_action_sets: self.stored_list(StoredListKind::TriggerActionSets),
                bash_scripts: self.stored_list(StoredListKind::BashScripts),
                hid_scripts: self.stored_list(StoredListKind::HidScripts),
            },
            script_source: self.script_source(),
            flags: self.flags(),
        }
    }
}

/// Point-in-time copy of the tree, shaped for serialization.
///
/// Fields are read one after another, so a commit racing with
/// `snapshot()` may land between two of them.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StateSnapshot {
    pub revision: u64,
    pub gadget_settings: Arc<GadgetSettings>,
    pub interface_settings: Arc<Vec<EthernetInterfaceSettings>>,
    pub wifi_state: Arc<WifiState>,
    pub trigger_actions: Vec<Arc<TriggerAction>>,
    pub hid_jobs: Vec<Arc<JobState>>,
    pub stored_lists: StoredLists,
    pub script_source: Arc<String>,
    pub flags: Flags,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredLists {
    pub wifi: Arc<Vec<String>>,
    pub trigger_action_sets: Arc<Vec<String>>,
    pub bash_scripts: Arc<Vec<String>>,
    pub hid_scripts: Arc<Vec<String>>,
}
