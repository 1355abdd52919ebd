// ── Reconcilers ──
//
// One module per domain. Each reconciler pairs remote calls with
// commits and notifications; none of them returns anything to the
// dispatcher.

mod gadget;
mod guard;
mod hid_jobs;
mod interfaces;
mod lists;
mod script;
mod trigger;
mod wifi;

use crate::action::Action;
use crate::engine::Engine;
use crate::model::StoredListKind;

pub(crate) async fn run(engine: &Engine, action: Action) {
    match action {
        Action::UpdateRunningHidJobs => hid_jobs::refresh(engine).await,

        Action::DeployCurrentGadgetSettings => gadget::deploy_current(engine).await,
        Action::UpdateCurrentGadgetSettingsFromDeployed => gadget::refresh(engine).await,

        Action::DeployEthernetInterfaceSettings(settings) => {
            interfaces::deploy(engine, settings).await;
        }

        Action::UpdateCurrentWifiSettingsFromDeployed => wifi::refresh_state(engine).await,
        Action::DeployWifiSettings(settings) => wifi::deploy(engine, settings).await,
        Action::StoreWifiSettings(request) => wifi::store(engine, request).await,
        Action::LoadWifiSettings(name) => wifi::load(engine, &name).await,

        Action::UpdateCurrentTriggerActionsFromServer => trigger::refresh(engine).await,
        Action::AddTriggerAction => trigger::add_default(engine).await,
        Action::RemoveTriggerActions(set) => trigger::remove(engine, set).await,
        Action::StoreTriggerActionSet(set) => trigger::store(engine, set).await,
        Action::DeployStoredTriggerActionSetReplace(name) => {
            trigger::deploy_stored(engine, &name, trigger::DeployMode::Replace).await;
        }
        Action::DeployStoredTriggerActionSetAdd(name) => {
            trigger::deploy_stored(engine, &name, trigger::DeployMode::Add).await;
        }
        Action::DeployCurrentTriggerActionSetReplace(set) => {
            trigger::deploy_given(engine, set, trigger::DeployMode::Replace).await;
        }
        Action::DeployCurrentTriggerActionSetAdd(set) => {
            trigger::deploy_given(engine, set, trigger::DeployMode::Add).await;
        }

        Action::UpdateStoredWifiSettingsList => {
            lists::refresh(engine, StoredListKind::WifiSettings).await;
        }
        Action::UpdateStoredTriggerActionSetsList => {
            lists::refresh(engine, StoredListKind::TriggerActionSets).await;
        }
        Action::UpdateStoredBashScriptsList => {
            lists::refresh(engine, StoredListKind::BashScripts).await;
        }
        Action::UpdateStoredHidScriptsList => {
            lists::refresh(engine, StoredListKind::HidScripts).await;
        }

        Action::UpdateCurrentHidScriptSourceFromRemoteFile(request) => {
            script::load(engine, request).await;
        }
        Action::StoreCurrentHidScriptSourceToRemoteFile(filename) => {
            script::store(engine, &filename).await;
        }
    }
}
