// Trigger actions. Every write is followed by a full refresh from the
// device; nothing is merged locally.

use tracing::warn;

use rigsync_api::types::{TriggerAction, TriggerActionSet};

use crate::action::Action;
use crate::config::TimeoutClass;
use crate::engine::Engine;
use crate::error::CoreError;
use crate::notify::{Notification, Placement};
use crate::store::Mutation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum DeployMode {
    Replace,
    Add,
}

/// Swap the registry for the deployed set. A failed fetch leaves the
/// registry as it was.
pub(super) async fn refresh(engine: &Engine) {
    match engine
        .client()
        .get_deployed_trigger_action_set(engine.timeout(TimeoutClass::Default))
        .await
    {
        Ok(set) => engine.commit(Mutation::ReplaceTriggerActions(set.trigger_actions)),
        Err(e) => engine.notify(Notification::error(
            "Error fetching deployed TriggerActions",
            CoreError::from(e).to_string(),
        )),
    }
}

fn resync(engine: &Engine) {
    engine.dispatch(Action::UpdateCurrentTriggerActionsFromServer);
}

/// Append one default trigger action, inactive so it fires nothing
/// until edited.
pub(super) async fn add_default(engine: &Engine) {
    let set = TriggerActionSet {
        name: String::new(),
        trigger_actions: vec![TriggerAction {
            is_active: false,
            ..TriggerAction::default()
        }],
    };

    if let Err(e) = engine
        .client()
        .deploy_trigger_action_set_add(&set, engine.timeout(TimeoutClass::Default))
        .await
    {
        warn!(error = %e, "adding trigger action failed");
    }
    resync(engine);
}

pub(super) async fn remove(engine: &Engine, set: TriggerActionSet) {
    if let Err(e) = engine
        .client()
        .deploy_trigger_action_set_remove(&set, engine.timeout(TimeoutClass::Default))
        .await
    {
        warn!(error = %e, count = set.trigger_actions.len(), "removing trigger actions failed");
    }
    resync(engine);
}

/// Save a set in the device's store. The deployed set is untouched.
pub(super) async fn store(engine: &Engine, set: TriggerActionSet) {
    match engine
        .client()
        .store_trigger_action_set(&set, engine.timeout(TimeoutClass::Default))
        .await
    {
        Ok(()) => engine.notify(Notification::success("TriggerActionSet stored", "")),
        Err(e) => engine.notify(
            Notification::error("Error storing TriggerActionSet", CoreError::from(e).to_string())
                .at(Placement::Bottom),
        ),
    }
}

/// Deploy a set supplied by the caller.
pub(super) async fn deploy_given(engine: &Engine, set: TriggerActionSet, mode: DeployMode) {
    let client = engine.client();
    let timeout = engine.timeout(TimeoutClass::Default);

    let (result, ok_title, err_title) = match mode {
        DeployMode::Replace => (
            client.deploy_trigger_action_set_replace(&set, timeout).await,
            "Replaced TriggerActionSet with given one",
            "Error replacing TriggerActionSet with given one",
        ),
        DeployMode::Add => (
            client.deploy_trigger_action_set_add(&set, timeout).await,
            "Added TriggerActionSet to server",
            "Error adding given TriggerActionSet to server",
        ),
    };

    report(engine, result.map(drop), ok_title, err_title, "");
    resync(engine);
}

/// Deploy a set from the device's store by name.
pub(super) async fn deploy_stored(engine: &Engine, name: &str, mode: DeployMode) {
    let client = engine.client();
    let timeout = engine.timeout(TimeoutClass::Default);

    let (result, ok_title, err_title) = match mode {
        DeployMode::Replace => (
            client.deploy_stored_trigger_action_set_replace(name, timeout).await,
            "Replaced TriggerActionSet by stored set",
            "Error replacing TriggerActionSet with stored set",
        ),
        DeployMode::Add => (
            client.deploy_stored_trigger_action_set_add(name, timeout).await,
            "Added TriggerActionSet from store",
            "Error adding TriggerActionSet from store",
        ),
    };

    report(engine, result.map(drop), ok_title, err_title, name);
    resync(engine);
}

fn report(
    engine: &Engine,
    result: Result<(), rigsync_api::Error>,
    ok_title: &str,
    err_title: &str,
    detail: &str,
) {
    match result {
        Ok(()) => engine.notify(Notification::success(ok_title, detail)),
        Err(e) => engine.notify(
            Notification::error(err_title, CoreError::from(e).to_string()).at(Placement::Bottom),
        ),
    }
}
