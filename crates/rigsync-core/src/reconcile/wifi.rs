// WiFi: state refresh, deploy, and the named settings store.

use tracing::warn;

use rigsync_api::types::{WifiSettings, WifiSettingsStorageRequest};

use super::guard::DeployGuard;
use crate::config::TimeoutClass;
use crate::engine::Engine;
use crate::error::CoreError;
use crate::model::DeployTarget;
use crate::notify::{Notification, Placement};
use crate::store::Mutation;

/// Failures are logged only.
pub(super) async fn refresh_state(engine: &Engine) {
    match engine
        .client()
        .get_wifi_state(engine.timeout(TimeoutClass::Default))
        .await
    {
        Ok(state) => engine.commit(Mutation::SetWifiState(state)),
        Err(e) => warn!(error = %e, "couldn't retrieve deployed wifi state"),
    }
}

/// Deploy `settings` and adopt the state the device reports back.
pub(super) async fn deploy(engine: &Engine, settings: WifiSettings) {
    let _guard = DeployGuard::engage(engine, DeployTarget::Wifi);

    match engine
        .client()
        .deploy_wifi_settings(&settings, engine.timeout(TimeoutClass::Mid))
        .await
    {
        Ok(state) => {
            engine.notify(Notification::success("New WiFi settings deployed", ""));
            engine.commit(Mutation::SetWifiState(state));
        }
        Err(e) => engine.notify(
            Notification::error("Error deploying WiFi Settings", CoreError::from(e).to_string())
                .at(Placement::Bottom),
        ),
    }
}

/// Store settings under a template name. No state changes.
pub(super) async fn store(engine: &Engine, request: WifiSettingsStorageRequest) {
    let result = engine
        .client()
        .store_wifi_settings(&request, engine.timeout(TimeoutClass::Default))
        .await;

    if let Err(e) = result {
        engine.notify(
            Notification::error("Error storing WiFi Settings", CoreError::from(e).to_string())
                .at(Placement::Bottom),
        );
        if !engine.config().notify_success_after_error {
            return;
        }
    }

    engine.notify(Notification::success("New WiFi settings stored", ""));
}

/// Fetch stored settings by name into the tree's current WiFi settings.
///
/// On failure nothing is committed; whether the success toast still
/// follows is governed by `notify_success_after_error`.
pub(super) async fn load(engine: &Engine, name: &str) {
    match engine
        .client()
        .get_stored_wifi_settings(name, engine.timeout(TimeoutClass::Default))
        .await
    {
        Ok(settings) => engine.commit(Mutation::SetCurrentWifiSettings(settings)),
        Err(e) => {
            engine.notify(
                Notification::error(
                    "Error fetching stored WiFi Settings",
                    CoreError::from(e).to_string(),
                )
                .at(Placement::Bottom),
            );
            if !engine.config().notify_success_after_error {
                return;
            }
        }
    }

    engine.notify(Notification::success("New WiFi settings loaded", ""));
}
