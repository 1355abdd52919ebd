use rigsync_api::types::EthernetInterfaceSettings;

use crate::config::TimeoutClass;
use crate::engine::Engine;
use crate::error::CoreError;
use crate::notify::Notification;

/// Push one interface's settings. Nothing is committed on success; the
/// tree's interface list only changes at start-up.
pub(super) async fn deploy(engine: &Engine, settings: EthernetInterfaceSettings) {
    if let Err(e) = engine
        .client()
        .deploy_ethernet_interface_settings(&settings, engine.timeout(TimeoutClass::Short))
        .await
    {
        engine.notify(Notification::error(
            "Error deploying ethernet interface settings",
            format!("{}: {}", settings.name, CoreError::from(e)),
        ));
    }
}
