// USB gadget settings: refresh from the device, two-phase deploy.

use tracing::{debug, warn};

use super::guard::DeployGuard;
use crate::config::TimeoutClass;
use crate::engine::Engine;
use crate::error::CoreError;
use crate::model::DeployTarget;
use crate::notify::Notification;
use crate::store::Mutation;

/// Failures are logged only.
pub(super) async fn refresh(engine: &Engine) {
    match engine
        .client()
        .get_deployed_gadget_settings(engine.timeout(TimeoutClass::Short))
        .await
    {
        Ok(settings) => engine.commit(Mutation::SetCurrentGadgetSettings(settings)),
        Err(e) => warn!(error = %e, "couldn't retrieve deployed gadget settings"),
    }
}

/// Stage the tree's current settings (the device validates them), then
/// deploy what was staged. A failed deploy leaves the staged settings
/// in place on the device.
pub(super) async fn deploy_current(engine: &Engine) {
    let _guard = DeployGuard::engage(engine, DeployTarget::Gadget);
    let settings = engine.state().gadget_settings();

    if let Err(e) = engine
        .client()
        .set_gadget_settings(&settings, engine.timeout(TimeoutClass::Short))
        .await
    {
        let e = CoreError::from(e);
        debug!(error = %e, validation = e.is_validation(), "gadget pre-check failed");
        engine.notify(Notification::error(
            "Error in pre-check of new USB gadget settings",
            e.to_string(),
        ));
        return;
    }

    if let Err(e) = engine
        .client()
        .deploy_gadget_settings(engine.timeout(TimeoutClass::Default))
        .await
    {
        let e = CoreError::from(e);
        debug!(error = %e, validation = e.is_validation(), "gadget deploy failed");
        engine.notify(Notification::error(
            "Error while deploying new USB gadget settings",
            e.to_string(),
        ));
        return;
    }

    engine.notify(Notification::success(
        "New Gadget Settings deployed successfully",
        "",
    ));
}
