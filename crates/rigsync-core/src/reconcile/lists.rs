// Stored name lists, one refresh per device store.

use tracing::warn;

use crate::config::TimeoutClass;
use crate::engine::Engine;
use crate::model::StoredListKind;
use crate::store::Mutation;

/// Replace the list for `kind` with the device's, in device order.
/// Failures are logged only.
pub(super) async fn refresh(engine: &Engine, kind: StoredListKind) {
    let client = engine.client();
    let timeout = engine.timeout(TimeoutClass::Default);

    let result = match kind {
        StoredListKind::WifiSettings => client.list_stored_wifi_settings(timeout).await,
        StoredListKind::TriggerActionSets => client.list_stored_trigger_action_sets(timeout).await,
        StoredListKind::BashScripts => client.list_stored_bash_scripts(timeout).await,
        StoredListKind::HidScripts => client.list_stored_hid_scripts(timeout).await,
    };

    match result {
        Ok(names) => engine.commit(Mutation::stored_list(kind, names)),
        Err(e) => warn!(list = %kind, error = %e, "couldn't retrieve stored list"),
    }
}
