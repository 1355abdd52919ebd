// HID script source: load from / store to the device's script folder.

use tracing::{debug, info};

use rigsync_api::types::AccessibleFolder;

use crate::config::TimeoutClass;
use crate::engine::Engine;
use crate::error::CoreError;
use crate::model::LoadScriptRequest;
use crate::model::script::normalize_script_filename;
use crate::notify::Notification;
use crate::store::Mutation;

/// Download a script and combine it with the text being edited.
///
/// The combination uses the source as it stands when the download
/// completes. An unrecognized mode discards the download.
pub(super) async fn load(engine: &Engine, request: LoadScriptRequest) {
    let fetched = match engine
        .client()
        .download_file(
            AccessibleFolder::HidScripts,
            &request.filename,
            engine.timeout(TimeoutClass::Mid),
        )
        .await
    {
        Ok(content) => content,
        Err(e) => {
            engine.notify(Notification::error(
                format!("Couldn't load HIDScript source {}", request.filename),
                CoreError::from(e).to_string(),
            ));
            return;
        }
    };

    let current = engine.state().script_source();
    match request.mode.combine(&current, &fetched) {
        Some(source) => engine.commit(Mutation::SetCurrentHidScriptSource(source)),
        None => debug!(
            file = %request.filename,
            mode = ?request.mode,
            "unrecognized load mode, download discarded"
        ),
    }
}

/// Upload the current source, overwriting any existing file.
pub(super) async fn store(engine: &Engine, filename: &str) {
    let target = normalize_script_filename(filename);
    let source = engine.state().script_source();

    match engine
        .client()
        .upload_file(
            AccessibleFolder::HidScripts,
            &target,
            &source,
            true,
            engine.timeout(TimeoutClass::Mid),
        )
        .await
    {
        Ok(()) => info!(file = %target, "stored HID script source"),
        Err(e) => engine.notify(Notification::error(
            format!("Couldn't store HIDScript source {target}"),
            CoreError::from(e).to_string(),
        )),
    }
}
