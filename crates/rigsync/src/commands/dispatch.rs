//! `rigsync dispatch`: run one named action against the device.

use serde_json::Value;

use rigsync_core::Action;

use crate::cli::{DispatchArgs, GlobalOpts};
use crate::commands::util::Session;
use crate::error::CliError;
use crate::output;

/// Decode the name and payload without touching the device.
pub fn parse_action(args: &DispatchArgs) -> Result<Action, CliError> {
    let payload = args
        .payload
        .as_deref()
        .map(serde_json::from_str::<Value>)
        .transpose()
        .map_err(|e| CliError::InvalidPayload {
            action: args.action.clone(),
            reason: format!("not valid JSON: {e}"),
        })?;

    Ok(Action::from_named(&args.action, payload)?)
}

pub async fn handle(args: DispatchArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let action = parse_action(&args)?;

    let mut session = Session::connect(global).await?;
    session.settle().await;

    tracing::info!(action = %action.name(), "dispatching");
    session.engine.dispatch(action);
    let failures = session.settle().await;

    let snapshot = session.engine.state().snapshot();
    session.close().await;

    let rendered = output::render_snapshot(global.output, &snapshot)?;
    output::print_output(&rendered, global.quiet);

    if failures > 0 {
        return Err(CliError::ActionFailed {
            action: args.action,
            failures,
        });
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rigsync_core::ActionName;

    use super::*;

    fn args(action: &str, payload: Option<&str>) -> DispatchArgs {
        DispatchArgs {
            action: action.into(),
            payload: payload.map(Into::into),
        }
    }

    #[test]
    fn payload_free_action_parses() {
        let action = parse_action(&args("updateStoredBashScriptsList", None)).unwrap();
        assert_eq!(action.name(), ActionName::UpdateStoredBashScriptsList);
    }

    #[test]
    fn malformed_json_is_rejected_before_connecting() {
        let err = parse_action(&args("loadWifiSettings", Some("{home"))).unwrap_err();
        assert!(matches!(err, CliError::InvalidPayload { ref action, .. } if action == "loadWifiSettings"));
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = parse_action(&args("rebootEverything", None)).unwrap_err();
        assert!(matches!(err, CliError::UnknownAction { .. }));
    }
}
