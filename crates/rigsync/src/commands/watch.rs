//! `rigsync watch`: follow the state tree until interrupted.

use crate::cli::GlobalOpts;
use crate::commands::util::Session;
use crate::error::CliError;
use crate::output;

pub async fn handle(global: &GlobalOpts) -> Result<(), CliError> {
    let mut session = Session::connect(global).await?;
    let state = session.engine.state().clone();
    let mut revisions = state.subscribe();
    output::print_output(
        &output::render_snapshot(global.output, &state.snapshot())?,
        global.quiet,
    );

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            _ = &mut ctrl_c => {
                tracing::debug!("interrupted");
                break;
            }
            Some(n) = session.next_notification() => session.print(&n),
            changed = revisions.changed() => {
                if changed.is_none() {
                    break;
                }
                let rendered = output::render_snapshot(global.output, &state.snapshot())?;
                output::print_output(&rendered, global.quiet);
            }
        }
    }

    session.close().await;
    Ok(())
}
