//! `rigsync state`: one full fetch, one snapshot.

use crate::cli::GlobalOpts;
use crate::commands::util::Session;
use crate::error::CliError;
use crate::output;

pub async fn handle(global: &GlobalOpts) -> Result<(), CliError> {
    let mut session = Session::connect(global).await?;
    session.settle().await;

    let snapshot = session.engine.state().snapshot();
    session.close().await;

    let rendered = output::render_snapshot(global.output, &snapshot)?;
    output::print_output(&rendered, global.quiet);
    Ok(())
}
