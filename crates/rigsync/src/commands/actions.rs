use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

pub fn handle(global: &GlobalOpts) -> Result<(), CliError> {
    let rendered = output::render_actions(global.output)?;
    output::print_output(&rendered, global.quiet);
    Ok(())
}
