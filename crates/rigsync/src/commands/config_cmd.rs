use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::commands::util;
use crate::error::CliError;
use crate::output;

pub fn handle(args: &ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Path => {
            let path = global
                .config
                .clone()
                .unwrap_or_else(rigsync_config::config_path);
            output::print_output(&path.display().to_string(), global.quiet);
        }
        ConfigCommand::Show => {
            let cfg = util::resolve_config(global)?;
            let rendered = rigsync_config::render_config(&cfg)?;
            output::print_output(rendered.trim_end(), global.quiet);
        }
    }
    Ok(())
}
