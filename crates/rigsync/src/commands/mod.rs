//! Command handlers, one module per subcommand.

pub mod actions;
pub mod config_cmd;
pub mod dispatch;
pub mod state;
pub mod util;
pub mod watch;
