//! Clap derive structures for the `rigsync` CLI.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// rigsync -- console for USB gadget rigs
#[derive(Debug, Parser)]
#[command(
    name = "rigsync",
    version,
    about = "Mirror and drive a USB gadget rig from the command line",
    long_about = "Mirror and drive a USB gadget rig from the command line.\n\n\
        Connects to a rig's RPC endpoint, mirrors its gadget, WiFi, trigger-action\n\
        and HID script state, and dispatches console actions by name.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Device base URL (overrides the config file)
    #[arg(long, short = 'd', env = "RIGSYNC_DEVICE", global = true)]
    pub device: Option<String>,

    /// Config file to load instead of the default location
    #[arg(long, env = "RIGSYNC_CONFIG_FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, short = 'o', default_value = "table", global = true)]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tables (default)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the action names `dispatch` accepts
    Actions,

    /// Fetch the device's state and print a snapshot
    State,

    /// Dispatch one action and print the resulting state
    #[command(alias = "run")]
    Dispatch(DispatchArgs),

    /// Print a snapshot after every state change until interrupted
    Watch,

    /// Inspect configuration
    Config(ConfigArgs),
}

#[derive(Debug, Args)]
pub struct DispatchArgs {
    /// Action name, e.g. updateStoredWifiSettingsList
    pub action: String,

    /// JSON payload for actions that take one
    #[arg(long, short = 'p')]
    pub payload: Option<String>,
}

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the config file location
    Path,
    /// Print the effective configuration as TOML
    Show,
}
