//! Output formatting: tables and JSON.
//!
//! Renders state snapshots in the format selected by `--output`. Tables
//! use `tabled`, structured formats use serde. Notifications go to stderr
//! so stdout stays parseable.

use std::io::{self, IsTerminal, Write};

use owo_colors::OwoColorize;
use serde::Serialize;
use strum::IntoEnumIterator;
use tabled::{Table, Tabled, settings::Style};

use rigsync_core::{ActionName, JobState, Notification, Severity, StateSnapshot};

use crate::cli::{ColorMode, OutputFormat};
use crate::error::CliError;

// ── Color helpers ────────────────────────────────────────────────────

/// Determine whether color output should be enabled.
pub fn should_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => io::stderr().is_terminal() && std::env::var("NO_COLOR").is_err(),
    }
}

// ── Rows ─────────────────────────────────────────────────────────────

#[derive(Tabled)]
struct FieldRow {
    #[tabled(rename = "Field")]
    field: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

#[derive(Tabled)]
struct InterfaceRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Enabled")]
    enabled: bool,
    #[tabled(rename = "Mode")]
    mode: String,
    #[tabled(rename = "Address")]
    address: String,
}

#[derive(Tabled)]
struct TriggerActionRow {
    #[tabled(rename = "ID")]
    id: u32,
    #[tabled(rename = "Active")]
    active: bool,
    #[tabled(rename = "Trigger")]
    trigger: String,
    #[tabled(rename = "Action")]
    action: String,
}

#[derive(Tabled)]
struct JobRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "VM")]
    vm: i64,
    #[tabled(rename = "State")]
    state: &'static str,
    #[tabled(rename = "Message")]
    message: String,
}

#[derive(Tabled, Serialize)]
struct ActionRow {
    #[tabled(rename = "Action")]
    name: &'static str,
    #[tabled(rename = "Payload")]
    #[serde(rename = "takesPayload")]
    takes_payload: bool,
}

fn job_state_label(job: &JobState) -> &'static str {
    if job.has_failed {
        "failed"
    } else if job.has_succeeded {
        "succeeded"
    } else if job.is_running {
        "running"
    } else {
        "pending"
    }
}

// ── Render dispatchers ───────────────────────────────────────────────

/// Render a full state snapshot.
pub fn render_snapshot(format: OutputFormat, snap: &StateSnapshot) -> Result<String, CliError> {
    match format {
        OutputFormat::Table => Ok(snapshot_tables(snap)),
        OutputFormat::Json => render_json(snap, false),
        OutputFormat::JsonCompact => render_json(snap, true),
    }
}

/// Render the dispatchable action vocabulary.
pub fn render_actions(format: OutputFormat) -> Result<String, CliError> {
    let rows: Vec<ActionRow> = ActionName::iter()
        .map(|name| ActionRow {
            name: name.into(),
            takes_payload: name.takes_payload(),
        })
        .collect();

    match format {
        OutputFormat::Table => Ok(render_table(&rows)),
        OutputFormat::Json => render_json(&rows, false),
        OutputFormat::JsonCompact => render_json(&rows, true),
    }
}

/// Print the rendered output to stdout, respecting quiet mode.
pub fn print_output(output: &str, quiet: bool) {
    if quiet || output.is_empty() {
        return;
    }
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{output}");
}

/// Print one notification to stderr.
///
/// Errors always print; successes are dropped in quiet mode.
pub fn print_notification(n: &Notification, color: bool, quiet: bool) {
    if quiet && !n.is_error() {
        return;
    }

    let marker = match (n.severity, color) {
        (Severity::Success, true) => "ok".green().to_string(),
        (Severity::Error, true) => "error".red().bold().to_string(),
        (Severity::Success, false) => "ok".to_string(),
        (Severity::Error, false) => "error".to_string(),
    };
    let mut stderr = io::stderr().lock();
    if n.detail.is_empty() {
        let _ = writeln!(stderr, "[{marker}] {}", n.title);
    } else {
        let _ = writeln!(stderr, "[{marker}] {}: {}", n.title, n.detail);
    }
}

// ── Format-specific renderers ────────────────────────────────────────

fn render_table<R: Tabled>(rows: &[R]) -> String {
    Table::new(rows).with(Style::rounded()).to_string()
}

fn render_json<T: Serialize + ?Sized>(data: &T, compact: bool) -> Result<String, CliError> {
    let rendered = if compact {
        serde_json::to_string(data)?
    } else {
        serde_json::to_string_pretty(data)?
    };
    Ok(rendered)
}

fn section(out: &mut String, title: &str, body: &str) {
    if !out.is_empty() {
        out.push('\n');
    }
    out.push_str(title);
    out.push('\n');
    out.push_str(body);
    out.push('\n');
}

fn joined(names: &[String]) -> String {
    if names.is_empty() {
        "-".into()
    } else {
        names.join(", ")
    }
}

fn snapshot_tables(snap: &StateSnapshot) -> String {
    let mut out = String::new();

    let gadget = &snap.gadget_settings;
    let functions: Vec<&str> = [
        (gadget.use_cdc_ecm, "cdc-ecm"),
        (gadget.use_rndis, "rndis"),
        (gadget.use_hid_keyboard, "keyboard"),
        (gadget.use_hid_mouse, "mouse"),
        (gadget.use_hid_raw, "hid-raw"),
        (gadget.use_ums, "ums"),
        (gadget.use_serial, "serial"),
    ]
    .into_iter()
    .filter_map(|(on, name)| on.then_some(name))
    .collect();
    let gadget_rows = vec![
        FieldRow {
            field: "enabled",
            value: gadget.enabled.to_string(),
        },
        FieldRow {
            field: "vid:pid",
            value: format!("{}:{}", gadget.vid, gadget.pid),
        },
        FieldRow {
            field: "product",
            value: format!("{} {}", gadget.manufacturer, gadget.product),
        },
        FieldRow {
            field: "functions",
            value: if functions.is_empty() {
                "-".into()
            } else {
                functions.join(", ")
            },
        },
        FieldRow {
            field: "deploying",
            value: snap.flags.deploying_gadget.to_string(),
        },
    ];
    section(&mut out, "Gadget", &render_table(&gadget_rows));

    let wifi = &snap.wifi_state;
    let wifi_rows = vec![
        FieldRow {
            field: "mode",
            value: format!("{:?}", wifi.working_mode),
        },
        FieldRow {
            field: "ssid",
            value: wifi.ssid.clone(),
        },
        FieldRow {
            field: "channel",
            value: wifi.channel.to_string(),
        },
        FieldRow {
            field: "deploying",
            value: snap.flags.deploying_wifi.to_string(),
        },
    ];
    section(&mut out, "WiFi", &render_table(&wifi_rows));

    let interfaces: Vec<InterfaceRow> = snap
        .interface_settings
        .iter()
        .map(|i| InterfaceRow {
            name: i.name.clone(),
            enabled: i.enabled,
            mode: format!("{:?}", i.mode),
            address: format!("{}/{}", i.ipv4_address, i.netmask),
        })
        .collect();
    section(&mut out, "Interfaces", &render_table(&interfaces));

    let trigger_actions: Vec<TriggerActionRow> = snap
        .trigger_actions
        .iter()
        .map(|ta| TriggerActionRow {
            id: ta.id,
            active: ta.is_active,
            trigger: ta.trigger.kind.clone(),
            action: ta.action.kind.clone(),
        })
        .collect();
    section(&mut out, "Trigger actions", &render_table(&trigger_actions));

    let jobs: Vec<JobRow> = snap
        .hid_jobs
        .iter()
        .map(|job| JobRow {
            id: job.id.clone(),
            vm: job.vm_id,
            state: job_state_label(job),
            message: job.last_message.clone(),
        })
        .collect();
    section(&mut out, "HID jobs", &render_table(&jobs));

    let lists = &snap.stored_lists;
    let stored_rows = vec![
        FieldRow {
            field: "wifi",
            value: joined(&lists.wifi),
        },
        FieldRow {
            field: "trigger action sets",
            value: joined(&lists.trigger_action_sets),
        },
        FieldRow {
            field: "bash scripts",
            value: joined(&lists.bash_scripts),
        },
        FieldRow {
            field: "hid scripts",
            value: joined(&lists.hid_scripts),
        },
    ];
    section(&mut out, "Stored", &render_table(&stored_rows));

    out.push_str(&format!(
        "\nrevision {}, script {} bytes",
        snap.revision,
        snap.script_source.len()
    ));
    out
}
