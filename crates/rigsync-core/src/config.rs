// ── Runtime engine configuration ──
//
// Tuning knobs for reconciliation. The core never reads config files;
// `rigsync-config` (or a test) builds an `EngineConfig` and hands it in.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Timeout class of a remote call. Each reconciler picks one per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeoutClass {
    Short,
    Default,
    Mid,
}

/// Concrete durations for each [`TimeoutClass`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub short: Duration,
    pub default: Duration,
    pub mid: Duration,
}

impl Timeouts {
    pub fn get(&self, class: TimeoutClass) -> Duration {
        match class {
            TimeoutClass::Short => self.short,
            TimeoutClass::Default => self.default,
            TimeoutClass::Mid => self.mid,
        }
    }
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            short: Duration::from_secs(5),
            default: Duration::from_secs(10),
            mid: Duration::from_secs(30),
        }
    }
}

/// How `updateRunningHidJobs` stamps the jobs it fetches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatusMode {
    /// Mark every fetched job not-running with an "initial job state"
    /// placeholder message. Matches what deployed consoles show today.
    #[default]
    Placeholder,
    /// Mark fetched jobs as running, since the device reported them so.
    Live,
}

/// Configuration for one [`Engine`](crate::Engine) instance.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub timeouts: Timeouts,
    pub job_status: JobStatusMode,
    /// When set, `storeWifiSettings` and `loadWifiSettings` emit their
    /// success notification even after the remote call already failed
    /// and an error notification went out.
    pub notify_success_after_error: bool,
}

/// Defaults reproduce the behaviour deployed consoles exhibit.
impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            timeouts: Timeouts::default(),
            job_status: JobStatusMode::Placeholder,
            notify_success_after_error: true,
        }
    }
}
