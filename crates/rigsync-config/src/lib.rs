//! Shared configuration for rigsync tools.
//!
//! A TOML file merged with `RIGSYNC_*` environment variables, and
//! translation to `rigsync_core::EngineConfig` and
//! `rigsync_api::TransportConfig`.

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use rigsync_api::TransportConfig;
use rigsync_core::{EngineConfig, JobStatusMode, Timeouts};

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub device: DeviceSection,

    #[serde(default)]
    pub timeouts: TimeoutSection,

    #[serde(default)]
    pub behavior: BehaviorSection,
}

/// Where the device's RPC endpoint lives.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DeviceSection {
    /// Base URL of the device (e.g., "http://172.16.0.1:8000").
    #[serde(default = "default_url")]
    pub url: String,

    /// Bearer token, if the device requires one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// TCP connect timeout in seconds.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
}

impl Default for DeviceSection {
    fn default() -> Self {
        Self {
            url: default_url(),
            token: None,
            connect_timeout_secs: default_connect_timeout(),
        }
    }
}

fn default_url() -> String {
    "http://172.16.0.1:8000".into()
}
fn default_connect_timeout() -> u64 {
    5
}

/// Per-class call timeouts, in seconds.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TimeoutSection {
    #[serde(default = "default_short")]
    pub short_secs: u64,
    #[serde(default = "default_default")]
    pub default_secs: u64,
    #[serde(default = "default_mid")]
    pub mid_secs: u64,
}

impl Default for TimeoutSection {
    fn default() -> Self {
        Self {
            short_secs: default_short(),
            default_secs: default_default(),
            mid_secs: default_mid(),
        }
    }
}

fn default_short() -> u64 {
    5
}
fn default_default() -> u64 {
    10
}
fn default_mid() -> u64 {
    30
}

/// Reconciliation behaviour switches.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BehaviorSection {
    #[serde(default)]
    pub job_status: JobStatusMode,

    #[serde(default = "default_true")]
    pub notify_success_after_error: bool,
}

impl Default for BehaviorSection {
    fn default() -> Self {
        Self {
            job_status: JobStatusMode::default(),
            notify_success_after_error: true,
        }
    }
}

fn default_true() -> bool {
    true
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "rigsync", "rigsync").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("rigsync");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load from the canonical path plus environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load from `path` plus environment. A missing file yields defaults.
///
/// Environment variables use `__` between section and key, e.g.
/// `RIGSYNC_DEVICE__URL` or `RIGSYNC_TIMEOUTS__MID_SECS`. The CLI's own
/// flag variables (`RIGSYNC_DEVICE`, `RIGSYNC_CONFIG_FILE`) are skipped.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(
            Env::prefixed("RIGSYNC_")
                .ignore(&["device", "config_file"])
                .split("__"),
        );

    let config: Config = figment.extract()?;
    config.validate()?;
    Ok(config)
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML.
pub fn render_config(cfg: &Config) -> Result<String, ConfigError> {
    Ok(toml::to_string_pretty(cfg)?)
}

/// Write config as TOML to `path`, creating parent directories.
pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, render_config(cfg)?)?;
    Ok(())
}

// ── Translation ─────────────────────────────────────────────────────

impl Config {
    /// Reject values the engine cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.device_url()?;

        for (field, secs) in [
            ("timeouts.short_secs", self.timeouts.short_secs),
            ("timeouts.default_secs", self.timeouts.default_secs),
            ("timeouts.mid_secs", self.timeouts.mid_secs),
            ("device.connect_timeout_secs", self.device.connect_timeout_secs),
        ] {
            if secs == 0 {
                return Err(ConfigError::Validation {
                    field: field.into(),
                    reason: "must be greater than zero".into(),
                });
            }
        }
        Ok(())
    }

    pub fn device_url(&self) -> Result<Url, ConfigError> {
        let url = Url::parse(&self.device.url).map_err(|e| ConfigError::Validation {
            field: "device.url".into(),
            reason: e.to_string(),
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::Validation {
                field: "device.url".into(),
                reason: format!("unsupported scheme '{}'", url.scheme()),
            });
        }
        Ok(url)
    }

    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            timeouts: Timeouts {
                short: Duration::from_secs(self.timeouts.short_secs),
                default: Duration::from_secs(self.timeouts.default_secs),
                mid: Duration::from_secs(self.timeouts.mid_secs),
            },
            job_status: self.behavior.job_status,
            notify_success_after_error: self.behavior.notify_success_after_error,
        }
    }

    pub fn transport_config(&self) -> Result<TransportConfig, ConfigError> {
        let mut transport = TransportConfig::new(self.device_url()?);
        transport.token = self.device.token.clone().map(SecretString::from);
        transport.connect_timeout = Duration::from_secs(self.device.connect_timeout_secs);
        Ok(transport)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;
    use secrecy::ExposeSecret;

    use super::*;

    fn write_config(body: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(body.as_bytes()).unwrap();
        file
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.engine_config().timeouts, Timeouts::default());
    }

    #[test]
    fn file_values_override_defaults() {
        let file = write_config(
            r#"
            [device]
            url = "http://10.0.0.2:9000"
            token = "s3cret"

            [timeouts]
            mid_secs = 60

            [behavior]
            job_status = "live"
            notify_success_after_error = false
            "#,
        );

        let config = load_config_from(file.path()).unwrap();
        let engine = config.engine_config();
        assert_eq!(engine.timeouts.mid, Duration::from_secs(60));
        assert_eq!(engine.timeouts.short, Duration::from_secs(5));
        assert_eq!(engine.job_status, JobStatusMode::Live);
        assert!(!engine.notify_success_after_error);

        let transport = config.transport_config().unwrap();
        assert_eq!(transport.base_url.as_str(), "http://10.0.0.2:9000/");
        assert_eq!(transport.token.unwrap().expose_secret(), "s3cret");
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let file = write_config("[timeouts]\nshort_secs = 0\n");
        let err = load_config_from(file.path()).unwrap_err();
        assert!(
            matches!(&err, ConfigError::Validation { field, .. } if field == "timeouts.short_secs"),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn bad_url_is_rejected() {
        let file = write_config("[device]\nurl = \"ftp://rig\"\n");
        let err = load_config_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Validation { .. }));
    }

    #[test]
    fn saved_config_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let mut config = Config::default();
        config.device.url = "https://rig.local".into();

        save_config_to(&config, &path).unwrap();

        assert_eq!(load_config_from(&path).unwrap(), config);
    }
}
