// HID script source helpers: load-combination modes and target
// filename normalization for uploads.

use serde::{Deserialize, Serialize};

/// Source shown in the editor before anything is loaded.
pub const DEFAULT_SCRIPT_SOURCE: &str = "layout('us');\n\
typingSpeed(0, 0);\n\
\n\
press('GUI r');\n\
delay(500);\n\
type('notepad\\n');\n\
delay(1000);\n\
type('Hello from rigsync\\n');\n";

/// How fetched script text combines with the text being edited.
///
/// Decoded from a plain string; anything other than `append`,
/// `prepend` or `replace` becomes [`Unrecognized`](Self::Unrecognized).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ScriptLoadMode {
    Append,
    Prepend,
    Replace,
    Unrecognized(String),
}

impl From<String> for ScriptLoadMode {
    fn from(mode: String) -> Self {
        match mode.as_str() {
            "append" => Self::Append,
            "prepend" => Self::Prepend,
            "replace" => Self::Replace,
            _ => Self::Unrecognized(mode),
        }
    }
}

impl From<ScriptLoadMode> for String {
    fn from(mode: ScriptLoadMode) -> Self {
        match mode {
            ScriptLoadMode::Append => "append".into(),
            ScriptLoadMode::Prepend => "prepend".into(),
            ScriptLoadMode::Replace => "replace".into(),
            ScriptLoadMode::Unrecognized(other) => other,
        }
    }
}

impl ScriptLoadMode {
    /// Combine `fetched` with `existing`.
    ///
    /// Returns `None` for an unrecognized mode: the fetched text is
    /// dropped and the existing text stays as it is.
    pub fn combine(&self, existing: &str, fetched: &str) -> Option<String> {
        match self {
            Self::Append => Some(format!("{existing}{fetched}")),
            Self::Prepend => Some(format!("{fetched}{existing}")),
            Self::Replace => Some(fetched.to_owned()),
            Self::Unrecognized(_) => None,
        }
    }
}

/// Payload of `updateCurrentHidScriptSourceFromRemoteFile`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadScriptRequest {
    pub filename: String,
    pub mode: ScriptLoadMode,
}

/// Append `.js` unless the name already ends in `.js` or `.javascript`
/// (case-insensitive). Only the last path component's extension counts.
pub fn normalize_script_filename(name: &str) -> String {
    let base = name.rsplit('/').next().unwrap_or(name);
    let ext = base.rfind('.').map_or("", |idx| &base[idx..]);

    if ext.eq_ignore_ascii_case(".js") || ext.eq_ignore_ascii_case(".javascript") {
        name.to_owned()
    } else {
        format!("{name}.js")
    }
}
