use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Last known state of one HID script job, keyed by `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobState {
    pub id: String,
    pub vm_id: i64,
    pub is_running: bool,
    pub has_failed: bool,
    pub has_succeeded: bool,
    pub last_message: String,
    pub result_path: String,
    pub timestamp: DateTime<Utc>,
    pub source_text: String,
}

impl JobState {
    /// Neither succeeded nor failed yet.
    pub fn is_pending(&self) -> bool {
        !(self.has_succeeded || self.has_failed)
    }
}
