// ── Wire-to-domain conversions ──
//
// Bridges `rigsync_api` response types into the local shapes held by
// the state tree.

use chrono::Utc;

use rigsync_api::types::RunningHidJob;

use crate::config::JobStatusMode;
use crate::model::JobState;

/// Registry entry for a job reported by the running-jobs listing.
///
/// In [`JobStatusMode::Placeholder`] every listed job is stamped as an
/// idle "initial job state", matching what deployed consoles show. In
/// [`JobStatusMode::Live`] a listed job is recorded as running.
pub fn job_state_from_running(job: &RunningHidJob, mode: JobStatusMode) -> JobState {
    let (is_running, last_message) = match mode {
        JobStatusMode::Placeholder => (false, "initial job state"),
        JobStatusMode::Live => (true, "running"),
    };

    JobState {
        id: job.id.to_string(),
        vm_id: job.vm_id,
        is_running,
        has_failed: false,
        has_succeeded: false,
        last_message: last_message.to_owned(),
        result_path: String::new(),
        timestamp: Utc::now(),
        source_text: job.source.clone(),
    }
}
