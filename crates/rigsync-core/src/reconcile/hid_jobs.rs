use tracing::{debug, warn};

use crate::config::TimeoutClass;
use crate::convert::job_state_from_running;
use crate::engine::Engine;
use crate::store::Mutation;

/// Upsert every job the device lists as running. Jobs missing from the
/// listing are kept. Failures are logged only.
pub(super) async fn refresh(engine: &Engine) {
    let jobs = match engine
        .client()
        .get_running_hid_jobs(engine.timeout(TimeoutClass::Default))
        .await
    {
        Ok(jobs) => jobs,
        Err(e) => {
            warn!(error = %e, "couldn't retrieve state of running HID jobs");
            return;
        }
    };

    let mode = engine.config().job_status;
    debug!(count = jobs.len(), ?mode, "updating running HID jobs");
    for job in &jobs {
        engine.commit(Mutation::UpsertHidJob(job_state_from_running(job, mode)));
    }
}
