use crate::engine::Engine;
use crate::model::DeployTarget;
use crate::store::Mutation;

/// Raises a deploy flag for as long as it lives.
///
/// The flag drops back to `false` on every exit path, including early
/// returns and cancellation of the owning task. It only drives UI state;
/// concurrent deploys of the same target are not blocked.
pub(super) struct DeployGuard<'a> {
    engine: &'a Engine,
    target: DeployTarget,
}

impl<'a> DeployGuard<'a> {
    pub(super) fn engage(engine: &'a Engine, target: DeployTarget) -> Self {
        engine.commit(Mutation::SetDeploying {
            target,
            active: true,
        });
        Self { engine, target }
    }
}

impl Drop for DeployGuard<'_> {
    fn drop(&mut self) {
        self.engine.commit(Mutation::SetDeploying {
            target: self.target,
            active: false,
        });
    }
}
