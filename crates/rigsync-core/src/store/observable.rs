// ── Single-value reactive cell ──

use std::sync::Arc;

use tokio::sync::watch;

use crate::stream::StateStream;

/// A reactive cell holding one value behind an `Arc` snapshot.
///
/// Readers get the current `Arc` without blocking writers; every write
/// replaces the snapshot and wakes subscribers, even when nobody is
/// listening yet.
pub(crate) struct Observable<T: Clone + Send + Sync + 'static> {
    sender: watch::Sender<Arc<T>>,
}

impl<T: Clone + Send + Sync + 'static> Observable<T> {
    pub(crate) fn new(initial: T) -> Self {
        let (sender, _) = watch::channel(Arc::new(initial));
        Self { sender }
    }

    pub(crate) fn get(&self) -> Arc<T> {
        self.sender.borrow().clone()
    }

    pub(crate) fn set(&self, value: T) {
        self.sender.send_replace(Arc::new(value));
    }

    /// Edit in place, cloning only if a reader still holds the old snapshot.
    pub(crate) fn modify(&self, edit: impl FnOnce(&mut T)) {
        self.sender.send_modify(|current| edit(Arc::make_mut(current)));
    }

    pub(crate) fn subscribe(&self) -> StateStream<Arc<T>> {
        StateStream::new(self.sender.subscribe())
    }
}
