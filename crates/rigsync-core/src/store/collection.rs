// ── Keyed reactive collection ──
//
// Insertion-ordered map of entities with push-based change notification
// via a `watch` channel of whole-map snapshots.

use std::sync::Arc;

use indexmap::IndexMap;
use tokio::sync::watch;

use crate::stream::StateStream;

pub type CollectionSnapshot<T> = Arc<IndexMap<String, Arc<T>>>;

/// A reactive, string-keyed collection for a single entity type.
///
/// Every mutation publishes a fresh snapshot. Iteration order is
/// insertion order, so snapshots render stably.
pub(crate) struct KeyedCollection<T: Send + Sync + 'static> {
    snapshot: watch::Sender<CollectionSnapshot<T>>,
}

impl<T: Send + Sync + 'static> KeyedCollection<T> {
    pub(crate) fn new() -> Self {
        let (snapshot, _) = watch::channel(Arc::new(IndexMap::new()));
        Self { snapshot }
    }

    /// Insert or update an entity. Returns `true` if the key was new.
    pub(crate) fn upsert(&self, key: String, entity: T) -> bool {
        let mut is_new = false;
        self.snapshot.send_modify(|snap| {
            is_new = Arc::make_mut(snap).insert(key, Arc::new(entity)).is_none();
        });
        is_new
    }

    /// Swap the whole collection for `entities` in one publish.
    ///
    /// Readers observe either the old map or the new one, never a mix.
    pub(crate) fn replace_all(&self, entities: impl IntoIterator<Item = (String, T)>) {
        let next: IndexMap<String, Arc<T>> = entities
            .into_iter()
            .map(|(key, entity)| (key, Arc::new(entity)))
            .collect();
        self.snapshot.send_replace(Arc::new(next));
    }

    pub(crate) fn get(&self, key: &str) -> Option<Arc<T>> {
        self.snapshot.borrow().get(key).cloned()
    }

    #[cfg(test)]
    fn snapshot(&self) -> CollectionSnapshot<T> {
        self.snapshot.borrow().clone()
    }

    /// Current values in insertion order.
    pub(crate) fn values(&self) -> Vec<Arc<T>> {
        self.snapshot.borrow().values().cloned().collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.snapshot.borrow().len()
    }

    pub(crate) fn keys(&self) -> Vec<String> {
        self.snapshot.borrow().keys().cloned().collect()
    }

    pub(crate) fn subscribe(&self) -> StateStream<CollectionSnapshot<T>> {
        StateStream::new(self.snapshot.subscribe())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn upsert_returns_true_for_new_key() {
        let col: KeyedCollection<String> = KeyedCollection::new();
        assert!(col.upsert("key1".into(), "hello".into()));
    }

    #[test]
    fn upsert_returns_false_for_existing_key() {
        let col: KeyedCollection<String> = KeyedCollection::new();
        col.upsert("key1".into(), "hello".into());
        assert!(!col.upsert("key1".into(), "world".into()));
        assert_eq!(*col.get("key1").unwrap(), "world");
    }

    #[test]
    fn upsert_leaves_held_snapshots_alone() {
        let col: KeyedCollection<String> = KeyedCollection::new();
        col.upsert("a".into(), "x".into());
        let before = col.snapshot();

        col.upsert("b".into(), "y".into());

        assert_eq!(before.len(), 1);
        assert_eq!(col.len(), 2);
    }

    #[test]
    fn replace_all_drops_missing_keys() {
        let col: KeyedCollection<u32> = KeyedCollection::new();
        col.upsert("1".into(), 1);
        col.upsert("2".into(), 2);

        col.replace_all([("2".to_owned(), 20), ("3".to_owned(), 30)]);

        assert_eq!(col.keys(), vec!["2", "3"]);
        assert!(col.get("1").is_none());
        assert_eq!(*col.get("2").unwrap(), 20);
    }

    #[test]
    fn values_follow_insertion_order() {
        let col: KeyedCollection<&'static str> = KeyedCollection::new();
        col.upsert("z".into(), "last-key-first");
        col.upsert("a".into(), "first-key-last");

        let values: Vec<_> = col.values().iter().map(|v| **v).collect();
        assert_eq!(values, vec!["last-key-first", "first-key-last"]);
    }
}
