// ── Reactive state tree ──
//
// Single observable root for everything mirrored from the device.
// Mutations are broadcast to subscribers via `watch` channels.

mod collection;
mod commit;
mod observable;
mod state_tree;

pub use collection::CollectionSnapshot;
pub use commit::Mutation;
pub use state_tree::{StateSnapshot, StateTree, StoredLists};
