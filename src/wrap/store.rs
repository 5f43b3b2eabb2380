//! Side table from wrapper identity to wrap metadata.
//!
//! Entries are keyed by [`FunctionId`] and owned by a [`Registration`]
//! guard that lives inside the wrapper itself. Dropping the wrapper drops
//! the guard, which removes the entry, so the table never keeps a wrapper
//! (or its metadata) alive on its own.

use std::sync::{Arc, Weak};

use parking_lot::Mutex;

use super::metadata::WrapMetadata;
use crate::value::{Function, FunctionId};

#[cfg(feature = "fxhash")]
type EntryMap = rustc_hash::FxHashMap<FunctionId, Arc<WrapMetadata>>;

#[cfg(not(feature = "fxhash"))]
type EntryMap = std::collections::HashMap<FunctionId, Arc<WrapMetadata>>;

type Entries = Mutex<EntryMap>;

/// Wrapper metadata indexed by wrapper identity.
#[derive(Clone, Default)]
pub(crate) struct MetadataStore {
    entries: Arc<Entries>,
}

impl MetadataStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Metadata recorded for `function`, if it is a live wrapper.
    pub(crate) fn get(&self, function: &Function) -> Option<Arc<WrapMetadata>> {
        self.entries.lock().get(&function.id()).cloned()
    }

    /// Records `metadata` for the wrapper that will carry `id`.
    ///
    /// The entry lasts as long as the returned guard.
    pub(crate) fn set(&self, id: FunctionId, metadata: Arc<WrapMetadata>) -> Registration {
        self.entries.lock().insert(id, metadata);
        tracing::trace!(wrapper = %id, "registered wrap metadata");
        Registration {
            entries: Arc::downgrade(&self.entries),
            id,
        }
    }

    /// Number of live entries.
    pub(crate) fn len(&self) -> usize {
        self.entries.lock().len()
    }
}

/// Keeps one store entry alive; removes it on drop.
pub(crate) struct Registration {
    entries: Weak<Entries>,
    id: FunctionId,
}

impl Drop for Registration {
    fn drop(&mut self) {
        if let Some(entries) = self.entries.upgrade() {
            // The lock guard is a temporary of this statement; the removed
            // metadata (which may own other wrappers) is dropped after it.
            let removed = entries.lock().remove(&self.id);
            drop(removed);
            tracing::trace!(wrapper = %self.id, "released wrap metadata");
        }
    }
}
