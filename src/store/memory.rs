use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;

use crate::model::Item;
use crate::store::{decode, encode, PersistenceStore, StoreError};

/// In-memory store.
///
/// Holds the serialized value exactly as the file store would, so corrupt
/// values can be injected with [`MemoryStore::set_raw`]. Used for
/// `--ephemeral` sessions and in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    value: Mutex<Option<String>>,
    writes: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw stored value, if any.
    pub fn raw(&self) -> Option<String> {
        self.value.lock().clone()
    }

    /// Overwrite the raw stored value without counting a write.
    pub fn set_raw(&self, raw: impl Into<String>) {
        *self.value.lock() = Some(raw.into());
    }

    /// Number of successful `set` calls so far.
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl PersistenceStore for MemoryStore {
    fn get(&self) -> Option<Vec<Item>> {
        self.value.lock().as_deref().and_then(decode)
    }

    fn set(&self, items: &[Item]) -> Result<(), StoreError> {
        let raw = encode(items)?;
        *self.value.lock() = Some(raw);
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        *self.value.lock() = None;
        Ok(())
    }
}
