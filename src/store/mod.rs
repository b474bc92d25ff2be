//! Persistence of the edited item collection.
//!
//! A single fixed key holds the whole collection as a JSON array. Reading is
//! forgiving: anything that does not decode to a list of items counts as
//! "nothing stored".

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

use crate::model::Item;

/// Key under which the collection is stored.
pub const STORAGE_KEY: &str = "inventory_items_v1";

/// Errors raised by store writes.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to write store file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to remove store file '{path}': {source}")]
    ClearError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize items: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Key-value persistence for the item collection.
pub trait PersistenceStore: Send + Sync {
    /// Previously stored collection, or `None` when absent or unreadable.
    fn get(&self) -> Option<Vec<Item>>;

    /// Replace the stored collection.
    fn set(&self, items: &[Item]) -> Result<(), StoreError>;

    /// Remove the stored collection. Clearing an empty store is not an error.
    fn clear(&self) -> Result<(), StoreError>;
}

impl<T: PersistenceStore + ?Sized> PersistenceStore for Arc<T> {
    fn get(&self) -> Option<Vec<Item>> {
        (**self).get()
    }

    fn set(&self, items: &[Item]) -> Result<(), StoreError> {
        (**self).set(items)
    }

    fn clear(&self) -> Result<(), StoreError> {
        (**self).clear()
    }
}

/// Serialize a collection to its stored form.
pub fn encode(items: &[Item]) -> Result<String, StoreError> {
    Ok(serde_json::to_string(items)?)
}

/// Decode a stored value. Malformed JSON, a non-array value, or elements
/// that are not items all yield `None`.
pub fn decode(raw: &str) -> Option<Vec<Item>> {
    let value: serde_json::Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(err) => {
            tracing::debug!(error = %err, "Stored inventory is not valid JSON, ignoring");
            return None;
        }
    };
    if !value.is_array() {
        tracing::debug!("Stored inventory is not an array, ignoring");
        return None;
    }
    match serde_json::from_value(value) {
        Ok(items) => Some(items),
        Err(err) => {
            tracing::debug!(error = %err, "Stored inventory has malformed items, ignoring");
            None
        }
    }
}
