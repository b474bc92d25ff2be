//! Intents processed by the inventory reducer.

use chrono::{DateTime, Utc};

use crate::model::{Item, ItemPatch};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum InventoryIntent {
    /// A load was started under a freshly issued generation.
    LoadStarted { generation: u64 },
    /// A load completed with the collection to show.
    LoadSucceeded { generation: u64, items: Vec<Item> },
    /// A load failed with a user-facing message.
    LoadFailed { generation: u64, message: String },
    Select { id: Option<String> },
    SetForceErrorNextLoad { value: bool },
    /// Apply a validated edit; `at` becomes the item's `updated_at`.
    SaveItem {
        id: String,
        patch: ItemPatch,
        at: DateTime<Utc>,
    },
    ClearMessage,
    /// Replace everything with the reference items.
    Reset { items: Vec<Item> },
    Undo,
}

impl Intent for InventoryIntent {}
