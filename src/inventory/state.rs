//! State owned by the inventory state machine.

use crate::model::Item;
use crate::ui::mvi::UiState;

/// Lifecycle stage of the most recent load attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    /// Nothing has been loaded yet.
    #[default]
    Idle,
    /// A load is in flight.
    Loading,
    /// The last load failed; `error_message` holds the reason.
    Error,
    /// Items are present (from a load or a reset).
    Loaded,
}

/// Transient confirmation shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Saved,
    Undone,
    Reset,
}

impl Notice {
    pub fn text(&self) -> &'static str {
        match self {
            Notice::Saved => "Changes saved.",
            Notice::Undone => "Last change undone.",
            Notice::Reset => "Inventory restored to the original data.",
        }
    }
}

/// Canonical inventory state for one session.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InventoryState {
    /// Items in load order. Edits never reorder them.
    pub items: Vec<Item>,
    pub load_phase: LoadPhase,
    /// Present only while `load_phase` is `Error`.
    pub error_message: Option<String>,
    /// Weak reference by id; may name an item that no longer exists.
    pub selected_id: Option<String>,
    /// Force the next load to fail. Consumed by that load.
    pub pending_force_error: bool,
    pub last_message: Option<Notice>,
    /// Items as they were before the most recent edit.
    pub undo_snapshot: Option<Vec<Item>>,
    /// Set by save/undo, cleared by load/reset. Gates store writes.
    pub persistence_armed: bool,
    /// Token of the most recently started load; older results are stale.
    pub load_generation: u64,
}

impl UiState for InventoryState {}

impl InventoryState {
    pub fn is_loading(&self) -> bool {
        self.load_phase == LoadPhase::Loading
    }

    pub fn can_undo(&self) -> bool {
        self.undo_snapshot.is_some()
    }

    pub fn item(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// The selected item, if the selection still resolves.
    pub fn selected_item(&self) -> Option<&Item> {
        self.selected_id.as_deref().and_then(|id| self.item(id))
    }

    pub fn message_text(&self) -> Option<&'static str> {
        self.last_message.map(|notice| notice.text())
    }
}
