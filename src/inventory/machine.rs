//! The inventory state machine.
//!
//! Owns the [`InventoryState`] and drives it through [`InventoryReducer`].
//! Side effects live here, never in the reducer: fetching from the remote
//! source, reading the store on load, clearing it on reset, and writing it
//! whenever user edits have armed persistence.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::catalog::Catalog;
use crate::model::{Item, ItemPatch};
use crate::source::{FetchOptions, RemoteSource, SourceError};
use crate::store::PersistenceStore;
use crate::ui::mvi::Reducer;

use super::intent::InventoryIntent;
use super::reducer::InventoryReducer;
use super::state::InventoryState;

/// Source of "now" for edit timestamps.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Handle for one started load.
///
/// Carries the generation to compare at completion and the fetch options
/// (including the consumed force-error flag).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadTicket {
    pub generation: u64,
    pub options: FetchOptions,
}

/// Owner of the session's inventory state.
pub struct InventoryMachine<S, R> {
    state: InventoryState,
    store: S,
    source: R,
    catalog: Catalog,
    fetch_options: FetchOptions,
    clock: Arc<dyn Clock>,
}

impl<S, R> InventoryMachine<S, R>
where
    S: PersistenceStore,
    R: RemoteSource,
{
    pub fn new(store: S, source: R, catalog: Catalog) -> Self {
        Self {
            state: InventoryState::default(),
            store,
            source,
            catalog,
            fetch_options: FetchOptions::default(),
            clock: Arc::new(SystemClock),
        }
    }

    /// Latency and failure settings used for every fetch.
    pub fn with_fetch_options(mut self, options: FetchOptions) -> Self {
        self.fetch_options = options;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn state(&self) -> &InventoryState {
        &self.state
    }

    pub fn items(&self) -> &[Item] {
        &self.state.items
    }

    pub fn selected_item(&self) -> Option<&Item> {
        self.state.selected_item()
    }

    pub fn can_undo(&self) -> bool {
        self.state.can_undo()
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn source(&self) -> &R {
        &self.source
    }

    /// Load from the remote source, letting stored edits override it.
    pub async fn load(&mut self) {
        let ticket = self.begin_load();
        let result = self.source.fetch(ticket.options).await;
        self.finish_load(ticket, result);
    }

    /// Start a load: enter `Loading` and consume the force-error flag.
    ///
    /// The caller fetches with `ticket.options` and hands the result to
    /// [`finish_load`](Self::finish_load).
    pub fn begin_load(&mut self) -> LoadTicket {
        let force_error = self.state.pending_force_error;
        let generation = self.state.load_generation.wrapping_add(1);
        self.dispatch(InventoryIntent::LoadStarted { generation });
        tracing::info!(generation, force_error, "Inventory load started");
        LoadTicket {
            generation,
            options: self.fetch_options.with_force_error(force_error),
        }
    }

    /// Apply the result of a load started with `ticket`.
    ///
    /// Returns `false` when a newer load (or a reset) has superseded it and
    /// the result was discarded.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<Item>, SourceError>,
    ) -> bool {
        let generation = ticket.generation;
        if generation != self.state.load_generation {
            tracing::debug!(
                generation,
                current = self.state.load_generation,
                "Discarding stale load result"
            );
            return false;
        }

        match result {
            Ok(fetched) => {
                let items = match self.store.get() {
                    Some(stored) => {
                        tracing::info!(
                            count = stored.len(),
                            "Stored inventory overrides fetched data"
                        );
                        stored
                    }
                    None => fetched,
                };
                tracing::info!(generation, count = items.len(), "Inventory loaded");
                self.dispatch(InventoryIntent::LoadSucceeded { generation, items });
            }
            Err(err) => {
                tracing::info!(generation, error = %err, "Inventory load failed");
                self.dispatch(InventoryIntent::LoadFailed {
                    generation,
                    message: err.to_string(),
                });
            }
        }
        true
    }

    /// Apply a validated price/stock edit to the item with `id`.
    ///
    /// Unknown ids leave the state untouched.
    pub fn save_item(&mut self, id: &str, patch: ItemPatch) {
        if self.state.item(id).is_none() {
            tracing::debug!(id, "Save ignored, no such item");
            return;
        }
        tracing::info!(id, price = patch.price(), stock = patch.stock(), "Item saved");
        self.dispatch(InventoryIntent::SaveItem {
            id: id.to_string(),
            patch,
            at: self.clock.now(),
        });
    }

    /// Revert the most recent edit, if there is one.
    pub fn undo(&mut self) {
        if !self.state.can_undo() {
            return;
        }
        tracing::info!("Last edit undone");
        self.dispatch(InventoryIntent::Undo);
    }

    /// Drop stored edits and return to the reference items.
    pub fn reset(&mut self) {
        if let Err(err) = self.store.clear() {
            tracing::warn!(error = %err, "Failed to clear stored inventory");
        }
        tracing::info!(count = self.catalog.len(), "Inventory reset to reference data");
        self.dispatch(InventoryIntent::Reset {
            items: self.catalog.items(),
        });
    }

    pub fn set_selected_id(&mut self, id: Option<String>) {
        self.dispatch(InventoryIntent::Select { id });
    }

    pub fn set_force_error_next_load(&mut self, value: bool) {
        self.dispatch(InventoryIntent::SetForceErrorNextLoad { value });
    }

    pub fn clear_save_message(&mut self) {
        self.dispatch(InventoryIntent::ClearMessage);
    }

    /// Run the reducer, then write the store if the new state calls for it.
    fn dispatch(&mut self, intent: InventoryIntent) {
        let was_armed = self.state.persistence_armed;
        let previous = std::mem::take(&mut self.state);
        let previous_items = previous.items.clone();
        self.state = InventoryReducer::reduce(previous, intent);

        let changed = self.state.items != previous_items || !was_armed;
        if self.state.persistence_armed && !self.state.items.is_empty() && changed {
            self.persist();
        }
    }

    fn persist(&self) {
        match self.store.set(&self.state.items) {
            Ok(()) => tracing::debug!(count = self.state.items.len(), "Inventory persisted"),
            Err(err) => tracing::warn!(error = %err, "Failed to persist inventory"),
        }
    }
}
