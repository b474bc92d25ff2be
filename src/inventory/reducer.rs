//! Reducer for the inventory state machine.

use crate::model::truncate_to_minute;
use crate::ui::mvi::Reducer;

use super::intent::InventoryIntent;
use super::state::{InventoryState, LoadPhase, Notice};

/// Pure transitions for [`InventoryState`].
pub struct InventoryReducer;

impl Reducer for InventoryReducer {
    type State = InventoryState;
    type Intent = InventoryIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            InventoryIntent::LoadStarted { generation } => InventoryState {
                load_phase: LoadPhase::Loading,
                error_message: None,
                last_message: None,
                // Single-shot: the started load has already read the flag.
                pending_force_error: false,
                load_generation: generation,
                ..state
            },

            InventoryIntent::LoadSucceeded { generation, items } => {
                if generation != state.load_generation {
                    return state;
                }
                InventoryState {
                    items,
                    load_phase: LoadPhase::Loaded,
                    error_message: None,
                    persistence_armed: false,
                    ..state
                }
            }

            InventoryIntent::LoadFailed {
                generation,
                message,
            } => {
                if generation != state.load_generation {
                    return state;
                }
                InventoryState {
                    load_phase: LoadPhase::Error,
                    error_message: Some(message),
                    ..state
                }
            }

            InventoryIntent::Select { id } => InventoryState {
                selected_id: id,
                ..state
            },

            InventoryIntent::SetForceErrorNextLoad { value } => InventoryState {
                pending_force_error: value,
                ..state
            },

            InventoryIntent::SaveItem { id, patch, at } => {
                if state.item(&id).is_none() {
                    return state;
                }
                let updated_at = truncate_to_minute(at);
                let next_items = state
                    .items
                    .iter()
                    .map(|item| {
                        if item.id != id {
                            return item.clone();
                        }
                        let mut item = item.clone();
                        item.price = patch.price();
                        item.stock = patch.stock();
                        item.updated_at = updated_at;
                        item
                    })
                    .collect();
                let previous = state.items;
                InventoryState {
                    items: next_items,
                    undo_snapshot: Some(previous),
                    last_message: Some(Notice::Saved),
                    persistence_armed: true,
                    ..state
                }
            }

            InventoryIntent::ClearMessage => InventoryState {
                last_message: None,
                ..state
            },

            InventoryIntent::Reset { items } => InventoryState {
                items,
                selected_id: None,
                error_message: None,
                load_phase: LoadPhase::Loaded,
                undo_snapshot: None,
                last_message: Some(Notice::Reset),
                persistence_armed: false,
                // Whatever load was in flight no longer applies.
                load_generation: state.load_generation.wrapping_add(1),
                ..state
            },

            InventoryIntent::Undo => match state.undo_snapshot {
                Some(snapshot) => InventoryState {
                    items: snapshot,
                    undo_snapshot: None,
                    last_message: Some(Notice::Undone),
                    persistence_armed: true,
                    ..state
                },
                None => InventoryState {
                    undo_snapshot: None,
                    ..state
                },
            },
        }
    }
}
