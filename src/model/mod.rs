//! Inventory data model.
//!
//! `Item` is the unit of inventory; `ItemPatch` is the validated edit the
//! view layer hands to the state machine.

mod item;
mod patch;

pub use item::{truncate_to_minute, Category, Item};
pub use patch::{FieldError, ItemPatch, PatchErrors};
