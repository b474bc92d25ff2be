//! Inventory state machine.
//!
//! ```text
//! View ──op──→ InventoryMachine ──intent──→ InventoryReducer ──→ InventoryState
//!                  │        ▲
//!        fetch/get │        │ result (tagged with load generation)
//!                  ▼        │
//!          RemoteSource / PersistenceStore
//! ```
//!
//! Only the most recently started load may apply its result; every other
//! completion is discarded by generation.

mod intent;
mod machine;
mod reducer;
mod state;

pub use intent::InventoryIntent;
pub use machine::{Clock, InventoryMachine, LoadTicket, SystemClock};
pub use reducer::InventoryReducer;
pub use state::{InventoryState, LoadPhase, Notice};
