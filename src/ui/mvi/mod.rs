//! Model-View-Intent (MVI) primitives.
//!
//! Every piece of stateful UI (and the inventory core itself) is a
//! state value plus a pure reducer over intents:
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Side effects (fetching, persisting) stay with whoever dispatches.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
