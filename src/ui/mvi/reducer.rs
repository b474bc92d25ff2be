//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// Transforms a state according to an intent.
///
/// `reduce` is the only place a state changes, and it must stay free of
/// side effects: (State, Intent) -> State.
pub trait Reducer {
    type State: UiState;

    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
