//! Marker trait for intents.

/// Something that happened: a key press, a finished load, a timer.
///
/// Reducers consume intents to produce the next state.
pub trait Intent: Send + 'static {}
