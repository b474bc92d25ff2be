//! Marker trait for reducer-owned state.

/// State values are plain data: cloneable, comparable so callers can
/// detect changes, and defaultable so a dispatcher can `mem::take` them.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
