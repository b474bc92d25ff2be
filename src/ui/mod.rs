//! Terminal front end: a table over the inventory with filters, a detail
//! dialog for edits and a status panel for load progress.

pub mod app;
pub mod detail;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod search;
pub mod terminal_guard;
pub mod theme;
pub mod view;

pub use runtime::run;
