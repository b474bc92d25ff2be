pub mod catalog;
pub mod config;
pub mod inventory;
pub mod logging;
pub mod model;
pub mod source;
pub mod store;
pub mod ui;
