// Library root: re-exports all modules so integration tests can `use tubegrid::*`.

pub mod action;
pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod embed;
pub mod format;
pub mod logging;
pub mod theme;
pub mod tui;
pub mod ui;
