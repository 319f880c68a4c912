//! Terminal front end: the presentation layer around the core state machine.
mod app;
mod commands;
mod effects;
mod logging;
mod presenter;

pub use app::run_app;
