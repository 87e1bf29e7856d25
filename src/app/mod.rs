// LogSieve - app/mod.rs
//
// Application layer: viewer state and the user actions that change it.
// Dependencies: core, platform, util.
// Must NOT depend on: ui.

pub mod actions;
pub mod state;
