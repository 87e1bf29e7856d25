// LogSieve - platform/mod.rs
//
// Platform abstraction layer: file reading and configuration.
// Dependencies: standard library, directories, toml.
// Must NOT depend on: core, app, ui.

pub mod config;
pub mod fs;
