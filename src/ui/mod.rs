// LogSieve - ui/mod.rs
//
// UI layer: presentation only.
// Dependencies: core (read-only models), owo-colors.
// Must NOT depend on: app, platform, direct file I/O.

pub mod console;
pub mod theme;
