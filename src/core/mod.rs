// LogSieve - core/mod.rs
//
// Core business logic layer: classification, parsing, category registry,
// default settings and filtering.
// Must NOT depend on: ui, platform, app, or any I/O crate directly.

pub mod export;
pub mod filter;
pub mod model;
pub mod parser;
pub mod registry;
pub mod settings;
