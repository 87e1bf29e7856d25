// LogSieve - lib.rs
//
// Library entry point, exposing all modules for integration testing and
// for embedding the parsing/filtering engine in other front ends.
//
// The command-line front end lives in `main.rs`.

pub mod app;
pub mod core;
pub mod platform;
pub mod ui;
pub mod util;
