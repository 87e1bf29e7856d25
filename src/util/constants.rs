// LogSieve - util/constants.rs
//
// Single source of truth for named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "LogSieve";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "LogSieve";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Input limits
// =============================================================================

/// Default maximum size of a log file accepted by the reader.
/// The whole document is held in memory, so this bounds peak usage.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 256 * 1024 * 1024; // 256 MiB

/// Smallest user-configurable file size limit.
pub const MIN_MAX_FILE_SIZE: u64 = 1024; // 1 KiB

/// Hard upper bound on the file size limit.
pub const ABSOLUTE_MAX_FILE_SIZE: u64 = 2 * 1024 * 1024 * 1024; // 2 GiB

// =============================================================================
// Messages
// =============================================================================

/// Message shown to the user when a log file cannot be read. The
/// underlying cause is logged separately.
pub const READ_FAILURE_MESSAGE: &str = "An error occurred while reading the file.";

// =============================================================================
// Display defaults
// =============================================================================

/// Width of the line-number gutter when `--line-numbers` is on.
pub const LINE_NUMBER_WIDTH: usize = 6;

// =============================================================================
// Config and logging
// =============================================================================

/// Config file name (in the platform config directory).
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Default tracing filter when neither RUST_LOG, --debug nor config set one.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Accepted `[logging] level` values.
pub const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];
