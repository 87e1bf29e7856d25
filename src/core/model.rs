// LogSieve - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies.
//
// These types are the shared vocabulary across all layers.

use serde::{Deserialize, Serialize};

/// Category assigned to lines that carry no `Name:` prefix.
pub const NO_LOG_CATEGORY: &str = "NoLogCategory";

/// Severity assigned to lines without a recognised level token.
pub const DEFAULT_SEVERITY: Severity = Severity::Log;

// =============================================================================
// Severity
// =============================================================================

/// Log verbosity levels, ordered from most severe to most verbose.
///
/// Declaration order is the canonical rank: `Fatal` is 0, `VeryVerbose` is
/// the last index. The derived `Ord` follows the same order, so
/// `Severity::Error < Severity::Verbose`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub enum Severity {
    Fatal,
    Error,
    Warning,
    Display,
    #[default]
    Log,
    Verbose,
    VeryVerbose,
}

impl Severity {
    /// Returns all variants in canonical order (most severe first).
    pub fn all() -> &'static [Severity] {
        &[
            Severity::Fatal,
            Severity::Error,
            Severity::Warning,
            Severity::Display,
            Severity::Log,
            Severity::Verbose,
            Severity::VeryVerbose,
        ]
    }

    /// Index into the canonical ordering.
    pub fn rank(self) -> usize {
        self as usize
    }

    /// The token as it appears in log lines (`Warning`, `VeryVerbose`, ...).
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Fatal => "Fatal",
            Severity::Error => "Error",
            Severity::Warning => "Warning",
            Severity::Display => "Display",
            Severity::Log => "Log",
            Severity::Verbose => "Verbose",
            Severity::VeryVerbose => "VeryVerbose",
        }
    }

    /// Exact, case-sensitive lookup of a level token.
    pub fn from_label(value: &str) -> Option<Severity> {
        Severity::all().iter().copied().find(|s| s.label() == value)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    /// Case-insensitive parse used for user input (CLI, config).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Severity::all()
            .iter()
            .copied()
            .find(|sev| sev.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                let valid: Vec<&str> = Severity::all().iter().map(|s| s.label()).collect();
                format!("unknown level '{wanted}' (expected one of: {})", valid.join(", "))
            })
    }
}

// =============================================================================
// Parsed entry
// =============================================================================

/// One logical log record: a classified first line plus any continuation
/// lines that followed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedEntry {
    /// Raw text of the first physical line, including any timestamp prefix.
    pub line: String,

    /// Category prefix, or [`NO_LOG_CATEGORY`].
    pub category: String,

    /// Detected severity, or [`DEFAULT_SEVERITY`].
    pub level: Severity,

    /// Continuation lines in document order. Empty for single-line entries.
    pub multiline: Vec<String>,
}

impl ParsedEntry {
    /// Number of physical lines this entry covers.
    pub fn physical_lines(&self) -> usize {
        1 + self.multiline.len()
    }
}

// =============================================================================
// Visible line (output of filtering)
// =============================================================================

/// A single physical line selected for display, tagged with the level of
/// the entry it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisibleLine {
    pub text: String,
    pub level: Severity,
}
