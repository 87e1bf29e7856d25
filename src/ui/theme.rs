// LogSieve - ui/theme.rs
//
// Severity colour mapping for terminal output.
// No dependencies on app state or business logic.

use crate::core::model::Severity;
use owo_colors::Style;

/// Terminal style for a severity level. `None` means the terminal default.
pub fn severity_style(severity: Severity) -> Option<Style> {
    match severity {
        Severity::Fatal => Some(Style::new().bright_red().bold()),
        Severity::Error => Some(Style::new().red()),
        Severity::Warning => Some(Style::new().yellow()),
        Severity::Display => Some(Style::new().bright_white()),
        Severity::Log => None,
        Severity::Verbose => Some(Style::new().bright_black()),
        Severity::VeryVerbose => Some(Style::new().bright_black().dimmed()),
    }
}

/// Style for the enabled marker and headings in the category table.
pub fn heading_style() -> Style {
    Style::new().bold()
}

/// Style for levels a category never uses.
pub fn absent_level_style() -> Style {
    Style::new().dimmed().strikethrough()
}
