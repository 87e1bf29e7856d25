// LogSieve - core/filter.rs
//
// Per-category visibility filtering of parsed entries.
// Core layer: pure logic, no I/O or UI dependencies. Inputs are borrowed
// and never modified; identical inputs give identical output.

use crate::core::model::{ParsedEntry, Severity, VisibleLine, DEFAULT_SEVERITY};
use crate::core::settings::CategorySettings;

/// Output of a filter pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterResult {
    /// Visible physical lines in document order, continuation lines
    /// directly after their parent.
    pub lines: Vec<VisibleLine>,
    /// Number of entries (logical records) that passed the filter.
    pub visible_entries: usize,
}

/// Whether an entry of `category` at `level` is shown under `settings`.
///
/// Known categories use their own setting: enabled and at least as severe
/// as `min_level`. A category with no setting (settings not yet rebuilt for
/// the current document) is shown when some enabled category would show
/// `Log`-level output.
pub fn is_visible(category: &str, level: Severity, settings: &CategorySettings) -> bool {
    match settings.get(category) {
        Some(setting) => setting.enabled && level.rank() <= setting.min_level.rank(),
        None => fallback_visible(settings),
    }
}

fn fallback_visible(settings: &CategorySettings) -> bool {
    settings
        .iter()
        .any(|(_, s)| s.enabled && s.min_level.rank() >= DEFAULT_SEVERITY.rank())
}

/// Reduce `entries` to the lines visible under `settings`.
///
/// Multiline payloads of visible entries are expanded inline, each line
/// tagged with the parent entry's level. Nothing is reordered, merged or
/// truncated.
pub fn filter_entries(entries: &[ParsedEntry], settings: &CategorySettings) -> FilterResult {
    let mut lines = Vec::new();
    let mut visible_entries = 0usize;

    for entry in entries {
        if !is_visible(&entry.category, entry.level, settings) {
            continue;
        }
        visible_entries += 1;
        lines.push(VisibleLine {
            text: entry.line.clone(),
            level: entry.level,
        });
        lines.extend(entry.multiline.iter().map(|text| VisibleLine {
            text: text.clone(),
            level: entry.level,
        }));
    }

    tracing::debug!(
        entries = entries.len(),
        visible_entries,
        visible_lines = lines.len(),
        "Filter applied"
    );

    FilterResult {
        lines,
        visible_entries,
    }
}
