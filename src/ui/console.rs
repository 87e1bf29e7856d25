// LogSieve - ui/console.rs
//
// Plain-text rendering of visible lines and the category table to any
// Write target (stdout in the binary, a buffer in tests).

use crate::core::model::{Severity, VisibleLine};
use crate::core::registry::CategoryRegistry;
use crate::core::settings::CategorySettings;
use crate::ui::theme;
use crate::util::constants::LINE_NUMBER_WIDTH;
use owo_colors::OwoColorize;
use std::io::{self, Write};

/// How visible lines are drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Emit ANSI colour sequences.
    pub colour: bool,
    /// Prefix each line with its 1-based output index.
    pub line_numbers: bool,
}

/// Write `lines` one per row, coloured by level when enabled.
pub fn render_lines<W: Write>(
    lines: &[VisibleLine],
    options: RenderOptions,
    mut out: W,
) -> io::Result<()> {
    for (idx, line) in lines.iter().enumerate() {
        if options.line_numbers {
            write!(out, "{:>width$}: ", idx + 1, width = LINE_NUMBER_WIDTH)?;
        }
        match theme::severity_style(line.level).filter(|_| options.colour) {
            Some(style) => writeln!(out, "{}", line.text.style(style))?,
            None => writeln!(out, "{}", line.text)?,
        }
    }
    out.flush()
}

/// Write the category table: enabled marker, name, minimum level, then
/// every level with those absent from the category de-emphasised.
///
/// `categories` selects and orders the rows (e.g. a search result).
pub fn render_category_table<W: Write>(
    categories: &[&str],
    registry: &CategoryRegistry,
    settings: &CategorySettings,
    colour: bool,
    mut out: W,
) -> io::Result<()> {
    let name_width = categories
        .iter()
        .map(|c| c.chars().count())
        .max()
        .unwrap_or(0)
        .max("CATEGORY".len());

    let header = format!("    {:<name_width$}  {:<11}  LEVELS", "CATEGORY", "MIN LEVEL");
    if colour {
        writeln!(out, "{}", header.style(theme::heading_style()))?;
    } else {
        writeln!(out, "{header}")?;
    }

    for category in categories {
        let Some(setting) = settings.get(category) else {
            continue;
        };
        let marker = if setting.enabled { "[x]" } else { "[ ]" };
        write!(
            out,
            "{marker} {category:<name_width$}  {:<11} ",
            setting.min_level.label()
        )?;

        for level in Severity::all() {
            let present = registry.is_level_present(category, *level);
            match (colour, present) {
                (true, true) => match theme::severity_style(*level) {
                    Some(style) => write!(out, " {}", level.label().style(style))?,
                    None => write!(out, " {}", level.label())?,
                },
                (true, false) => {
                    write!(out, " {}", level.label().style(theme::absent_level_style()))?
                }
                (false, true) => write!(out, " {}", level.label())?,
                (false, false) => write!(out, " ({})", level.label())?,
            }
        }
        writeln!(out)?;
    }
    out.flush()
}
